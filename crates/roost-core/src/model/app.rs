// ── Application domain types ──
//
// Canonical representation of a monitored application. The wire format
// duck-types the `details` payload (Kea sends a `daemons` array, BIND9 a
// singular `daemon`); here that becomes a proper tagged union so every
// consumer dispatches with a `match` instead of probing fields.

use serde::{Deserialize, Serialize};

use super::ids::{AppId, DaemonId, MachineId};

/// Machine reference carried by every application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineRef {
    pub id: MachineId,
    /// Address the agent is reachable at (IP or DNS name).
    pub address: String,
    pub hostname: Option<String>,
}

/// Access point the agent uses to reach the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub kind: String,
    pub address: String,
    pub port: i64,
}

/// The canonical monitored-application type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub machine: MachineRef,
    pub access_points: Vec<AccessPoint>,
    pub details: AppDetails,
}

impl App {
    /// True if any daemon under this application reports a positive
    /// communication-error counter on any channel.
    pub fn has_comm_issues(&self) -> bool {
        match &self.details {
            AppDetails::Kea(details) => details.daemons.iter().any(KeaDaemon::has_comm_issues),
            AppDetails::Bind9(details) => details
                .daemon
                .as_ref()
                .is_some_and(Bind9Daemon::has_comm_issues),
            AppDetails::Other(_) => false,
        }
    }
}

/// Per-type application state, discriminated by the backend's `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppDetails {
    Kea(KeaDetails),
    Bind9(Bind9Details),
    /// Application type this engine does not aggregate. Still anchors
    /// machine-node creation, but yields no sub-nodes.
    Other(String),
}

impl AppDetails {
    /// The backend's `type` string for this application.
    pub fn type_label(&self) -> &str {
        match self {
            Self::Kea(_) => "kea",
            Self::Bind9(_) => "bind9",
            Self::Other(label) => label,
        }
    }
}

/// Kea state: the Control Agent plus the daemons it fronts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeaDetails {
    pub daemons: Vec<KeaDaemon>,
}

/// A daemon within a Kea application (`ca`, `dhcp4`, `dhcp6`, `d2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeaDaemon {
    pub id: DaemonId,
    pub name: Option<String>,
    pub active: bool,
    pub monitored: bool,
    /// Errors reaching the per-machine agent.
    pub agent_comm_errors: Option<i64>,
    /// Errors reaching the Control Agent (meaningful on the CA daemon).
    pub ca_comm_errors: Option<i64>,
    /// Errors reaching this daemon through the Control Agent.
    pub daemon_comm_errors: Option<i64>,
}

impl KeaDaemon {
    /// Whether this daemon is the Control Agent fronting the others.
    ///
    /// Older agents report the CA with an empty or missing name; newer ones
    /// name it `"ca"`. Both forms identify the same daemon.
    pub fn is_control_agent(&self) -> bool {
        match self.name.as_deref() {
            None => true,
            Some(name) => name.is_empty() || name == "ca",
        }
    }

    pub fn has_comm_issues(&self) -> bool {
        positive(self.agent_comm_errors)
            || positive(self.ca_comm_errors)
            || positive(self.daemon_comm_errors)
    }
}

/// BIND9 state: the singular `named` daemon, when the agent could report it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bind9Details {
    pub daemon: Option<Bind9Daemon>,
}

/// The `named` daemon of a BIND9 application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bind9Daemon {
    pub id: DaemonId,
    pub name: Option<String>,
    pub active: bool,
    pub monitored: bool,
    /// Errors reaching the per-machine agent.
    pub agent_comm_errors: Option<i64>,
    /// Errors on the RNDC control channel.
    pub rndc_comm_errors: Option<i64>,
    /// Errors on the statistics channel.
    pub stats_comm_errors: Option<i64>,
}

impl Bind9Daemon {
    pub fn has_comm_issues(&self) -> bool {
        positive(self.agent_comm_errors)
            || positive(self.rndc_comm_errors)
            || positive(self.stats_comm_errors)
    }
}

fn positive(counter: Option<i64>) -> bool {
    counter.unwrap_or(0) > 0
}
