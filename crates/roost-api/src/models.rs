// Backend API response types
//
// Models for the monitoring backend's JSON API. List endpoints wrap their
// payload in the `PagedResponse<T>` envelope. Fields use `#[serde(default)]`
// liberally because agents report partial data whenever communication with a
// daemon is degraded — which is exactly the situation being monitored.

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard list envelope from the backend.
///
/// ```json
/// { "items": [...], "total": 42 }
/// ```
///
/// `total` counts the full result set across pages; consumers of the
/// communication-status feed operate on whatever `items` they are given.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

// ── Application ──────────────────────────────────────────────────────

/// Monitored application from `GET /apps` and the communication-issues feed.
///
/// `type` is `"kea"` or `"bind9"` for supported applications; other values
/// pass through untouched and are ignored downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawApp {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub app_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "accessPoints", default)]
    pub access_points: Vec<RawAccessPoint>,
    pub machine: RawMachine,
    #[serde(default)]
    pub details: RawAppDetails,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Machine reference embedded in every application record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMachine {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hostname: Option<String>,
}

/// Access point the agent uses to reach the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAccessPoint {
    #[serde(rename = "type", default)]
    pub ap_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub port: i64,
}

// ── Application details ──────────────────────────────────────────────

/// Nested daemon state, shaped differently per application type.
///
/// Kea reports a `daemons` array; BIND9 reports a singular `daemon` and may
/// additionally send an empty `daemons` array alongside it. Both keys are
/// modeled here exactly as they appear on the wire; normalization into a
/// proper union happens in `roost-core`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAppDetails {
    #[serde(default)]
    pub daemons: Vec<RawDaemon>,
    #[serde(default)]
    pub daemon: Option<RawDaemon>,
}

/// Daemon record nested inside application details.
///
/// Carries the superset of per-type counter fields; which ones are meaningful
/// depends on the owning application type. Absent counters stay `None` — the
/// backend omits a counter when the agent never attempted that channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDaemon {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub monitored: Option<bool>,
    /// Errors communicating with the per-machine agent.
    #[serde(rename = "agentCommErrors", default)]
    pub agent_comm_errors: Option<i64>,
    /// Errors communicating with the Kea Control Agent.
    #[serde(rename = "caCommErrors", default)]
    pub ca_comm_errors: Option<i64>,
    /// Errors communicating with a Kea daemon behind the Control Agent.
    #[serde(rename = "daemonCommErrors", default)]
    pub daemon_comm_errors: Option<i64>,
    /// Errors on the BIND9 RNDC control channel.
    #[serde(rename = "rndcCommErrors", default)]
    pub rndc_comm_errors: Option<i64>,
    /// Errors on the BIND9 statistics channel.
    #[serde(rename = "statsCommErrors", default)]
    pub stats_comm_errors: Option<i64>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Decode helpers ───────────────────────────────────────────────────

/// Decode a paginated applications payload.
pub fn decode_apps_page(body: &str) -> Result<PagedResponse<RawApp>, Error> {
    serde_json::from_str(body).map_err(|e| Error::deserialization(&e, body))
}

/// Decode a bare applications array (some feeds skip the envelope).
pub fn decode_apps(body: &str) -> Result<Vec<RawApp>, Error> {
    serde_json::from_str(body).map_err(|e| Error::deserialization(&e, body))
}
