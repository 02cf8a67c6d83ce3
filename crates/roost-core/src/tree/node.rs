// ── Status tree node types ──
//
// Output contract of the aggregation engine. The serialized form is consumed
// directly by a generic tree-view widget, so every serde rename here is part
// of the contract: `type`, `styleClass`, camelCase counter keys, `children`
// omitted (not empty) on leaves.

use serde::Serialize;

use crate::model::{
    App, AppId, Bind9Daemon, CommSeverity, DaemonId, KeaDaemon, MachineId, MachineRef,
};
use crate::naming::display_name;

/// Icon shown next to a node, as the widget's CSS class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeIcon {
    Server,
    Sitemap,
    Link,
}

/// Node discriminator used by the widget to pick a row template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Machine,
    Kea,
    KeaDaemon,
    Bind9Channel,
}

/// BIND9 communication path represented by a channel leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelName {
    Control,
    Statistics,
}

impl ChannelName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Control => "Control",
            Self::Statistics => "Statistics",
        }
    }
}

/// One node of the communication-status tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusNode {
    pub icon: NodeIcon,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(rename = "styleClass")]
    pub severity: CommSeverity,
    /// Produced trees always render open.
    pub expanded: bool,
    /// Present (possibly empty) on machine and application nodes, absent on
    /// daemon/channel leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<StatusNode>>,
    pub data: NodeData,
}

impl StatusNode {
    /// Root node for a machine, created lazily on first reference.
    /// Starts out healthy; escalation happens as daemons are walked.
    pub(crate) fn machine(machine: &MachineRef) -> Self {
        Self {
            icon: NodeIcon::Server,
            kind: NodeKind::Machine,
            severity: CommSeverity::classify(true, None),
            expanded: true,
            children: Some(Vec::new()),
            data: NodeData::Machine(MachineNodeData {
                attrs: MachineAttrs {
                    id: machine.id,
                    address: machine.address.clone(),
                },
                agent_comm_errors: None,
            }),
        }
    }

    /// Intermediate node representing a Kea application through its
    /// Control Agent.
    pub(crate) fn kea_app(app: &App, ca: &KeaDaemon) -> Self {
        Self {
            icon: NodeIcon::Sitemap,
            kind: NodeKind::Kea,
            severity: CommSeverity::classify(true, ca.ca_comm_errors),
            expanded: true,
            children: Some(Vec::new()),
            data: NodeData::KeaApp(KeaAppNodeData {
                attrs: AppAttrs {
                    id: app.id,
                    app_type: app.details.type_label().to_owned(),
                    name: app.name.clone(),
                },
                ca_comm_errors: ca.ca_comm_errors,
            }),
        }
    }

    /// Leaf for a Kea daemon behind the Control Agent.
    pub(crate) fn kea_daemon(app_id: AppId, daemon: &KeaDaemon) -> Self {
        Self {
            icon: NodeIcon::Link,
            kind: NodeKind::KeaDaemon,
            severity: CommSeverity::classify(daemon.monitored, daemon.daemon_comm_errors),
            expanded: true,
            children: None,
            data: NodeData::KeaDaemon(KeaDaemonNodeData {
                attrs: DaemonAttrs {
                    id: daemon.id,
                    app_type: "kea".to_owned(),
                    app_id,
                    name: display_name(daemon.name.as_deref().unwrap_or_default()),
                },
                daemon_comm_errors: daemon.daemon_comm_errors,
                monitored: daemon.monitored,
            }),
        }
    }

    /// Leaf for one of the two BIND9 communication channels.
    pub(crate) fn bind9_channel(app_id: AppId, daemon: &Bind9Daemon, channel: ChannelName) -> Self {
        let errors = match channel {
            ChannelName::Control => daemon.rndc_comm_errors,
            ChannelName::Statistics => daemon.stats_comm_errors,
        };
        Self {
            icon: NodeIcon::Link,
            kind: NodeKind::Bind9Channel,
            severity: CommSeverity::classify(daemon.monitored, errors),
            expanded: true,
            children: None,
            data: NodeData::Bind9Channel(Bind9ChannelNodeData {
                channel_name: channel,
                attrs: DaemonAttrs {
                    id: daemon.id,
                    app_type: "bind9".to_owned(),
                    app_id,
                    name: display_name(daemon.name.as_deref().unwrap_or_default()),
                },
                channel_comm_errors: errors,
                monitored: daemon.monitored,
            }),
        }
    }

    pub(crate) fn push_child(&mut self, child: StatusNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Child nodes, empty for leaves.
    pub fn child_nodes(&self) -> &[StatusNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

// ── Node annotation bags ─────────────────────────────────────────────
// Forwarded opaquely to the widget's row templates; typed here so the
// builder cannot emit a malformed bag.

/// Per-kind annotation payload, serialized untagged into the bag shape the
/// row templates expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeData {
    Machine(MachineNodeData),
    KeaApp(KeaAppNodeData),
    KeaDaemon(KeaDaemonNodeData),
    Bind9Channel(Bind9ChannelNodeData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineNodeData {
    pub attrs: MachineAttrs,
    /// Recorded only when a daemon under this machine reported agent errors.
    #[serde(rename = "agentCommErrors", skip_serializing_if = "Option::is_none")]
    pub agent_comm_errors: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineAttrs {
    pub id: MachineId,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeaAppNodeData {
    pub attrs: AppAttrs,
    #[serde(rename = "caCommErrors", skip_serializing_if = "Option::is_none")]
    pub ca_comm_errors: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppAttrs {
    pub id: AppId,
    #[serde(rename = "type")]
    pub app_type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeaDaemonNodeData {
    pub attrs: DaemonAttrs,
    #[serde(rename = "daemonCommErrors", skip_serializing_if = "Option::is_none")]
    pub daemon_comm_errors: Option<i64>,
    pub monitored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bind9ChannelNodeData {
    #[serde(rename = "channelName")]
    pub channel_name: ChannelName,
    pub attrs: DaemonAttrs,
    #[serde(rename = "channelCommErrors", skip_serializing_if = "Option::is_none")]
    pub channel_comm_errors: Option<i64>,
    pub monitored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaemonAttrs {
    pub id: DaemonId,
    #[serde(rename = "appType")]
    pub app_type: String,
    #[serde(rename = "appId")]
    pub app_id: AppId,
    pub name: String,
}
