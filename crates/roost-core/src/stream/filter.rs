// ── Filter predicates for snapshot streams ──
//
// Used by dashboards to narrow snapshots without re-querying the backend,
// and to keep table filters in sync with the status view.

use crate::model::{App, AppDetails, CommSeverity, MachineId};
use crate::tree::StatusNode;

/// Filter predicate for application snapshots.
pub enum AppFilter {
    All,
    Kea,
    Bind9,
    ByMachine(MachineId),
    /// Applications with a positive error counter on any channel.
    WithCommIssues,
    Custom(Box<dyn Fn(&App) -> bool + Send + Sync>),
}

impl AppFilter {
    pub fn matches(&self, app: &App) -> bool {
        match self {
            Self::All => true,
            Self::Kea => matches!(app.details, AppDetails::Kea(_)),
            Self::Bind9 => matches!(app.details, AppDetails::Bind9(_)),
            Self::ByMachine(id) => app.machine.id == *id,
            Self::WithCommIssues => app.has_comm_issues(),
            Self::Custom(f) => f(app),
        }
    }
}

/// Filter predicate for status-tree nodes.
pub enum NodeFilter {
    Any,
    BySeverity(CommSeverity),
    /// Nodes that are failing themselves or house a failing descendant.
    Failing,
    Custom(Box<dyn Fn(&StatusNode) -> bool + Send + Sync>),
}

impl NodeFilter {
    pub fn matches(&self, node: &StatusNode) -> bool {
        match self {
            Self::Any => true,
            Self::BySeverity(severity) => node.severity == *severity,
            Self::Failing => {
                node.severity.is_failing() || node.child_nodes().iter().any(|n| self.matches(n))
            }
            Self::Custom(f) => f(node),
        }
    }
}
