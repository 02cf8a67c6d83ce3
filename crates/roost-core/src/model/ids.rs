// ── Core identity types ──
//
// The backend keys every entity with a numeric database id. Wrapping them in
// distinct newtypes keeps machine, application, and daemon ids from being
// mixed up at call sites; serde sees plain numbers either way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a monitored application (a Kea or BIND9 install).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub i64);

impl AppId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AppId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Identifier of a machine running the per-host agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(pub i64);

impl MachineId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MachineId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Identifier of a daemon process within an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaemonId(pub i64);

impl DaemonId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DaemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DaemonId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn id_display_is_bare_number() {
        assert_eq!(DaemonId::from(42).to_string(), "42");
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&MachineId::from(3)).unwrap();
        assert_eq!(json, "3");
        let back: MachineId = serde_json::from_str("3").unwrap();
        assert_eq!(back, MachineId::from(3));
    }
}
