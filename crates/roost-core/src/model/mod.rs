// ── Unified domain model ──
//
// Every type in this module is the canonical representation of a monitored
// entity. The raw wire records from `roost-api` are normalized into these
// via `crate::convert`; consumers (the tree builder, stores, dashboards)
// depend only on this module.

pub mod app;
pub mod ids;
pub mod severity;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use roost_core::model::*` gives you everything.

// Core identity
pub use ids::{AppId, DaemonId, MachineId};

// Applications and daemons
pub use app::{
    AccessPoint, App, AppDetails, Bind9Daemon, Bind9Details, KeaDaemon, KeaDetails, MachineRef,
};

// Health classification
pub use severity::CommSeverity;
