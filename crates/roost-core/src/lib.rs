// roost-core: Communication-status data layer between roost-api and consumers.
//
// Normalizes raw backend records into a canonical domain model, derives the
// machine → application → daemon/channel status tree, and holds the latest
// snapshot reactively for dashboards.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod naming;
pub mod store;
pub mod stream;
pub mod tree;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::MonitorConfig;
pub use convert::apps_from_json;
pub use error::CoreError;
pub use naming::display_name;
pub use store::{SnapshotDebouncer, StatusStore};
pub use stream::{AppFilter, NodeFilter, SnapshotStream};
pub use tree::{ChannelName, NodeData, NodeIcon, NodeKind, StatusNode, build_tree};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Core identity
    AppId, DaemonId, MachineId,
    // Applications and daemons
    AccessPoint, App, AppDetails, Bind9Daemon, Bind9Details, KeaDaemon, KeaDetails, MachineRef,
    // Health classification
    CommSeverity,
};
