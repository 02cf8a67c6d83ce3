// ── Reactive snapshot storage ──

mod debounce;
mod status_store;

pub use debounce::SnapshotDebouncer;
pub use status_store::StatusStore;
