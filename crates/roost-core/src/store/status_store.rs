// ── Central reactive snapshot store ──
//
// Holds the latest application snapshot and the status tree derived from
// it. Snapshots are applied wholesale — the tree is rebuilt from scratch on
// every refresh and the previous one is simply superseded. Mutations are
// broadcast to subscribers via `watch` channels.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use crate::config::MonitorConfig;
use crate::model::App;
use crate::stream::SnapshotStream;
use crate::tree::{StatusNode, build_tree};

/// Reactive store for the communication-status view.
///
/// Thread-safe: writes go through `watch` senders, reads are cheap `Arc`
/// clones of the current snapshot.
pub struct StatusStore {
    apps: watch::Sender<Arc<Vec<App>>>,
    tree: watch::Sender<Arc<Vec<StatusNode>>>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl StatusStore {
    pub fn new() -> Self {
        let (apps, _) = watch::channel(Arc::new(Vec::new()));
        let (tree, _) = watch::channel(Arc::new(Vec::new()));
        let (last_refresh, _) = watch::channel(None);

        Self {
            apps,
            tree,
            last_refresh,
        }
    }

    /// Apply a full application snapshot.
    ///
    /// Rebuilds the status tree wholesale and broadcasts both the raw
    /// snapshot and the derived tree to subscribers.
    pub fn apply_snapshot(&self, apps: Vec<App>) {
        let tree = build_tree(&apps);

        debug!(
            apps = apps.len(),
            machines = tree.len(),
            "communication snapshot applied"
        );

        // `send_modify` updates unconditionally, even with zero receivers.
        self.apps.send_modify(|current| *current = Arc::new(apps));
        self.tree.send_modify(|current| *current = Arc::new(tree));
        let _ = self.last_refresh.send(Some(Utc::now()));
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn apps_snapshot(&self) -> Arc<Vec<App>> {
        self.apps.borrow().clone()
    }

    pub fn tree_snapshot(&self) -> Arc<Vec<StatusNode>> {
        self.tree.borrow().clone()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_apps(&self) -> SnapshotStream<App> {
        SnapshotStream::new(self.apps.subscribe())
    }

    pub fn subscribe_tree(&self) -> SnapshotStream<StatusNode> {
        SnapshotStream::new(self.tree.subscribe())
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// How long ago the last snapshot was applied, or `None` if never.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }

    /// Whether the held snapshot is older than the configured threshold.
    pub fn is_stale(&self, config: &MonitorConfig) -> bool {
        match self.data_age() {
            Some(age) => age.to_std().is_ok_and(|age| age > config.stale_after),
            None => true,
        }
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{AppDetails, AppId, MachineId, MachineRef};

    use super::*;

    fn app(id: i64, machine_id: i64) -> App {
        App {
            id: AppId::from(id),
            name: format!("app{id}"),
            machine: MachineRef {
                id: MachineId::from(machine_id),
                address: format!("10.0.0.{machine_id}"),
                hostname: None,
            },
            access_points: Vec::new(),
            details: AppDetails::Other("test".to_owned()),
        }
    }

    #[test]
    fn apply_snapshot_rebuilds_tree() {
        let store = StatusStore::new();
        assert!(store.tree_snapshot().is_empty());
        assert!(store.last_refresh().is_none());

        store.apply_snapshot(vec![app(1, 1), app(2, 2)]);
        assert_eq!(store.apps_snapshot().len(), 2);
        assert_eq!(store.tree_snapshot().len(), 2);
        assert!(store.last_refresh().is_some());
    }

    #[test]
    fn later_snapshot_supersedes_earlier() {
        let store = StatusStore::new();
        store.apply_snapshot(vec![app(1, 1), app(2, 2)]);
        store.apply_snapshot(vec![app(3, 3)]);

        assert_eq!(store.tree_snapshot().len(), 1);
    }

    #[test]
    fn store_with_no_snapshot_is_stale() {
        let store = StatusStore::new();
        assert!(store.is_stale(&MonitorConfig::default()));

        store.apply_snapshot(Vec::new());
        assert!(!store.is_stale(&MonitorConfig::default()));
    }

    #[tokio::test]
    async fn subscribers_see_applied_snapshots() {
        let store = StatusStore::new();
        let mut stream = store.subscribe_tree();
        assert!(stream.current().is_empty());

        store.apply_snapshot(vec![app(1, 1)]);

        let snapshot = stream.changed().await.expect("store is alive");
        assert_eq!(snapshot.len(), 1);
    }
}
