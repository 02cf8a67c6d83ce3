// ── Status tree construction ──
//
// Single forward pass over the flat application list. Machine roots are
// created lazily and reused through a `MachineId -> index` map; the output
// vec preserves first-seen order. All node mutation is confined to the
// builder — callers only ever see the finished tree.

use std::collections::HashMap;

use crate::model::{App, AppDetails, Bind9Details, CommSeverity, KeaDetails, MachineId, MachineRef};

use super::node::{ChannelName, NodeData, StatusNode};

/// Build the machine → application → daemon/channel status tree.
///
/// Pure and total: the tree is rebuilt wholesale from the given snapshot,
/// and partial or malformed records degrade to "nothing produced" for the
/// affected application rather than failing the build.
pub fn build_tree(apps: &[App]) -> Vec<StatusNode> {
    let mut builder = TreeBuilder::default();
    for app in apps {
        builder.add_app(app);
    }
    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    /// Machine root nodes in first-seen order.
    roots: Vec<StatusNode>,
    /// O(1) lookup from machine id into `roots`.
    by_machine: HashMap<MachineId, usize>,
}

impl TreeBuilder {
    fn add_app(&mut self, app: &App) {
        // The machine root exists for every supported *and* unsupported
        // application type; only the sub-nodes depend on the type.
        let machine_idx = self.machine_index(&app.machine);

        match &app.details {
            AppDetails::Kea(details) => self.add_kea(machine_idx, app, details),
            AppDetails::Bind9(details) => self.add_bind9(machine_idx, app, details),
            AppDetails::Other(_) => {}
        }
    }

    fn finish(self) -> Vec<StatusNode> {
        self.roots
    }

    /// Look up or lazily create the root node for a machine.
    fn machine_index(&mut self, machine: &MachineRef) -> usize {
        if let Some(&idx) = self.by_machine.get(&machine.id) {
            return idx;
        }
        self.roots.push(StatusNode::machine(machine));
        let idx = self.roots.len() - 1;
        self.by_machine.insert(machine.id, idx);
        idx
    }

    fn add_kea(&mut self, machine_idx: usize, app: &App, details: &KeaDetails) {
        // Any daemon of the app can carry agent errors against the machine.
        for daemon in &details.daemons {
            self.escalate_machine(machine_idx, daemon.agent_comm_errors);
        }

        let control_agent = details.daemons.iter().find(|d| d.is_control_agent());

        let leaves: Vec<StatusNode> = details
            .daemons
            .iter()
            .filter(|d| !d.is_control_agent())
            .map(|d| StatusNode::kea_daemon(app.id, d))
            .collect();

        let Some(machine) = self.roots.get_mut(machine_idx) else {
            return;
        };

        if let Some(ca) = control_agent {
            // The CA becomes an intermediate node fronting its siblings;
            // no separate leaf is emitted for the CA itself.
            let mut app_node = StatusNode::kea_app(app, ca);
            for leaf in leaves {
                app_node.push_child(leaf);
            }
            machine.push_child(app_node);
        } else {
            // No Control Agent reported — only seen with malformed agent
            // data. The daemons hang off the machine node directly.
            for leaf in leaves {
                machine.push_child(leaf);
            }
        }
    }

    fn add_bind9(&mut self, machine_idx: usize, app: &App, details: &Bind9Details) {
        // A BIND9 record without daemon state contributes nothing beyond
        // the machine root itself.
        let Some(daemon) = &details.daemon else {
            return;
        };

        self.escalate_machine(machine_idx, daemon.agent_comm_errors);

        let Some(machine) = self.roots.get_mut(machine_idx) else {
            return;
        };
        machine.push_child(StatusNode::bind9_channel(
            app.id,
            daemon,
            ChannelName::Control,
        ));
        machine.push_child(StatusNode::bind9_channel(
            app.id,
            daemon,
            ChannelName::Statistics,
        ));
    }

    /// One-directional severity upgrade of a machine root.
    ///
    /// A positive agent error count marks the whole machine failing and is
    /// recorded on its annotation bag. Zero or absent counts leave the node
    /// untouched — a later healthy daemon never clears an earlier failure.
    fn escalate_machine(&mut self, machine_idx: usize, agent_comm_errors: Option<i64>) {
        if agent_comm_errors.unwrap_or(0) <= 0 {
            return;
        }
        let Some(machine) = self.roots.get_mut(machine_idx) else {
            return;
        };
        machine.severity = CommSeverity::classify(true, agent_comm_errors);
        if let NodeData::Machine(data) = &mut machine.data {
            data.agent_comm_errors = agent_comm_errors;
        }
    }
}
