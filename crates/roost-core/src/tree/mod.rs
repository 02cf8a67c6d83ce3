// ── Communication status tree ──
//
// The aggregation engine: a flat application snapshot in, a machine →
// application → daemon/channel tree with per-node health out.

mod builder;
mod node;

pub use builder::build_tree;
pub use node::{
    AppAttrs, Bind9ChannelNodeData, ChannelName, DaemonAttrs, KeaAppNodeData, KeaDaemonNodeData,
    MachineAttrs, MachineNodeData, NodeData, NodeIcon, NodeKind, StatusNode,
};
