// End-to-end: backend JSON payload → domain records → status tree.
//
// Exercises the same fixture shape the dashboard renders: one machine with a
// Kea app (Control Agent + DHCPv4) and a BIND9 app, a second machine with an
// unmonitored DDNS daemon, and a third machine running an unsupported app.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;

use roost_core::{
    CommSeverity, NodeData, NodeKind, StatusNode, apps_from_json, build_tree,
};

fn fixture() -> String {
    json!({
        "items": [
            {
                "id": 1,
                "type": "kea",
                "name": "kea@agent1",
                "accessPoints": [
                    { "type": "control", "address": "192.0.2.1", "port": 8000 }
                ],
                "machine": { "id": 1, "address": "192.0.2.1", "hostname": "agent1" },
                "details": {
                    "daemons": [
                        {
                            "id": 1,
                            "name": "ca",
                            "monitored": true,
                            "agentCommErrors": 1,
                            "caCommErrors": 0
                        },
                        {
                            "id": 2,
                            "name": "dhcp4",
                            "monitored": true,
                            "agentCommErrors": 0,
                            "daemonCommErrors": 0
                        }
                    ]
                }
            },
            {
                "id": 2,
                "type": "bind9",
                "name": "bind9@agent1",
                "machine": { "id": 1, "address": "192.0.2.1", "hostname": "agent1" },
                "details": {
                    "daemon": {
                        "id": 3,
                        "name": "named",
                        "monitored": true,
                        "rndcCommErrors": 0
                    }
                }
            },
            {
                "id": 3,
                "type": "kea",
                "name": "kea@agent2",
                "machine": { "id": 2, "address": "192.0.2.2", "hostname": "agent2" },
                "details": {
                    "daemons": [
                        { "id": 4, "name": "ca", "monitored": true },
                        {
                            "id": 5,
                            "name": "d2",
                            "monitored": false,
                            "daemonCommErrors": 2
                        }
                    ]
                }
            },
            {
                "id": 4,
                "type": "pdns",
                "name": "pdns@agent3",
                "machine": { "id": 3, "address": "192.0.2.3", "hostname": "agent3" },
                "details": {}
            }
        ],
        "total": 4
    })
    .to_string()
}

fn build_fixture_tree() -> Vec<StatusNode> {
    let apps = apps_from_json(&fixture()).unwrap();
    build_tree(&apps)
}

#[test]
fn machine_grouping_matches_distinct_machines() {
    let tree = build_fixture_tree();
    assert_eq!(tree.len(), 3);
    assert!(tree.iter().all(|n| n.kind == NodeKind::Machine));
}

#[test]
fn first_machine_aggregates_kea_and_bind9() {
    let tree = build_fixture_tree();
    let machine = &tree[0];

    // Escalated by the CA daemon's single agent error, even though the
    // dhcp4 daemon reports a clean agent channel afterwards.
    assert_eq!(machine.severity, CommSeverity::Failing);

    let children = machine.child_nodes();
    assert_eq!(children.len(), 3);

    // Kea intermediate node: healthy CA channel, DHCPv4 leaf below it.
    assert_eq!(children[0].kind, NodeKind::Kea);
    assert_eq!(children[0].severity, CommSeverity::Ok);
    let leaf = &children[0].child_nodes()[0];
    match &leaf.data {
        NodeData::KeaDaemon(data) => {
            assert_eq!(data.attrs.name, "DHCPv4");
            assert!(data.monitored);
        }
        other => panic!("expected kea daemon data, got {other:?}"),
    }

    // BIND9 channels in fixed order.
    assert_eq!(children[1].kind, NodeKind::Bind9Channel);
    assert_eq!(children[2].kind, NodeKind::Bind9Channel);
    let names: Vec<&str> = children[1..]
        .iter()
        .map(|n| match &n.data {
            NodeData::Bind9Channel(data) => data.channel_name.as_str(),
            other => panic!("expected channel data, got {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["Control", "Statistics"]);
}

#[test]
fn unmonitored_daemon_is_disabled_over_failing() {
    let tree = build_fixture_tree();
    let machine = &tree[1];
    assert_eq!(machine.severity, CommSeverity::Ok);

    // d2 carries daemon errors but is not monitored: disabled wins.
    let app_node = &machine.child_nodes()[0];
    let d2 = &app_node.child_nodes()[0];
    assert_eq!(d2.severity, CommSeverity::Disabled);
    match &d2.data {
        NodeData::KeaDaemon(data) => {
            assert_eq!(data.attrs.name, "DDNS");
            assert_eq!(data.daemon_comm_errors, Some(2));
            assert!(!data.monitored);
        }
        other => panic!("expected kea daemon data, got {other:?}"),
    }
}

#[test]
fn unsupported_app_leaves_machine_bare() {
    let tree = build_fixture_tree();
    let machine = &tree[2];
    assert_eq!(machine.severity, CommSeverity::Ok);
    assert!(machine.child_nodes().is_empty());
}

#[test]
fn rebuild_from_equal_input_is_deep_equal() {
    assert_eq!(build_fixture_tree(), build_fixture_tree());
}

#[test]
fn serialized_tree_speaks_the_widget_contract() {
    let tree = build_fixture_tree();
    let root = serde_json::to_value(&tree[0]).unwrap();

    assert_eq!(root["icon"], "server");
    assert_eq!(root["type"], "machine");
    assert_eq!(root["styleClass"], "communication-failing");
    assert_eq!(root["expanded"], true);
    assert_eq!(root["data"]["attrs"]["id"], 1);
    assert_eq!(root["data"]["attrs"]["address"], "192.0.2.1");
    assert_eq!(root["data"]["agentCommErrors"], 1);

    let kea = &root["children"][0];
    assert_eq!(kea["icon"], "sitemap");
    assert_eq!(kea["type"], "kea");
    assert_eq!(kea["styleClass"], "communication-ok");
    assert_eq!(kea["data"]["attrs"]["type"], "kea");
    assert_eq!(kea["data"]["caCommErrors"], 0);

    let dhcp4 = &kea["children"][0];
    assert_eq!(dhcp4["icon"], "link");
    assert_eq!(dhcp4["type"], "kea-daemon");
    assert_eq!(dhcp4["data"]["attrs"]["appType"], "kea");
    assert_eq!(dhcp4["data"]["attrs"]["appId"], 1);
    assert_eq!(dhcp4["data"]["attrs"]["name"], "DHCPv4");
    // Leaves carry no children key at all, not an empty array.
    assert!(dhcp4.get("children").is_none());

    let control = &root["children"][1];
    assert_eq!(control["type"], "bind9-channel");
    assert_eq!(control["data"]["channelName"], "Control");
    assert_eq!(control["data"]["channelCommErrors"], 0);

    // Counters the agent never reported stay absent from the bag.
    let stats = &root["children"][2];
    assert_eq!(stats["data"]["channelName"], "Statistics");
    assert_eq!(stats["data"]["monitored"], true);
    assert!(stats["data"].get("channelCommErrors").is_none());
}
