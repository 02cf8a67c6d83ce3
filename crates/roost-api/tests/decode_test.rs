// Decode tests for the backend payload models using serde_json fixtures.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;

use roost_api::{Error, decode_apps, decode_apps_page};

// ── Happy-path tests ────────────────────────────────────────────────

#[test]
fn test_decode_kea_app_page() {
    let body = json!({
        "items": [
            {
                "id": 7,
                "type": "kea",
                "name": "kea@agent1",
                "accessPoints": [
                    { "type": "control", "address": "192.0.2.10", "port": 8000 }
                ],
                "machine": { "id": 3, "address": "192.0.2.10", "hostname": "agent1" },
                "details": {
                    "daemons": [
                        { "id": 1, "name": "ca", "monitored": true, "agentCommErrors": 1, "caCommErrors": 0 },
                        { "id": 2, "name": "dhcp4", "monitored": true, "daemonCommErrors": 2 }
                    ]
                }
            }
        ],
        "total": 1
    })
    .to_string();

    let page = decode_apps_page(&body).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);

    let app = &page.items[0];
    assert_eq!(app.app_type, "kea");
    assert_eq!(app.machine.hostname.as_deref(), Some("agent1"));
    assert_eq!(app.access_points[0].port, 8000);
    assert_eq!(app.details.daemons.len(), 2);
    assert_eq!(app.details.daemons[0].agent_comm_errors, Some(1));
    // Absent counters must stay absent, not become zero.
    assert_eq!(app.details.daemons[0].daemon_comm_errors, None);
    assert_eq!(app.details.daemons[1].daemon_comm_errors, Some(2));
    assert!(app.details.daemon.is_none());
}

#[test]
fn test_decode_bind9_app_with_stray_daemons_array() {
    // BIND9 records carry a singular `daemon`, sometimes next to an empty
    // `daemons` array. Both keys must decode side by side.
    let body = json!([
        {
            "id": 9,
            "type": "bind9",
            "name": "bind9@agent2",
            "machine": { "id": 4, "address": "192.0.2.11" },
            "details": {
                "daemons": [],
                "daemon": {
                    "id": 5,
                    "name": "named",
                    "monitored": true,
                    "rndcCommErrors": 3,
                    "statsCommErrors": 0
                }
            }
        }
    ])
    .to_string();

    let apps = decode_apps(&body).unwrap();
    assert_eq!(apps.len(), 1);

    let daemon = apps[0].details.daemon.as_ref().unwrap();
    assert_eq!(daemon.name.as_deref(), Some("named"));
    assert_eq!(daemon.rndc_comm_errors, Some(3));
    assert_eq!(daemon.stats_comm_errors, Some(0));
    assert_eq!(apps[0].machine.hostname, None);
}

#[test]
fn test_unknown_fields_land_in_extra() {
    let body = json!({
        "items": [
            {
                "id": 1,
                "type": "kea",
                "name": "kea@x",
                "machine": { "id": 1, "address": "10.0.0.1" },
                "details": { "daemons": [] },
                "version": "2.4.1",
                "meta": { "region": "eu" }
            }
        ],
        "total": 1
    })
    .to_string();

    let page = decode_apps_page(&body).unwrap();
    let app = &page.items[0];
    assert_eq!(app.extra.get("version").unwrap(), "2.4.1");
    assert!(app.extra.contains_key("meta"));
}

#[test]
fn test_missing_envelope_fields_default() {
    let page = decode_apps_page("{}").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

// ── Error-path tests ────────────────────────────────────────────────

#[test]
fn test_malformed_payload_reports_body() {
    let err = decode_apps_page("{ not json").unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "{ not json"),
    }
}
