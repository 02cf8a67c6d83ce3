// ── API-to-domain type conversions ──
//
// Bridges raw `roost_api` response types into canonical `roost_core::model`
// domain types. The raw `details` payload is duck-typed (both a `daemons`
// array and a singular `daemon` key may be present); the application's
// `type` string decides which shape is authoritative and everything else
// is dropped here, once, so downstream code can pattern-match.

use roost_api::models::{RawAccessPoint, RawApp, RawAppDetails, RawDaemon};

use crate::error::CoreError;
use crate::model::{
    AccessPoint, App, AppDetails, AppId, Bind9Daemon, Bind9Details, DaemonId, KeaDaemon,
    KeaDetails, MachineId, MachineRef,
};

impl From<RawApp> for App {
    fn from(raw: RawApp) -> Self {
        let details = convert_details(&raw.app_type, raw.details);

        App {
            id: AppId::from(raw.id),
            name: raw.name,
            machine: MachineRef {
                id: MachineId::from(raw.machine.id),
                address: raw.machine.address,
                hostname: raw.machine.hostname,
            },
            access_points: raw.access_points.into_iter().map(AccessPoint::from).collect(),
            details,
        }
    }
}

impl From<RawAccessPoint> for AccessPoint {
    fn from(raw: RawAccessPoint) -> Self {
        AccessPoint {
            kind: raw.ap_type,
            address: raw.address,
            port: raw.port,
        }
    }
}

/// Normalize the duck-typed wire details into the tagged union.
///
/// Kea keeps the `daemons` array (missing decodes as empty); BIND9 keeps the
/// singular `daemon` and ignores any stray empty `daemons` array next to it.
fn convert_details(app_type: &str, raw: RawAppDetails) -> AppDetails {
    match app_type {
        "kea" => AppDetails::Kea(KeaDetails {
            daemons: raw.daemons.into_iter().map(KeaDaemon::from).collect(),
        }),
        "bind9" => AppDetails::Bind9(Bind9Details {
            daemon: raw.daemon.map(Bind9Daemon::from),
        }),
        other => AppDetails::Other(other.to_owned()),
    }
}

impl From<RawDaemon> for KeaDaemon {
    fn from(raw: RawDaemon) -> Self {
        KeaDaemon {
            id: DaemonId::from(raw.id),
            name: raw.name,
            active: raw.active.unwrap_or(false),
            monitored: raw.monitored.unwrap_or(false),
            agent_comm_errors: raw.agent_comm_errors,
            ca_comm_errors: raw.ca_comm_errors,
            daemon_comm_errors: raw.daemon_comm_errors,
        }
    }
}

impl From<RawDaemon> for Bind9Daemon {
    fn from(raw: RawDaemon) -> Self {
        Bind9Daemon {
            id: DaemonId::from(raw.id),
            name: raw.name,
            active: raw.active.unwrap_or(false),
            monitored: raw.monitored.unwrap_or(false),
            agent_comm_errors: raw.agent_comm_errors,
            rndc_comm_errors: raw.rndc_comm_errors,
            stats_comm_errors: raw.stats_comm_errors,
        }
    }
}

// ── Payload helpers ─────────────────────────────────────────────────

/// Decode a paginated applications payload straight into domain types.
pub fn apps_from_json(body: &str) -> Result<Vec<App>, CoreError> {
    let page = roost_api::decode_apps_page(body)?;
    Ok(page.items.into_iter().map(App::from).collect())
}
