// roost-api: Typed models for the Roost fleet-monitoring backend payloads.
//
// This crate owns the wire shapes only. Transport lives with the embedding
// application; `roost-core` normalizes these raw records into domain types.

pub mod error;
pub mod models;

pub use error::Error;
pub use models::{
    PagedResponse, RawAccessPoint, RawApp, RawAppDetails, RawDaemon, RawMachine, decode_apps,
    decode_apps_page,
};
