//! Types shared between the schemadiff facilities
//!
//! - **Schema constants**: canonical structured-logging field keys and event names
//!   used by the core crate's logging macros and by the CLI.

pub mod schema;
