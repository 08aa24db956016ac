//! Structured logging for schemadiff operations
//!
//! `load_schema`, `compare` and `check_compatibility` each emit one `start`
//! event and one `end` (or `end_error`) event carrying the canonical fields
//! from [`schemadiff_core_types::schema`]. The diff engine adds trace-level
//! `type_mismatch` and `cycle_skipped` events.
//!
//! Nothing is printed until a subscriber is installed. Binaries call
//! [`init`] once; tests call [`init_test_capture`] and assert on the
//! recorded events.
//!
//! ```rust
//! use schemadiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
