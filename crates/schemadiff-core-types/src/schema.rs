//! Canonical field keys and event names for structured logging
//!
//! The logging macros in `schemadiff-core` and the test capture layer agree
//! on these names, so assertions in tests can look events up by key.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison context
pub const FIELD_PATH: &str = "path";
pub const FIELD_DRAFT: &str = "draft";
pub const FIELD_POLICY: &str = "policy";

// Result sizes
pub const FIELD_DIFFERENCE_COUNT: &str = "difference_count";
pub const FIELD_INCOMPATIBLE_COUNT: &str = "incompatible_count";
pub const FIELD_NODE_COUNT: &str = "node_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Trace-level events emitted while walking two schema trees
pub const EVENT_TYPE_MISMATCH: &str = "type_mismatch";
pub const EVENT_CYCLE_SKIPPED: &str = "cycle_skipped";
