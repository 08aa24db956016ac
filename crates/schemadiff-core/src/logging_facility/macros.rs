//! Operation logging macros
//!
//! Every public operation brackets its work with a `start` event and exactly
//! one `end` or `end_error` event, all tagged with the operation name. The
//! events are emitted through `$crate::tracing` so callers need no direct
//! dependency on `tracing`.

#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// Log the start of an operation
///
/// ```
/// # use schemadiff_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("load_schema", draft = "draft-07");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, $crate::core_types::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is required; any further fields follow it.
///
/// ```
/// # use schemadiff_core::log_op_end;
/// log_op_end!("compare", duration_ms = 3, difference_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            info,
            $op,
            $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation
///
/// The error is converted into an `ExError`; the event carries its kind,
/// stable code and, when known, the pointer into the schema document.
///
/// ```
/// # use schemadiff_core::{log_op_error, errors::SchemaError};
/// let err = SchemaError::InvalidDocument { message: "eof".to_string() };
/// log_op_error!("load_schema", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__op_event!(
            error,
            $op,
            $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            path = ex_err.pointer().unwrap_or("")
            $(, $($field)*)?
        );
    }};
}
