//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use faultline_core::log_op_start;
/// log_op_start!("render_report");
/// log_op_start!("render_report", report_id = "r1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use faultline_core::log_op_end;
/// log_op_end!("render_report", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use faultline_core::{log_op_error, errors::FaultlineError};
/// let err = FaultlineError::Io { message: "broken pipe".to_string() };
/// log_op_error!("render_report", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log a degradation that was recovered locally
///
/// Used when a collaborator fails and the report continues with reduced
/// output (no snippet, no re-raise annotation, truncated chain).
///
/// # Example
///
/// ```
/// # use faultline_core::log_degraded;
/// log_degraded!("build_snippet", "source unavailable", file = "app.py");
/// ```
#[macro_export]
macro_rules! log_degraded {
    ($op:expr, $reason:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_DEGRADED,
            reason = $reason,
        );
    };
    ($op:expr, $reason:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::faultline_core_types::schema::EVENT_DEGRADED,
            reason = $reason,
            $($field)*
        );
    };
}
