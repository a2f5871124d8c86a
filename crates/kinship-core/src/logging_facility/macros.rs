//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use kinship_core::log_op_start;
/// log_op_start!("person_add");
/// log_op_start!("person_add", person_name = "Alice");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = kinship_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = kinship_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use kinship_core::log_op_end;
/// log_op_end!("person_add", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = kinship_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = kinship_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Client errors (validation, not found) are logged at `warn`; everything
/// else at `error`.
///
/// # Example
///
/// ```
/// # use kinship_core::{log_op_error, errors::KinshipError};
/// let err = KinshipError::PersonNotFound { name: "Alice".to_string() };
/// log_op_error!("person_delete", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        if ex_err.kind().is_client_error() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = kinship_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = kinship_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                err_message = ex_err.message(),
            );
        }
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        if ex_err.kind().is_client_error() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = kinship_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = kinship_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                err_message = ex_err.message(),
                $($field)*
            );
        }
    }};
}
