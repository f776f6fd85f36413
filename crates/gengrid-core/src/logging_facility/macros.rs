//! Canonical logging macros
//!
//! Every event carries `component`, `op` and `event`. Field names come from
//! `gengrid_core_types::schema` so log consumers and tests share one
//! vocabulary.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use gengrid_core::log_op_start;
/// log_op_start!("emit_grid");
/// log_op_start!("emit_grid", width = 2, height = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::log_op_start!($op,)
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            { $crate::gengrid_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::gengrid_core_types::schema::FIELD_OP } = $op,
            { $crate::gengrid_core_types::schema::FIELD_EVENT } =
                $crate::gengrid_core_types::schema::EVENT_START,
            $($field)*
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use gengrid_core::log_op_end;
/// log_op_end!("emit_grid", duration_ms = 1);
/// log_op_end!("emit_grid", duration_ms = 1, rows = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::log_op_end!($op, duration_ms = $duration,)
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            { $crate::gengrid_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::gengrid_core_types::schema::FIELD_OP } = $op,
            { $crate::gengrid_core_types::schema::FIELD_EVENT } =
                $crate::gengrid_core_types::schema::EVENT_END,
            { $crate::gengrid_core_types::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        )
    };
}

/// Log an operation error
///
/// The error is converted into an [`ExError`](crate::errors::ExError). Besides
/// the stable kind and code, the event records the offending positional
/// argument (when there is one) and the error message, so a rejected
/// `width`/`height`/`cellType` can be identified from the log alone.
///
/// # Example
///
/// ```
/// # use gengrid_core::{log_op_error, errors::GenGridError};
/// let err = GenGridError::MissingArgument { name: "cellType".to_string() };
/// log_op_error!("build_grid_spec", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            { $crate::gengrid_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::gengrid_core_types::schema::FIELD_OP } = $op,
            { $crate::gengrid_core_types::schema::FIELD_EVENT } =
                $crate::gengrid_core_types::schema::EVENT_END_ERROR,
            { $crate::gengrid_core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::gengrid_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::gengrid_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            { $crate::gengrid_core_types::schema::FIELD_ARGUMENT } = ex_err.argument(),
            { $crate::gengrid_core_types::schema::FIELD_ERR_MESSAGE } = ex_err.message(),
            $($field)*
        )
    }};
}
