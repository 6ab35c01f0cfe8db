//! `tracing` events emitted by the engine.
//!
//! All events use target "dsrec" and carry `component` and `event` fields.
//! The engine never installs a subscriber; applications do.

pub(crate) const DSREC_TARGET: &str = "dsrec";

/// Macro for info-level log events.
///
/// # Example
/// ```ignore
/// log_info!(
///     component = "dataset",
///     event = "dataset_opened",
///     data_path = ?path,
///     len = n,
/// );
/// ```
macro_rules! log_info {
    ($($field:tt)*) => {
        ::tracing::info!(target: $crate::observability::DSREC_TARGET, $($field)*)
    };
}

macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::DSREC_TARGET, $($field)*)
    };
}

macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::DSREC_TARGET, $($field)*)
    };
}

macro_rules! log_error {
    ($($field:tt)*) => {
        ::tracing::error!(target: $crate::observability::DSREC_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_error;
pub(crate) use log_info;
pub(crate) use log_warn;
