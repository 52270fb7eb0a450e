//! Macros for command timing

/// Trace a command phase when running verbose
///
/// Usage:
/// ```ignore
/// trace_command!(ctx, "load_document");
/// ```
macro_rules! trace_command {
    ($ctx:expr, $label:expr) => {
        if $ctx.cli.verbose {
            ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
