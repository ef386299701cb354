//! Structured diagnostics for the native helpers.
//!
//! `log_metric!` turns a list of key/value pairs into one JSON-like line sent
//! through the `log` facade at `debug` level. The `#[cfg(debug_assertions)]` guard
//! compiles the macro and all calls to it out of release builds.

/// Logs a structured key-value metric string at debug level, only in debug builds.
///
/// ```ignore
/// log_metric!("event"="resave", "quality"=&quality);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("NATIVE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
