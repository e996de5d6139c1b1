//! Status macros. They forward to `tracing`, so the binary's subscriber
//! decides how they are rendered.

/// `tracing::info!` tagged with `success = true`, which the terminal
/// formatter renders in bold.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(success = true, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
