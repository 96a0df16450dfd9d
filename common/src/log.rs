//! Logging macros used across the workspace.
//!
//! These wrap `tracing` so every crate logs through the same subscriber. The
//! `success!` macro emits on a dedicated target that the CLI formatter renders
//! with its own symbol.

/// Target used by [`success!`](crate::success) events.
pub const SUCCESS_TARGET: &str = "sweepr::success";

/// Target used for raw terminal lines that should be printed without a prefix.
pub const PRINT_TARGET: &str = "sweepr::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__private::tracing::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__private::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__private::tracing::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__private::tracing::error!($($arg)+)
    };
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
