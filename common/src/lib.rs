//! # Sweepr Common
//!
//! Domain models shared by every crate in the workspace.
//!
//! * **[`network`]**: target specifications and the address ranges they expand to.
//! * **[`scan`]**: scan type definitions and the catalog they live in.
//! * **[`config`]**: run settings assembled by the CLI.
//! * **[`error`]**: typed errors for target parsing.
//! * **[`log`]**: `info!`, `success!`, `warn!` and `error!` macros.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod scan;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
