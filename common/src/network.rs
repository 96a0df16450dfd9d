//! # Target Networking Models
//!
//! * **[`target`]**: classifies raw target lines and expands them into addresses.
//! * **[`range`]**: inclusive address ranges and CIDR host ranges.

pub mod range;
pub mod target;
