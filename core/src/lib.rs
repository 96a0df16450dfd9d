//! # Sweepr Core
//!
//! Turns raw target lines into concrete hosts, probes every host with every
//! scan type in the catalog, and assembles the verdicts into one report.
//!
//! Data flows `input` → [`targets`] (with [`resolver`]) → [`orchestrator`]
//! (driving [`scanner`]) → [`report`].

pub mod error;
pub mod input;
pub mod orchestrator;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod system;
pub mod targets;
