//! Preflight check for Azure Agentless Workload Scanning deployments.
//!
//! Validates two things before a deployment is attempted: that the deploying
//! identity holds every permission the scanner needs (resolved against the
//! wildcard patterns of its assigned roles), and that the target regions have
//! enough usage quota headroom for the planned scan workers.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod preflight;
pub mod quota;
pub mod report;
pub mod snapshot;

pub use error::{PreflightError, Result};
