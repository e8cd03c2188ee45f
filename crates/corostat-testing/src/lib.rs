//! Testing infrastructure for corostat.
//!
//! - `fixtures`: captured `corosync-cfgtool` / `corosync-quorumtool` output
//! - `world`: isolated temp directory for running the CLI against fixture files

pub mod fixtures;
pub mod world;

pub use world::{CommandResult, TestWorld};
