// corostat never runs corosync-cfgtool or corosync-quorumtool itself. It reads
// output captured by whatever already runs them (cron, a collector, an
// operator) and turns it into a status record, so parsing can be replayed
// against saved reports when a cluster misbehaves.

mod args;
mod commands;
pub mod config;
mod handlers;
mod input;
pub mod logging;
pub mod types;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::run;
