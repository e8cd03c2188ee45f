use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let source = resolve_config_path(cli.config.as_deref());
    let config = Config::load(&source)?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Parse {
            ring_status,
            quorum_status,
        } => {
            let ring_status = ring_status.or_else(|| config.sources.ring_status.clone());
            let quorum_status = quorum_status.or_else(|| config.sources.quorum_status.clone());
            handlers::parse::handle(ring_status, quorum_status, format)
        }

        Commands::Rings { ring_status } => {
            let ring_status = ring_status.or_else(|| config.sources.ring_status.clone());
            handlers::rings::handle(ring_status, format)
        }

        Commands::Config => handlers::config::handle(&source, &config),
    }
}
