use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corostat")]
#[command(about = "Parse corosync ring and quorum status reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $COROSTAT_CONFIG or XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Output format (overrides output.format in config)")]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Parse both reports into a full status record")]
    Parse {
        #[arg(long, help = "Captured `corosync-cfgtool -s` output ('-' for stdin)")]
        ring_status: Option<PathBuf>,

        #[arg(long, help = "Captured `corosync-quorumtool -p` output ('-' for stdin)")]
        quorum_status: Option<PathBuf>,
    },

    #[command(about = "Parse only the ring status report")]
    Rings {
        #[arg(long, help = "Captured `corosync-cfgtool -s` output ('-' for stdin)")]
        ring_status: Option<PathBuf>,
    },

    #[command(about = "Show the resolved configuration")]
    Config,
}
