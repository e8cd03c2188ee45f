use crate::input::read_report;
use crate::types::OutputFormat;
use crate::views::format_rings;
use anyhow::Result;
use std::path::PathBuf;

pub fn handle(ring_status: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let Some(ring_status) = ring_status else {
        anyhow::bail!("no ring status report given; pass --ring-status or set sources.ring_status");
    };

    let ring_output = read_report(&ring_status)?;
    let rings = corostat_parser::parse_rings(&ring_output);
    if rings.is_empty() {
        tracing::warn!(path = %ring_status.display(), "no ring blocks found");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rings)?),
        OutputFormat::Plain => {
            for line in format_rings(&rings, &super::format_opts()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
