use crate::input::{is_stdin, read_report};
use crate::types::OutputFormat;
use crate::views::format_status;
use anyhow::Result;
use corostat_parser::{CorosyncParser, StatusParser};
use std::path::PathBuf;

pub fn handle(
    ring_status: Option<PathBuf>,
    quorum_status: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let Some(ring_status) = ring_status else {
        anyhow::bail!("no ring status report given; pass --ring-status or set sources.ring_status");
    };
    let Some(quorum_status) = quorum_status else {
        anyhow::bail!(
            "no quorum status report given; pass --quorum-status or set sources.quorum_status"
        );
    };
    if is_stdin(&ring_status) && is_stdin(&quorum_status) {
        anyhow::bail!("only one report can be read from stdin");
    }

    let ring_output = read_report(&ring_status)?;
    let quorum_output = read_report(&quorum_status)?;

    let status = CorosyncParser::new().parse(&ring_output, &quorum_output)?;
    tracing::info!(
        node_id = %status.node_id,
        rings = status.rings.len(),
        members = status.members.len(),
        quorate = status.quorate,
        "parsed status"
    );
    for ring in status.faulty_rings() {
        tracing::warn!(ring = %ring.number, address = %ring.address, "ring is faulty");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Plain => {
            for line in format_status(&status, &super::format_opts()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
