use corostat_types::Status;

use crate::Result;
use crate::lines::{Report, decode};
use crate::members::members_from;
use crate::quorum::{node_id_from, quorate_from, quorum_votes_from, ring_id_and_seq_from};
use crate::rings::rings_from;

/// Turns a pair of raw tool outputs into a [`Status`]
pub trait StatusParser: Send + Sync {
    /// Parse `corosync-cfgtool -s` and `corosync-quorumtool -p` output
    fn parse(&self, ring_output: &[u8], quorum_output: &[u8]) -> Result<Status>;
}

/// Stateless parser for corosync 2.x tool output
#[derive(Debug, Clone, Copy, Default)]
pub struct CorosyncParser;

impl CorosyncParser {
    pub fn new() -> Self {
        Self
    }
}

impl StatusParser for CorosyncParser {
    fn parse(&self, ring_output: &[u8], quorum_output: &[u8]) -> Result<Status> {
        parse(ring_output, quorum_output)
    }
}

/// Build a [`Status`] from both reports.
///
/// Extractors run in a fixed order and the first failure is returned as is.
pub fn parse(ring_output: &[u8], quorum_output: &[u8]) -> Result<Status> {
    let ring_text = decode(ring_output);
    let rings = rings_from(&Report::new(&ring_text));

    let quorum_text = decode(quorum_output);
    let report = Report::new(&quorum_text);

    let status = quorum_status(&report).map(|status| Status { rings, ..status });
    if let Err(err) = &status {
        tracing::debug!(error = %err, "failed to parse quorum status");
    }
    status
}

fn quorum_status(report: &Report<'_>) -> Result<Status> {
    let node_id = node_id_from(report)?;
    let (ring_id, seq) = ring_id_and_seq_from(report)?;
    let quorate = quorate_from(report)?;
    let quorum_votes = quorum_votes_from(report)?;
    let mut members = members_from(report)?;

    // Rows without the marker still describe this node when the ids match
    for member in &mut members {
        member.local |= member.id == node_id;
    }

    Ok(Status {
        rings: Vec::new(),
        node_id,
        ring_id,
        seq,
        quorate,
        quorum_votes,
        members,
    })
}
