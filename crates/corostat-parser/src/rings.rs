use corostat_types::RingInfo;
use regex::Regex;
use std::sync::LazyLock;

use crate::lines::{Report, decode};

/// Start of a ring block, e.g. "RING ID 0"
static RING_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RING ID\s+(\d+)$").unwrap());

/// Key/value line inside a ring block, e.g. "id      = 10.0.0.1"
static RING_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(id|status)\s*=\s*(.*)$").unwrap());

const FAULTY_MARKER: &str = "FAULTY";

#[derive(Default)]
struct RingBlock<'a> {
    number: &'a str,
    address: Option<&'a str>,
    status: Option<&'a str>,
}

impl RingBlock<'_> {
    fn finish(self, rings: &mut Vec<RingInfo>) {
        let Some(address) = self.address else {
            tracing::debug!(ring = self.number, "skipping ring block without address");
            return;
        };
        if self.status.is_none() {
            tracing::debug!(ring = self.number, "ring block has no status line");
        }

        // Only an explicit FAULTY status marks the ring faulty
        let faulty = self
            .status
            .is_some_and(|status| status.contains(FAULTY_MARKER));
        rings.push(RingInfo::new(self.number, address, faulty));
    }
}

/// Extract every ring block from `corosync-cfgtool -s` output.
///
/// Never fails: output without any `RING ID` line yields an empty list.
pub fn parse_rings(ring_output: &[u8]) -> Vec<RingInfo> {
    let text = decode(ring_output);
    rings_from(&Report::new(&text))
}

pub(crate) fn rings_from(report: &Report<'_>) -> Vec<RingInfo> {
    let mut rings = Vec::new();
    let mut current: Option<RingBlock<'_>> = None;

    for &line in report.lines() {
        let trimmed = line.trim();

        if let Some(caps) = RING_ID_REGEX.captures(trimmed) {
            if let Some(block) = current.take() {
                block.finish(&mut rings);
            }
            current = Some(RingBlock {
                number: caps.get(1).map_or("", |m| m.as_str()),
                ..RingBlock::default()
            });
            continue;
        }

        let Some(block) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = RING_FIELD_REGEX.captures(trimmed) {
            let value = caps.get(2).map_or("", |m| m.as_str().trim());
            match &caps[1] {
                "id" => block.address = Some(value),
                _ => block.status = Some(value),
            }
        }
    }

    if let Some(block) = current {
        block.finish(&mut rings);
    }

    tracing::trace!(count = rings.len(), "parsed ring blocks");
    rings
}
