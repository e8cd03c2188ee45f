use corostat_types::Member;

use crate::error::{Error, Missing, NumericField, Result};
use crate::lines::{Report, decode};
use crate::quorum::parse_u64;

const MEMBERSHIP_HEADER: &str = "Membership information";
const COLUMN_HEADER_START: &str = "Nodeid";
const LOCAL_MARKER: &str = "(local)";

fn is_underline(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '-')
}

/// Parse one table row: `<nodeid> <votes> [<qdevice flags>] <name> [(local)]`.
///
/// A row without a name still yields a member, with an empty name.
fn parse_row(line: &str) -> Result<Option<Member>> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();

    let local = tokens.last() == Some(&LOCAL_MARKER);
    if local {
        tokens.pop();
    }

    let [id, votes, rest @ ..] = tokens.as_slice() else {
        tracing::debug!(row = line, "skipping membership row without votes");
        return Ok(None);
    };
    let votes = parse_u64(NumericField::Vote, votes)?;

    let name = rest.last().copied().unwrap_or_default();
    if name.is_empty() {
        tracing::debug!(row = line, "membership row has no name");
    }

    Ok(Some(Member {
        id: (*id).to_string(),
        name: name.to_string(),
        local,
        votes,
    }))
}

/// Extract the membership table from `corosync-quorumtool` output.
///
/// Rows run from the `Nodeid Votes Name` header to the next blank line or the
/// end of the output. An empty table is not an error.
pub fn parse_members(quorum_output: &[u8]) -> Result<Vec<Member>> {
    let text = decode(quorum_output);
    members_from(&Report::new(&text))
}

pub(crate) fn members_from(report: &Report<'_>) -> Result<Vec<Member>> {
    let lines = report.lines();
    let start = lines
        .iter()
        .position(|line| line.trim() == MEMBERSHIP_HEADER)
        .ok_or(Error::NotFound(Missing::Membership))?;

    let mut members = Vec::new();
    let mut in_table = false;

    for line in &lines[start + 1..] {
        let trimmed = line.trim();

        if !in_table {
            if trimmed.starts_with(COLUMN_HEADER_START) {
                in_table = true;
            } else if !(trimmed.is_empty() || is_underline(trimmed)) {
                tracing::debug!(line = trimmed, "membership section has no column header");
                break;
            }
            continue;
        }

        if trimmed.is_empty() {
            break;
        }

        if let Some(member) = parse_row(trimmed)? {
            members.push(member);
        }
    }

    Ok(members)
}
