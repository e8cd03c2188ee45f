use corostat_types::QuorumVotes;

use crate::error::{Error, Missing, NumericField, Result};
use crate::lines::{Report, decode};

const NODE_ID_LABEL: &str = "Node ID:";
const RING_ID_LABEL: &str = "Ring ID:";
const QUORATE_LABEL: &str = "Quorate:";

const EXPECTED_VOTES_LABEL: &str = "Expected votes:";
const HIGHEST_EXPECTED_LABEL: &str = "Highest expected:";
const TOTAL_VOTES_LABEL: &str = "Total votes:";
const QUORUM_LABEL: &str = "Quorum:";

/// Parse an unsigned count made of ASCII digits only.
pub(crate) fn parse_u64(field: NumericField, value: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+'; parse just the offending
    // character so the error reports invalid syntax
    let digits = match value.chars().next() {
        Some(c) if !c.is_ascii_digit() => &value[..c.len_utf8()],
        _ => value,
    };

    digits
        .parse::<u64>()
        .map_err(|source| Error::numeric(field, value, source))
}

/// Extract the local node id from `corosync-quorumtool` output
pub fn parse_node_id(quorum_output: &[u8]) -> Result<String> {
    let text = decode(quorum_output);
    node_id_from(&Report::new(&text))
}

pub(crate) fn node_id_from(report: &Report<'_>) -> Result<String> {
    report
        .labeled_token(NODE_ID_LABEL)
        .map(str::to_string)
        .ok_or(Error::NotFound(Missing::NodeId))
}

/// Extract the `Ring ID: <nodeid>/<seq>` pair.
///
/// The node id part stays textual; the sequence must fit in a u64.
pub fn parse_ring_id_and_seq(quorum_output: &[u8]) -> Result<(String, u64)> {
    let text = decode(quorum_output);
    ring_id_and_seq_from(&Report::new(&text))
}

pub(crate) fn ring_id_and_seq_from(report: &Report<'_>) -> Result<(String, u64)> {
    let (ring_id, seq) = report
        .labeled_token(RING_ID_LABEL)
        .and_then(|value| value.split_once('/'))
        .ok_or(Error::NotFound(Missing::RingId))?;

    let seq = parse_u64(NumericField::Seq, seq)?;
    Ok((ring_id.to_string(), seq))
}

/// True only when the `Quorate:` value is exactly `Yes`
pub fn parse_quorate(quorum_output: &[u8]) -> Result<bool> {
    let text = decode(quorum_output);
    quorate_from(&Report::new(&text))
}

pub(crate) fn quorate_from(report: &Report<'_>) -> Result<bool> {
    report
        .labeled_token(QUORATE_LABEL)
        .map(|value| value == "Yes")
        .ok_or(Error::NotFound(Missing::Quorate))
}

/// Extract the four votequorum counters, which may appear in any order
pub fn parse_quorum_votes(quorum_output: &[u8]) -> Result<QuorumVotes> {
    let text = decode(quorum_output);
    quorum_votes_from(&Report::new(&text))
}

pub(crate) fn quorum_votes_from(report: &Report<'_>) -> Result<QuorumVotes> {
    let (Some(expected), Some(highest), Some(total), Some(quorum)) = (
        report.labeled_token(EXPECTED_VOTES_LABEL),
        report.labeled_token(HIGHEST_EXPECTED_LABEL),
        report.labeled_token(TOTAL_VOTES_LABEL),
        report.labeled_token(QUORUM_LABEL),
    ) else {
        return Err(Error::NotFound(Missing::QuorumVotes));
    };

    Ok(QuorumVotes {
        expected_votes: parse_u64(NumericField::Vote, expected)?,
        highest_expected: parse_u64(NumericField::Vote, highest)?,
        total_votes: parse_u64(NumericField::Vote, total)?,
        quorum: parse_u64(NumericField::Vote, quorum)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use corostat_testing::fixtures;

    const HUGE: &str = "10000000000000000000000000000000000000000000000";

    #[test]
    fn test_parse_node_id() {
        let node_id = parse_node_id(fixtures::QUORUMTOOL_QUORATE.as_bytes()).unwrap();
        assert_eq!(node_id, "1084780051");
    }

    #[test]
    fn test_parse_node_id_empty_error() {
        let err = parse_node_id(b"").unwrap_err();
        assert_eq!(err.to_string(), "could not find Node ID line");
    }

    #[test]
    fn test_parse_node_id_without_value() {
        let err = parse_node_id(b"Node ID:\n").unwrap_err();
        assert_eq!(err, Error::NotFound(Missing::NodeId));
    }

    #[test]
    fn test_parse_ring_id_and_seq() {
        let (ring_id, seq) =
            parse_ring_id_and_seq(fixtures::QUORUMTOOL_QUORATE.as_bytes()).unwrap();
        assert_eq!(ring_id, "1084780051");
        assert_eq!(seq, 44);
    }

    #[test]
    fn test_parse_ring_id_empty_error() {
        let err = parse_ring_id_and_seq(b"").unwrap_err();
        assert_eq!(err.to_string(), "could not find Ring ID line");
    }

    #[test]
    fn test_parse_ring_id_without_slash() {
        let err = parse_ring_id_and_seq(b"Ring ID:          1084780051\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_parse_seq_uint_error() {
        let output = format!("Ring ID:          1084780051/{}", HUGE);
        let err = parse_ring_id_and_seq(output.as_bytes()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NumericRange);
        let message = err.to_string();
        assert!(message.contains("could not parse seq number to uint64"));
        assert!(message.contains("value out of range"));
        assert!(message.contains(HUGE));
    }

    #[test]
    fn test_parse_seq_not_numeric() {
        let err = parse_ring_id_and_seq(b"Ring ID: 1/abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericRange);
        assert!(err.to_string().contains("invalid syntax"));
    }

    #[test]
    fn test_parse_seq_rejects_sign() {
        let err = parse_ring_id_and_seq(b"Ring ID: 1/+44").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NumericRange);
        assert_eq!(
            err.to_string(),
            "could not parse seq number to uint64: parsing \"+44\": invalid syntax"
        );
    }

    #[test]
    fn test_parse_vote_rejects_sign() {
        let output = b"Expected votes: +1\nHighest expected: 1\nTotal votes: 1\nQuorum: 1\n";
        let err = parse_quorum_votes(output).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NumericRange);
        assert!(err.to_string().contains("invalid syntax"));
    }

    #[test]
    fn test_parse_quorate() {
        assert!(parse_quorate(fixtures::QUORUMTOOL_QUORATE.as_bytes()).unwrap());
    }

    #[test]
    fn test_parse_no_quorate() {
        assert!(!parse_quorate(b"Quorate: No").unwrap());
    }

    #[test]
    fn test_quorate_is_case_sensitive() {
        assert!(!parse_quorate(b"Quorate: yes").unwrap());
        assert!(!parse_quorate(b"Quorate: YES").unwrap());
    }

    #[test]
    fn test_parse_quorate_empty_error() {
        let err = parse_quorate(b"").unwrap_err();
        assert_eq!(err.to_string(), "could not find Quorate line");
    }

    #[test]
    fn test_quorate_flag_is_not_the_label() {
        let err = parse_quorate(b"Flags:            2Node Quorate WaitForAll\n").unwrap_err();
        assert_eq!(err, Error::NotFound(Missing::Quorate));
    }

    #[test]
    fn test_parse_quorum_votes() {
        let votes = parse_quorum_votes(fixtures::QUORUMTOOL_QUORATE.as_bytes()).unwrap();
        assert_eq!(
            votes,
            QuorumVotes {
                expected_votes: 232,
                highest_expected: 22,
                total_votes: 21,
                quorum: 421,
            }
        );
    }

    #[test]
    fn test_parse_quorum_votes_any_order() {
        let output = b"Quorum: 2\nTotal votes: 3\nHighest expected: 3\nExpected votes: 3\n";
        let votes = parse_quorum_votes(output).unwrap();
        assert_eq!(votes.expected_votes, 3);
        assert_eq!(votes.quorum, 2);
    }

    #[test]
    fn test_parse_quorum_votes_empty_error() {
        let err = parse_quorum_votes(b"").unwrap_err();
        assert_eq!(err.to_string(), "could not find quorum votes numbers");
    }

    #[test]
    fn test_parse_quorum_votes_missing_one_label() {
        let output = b"Expected votes: 1\nHighest expected: 1\nTotal votes: 1\n";
        let err = parse_quorum_votes(output).unwrap_err();
        assert_eq!(err.to_string(), "could not find quorum votes numbers");
    }

    #[test]
    fn test_parse_quorum_votes_uint_errors() {
        let labels = [
            EXPECTED_VOTES_LABEL,
            HIGHEST_EXPECTED_LABEL,
            TOTAL_VOTES_LABEL,
            QUORUM_LABEL,
        ];

        for overflowing in labels {
            let output: String = labels
                .iter()
                .map(|label| {
                    let value = if *label == overflowing { HUGE } else { "1" };
                    format!("{} {}\n", label, value)
                })
                .collect();

            let err = parse_quorum_votes(output.as_bytes()).unwrap_err();
            let message = err.to_string();
            assert!(
                message.contains("could not parse vote number to uint64"),
                "unexpected message for {}: {}",
                overflowing,
                message
            );
            assert!(message.contains("value out of range"));
        }
    }
}
