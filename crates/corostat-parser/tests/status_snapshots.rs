use corostat_parser::{ErrorKind, parse, parse_quorum_votes, parse_rings};
use corostat_testing::fixtures;

// Snapshot tests - full status record as serialized for downstream consumers
#[test]
fn test_quorate_status_snapshot() {
    let status = parse(
        fixtures::CFGTOOL_TWO_RINGS.as_bytes(),
        fixtures::QUORUMTOOL_QUORATE.as_bytes(),
    )
    .expect("Failed to parse canonical report");

    let json_pretty = serde_json::to_string_pretty(&status).unwrap();
    insta::assert_snapshot!(json_pretty, @r#"
    {
      "rings": [
        {
          "number": "0",
          "address": "10.0.0.1",
          "faulty": false
        },
        {
          "number": "1",
          "address": "172.16.0.1",
          "faulty": false
        }
      ],
      "node_id": "1084780051",
      "ring_id": "1084780051",
      "seq": 44,
      "quorate": true,
      "quorum_votes": {
        "expected_votes": 232,
        "highest_expected": 22,
        "total_votes": 21,
        "quorum": 421
      },
      "members": [
        {
          "id": "1084780051",
          "name": "dma-dog-hana01",
          "local": true,
          "votes": 1
        },
        {
          "id": "1084780052",
          "name": "dma-dog-hana02",
          "local": false,
          "votes": 1
        }
      ]
    }
    "#);
}

#[test]
fn test_not_quorate_status_snapshot() {
    let status = parse(
        fixtures::CFGTOOL_FAULTY_RING.as_bytes(),
        fixtures::QUORUMTOOL_NOT_QUORATE.as_bytes(),
    )
    .expect("Failed to parse non-quorate report");

    let json_pretty = serde_json::to_string_pretty(&status).unwrap();
    insta::assert_snapshot!(json_pretty, @r#"
    {
      "rings": [
        {
          "number": "0",
          "address": "10.0.0.1",
          "faulty": true
        },
        {
          "number": "1",
          "address": "172.16.0.1",
          "faulty": false
        }
      ],
      "node_id": "16777226",
      "ring_id": "16777226",
      "seq": 52,
      "quorate": false,
      "quorum_votes": {
        "expected_votes": 2,
        "highest_expected": 2,
        "total_votes": 1,
        "quorum": 2
      },
      "members": [
        {
          "id": "16777226",
          "name": "node-a",
          "local": true,
          "votes": 1
        }
      ]
    }
    "#);
}

#[test]
fn test_extractors_are_independent() {
    // Each extractor only needs its own part of the report
    let rings = parse_rings(fixtures::QUORUMTOOL_QUORATE.as_bytes());
    assert!(rings.is_empty());

    let votes_only = fixtures::QUORUMTOOL_QUORATE
        .lines()
        .skip_while(|line| !line.starts_with("Votequorum information"))
        .take_while(|line| !line.starts_with("Flags:"))
        .collect::<Vec<_>>()
        .join("\n");
    let votes = parse_quorum_votes(votes_only.as_bytes()).unwrap();
    assert_eq!(votes.total_votes, 21);

    let err = parse(b"", votes_only.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "could not find Node ID line");
}

#[test]
fn test_parse_is_repeatable() {
    let ring = fixtures::CFGTOOL_TWO_RINGS.as_bytes();
    let quorum = fixtures::QUORUMTOOL_QUORATE.as_bytes();

    assert_eq!(parse(ring, quorum).unwrap(), parse(ring, quorum).unwrap());
}
