//! Parsers for corosync administration tool output.
//!
//! `corosync-cfgtool -s` (ring status) and `corosync-quorumtool -p` (quorum
//! status) print loosely formatted text. Each extractor here takes the raw
//! bytes of one report and pulls a single piece out of it; [`parse`] composes
//! them into a [`corostat_types::Status`].

// Error types
pub mod error;

// Line scanning shared by the extractors
mod lines;

// Extractors
pub mod members;
pub mod quorum;
pub mod rings;

// Orchestrator
pub mod parser;

pub use error::{Error, ErrorKind, Missing, NumericField, Result};
pub use members::parse_members;
pub use parser::{CorosyncParser, StatusParser, parse};
pub use quorum::{parse_node_id, parse_quorate, parse_quorum_votes, parse_ring_id_and_seq};
pub use rings::parse_rings;
