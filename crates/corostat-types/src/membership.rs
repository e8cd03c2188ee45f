use serde::{Deserialize, Serialize};

/// Vote counters from the votequorum section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumVotes {
    pub expected_votes: u64,
    pub highest_expected: u64,
    pub total_votes: u64,
    pub quorum: u64,
}

/// One row of the membership table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Node identifier, kept as text since it is only compared
    pub id: String,
    /// Node name without the `(local)` marker
    pub name: String,
    /// True for the node that produced the report
    pub local: bool,
    pub votes: u64,
}
