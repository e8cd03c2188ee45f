use serde::{Deserialize, Serialize};

use crate::{Member, QuorumVotes, RingInfo};

/// Normalized view of one ring-status + quorum-status report pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Rings in the order they appear in the ring-status output (may be empty)
    pub rings: Vec<RingInfo>,
    pub node_id: String,
    /// Node id part of the `Ring ID:` value
    pub ring_id: String,
    /// Sequence part of the `Ring ID:` value
    pub seq: u64,
    pub quorate: bool,
    pub quorum_votes: QuorumVotes,
    /// Membership rows in table order
    pub members: Vec<Member>,
}

impl Status {
    /// Rings whose status line reported a fault
    pub fn faulty_rings(&self) -> impl Iterator<Item = &RingInfo> {
        self.rings.iter().filter(|ring| ring.faulty)
    }

    pub fn has_faulty_ring(&self) -> bool {
        self.rings.iter().any(|ring| ring.faulty)
    }

    /// The member row describing the reporting node, if the table has one
    pub fn local_member(&self) -> Option<&Member> {
        self.members.iter().find(|member| member.local)
    }

    /// Sum of the votes listed in the membership table
    pub fn member_votes(&self) -> u64 {
        self.members
            .iter()
            .fold(0u64, |acc, member| acc.saturating_add(member.votes))
    }
}
