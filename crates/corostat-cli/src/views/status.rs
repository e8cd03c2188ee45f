use corostat_types::{RingInfo, Status};
use owo_colors::OwoColorize;

/// Options for plain status output
#[derive(Debug, Clone, Default)]
pub struct StatusFormatOpts {
    pub enable_color: bool,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn ring_state(ring: &RingInfo, opts: &StatusFormatOpts) -> String {
    match (ring.faulty, opts.enable_color) {
        (true, true) => "FAULTY".red().bold().to_string(),
        (true, false) => "FAULTY".to_string(),
        (false, true) => "ok".green().to_string(),
        (false, false) => "ok".to_string(),
    }
}

/// Ring table, one line per ring
pub fn format_rings(rings: &[RingInfo], opts: &StatusFormatOpts) -> Vec<String> {
    if rings.is_empty() {
        return vec!["No rings reported".to_string()];
    }

    let mut lines = vec![format!("{:<8} {:<40} STATUS", "RING", "ADDRESS")];
    for ring in rings {
        lines.push(format!(
            "{:<8} {:<40} {}",
            ring.number,
            ring.address,
            ring_state(ring, opts)
        ));
    }
    lines
}

/// Full status: header block, rings, then membership
pub fn format_status(status: &Status, opts: &StatusFormatOpts) -> Vec<String> {
    let quorate = if opts.enable_color {
        if status.quorate {
            yes_no(true).green().to_string()
        } else {
            yes_no(false).red().bold().to_string()
        }
    } else {
        yes_no(status.quorate).to_string()
    };

    let votes = &status.quorum_votes;
    let mut lines = vec![
        format!("{:<10} {}", "Node ID:", status.node_id),
        format!("{:<10} {}/{}", "Ring ID:", status.ring_id, status.seq),
        format!("{:<10} {}", "Quorate:", quorate),
        format!(
            "{:<10} expected={} highest={} total={} quorum={}",
            "Votes:",
            votes.expected_votes,
            votes.highest_expected,
            votes.total_votes,
            votes.quorum
        ),
        format!(
            "{:<10} {} listed, {} votes",
            "Members:",
            status.members.len(),
            status.member_votes()
        ),
        String::new(),
    ];

    lines.extend(format_rings(&status.rings, opts));
    lines.push(String::new());

    if status.members.is_empty() {
        lines.push("No members reported".to_string());
        return lines;
    }

    lines.push(format!("{:<12} {:<6} NAME", "NODEID", "VOTES"));
    for member in &status.members {
        let name = if member.local {
            format!("{} (local)", member.name)
        } else {
            member.name.clone()
        };
        lines.push(format!("{:<12} {:<6} {}", member.id, member.votes, name));
    }
    lines
}
