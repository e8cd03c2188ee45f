use serde::{Deserialize, Serialize};

/// One redundant ring as reported by the ring-status tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingInfo {
    /// Ring number exactly as printed after `RING ID`
    pub number: String,
    /// Local interface address bound to this ring
    pub address: String,
    /// True when the status line reports the ring as FAULTY
    pub faulty: bool,
}

impl RingInfo {
    pub fn new(number: impl Into<String>, address: impl Into<String>, faulty: bool) -> Self {
        Self {
            number: number.into(),
            address: address.into(),
            faulty,
        }
    }
}
