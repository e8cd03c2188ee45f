use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

/// Result type for corostat-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of parser errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    NumericRange,
}

/// Element of the report that could not be located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    NodeId,
    RingId,
    Quorate,
    QuorumVotes,
    Membership,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::NodeId => write!(f, "Node ID line"),
            Missing::RingId => write!(f, "Ring ID line"),
            Missing::Quorate => write!(f, "Quorate line"),
            Missing::QuorumVotes => write!(f, "quorum votes numbers"),
            Missing::Membership => write!(f, "membership information"),
        }
    }
}

/// Which counter a numeric token was meant to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Seq,
    Vote,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Seq => write!(f, "seq"),
            NumericField::Vote => write!(f, "vote"),
        }
    }
}

/// Error types that can occur while parsing tool output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required line, label or section is absent
    NotFound(Missing),

    /// A located token does not fit in a u64 (or is not a number at all)
    NumericRange {
        field: NumericField,
        value: String,
        source: ParseIntError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::NumericRange { .. } => ErrorKind::NumericRange,
        }
    }

    pub(crate) fn numeric(field: NumericField, value: &str, source: ParseIntError) -> Self {
        Error::NumericRange {
            field,
            value: value.to_string(),
            source,
        }
    }
}

fn describe_int_error(err: &ParseIntError) -> &'static str {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "value out of range",
        _ => "invalid syntax",
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(missing) => write!(f, "could not find {}", missing),
            Error::NumericRange {
                field,
                value,
                source,
            } => write!(
                f,
                "could not parse {} number to uint64: parsing {:?}: {}",
                field,
                value,
                describe_int_error(source)
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NumericRange { source, .. } => Some(source),
            Error::NotFound(_) => None,
        }
    }
}

impl From<Missing> for Error {
    fn from(missing: Missing) -> Self {
        Error::NotFound(missing)
    }
}
