mod status;

pub use status::{StatusFormatOpts, format_rings, format_status};
