pub mod config;
pub mod parse;
pub mod rings;

use crate::views::StatusFormatOpts;
use is_terminal::IsTerminal;

fn format_opts() -> StatusFormatOpts {
    StatusFormatOpts {
        enable_color: std::io::stdout().is_terminal(),
    }
}
