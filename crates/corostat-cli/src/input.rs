use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// `-` reads the report from stdin instead of a file
pub(crate) const STDIN_MARKER: &str = "-";

pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}

/// Read a captured report as raw bytes
pub(crate) fn read_report(path: &Path) -> Result<Vec<u8>> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read report from stdin")?;
        tracing::debug!(bytes = buf.len(), "read report from stdin");
        return Ok(buf);
    }

    let buf =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read report");
    Ok(buf)
}
