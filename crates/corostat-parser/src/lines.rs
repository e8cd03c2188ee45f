use std::borrow::Cow;

/// Decode raw tool output, replacing invalid UTF-8 sequences
pub(crate) fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Tool output split into lines once and scanned by label
pub(crate) struct Report<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Report<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    pub(crate) fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Text after `label` on the first line starting with it (leading whitespace ignored)
    pub(crate) fn labeled(&self, label: &str) -> Option<&'a str> {
        self.lines
            .iter()
            .find_map(|&line| line.trim_start().strip_prefix(label))
            .map(str::trim)
    }

    /// Token following the label, ignoring trailing annotations such as
    /// "Activity blocked"; `None` when the label is missing or carries no value
    pub(crate) fn labeled_token(&self, label: &str) -> Option<&'a str> {
        self.labeled(label)
            .and_then(|value| value.split_whitespace().next())
    }
}
