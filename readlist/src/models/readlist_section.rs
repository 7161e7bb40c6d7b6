// src/models/readlist_section.rs

/// Lines kept from the Readlist section of one note, in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadlistSection {
    pub lines: Vec<String>,
}

impl ReadlistSection {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Renders the dated block appended to a digest:
    /// `## <date>`, a blank line, the kept lines, and a trailing blank line.
    #[inline]
    #[must_use]
    pub fn render(&self, date: &str) -> String {
        format!("## {date}\n\n{}\n\n", self.lines.join("\n"))
    }
}
