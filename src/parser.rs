//! Line-oriented parser for pasted folder/file tree listings.

use crate::types::{ParseResult, TreeEntry};
#[cfg(feature = "logging")]
use tracing;

/// Decorative glyphs removed from every entry line, applied in this order.
///
/// Plain substring replacement: nesting depth is never inferred from them.
pub const TREE_GLYPHS: [&str; 3] = ["│", "├──", "└──"];

/// Characters that end a line: `\n`, a lone `\r`, and the Unicode line and paragraph
/// separators. A `\r\n` pair leaves an empty piece between the two, which is skipped.
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{b}', '\u{c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Lazily yields [`TreeEntry`] values from a tree listing.
///
/// Lines before the root line are skipped. The root itself is available through
/// [`StructureParser::root`] once the iterator has advanced past it.
pub struct StructureParser<'a> {
    lines: std::str::Split<'a, [char; 10]>,
    root: Option<String>,
}

impl<'a> StructureParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split(LINE_BREAKS),
            root: None,
        }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Consumes the parser and returns the detected root.
    pub fn into_root(self) -> Option<String> {
        self.root
    }
}

impl Iterator for StructureParser<'_> {
    type Item = TreeEntry;
    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if self.root.is_none() && line.ends_with('/') {
                let root = line.trim_end_matches('/').to_string();
                #[cfg(feature = "logging")]
                tracing::debug!("Root folder detected: {:?}", root);
                self.root = Some(root);
                continue;
            }
            // A bare `/` root leaves nothing to anchor entries to.
            if self.root.as_deref().is_none_or(str::is_empty) {
                continue;
            }
            if let Some(entry) = classify(line) {
                return Some(entry);
            }
        }
        None
    }
}

/// Strips tree glyphs from a line.
pub fn clean_line(line: &str) -> String {
    let mut cleaned = line.to_string();
    for glyph in TREE_GLYPHS {
        cleaned = cleaned.replace(glyph, "");
    }
    cleaned.trim().to_string()
}

fn classify(line: &str) -> Option<TreeEntry> {
    let path = clean_line(line);
    if path.is_empty() {
        return None;
    }
    if path.ends_with('/') {
        Some(TreeEntry::directory(path.trim_end_matches('/')))
    } else {
        Some(TreeEntry::file(path))
    }
}

/// Parses a whole listing into its root and ordered entries.
///
/// Never fails: malformed lines pass through best-effort glyph removal.
pub fn parse(text: &str) -> ParseResult {
    let mut parser = StructureParser::new(text);
    let entries: Vec<TreeEntry> = parser.by_ref().collect();
    #[cfg(feature = "logging")]
    tracing::debug!("Parsed {} entries", entries.len());
    ParseResult {
        root: parser.into_root(),
        entries,
    }
}
