use crate::options::LineEnding;
use serde::{Deserialize, Serialize};

/// Whether a parsed line names a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// A single line of the tree listing after glyph cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub kind: EntryKind,
    /// Path relative to the root, without tree glyphs or a trailing slash.
    pub path: String,
}

impl TreeEntry {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Directory,
            path: path.into(),
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            path: path.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Everything the parser extracted from one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Name of the first line that ended with `/`, slashes stripped.
    ///
    /// `None` when no such line exists. A bare `/` line yields `Some("")`,
    /// which the emitter treats the same as a missing root.
    pub root: Option<String>,
    /// Entries in input order.
    pub entries: Vec<TreeEntry>,
}

impl ParseResult {
    /// The root name if it is present and non-empty.
    pub fn root_name(&self) -> Option<&str> {
        self.root.as_deref().filter(|r| !r.is_empty())
    }
}

/// The generated batch script, one command per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDocument {
    pub lines: Vec<String>,
    pub line_ending: LineEnding,
}

impl ScriptDocument {
    /// Joins the command lines with the configured line ending.
    pub fn render(&self) -> String {
        self.lines.join(self.line_ending.as_str())
    }
}

impl std::fmt::Display for ScriptDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// The complete result of a validated conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub root: String,
    pub entries: Vec<TreeEntry>,
    /// The rendered script text.
    pub script: String,
}
