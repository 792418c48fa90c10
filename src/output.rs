//! Output formatting for conversion results.
//!
//! Provides functions to render a [`Conversion`] as the raw script, a JSON document, or an
//! entry listing, and to save the script under its download name.

use crate::types::EntryKind;
use crate::{Conversion, TreebatError};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Content type the script is offered with.
pub const CONTENT_TYPE: &str = "text/plain";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Script,
    Json,
    Entries,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Script => "bat",
            OutputFormat::Json => "json",
            OutputFormat::Entries => "txt",
        }
    }
}

/// Download name for a script generated for `root`.
///
/// The root must be a single plain name: separators, `.` and `..` are rejected so the
/// script always lands inside the chosen directory.
pub fn script_file_name(root: &str) -> Result<String, TreebatError> {
    let mut components = Path::new(root).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || root.contains(['/', '\\']) {
        return Err(TreebatError::InvalidRoot(root.to_string()));
    }
    Ok(format!("{}.{}", root, OutputFormat::Script.extension()))
}

/// Formats the conversion into a string.
pub fn format_conversion(
    conversion: &Conversion,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, TreebatError> {
    match format {
        OutputFormat::Script => Ok(conversion.script.clone()),
        OutputFormat::Json => format_json(conversion, pretty),
        OutputFormat::Entries => Ok(format_entries(conversion)),
    }
}

/// Writes the script as `<root>.bat` inside `dir` and returns the file path.
pub fn write_script_to_dir(
    conversion: &Conversion,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, TreebatError> {
    let path = dir.as_ref().join(script_file_name(&conversion.root)?);
    fs::write(&path, &conversion.script).map_err(|e| TreebatError::io(&path, e))?;
    Ok(path)
}

// ----------------------- Internal formatting -----------------------

fn format_json(conversion: &Conversion, pretty: bool) -> Result<String, TreebatError> {
    let json = if pretty {
        serde_json::to_string_pretty(conversion)?
    } else {
        serde_json::to_string(conversion)?
    };
    Ok(json)
}

fn format_entries(conversion: &Conversion) -> String {
    let mut out = String::with_capacity(64 + conversion.entries.len() * 32);
    out.push_str(&format!("{}/\n", conversion.root));
    for entry in &conversion.entries {
        let marker = match entry.kind {
            EntryKind::Directory => "dir ",
            EntryKind::File => "file",
        };
        out.push_str(&format!("{}  {}\n", marker, entry.path));
    }
    out
}
