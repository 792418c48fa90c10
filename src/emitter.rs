use crate::options::ScriptOptions;
use crate::types::{EntryKind, ParseResult, ScriptDocument, TreeEntry};
#[cfg(feature = "logging")]
use tracing;

/// Builds the batch script for a parse result.
///
/// Returns `None` when no usable root was detected. Entries are emitted in input
/// order; a file whose parent directory is listed later fails only when the
/// script runs.
pub fn emit(result: &ParseResult, options: &ScriptOptions) -> Option<ScriptDocument> {
    let root = result.root_name()?;
    let var = &options.root_variable;
    let mut lines = Vec::with_capacity(result.entries.len() + 6);
    lines.push("@echo off".to_string());
    lines.push(format!("set {}={}", var, root));
    lines.push(format!("mkdir %{}%", var));
    lines.extend(result.entries.iter().map(|entry| entry_command(entry, var)));
    lines.push(format!("echo {}", options.success_message));
    if options.pause {
        lines.push("pause".to_string());
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Emitted {} script lines for root {:?}", lines.len(), root);
    Some(ScriptDocument {
        lines,
        line_ending: options.line_ending,
    })
}

fn entry_command(entry: &TreeEntry, var: &str) -> String {
    match entry.kind {
        EntryKind::Directory => format!("mkdir %{}%\\{}", var, entry.path),
        EntryKind::File => format!("type nul > %{}%\\{}", var, entry.path),
    }
}
