use crate::emitter::emit;
use crate::error::TreebatError;
use crate::options::ScriptOptions;
use crate::parser::parse;
use crate::types::Conversion;
#[cfg(feature = "logging")]
use tracing;

/// Input handed over by a front end: the listing text plus script options.
#[derive(Debug, Clone, Default)]
pub struct ConversionRequest {
    pub text: String,
    pub options: ScriptOptions,
}
impl ConversionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: ScriptOptions::default(),
        }
    }
    pub fn with_options(mut self, options: ScriptOptions) -> Self {
        self.options = options;
        self
    }
}

/// Converts a listing with the default options.
///
/// Returns `(script, root)`, or `(None, None)` when no root folder was found.
pub fn generate_script(structure_text: &str) -> (Option<String>, Option<String>) {
    let result = parse(structure_text);
    match emit(&result, &ScriptOptions::default()) {
        Some(doc) => (Some(doc.render()), result.root),
        None => (None, None),
    }
}

/// Validating conversion used by front ends.
pub fn convert(request: &ConversionRequest) -> Result<Conversion, TreebatError> {
    if request.text.trim().is_empty() {
        return Err(TreebatError::EmptyInput);
    }
    let result = parse(&request.text);
    let doc = emit(&result, &request.options).ok_or(TreebatError::NoRoot)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Converted {} entries into {} script lines",
        result.entries.len(),
        doc.lines.len()
    );
    let root = result.root.unwrap_or_default();
    Ok(Conversion {
        root,
        entries: result.entries,
        script: doc.render(),
    })
}
