use crate::error::TreebatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_ROOT_VARIABLE: &str = "ROOT";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "✅ Project structure created successfully!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Knobs for the generated script. The defaults reproduce the classic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptOptions {
    /// Name of the batch variable bound to the root folder.
    pub root_variable: String,
    /// Text echoed once every folder and file has been created.
    pub success_message: String,
    /// Append a `pause` so the console window stays open.
    pub pause: bool,
    pub line_ending: LineEnding,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            root_variable: DEFAULT_ROOT_VARIABLE.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            pause: true,
            line_ending: LineEnding::Lf,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptBuilder {
    options: ScriptOptions,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_options(options: ScriptOptions) -> Self {
        Self { options }
    }
    pub fn root_variable(mut self, name: impl Into<String>) -> Self {
        self.options.root_variable = name.into();
        self
    }
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.options.success_message = message.into();
        self
    }
    pub fn pause(mut self, yes: bool) -> Self {
        self.options.pause = yes;
        self
    }
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.options.line_ending = ending;
        self
    }
    pub fn build(self) -> ScriptOptions {
        self.options
    }
}

/// Loads options from a JSON file. Missing keys keep their defaults.
pub fn load_options(path: impl AsRef<Path>) -> Result<ScriptOptions, TreebatError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| TreebatError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| TreebatError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
