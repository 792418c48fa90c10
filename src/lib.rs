//! # Treebat
//!
//! `treebat` turns a pasted folder/file tree listing, such as the output of `tree` or a
//! hand-drawn outline, into a Windows batch script that recreates the structure on disk.
//!
//! The first line ending in `/` names the root folder. Every later line has its tree glyphs
//! (`│`, `├──`, `└──`) removed and becomes either a `mkdir` (trailing `/`) or a
//! `type nul >` command. Indentation is not interpreted, so nested entries become direct
//! children of the root unless their own text contains a path separator.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use treebat::{ConversionRequest, ScriptBuilder, convert};
//!
//! let listing = "MyProject/\n├── main.py\n└── src/\n";
//! let request = ConversionRequest::new(listing)
//!     .with_options(ScriptBuilder::new().pause(false).build());
//!
//! let conversion = convert(&request).expect("listing has a root");
//! assert_eq!(conversion.root, "MyProject");
//! assert!(conversion.script.contains("mkdir %ROOT%\\src"));
//! ```

mod emitter;
mod engine;
mod error;
mod options;
pub mod output;
mod parser;
mod types;

pub use emitter::emit;
pub use engine::{ConversionRequest, convert, generate_script};
pub use error::TreebatError;
pub use options::{
    DEFAULT_ROOT_VARIABLE, DEFAULT_SUCCESS_MESSAGE, LineEnding, ScriptBuilder, ScriptOptions,
    load_options,
};
pub use parser::{StructureParser, TREE_GLYPHS, clean_line, parse};
pub use types::{Conversion, EntryKind, ParseResult, ScriptDocument, TreeEntry};
