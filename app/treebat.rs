//! Command-line interface for treebat.
//!
//! Reads a folder/file tree listing from a file or stdin and prints the generated batch
//! script, or saves it as `<root>.bat`.

use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::exit;
use treebat::output::{self, OutputFormat as LibFormat};
use treebat::{
    ConversionRequest, LineEnding, ScriptBuilder, ScriptOptions, TreebatError, convert,
    load_options,
};

/// treebat — turn a tree listing into a Windows batch script
#[derive(Parser)]
#[command(name = "treebat", version, about, long_about = None)]
struct Cli {
    /// Listing file to read (`-` reads stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Script)]
    format: OutputFormat,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Save the script as <ROOT>.bat in this directory instead of printing it
    #[arg(short, long, conflicts_with_all = ["format", "pretty"])]
    output_dir: Option<PathBuf>,

    /// JSON file with script options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Batch variable bound to the root folder
    #[arg(long)]
    root_var: Option<String>,

    /// Message echoed when the script finishes
    #[arg(long)]
    message: Option<String>,

    /// Do not end the script with `pause`
    #[arg(long)]
    no_pause: bool,

    /// Use CRLF line endings
    #[arg(long)]
    crlf: bool,

    /// Log parsing details to stderr (needs the `logging` feature)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Script,
    Json,
    Entries,
}

impl From<OutputFormat> for LibFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Script => LibFormat::Script,
            OutputFormat::Json => LibFormat::Json,
            OutputFormat::Entries => LibFormat::Entries,
        }
    }
}

impl Cli {
    fn script_options(&self) -> Result<ScriptOptions, TreebatError> {
        let base = match &self.config {
            Some(path) => load_options(path)?,
            None => ScriptOptions::default(),
        };
        let mut builder = ScriptBuilder::from_options(base);
        if let Some(var) = &self.root_var {
            builder = builder.root_variable(var.clone());
        }
        if let Some(message) = &self.message {
            builder = builder.success_message(message.clone());
        }
        if self.no_pause {
            builder = builder.pause(false);
        }
        if self.crlf {
            builder = builder.line_ending(LineEnding::CrLf);
        }
        Ok(builder.build())
    }
}

fn read_input(input: &Path) -> Result<String, TreebatError> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| TreebatError::Io {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        Ok(text)
    } else {
        fs::read_to_string(input).map_err(|e| TreebatError::Io {
            path: input.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TreebatError> {
    let options = cli.script_options()?;
    let text = read_input(&cli.input)?;
    let conversion = convert(&ConversionRequest::new(text).with_options(options))?;

    if let Some(dir) = &cli.output_dir {
        let path = output::write_script_to_dir(&conversion, dir)?;
        println!("{}", path.display());
        return Ok(());
    }

    let out = output::format_conversion(&conversion, cli.format.into(), cli.pretty)?;
    if out.ends_with('\n') {
        print!("{}", out);
    } else {
        println!("{}", out);
    }
    Ok(())
}
