//! Minimal CLI: infer → (go | schema)
use std::path::PathBuf;
use clap::{Parser, Subcommand, Args};
use tracing::debug;

use crate::config::{GenerateConfig, LoadSettings};
use crate::error::{Error, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a Go struct from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "json-gostruct", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit a Go struct declaration
    Go(GoOut),
    /// infer and print the inferred type tree as JSON (debug view)
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// path of json file
    #[arg(long, short)]
    input: PathBuf,

    /// JSON Pointer to select a subnode of the document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// jq filter applied to the document; must yield exactly one object
    #[arg(long)]
    jq_expr: Option<String>,
}

#[derive(clap::Parser, Debug)]
struct GoOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// name of package
    #[arg(short, long)]
    package: String,

    /// name of struct (canonicalized like JSON keys)
    #[arg(short, long)]
    struct_name: String,

    /// path of output go struct file, ending with .go (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// run `gofmt -w` on the output file
    #[arg(long, default_value_t = false, requires = "out")]
    gofmt: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn to_load_settings(&self) -> LoadSettings {
        LoadSettings {
            input: self.input.clone(),
            json_pointer: self.json_pointer.clone(),
            jq_expr: self.jq_expr.clone(),
        }
    }
}

impl CommandLineInterface {
    /// Parse `std::env::args`. Help and version exit 0; any argument error
    /// exits 1.
    pub fn load() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(error) => {
                let code = if error.use_stderr() { 1 } else { 0 };
                // printing can only fail if the terminal is gone
                let _ = error.print();
                std::process::exit(code);
            }
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Go(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                // 1) validate arguments before touching the input
                let config = GenerateConfig::new(&target.package, &target.struct_name)?;
                if let Some(out) = target.out.as_deref() {
                    crate::output::check_output_path(out)?;
                }

                // 2) load, infer, render
                let document = crate::loader::load_document(&target.input_settings.to_load_settings())?;
                debug!(fields = document.len(), "loaded document");
                let go_src = crate::codegen::generate(&config, &document)?;

                // 3) write (+ format)
                crate::output::write_output(target.out.as_deref(), &go_src)?;
                if target.gofmt {
                    let out = target.out.as_deref().ok_or_else(|| {
                        Error::invalid_argument("gofmt", "requires an output path")
                    })?;
                    crate::output::gofmt(out)?;
                }
                Ok(())
            }
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let document = crate::loader::load_document(&target.input_settings.to_load_settings())?;
                let root = crate::inference::infer_document(&document)?;
                let mut schema_src = serde_json::to_string_pretty(&root)?;
                schema_src.push('\n');
                crate::output::write_output(target.out.as_deref(), &schema_src)
            }
        }
    }
}
