use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use jsonquarry::file::loader::{load_json_file, load_json_from_stdin};

/// jsonquarry - run a path query against a JSON document
#[derive(Parser)]
#[command(name = "jsonquarry")]
#[command(version)]
#[command(about = "Run a path query against a JSON document", long_about = None)]
struct Cli {
    /// Path query, e.g. '$.users[0].name'
    query: String,

    /// JSON file to query (omit to read from stdin; .gz files are
    /// decompressed)
    file: Option<PathBuf>,

    /// How to convert the query result before printing
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// Verbatim source text for containers, canonical text for literals
    Text,
    /// Coerce to a boolean
    Bool,
    /// Coerce to a float
    Float,
    /// Generic JSON re-rendering of the result
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tree = match &cli.file {
        Some(path) => load_json_file(path)?,
        None => {
            if std::io::stdin().is_terminal() {
                bail!("No input: pass a file argument or pipe JSON on stdin");
            }
            load_json_from_stdin()?
        }
    };

    let rendered = match cli.output {
        Output::Text => tree.get(&cli.query)?,
        Output::Bool => tree.get_bool(&cli.query)?.to_string(),
        Output::Float => tree.get_f64(&cli.query)?.to_string(),
        Output::Json => serde_json::to_string_pretty(&tree.get_value(&cli.query)?)?,
    };

    println!("{}", rendered);
    Ok(())
}
