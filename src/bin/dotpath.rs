//! dotpath - command line access to nested values in JSON/YAML documents.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dotpath::{equals, rdelete, rget, rset, to_json, to_yaml, value, PathOptions, Value};

#[derive(Debug, Parser)]
#[command(name = "dotpath", version, about = "Path-based access to nested values in JSON/YAML documents")]
struct Cli {
    /// Separator the path is split on
    #[arg(short, long, default_value = ".")]
    separator: String,

    /// Prefix prepended to every path segment before lookup
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Emit YAML instead of JSON
    #[arg(long)]
    yaml: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value at PATH, exit 1 if absent
    Get { file: PathBuf, path: String },
    /// Set PATH to VALUE (parsed as JSON) and print the updated document
    Set {
        file: PathBuf,
        path: String,
        value: String,
    },
    /// Delete the entry at PATH and print the updated document, exit 1 if
    /// nothing was deleted
    Delete { file: PathBuf, path: String },
    /// Print the kind of the value at PATH
    Classify { file: PathBuf, path: String },
    /// Exit 0 if the two documents are structurally equal
    Eq { lhs: PathBuf, rhs: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let options = PathOptions {
        separator: cli.separator.clone(),
        prefix: cli.prefix.clone(),
    };

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(&cli.output).map_err(|e| {
            format!("Failed to create output file {}: {}", cli.output, e)
        })?)
    };

    match &cli.command {
        Command::Get { file, path } => {
            let doc = read_document(file)?;
            match rget(&doc, path, &options) {
                Some(found) => {
                    emit(&mut output, found, cli.yaml)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            }
        }
        Command::Set { file, path, value } => {
            let mut doc = read_document(file)?;
            let parsed = value::from_json(value)
                .map_err(|e| format!("Failed to parse value as JSON: {}", e))?;
            rset(&mut doc, path, parsed, &options)?;
            emit(&mut output, &doc, cli.yaml)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Delete { file, path } => {
            let mut doc = read_document(file)?;
            let deleted = rdelete(&mut doc, path, &options)?;
            emit(&mut output, &doc, cli.yaml)?;
            if deleted {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Classify { file, path } => {
            let doc = read_document(file)?;
            match rget(&doc, path, &options) {
                Some(found) => {
                    writeln!(output, "{}", found.kind())?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    writeln!(output, "undefined")?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Eq { lhs, rhs } => {
            let lhs = read_document(lhs)?;
            let rhs = read_document(rhs)?;
            if equals(&lhs, &rhs) {
                writeln!(output, "equal")?;
                Ok(ExitCode::SUCCESS)
            } else {
                writeln!(output, "not equal")?;
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

// YAML is a superset of JSON, so both formats parse here.
fn read_document(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {}: {}", file.display(), e))?;
    let doc = value::from_yaml(&content)
        .map_err(|e| format!("Failed to parse {}: {}", file.display(), e))?;
    Ok(doc)
}

fn emit(output: &mut dyn Write, value: &Value, yaml: bool) -> Result<(), Box<dyn std::error::Error>> {
    if yaml {
        write!(output, "{}", to_yaml(value)?)?;
    } else {
        writeln!(output, "{}", to_json(value)?)?;
    }
    Ok(())
}
