use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use octasm::config::ConfigManager;
use octasm::diagnostics;
use octasm::emit;

const SOURCE_EXTENSION: &str = "as";
const INTERMEDIATE_EXTENSION: &str = "am";
const OBJECT_EXTENSION: &str = "ob";
const ENTRIES_EXTENSION: &str = "ent";
const EXTERNALS_EXTENSION: &str = "ext";

/// Assembles one or more `.as` source files into `.ob`/`.ent`/`.ext` object
/// artifacts.
#[derive(Parser, Debug)]
#[command(name = "octasm", version, about)]
struct Cli {
    /// File names to assemble, without the `.as` extension.
    #[arg(required = true)]
    inputs: Vec<String>,
}

fn assemble_one(stem: &str) -> anyhow::Result<bool> {
    let source_path = PathBuf::from(format!("{stem}.{SOURCE_EXTENSION}"));
    let source = fs::read_to_string(&source_path).map_err(|source_err| {
        anyhow::anyhow!(octasm::error::IoError::FileAccess {
            path: source_path.display().to_string(),
            source: source_err,
        })
    })?;

    let config = ConfigManager::load_or_default();
    let file_label = source_path.display().to_string();

    let raw_lines: Vec<&str> = source.lines().collect();
    if let Ok(expanded) = octasm::preprocessor::expand(&raw_lines) {
        write_artifact(stem, INTERMEDIATE_EXTENSION, &format!("{}\n", expanded.join("\n")))?;
    }

    match octasm::assemble(&file_label, &source, &config) {
        Ok(unit) => {
            write_artifact(stem, OBJECT_EXTENSION, &emit::render_object_file(&unit, config.code_origin))?;
            if let Some(body) = emit::render_entries_file(&unit) {
                write_artifact(stem, ENTRIES_EXTENSION, &body)?;
            }
            if let Some(body) = emit::render_externals_file(&unit) {
                write_artifact(stem, EXTERNALS_EXTENSION, &body)?;
            }
            Ok(true)
        }
        Err(diags) => {
            diagnostics::report(&diags);
            Ok(false)
        }
    }
}

fn write_artifact(stem: &str, extension: &str, body: &str) -> anyhow::Result<()> {
    let path = PathBuf::from(format!("{stem}.{extension}"));
    fs::write(&path, body).map_err(|source_err| {
        anyhow::anyhow!(octasm::error::IoError::FileAccess {
            path: path.display().to_string(),
            source: source_err,
        })
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut all_succeeded = true;
    for stem in &cli.inputs {
        match assemble_one(stem) {
            Ok(succeeded) => all_succeeded &= succeeded,
            Err(e) => {
                eprintln!("{e}");
                all_succeeded = false;
            }
        }
    }

    Ok(if all_succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
