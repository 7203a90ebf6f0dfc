//! recast CLI
//!
//! Thin collaborator around the core engine: reads each file, runs the
//! rewrite rules over its contents, and writes the result back only when
//! something changed (transform-then-write, never write-while-transforming).
//! Exits nonzero when any file was rewritten or failed, so the tool can
//! gate commit hooks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use recast::{fix_sets, tokenize_src};

#[derive(Parser)]
#[command(name = "recast", version, about = "Rewrite outdated syntax constructs in place")]
struct Args {
    /// Files to rewrite.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print each file's token stream as JSON instead of rewriting.
    #[arg(long)]
    dump_tokens: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut changed_or_failed = false;
    for path in &args.files {
        match process_file(path, args.dump_tokens) {
            Ok(changed) => changed_or_failed |= changed,
            Err(message) => {
                warn!(file = %path.display(), "{message}");
                changed_or_failed = true;
            }
        }
    }
    if changed_or_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Returns whether the file was rewritten.
fn process_file(path: &Path, dump_tokens: bool) -> Result<bool, String> {
    let contents =
        fs::read_to_string(path).map_err(|err| format!("cannot read: {err}"))?;

    if dump_tokens {
        let tokens = tokenize_src(&contents).map_err(|err| err.to_string())?;
        let json = serde_json::to_string_pretty(&tokens)
            .map_err(|err| format!("cannot serialize tokens: {err}"))?;
        println!("{json}");
        return Ok(false);
    }

    let fixed = fix_sets(&contents, &path.display().to_string())
        .map_err(|err| err.to_string())?;
    if fixed == contents {
        return Ok(false);
    }
    println!("Rewriting {}", path.display());
    fs::write(path, fixed).map_err(|err| format!("cannot write: {err}"))?;
    Ok(true)
}
