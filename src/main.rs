//! merkle-lines CLI - Merkle roots over the lines of text files
//!
//! Computes and reports one `(file, root)` pair per input file. Reporting
//! goes through an explicit writer handed to the batch loop rather than any
//! global logging state.

use anyhow::Context;
use clap::Parser;
use merkle_lines::root_for_file;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "merkle-lines")]
#[command(about = "Compute the Merkle root of each input file's lines")]
#[command(version)]
struct Cli {
    /// Files to process, one Merkle root per file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Report failures per file and continue instead of stopping at the
    /// first one
    #[arg(long)]
    keep_going: bool,
}

/// Process each file in order, writing one report line per file to `sink`.
///
/// Returns the number of failed files. With `keep_going` false, stops after
/// the first failure.
fn run(files: &[PathBuf], keep_going: bool, sink: &mut impl Write) -> anyhow::Result<usize> {
    let mut failures = 0;

    for file in files {
        match root_for_file(file) {
            Ok(root) => writeln!(sink, "{}: {}", file.display(), root)?,
            Err(err) => {
                failures += 1;
                writeln!(sink, "{}: error: {}", file.display(), err)?;
                if !keep_going {
                    break;
                }
            }
        }
    }

    Ok(failures)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut sink = stdout.lock();

    let failures = run(&cli.files, cli.keep_going, &mut sink)
        .context("failed to write report")?;

    if failures == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
