// src/cli.rs
use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::walker::walk;
use crate::utils::{format_summary, read_root_path};

pub const PROMPT: &str = "Dossier: ";

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to count (asked for on standard input when omitted)
    pub directory: Option<PathBuf>,

    /// Log more to standard error (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Runs the tool against the process's standard input and output.
///
/// # Errors
///
/// Fails if no directory is given, if the tree cannot be walked, or if
/// standard output cannot be written.
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Prompts on `output` unless `args` names a directory, walks it, and writes
/// the summary line. Nothing past the prompt is written on failure.
///
/// # Errors
///
/// Same conditions as [`run`].
pub fn execute<R, W>(args: &Args, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let root = match &args.directory {
        Some(directory) => directory.clone(),
        None => prompt_for_directory(input, output)?,
    };

    let totals = walk(&root).with_context(|| {
        format!("Failed to count entries in directory: {}", root.display())
    })?;

    writeln!(output, "{}", format_summary(&root, &totals))?;
    output.flush()?;
    Ok(())
}

fn prompt_for_directory<R, W>(input: &mut R, output: &mut W) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    read_root_path(input)
        .context("Failed to read directory from standard input")?
        .ok_or_else(|| anyhow!("No directory given on standard input"))
}
