use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use zeroize::Zeroizing;

use shatter::cli::{Cli, Commands};
use shatter::commands::{combine_shares, split_secret};
use shatter::domain::SplitConfig;

/// Read the secret from the input file when one is given, otherwise from
/// piped stdin. A terminal on stdin is an error rather than a prompt.
fn read_secret(input: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(path) = input {
        return fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No input provided: pass --input FILE or pipe the secret on stdin");
    }

    let mut secret = Vec::new();
    stdin
        .read_to_end(&mut secret)
        .context("Failed to read secret from stdin")?;
    Ok(secret)
}

/// Resolve combine arguments into share strings, reading each named file
/// when --file was passed.
fn resolve_shares(shares: Vec<String>, from_files: bool) -> Result<Vec<String>> {
    if !from_files {
        return Ok(shares);
    }

    shares
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|contents| contents.trim().to_string())
                .with_context(|| format!("Failed to read share file {path}"))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            parts,
            threshold,
            input,
        } => {
            // Validate the configuration before touching the secret.
            let config = SplitConfig::new(threshold, parts)?;

            let secret = Zeroizing::new(read_secret(input.as_deref())?);
            for share in split_secret(&secret, config)? {
                println!("{share}");
            }
        }
        Commands::Combine { shares, file } => {
            let share_strings = resolve_shares(shares, file)?;
            let secret = combine_shares(&share_strings)?;

            io::stdout()
                .write_all(&secret)
                .context("Failed to write secret to stdout")?;
        }
    }

    Ok(())
}
