//! nodekey CLI, the `compute-pubkey` command.
//!
//! Reads `privkey:<hex>` from standard input and prints the matching
//! `nodekey:<hex>` to standard output.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use zeroize::Zeroizing;

use nodekey::{derive_public_key, parse_private_key, PublicKey};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Derive a Curve25519 node key from a private key read on stdin.
#[derive(Parser, Debug)]
#[command(
    name = "compute-pubkey",
    about = "Derive a nodekey from a privkey",
    version,
    long_about = "compute-pubkey: derive a Curve25519 node key\n\nReads `privkey:<64 hex chars>` from standard input and prints\n`nodekey:<64 hex chars>` to standard output.\n\nExample:\n  echo \"privkey:<hex>\" | compute-pubkey"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,
}

/// JSON output shape for `--json`.
#[derive(serde::Serialize)]
struct JsonOutput {
    nodekey: PublicKey,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// ── Command implementation ────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(io::stdin().lock())?;
    let line = render(&input, cli.json)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write node key")?;
    stdout.flush().context("failed to write node key")?;
    Ok(())
}

/// Read all of `reader` into a buffer that is wiped on drop.
fn read_input<R: Read>(mut reader: R) -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    reader
        .read_to_string(&mut input)
        .context("failed to read private key from stdin")?;
    log::debug!("read {} bytes from stdin", input.len());
    Ok(input)
}

/// Turn raw stdin text into the output line. Nothing is printed on error.
fn render(input: &str, json: bool) -> Result<String> {
    let private = parse_private_key(input)?;
    let public = derive_public_key(&private)?;

    if json {
        Ok(serde_json::to_string(&JsonOutput { nodekey: public })?)
    } else {
        Ok(public.to_string())
    }
}
