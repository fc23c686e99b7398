//! utf8inspect CLI for byte-level and codepoint-level UTF-8 diagnostics.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "utf8inspect")]
#[command(about = "UTF-8 codepoint and byte diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Per-byte report: decimal, hex, and ASCII rendering of each byte
    Bytes(report::BytesArgs),
    /// Per-codepoint report: byte runs, widths, and scalar values
    Codepoints(report::CodepointsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Bytes(args) => report::run_bytes(args)?,
        Command::Codepoints(args) => report::run_codepoints(args)?,
    };

    std::process::exit(code)
}

mod report;
