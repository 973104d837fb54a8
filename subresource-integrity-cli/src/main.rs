// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

mod generate;
mod parse;

#[derive(FromArgs)]
/// Subresource integrity metadata.
struct Args {
    #[argh(switch, short = 'v')]
    /// print debug logs to stderr
    verbose: bool,

    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Generate(generate::Generate),
    Parse(parse::Parse),
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("SRI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Contents of `path`, or of stdin for `-`.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Could not read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("Could not read {path:?}"))
    }
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging(args.verbose);
    match args.subcommand {
        Subcommand::Generate(generate) => generate::run(generate),
        Subcommand::Parse(parse) => parse::run(parse),
    }
}
