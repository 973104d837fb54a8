// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use std::path::Path;

use anyhow::{Context, Result};
use argh::FromArgs;

use crate::read_input;

#[derive(FromArgs)]
#[argh(subcommand, name = "parse")]
/// List the values of an integrity attribute, strongest first
pub struct Parse {
    #[argh(positional)]
    /// attribute value, read from stdin if missing
    attribute: Option<String>,
}

pub fn run(sub: Parse) -> Result<()> {
    let attribute = match sub.attribute {
        Some(attribute) => attribute,
        None => String::from_utf8(read_input(Path::new("-"))?)
            .context("Integrity attribute is not valid UTF-8")?,
    };
    let values = subresource_integrity::parse(&attribute)
        .with_context(|| format!("Could not parse the integrity attribute {attribute:?}"))?;
    for value in values {
        print!("{} {}", value.algorithm(), value.encoded_digest());
        if !value.options().is_empty() {
            print!(" {}", value.options());
        }
        println!();
    }
    Ok(())
}
