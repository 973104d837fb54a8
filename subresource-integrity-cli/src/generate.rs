// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use std::path::PathBuf;

use anyhow::{bail, Result};
use argh::FromArgs;
use subresource_integrity::Algorithm;
use tracing::debug;

use crate::{is_stdin, read_input};

#[derive(FromArgs)]
#[argh(subcommand, name = "generate")]
/// Compute the integrity attribute of files
pub struct Generate {
    #[argh(option, short = 'a', long = "algorithm")]
    /// sha256, sha384 or sha512. Repeat for several values. Defaults to sha384
    algorithms: Vec<Algorithm>,

    #[argh(option, short = 's', default = "String::from(\" \")")]
    /// text between values, \n and \t are understood
    separator: String,

    #[argh(positional)]
    /// files to hash, stdin if none are given. Put -- before a - to read stdin among files
    files: Vec<PathBuf>,
}

fn unescape(separator: &str) -> String {
    separator.replace("\\n", "\n").replace("\\t", "\t")
}

pub fn run(sub: Generate) -> Result<()> {
    let algorithms = if sub.algorithms.is_empty() {
        vec![Algorithm::DEFAULT]
    } else {
        sub.algorithms
    };
    let separator = unescape(&sub.separator);
    let files = if sub.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        sub.files
    };
    if files.iter().filter(|file| is_stdin(file)).count() > 1 {
        bail!("stdin (-) can only be hashed once");
    }

    for file in files {
        let data = read_input(&file)?;
        debug!(file = ?file, len = data.len(), "hashing");
        println!(
            "{}",
            subresource_integrity::render(&data, &algorithms, &separator)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::unescape;

    #[test]
    fn separator_escapes() {
        assert_eq!(unescape(" "), " ");
        assert_eq!(unescape("\\n"), "\n");
        assert_eq!(unescape(",\\t"), ",\t");
    }
}
