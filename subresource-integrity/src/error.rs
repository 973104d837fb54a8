// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use itertools::Itertools;
use thiserror::Error;

use crate::algorithm::Algorithm;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("Unsupported hash algorithm {algorithm:?}, must be one of: {}", names(.recognised))]
    UnsupportedAlgorithm {
        algorithm: String,
        recognised: &'static [Algorithm],
    },

    #[error("Digest length {actual} doesn't match {algorithm} digest length {expected}")]
    DigestLengthMismatch {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed base64 digest: {0}")]
    MalformedBase64(#[from] base64::DecodeError),

    #[error("Not a valid integrity value: {0:?}")]
    MalformedIntegrityExpression(String),

    #[error("Options may only contain visible ASCII characters: {0:?}")]
    InvalidOptions(String),
}

fn names(algorithms: &[Algorithm]) -> String {
    algorithms.iter().join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
