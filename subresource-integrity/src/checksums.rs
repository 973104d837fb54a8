// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

//! Conversions from and to [`ssri`], the integrity representation found in npm lockfiles.
//!
//! `ssri` has no notion of options, so they are lost when converting to it.

pub use ssri;
pub use ssri::{Error as SSRIError, Integrity};

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::value::IntegrityValue;

impl TryFrom<ssri::Algorithm> for Algorithm {
    type Error = Error;

    fn try_from(algorithm: ssri::Algorithm) -> Result<Self> {
        match algorithm {
            ssri::Algorithm::Sha512 => Ok(Algorithm::Sha512),
            ssri::Algorithm::Sha384 => Ok(Algorithm::Sha384),
            ssri::Algorithm::Sha256 => Ok(Algorithm::Sha256),
            other => Err(Error::UnsupportedAlgorithm {
                algorithm: other.to_string(),
                recognised: Algorithm::RECOGNISED,
            }),
        }
    }
}

impl From<Algorithm> for ssri::Algorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha512 => ssri::Algorithm::Sha512,
            Algorithm::Sha384 => ssri::Algorithm::Sha384,
            Algorithm::Sha256 => ssri::Algorithm::Sha256,
        }
    }
}

impl TryFrom<&ssri::Hash> for IntegrityValue {
    type Error = Error;

    fn try_from(hash: &ssri::Hash) -> Result<Self> {
        IntegrityValue::from_encoded_digest(hash.algorithm.try_into()?, &hash.digest, "")
    }
}

impl From<&IntegrityValue> for ssri::Hash {
    fn from(value: &IntegrityValue) -> Self {
        ssri::Hash {
            algorithm: value.algorithm().into(),
            digest: value.encoded_digest(),
        }
    }
}

/// Values of every hash in `integrity` we support, strongest first.
///
/// Like [`crate::parse`], unsupported algorithms are skipped.
pub fn from_integrity(integrity: &Integrity) -> Result<Vec<IntegrityValue>> {
    let mut values = integrity
        .hashes
        .iter()
        .filter(|hash| Algorithm::try_from(hash.algorithm).is_ok())
        .map(IntegrityValue::try_from)
        .collect::<Result<Vec<_>>>()?;
    values.sort_by_key(|value| value.algorithm().strength());
    Ok(values)
}

pub fn to_integrity<'a>(values: impl IntoIterator<Item = &'a IntegrityValue>) -> Integrity {
    Integrity {
        hashes: values.into_iter().map(ssri::Hash::from).collect(),
    }
}
