// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use std::fmt;
use std::str::FromStr;

use sha2::Digest;

use crate::error::{Error, Result};

/// Hash algorithm of an integrity value.
///
/// Ordering follows algorithm strength, so the strongest algorithm compares greatest.
///
/// # Example
/// ```
/// # use subresource_integrity::Algorithm;
/// assert!(Algorithm::Sha512 > Algorithm::Sha384);
/// assert!(Algorithm::Sha384 > Algorithm::Sha256);
///
/// let alg: Algorithm = "sha256".parse().unwrap();
/// assert_eq!(alg, Algorithm::Sha256);
/// assert!("md5".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Algorithms understood by this crate, strongest first.
    pub const RECOGNISED: &'static [Algorithm] =
        &[Algorithm::Sha512, Algorithm::Sha384, Algorithm::Sha256];

    /// Used when the caller doesn't pick an algorithm.
    pub const DEFAULT: Algorithm = Algorithm::Sha384;

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Position in [`Algorithm::RECOGNISED`], 0 being the strongest.
    ///
    /// Sorting by this key puts the strongest algorithm first, the reverse of [`Ord`].
    pub fn strength(self) -> usize {
        match self {
            Algorithm::Sha512 => 0,
            Algorithm::Sha384 => 1,
            Algorithm::Sha256 => 2,
        }
    }

    /// Length in bytes of a digest produced by this algorithm.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha256 => sha2::Sha256::output_size(),
            Algorithm::Sha384 => sha2::Sha384::output_size(),
            Algorithm::Sha512 => sha2::Sha512::output_size(),
        }
    }

    /// Digest of `data` under this algorithm.
    ///
    /// # Example
    /// ```
    /// # use subresource_integrity::Algorithm;
    /// assert_eq!(Algorithm::Sha384.hash(b"").len(), 48);
    /// ```
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
            Algorithm::Sha384 => sha2::Sha384::digest(data).to_vec(),
            Algorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::DEFAULT
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Algorithm::RECOGNISED
            .iter()
            .copied()
            .find(|alg| alg.as_str() == name)
            .ok_or_else(|| Error::UnsupportedAlgorithm {
                algorithm: name.to_string(),
                recognised: Algorithm::RECOGNISED,
            })
    }
}

impl PartialEq<str> for Algorithm {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}
impl PartialEq<&str> for Algorithm {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
