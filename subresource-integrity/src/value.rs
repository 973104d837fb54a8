// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::grammar;

/// Standard alphabet. Encoding pads, decoding takes the digest with or without padding.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A single integrity assertion: `<algorithm>-<base64 digest>[?<options>]`.
///
/// The digest length always matches the algorithm, and options only ever hold visible ASCII,
/// so every value can be written out and read back unchanged.
///
/// # Example
/// ```
/// # use subresource_integrity::{Algorithm, IntegrityValue};
/// let value = IntegrityValue::from_resource(b"Hello world", Algorithm::Sha256, "").unwrap();
/// assert_eq!(value.to_string(), "sha256-ZOyIygCyaOW6GjVnihtTFtIS9PNmskdyMlNKiuyjfzw=");
///
/// let parsed: IntegrityValue = "sha256-ZOyIygCyaOW6GjVnihtTFtIS9PNmskdyMlNKiuyjfzw=".parse().unwrap();
/// assert_eq!(parsed, value);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntegrityValue {
    algorithm: Algorithm,
    digest: Vec<u8>,
    options: String,
}

fn check_options(options: &str) -> Result<()> {
    if options.chars().all(grammar::is_vchar) {
        Ok(())
    } else {
        Err(Error::InvalidOptions(options.to_string()))
    }
}

impl IntegrityValue {
    /// Every other constructor ends up here.
    ///
    /// # Example
    /// ```
    /// # use subresource_integrity::{Algorithm, Error, IntegrityValue};
    /// let err = IntegrityValue::new(Algorithm::Sha256, [0u8; 20], "").unwrap_err();
    /// assert!(matches!(err, Error::DigestLengthMismatch { expected: 32, actual: 20, .. }));
    /// ```
    pub fn new(
        algorithm: Algorithm,
        digest: impl Into<Vec<u8>>,
        options: impl Into<String>,
    ) -> Result<Self> {
        let digest = digest.into();
        let options = options.into();
        let expected = algorithm.digest_len();
        if digest.len() != expected {
            return Err(Error::DigestLengthMismatch {
                algorithm,
                expected,
                actual: digest.len(),
            });
        }
        check_options(&options)?;
        Ok(Self {
            algorithm,
            digest,
            options,
        })
    }

    /// Like [`IntegrityValue::new`], with the algorithm given by name.
    ///
    /// # Example
    /// ```
    /// # use subresource_integrity::{Error, IntegrityValue};
    /// let err = IntegrityValue::with_algorithm_name("md5", [0u8; 16], "").unwrap_err();
    /// assert!(matches!(err, Error::UnsupportedAlgorithm { .. }));
    /// ```
    pub fn with_algorithm_name(
        algorithm: &str,
        digest: impl Into<Vec<u8>>,
        options: impl Into<String>,
    ) -> Result<Self> {
        Self::new(algorithm.parse()?, digest, options)
    }

    /// Hashes `resource` with `algorithm`.
    pub fn from_resource(
        resource: &[u8],
        algorithm: Algorithm,
        options: impl Into<String>,
    ) -> Result<Self> {
        Self::new(algorithm, algorithm.hash(resource), options)
    }

    /// Decodes a digest written in standard base64.
    ///
    /// # Example
    /// ```
    /// # use subresource_integrity::{Algorithm, IntegrityValue};
    /// let value = IntegrityValue::from_encoded_digest(
    ///     Algorithm::Sha256, "ZOyIygCyaOW6GjVnihtTFtIS9PNmskdyMlNKiuyjfzw=", "").unwrap();
    /// assert_eq!(value.digest().len(), 32);
    /// ```
    pub fn from_encoded_digest(
        algorithm: Algorithm,
        b64digest: &str,
        options: impl Into<String>,
    ) -> Result<Self> {
        let digest = BASE64.decode(b64digest)?;
        Self::new(algorithm, digest, options)
    }

    /// Parses exactly one integrity expression.
    /// Spaces and tabs around it are allowed, anything else is not.
    ///
    /// # Example
    /// ```
    /// # use subresource_integrity::{Algorithm, IntegrityValue};
    /// let value = IntegrityValue::from_expression(
    ///     "sha256-ZOyIygCyaOW6GjVnihtTFtIS9PNmskdyMlNKiuyjfzw=?ct=application/javascript").unwrap();
    /// assert_eq!(value.algorithm(), Algorithm::Sha256);
    /// assert_eq!(value.options(), "ct=application/javascript");
    ///
    /// assert!(IntegrityValue::from_expression("sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk=").is_err());
    /// ```
    pub fn from_expression(expression: &str) -> Result<Self> {
        let raw = grammar::expression(expression)
            .ok_or_else(|| Error::MalformedIntegrityExpression(expression.to_string()))?;
        Self::from_raw(&raw)
    }

    pub(crate) fn from_raw(raw: &grammar::RawExpression<'_>) -> Result<Self> {
        Self::from_encoded_digest(raw.algorithm, raw.b64digest, raw.options)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Raw digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn options(&self) -> &str {
        &self.options
    }

    /// Digest in padded standard base64.
    pub fn encoded_digest(&self) -> String {
        BASE64.encode(&self.digest)
    }

    /// First value of the strongest algorithm present.
    ///
    /// # Example
    /// ```
    /// # use subresource_integrity::{Algorithm, IntegrityValue};
    /// let values = subresource_integrity::parse(
    ///     "sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU= \
    ///      sha384-OLBgp1GsljhM2TJ+sbHjaiH9txEUvgdDTAzHv2P24donTt6/529l+9Ua0vFImLlb").unwrap();
    /// let strongest = IntegrityValue::strongest(&values).unwrap();
    /// assert_eq!(strongest.algorithm(), Algorithm::Sha384);
    /// ```
    pub fn strongest(values: &[IntegrityValue]) -> Option<&IntegrityValue> {
        values.iter().reduce(|best, value| {
            if value.algorithm > best.algorithm {
                value
            } else {
                best
            }
        })
    }
}

impl fmt::Display for IntegrityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.algorithm, self.encoded_digest())?;
        if !self.options.is_empty() {
            write!(f, "?{}", self.options)?;
        }
        Ok(())
    }
}

impl fmt::Debug for IntegrityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntegrityValue")
            .field(&self.algorithm.as_str())
            .field(&self.encoded_digest())
            .field(&self.options)
            .finish()
    }
}

impl FromStr for IntegrityValue {
    type Err = Error;

    fn from_str(expression: &str) -> Result<Self> {
        Self::from_expression(expression)
    }
}

impl TryFrom<&str> for IntegrityValue {
    type Error = Error;

    fn try_from(expression: &str) -> Result<Self> {
        Self::from_expression(expression)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IntegrityValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntegrityValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let expression = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_expression(&expression).map_err(serde::de::Error::custom)
    }
}
