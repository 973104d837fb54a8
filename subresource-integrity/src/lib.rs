// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

//! Create and parse [subresource integrity](https://www.w3.org/TR/SRI/) metadata,
//! the `integrity` attribute of `<script>` and `<link>` elements.
//!
//! ```
//! let data = b"alert('Hello, world.');";
//! assert_eq!(
//!     subresource_integrity::render_default(data),
//!     "sha384-H8BRh8j48O9oYatfu5AZzq6A9RINhZO5H16dQZngK7T62em8MUt1FLm52t+eX6xO",
//! );
//! ```

use itertools::Itertools;
use tracing::{debug, trace};

pub use crate::algorithm::Algorithm;
pub use crate::error::{Error, Result};
pub use crate::value::IntegrityValue;

mod algorithm;
#[cfg(feature = "ssri")]
pub mod checksums;
pub mod error;
pub mod grammar;
mod value;

const DEFAULT_ALGORITHMS: &[Algorithm] = &[Algorithm::DEFAULT];

/// Integrity values of `data`, one per algorithm, in the order the algorithms were given.
///
/// # Example
/// ```
/// # use subresource_integrity::{generate, Algorithm};
/// let values: Vec<_> = generate(b"Hello world", &[Algorithm::Sha256]).collect();
/// assert_eq!(values.len(), 1);
/// assert_eq!(values[0].encoded_digest(), "ZOyIygCyaOW6GjVnihtTFtIS9PNmskdyMlNKiuyjfzw=");
/// ```
pub fn generate<'a>(
    data: &'a [u8],
    algorithms: &'a [Algorithm],
) -> impl Iterator<Item = IntegrityValue> + 'a {
    algorithms.iter().map(move |&algorithm| {
        IntegrityValue::from_resource(data, algorithm, "")
            .expect("a computed digest has the algorithm's length")
    })
}

/// [`generate`] with only [`Algorithm::DEFAULT`].
pub fn generate_default(data: &[u8]) -> impl Iterator<Item = IntegrityValue> + '_ {
    generate(data, DEFAULT_ALGORITHMS)
}

/// Integrity attribute for `data`, values joined by `separator`.
///
/// # Example
/// ```
/// # use subresource_integrity::{render, Algorithm};
/// let data = b"alert('Hello, world.');";
/// assert_eq!(
///     render(data, &[Algorithm::Sha256, Algorithm::Sha384], "\n"),
///     "sha256-qznLcsROx4GACP2dm0UCKCzCG+HiZ1guq6ZZDob/Tng=\n\
///      sha384-H8BRh8j48O9oYatfu5AZzq6A9RINhZO5H16dQZngK7T62em8MUt1FLm52t+eX6xO",
/// );
/// ```
pub fn render(data: &[u8], algorithms: &[Algorithm], separator: &str) -> String {
    generate(data, algorithms).join(separator)
}

/// [`render`] with only [`Algorithm::DEFAULT`], space separated.
pub fn render_default(data: &[u8]) -> String {
    render(data, DEFAULT_ALGORITHMS, " ")
}

/// Parses an integrity attribute, strongest algorithm first.
///
/// Expressions with unrecognised algorithms, and any other text between expressions,
/// are skipped. Values sharing an algorithm keep the order they were written in.
///
/// # Example
/// ```
/// # use subresource_integrity::{parse, Algorithm};
/// let values = parse(
///     "sha384-dOTZf16X8p34q2/kYyEFm0jh89uTjikhnzjeLeF0FHsEaYKb1A1cv+Lyv4Hk8vHd \
///      sha512-Q2bFTOhEALkN8hOms2FKTDLy7eugP2zFZ1T8LCvX42Fp3WoNr3bjZSAHeOsHrbV1Fu9/A0EzCinRE7Af1ofPrw==",
/// ).unwrap();
/// assert_eq!(values.len(), 2);
/// assert_eq!(values[0].algorithm(), Algorithm::Sha512);
/// assert_eq!(values[1].algorithm(), Algorithm::Sha384);
///
/// assert!(parse("sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk=").unwrap().is_empty());
/// ```
pub fn parse(integrity: &str) -> Result<Vec<IntegrityValue>> {
    let mut values = Vec::new();
    let mut last_end = 0;
    for raw in grammar::Expressions::new(integrity) {
        log_skipped(&integrity[last_end..raw.span.start]);
        last_end = raw.span.end;
        trace!(
            algorithm = %raw.algorithm,
            digest = raw.b64digest,
            options = raw.options,
            "found integrity expression"
        );
        values.push(IntegrityValue::from_raw(&raw)?);
    }
    log_skipped(&integrity[last_end..]);
    values.sort_by_key(|value| value.algorithm().strength());
    Ok(values)
}

fn log_skipped(text: &str) {
    let text = text.trim_matches([' ', '\t']);
    if !text.is_empty() {
        debug!(skipped = text, "ignoring text without a recognised integrity expression");
    }
}
