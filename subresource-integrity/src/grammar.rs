// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

//! Matcher for the integrity metadata grammar.
//!
//! ```text
//! value      := WSP* algorithm "-" b64digest options? WSP*
//! algorithm  := "sha256" | "sha384" | "sha512"
//! b64digest  := [A-Za-z0-9+/]+ "="{0,2}
//! options    := "?" VCHAR*
//! ```
//!
//! `WSP` is space or tab (RFC 5234), `VCHAR` is `0x21..=0x7E`.
//! `algorithm` and `b64digest` come from the CSP2 `hash-algo` and `base64-value` productions.

use std::ops::Range;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt, recognize, value};
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};

use crate::algorithm::Algorithm;

/// One `value` occurrence, borrowed from the text it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression<'a> {
    pub algorithm: Algorithm,
    /// Digest exactly as written, padding included.
    pub b64digest: &'a str,
    /// Options without the leading `?`. Empty if there were none.
    pub options: &'a str,
    /// Byte range of the match in the scanned text, surrounding whitespace included.
    pub span: Range<usize>,
}

fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_base64(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

pub(crate) fn is_vchar(c: char) -> bool {
    ('\x21'..='\x7e').contains(&c)
}

fn wsp(input: &str) -> IResult<&str, &str> {
    take_while(is_wsp).parse(input)
}

fn algorithm(input: &str) -> IResult<&str, Algorithm> {
    alt((
        value(Algorithm::Sha512, tag("sha512")),
        value(Algorithm::Sha384, tag("sha384")),
        value(Algorithm::Sha256, tag("sha256")),
    ))
    .parse(input)
}

fn b64digest(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_base64),
        take_while_m_n(0, 2, |c: char| c == '='),
    ))
    .parse(input)
}

fn options(input: &str) -> IResult<&str, &str> {
    preceded(char('?'), take_while(is_vchar)).parse(input)
}

fn raw_value(input: &str) -> IResult<&str, (Algorithm, &str, Option<&str>)> {
    delimited(
        wsp,
        (algorithm, preceded(char('-'), b64digest), opt(options)),
        wsp,
    )
    .parse(input)
}

/// Matches a whole string against a single `value`.
///
/// Nothing but spaces and tabs may surround the expression.
///
/// # Example
/// ```
/// # use subresource_integrity::{grammar, Algorithm};
/// let raw = grammar::expression(" sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=?x\t").unwrap();
/// assert_eq!(raw.algorithm, Algorithm::Sha256);
/// assert_eq!(raw.b64digest, "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
/// assert_eq!(raw.options, "x");
///
/// assert!(grammar::expression("sha256-47DEQpj8 trailing").is_none());
/// assert!(grammar::expression("sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk=").is_none());
/// ```
pub fn expression(input: &str) -> Option<RawExpression<'_>> {
    all_consuming(raw_value)
        .parse(input)
        .ok()
        .map(|(_, (algorithm, b64digest, options))| RawExpression {
            algorithm,
            b64digest,
            options: options.unwrap_or(""),
            span: 0..input.len(),
        })
}

/// Iterator over every non-overlapping `value` in a string, left to right.
///
/// Text that doesn't start a `value` is stepped over one character at a time,
/// so expressions using unrecognised algorithms never match and are skipped.
///
/// # Example
/// ```
/// # use subresource_integrity::{grammar::Expressions, Algorithm};
/// let found: Vec<_> = Expressions::new("sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk= sha256-AAAA")
///     .map(|raw| (raw.algorithm, raw.b64digest))
///     .collect();
/// assert_eq!(found, [(Algorithm::Sha256, "AAAA")]);
/// ```
#[derive(Debug, Clone)]
pub struct Expressions<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Expressions<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }
}

impl<'a> Iterator for Expressions<'a> {
    type Item = RawExpression<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rest) = self.input.get(self.offset..).filter(|r| !r.is_empty()) {
            if let Ok((remaining, (algorithm, b64digest, options))) = raw_value(rest) {
                let start = self.offset;
                self.offset = self.input.len() - remaining.len();
                return Some(RawExpression {
                    algorithm,
                    b64digest,
                    options: options.unwrap_or(""),
                    span: start..self.offset,
                });
            }
            self.offset += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

impl std::iter::FusedIterator for Expressions<'_> {}
