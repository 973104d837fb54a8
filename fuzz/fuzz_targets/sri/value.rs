// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use subresource_integrity::{Algorithm, IntegrityValue};

#[derive(Debug, Arbitrary)]
struct Input {
    algorithm: u8,
    digest: Vec<u8>,
    options: String,
    expression: String,
}

fuzz_target!(|input: Input| {
    let algorithm = Algorithm::RECOGNISED[usize::from(input.algorithm) % Algorithm::RECOGNISED.len()];
    if let Ok(value) = IntegrityValue::new(algorithm, input.digest, input.options) {
        let text = value.to_string();
        assert_eq!(IntegrityValue::from_expression(&text).unwrap(), value);
    }
    if let Ok(value) = IntegrityValue::from_expression(&input.expression) {
        let _ = value.encoded_digest();
        let _ = IntegrityValue::strongest(&[value]);
    }
});
