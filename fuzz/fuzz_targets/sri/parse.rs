// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

#![no_main]

use libfuzzer_sys::fuzz_target;

use subresource_integrity::grammar::Expressions;
use subresource_integrity::{parse, IntegrityValue};

fuzz_target!(|data: String| {
    for raw in Expressions::new(&data) {
        assert!(data.is_char_boundary(raw.span.start));
        assert!(data.is_char_boundary(raw.span.end));
    }
    if let Ok(values) = parse(&data) {
        for value in values {
            let text = value.to_string();
            assert_eq!(IntegrityValue::from_expression(&text).unwrap(), value);
        }
    }
});
