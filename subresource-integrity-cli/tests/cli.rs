// SPDX-FileCopyrightText: 2026 The Subresource Integrity Authors
// SPDX-License-Identifier: Apache-2.0 OR BSD-2-Clause

use anyhow::Result;
use assert_cmd::Command;

const HELLO: &str = "alert('Hello, world.');";
const HELLO_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/hello.js");
const HELLO_SHA256: &str = "sha256-qznLcsROx4GACP2dm0UCKCzCG+HiZ1guq6ZZDob/Tng=";
const HELLO_SHA384: &str = "sha384-H8BRh8j48O9oYatfu5AZzq6A9RINhZO5H16dQZngK7T62em8MUt1FLm52t+eX6xO";

#[test]
fn generate_default_algorithm() -> Result<()> {
    Command::cargo_bin("sri")?
        .arg("generate")
        .write_stdin(HELLO)
        .assert()
        .success()
        .stdout(format!("{HELLO_SHA384}\n"));

    Ok(())
}

#[test]
fn generate_algorithms_and_separator() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["generate", "-a", "sha256", "-a", "sha384", "-s", "\\n", "--", "-"])
        .write_stdin(HELLO)
        .assert()
        .success()
        .stdout(format!("{HELLO_SHA256}\n{HELLO_SHA384}\n"));

    Ok(())
}

#[test]
fn generate_files_and_stdin() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["generate", "-a", "sha256", "--", HELLO_FILE, "-"])
        .write_stdin("Hello world")
        .assert()
        .success()
        .stdout(format!(
            "{HELLO_SHA256}\nsha256-ZOyIygCyaOW6GjVnihtTFtIS9PNmskdyMlNKiuyjfzw=\n"
        ));

    Ok(())
}

#[test]
fn generate_file() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["generate", HELLO_FILE])
        .assert()
        .success()
        .stdout(format!("{HELLO_SHA384}\n"));

    Ok(())
}

#[test]
fn generate_stdin_twice() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["generate", "--", "-", "-"])
        .write_stdin("x")
        .assert()
        .failure()
        .stdout("");

    Ok(())
}

#[test]
fn generate_unsupported_algorithm() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["generate", "-a", "md5"])
        .write_stdin(HELLO)
        .assert()
        .failure();

    Ok(())
}

#[test]
fn generate_missing_file() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["generate", "does/not/exist.js"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn parse_orders_by_strength() -> Result<()> {
    let attribute = format!("sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk= {HELLO_SHA256}?x {HELLO_SHA384}");
    Command::cargo_bin("sri")?
        .args(["parse", attribute.as_str()])
        .assert()
        .success()
        .stdout(
            "sha384 H8BRh8j48O9oYatfu5AZzq6A9RINhZO5H16dQZngK7T62em8MUt1FLm52t+eX6xO\n\
             sha256 qznLcsROx4GACP2dm0UCKCzCG+HiZ1guq6ZZDob/Tng= x\n",
        );

    Ok(())
}

#[test]
fn parse_stdin() -> Result<()> {
    Command::cargo_bin("sri")?
        .arg("parse")
        .write_stdin(format!("{HELLO_SHA256}\n"))
        .assert()
        .success()
        .stdout("sha256 qznLcsROx4GACP2dm0UCKCzCG+HiZ1guq6ZZDob/Tng=\n");

    Ok(())
}

#[test]
fn parse_nothing_recognised() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["parse", "sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk="])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[test]
fn parse_malformed_digest() -> Result<()> {
    Command::cargo_bin("sri")?
        .args(["parse", "sha256-AAAA"])
        .assert()
        .failure();

    Ok(())
}
