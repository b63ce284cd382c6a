//! Config file handling through the binary

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{tagfmt, write_config};

#[test]
fn config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[format]
syntax = "xml"
strip = true
"#,
    );
    tagfmt(&home)
        .arg("<r>x</> y")
        .assert()
        .success()
        .stdout("x y");
}

#[test]
fn flags_override_config_syntax() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[format]\nsyntax = \"xml\"\nstrip = true\n");
    tagfmt(&home)
        .args(["--syntax", "classic", "<r>x</> {r--y--}"])
        .assert()
        .success()
        .stdout("<r>x</> y");
}

#[test]
fn no_sanitize_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[format]\nsanitize = true\n");
    tagfmt(&home)
        .args(["-S", "x"])
        .assert()
        .success()
        .stdout("\x1b[0;39;49mx");
}

#[test]
fn config_custom_syntax() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[format]
syntax = "custom"
strip = true
escape = true

[custom_syntax]
open = "%("
open_end = ":"
close = ")%"
"#,
    );
    tagfmt(&home)
        .arg("%(g:green)%\\t!")
        .assert()
        .success()
        .stdout("green\t!");
}

#[test]
fn malformed_config_fails() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[format\n");
    tagfmt(&home)
        .arg("x")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Failed to load configuration")
                .and(predicate::str::contains("Failed to parse config file")),
        );
}

#[test]
fn custom_syntax_without_table_fails() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[format]\nsyntax = \"custom\"\n");
    tagfmt(&home)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[custom_syntax] is missing"));
}

#[test]
fn version_works_with_broken_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "not toml at all [");
    tagfmt(&home).arg("--version").assert().success();
}
