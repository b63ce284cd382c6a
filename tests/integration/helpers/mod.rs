//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the tagfmt binary with HOME pointed at `home`, so no user
/// config leaks into the test.
pub fn tagfmt(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tagfmt").expect("tagfmt binary is built");
    cmd.env("HOME", home.path()).env_remove("TAGFMT_LOG");
    cmd
}

/// Write `~/.config/tagfmt/config.toml` below `home`.
pub fn write_config(home: &TempDir, contents: &str) -> PathBuf {
    let dir = home.path().join(".config").join("tagfmt");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}
