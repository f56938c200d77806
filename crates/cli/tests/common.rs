// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `offreg` with an isolated environment rooted at `dir`.
pub fn offreg(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("offreg");
    cmd.env_remove("OFFREG_DATA_DIR")
        .env_remove("OFFREG_LOG")
        .env("OFFREG_CONFIG", dir.join("config.toml"))
        .arg("--data-dir")
        .arg(dir);
    cmd
}

/// Writes an empty config so the default config location is never read.
pub fn empty_config(dir: &Path) {
    std::fs::write(dir.join("config.toml"), "").unwrap();
}

/// Temp directory with config and every reference list cached.
pub fn ready_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    empty_config(temp.path());
    install_reference_lists(temp.path());
    temp
}

pub fn install_reference_lists(dir: &Path) {
    let write = |name: &str, content: &str| std::fs::write(dir.join(name), content).unwrap();
    write(
        "offline_ou_list",
        r#"[[["Main Library","4"],["Branch","5"]],"4"]"#,
    );
    write(
        "offline_pgt_list",
        r#"[[["Patron","2"],["Staff","3"]],"2"]"#,
    );
    write(
        "offline_cit_list",
        r#"[[["Drivers License","1"],["Passport","2"]],"1"]"#,
    );
    write(
        "offline_asv_list",
        r#"{"Reading Habits":{"description":"Tell us how you read","questions":[
            {"question":"How often do you visit?","answers":[["Weekly","[42,7,3]"],["Monthly","[43,7,3]"]]},
            {"question":"Favorite format?","answers":[["Print","[44,8,3]"],["Audio","[45,8,3]"]]}
        ]}}"#,
    );
}

/// Registration arguments with every required field filled in.
pub fn patron_args() -> Vec<&'static str> {
    vec![
        "register",
        "--barcode",
        "29000000123456",
        "--first-name",
        "Ada",
        "--last-name",
        "Lovelace",
        "--dob",
        "1990-01-31",
        "--ident-value",
        "D1234567",
        "--street1",
        "12 Main St",
        "--city",
        "Athens",
        "--state",
        "GA",
        "--post-code",
        "30601",
    ]
}

pub fn pending_lines(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("pending_xacts"))
        .unwrap_or_default()
        .lines()
        .map(String::from)
        .collect()
}
