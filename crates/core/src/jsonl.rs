// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) file utilities.
//!
//! Provides durable append-only storage for JSON-serializable records.
//! Each record is stored as a single JSON line with fsync for durability.
//!
//! A line only counts once its terminating newline is on disk. An append
//! interrupted by a crash can leave an unterminated tail; readers ignore it
//! and the next append trims it before writing.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use fs2::FileExt;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Appends a record to a JSONL file with fsync for durability.
///
/// The file is held under an exclusive advisory lock for the duration of
/// the write and closed before returning.
pub fn append<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;
    file.lock_exclusive()?;

    repair_tail(&mut file, path)?;
    file.write_all(line.as_bytes())?;
    file.sync_all()?;

    Ok(())
}

/// Reads all records from a JSONL file.
///
/// Skips empty lines and returns an empty vec if the file doesn't exist.
/// An unterminated final line that does not parse is treated as a torn
/// write and skipped; any other unparseable line is corruption.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let terminated = content.ends_with('\n');
    let last = content.lines().count();
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => records.push(record),
            Err(_) if !terminated && idx + 1 == last => {
                tracing::warn!(path = %path.display(), line = idx + 1, "ignoring torn record");
            }
            Err(e) => {
                return Err(Error::CorruptedRecord {
                    path: path.display().to_string(),
                    line: idx + 1,
                    reason: e.to_string(),
                })
            }
        }
    }

    Ok(records)
}

/// Makes sure the next byte written starts a fresh line.
///
/// A complete but unterminated last record (written by hand or by another
/// tool) gets its newline; a torn fragment is cut off.
fn repair_tail(file: &mut File, path: &Path) -> Result<()> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(());
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    if last[0] == b'\n' {
        return Ok(());
    }

    let mut content = Vec::new();
    file.seek(SeekFrom::Start(0))?;
    file.read_to_end(&mut content)?;
    let keep = content
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |i| i + 1);

    if serde_json::from_slice::<serde_json::Value>(&content[keep..]).is_ok() {
        file.write_all(b"\n")?;
    } else {
        tracing::warn!(
            path = %path.display(),
            bytes = content.len() - keep,
            "trimming torn record left by an interrupted append"
        );
        file.set_len(keep as u64)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
