// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline queue of pending registrations.
//!
//! Uses JSONL format for durability - each registration is written as a
//! single line and fsynced before `append` returns. Entries are never edited
//! in place; the sync tool uploads the whole file and removes it.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::jsonl;
use crate::patron::PendingRegistration;

/// File name of the queue inside the data directory.
pub const PENDING_FILE_NAME: &str = "pending_xacts";

/// Durable append-only log of pending registrations.
///
/// Implementations must only report success from [`append`](Self::append)
/// once the record will survive a crash.
pub trait PendingStore {
    /// Adds a record after all existing ones.
    fn append(&self, record: &PendingRegistration) -> Result<()>;

    /// Returns every queued record in append order.
    fn read_all(&self) -> Result<Vec<PendingRegistration>>;

    /// Get the number of queued records.
    fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the queue is empty.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Offline queue stored as a JSONL file.
///
/// No file handle is kept between calls: every append opens, locks, writes
/// and closes the file.
#[derive(Debug, Clone)]
pub struct OfflineQueue {
    /// Path to the queue file.
    path: PathBuf,
}

impl OfflineQueue {
    /// Opens the queue at the given path. The file is created on first append.
    pub fn open(path: impl AsRef<Path>) -> Self {
        OfflineQueue {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Opens the `pending_xacts` queue in a data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::open(dir.join(PENDING_FILE_NAME))
    }

    /// Returns the path to the queue file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PendingStore for OfflineQueue {
    fn append(&self, record: &PendingRegistration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        jsonl::append(&self.path, record)
    }

    fn read_all(&self) -> Result<Vec<PendingRegistration>> {
        jsonl::read_all(&self.path)
    }
}

/// In-memory queue, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryQueue {
    records: RefCell<Vec<PendingRegistration>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PendingStore for MemoryQueue {
    fn append(&self, record: &PendingRegistration) -> Result<()> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<PendingRegistration>> {
        Ok(self.records.borrow().clone())
    }
}

impl<S: PendingStore + ?Sized> PendingStore for &S {
    fn append(&self, record: &PendingRegistration) -> Result<()> {
        (**self).append(record)
    }

    fn read_all(&self) -> Result<Vec<PendingRegistration>> {
        (**self).read_all()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
