// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! In-memory file system for tests and embedded assets

use super::{FileInfo, FileSystem};
use crate::synthetic::SyntheticFile;
use bytes::Bytes;
use std::collections::HashMap;
use std::io;
use std::time::SystemTime;

/// A [`FileSystem`] serving a fixed map of paths to contents.
///
/// Handles are in-memory and carry the insertion time as their modification
/// time. Useful as a test double and for assets compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashMap<String, (Bytes, SystemTime)>,
}

impl MemoryFs {
    /// An empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing any previous content at `path`.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Bytes>) {
        self.files
            .insert(path.into(), (contents.into(), SystemTime::now()));
    }

    /// Builder-style [`MemoryFs::insert`].
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl FileSystem for MemoryFs {
    type File = SyntheticFile;

    fn open(&self, path: &str) -> io::Result<SyntheticFile> {
        let (data, modified) = self
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{path}: not found")))?;

        Ok(SyntheticFile::new(
            data.clone(),
            FileInfo {
                name: path.to_string(),
                size: data.len() as u64,
                mode: 0o644,
                modified: Some(*modified),
                is_dir: false,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VfsFile;
    use std::io::Read;

    #[test]
    fn serves_inserted_files() {
        let fs = MemoryFs::new().with_file("a.txt", "hello");
        let mut file = fs.open("a.txt").unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");
        assert_eq!(file.stat().unwrap().name, "a.txt");
    }

    #[test]
    fn missing_paths_are_not_found() {
        let fs = MemoryFs::new();
        assert_eq!(
            fs.open("nope.txt").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn insert_replaces_content() {
        let mut fs = MemoryFs::new();
        fs.insert("a.txt", "one");
        fs.insert("a.txt", "two");
        let mut out = String::new();
        fs.open("a.txt").unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, "two");
    }
}
