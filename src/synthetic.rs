// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! In-memory file handles served in place of backend files

use crate::vfs::{FileInfo, VfsFile};
use bytes::Bytes;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// A file computed on demand rather than stored in the backend.
///
/// The handle owns its entire content as an in-memory buffer. Reading and
/// seeking operate on that buffer, closing releases nothing beyond it, and
/// directory listing always fails because a synthesized file never
/// represents a directory.
#[derive(Debug, Clone)]
pub struct SyntheticFile {
    data: Cursor<Bytes>,
    info: FileInfo,
}

impl SyntheticFile {
    /// Wrap `data` in a handle described by `info`.
    ///
    /// The descriptor's size is recomputed from the buffer and its directory
    /// flag cleared; the name, mode, and modification time are served as
    /// given.
    pub fn new(data: impl Into<Bytes>, info: FileInfo) -> Self {
        let data = data.into();
        let info = FileInfo {
            size: data.len() as u64,
            is_dir: false,
            ..info
        };

        Self {
            data: Cursor::new(data),
            info,
        }
    }

    /// The full content, regardless of the current read position.
    pub fn contents(&self) -> &Bytes {
        self.data.get_ref()
    }
}

impl Read for SyntheticFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl Seek for SyntheticFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.data.seek(pos)
    }
}

impl VfsFile for SyntheticFile {
    fn stat(&self) -> io::Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn read_dir(&mut self) -> io::Result<Vec<String>> {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            size: 0,
            mode: 0o644,
            modified: None,
            is_dir: false,
        }
    }

    #[test]
    fn size_is_recomputed_from_buffer() {
        let file = SyntheticFile::new("hello", info("a.js"));
        let stat = file.stat().unwrap();
        assert_eq!(stat.size, 5);
        assert_eq!(stat.name, "a.js");
    }

    #[test]
    fn reads_full_content() {
        let mut file = SyntheticFile::new("console.log(1);", info("a.js"));
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        assert_eq!(out, "console.log(1);");
    }

    #[test]
    fn seeks_over_buffer() {
        let mut file = SyntheticFile::new("0123456789", info("a.js"));
        file.seek(SeekFrom::Start(4)).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        assert_eq!(out, "456789");

        file.seek(SeekFrom::End(-2)).unwrap();
        out.clear();
        file.read_to_string(&mut out).unwrap();
        assert_eq!(out, "89");
    }

    #[test]
    fn directory_listing_always_fails() {
        let mut file = SyntheticFile::new("", info("a.js"));
        assert_eq!(
            file.read_dir().unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn directory_flag_is_cleared() {
        let file = SyntheticFile::new(
            "x",
            FileInfo {
                is_dir: true,
                ..info("a.js")
            },
        );
        assert!(!file.stat().unwrap().is_dir);
    }

    #[test]
    fn close_is_a_no_op() {
        let file = SyntheticFile::new("x", info("a.js"));
        file.close().unwrap();
    }
}
