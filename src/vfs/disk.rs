// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Disk-backed file system rooted at a directory

use super::{FileInfo, FileSystem, VfsFile};
use std::fs;
use std::io::{self, Read, Seek, SeekFrom};
use std::os::unix::fs::PermissionsExt;
use std::path::{Component, Path, PathBuf};

/// A [`FileSystem`] serving the files beneath a root directory.
///
/// Request paths are slash-separated and resolved beneath the root; paths
/// containing `..` components are rejected so a request can never escape the
/// served tree.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    /// Serve the tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let rel = path.trim_start_matches('/');

        if Path::new(rel)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path escapes the served root",
            ));
        }

        Ok(self.root.join(rel))
    }
}

impl FileSystem for DiskFs {
    type File = DiskFile;

    fn open(&self, path: &str) -> io::Result<DiskFile> {
        let full = self.resolve(path)?;
        let file = fs::File::open(&full)?;

        Ok(DiskFile {
            file,
            path: full,
            name: path.to_string(),
        })
    }
}

/// Handle to a file opened from a [`DiskFs`].
#[derive(Debug)]
pub struct DiskFile {
    file: fs::File,
    path: PathBuf,
    name: String,
}

impl Read for DiskFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for DiskFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl VfsFile for DiskFile {
    fn stat(&self) -> io::Result<FileInfo> {
        let meta = self.file.metadata()?;

        Ok(FileInfo {
            name: self.name.clone(),
            size: meta.len(),
            mode: meta.permissions().mode(),
            modified: meta.modified().ok(),
            is_dir: meta.is_dir(),
        })
    }

    fn read_dir(&mut self) -> io::Result<Vec<String>> {
        if !self.file.metadata()?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a directory",
            ));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, DiskFs) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.ts"), "const a: number = 1;").unwrap();
        fs::write(dir.path().join("plain.js"), "console.log(1);").unwrap();
        let disk = DiskFs::new(dir.path());
        (dir, disk)
    }

    #[test]
    fn opens_and_reads_files() {
        let (_dir, disk) = fixture();
        let mut file = disk.open("plain.js").unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        assert_eq!(out, "console.log(1);");
    }

    #[test]
    fn stat_reports_name_and_size() {
        let (_dir, disk) = fixture();
        let file = disk.open("app.ts").unwrap();
        let info = file.stat().unwrap();
        assert_eq!(info.name, "app.ts");
        assert_eq!(info.size, 20);
        assert!(!info.is_dir);
        assert!(info.modified.is_some());
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, disk) = fixture();
        assert_eq!(
            disk.open("absent.js").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn parent_components_are_rejected() {
        let (_dir, disk) = fixture();
        assert_eq!(
            disk.open("../escape.js").unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn leading_slash_is_accepted() {
        let (_dir, disk) = fixture();
        assert!(disk.open("/plain.js").is_ok());
    }

    #[test]
    fn directories_list_their_entries() {
        let (_dir, disk) = fixture();
        let mut root = disk.open("").unwrap();
        assert_eq!(root.read_dir().unwrap(), vec!["app.ts", "plain.js"]);
    }

    #[test]
    fn listing_a_regular_file_fails() {
        let (_dir, disk) = fixture();
        let mut file = disk.open("plain.js").unwrap();
        assert_eq!(
            file.read_dir().unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    }
}
