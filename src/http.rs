// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Seekable flavor of the file system contract for HTTP-style serving
//!
//! Range-based transports need random access into the files they serve.
//! [`HttpFileSystem`] mirrors [`FileSystem`](crate::vfs::FileSystem) with a
//! stronger handle bound, and [`Overlay`] implements it with the exact same
//! decision chain: synthesized files seek trivially over their in-memory
//! buffer, everything else passes through to the backend's own handle.

use crate::overlay::{Overlay, OverlayFile};
use crate::synthetic::SyntheticFile;
use crate::token::TokenClassifier;
use crate::vfs::{DiskFile, DiskFs, MemoryFs, VfsFile};
use std::io::{self, Seek};

/// A file handle suitable for range-based serving: everything a [`VfsFile`]
/// offers plus random-access positioning.
pub trait HttpFile: VfsFile + Seek {}

impl<T: VfsFile + Seek> HttpFile for T {}

/// File-serving capability whose handles support seeking.
pub trait HttpFileSystem {
    /// Handle type produced by [`HttpFileSystem::open`].
    type File: HttpFile;

    /// Open the file at `path`.
    fn open(&self, path: &str) -> io::Result<Self::File>;
}

impl<B, C> HttpFileSystem for Overlay<B, C>
where
    B: HttpFileSystem,
    C: TokenClassifier,
{
    type File = OverlayFile<B::File>;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        self.intercept(path, |p| HttpFileSystem::open(self.backend(), p))
    }
}

impl HttpFileSystem for DiskFs {
    type File = DiskFile;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        crate::vfs::FileSystem::open(self, path)
    }
}

impl HttpFileSystem for MemoryFs {
    type File = SyntheticFile;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        crate::vfs::FileSystem::open(self, path)
    }
}
