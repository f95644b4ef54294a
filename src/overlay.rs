// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Open interception: passthrough, synthesis, or diagnostic substitute
//!
//! [`Overlay`] wraps a backend file system and intercepts opens of `.js`
//! paths. When a `.ts` sibling exists and parses, the caller receives a
//! [`SyntheticFile`] with the TypeScript-only syntax commented out; in every
//! other case the caller receives exactly what the backend returns for the
//! original path.

use crate::diagnostics::DiagnosticEmitter;
use crate::erase::erase;
use crate::synthetic::SyntheticFile;
use crate::token::TokenClassifier;
use crate::vfs::{FileInfo, FileSystem, VfsFile};
use std::io::{self, Read, Seek, SeekFrom};
use tracing::{debug, trace};

const JS_EXT: &str = ".js";
const TS_EXT: &str = ".ts";

/// Wraps a backend so requests for `.js` files are answered from their `.ts`
/// siblings.
///
/// The overlay holds no mutable state and no cache: every open re-reads and
/// re-parses the sibling, trading per-call cost for freshness. It is safe to
/// share across threads whenever the backend, classifier, and emitter are.
///
/// Deprecated TypeScript constructs that need multi-pass analysis, such as
/// namespace merging and enum numbering, are not transpiled; sources using
/// them fail to parse and fall through like any other parse failure. Since
/// one file is transpiled at a time, imported types must be annotated as
/// type imports.
pub struct Overlay<B, C> {
    backend: B,
    classifier: C,
    emitter: Option<Box<dyn DiagnosticEmitter + Send + Sync>>,
}

impl<B, C> Overlay<B, C> {
    /// Wrap `backend`, consulting `classifier` to parse sibling sources.
    ///
    /// Parse failures are invisible to callers: the request falls through to
    /// the backend as if no sibling existed.
    pub fn new(backend: B, classifier: C) -> Self {
        Self {
            backend,
            classifier,
            emitter: None,
        }
    }

    /// Like [`Overlay::new`], but parse failures are answered with whatever
    /// `emitter` writes instead of falling through.
    pub fn with_diagnostics(
        backend: B,
        classifier: C,
        emitter: impl DiagnosticEmitter + Send + Sync + 'static,
    ) -> Self {
        Self {
            backend,
            classifier,
            emitter: Some(Box::new(emitter)),
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B, C: TokenClassifier> Overlay<B, C> {
    /// The decision chain shared by both backend flavors: any failure before
    /// successful synthesis produces the same passthrough outcome.
    pub(crate) fn intercept<F, O>(&self, path: &str, open: O) -> io::Result<OverlayFile<F>>
    where
        F: VfsFile,
        O: Fn(&str) -> io::Result<F>,
    {
        if let Some(sibling) = sibling_path(path) {
            if let Ok(source) = open(&sibling) {
                if let Some(file) = self.synthesize(source, path) {
                    debug!("Serving {} from {}", path, sibling);
                    return Ok(OverlayFile::Synthetic(file));
                }
            } else {
                trace!("No sibling {} for {}", sibling, path);
            }
        }

        open(path).map(OverlayFile::Backend)
    }

    /// Build the synthesized replacement from an opened sibling, or `None`
    /// when any stage fails and the request should fall through. The sibling
    /// handle is released as soon as its bytes are consumed.
    fn synthesize<F: VfsFile>(&self, mut sibling: F, requested: &str) -> Option<SyntheticFile> {
        let info = match sibling.stat() {
            Ok(info) => info,
            Err(err) => {
                debug!("Failed to stat sibling of {}: {}", requested, err);
                return None;
            }
        };

        let mut source = Vec::with_capacity(info.size as usize);
        if let Err(err) = sibling.read_to_end(&mut source) {
            debug!("Failed to read sibling of {}: {}", requested, err);
            return None;
        }
        drop(sibling);

        // Synthesized files report the requested name and the sibling's
        // mtime and mode; the size is recomputed from the buffer.
        let info = FileInfo {
            name: requested.to_string(),
            ..info
        };

        match self.classifier.classify(&source) {
            Ok(tokens) => {
                trace!("Erasing {} tokens for {}", tokens.len(), requested);
                Some(SyntheticFile::new(erase(&tokens), info))
            }
            Err(err) => {
                let emitter = match &self.emitter {
                    Some(emitter) => emitter,
                    None => {
                        debug!("Sibling of {} failed to parse: {}", requested, err);
                        return None;
                    }
                };

                let mut buf = Vec::new();
                match emitter.emit(&mut buf, &err) {
                    Ok(()) => Some(SyntheticFile::new(buf, info)),
                    Err(err) => {
                        debug!("Diagnostic emitter failed for {}: {}", requested, err);
                        None
                    }
                }
            }
        }
    }
}

impl<B, C> FileSystem for Overlay<B, C>
where
    B: FileSystem,
    C: TokenClassifier,
{
    type File = OverlayFile<B::File>;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        self.intercept(path, |p| self.backend.open(p))
    }
}

/// Derive the `.ts` sibling for a `.js` request.
fn sibling_path(path: &str) -> Option<String> {
    path.strip_suffix(JS_EXT)
        .map(|stem| format!("{stem}{TS_EXT}"))
}

/// Handle returned by the overlay: the backend's own file or a synthesized
/// one. Reads, seeks, and stats forward to whichever arm is held.
#[derive(Debug)]
pub enum OverlayFile<F> {
    /// Passthrough of the backend's handle for the requested path.
    Backend(F),
    /// Synthesized from the sibling source.
    Synthetic(SyntheticFile),
}

impl<F: Read> Read for OverlayFile<F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            OverlayFile::Backend(file) => file.read(buf),
            OverlayFile::Synthetic(file) => file.read(buf),
        }
    }
}

impl<F: Seek> Seek for OverlayFile<F> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            OverlayFile::Backend(file) => file.seek(pos),
            OverlayFile::Synthetic(file) => file.seek(pos),
        }
    }
}

impl<F: VfsFile> VfsFile for OverlayFile<F> {
    fn stat(&self) -> io::Result<FileInfo> {
        match self {
            OverlayFile::Backend(file) => file.stat(),
            OverlayFile::Synthetic(file) => file.stat(),
        }
    }

    fn read_dir(&mut self) -> io::Result<Vec<String>> {
        match self {
            OverlayFile::Backend(file) => file.read_dir(),
            OverlayFile::Synthetic(file) => file.read_dir(),
        }
    }
}
