// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # veneer
//!
//! A file system overlay that serves TypeScript sources as JavaScript.
//!
//! When a caller opens a `.js` path that has a `.ts` sibling, the overlay
//! parses the sibling and serves it with every TypeScript-only span wrapped
//! in a block comment. Nothing is deleted, so the JavaScript that remains
//! keeps its original byte offsets and line numbers:
//!
//! ```text
//! Request:  main.js
//! Sibling:  main.ts    function hello(name: string) {}
//! Served:               function hello(name/*: string*/) {}
//! ```
//!
//! Every other request passes through to the wrapped backend untouched.
//! So does any `.js` request whose sibling is missing, unreadable, or
//! fails to parse (unless a diagnostic emitter is configured).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veneer::{DiskFs, FileSystem, Overlay};
//!
//! // `classifier` is any TokenClassifier, typically a TypeScript parser
//! // that tags each token as plain JavaScript or TypeScript-only.
//! let files = Overlay::new(DiskFs::new("./assets"), classifier);
//!
//! let mut file = files.open("main.js")?;   // synthesized from main.ts
//! ```
//!
//! ## Diagnostics
//!
//! By default a sibling that fails to parse is invisible: the request falls
//! through to the backend. Configure an emitter to serve the parse error
//! instead, so the failure surfaces in the consuming environment:
//!
//! ```rust,ignore
//! use veneer::{ConsoleLogEmitter, DiskFs, Overlay};
//!
//! let files = Overlay::with_diagnostics(
//!     DiskFs::new("./assets"),
//!     classifier,
//!     ConsoleLogEmitter,
//! );
//! ```
//!
//! ## Backend Flavors
//!
//! The overlay wraps either of two capabilities with identical behavior:
//! [`FileSystem`] for plain sequential access, and [`HttpFileSystem`] for
//! transports that need seekable handles (HTTP range requests). Synthesized
//! files satisfy both, since their content is a fully materialized buffer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod erase;
pub mod error;
pub mod http;
pub mod overlay;
pub mod synthetic;
pub mod token;
pub mod vfs;

// Re-exports
pub use diagnostics::{ConsoleLogEmitter, DiagnosticEmitter};
pub use erase::erase;
pub use error::ParseError;
pub use http::{HttpFile, HttpFileSystem};
pub use overlay::{Overlay, OverlayFile};
pub use synthetic::SyntheticFile;
pub use token::{ClassifiedToken, TokenClassifier, TokenKind};
pub use vfs::{DiskFs, FileInfo, FileSystem, MemoryFs, VfsFile};

/// Version of the veneer library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
