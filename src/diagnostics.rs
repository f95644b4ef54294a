// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Substitute content for sibling sources that fail to parse

use crate::error::ParseError;
use std::io::{self, Write};

/// Strategy invoked when a sibling source fails to parse.
///
/// Whatever the emitter writes into `sink` is served to the caller in place
/// of the synthesized JavaScript, so parse failures become debuggable in the
/// consuming environment instead of silently producing missing content. When
/// no emitter is configured, the overlay falls through to the backend
/// instead.
pub trait DiagnosticEmitter {
    /// Write caller-visible diagnostic bytes for `error`.
    fn emit(&self, sink: &mut dyn Write, error: &ParseError) -> io::Result<()>;
}

impl<F> DiagnosticEmitter for F
where
    F: Fn(&mut dyn Write, &ParseError) -> io::Result<()>,
{
    fn emit(&self, sink: &mut dyn Write, error: &ParseError) -> io::Result<()> {
        self(sink, error)
    }
}

/// Emits a `console.log` statement carrying the parse error message, so the
/// error surfaces wherever the generated script runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogEmitter;

impl DiagnosticEmitter for ConsoleLogEmitter {
    fn emit(&self, sink: &mut dyn Write, error: &ParseError) -> io::Result<()> {
        // JSON string quoting doubles as JS string literal quoting here.
        let quoted = serde_json::to_string(error.message()).map_err(io::Error::other)?;

        write!(sink, "console.log({quoted})")
    }
}
