// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the overlay

use thiserror::Error;

/// Failure reported by a [`TokenClassifier`](crate::token::TokenClassifier)
/// when a source does not parse under the TypeScript grammar.
///
/// The overlay treats this value as opaque: only the human-readable message
/// is consumed, either by a configured
/// [`DiagnosticEmitter`](crate::diagnostics::DiagnosticEmitter) or by a log
/// line on the fallback path. It is never surfaced as an `open` error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Create a parse error from a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied by the classifier.
    pub fn message(&self) -> &str {
        &self.message
    }
}
