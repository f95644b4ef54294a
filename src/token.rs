// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Classified token stream consumed by the erasure transform
//!
//! Tokenizing and classifying a module is the job of an external parser; the
//! overlay only consumes its output. [`TokenClassifier`] is the seam where
//! that parser is injected.

use crate::error::ParseError;

/// Classification attached to every token by the module parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain JavaScript, carried through the transform byte for byte.
    Plain,
    /// TypeScript-only surface syntax with no runtime meaning: type
    /// annotations, `type` imports, interface bodies, and so on.
    TypeOnly,
}

/// A single token of a parsed module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    /// The literal source text this token covers, whitespace and punctuation
    /// included, exactly as written.
    pub text: String,
    /// Whether the token is plain JavaScript or TypeScript-only.
    pub kind: TokenKind,
}

impl ClassifiedToken {
    /// A plain JavaScript token.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Plain,
        }
    }

    /// A TypeScript-only token.
    pub fn type_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::TypeOnly,
        }
    }
}

/// Parses a module under the TypeScript grammar and classifies every token.
///
/// Implementations must return tokens in source order, such that
/// concatenating their `text` fields reproduces the input exactly. Whether
/// non-UTF-8 input is a parse failure is the implementation's call.
pub trait TokenClassifier {
    /// Tokenize and classify `source`.
    fn classify(&self, source: &[u8]) -> Result<Vec<ClassifiedToken>, ParseError>;
}

impl<F> TokenClassifier for F
where
    F: Fn(&[u8]) -> Result<Vec<ClassifiedToken>, ParseError>,
{
    fn classify(&self, source: &[u8]) -> Result<Vec<ClassifiedToken>, ParseError> {
        self(source)
    }
}
