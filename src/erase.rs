// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The erasure transform: classified tokens to valid JavaScript

use crate::token::{ClassifiedToken, TokenKind};
use bytes::Bytes;

const OPEN: &str = "/*";
const CLOSE: &str = "*/";
const SPLIT_CLOSE: &str = "* /";

/// Rewrite a classified token stream into JavaScript by wrapping
/// TypeScript-only spans in block comments.
///
/// Plain tokens are emitted verbatim, so retained JavaScript text keeps its
/// original offsets except for the two-character comment markers the
/// transform itself inserts. The only content mutation is splitting `*/`
/// sequences inside a commented span with a space so they cannot terminate
/// the comment early. A stream that ends inside a TypeScript-only span gets
/// its closing marker appended, so the output never contains an unterminated
/// comment.
///
/// The transform performs no semantic validation; given any token sequence
/// it succeeds.
pub fn erase(tokens: &[ClassifiedToken]) -> Bytes {
    let mut out = Vec::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    let mut in_comment = false;

    for token in tokens {
        match token.kind {
            TokenKind::TypeOnly => {
                if !in_comment {
                    out.extend_from_slice(OPEN.as_bytes());
                    in_comment = true;
                }

                out.extend_from_slice(token.text.replace(CLOSE, SPLIT_CLOSE).as_bytes());
            }
            TokenKind::Plain => {
                if in_comment {
                    out.extend_from_slice(CLOSE.as_bytes());
                    in_comment = false;
                }

                out.extend_from_slice(token.text.as_bytes());
            }
        }
    }

    if in_comment {
        out.extend_from_slice(CLOSE.as_bytes());
    }

    Bytes::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ClassifiedToken as Tok;

    fn erased(tokens: &[Tok]) -> String {
        String::from_utf8(erase(tokens).to_vec()).unwrap()
    }

    #[test]
    fn empty_stream_is_empty_output() {
        assert_eq!(erased(&[]), "");
    }

    #[test]
    fn plain_only_stream_is_identity() {
        let tokens = [
            Tok::plain("const a"),
            Tok::plain(" = 1;\n"),
            Tok::plain("console.log(a);"),
        ];
        assert_eq!(erased(&tokens), "const a = 1;\nconsole.log(a);");
    }

    #[test]
    fn annotation_is_wrapped_in_comment() {
        let tokens = [
            Tok::plain("const a"),
            Tok::type_only(": number"),
            Tok::plain(" = 1;\n\nconsole.log(a);"),
        ];
        assert_eq!(erased(&tokens), "const a/*: number*/ = 1;\n\nconsole.log(a);");
    }

    #[test]
    fn adjacent_type_only_tokens_share_one_comment() {
        let tokens = [
            Tok::plain("let x"),
            Tok::type_only(":"),
            Tok::type_only(" string"),
            Tok::plain(" = 'y';"),
        ];
        assert_eq!(erased(&tokens), "let x/*: string*/ = 'y';");
    }

    #[test]
    fn multiple_erased_spans() {
        let tokens = [
            Tok::plain("function f(a"),
            Tok::type_only(": number"),
            Tok::plain(", b"),
            Tok::type_only(": string"),
            Tok::plain(") {}"),
        ];
        assert_eq!(erased(&tokens), "function f(a/*: number*/, b/*: string*/) {}");
    }

    #[test]
    fn close_marker_in_type_text_is_split() {
        let tokens = [
            Tok::plain("let s"),
            Tok::type_only(": \"*/\""),
            Tok::plain(" = x;"),
        ];
        let out = erased(&tokens);
        assert_eq!(out, "let s/*: \"* /\"*/ = x;");
        // The comment body must contain no close marker besides the final one.
        let body = &out["let s/*".len()..];
        assert_eq!(body.matches("*/").count(), 1);
    }

    #[test]
    fn trailing_type_only_span_is_closed() {
        let tokens = [
            Tok::plain("export {};\n"),
            Tok::type_only("type A = number;"),
        ];
        assert_eq!(erased(&tokens), "export {};\n/*type A = number;*/");
    }

    #[test]
    fn type_only_stream_is_one_closed_comment() {
        let tokens = [Tok::type_only("interface I { a: number; }")];
        assert_eq!(erased(&tokens), "/*interface I { a: number; }*/");
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let tokens = [
            Tok::plain("const n"),
            Tok::type_only(": bigint"),
            Tok::plain(" = 1n;"),
        ];
        assert_eq!(erase(&tokens), erase(&tokens));
    }
}
