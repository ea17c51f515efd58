//! Lexical token model.
//!
//! A [`Token`] is one lexical unit of the RTF stream together with the brace
//! nesting depth at which it was produced. The extraction engine dispatches
//! on [`TokenKind`] and uses the nesting level to bound recursive
//! sub-extractions (page headers and footers).

use std::borrow::Cow;

/// The kind of a lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Opening brace `{`
    GroupOpen,
    /// Closing brace `}`
    GroupClose,
    /// Control word: `\name` with an optional signed decimal parameter
    ControlWord {
        name: &'a str,
        parameter: Option<i32>,
    },
    /// Control symbol: `\` followed by a single non-alphabetic character
    ControlSymbol(char),
    /// Escaped literal: `\\`, `\{` or `\}`
    EscapedChar(char),
    /// Character-code escape (`\'xy`), already decoded to its glyph
    CharCode(char),
    /// Run of plain text, borrowed from the input where possible
    Text(Cow<'a, str>),
}

/// A token and the nesting depth at which it was produced.
///
/// `{` increments the depth as it is consumed, so a [`TokenKind::GroupOpen`]
/// reports the depth *inside* the group it opens; `}` decrements as it is
/// consumed, so a [`TokenKind::GroupClose`] reports the depth *outside* the
/// group it closes. All other tokens report the current depth unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub nesting_level: u32,
}

/// Text rendering of a control symbol.
///
/// `\~` is a non-breaking space, `\-` an optional hyphen and `\_` a
/// non-breaking hyphen. Symbols with no textual meaning render as nothing.
pub(crate) fn symbol_text(symbol: char) -> &'static str {
    match symbol {
        '~' => "\u{00A0}",
        '-' => "\u{00AD}",
        '_' => "\u{2011}",
        _ => "",
    }
}
