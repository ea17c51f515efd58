//! Pull-based RTF tokenizer.
//!
//! The tokenizer walks the raw input with a byte cursor and produces one
//! [`Token`] per call, tracking the brace nesting depth as it goes. Groups
//! whose leading control word is in the configured [`IgnoreSet`] are consumed
//! wholesale without producing any token.
//!
//! Malformed input is never fatal: truncated escapes come back as literal
//! text, a stray closing brace at depth zero is dropped, and an unmatched
//! opening brace simply ends with the stream.

use crate::tables::IgnoreSet;
use crate::token::{Token, TokenKind};
use crate::{entities, tables};
use memchr::{memchr2, memchr3};
use std::borrow::Cow;

static BUILTIN_IGNORE: IgnoreSet = IgnoreSet::Builtin;

/// Pull-based tokenizer over an RTF character stream.
pub struct Tokenizer<'a> {
    /// Source input
    input: &'a str,
    /// Current position in bytes
    pos: usize,
    /// Count of currently open, unmatched groups
    nesting_level: u32,
    /// Group destinations to skip wholesale
    ignore: &'a IgnoreSet,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer with the built-in ignore list.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self::with_ignore_set(input, &BUILTIN_IGNORE)
    }

    /// Create a tokenizer with a caller-supplied ignore set.
    #[inline]
    pub fn with_ignore_set(input: &'a str, ignore: &'a IgnoreSet) -> Self {
        Self {
            input,
            pos: 0,
            nesting_level: 0,
            ignore,
        }
    }

    /// Current brace nesting depth.
    #[inline]
    pub fn nesting_level(&self) -> u32 {
        self.nesting_level
    }

    /// Produce the next token, or `None` at end of stream.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            let byte = *self.input.as_bytes().get(self.pos)?;
            match byte {
                b'{' => {
                    if self.skip_if_ignored_group() {
                        continue;
                    }
                    self.pos += 1;
                    self.nesting_level += 1;
                    return Some(self.token(TokenKind::GroupOpen));
                },
                b'}' => {
                    self.pos += 1;
                    if self.nesting_level == 0 {
                        // stray closing brace, drop it
                        continue;
                    }
                    self.nesting_level -= 1;
                    return Some(self.token(TokenKind::GroupClose));
                },
                b'\\' => {
                    let kind = self.lex_escape();
                    return Some(self.token(kind));
                },
                b'\r' | b'\n' => {
                    // line breaks between tokens are not document content
                    self.pos += 1;
                },
                _ => {
                    let kind = self.lex_text();
                    return Some(self.token(kind));
                },
            }
        }
    }

    #[inline]
    fn token(&self, kind: TokenKind<'a>) -> Token<'a> {
        Token {
            kind,
            nesting_level: self.nesting_level,
        }
    }

    /// Lex a run of plain text up to the next markup introducer.
    fn lex_text(&mut self) -> TokenKind<'a> {
        let rest = &self.input.as_bytes()[self.pos..];
        let markup = memchr3(b'\\', b'{', b'}', rest);
        let newline = memchr2(b'\r', b'\n', rest);
        let len = match (markup, newline) {
            (Some(m), Some(n)) => m.min(n),
            (Some(m), None) => m,
            (None, Some(n)) => n,
            (None, None) => rest.len(),
        };
        let text = &self.input[self.pos..self.pos + len];
        self.pos += len;
        TokenKind::Text(Cow::Borrowed(text))
    }

    /// Lex everything introduced by a backslash: control words, control
    /// symbols, escaped braces and character-code escapes.
    fn lex_escape(&mut self) -> TokenKind<'a> {
        let bytes = self.input.as_bytes();
        let Some(&next) = bytes.get(self.pos + 1) else {
            // lone trailing backslash, emit it as literal text
            self.pos += 1;
            return TokenKind::Text(Cow::Borrowed("\\"));
        };

        match next {
            b'\\' | b'{' | b'}' => {
                self.pos += 2;
                TokenKind::EscapedChar(next as char)
            },
            b'\'' => self.lex_hex_escape(),
            b'\r' | b'\n' => {
                // an escaped line break is an implicit paragraph break
                self.pos += 2;
                TokenKind::ControlWord {
                    name: "par",
                    parameter: None,
                }
            },
            b if b.is_ascii_alphabetic() => self.lex_control_word(),
            _ => {
                // control symbol; the char may be multi-byte in sloppy input
                let symbol = self.input[self.pos + 1..].chars().next().unwrap_or('\0');
                self.pos += 1 + symbol.len_utf8();
                TokenKind::ControlSymbol(symbol)
            },
        }
    }

    /// Lex `\name`, an optional signed decimal parameter and the optional
    /// single-space delimiter.
    fn lex_control_word(&mut self) -> TokenKind<'a> {
        let bytes = self.input.as_bytes();
        let start = self.pos + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
            end += 1;
        }
        let name = &self.input[start..end];
        self.pos = end;

        let parameter = self.lex_parameter();

        // the space after a control word is a delimiter, not content
        if self.input.as_bytes().get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }

        // \binN is followed by N bytes of raw data that must not be tokenized
        if name == "bin"
            && let Some(size) = parameter
            && size > 0
        {
            self.pos = (self.pos + size as usize).min(self.input.len());
            while !self.input.is_char_boundary(self.pos) {
                self.pos += 1;
            }
        }

        TokenKind::ControlWord { name, parameter }
    }

    fn lex_parameter(&mut self) -> Option<i32> {
        let bytes = self.input.as_bytes();
        let mut end = self.pos;
        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        let digits = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits {
            // a bare '-' is not a parameter; leave it for the next token
            return None;
        }
        let value = self.input[self.pos..end].parse::<i64>().unwrap_or(0);
        self.pos = end;
        Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Lex `\'xy` into its glyph, consulting the character-translation table
    /// before falling back to the ANSI codepage.
    fn lex_hex_escape(&mut self) -> TokenKind<'a> {
        let start = self.pos;
        self.pos += 2; // past \'

        let byte = self
            .input
            .as_bytes()
            .get(self.pos..self.pos + 2)
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());

        match byte {
            Some(byte) => {
                self.pos += 2;
                let glyph = match tables::CHAR_TRANSLATIONS.get(&byte) {
                    Some(entity) => entities::decode(entity).chars().next().unwrap_or('\u{FFFD}'),
                    None => entities::cp1252_char(byte),
                };
                TokenKind::CharCode(glyph)
            },
            None => {
                // truncated or non-hex escape, recover it as literal text
                TokenKind::Text(Cow::Borrowed(&self.input[start..self.pos]))
            },
        }
    }

    /// If the group starting at the cursor leads with an ignorable control
    /// word, consume the whole group (nested sub-groups included) and report
    /// `true`. The global nesting level is left untouched.
    fn skip_if_ignored_group(&mut self) -> bool {
        match self.peek_group_leader() {
            Some(name) if self.ignore.contains(name) => {
                self.skip_group();
                true
            },
            _ => false,
        }
    }

    /// First meaningful control word of the group starting at the cursor,
    /// looking through the `\*` ignorable-destination marker.
    fn peek_group_leader(&self) -> Option<&'a str> {
        let bytes = self.input.as_bytes();
        let mut p = self.pos + 1; // past '{'

        while matches!(bytes.get(p), Some(&(b'\r' | b'\n'))) {
            p += 1;
        }
        if bytes.get(p) == Some(&b'\\') && bytes.get(p + 1) == Some(&b'*') {
            p += 2;
            while matches!(bytes.get(p), Some(&(b'\r' | b'\n'))) {
                p += 1;
            }
        }
        if bytes.get(p) != Some(&b'\\') {
            return None;
        }
        p += 1;

        let start = p;
        while p < bytes.len() && bytes[p].is_ascii_alphabetic() {
            p += 1;
        }
        (p > start).then(|| &self.input[start..p])
    }

    /// Consume a whole group from the opening brace at the cursor, with a
    /// depth counter local to the skip.
    fn skip_group(&mut self) {
        let bytes = self.input.as_bytes();
        debug_assert_eq!(bytes.get(self.pos), Some(&b'{'));
        self.pos += 1;
        let mut depth = 1u32;

        while depth > 0 {
            let Some(offset) = memchr3(b'{', b'}', b'\\', &bytes[self.pos..]) else {
                // unmatched group at end of stream; tolerated
                self.pos = bytes.len();
                return;
            };
            self.pos += offset;
            match bytes[self.pos] {
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                },
                b'}' => {
                    depth -= 1;
                    self.pos += 1;
                },
                _ => {
                    // skip the backslash and its escaped byte so \{ and \}
                    // cannot disturb the depth count
                    self.pos = (self.pos + 2).min(bytes.len());
                },
            }
        }
    }
}
