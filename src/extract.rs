//! Text extraction engine.
//!
//! [`RtfTexter`] is the main entry point. It holds the resolved
//! configuration (options, page width, end-of-line sequence, ignore set,
//! date/time source) and runs a stateful pass over the token stream for each
//! extraction call. Page header and footer groups are captured by recursive
//! sub-extraction bounded to the nesting level that closes their group.
//!
//! Extraction from in-memory input always succeeds with a best-effort
//! result; only file and sink operations can fail.

use crate::datetime::{DateTimeFormatter, DateTimeTag, LocalDateTime};
use crate::error::Result;
use crate::options::{self, TexterOptions};
use crate::tables::{self, IgnoreSet};
use crate::token::{self, TokenKind};
use crate::tokenizer::Tokenizer;
use crate::{entities, wrap};
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default page width for wrapped output.
const DEFAULT_PAGE_WIDTH: usize = 80;

/// Plain-text extractor for RTF documents.
///
/// The extractor itself is immutable and may be shared freely; every
/// extraction call builds its own tokenizer and working state.
///
/// # Examples
///
/// ```
/// use rtf_texter::RtfTexter;
///
/// let texter = RtfTexter::new();
/// let text = texter.extract_str(r"{\rtf1\ansi Hello World!\par}");
/// assert!(text.starts_with("Hello World!"));
/// ```
pub struct RtfTexter {
    /// Output formatting options
    options: TexterOptions,
    /// Page width used when wrapping is enabled
    page_width: usize,
    /// Resolved end-of-line sequence, derived from the options
    eol: &'static str,
    /// Group destinations skipped by the tokenizer
    ignore: IgnoreSet,
    /// Source of date/time field text
    clock: Box<dyn DateTimeFormatter>,
}

impl Default for RtfTexter {
    fn default() -> Self {
        Self::new()
    }
}

impl RtfTexter {
    /// Create an extractor with every formatting option enabled and the
    /// default page width.
    pub fn new() -> Self {
        Self::with_options(TexterOptions::ALL)
    }

    /// Create an extractor with the given formatting options.
    pub fn with_options(options: TexterOptions) -> Self {
        Self {
            options,
            page_width: DEFAULT_PAGE_WIDTH,
            eol: options::resolve_eol(options),
            ignore: IgnoreSet::Builtin,
            clock: Box::new(LocalDateTime),
        }
    }

    /// Set the page width used when [`TexterOptions::WRAP_TEXT`] is enabled.
    pub fn with_page_width(mut self, width: usize) -> Self {
        self.page_width = width.max(1);
        self
    }

    /// Replace the built-in list of ignored group destinations.
    pub fn with_ignored_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the source of date/time field text.
    pub fn with_datetime_formatter(mut self, clock: Box<dyn DateTimeFormatter>) -> Self {
        self.clock = clock;
        self
    }

    /// The configured formatting options.
    #[inline]
    pub fn options(&self) -> TexterOptions {
        self.options
    }

    /// The configured page width.
    #[inline]
    pub fn page_width(&self) -> usize {
        self.page_width
    }

    /// The resolved end-of-line sequence.
    #[inline]
    pub fn eol(&self) -> &'static str {
        self.eol
    }

    /// Extract text from RTF source.
    pub fn extract_str(&self, input: &str) -> String {
        let mut tokens = Tokenizer::with_ignore_set(input, &self.ignore);
        let mut text = self.textify(&mut tokens, None);
        if self.options.contains(TexterOptions::WRAP_TEXT) {
            text = wrap::wrap(&text, self.page_width, self.eol);
        }
        text
    }

    /// Extract text from raw RTF bytes.
    ///
    /// RTF is essentially ASCII; input that is not valid UTF-8 is decoded as
    /// Windows-1252 first.
    pub fn extract_bytes(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(input) => self.extract_str(input),
            Err(_) => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
                self.extract_str(&decoded)
            },
        }
    }

    /// Extract text from an RTF file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rtf_texter::RtfTexter;
    ///
    /// let text = RtfTexter::new().extract_file("document.rtf")?;
    /// # Ok::<(), rtf_texter::Error>(())
    /// ```
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(self.extract_bytes(&bytes))
    }

    /// Extract text from RTF source and write it to a sink.
    pub fn extract_to_writer<W: Write>(&self, input: &str, mut sink: W) -> Result<()> {
        sink.write_all(self.extract_str(input).as_bytes())?;
        Ok(())
    }

    /// Extract text from RTF source and save it to a file.
    pub fn save_to<P: AsRef<Path>>(&self, input: &str, path: P) -> Result<()> {
        self.extract_to_writer(input, File::create(path)?)
    }

    /// The extraction state machine.
    ///
    /// Pulls tokens until the stream ends or, when `stop_at` is given (a
    /// recursive sub-extraction for a header/footer group), until the group
    /// close that brings the nesting level down to `stop_at`. A sub-extraction
    /// that never sees its close consumes the rest of the stream; malformed
    /// input degrades, it does not fail.
    fn textify<'a>(&self, tokens: &mut Tokenizer<'a>, stop_at: Option<u32>) -> String {
        let mut out = String::new();
        let mut page_header = String::new();
        let mut page_footer = String::new();
        // Top-level only: set once the header has been prepended to the
        // first output.
        let mut got_data = false;
        // The end of the document preamble is pinned to the first \sectd
        // seen, or to the first visible text for documents that never emit
        // one. A heuristic, not a structural guarantee of the format.
        let mut header_processed = false;
        // Skip count for \u fallback tokens, set by \uc
        let mut unicode_skip: i32 = 1;

        while let Some(current) = tokens.next_token() {
            let level = current.nesting_level;
            let mut text: Option<Cow<'a, str>> = None;

            match current.kind {
                TokenKind::GroupOpen => {},
                TokenKind::GroupClose => {
                    if stop_at == Some(level) {
                        break;
                    }
                },
                TokenKind::ControlWord { name, parameter } => match name {
                    "par" => {
                        if header_processed {
                            text = Some(Cow::Borrowed(self.eol));
                        }
                    },
                    "sectd" => header_processed = true,
                    "page" => {
                        let mut brk = String::new();
                        if self.options.contains(TexterOptions::INCLUDE_PAGE_FOOTERS) {
                            brk.push_str(&page_footer);
                        }
                        if self.options.contains(TexterOptions::USE_FORM_FEEDS) {
                            brk.push('\u{0C}');
                        }
                        brk.push_str(self.eol);
                        if self.options.contains(TexterOptions::INCLUDE_PAGE_HEADERS) {
                            brk.push_str(&page_header);
                        }
                        text = Some(Cow::Owned(brk));
                    },
                    "tab" | "cell" => text = Some(Cow::Borrowed("\t")),
                    "line" | "lbr" | "trowd" => text = Some(Cow::Borrowed(self.eol)),
                    "headerr" => {
                        page_header = self.textify(tokens, Some(level.saturating_sub(1)));
                        page_header.push_str(self.eol);
                    },
                    "footerr" => {
                        page_footer = self.textify(tokens, Some(level.saturating_sub(1)));
                        page_footer.push_str(self.eol);
                    },
                    "uc" => unicode_skip = parameter.unwrap_or(1),
                    "u" => {
                        // the following tokens are single-byte fallbacks for
                        // consumers without Unicode support
                        for _ in 0..unicode_skip.max(0) {
                            if tokens.next_token().is_none() {
                                break;
                            }
                        }
                        if let Some(value) = parameter {
                            text = Some(Cow::Owned(decode_unicode_escape(value).to_string()));
                        }
                    },
                    other => {
                        if let Some(tag) = DateTimeTag::from_control_word(other) {
                            text = Some(Cow::Owned(self.clock.format(tag)));
                        } else if let Some(entity) = tables::TAG_TRANSLATIONS.get(other) {
                            text = Some(entities::decode(entity));
                        }
                    },
                },
                TokenKind::ControlSymbol(symbol) => {
                    let glyph = token::symbol_text(symbol);
                    if !glyph.is_empty() {
                        text = Some(Cow::Borrowed(glyph));
                    }
                },
                TokenKind::EscapedChar(ch) | TokenKind::CharCode(ch) => {
                    text = Some(Cow::Owned(ch.to_string()));
                },
                TokenKind::Text(run) => text = Some(run),
            }

            if let Some(text) = text {
                out.push_str(&text);
            }
            if !header_processed && !out.is_empty() {
                header_processed = true;
            }

            // Prepend the page header once the first output exists; it is
            // repeated later only through \page breaks.
            if stop_at.is_none() && !got_data && !out.is_empty() {
                got_data = true;
                if self.options.contains(TexterOptions::INCLUDE_PAGE_HEADERS) {
                    out.insert_str(0, &page_header);
                }
            }
        }

        // Close out the final page.
        if stop_at.is_none() && self.options.contains(TexterOptions::INCLUDE_PAGE_FOOTERS) {
            out.push_str(&page_footer);
        }
        out
    }
}

/// Decode the numeric parameter of a Unicode escape.
///
/// The parameter is a signed 16-bit value: code points at or above 0x8000
/// appear as negatives and are recovered two's-complement style. Values that
/// do not form a scalar (the surrogate range) come back as U+FFFD.
fn decode_unicode_escape(value: i32) -> char {
    let code = if value < 0 {
        value as i64 + 65536
    } else {
        value as i64
    };
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('\u{FFFD}')
}
