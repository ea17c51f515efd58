//! Plain-text extraction from RTF (Rich Text Format) documents.
//!
//! This library tokenizes the braces-delimited RTF markup stream and renders
//! it as linear text, honoring document structure (paragraphs, sections,
//! pages, headers and footers) and the format's character-encoding quirks.
//! It does not build a document object model: groups that carry no text
//! (font/color tables, style sheets, metadata, embedded objects) are skipped
//! wholesale, and everything else flows straight through a single extraction
//! pass.
//!
//! # Architecture
//!
//! - **Tokenizer**: a pull-based cursor that partitions the raw stream into
//!   typed tokens while tracking brace-nesting depth, silently consuming
//!   ignorable groups
//! - **Extraction engine**: a stateful pass over the token stream that emits
//!   text, recursing into itself to capture page header/footer groups
//! - **Paragraph formatter**: an optional post-pass that word-wraps the
//!   result to a page width
//!
//! Malformed input never fails an extraction: the tokenizer resynchronizes
//! and the engine produces a best-effort result, matching how real-world
//! producers emit slightly irregular streams.
//!
//! # Example
//!
//! ```
//! use rtf_texter::{RtfTexter, TexterOptions};
//!
//! let texter = RtfTexter::with_options(
//!     TexterOptions::INCLUDE_PAGE_TITLES | TexterOptions::EOL_STYLE_UNIX,
//! );
//! let text = texter.extract_str(r"{\rtf1\ansi Hello\par World!\par}");
//! assert_eq!(text, "Hello\nWorld!\n");
//! ```
//!
//! # Example - Extracting from a file
//!
//! ```no_run
//! use rtf_texter::RtfTexter;
//!
//! let texter = RtfTexter::new();
//! let text = texter.extract_file("document.rtf")?;
//! texter.save_to(&std::fs::read_to_string("document.rtf")?, "document.txt")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod datetime;
mod entities;
mod error;
mod extract;
mod options;
mod tables;
mod token;
mod tokenizer;
mod wrap;

// Re-exports
pub use datetime::{DateTimeFormatter, DateTimeTag, LocalDateTime};
pub use error::{Error, Result};
pub use extract::RtfTexter;
pub use options::TexterOptions;
pub use tables::{CHAR_TRANSLATIONS, DEFAULT_IGNORE_LIST, IgnoreSet, TAG_TRANSLATIONS};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
