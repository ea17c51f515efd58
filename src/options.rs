//! Output formatting options.
//!
//! Options are resolved once at construction time; the derived end-of-line
//! sequence is shared by the extraction engine and the paragraph formatter.

use bitflags::bitflags;

bitflags! {
    /// Formatting options applied during text extraction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TexterOptions: u32 {
        /// Include page headers in the output. Headers are only repeated
        /// on an explicit `\page` break, since the extractor does not track
        /// the vertical position within a page.
        const INCLUDE_PAGE_HEADERS = 0x0000_0001;
        /// Include page footers in the output.
        const INCLUDE_PAGE_FOOTERS = 0x0000_0002;
        /// Include both page headers and footers.
        const INCLUDE_PAGE_TITLES =
            Self::INCLUDE_PAGE_HEADERS.bits() | Self::INCLUDE_PAGE_FOOTERS.bits();
        /// Separate pages with a form feed in addition to a line break.
        const USE_FORM_FEEDS = 0x0000_0004;
        /// Word-wrap the extracted text to the configured page width.
        const WRAP_TEXT = 0x0000_0008;
        /// Use Windows-style (CRLF) line breaks.
        const EOL_STYLE_WINDOWS = 0x0000_0010;
        /// Use Unix-style (LF) line breaks.
        const EOL_STYLE_UNIX = 0x0000_0020;
        /// Mask isolating the line-break style bits.
        const EOL_STYLE_MASK =
            Self::EOL_STYLE_WINDOWS.bits() | Self::EOL_STYLE_UNIX.bits();
        /// Every formatting option, with the platform-default line-break style.
        const ALL = Self::INCLUDE_PAGE_TITLES.bits()
            | Self::USE_FORM_FEEDS.bits()
            | Self::WRAP_TEXT.bits();
    }
}

impl Default for TexterOptions {
    fn default() -> Self {
        Self::ALL
    }
}

/// Platform-default end-of-line sequence.
pub(crate) const DEFAULT_EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Resolve the end-of-line sequence selected by the style bits.
///
/// Setting both style bits is treated as unspecified and falls back to the
/// platform default.
pub(crate) fn resolve_eol(options: TexterOptions) -> &'static str {
    match options & TexterOptions::EOL_STYLE_MASK {
        s if s == TexterOptions::EOL_STYLE_WINDOWS => "\r\n",
        s if s == TexterOptions::EOL_STYLE_UNIX => "\n",
        _ => DEFAULT_EOL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eol_resolution() {
        assert_eq!(resolve_eol(TexterOptions::EOL_STYLE_WINDOWS), "\r\n");
        assert_eq!(resolve_eol(TexterOptions::EOL_STYLE_UNIX), "\n");
        assert_eq!(resolve_eol(TexterOptions::empty()), DEFAULT_EOL);
        assert_eq!(resolve_eol(TexterOptions::EOL_STYLE_MASK), DEFAULT_EOL);
    }

    #[test]
    fn test_titles_is_headers_and_footers() {
        assert!(TexterOptions::INCLUDE_PAGE_TITLES.contains(TexterOptions::INCLUDE_PAGE_HEADERS));
        assert!(TexterOptions::INCLUDE_PAGE_TITLES.contains(TexterOptions::INCLUDE_PAGE_FOOTERS));
    }

    #[test]
    fn test_all_leaves_eol_style_unset() {
        assert!((TexterOptions::ALL & TexterOptions::EOL_STYLE_MASK).is_empty());
        assert!(TexterOptions::ALL.contains(TexterOptions::WRAP_TEXT));
    }
}
