//! Paragraph word-wrapping.
//!
//! The extracted text keeps each paragraph on a single line; this pass
//! rewraps every line independently to the configured page width, breaking
//! inside a word only when the word alone exceeds the width. Columns are
//! counted in chars.

use smallvec::SmallVec;

/// Rewrap `text` to `width` columns, preserving the line-break sequence.
pub(crate) fn wrap(text: &str, width: usize, eol: &str) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / width);
    for (index, line) in text.split(eol).enumerate() {
        if index > 0 {
            out.push_str(eol);
        }
        wrap_line(line, width, eol, &mut out);
    }
    out
}

/// Wrap one line. Breaks at the last space that keeps a segment within
/// `width`; a segment with no such space is cut mid-word at the width.
fn wrap_line(line: &str, width: usize, eol: &str, out: &mut String) {
    let chars: SmallVec<[char; 128]> = line.chars().collect();
    let mut start = 0;

    while chars.len() - start > width {
        let window_end = start + width;
        let break_at = if chars[window_end] == ' ' {
            // the overflowing char is itself a space: a clean break
            Some(window_end)
        } else {
            chars[start..window_end]
                .iter()
                .rposition(|&c| c == ' ')
                .map(|offset| start + offset)
        };

        match break_at {
            Some(space) if space > start => {
                out.extend(&chars[start..space]);
                out.push_str(eol);
                start = space + 1;
            },
            _ => {
                out.extend(&chars[start..window_end]);
                out.push_str(eol);
                start = window_end;
            },
        }
    }
    out.extend(&chars[start..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_lines_untouched() {
        assert_eq!(wrap("hello world", 20, "\n"), "hello world");
        assert_eq!(wrap("a\nb\nc", 20, "\n"), "a\nb\nc");
    }

    #[test]
    fn test_breaks_at_spaces() {
        assert_eq!(wrap("one two three four", 9, "\n"), "one two\nthree\nfour");
    }

    #[test]
    fn test_long_word_cut_at_width() {
        assert_eq!(wrap("aaaaaaaaaaaaa", 10, "\n"), "aaaaaaaaaa\naaa");
    }

    #[test]
    fn test_exact_width_not_broken() {
        assert_eq!(wrap("abcdefghij", 10, "\n"), "abcdefghij");
    }

    #[test]
    fn test_space_at_window_boundary() {
        assert_eq!(wrap("abcde abcde", 5, "\n"), "abcde\nabcde");
    }

    #[test]
    fn test_eol_sequence_preserved() {
        assert_eq!(
            wrap("one two three\r\nfour", 7, "\r\n"),
            "one two\r\nthree\r\nfour"
        );
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(wrap("ééééé ééééé", 5, "\n"), "ééééé\nééééé");
    }

    proptest! {
        /// Wrapping already-wrapped text at the same width is a no-op when
        /// no word exceeds the width.
        #[test]
        fn prop_wrap_is_idempotent(
            words in prop::collection::vec("[a-z]{1,10}", 1..20),
            width in 10usize..40,
        ) {
            let text = words.join(" ");
            let wrapped = wrap(&text, width, "\n");
            prop_assert_eq!(wrap(&wrapped, width, "\n"), wrapped);
        }

        /// No output line ever exceeds the width when no word does.
        #[test]
        fn prop_lines_fit_width(
            words in prop::collection::vec("[a-z]{1,10}", 1..20),
            width in 10usize..40,
        ) {
            let wrapped = wrap(&words.join(" "), width, "\n");
            for line in wrapped.split('\n') {
                prop_assert!(line.chars().count() <= width);
            }
        }
    }
}
