//! Markup-entity decoding.
//!
//! Translation-table values are expressed as markup entities (`&mdash;`,
//! `&#149;`, `&#x2603;`) and decoded to text at emission time. Only the
//! entities the tables actually use plus the common named set are known;
//! anything unrecognized passes through untouched.

use phf::{Map, phf_map};
use std::borrow::Cow;

static NAMED_ENTITIES: Map<&'static str, char> = phf_map! {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
    "nbsp" => '\u{00A0}',
    "mdash" => '\u{2014}',
    "ndash" => '\u{2013}',
    "lsquo" => '\u{2018}',
    "rsquo" => '\u{2019}',
    "ldquo" => '\u{201C}',
    "rdquo" => '\u{201D}',
    "laquo" => '\u{00AB}',
    "raquo" => '\u{00BB}',
    "bull" => '\u{2022}',
    "hellip" => '\u{2026}',
};

/// Decode every entity reference in `input`, leaving the rest untouched.
pub(crate) fn decode(input: &str) -> Cow<'_, str> {
    let Some(first) = memchr::memchr(b'&', input.as_bytes()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..first]);
    let mut rest = &input[first..];

    while let Some(pos) = memchr::memchr(b'&', rest.as_bytes()) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match decode_reference(rest) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &rest[len..];
            },
            None => {
                out.push('&');
                rest = &rest[1..];
            },
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode one `&...;` reference at the start of `input`.
///
/// Returns the decoded character and the byte length of the reference.
fn decode_reference(input: &str) -> Option<(char, usize)> {
    let end = memchr::memchr(b';', input.as_bytes())?;
    let body = &input[1..end];
    let ch = if let Some(numeric) = body.strip_prefix('#') {
        decode_numeric(numeric)?
    } else {
        *NAMED_ENTITIES.get(body)?
    };
    Some((ch, end + 1))
}

fn decode_numeric(body: &str) -> Option<char> {
    let value = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };

    // Numeric references in the 0x80-0x9F range are C1 controls on paper,
    // but producers invariably mean the Windows-1252 glyphs.
    if (0x80..=0x9F).contains(&value) {
        return Some(cp1252_char(value as u8));
    }
    char::from_u32(value)
}

/// Decode a single byte as Windows-1252.
pub(crate) fn cp1252_char(byte: u8) -> char {
    let bytes = [byte];
    let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&bytes);
    text.chars().next().unwrap_or('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(decode("no entities here"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_named_entities() {
        assert_eq!(decode("&mdash;"), "\u{2014}");
        assert_eq!(decode("a&laquo;b&raquo;c"), "a\u{00AB}b\u{00BB}c");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(decode("&#65;"), "A");
        assert_eq!(decode("&#x2603;"), "\u{2603}");
    }

    #[test]
    fn test_cp1252_range_fixup() {
        // 149 is the cp1252 bullet, not a C1 control
        assert_eq!(decode("&#149;"), "\u{2022}");
        assert_eq!(decode("&#x93;"), "\u{201C}");
    }

    #[test]
    fn test_unknown_references_pass_through() {
        assert_eq!(decode("&nosuch;"), "&nosuch;");
        assert_eq!(decode("fish & chips"), "fish & chips");
        assert_eq!(decode("trailing &"), "trailing &");
    }

    #[test]
    fn test_cp1252_char() {
        assert_eq!(cp1252_char(0x41), 'A');
        assert_eq!(cp1252_char(0x95), '\u{2022}');
        assert_eq!(cp1252_char(0xE9), '\u{00E9}');
    }
}
