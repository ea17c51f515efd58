//! Static translation tables.
//!
//! Process-wide, read-only lookup data shared by every extractor instance:
//! the default set of ignorable group destinations, glyph translations for
//! control words, and glyph translations for character codes that common
//! producers emit with unreliable meanings. Translated values are markup
//! entities, decoded by [`crate::entities`] at emission time.

use phf::{Map, Set, phf_map, phf_set};
use std::collections::HashSet;

/// Group-leading control words whose groups carry no document text and are
/// skipped wholesale by the tokenizer: style sheets, font/color tables,
/// revision tracking, document metadata, embedded objects and the like.
pub static DEFAULT_IGNORE_LIST: Set<&'static str> = phf_set! {
    "annotation",
    "atnauthor",
    "atndate",
    "atnicn",
    "atnid",
    "atnparent",
    "atnref",
    "atntime",
    "atrfend",
    "atrfstart",
    "bkmkend",
    "bkmkstart",
    "colorschememapping",
    "colortbl",
    "do",
    "datastore",
    "fldinst",
    "fldrslt",
    "fonttbl",
    "generator",
    "info",
    "latentstyles",
    "levelnumbers",
    "leveltext",
    "listlevel",
    "listoverridetable",
    "listpicture",
    "listtable",
    "mailmerge",
    "mmath",
    "mmathPr",
    "mvfmf",
    "mvfml",
    "mvtof",
    "mvtol",
    "object",
    "passwordhash",
    "pnseclvl",
    "pgptbl",
    "protusertbl",
    "revtbl",
    "rsidtbl",
    "shp",
    "stylesheet",
    "tc",
    "tcf",
    "tcl",
    "tcn",
    "themedata",
    "userprops",
    "wgrffmtfilter",
    "xmlns",
    "xmlnstbl",
    "xmlopen",
};

/// Control words rendered as a fixed glyph.
pub static TAG_TRANSLATIONS: Map<&'static str, &'static str> = phf_map! {
    "emspace" => " ",
    "enspace" => " ",
    "qmspace" => " ",
    "emdash" => "&mdash;",
    "endash" => "&ndash;",
    "bullet" => "&#149;",
    "lquote" => "&lsquo;",
    "rquote" => "&rsquo;",
    "ldblquote" => "&laquo;",
    "rdblquote" => "&raquo;",
};

/// Character codes whose codepage meaning is unreliable across producers.
pub static CHAR_TRANSLATIONS: Map<u8, &'static str> = phf_map! {
    0x93u8 => "&laquo;",
    0x94u8 => "&raquo;",
};

/// The set of group destinations the tokenizer skips wholesale.
///
/// Configured once per extractor instance; [`IgnoreSet::Builtin`] uses
/// [`DEFAULT_IGNORE_LIST`] without allocating.
#[derive(Debug, Clone, Default)]
pub enum IgnoreSet {
    /// The built-in destination list.
    #[default]
    Builtin,
    /// A caller-supplied replacement list.
    Custom(HashSet<String>),
}

impl IgnoreSet {
    /// Whether a group led by `name` should be skipped.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Builtin => DEFAULT_IGNORE_LIST.contains(name),
            Self::Custom(set) => set.contains(name),
        }
    }
}

impl FromIterator<String> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::Custom(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignore_list() {
        for name in ["colortbl", "fonttbl", "stylesheet", "info", "themedata"] {
            assert!(DEFAULT_IGNORE_LIST.contains(name), "missing {name}");
        }
        assert!(!DEFAULT_IGNORE_LIST.contains("par"));
        assert!(!DEFAULT_IGNORE_LIST.contains("headerr"));
    }

    #[test]
    fn test_ignore_set_builtin() {
        let set = IgnoreSet::default();
        assert!(set.contains("colortbl"));
        assert!(!set.contains("b"));
    }

    #[test]
    fn test_ignore_set_custom_replaces_builtin() {
        let set: IgnoreSet = ["myext".to_string()].into_iter().collect();
        assert!(set.contains("myext"));
        assert!(!set.contains("colortbl"));
    }

    #[test]
    fn test_char_translations() {
        assert_eq!(CHAR_TRANSLATIONS.get(&0x93), Some(&"&laquo;"));
        assert!(CHAR_TRANSLATIONS.get(&0x41).is_none());
    }
}
