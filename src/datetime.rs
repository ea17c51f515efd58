//! Date and time field rendering.
//!
//! RTF carries a handful of current-date/time field tags. Each maps to a
//! fixed strftime pattern; the clock itself sits behind the
//! [`DateTimeFormatter`] trait so callers (and tests) can substitute their
//! own source of time.

use chrono::Local;

/// A current-date/time field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeTag {
    /// `\chdate`: numeric current date
    Date,
    /// `\chdpl`: current date with full weekday and month names
    LongDate,
    /// `\chdpa`: current date with abbreviated weekday and month names
    AbbreviatedDate,
    /// `\chtime`: current time, 24-hour clock
    Time,
}

impl DateTimeTag {
    /// Map a control-word name to its field tag.
    pub(crate) fn from_control_word(name: &str) -> Option<Self> {
        match name {
            "chdate" => Some(Self::Date),
            "chdpl" => Some(Self::LongDate),
            "chdpa" => Some(Self::AbbreviatedDate),
            "chtime" => Some(Self::Time),
            _ => None,
        }
    }

    /// The strftime pattern rendered for this tag.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Date => "%m.%d.%Y",
            Self::LongDate => "%A, %-d %B %Y",
            Self::AbbreviatedDate => "%a, %-d %b %Y",
            Self::Time => "%H:%M:%S",
        }
    }
}

/// Source of formatted date/time field text.
pub trait DateTimeFormatter: Send + Sync {
    /// Render the field text for `tag`.
    fn format(&self, tag: DateTimeTag) -> String;
}

/// Default formatter: the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTime;

impl DateTimeFormatter for LocalDateTime {
    fn format(&self, tag: DateTimeTag) -> String {
        Local::now().format(tag.pattern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn sample_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 4, 12)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_tag_mapping() {
        assert_eq!(
            DateTimeTag::from_control_word("chdate"),
            Some(DateTimeTag::Date)
        );
        assert_eq!(
            DateTimeTag::from_control_word("chtime"),
            Some(DateTimeTag::Time)
        );
        assert_eq!(DateTimeTag::from_control_word("par"), None);
    }

    #[test]
    fn test_patterns() {
        let at = sample_instant();
        assert_eq!(at.format(DateTimeTag::Date.pattern()).to_string(), "04.12.2016");
        assert_eq!(
            at.format(DateTimeTag::LongDate.pattern()).to_string(),
            "Tuesday, 12 April 2016"
        );
        assert_eq!(
            at.format(DateTimeTag::AbbreviatedDate.pattern()).to_string(),
            "Tue, 12 Apr 2016"
        );
        assert_eq!(at.format(DateTimeTag::Time.pattern()).to_string(), "09:05:07");
    }

    #[test]
    fn test_local_formatter_renders_time() {
        let text = LocalDateTime.format(DateTimeTag::Time);
        assert_eq!(text.len(), 8);
        assert_eq!(text.as_bytes()[2], b':');
    }
}
