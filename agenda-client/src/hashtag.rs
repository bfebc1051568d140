use std::fmt;

use chrono::NaiveDate;

use crate::errors::HashtagError;

/// Opening delimiter of the date span.
pub const TOKEN_OPEN: &str = "{{";
/// Closing delimiter of the date span.
pub const TOKEN_CLOSE: &str = "}}";

/// Go reference layout elements and their `chrono` equivalents.
///
/// Longer elements come first so that `January` wins over `Jan` and
/// `2006` wins over `2`.
const LAYOUT_ELEMENTS: [(&str, &str); 11] = [
    ("January", "%B"),
    ("Jan", "%b"),
    ("Monday", "%A"),
    ("Mon", "%a"),
    ("2006", "%Y"),
    ("06", "%y"),
    ("01", "%m"),
    ("02", "%d"),
    ("_2", "%e"),
    ("1", "%-m"),
    ("2", "%-d"),
];

/// Date layouts offered by the settings form.
///
/// Layouts are written the way the server formats them: as January 2,
/// 2006 would look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateToken {
    /// `Jan 2`
    MonthDay,
    /// `2 Jan`
    DayMonth,
    /// `Jan02`
    #[default]
    MonthDayPadded,
    /// `Jan-2`
    MonthDayDashed,
    /// `2006-01-02`
    YearMonthDay,
}

impl DateToken {
    pub const ALL: [DateToken; 5] = [
        DateToken::MonthDay,
        DateToken::DayMonth,
        DateToken::MonthDayPadded,
        DateToken::MonthDayDashed,
        DateToken::YearMonthDay,
    ];

    /// Return the layout string stored inside the date span.
    pub fn layout(self) -> &'static str {
        match self {
            DateToken::MonthDay => "Jan 2",
            DateToken::DayMonth => "2 Jan",
            DateToken::MonthDayPadded => "Jan02",
            DateToken::MonthDayDashed => "Jan-2",
            DateToken::YearMonthDay => "2006-01-02",
        }
    }

    /// Match a layout string against the known tokens.
    pub fn from_layout(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.layout() == value)
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout())
    }
}

/// Contents of a date span: a known layout or a verbatim custom one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashtagToken {
    Date(DateToken),
    Raw(String),
}

impl HashtagToken {
    /// Classify span contents, trimming surrounding whitespace.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match DateToken::from_layout(value) {
            Some(token) => HashtagToken::Date(token),
            None => HashtagToken::Raw(value.to_string()),
        }
    }

    /// Return the layout text written inside the span.
    pub fn as_str(&self) -> &str {
        match self {
            HashtagToken::Date(token) => token.layout(),
            HashtagToken::Raw(value) => value,
        }
    }

    /// Return the known token, if any.
    pub fn date(&self) -> Option<DateToken> {
        match self {
            HashtagToken::Date(token) => Some(*token),
            HashtagToken::Raw(_) => None,
        }
    }
}

impl Default for HashtagToken {
    fn default() -> Self {
        HashtagToken::Date(DateToken::default())
    }
}

impl From<DateToken> for HashtagToken {
    fn from(token: DateToken) -> Self {
        HashtagToken::Date(token)
    }
}

/// Parsed form of `prefix "{{" token "}}"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HashtagTemplate {
    prefix: String,
    token: Option<HashtagToken>,
}

impl HashtagTemplate {
    /// Build a template from a prefix and a date token.
    pub fn new(prefix: impl Into<String>, token: HashtagToken) -> Self {
        Self {
            prefix: prefix.into(),
            token: Some(token),
        }
    }

    /// Build a template that is only a literal prefix.
    pub fn literal(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            token: None,
        }
    }

    /// Parse a format string, falling back to a literal prefix.
    ///
    /// A malformed format is logged and kept verbatim as the prefix.
    pub fn parse_or_literal(format: &str) -> Self {
        match parse_hashtag(format) {
            Ok(template) => template,
            Err(err) => {
                log::warn!("hashtag format {format:?} is malformed: {err}");
                Self::literal(format)
            },
        }
    }

    /// Return the literal text before the date span.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return the date span contents.
    pub fn token(&self) -> Option<&HashtagToken> {
        self.token.as_ref()
    }

    /// Consume the template and return `(prefix, token)`.
    pub fn into_parts(self) -> (String, Option<HashtagToken>) {
        (self.prefix, self.token)
    }

    /// Render the format string stored on the server.
    pub fn format(&self) -> String {
        match &self.token {
            Some(token) => format_hashtag(&self.prefix, token),
            None => self.prefix.clone(),
        }
    }

    /// Render the hashtag used for the meeting held on `date`.
    pub fn render(&self, date: NaiveDate) -> String {
        match &self.token {
            Some(token) => {
                let pattern = chrono_pattern(token.as_str());
                format!("#{}{}", self.prefix, date.format(&pattern))
            },
            None => format!("#{}", self.prefix),
        }
    }
}

/// Parse `prefix "{{" token "}}"`.
///
/// Whitespace around the token is trimmed. Anything after the closing
/// delimiter, a second span, or an empty span is rejected.
pub fn parse_hashtag(format: &str) -> Result<HashtagTemplate, HashtagError> {
    let Some(open) = format.find(TOKEN_OPEN) else {
        return Err(HashtagError::MissingOpen);
    };
    let prefix = &format[..open];
    let rest = &format[open + TOKEN_OPEN.len()..];

    let Some(close) = rest.find(TOKEN_CLOSE) else {
        return Err(HashtagError::Unclosed);
    };
    let inner = &rest[..close];
    let trailing = &rest[close + TOKEN_CLOSE.len()..];

    if inner.contains(TOKEN_OPEN) || trailing.contains(TOKEN_OPEN) {
        return Err(HashtagError::MultipleSpans);
    }
    if !trailing.is_empty() {
        return Err(HashtagError::TrailingText {
            trailing: trailing.to_string(),
        });
    }
    if inner.trim().is_empty() {
        return Err(HashtagError::EmptyToken);
    }

    Ok(HashtagTemplate::new(prefix, HashtagToken::parse(inner)))
}

/// Compose a format string from a prefix and a date token.
pub fn format_hashtag(prefix: &str, token: &HashtagToken) -> String {
    format!("{prefix}{TOKEN_OPEN}{}{TOKEN_CLOSE}", token.as_str())
}

/// Translate a Go reference layout into a `chrono` format pattern.
fn chrono_pattern(layout: &str) -> String {
    let mut pattern = String::with_capacity(layout.len() * 2);
    let mut rest = layout;

    'scan: while !rest.is_empty() {
        for (element, spec) in LAYOUT_ELEMENTS {
            if let Some(tail) = rest.strip_prefix(element) {
                pattern.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        let Some(ch) = chars.next() else {
            break;
        };
        if ch == '%' {
            pattern.push_str("%%");
        } else {
            pattern.push(ch);
        }
        rest = chars.as_str();
    }

    pattern
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        DateToken, HashtagTemplate, HashtagToken, chrono_pattern,
        format_hashtag, parse_hashtag,
    };
    use crate::errors::HashtagError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn given_every_known_token_when_formatted_and_parsed_then_parts_round_trip()
    {
        for token in DateToken::ALL {
            let token = HashtagToken::Date(token);
            let format = format_hashtag("DEV-", &token);

            let parsed = parse_hashtag(&format).expect("format parses");

            assert_eq!(parsed.prefix(), "DEV-");
            assert_eq!(parsed.token(), Some(&token));
            assert_eq!(parsed.format(), format);
        }
    }

    #[test]
    fn given_padded_span_when_parsed_then_token_is_trimmed() {
        let parsed = parse_hashtag("town-square-{{ Jan02 }}")
            .expect("format parses");

        assert_eq!(parsed.prefix(), "town-square-");
        assert_eq!(
            parsed.token(),
            Some(&HashtagToken::Date(DateToken::MonthDayPadded))
        );
    }

    #[test]
    fn given_unknown_layout_when_parsed_then_raw_token_is_kept_verbatim() {
        let parsed = parse_hashtag("ops{{Monday_2}}").expect("format parses");

        assert_eq!(
            parsed.token(),
            Some(&HashtagToken::Raw(String::from("Monday_2")))
        );
        assert_eq!(parsed.format(), "ops{{Monday_2}}");
    }

    #[test]
    fn given_malformed_formats_when_parsed_then_typed_errors_are_returned() {
        assert_eq!(parse_hashtag("DEV-Jan02"), Err(HashtagError::MissingOpen));
        assert_eq!(parse_hashtag("DEV-{{Jan02"), Err(HashtagError::Unclosed));
        assert_eq!(parse_hashtag("DEV-{{ }}"), Err(HashtagError::EmptyToken));
        assert_eq!(
            parse_hashtag("a{{Jan}}b{{02}}"),
            Err(HashtagError::MultipleSpans)
        );
        assert_eq!(
            parse_hashtag("DEV-{{Jan02}}-notes"),
            Err(HashtagError::TrailingText {
                trailing: String::from("-notes"),
            })
        );
    }

    #[test]
    fn given_malformed_format_when_parsed_leniently_then_literal_prefix_is_used()
    {
        let template = HashtagTemplate::parse_or_literal("weekly-sync");

        assert_eq!(template.prefix(), "weekly-sync");
        assert_eq!(template.token(), None);
        assert_eq!(template.format(), "weekly-sync");
    }

    #[test]
    fn given_known_tokens_when_rendered_then_dates_follow_layout() {
        let day = date(2026, 10, 5);
        let cases = [
            (DateToken::MonthDay, "#DEV-Oct 5"),
            (DateToken::DayMonth, "#DEV-5 Oct"),
            (DateToken::MonthDayPadded, "#DEV-Oct05"),
            (DateToken::MonthDayDashed, "#DEV-Oct-5"),
            (DateToken::YearMonthDay, "#DEV-2026-10-05"),
        ];

        for (token, expected) in cases {
            let template = HashtagTemplate::new("DEV-", token.into());
            assert_eq!(template.render(day), expected);
        }
    }

    #[test]
    fn given_literal_template_when_rendered_then_only_prefix_is_tagged() {
        let template = HashtagTemplate::literal("standup");

        assert_eq!(template.render(date(2026, 1, 1)), "#standup");
    }

    #[test]
    fn given_layout_with_percent_when_translated_then_percent_is_escaped() {
        assert_eq!(chrono_pattern("100%Jan"), "100%%%b");
        assert_eq!(chrono_pattern("January_2"), "%B%e");
    }
}
