//! Display formatting for prices and dates.
//!
//! Output is pinned to the `fr-FR` locale, the `XOF` currency and UTC (the
//! civil time of the XOF zone), independent of the host's locale settings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Thousands separator used by `fr-FR` (narrow no-break space).
const GROUP_SEPARATOR: char = '\u{202F}';

/// Currency suffix for XOF, preceded by a no-break space.
const XOF_SUFFIX: &str = "\u{A0}F\u{A0}CFA";

const INVALID_DATE: &str = "Invalid Date";

/// Formats `price` as an XOF amount, e.g. `2500.0` -> `"2 500 F CFA"`.
///
/// XOF has no minor unit, so the amount is rounded half away from zero.
/// Negative amounts that round to zero keep their sign (`-0.2` -> `"-0 F CFA"`).
/// Non-finite input is rendered as `NaN` or `∞` with the currency suffix.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return format!("NaN{}", XOF_SUFFIX);
    }
    if price.is_infinite() {
        let sign = if price < 0.0 { "-" } else { "" };
        return format!("{}∞{}", sign, XOF_SUFFIX);
    }

    let rounded = price.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, XOF_SUFFIX)
}

/// Input accepted by [`format_date`].
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Value(DateTime<Utc>),
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(date: DateTime<Utc>) -> Self {
        DateInput::Value(date)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

/// Formats a date as long French date and time, e.g. `"15 janvier 2025 à 14:30"`.
///
/// Strings that don't parse render as `"Invalid Date"`.
pub fn format_date<'a>(date: impl Into<DateInput<'a>>) -> String {
    let date = match date.into() {
        DateInput::Value(date) => date,
        DateInput::Text(text) => match parse_date(text) {
            Some(date) => date,
            None => return INVALID_DATE.to_string(),
        },
    };

    date.format_localized("%-d %B %Y à %H:%M", chrono::Locale::fr_FR)
        .to_string()
}

/// Parses the date formats the order API and its callers use.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM[:SS]` (read as UTC)
/// and the ISO date forms `YYYY-MM-DD`, `YYYY-MM` and `YYYY`, which start at
/// midnight UTC on the first day they name.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive.and_utc());
        }
    }
    parse_iso_day(text)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_iso_day(text: &str) -> Option<NaiveDate> {
    let is_year = |part: &str| part.len() == 4 && part.bytes().all(|b| b.is_ascii_digit());

    match text.split('-').collect::<Vec<_>>()[..] {
        [year] if is_year(year) => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        [year, month] if is_year(year) && month.len() == 2 => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        [year, _, _] if is_year(year) => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
        _ => None,
    }
}
