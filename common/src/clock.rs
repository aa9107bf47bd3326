//! Clock strings shown by the face.
//!
//! Hour and minute go into the eyes, the weekday into the mouth. The buffers
//! are fixed-size `heapless` strings that are rewritten in place every minute.
//!
//! # Buffer Sizes
//!
//! | Field   | Capacity | Longest value |
//! |---------|----------|---------------|
//! | hour    | 2        | "23"          |
//! | minute  | 2        | "59"          |
//! | weekday | 9        | "Wednesday"   |
//!
//! Longer localized weekday names are truncated, never overflowed.

use chrono::{Datelike, Timelike, Weekday};
use heapless::String;

/// Capacity of the hour and minute buffers.
pub const TIME_DIGITS: usize = 2;

/// Capacity of the weekday buffer ("Wednesday").
pub const WEEKDAY_LEN: usize = 9;

/// Formatted hour, minute and weekday.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ClockStrings {
    pub hour: String<TIME_DIGITS>,
    pub minute: String<TIME_DIGITS>,
    pub weekday: String<WEEKDAY_LEN>,
}

impl ClockStrings {
    pub const fn new() -> Self {
        Self {
            hour: String::new(),
            minute: String::new(),
            weekday: String::new(),
        }
    }

    /// Overwrite all three fields from `now`.
    ///
    /// `weekday_name` maps a weekday to its localized name; its case is
    /// normalized here.
    pub fn update<'a, T, F>(
        &mut self,
        now: &T,
        use_24h: bool,
        weekday_name: F,
    ) where
        T: Timelike + Datelike,
        F: FnOnce(Weekday) -> &'a str,
    {
        let hour = if use_24h { now.hour() } else { now.hour12().1 };
        self.hour.clear();
        push_two_digits(&mut self.hour, hour);

        self.minute.clear();
        push_two_digits(&mut self.minute, now.minute());

        self.weekday = capitalize_weekday(weekday_name(now.weekday()));
    }

    /// Whether the minute reads "00" or "30".
    pub fn is_palette_mark(&self) -> bool {
        matches!(self.minute.as_bytes(), [b'0' | b'3', b'0'])
    }
}

/// Format `now` into fresh clock strings.
pub fn format_time<'a, T, F>(
    now: &T,
    use_24h: bool,
    weekday_name: F,
) -> ClockStrings
where
    T: Timelike + Datelike,
    F: FnOnce(Weekday) -> &'a str,
{
    let mut strings = ClockStrings::new();
    strings.update(now, use_24h, weekday_name);
    strings
}

/// Push `value % 100` as two zero-padded digits.
pub fn push_two_digits<const N: usize>(
    s: &mut String<N>,
    value: u32,
) {
    let value = value % 100;
    s.push((b'0' + (value / 10) as u8) as char).ok();
    s.push((b'0' + (value % 10) as u8) as char).ok();
}

/// Uppercase the first character, lowercase the rest.
///
/// Reading stops at the first NUL. Writing stops at the first character whose
/// case mapping does not fit in `N` bytes, so the result is always a valid
/// prefix and never overflows. Applying it twice gives the same result.
pub fn capitalize_weekday<const N: usize>(name: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for (i, c) in name.chars().take_while(|&c| c != '\0').enumerate() {
        let fits = if i == 0 {
            push_all(&mut out, title_case(c))
        } else {
            push_all(&mut out, c.to_lowercase())
        };
        if !fits {
            break;
        }
    }
    out
}

/// Uppercase mapping of `c` with only its first char kept upper ('ß' -> "Ss").
fn title_case(c: char) -> impl Iterator<Item = char> + Clone {
    let mut upper = c.to_uppercase();
    let head = upper.next();
    head.into_iter().chain(upper.flat_map(char::to_lowercase))
}

/// Push every char of a case mapping, or none of them.
fn push_all<const N: usize, I>(
    out: &mut String<N>,
    chars: I,
) -> bool
where
    I: Iterator<Item = char> + Clone,
{
    let needed: usize = chars.clone().map(char::len_utf8).sum();
    if out.len() + needed > N {
        return false;
    }
    for c in chars {
        out.push(c).ok();
    }
    true
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::host::english_weekday;

    fn at(
        hour: u32,
        minute: u32,
    ) -> NaiveDateTime {
        // 2024-01-03 is a Wednesday
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_hour_24h() {
        assert_eq!(format_time(&at(13, 5), true, english_weekday).hour, "13");
        assert_eq!(format_time(&at(0, 5), true, english_weekday).hour, "00");
        assert_eq!(format_time(&at(9, 5), true, english_weekday).hour, "09");
    }

    #[test]
    fn test_hour_12h() {
        assert_eq!(format_time(&at(0, 0), false, english_weekday).hour, "12");
        assert_eq!(format_time(&at(12, 0), false, english_weekday).hour, "12");
        assert_eq!(format_time(&at(13, 0), false, english_weekday).hour, "01");
        assert_eq!(format_time(&at(23, 0), false, english_weekday).hour, "11");
    }

    #[test]
    fn test_minute_zero_padded() {
        assert_eq!(format_time(&at(10, 7), true, english_weekday).minute, "07");
        assert_eq!(format_time(&at(10, 59), true, english_weekday).minute, "59");
    }

    #[test]
    fn test_weekday() {
        let strings = format_time(&at(14, 30), true, english_weekday);
        assert_eq!(strings.weekday, "Wednesday");
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut strings = format_time(&at(14, 30), true, english_weekday);
        let next = NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(8, 1, 0)
            .unwrap();
        strings.update(&next, true, english_weekday);
        assert_eq!(strings.hour, "08");
        assert_eq!(strings.minute, "01");
        assert_eq!(strings.weekday, "Thursday");
    }

    #[test]
    fn test_palette_mark() {
        for (minute, expected) in [(0, true), (30, true), (31, false), (3, false), (10, false), (59, false)] {
            let strings = format_time(&at(14, minute), true, english_weekday);
            assert_eq!(strings.is_palette_mark(), expected, "minute {minute}");
        }
    }

    #[test]
    fn test_capitalize_normalizes_case() {
        assert_eq!(capitalize_weekday::<9>("wEDNESDAY"), "Wednesday");
        assert_eq!(capitalize_weekday::<9>("monday"), "Monday");
        assert_eq!(capitalize_weekday::<9>("MONTAG"), "Montag");
    }

    #[test]
    fn test_capitalize_is_idempotent() {
        for name in ["Wednesday", "sAMSTAG", "mercredi", "Четверг", "", "x", "ßamstag", "ŉame"] {
            let once = capitalize_weekday::<WEEKDAY_LEN>(name);
            let twice = capitalize_weekday::<WEEKDAY_LEN>(&once);
            assert_eq!(once, twice, "{name}");
        }
    }

    #[test]
    fn test_capitalize_multichar_uppercase() {
        assert_eq!(capitalize_weekday::<WEEKDAY_LEN>("ßamstag"), "Ssamstag");
        assert_eq!(capitalize_weekday::<WEEKDAY_LEN>("SSAMSTAG"), "Ssamstag");
    }

    #[test]
    fn test_capitalize_stops_at_nul() {
        assert_eq!(capitalize_weekday::<9>("friday\0garbage"), "Friday");
        assert_eq!(capitalize_weekday::<9>("\0friday"), "");
    }

    #[test]
    fn test_capitalize_truncates() {
        // "Donnerstag" has 10 letters
        assert_eq!(capitalize_weekday::<WEEKDAY_LEN>("donnerstag"), "Donnersta");
        // Cyrillic letters take two bytes each: only four fit in nine bytes
        assert_eq!(capitalize_weekday::<WEEKDAY_LEN>("четверг"), "Четв");
    }

    #[test]
    fn test_push_two_digits() {
        let mut s: String<2> = String::new();
        push_two_digits(&mut s, 5);
        assert_eq!(s, "05");

        let mut s: String<2> = String::new();
        push_two_digits(&mut s, 42);
        assert_eq!(s, "42");
    }
}
