use crate::rules::time::helpers::time_expr;
use crate::time_expr::TimeExpr;
use crate::{Dimension, Token};
use chrono::Weekday;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// English month names and abbreviations for rule patterns. Full names come
/// first so leftmost-first alternation prefers them.
pub(crate) const EN_MONTHS: &str = r"january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

pub(crate) static WEEKDAY_NAME: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| {
    HashMap::from([
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
        ("lundi", Weekday::Mon),
        ("mardi", Weekday::Tue),
        ("mercredi", Weekday::Wed),
        ("jeudi", Weekday::Thu),
        ("vendredi", Weekday::Fri),
        ("samedi", Weekday::Sat),
        ("dimanche", Weekday::Sun),
        ("月", Weekday::Mon),
        ("火", Weekday::Tue),
        ("水", Weekday::Wed),
        ("木", Weekday::Thu),
        ("金", Weekday::Fri),
        ("土", Weekday::Sat),
        ("日", Weekday::Sun),
    ])
});

pub(crate) static MONTH_NAME: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("january", 1),
        ("jan", 1),
        ("february", 2),
        ("feb", 2),
        ("march", 3),
        ("mar", 3),
        ("april", 4),
        ("apr", 4),
        ("may", 5),
        ("june", 6),
        ("jun", 6),
        ("july", 7),
        ("jul", 7),
        ("august", 8),
        ("aug", 8),
        ("september", 9),
        ("sept", 9),
        ("sep", 9),
        ("october", 10),
        ("oct", 10),
        ("november", 11),
        ("nov", 11),
        ("december", 12),
        ("dec", 12),
        ("janvier", 1),
        ("février", 2),
        ("fevrier", 2),
        ("mars", 3),
        ("avril", 4),
        ("mai", 5),
        ("juin", 6),
        ("juillet", 7),
        ("août", 8),
        ("aout", 8),
        ("septembre", 9),
        ("octobre", 10),
        ("novembre", 11),
        ("décembre", 12),
        ("decembre", 12),
    ])
});

pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAME.get(name).copied()
}

pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAME.get(name).copied()
}

fn is_time(token: &Token) -> bool {
    token.dim == Dimension::Time
}

/// A calendar day with no time of day yet.
pub fn is_day(token: &Token) -> bool {
    is_time(token) && matches!(time_expr(token), Some(TimeExpr::Day(_)))
}

/// A time of day with no calendar day yet.
pub fn is_clock(token: &Token) -> bool {
    is_time(token) && matches!(time_expr(token), Some(TimeExpr::Clock(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntoToken;
    use crate::time_expr::{Clock, DaySpec};

    #[test]
    fn names_cover_every_locale() {
        assert_eq!(weekday_from_name("friday"), Some(Weekday::Fri));
        assert_eq!(weekday_from_name("vendredi"), Some(Weekday::Fri));
        assert_eq!(weekday_from_name("金"), Some(Weekday::Fri));
        assert_eq!(month_from_name("sept"), Some(9));
        assert_eq!(month_from_name("août"), Some(8));
        assert_eq!(month_from_name("smarch"), None);
    }

    #[test]
    fn day_and_clock_predicates_are_disjoint() {
        let day = TimeExpr::Day(DaySpec::Offset(1)).into_token().unwrap();
        let clock = TimeExpr::Clock(Clock::Ambiguous { hour: 5, minute: 0 }).into_token().unwrap();
        let both = TimeExpr::DayAt { day: DaySpec::Offset(1), clock: Clock::Ambiguous { hour: 5, minute: 0 } }
            .into_token()
            .unwrap();

        assert!(is_day(&day) && !is_clock(&day));
        assert!(is_clock(&clock) && !is_day(&clock));
        assert!(!is_day(&both) && !is_clock(&both));
    }
}
