use crate::time_expr::{Clock, Grain, PartOfDay, TimeExpr};
use crate::{Token, TokenKind};
use chrono::NaiveTime;

pub mod boundaries;
pub mod shift;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// "a", "am", "午前" → `Am`; "p", "pm", "午後" → `Pm`.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "a" | "am" | "午前" => Some(Meridiem::Am),
            "p" | "pm" | "午後" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// Capture `group` of regex token `tokens[token_idx]`; `None` when the group
/// did not participate.
pub fn group(tokens: &[Token], token_idx: usize, group: usize) -> Option<&str> {
    match &tokens.get(token_idx)?.kind {
        // Groups are already lowercased by the parser.
        TokenKind::RegexMatch(groups) => groups.get(group).map(String::as_str).filter(|g| !g.is_empty()),
        _ => None,
    }
}

pub fn group_u32(tokens: &[Token], token_idx: usize, idx: usize) -> Option<u32> {
    group(tokens, token_idx, idx)?.parse().ok()
}

pub fn time_expr(token: &Token) -> Option<&TimeExpr> {
    match &token.kind {
        TokenKind::TimeExpr(expr) => Some(expr),
        _ => None,
    }
}

/// Build a clock from loose parts.
///
/// With a meridiem the hour must be 1..=12. Without one, 0 and 13..=23 are
/// read on the 24-hour clock and 1..=12 stay ambiguous.
pub fn clock_from(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Option<Clock> {
    if minute > 59 {
        return None;
    }
    match meridiem {
        Some(meridiem) if (1..=12).contains(&hour) => {
            let hour = match meridiem {
                Meridiem::Am => hour % 12,
                Meridiem::Pm => hour % 12 + 12,
            };
            Some(Clock::Exact(NaiveTime::from_hms_opt(hour, minute, 0)?))
        }
        Some(_) => None,
        None if (1..=12).contains(&hour) => Some(Clock::Ambiguous { hour, minute }),
        None => Some(Clock::Exact(NaiveTime::from_hms_opt(hour, minute, 0)?)),
    }
}

/// 24-hour clock only ("17h30", "17時").
pub fn clock_24(hour: u32, minute: u32) -> Option<Clock> {
    Some(Clock::Exact(NaiveTime::from_hms_opt(hour, minute, 0)?))
}

/// Digits or a small number word (English or French).
pub fn number_from_text(text: &str) -> Option<i64> {
    if text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }
    match text {
        "a" | "an" | "one" | "un" | "une" => Some(1),
        "two" | "deux" => Some(2),
        "three" | "trois" => Some(3),
        "four" | "quatre" => Some(4),
        "five" | "cinq" => Some(5),
        "six" => Some(6),
        "seven" | "sept" => Some(7),
        "eight" | "huit" => Some(8),
        "nine" | "neuf" => Some(9),
        "ten" | "dix" => Some(10),
        "twelve" | "douze" => Some(12),
        "fifteen" | "quinze" => Some(15),
        "twenty" | "vingt" => Some(20),
        "thirty" | "trente" => Some(30),
        "forty five" | "quarante-cinq" => Some(45),
        _ => None,
    }
}

pub fn part_of_day_from_text(text: &str) -> Option<PartOfDay> {
    match text {
        "morning" | "matin" | "朝" => Some(PartOfDay::Morning),
        "afternoon" | "après-midi" | "午後" => Some(PartOfDay::Afternoon),
        "evening" | "soir" | "soirée" | "夕方" => Some(PartOfDay::Evening),
        "night" | "nuit" | "夜" => Some(PartOfDay::Night),
        _ => None,
    }
}

pub fn grain_from_unit(unit: &str) -> Option<Grain> {
    match unit {
        "minute" | "min" | "分" => Some(Grain::Minute),
        "hour" | "hr" | "heure" | "時間" => Some(Grain::Hour),
        "day" | "jour" | "日" => Some(Grain::Day),
        "week" | "semaine" | "週間" => Some(Grain::Week),
        "month" | "mois" | "ヶ月" | "か月" => Some(Grain::Month),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_from_reads_meridiem() {
        let five_pm = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        assert_eq!(clock_from(5, 0, Some(Meridiem::Pm)), Some(Clock::Exact(five_pm)));
        assert_eq!(clock_from(12, 0, Some(Meridiem::Am)), Some(Clock::Exact(NaiveTime::MIN)));
        assert_eq!(clock_from(15, 0, Some(Meridiem::Pm)), None);
    }

    #[test]
    fn clock_from_without_meridiem() {
        assert_eq!(clock_from(5, 30, None), Some(Clock::Ambiguous { hour: 5, minute: 30 }));
        assert_eq!(clock_from(17, 30, None), Some(Clock::Exact(NaiveTime::from_hms_opt(17, 30, 0).unwrap())));
        assert_eq!(clock_from(24, 0, None), None);
        assert_eq!(clock_from(5, 75, None), None);
    }

    #[test]
    fn numbers_and_units() {
        assert_eq!(number_from_text("15"), Some(15));
        assert_eq!(number_from_text("an"), Some(1));
        assert_eq!(number_from_text("deux"), Some(2));
        assert_eq!(number_from_text("several"), None);
        assert_eq!(grain_from_unit("semaine"), Some(Grain::Week));
        assert_eq!(grain_from_unit("時間"), Some(Grain::Hour));
    }
}
