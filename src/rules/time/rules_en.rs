//! English time rules.
//!
//! The prepositions "at", "on" and "by" stay outside the mentions (the
//! reminder templates need them); the one exception is "at <hour>" without a
//! meridiem, where "at" is what makes the bare number a time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::BucketMask;
use crate::rules::time::helpers::*;
use crate::rules::time::predicates::*;
use crate::time_expr::{Clock, DaySpec, Grain, PartOfDay, TimeExpr};
use crate::{Pattern, Rule, Token};

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({EN_MONTHS})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b")).unwrap()
});

static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:the\s+)?(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({EN_MONTHS})\b")).unwrap()
});

pub fn rule_today() -> Rule {
    rule! {
        name: "today",
        pattern: [re!(r"(?i)\btoday\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(0))) }
    }
}

pub fn rule_tomorrow() -> Rule {
    rule! {
        name: "tomorrow",
        pattern: [re!(r"(?i)\b(?:tomorrow|tmrw)\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(1))) }
    }
}

pub fn rule_day_after_tomorrow() -> Rule {
    rule! {
        name: "day after tomorrow",
        pattern: [re!(r"(?i)\b(?:the\s+)?day\s+after\s+tomorrow\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(2))) }
    }
}

pub fn rule_tonight() -> Rule {
    rule! {
        name: "tonight",
        pattern: [re!(r"(?i)\btonight\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::DayAt { day: DaySpec::Offset(0), clock: PartOfDay::Night.clock() })
        }
    }
}

/// "this morning", "this evening"
pub fn rule_this_part_of_day() -> Rule {
    rule! {
        name: "this <part-of-day>",
        pattern: [re!(r"(?i)\bthis\s+(morning|afternoon|evening)\b")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let part = part_of_day_from_text(group(tokens, 0, 1)?)?;
            Some(TimeExpr::DayAt { day: DaySpec::Offset(0), clock: part.clock() })
        }
    }
}

/// "in the morning", "evening", "night"
pub fn rule_part_of_day() -> Rule {
    rule! {
        name: "<part-of-day>",
        pattern: [re!(r"(?i)\b(?:in\s+the\s+)?(morning|afternoon|evening|night)\b")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Clock(part_of_day_from_text(group(tokens, 0, 1)?)?.clock()))
        }
    }
}

/// "Friday", "next Friday"; both mean the next Friday after today.
pub fn rule_weekday() -> Rule {
    rule! {
        name: "<weekday>",
        pattern: [
            re!(r"(?i)\b(?:(?:next|this|coming)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        ],
        buckets: BucketMask::WEEKDAYISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Day(DaySpec::Weekday(weekday_from_name(group(tokens, 0, 1)?)?)))
        }
    }
}

pub fn rule_next_week() -> Rule {
    rule! {
        name: "next week",
        pattern: [re!(r"(?i)\bnext\s+week\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(7))) }
    }
}

/// "July 4th", "Feb. 2"
pub fn rule_month_day() -> Rule {
    rule! {
        name: "<month> <day>",
        pattern: [Pattern::Regex(&MONTH_DAY)],
        buckets: BucketMask::MONTHISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let month = month_from_name(group(tokens, 0, 1)?)?;
            let day = group_u32(tokens, 0, 2)?;
            Some(TimeExpr::Day(DaySpec::MonthDay { month, day }))
        }
    }
}

/// "2nd February", "the 4th of July"
pub fn rule_day_month() -> Rule {
    rule! {
        name: "<day> <month>",
        pattern: [Pattern::Regex(&DAY_MONTH)],
        buckets: BucketMask::MONTHISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let day = group_u32(tokens, 0, 1)?;
            let month = month_from_name(group(tokens, 0, 2)?)?;
            Some(TimeExpr::Day(DaySpec::MonthDay { month, day }))
        }
    }
}

/// "the 5th"
pub fn rule_day_of_month() -> Rule {
    rule! {
        name: "the <ordinal>",
        pattern: [re!(r"(?i)\bthe\s+(\d{1,2})(?:st|nd|rd|th)\b")],
        buckets: BucketMask::ORDINALISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let day = group_u32(tokens, 0, 1).filter(|d| (1..=31).contains(d))?;
            Some(TimeExpr::Day(DaySpec::DayOfMonth(day)))
        }
    }
}

/// "7:15pm", "7:15 PM"
pub fn rule_hhmm_meridiem() -> Rule {
    rule! {
        name: "hh:mm am|pm",
        pattern: [re!(r"(?i)\b(\d{1,2}):(\d{2})\s*([ap])\.?m\b")],
        buckets: BucketMask::HAS_COLON.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let meridiem = Meridiem::from_text(group(tokens, 0, 3)?);
            Some(TimeExpr::Clock(clock_from(group_u32(tokens, 0, 1)?, group_u32(tokens, 0, 2)?, meridiem)?))
        }
    }
}

/// "17:30", "7:15"
pub fn rule_hhmm() -> Rule {
    rule! {
        name: "hh:mm",
        pattern: [re!(r"\b(\d{1,2}):(\d{2})\b")],
        buckets: BucketMask::HAS_COLON.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Clock(clock_from(group_u32(tokens, 0, 1)?, group_u32(tokens, 0, 2)?, None)?))
        }
    }
}

/// "5pm", "5 PM", "9a.m"
pub fn rule_hour_meridiem() -> Rule {
    rule! {
        name: "h am|pm",
        pattern: [re!(r"(?i)\b(\d{1,2})\s*([ap])\.?m\b")],
        buckets: BucketMask::HAS_AMPM.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let meridiem = Meridiem::from_text(group(tokens, 0, 2)?);
            Some(TimeExpr::Clock(clock_from(group_u32(tokens, 0, 1)?, 0, meridiem)?))
        }
    }
}

pub fn rule_noon_midnight() -> Rule {
    rule! {
        name: "noon|midnight",
        pattern: [re!(r"(?i)\b(noon|midday|midnight)\b")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let hour = if group(tokens, 0, 1)? == "midnight" { 0 } else { 12 };
            Some(TimeExpr::Clock(clock_24(hour, 0)?))
        }
    }
}

/// "5 o'clock"
pub fn rule_oclock() -> Rule {
    rule! {
        name: "<hour> o'clock",
        pattern: [re!(r"(?i)\b(\d{1,2})\s*o'?\s*clock\b")],
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Clock(clock_from(group_u32(tokens, 0, 1)?, 0, None)?))
        }
    }
}

/// "at 5", "at 7:15", "at 5 o'clock". A trailing meridiem or a 24-hour
/// reading rejects the match so the plain clock rules keep "at" out of the
/// mention.
pub fn rule_at_hour() -> Rule {
    rule! {
        name: "at <hour>",
        pattern: [re!(r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?(?:\s*o'?\s*clock)?(?:\s*([ap])\.?m)?\b")],
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            if group(tokens, 0, 3).is_some() {
                return None;
            }
            let minute = group_u32(tokens, 0, 2).unwrap_or(0);
            match clock_from(group_u32(tokens, 0, 1)?, minute, None)? {
                clock @ Clock::Ambiguous { .. } => Some(TimeExpr::Clock(clock)),
                Clock::Exact(_) => None,
            }
        }
    }
}

/// "in 10 minutes", "in an hour", "in two weeks"
pub fn rule_in_duration() -> Rule {
    rule! {
        name: "in <duration>",
        pattern: [
            re!(r"(?i)\bin\s+(\d+|an?|one|two|three|four|five|six|seven|eight|nine|ten|twelve|fifteen|twenty|thirty|forty five)\s+(minute|min|hour|hr|day|week|month)s?\b")
        ],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let amount = number_from_text(group(tokens, 0, 1)?)?;
            let grain = grain_from_unit(group(tokens, 0, 2)?)?;
            Some(TimeExpr::In { amount, grain })
        }
    }
}

pub fn rule_in_half_an_hour() -> Rule {
    rule! {
        name: "in half an hour",
        pattern: [re!(r"(?i)\bin\s+half\s+an\s+hour\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::In { amount: 30, grain: Grain::Minute }) }
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_today(),
        rule_tomorrow(),
        rule_day_after_tomorrow(),
        rule_tonight(),
        rule_this_part_of_day(),
        rule_part_of_day(),
        rule_weekday(),
        rule_next_week(),
        rule_month_day(),
        rule_day_month(),
        rule_day_of_month(),
        rule_hhmm_meridiem(),
        rule_hhmm(),
        rule_hour_meridiem(),
        rule_noon_midnight(),
        rule_oclock(),
        rule_at_hour(),
        rule_in_duration(),
        rule_in_half_an_hour(),
    ]
}
