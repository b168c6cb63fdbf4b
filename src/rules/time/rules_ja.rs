//! Japanese time rules. No word boundaries here; a trailing に belongs to the
//! mention so the reminder templates see the particle-free remainder.

use crate::engine::BucketMask;
use crate::rules::time::helpers::*;
use crate::rules::time::predicates::*;
use crate::time_expr::{DaySpec, PartOfDay, TimeExpr};
use crate::{Rule, Token};

pub fn rule_kyou() -> Rule {
    rule! {
        name: "今日",
        pattern: [re!(r"今日に?")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(0))) }
    }
}

pub fn rule_ashita() -> Rule {
    rule! {
        name: "明日",
        pattern: [re!(r"明日に?")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(1))) }
    }
}

pub fn rule_asatte() -> Rule {
    rule! {
        name: "明後日",
        pattern: [re!(r"明後日に?")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(2))) }
    }
}

/// 今夜, 今晩, 今朝
pub fn rule_konya() -> Rule {
    rule! {
        name: "今夜",
        pattern: [re!(r"(今夜|今晩|今朝)に?")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let part = if group(tokens, 0, 1)? == "今朝" { PartOfDay::Morning } else { PartOfDay::Night };
            Some(TimeExpr::DayAt { day: DaySpec::Offset(0), clock: part.clock() })
        }
    }
}

/// 金曜日, 次の金曜
pub fn rule_youbi() -> Rule {
    rule! {
        name: "<曜日>",
        pattern: [re!(r"(?:次の)?([月火水木金土日])曜日?に?")],
        buckets: BucketMask::WEEKDAYISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Day(DaySpec::Weekday(weekday_from_name(group(tokens, 0, 1)?)?)))
        }
    }
}

/// 7月4日
pub fn rule_gappi() -> Rule {
    rule! {
        name: "<月>月<日>日",
        pattern: [re!(r"(\d{1,2})月(\d{1,2})日に?")],
        buckets: BucketMask::MONTHISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let month = group_u32(tokens, 0, 1)?;
            let day = group_u32(tokens, 0, 2)?;
            Some(TimeExpr::Day(DaySpec::MonthDay { month, day }))
        }
    }
}

/// 5日
pub fn rule_hi() -> Rule {
    rule! {
        name: "<日>日",
        pattern: [re!(r"(\d{1,2})日に?")],
        buckets: BucketMask::ORDINALISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let day = group_u32(tokens, 0, 1).filter(|d| (1..=31).contains(d))?;
            Some(TimeExpr::Day(DaySpec::DayOfMonth(day)))
        }
    }
}

/// 午後5時, 5時半, 午前9時15分, 17時
pub fn rule_ji() -> Rule {
    rule! {
        name: "<時>時<分>",
        pattern: [re!(r"(午前|午後)?(\d{1,2})時(?:(\d{1,2})分|(半))?に?")],
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let meridiem = group(tokens, 0, 1).and_then(Meridiem::from_text);
            let minute = match group(tokens, 0, 4) {
                Some(_) => 30,
                None => group_u32(tokens, 0, 3).unwrap_or(0),
            };
            Some(TimeExpr::Clock(clock_from(group_u32(tokens, 0, 2)?, minute, meridiem)?))
        }
    }
}

pub fn rule_shougo() -> Rule {
    rule! {
        name: "正午",
        pattern: [re!(r"正午に?")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Clock(clock_24(12, 0)?)) }
    }
}

/// 10分後, 2時間後, 3日後
pub fn rule_go() -> Rule {
    rule! {
        name: "<数><単位>後",
        pattern: [re!(r"(\d+)\s*(分|時間|日|週間|ヶ月|か月)後に?")],
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let amount = number_from_text(group(tokens, 0, 1)?)?;
            let grain = grain_from_unit(group(tokens, 0, 2)?)?;
            Some(TimeExpr::In { amount, grain })
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_kyou(),
        rule_ashita(),
        rule_asatte(),
        rule_konya(),
        rule_youbi(),
        rule_gappi(),
        rule_hi(),
        rule_ji(),
        rule_shougo(),
        rule_go(),
    ]
}
