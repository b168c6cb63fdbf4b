//! Day + clock compositions, shared by every locale. Connectors are the only
//! locale-specific part.

use crate::rules::time::helpers::time_expr;
use crate::rules::time::predicates::{is_clock, is_day};
use crate::time_expr::TimeExpr;
use crate::{Dimension, Pattern, Rule, Token};

/// `<day> <connector> <clock>`: "tomorrow at 5pm", "明日の午後5時".
pub fn rule_day_clock(name: &'static str, connector: Pattern) -> Rule {
    rule! {
        name: name,
        pattern: [pred!(is_day), connector, pred!(is_clock)],
        deps: [Dimension::Time],
        prod: |tokens: &[Token]| -> Option<TimeExpr> { day_at(tokens.first()?, tokens.last()?) }
    }
}

/// `<day><clock>` with nothing in between: "明日午後5時".
pub fn rule_day_adjacent_clock(name: &'static str) -> Rule {
    rule! {
        name: name,
        pattern: [pred!(is_day), pred!(is_clock)],
        deps: [Dimension::Time],
        prod: |tokens: &[Token]| -> Option<TimeExpr> { day_at(tokens.first()?, tokens.last()?) }
    }
}

/// `<clock> <connector> <day>`: "5pm tomorrow", "7:15pm on 2nd February".
pub fn rule_clock_day(name: &'static str, connector: Pattern) -> Rule {
    rule! {
        name: name,
        pattern: [pred!(is_clock), connector, pred!(is_day)],
        deps: [Dimension::Time],
        prod: |tokens: &[Token]| -> Option<TimeExpr> { day_at(tokens.last()?, tokens.first()?) }
    }
}

fn day_at(day: &Token, clock: &Token) -> Option<TimeExpr> {
    let day = time_expr(day)?.day()?;
    let clock = time_expr(clock)?.clock()?;
    Some(TimeExpr::DayAt { day, clock })
}

pub fn get_en() -> Vec<Rule> {
    vec![
        rule_day_clock("<day> at <clock>", re!(r"(?i)\s+at\s+")),
        rule_day_clock("<day> <clock>", re!(r"\s+")),
        rule_clock_day("<clock> on <day>", re!(r"(?i)\s+on\s+")),
        rule_clock_day("<clock> <day>", re!(r"\s+")),
    ]
}

pub fn get_fr() -> Vec<Rule> {
    vec![rule_day_clock("<jour> <heure>", re!(r"\s+")), rule_clock_day("<heure> <jour>", re!(r"\s+"))]
}

pub fn get_ja() -> Vec<Rule> {
    vec![rule_day_clock("<日>の<時刻>", re!(r"の")), rule_day_adjacent_clock("<日><時刻>")]
}
