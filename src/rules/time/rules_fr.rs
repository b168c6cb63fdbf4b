//! French time rules. Clock mentions take their leading "à" with them.

use crate::engine::BucketMask;
use crate::rules::time::helpers::*;
use crate::rules::time::predicates::*;
use crate::time_expr::{DaySpec, TimeExpr};
use crate::{Rule, Token};

pub fn rule_aujourdhui() -> Rule {
    rule! {
        name: "aujourd'hui",
        pattern: [re!(r"(?i)\baujourd['’]hui\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(0))) }
    }
}

pub fn rule_demain() -> Rule {
    rule! {
        name: "demain",
        pattern: [re!(r"(?i)\bdemain\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(1))) }
    }
}

pub fn rule_apres_demain() -> Rule {
    rule! {
        name: "après-demain",
        pattern: [re!(r"(?i)\baprès[-\s]demain\b")],
        prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(2))) }
    }
}

/// "ce soir", "ce matin", "cet après-midi", "cette nuit"
pub fn rule_ce_moment() -> Rule {
    rule! {
        name: "ce <moment>",
        pattern: [re!(r"(?i)\b(?:ce|cet|cette)\s+(matin|après-midi|soir|nuit)\b")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let part = part_of_day_from_text(group(tokens, 0, 1)?)?;
            Some(TimeExpr::DayAt { day: DaySpec::Offset(0), clock: part.clock() })
        }
    }
}

/// "matin", "le soir", "dans la soirée"
pub fn rule_moment() -> Rule {
    rule! {
        name: "<moment>",
        pattern: [re!(r"(?i)\b(?:le\s+|dans\s+la\s+)?(matin|après-midi|soir|soirée|nuit)\b")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Clock(part_of_day_from_text(group(tokens, 0, 1)?)?.clock()))
        }
    }
}

/// "vendredi", "vendredi prochain"
pub fn rule_jour_semaine() -> Rule {
    rule! {
        name: "<jour de la semaine>",
        pattern: [re!(r"(?i)\b(lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche)(?:\s+prochain)?\b")],
        buckets: BucketMask::WEEKDAYISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            Some(TimeExpr::Day(DaySpec::Weekday(weekday_from_name(group(tokens, 0, 1)?)?)))
        }
    }
}

/// "le 4 juillet", "1er mai"
pub fn rule_jour_mois() -> Rule {
    rule! {
        name: "le <jour> <mois>",
        pattern: [
            re!(r"(?i)\b(?:le\s+)?(\d{1,2})(?:er)?\s+(janvier|février|fevrier|mars|avril|mai|juin|juillet|août|aout|septembre|octobre|novembre|décembre|decembre)\b")
        ],
        buckets: BucketMask::MONTHISH.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let day = group_u32(tokens, 0, 1)?;
            let month = month_from_name(group(tokens, 0, 2)?)?;
            Some(TimeExpr::Day(DaySpec::MonthDay { month, day }))
        }
    }
}

/// "le 5", "le 1er"
pub fn rule_le_jour() -> Rule {
    rule! {
        name: "le <jour>",
        pattern: [re!(r"(?i)\ble\s+(\d{1,2})(?:er)?\b")],
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let day = group_u32(tokens, 0, 1).filter(|d| (1..=31).contains(d))?;
            Some(TimeExpr::Day(DaySpec::DayOfMonth(day)))
        }
    }
}

/// "17h", "à 17h30", "17 h 30"
pub fn rule_heure() -> Rule {
    rule! {
        name: "<heure>h<minutes>",
        pattern: [re!(r"(?i)\b(?:à\s+)?(\d{1,2})\s*h(?:\s*(\d{2}))?\b")],
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let minute = group_u32(tokens, 0, 2).unwrap_or(0);
            Some(TimeExpr::Clock(clock_24(group_u32(tokens, 0, 1)?, minute)?))
        }
    }
}

pub fn rule_midi_minuit() -> Rule {
    rule! {
        name: "midi|minuit",
        pattern: [re!(r"(?i)\b(?:à\s+)?(midi|minuit)\b")],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let hour = if group(tokens, 0, 1)? == "minuit" { 0 } else { 12 };
            Some(TimeExpr::Clock(clock_24(hour, 0)?))
        }
    }
}

/// "dans 10 minutes", "dans une heure"
pub fn rule_dans_duree() -> Rule {
    rule! {
        name: "dans <durée>",
        pattern: [
            re!(r"(?i)\bdans\s+(\d+|une?|deux|trois|quatre|cinq|dix|quinze|vingt|trente)\s+(minute|heure|jour|semaine|mois)s?\b")
        ],
        prod: |tokens: &[Token]| -> Option<TimeExpr> {
            let amount = number_from_text(group(tokens, 0, 1)?)?;
            let grain = grain_from_unit(group(tokens, 0, 2)?)?;
            Some(TimeExpr::In { amount, grain })
        }
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_aujourdhui(),
        rule_demain(),
        rule_apres_demain(),
        rule_ce_moment(),
        rule_moment(),
        rule_jour_semaine(),
        rule_jour_mois(),
        rule_le_jour(),
        rule_heure(),
        rule_midi_minuit(),
        rule_dans_duree(),
    ]
}
