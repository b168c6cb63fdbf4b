//! Trigger scanning (input pre-classification).
//!
//! Inspects the phrase and produces coarse buckets (`BucketMask`) that let the
//! parser quickly decide which rules should be considered.
//!
//! This is a *heuristic* scan. False positives are acceptable because the
//! downstream parser still has to match full rule patterns. The word lists
//! cover every registered locale at once, so one scan serves all rule sets;
//! Japanese has no word boundaries and is detected by marker characters.

use super::compiled_rules::BucketMask;

/// Input characteristics detected from the phrase.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "lundi",
    "mardi",
    "mercredi",
    "jeudi",
    "vendredi",
    "samedi",
    "dimanche",
];

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "jan",
    "feb",
    "mar",
    "apr",
    "jun",
    "jul",
    "aug",
    "sep",
    "sept",
    "oct",
    "nov",
    "dec",
    "janvier",
    "février",
    "fevrier",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "aout",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
    "decembre",
];

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();
        let lower = input.to_lowercase();
        let words: Vec<&str> =
            lower.split_whitespace().map(|w| w.trim_matches(|c: char| !c.is_alphanumeric())).collect();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if input.contains(':') {
            buckets |= BucketMask::HAS_COLON;
        }

        // AM/PM with crude checks
        if lower.contains("am") || lower.contains("pm") || lower.contains("午前") || lower.contains("午後") {
            buckets |= BucketMask::HAS_AMPM;
        }

        if words.iter().any(|w| WEEKDAYS.contains(w)) || input.contains('曜') {
            buckets |= BucketMask::WEEKDAYISH;
        }

        if words.iter().any(|w| MONTHS.contains(w)) || input.contains('月') {
            buckets |= BucketMask::MONTHISH;
        }

        if words.iter().any(|w| is_numeric_ordinal(w)) || input.contains('日') {
            buckets |= BucketMask::ORDINALISH;
        }

        TriggerInfo { buckets }
    }
}

/// "1st", "22nd", "1er".
fn is_numeric_ordinal(word: &str) -> bool {
    let digits = word.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && matches!(&word[digits..], "st" | "nd" | "rd" | "th" | "er")
}
