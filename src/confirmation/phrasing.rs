//! How each locale says "when" in a confirmation.

use chrono::{Datelike, Duration, Month, NaiveDate, NaiveDateTime, Timelike};

use crate::rules::time::helpers::boundaries::interval_of;
use crate::time_expr::Grain;

/// Where a due time falls relative to "now". Intervals are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeBucket {
    Today,
    Tomorrow,
    ThisMonth,
    Other,
}

impl TimeBucket {
    pub(crate) fn classify(due: NaiveDateTime, now: NaiveDateTime) -> Self {
        let within = |interval: Option<(NaiveDateTime, NaiveDateTime)>| {
            interval.is_some_and(|(start, end)| start <= due && due < end)
        };
        if within(interval_of(Grain::Day, now, 0)) {
            TimeBucket::Today
        } else if within(interval_of(Grain::Day, now, 1)) {
            TimeBucket::Tomorrow
        } else if within(interval_of(Grain::Month, now, 0)) {
            TimeBucket::ThisMonth
        } else {
            TimeBucket::Other
        }
    }
}

pub(crate) struct Phrasing {
    /// `(marker, connector)`: the first marker found in the matched template
    /// picks the connector put before the action.
    pub connectors: &'static [(&'static str, &'static str)],
    pub default_connector: &'static str,
    pub clock: fn(NaiveDateTime) -> String,
    pub today: fn(&str) -> String,
    pub tomorrow: fn(&str) -> String,
    pub this_month: fn(NaiveDate) -> String,
    pub other: fn(NaiveDate) -> String,
}

impl Phrasing {
    pub(crate) fn connector(&self, template: &str) -> &'static str {
        let template = template.to_lowercase();
        self.connectors
            .iter()
            .find(|(marker, _)| contains_marker(&template, marker))
            .map_or(self.default_connector, |(_, connector)| connector)
    }

    pub(crate) fn time(&self, due: NaiveDateTime, now: NaiveDateTime) -> String {
        match TimeBucket::classify(due, now) {
            TimeBucket::Today => (self.today)(&(self.clock)(due)),
            TimeBucket::Tomorrow => (self.tomorrow)(&(self.clock)(due)),
            TimeBucket::ThisMonth => (self.this_month)(due.date()),
            TimeBucket::Other => (self.other)(due.date()),
        }
    }
}

/// `marker` occurs in `template` at the start of a word.
fn contains_marker(template: &str, marker: &str) -> bool {
    template
        .match_indices(marker)
        .any(|(idx, _)| template[..idx].chars().next_back().is_none_or(|c| !c.is_alphanumeric()))
}

pub(crate) static EN: Phrasing = Phrasing {
    connectors: &[("that [action]", "that "), ("it is [action]", "that it is ")],
    default_connector: "to ",
    clock: en_clock,
    today: |clock| format!("at {clock} today"),
    tomorrow: |clock| format!("at {clock} tomorrow"),
    this_month: |date| format!("on the {}", en_ordinal(date.day())),
    other: |date| format!("on {} the {}", month_name(date.month()), en_ordinal(date.day())),
};

pub(crate) static FR: Phrasing = Phrasing {
    connectors: &[("d'[action]", "d'")],
    default_connector: "de ",
    clock: fr_clock,
    today: |clock| format!("aujourd'hui à {clock}"),
    tomorrow: |clock| format!("demain à {clock}"),
    this_month: |date| format!("le {}", fr_day(date.day())),
    other: |date| format!("le {} {}", fr_day(date.day()), FR_MONTHS[date.month0() as usize]),
};

pub(crate) static JA: Phrasing = Phrasing {
    connectors: &[],
    default_connector: "",
    clock: ja_clock,
    today: |clock| format!("今日の{clock}に"),
    tomorrow: |clock| format!("明日の{clock}に"),
    this_month: |date| format!("{}日に", date.day()),
    other: |date| format!("{}月{}日に", date.month(), date.day()),
};

const FR_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

fn meridiem_en(at: NaiveDateTime) -> (u32, &'static str) {
    let (pm, hour) = at.hour12();
    (hour, if pm { "PM" } else { "AM" })
}

/// "5 PM", "quarter past 5 PM", "half past 5 PM", "quarter to 6 PM", "5 24 PM".
fn en_clock(at: NaiveDateTime) -> String {
    let (hour, meridiem) = meridiem_en(at);
    match at.minute() {
        0 => format!("{hour} {meridiem}"),
        15 => format!("quarter past {hour} {meridiem}"),
        30 => format!("half past {hour} {meridiem}"),
        45 => {
            let (hour, meridiem) = meridiem_en(at + Duration::minutes(15));
            format!("quarter to {hour} {meridiem}")
        }
        minute => format!("{hour} {minute} {meridiem}"),
    }
}

fn en_ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()).map_or("", |m| m.name())
}

/// "17 h", "17 h et quart", "17 h et demie", "18 h moins le quart", "17 h 24".
fn fr_clock(at: NaiveDateTime) -> String {
    let hour = at.hour();
    match at.minute() {
        0 => format!("{hour} h"),
        15 => format!("{hour} h et quart"),
        30 => format!("{hour} h et demie"),
        45 => format!("{} h moins le quart", (at + Duration::minutes(15)).hour()),
        minute => format!("{hour} h {minute:02}"),
    }
}

fn fr_day(day: u32) -> String {
    if day == 1 { "1er".to_string() } else { day.to_string() }
}

/// "午後5時", "午後5時半", "午後5時15分".
fn ja_clock(at: NaiveDateTime) -> String {
    let (pm, hour) = at.hour12();
    let meridiem = if pm { "午後" } else { "午前" };
    match at.minute() {
        0 => format!("{meridiem}{hour}時"),
        30 => format!("{meridiem}{hour}時半"),
        minute => format!("{meridiem}{hour}時{minute}分"),
    }
}
