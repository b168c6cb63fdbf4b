use crate::{Context, Locale, RuleExtractor, TemporalExtractor};
use chrono::{NaiveDate, NaiveDateTime};

// Tuesday 2016-05-10 09:00.
fn context() -> Context {
    Context { reference_time: at(2016, 5, 10, 9, 0) }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

/// The single mention in `phrase`: its text and resolved value.
fn single(locale: Locale, phrase: &str) -> (String, NaiveDateTime) {
    let mentions = RuleExtractor::new(locale).extract(phrase, &context());
    assert_eq!(mentions.len(), 1, "{phrase:?} -> {mentions:?}");
    let mention = mentions[0];
    (phrase[mention.index..mention.end()].to_string(), mention.timestamp)
}

fn check(locale: Locale, phrase: &str, text: &str, expected: NaiveDateTime) {
    assert_eq!(single(locale, phrase), (text.to_string(), expected), "{phrase}");
}

#[test]
fn english_days() {
    check(Locale::En, "call mom today", "today", at(2016, 5, 10, 12, 0));
    check(Locale::En, "call mom tomorrow", "tomorrow", at(2016, 5, 11, 12, 0));
    check(Locale::En, "call mom the day after tomorrow", "the day after tomorrow", at(2016, 5, 12, 12, 0));
    check(Locale::En, "pay rent on Friday", "Friday", at(2016, 5, 13, 12, 0));
    check(Locale::En, "pay rent next Friday", "next Friday", at(2016, 5, 13, 12, 0));
    check(Locale::En, "pay rent next week", "next week", at(2016, 5, 17, 12, 0));
    check(Locale::En, "picnic on July 4th", "July 4th", at(2016, 7, 4, 12, 0));
    check(Locale::En, "picnic on the 4th of July", "the 4th of July", at(2016, 7, 4, 12, 0));
    check(Locale::En, "pay rent on the 5th", "the 5th", at(2016, 6, 5, 12, 0));
}

#[test]
fn english_clocks() {
    check(Locale::En, "call mom at 5pm", "5pm", at(2016, 5, 10, 17, 0));
    check(Locale::En, "call mom at 5 PM", "5 PM", at(2016, 5, 10, 17, 0));
    check(Locale::En, "call mom at 7:15pm", "7:15pm", at(2016, 5, 10, 19, 15));
    check(Locale::En, "call mom at 17:30", "17:30", at(2016, 5, 10, 17, 30));
    check(Locale::En, "call mom at noon", "noon", at(2016, 5, 10, 12, 0));
    check(Locale::En, "call mom at midnight", "midnight", at(2016, 5, 11, 0, 0));
    check(Locale::En, "call mom at 5", "at 5", at(2016, 5, 10, 17, 0));
    check(Locale::En, "call mom at 10:30", "at 10:30", at(2016, 5, 10, 10, 30));
    check(Locale::En, "call mom at 5 o'clock", "at 5 o'clock", at(2016, 5, 10, 17, 0));
    check(Locale::En, "call mom tonight", "tonight", at(2016, 5, 10, 20, 0));
    check(Locale::En, "call mom this evening", "this evening", at(2016, 5, 10, 18, 0));
}

#[test]
fn english_clock_rolls_over_when_past() {
    check(Locale::En, "call mom at 8am", "8am", at(2016, 5, 11, 8, 0));
}

#[test]
fn english_relative_durations() {
    check(Locale::En, "call mom in 10 minutes", "in 10 minutes", at(2016, 5, 10, 9, 10));
    check(Locale::En, "call mom in an hour", "in an hour", at(2016, 5, 10, 10, 0));
    check(Locale::En, "call mom in half an hour", "in half an hour", at(2016, 5, 10, 9, 30));
    check(Locale::En, "call mom in two weeks", "in two weeks", at(2016, 5, 24, 9, 0));
}

#[test]
fn english_compositions() {
    check(Locale::En, "call mom tomorrow at 5pm", "tomorrow at 5pm", at(2016, 5, 11, 17, 0));
    check(Locale::En, "call mom tomorrow at 5", "tomorrow at 5", at(2016, 5, 11, 17, 0));
    check(Locale::En, "call mom tomorrow morning", "tomorrow morning", at(2016, 5, 11, 9, 0));
    check(Locale::En, "call mom 5pm tomorrow", "5pm tomorrow", at(2016, 5, 11, 17, 0));
    check(Locale::En, "call mom at 7:15pm on 2nd February", "7:15pm on 2nd February", at(2017, 2, 2, 19, 15));
    check(Locale::En, "every Tuesday night is trash day", "Tuesday night", at(2016, 5, 17, 20, 0));
}

#[test]
fn english_non_times_are_ignored() {
    let mentions = RuleExtractor::new(Locale::En).extract("Remind me to buy 2 apples", &context());
    assert!(mentions.is_empty(), "{mentions:?}");
}

#[test]
fn impossible_dates_do_not_resolve() {
    let mentions = RuleExtractor::new(Locale::En).extract("party on February 30th", &context());
    assert!(mentions.is_empty(), "{mentions:?}");
}

#[test]
fn two_separate_mentions() {
    let mentions = RuleExtractor::new(Locale::En).extract("Remind me tomorrow to call mom at 5pm", &context());
    assert_eq!(mentions.len(), 2);
    assert!(mentions[0].end() <= mentions[1].index);
}

#[test]
fn french() {
    check(Locale::Fr, "sortir la poubelle demain", "demain", at(2016, 5, 11, 12, 0));
    check(Locale::Fr, "sortir la poubelle après-demain", "après-demain", at(2016, 5, 12, 12, 0));
    check(Locale::Fr, "sortir la poubelle ce soir", "ce soir", at(2016, 5, 10, 18, 0));
    check(Locale::Fr, "sortir la poubelle à 19h", "à 19h", at(2016, 5, 10, 19, 0));
    check(Locale::Fr, "sortir la poubelle à 7h30", "à 7h30", at(2016, 5, 11, 7, 30));
    check(Locale::Fr, "sortir la poubelle demain à 19h", "demain à 19h", at(2016, 5, 11, 19, 0));
    check(Locale::Fr, "acheter du pain vendredi", "vendredi", at(2016, 5, 13, 12, 0));
    check(Locale::Fr, "pique-nique le 4 juillet", "le 4 juillet", at(2016, 7, 4, 12, 0));
    check(Locale::Fr, "appeler maman dans 10 minutes", "dans 10 minutes", at(2016, 5, 10, 9, 10));
    check(Locale::Fr, "déjeuner à midi", "à midi", at(2016, 5, 10, 12, 0));
}

#[test]
fn japanese() {
    check(Locale::Ja, "明日ジョンに", "明日", at(2016, 5, 11, 12, 0));
    check(Locale::Ja, "明後日", "明後日", at(2016, 5, 12, 12, 0));
    check(Locale::Ja, "今夜", "今夜", at(2016, 5, 10, 20, 0));
    check(Locale::Ja, "午後5時にゴミ出し", "午後5時に", at(2016, 5, 10, 17, 0));
    check(Locale::Ja, "午前9時半に", "午前9時半に", at(2016, 5, 10, 9, 30));
    check(Locale::Ja, "明日の午後5時にゴミ出し", "明日の午後5時に", at(2016, 5, 11, 17, 0));
    check(Locale::Ja, "明日午後5時にゴミ出し", "明日午後5時に", at(2016, 5, 11, 17, 0));
    check(Locale::Ja, "金曜日にゴミ出し", "金曜日に", at(2016, 5, 13, 12, 0));
    check(Locale::Ja, "7月4日にピクニック", "7月4日に", at(2016, 7, 4, 12, 0));
    check(Locale::Ja, "10分後に電話", "10分後に", at(2016, 5, 10, 9, 10));
}
