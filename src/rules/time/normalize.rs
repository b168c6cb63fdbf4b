//! Anchoring `TimeExpr` values on a reference instant.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::rules::time::helpers::shift::shift_datetime_by_grain;
use crate::time_expr::{Clock, DaySpec, TimeExpr};

/// Resolve `expr` against `reference`, or `None` when it names a day that
/// does not exist ("February 30th") or lands outside the calendar.
pub fn resolve_expr(expr: &TimeExpr, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    match expr {
        TimeExpr::Day(day) => Some(resolve_day(*day, reference.date())?.and_time(NaiveTime::from_hms_opt(12, 0, 0)?)),
        TimeExpr::Clock(clock) => next_clock(*clock, reference),
        TimeExpr::DayAt { day, clock } => Some(resolve_day(*day, reference.date())?.and_time(clock_on_day(*clock)?)),
        TimeExpr::In { amount, grain } => shift_datetime_by_grain(reference, *amount, *grain),
    }
}

fn resolve_day(day: DaySpec, today: NaiveDate) -> Option<NaiveDate> {
    match day {
        DaySpec::Offset(days) => today.checked_add_signed(Duration::days(days)),
        DaySpec::Weekday(weekday) => {
            let ahead = (weekday.num_days_from_monday() as i64 - today.weekday().num_days_from_monday() as i64)
                .rem_euclid(7);
            let ahead = if ahead == 0 { 7 } else { ahead };
            today.checked_add_signed(Duration::days(ahead))
        }
        // Four years covers February 29th.
        DaySpec::MonthDay { month, day } => (0..=4)
            .filter_map(|years| NaiveDate::from_ymd_opt(today.year() + years, month, day))
            .find(|date| *date >= today),
        DaySpec::DayOfMonth(day) => (0..12)
            .filter_map(|months| {
                let zero_based = today.month0() as i32 + months;
                NaiveDate::from_ymd_opt(today.year() + zero_based / 12, (zero_based % 12) as u32 + 1, day)
            })
            .find(|date| *date >= today),
    }
}

/// Next occurrence strictly after `reference`. An ambiguous clock tries its
/// AM reading before its PM reading on each day.
fn next_clock(clock: Clock, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let candidates: Vec<NaiveTime> = match clock {
        Clock::Exact(time) => vec![time],
        Clock::Ambiguous { hour, minute } => vec![
            NaiveTime::from_hms_opt(hour % 12, minute, 0)?,
            NaiveTime::from_hms_opt(hour % 12 + 12, minute, 0)?,
        ],
    };
    (0..=1)
        .filter_map(|days| reference.date().checked_add_signed(Duration::days(days)))
        .flat_map(|date| candidates.iter().map(move |time| date.and_time(*time)))
        .find(|candidate| *candidate > reference)
}

/// Time of day once the day is explicit: an ambiguous 1..=7 reads as PM.
fn clock_on_day(clock: Clock) -> Option<NaiveTime> {
    match clock {
        Clock::Exact(time) => Some(time),
        Clock::Ambiguous { hour, minute } => {
            let hour = if (1..=7).contains(&hour) { hour + 12 } else { hour };
            NaiveTime::from_hms_opt(hour, minute, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_expr::{Grain, PartOfDay};
    use chrono::Weekday;

    // Tuesday.
    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 5, 10).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn exact(h: u32, m: u32) -> Clock {
        Clock::Exact(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn day_without_clock_is_noon() {
        assert_eq!(resolve_expr(&TimeExpr::Day(DaySpec::Offset(1)), reference()), Some(at(2016, 5, 11, 12, 0)));
    }

    #[test]
    fn bare_clock_rolls_over_to_tomorrow() {
        assert_eq!(resolve_expr(&TimeExpr::Clock(exact(17, 0)), reference()), Some(at(2016, 5, 10, 17, 0)));
        assert_eq!(resolve_expr(&TimeExpr::Clock(exact(8, 0)), reference()), Some(at(2016, 5, 11, 8, 0)));
        assert_eq!(resolve_expr(&TimeExpr::Clock(exact(9, 0)), reference()), Some(at(2016, 5, 11, 9, 0)));
    }

    #[test]
    fn ambiguous_clock_takes_first_future_reading() {
        let at_5 = TimeExpr::Clock(Clock::Ambiguous { hour: 5, minute: 0 });
        assert_eq!(resolve_expr(&at_5, reference()), Some(at(2016, 5, 10, 17, 0)));

        let at_10 = TimeExpr::Clock(Clock::Ambiguous { hour: 10, minute: 30 });
        assert_eq!(resolve_expr(&at_10, reference()), Some(at(2016, 5, 10, 10, 30)));

        let at_12 = TimeExpr::Clock(Clock::Ambiguous { hour: 12, minute: 0 });
        assert_eq!(resolve_expr(&at_12, reference()), Some(at(2016, 5, 10, 12, 0)));
    }

    #[test]
    fn ambiguous_clock_on_explicit_day() {
        let tomorrow_at = |hour| TimeExpr::DayAt { day: DaySpec::Offset(1), clock: Clock::Ambiguous { hour, minute: 0 } };
        assert_eq!(resolve_expr(&tomorrow_at(5), reference()), Some(at(2016, 5, 11, 17, 0)));
        assert_eq!(resolve_expr(&tomorrow_at(9), reference()), Some(at(2016, 5, 11, 9, 0)));
    }

    #[test]
    fn weekdays_are_strictly_after_today() {
        let friday = TimeExpr::Day(DaySpec::Weekday(Weekday::Fri));
        assert_eq!(resolve_expr(&friday, reference()), Some(at(2016, 5, 13, 12, 0)));
        let tuesday = TimeExpr::Day(DaySpec::Weekday(Weekday::Tue));
        assert_eq!(resolve_expr(&tuesday, reference()), Some(at(2016, 5, 17, 12, 0)));
    }

    #[test]
    fn month_day_rolls_to_next_year_when_past() {
        let july_4 = TimeExpr::Day(DaySpec::MonthDay { month: 7, day: 4 });
        assert_eq!(resolve_expr(&july_4, reference()), Some(at(2016, 7, 4, 12, 0)));
        let feb_2 = TimeExpr::Day(DaySpec::MonthDay { month: 2, day: 2 });
        assert_eq!(resolve_expr(&feb_2, reference()), Some(at(2017, 2, 2, 12, 0)));
        let feb_30 = TimeExpr::Day(DaySpec::MonthDay { month: 2, day: 30 });
        assert_eq!(resolve_expr(&feb_30, reference()), None);
    }

    #[test]
    fn day_of_month_rolls_to_next_month_when_past() {
        let the_20th = TimeExpr::Day(DaySpec::DayOfMonth(20));
        assert_eq!(resolve_expr(&the_20th, reference()), Some(at(2016, 5, 20, 12, 0)));
        let the_5th = TimeExpr::Day(DaySpec::DayOfMonth(5));
        assert_eq!(resolve_expr(&the_5th, reference()), Some(at(2016, 6, 5, 12, 0)));
        let the_31st = TimeExpr::Day(DaySpec::DayOfMonth(31));
        assert_eq!(resolve_expr(&the_31st, reference()), Some(at(2016, 5, 31, 12, 0)));
    }

    #[test]
    fn relative_offsets_and_parts_of_day() {
        let in_10 = TimeExpr::In { amount: 10, grain: Grain::Minute };
        assert_eq!(resolve_expr(&in_10, reference()), Some(at(2016, 5, 10, 9, 10)));

        let tonight = TimeExpr::DayAt { day: DaySpec::Offset(0), clock: PartOfDay::Night.clock() };
        assert_eq!(resolve_expr(&tonight, reference()), Some(at(2016, 5, 10, 20, 0)));
    }

    #[test]
    fn offsets_beyond_the_calendar_do_not_resolve() {
        let days = TimeExpr::In { amount: 99_999_999_999, grain: Grain::Day };
        assert_eq!(resolve_expr(&days, reference()), None);
        let months = TimeExpr::In { amount: 99_999_999_999_999, grain: Grain::Month };
        assert_eq!(resolve_expr(&months, reference()), None);
    }
}
