use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::time_expr::Grain;

/// `dt` moved by `amount` grains, or `None` past the calendar's range.
pub fn shift_datetime_by_grain(dt: NaiveDateTime, amount: i64, grain: Grain) -> Option<NaiveDateTime> {
    let delta = match grain {
        Grain::Minute => TimeDelta::try_minutes(amount)?,
        Grain::Hour => TimeDelta::try_hours(amount)?,
        Grain::Day => TimeDelta::try_days(amount)?,
        Grain::Week => TimeDelta::try_weeks(amount)?,
        Grain::Month => return add_months(dt, amount),
    };
    dt.checked_add_signed(delta)
}

fn add_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let zero_based = (dt.date().month0() as i64).checked_add(months)?;
    let year = dt.date().year().checked_add(i32::try_from(zero_based.div_euclid(12)).ok()?)?;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.with_day(dt.date().day().min(days_in_month(year, month)))?;
    Some(NaiveDateTime::new(date, dt.time()))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map_or(28, |last| last.day())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn shift_datetime_by_month_clamps_day() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let shifted = shift_datetime_by_grain(dt, 1, Grain::Month).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(shifted, expected);
    }

    #[test]
    fn shift_datetime_by_month_crosses_year() {
        let dt = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let shifted = shift_datetime_by_grain(dt, 3, Grain::Month).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(shifted, expected);
    }

    #[test]
    fn shift_datetime_by_minutes() {
        let dt = NaiveDate::from_ymd_opt(2016, 5, 10).unwrap().and_hms_opt(23, 50, 0).unwrap();
        let expected = NaiveDate::from_ymd_opt(2016, 5, 11).unwrap().and_hms_opt(0, 20, 0).unwrap();
        assert_eq!(shift_datetime_by_grain(dt, 30, Grain::Minute), Some(expected));
    }

    #[test]
    fn shift_out_of_calendar_range_is_none() {
        let dt = NaiveDate::from_ymd_opt(2016, 5, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(shift_datetime_by_grain(dt, 99_999_999_999, Grain::Day), None);
        assert_eq!(shift_datetime_by_grain(dt, 99_999_999_999, Grain::Week), None);
        assert_eq!(shift_datetime_by_grain(dt, i64::MAX, Grain::Minute), None);
        assert_eq!(shift_datetime_by_grain(dt, i64::MIN, Grain::Hour), None);
    }

    #[test]
    fn month_shift_past_year_range_is_none() {
        let dt = NaiveDate::from_ymd_opt(2016, 5, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(shift_datetime_by_grain(dt, 99_999_999_999_999, Grain::Month), None);
        assert_eq!(shift_datetime_by_grain(dt, 3_200_000, Grain::Month), None);
        assert_eq!(shift_datetime_by_grain(dt, i64::MAX, Grain::Month), None);
    }
}
