use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::rules::time::helpers::shift::shift_datetime_by_grain;
use crate::time_expr::Grain;

/// Start of the `grain` containing `dt`. Only calendar grains truncate;
/// minute and hour grains keep the time-of-day.
pub fn start_of(grain: Grain, dt: NaiveDateTime) -> Option<NaiveDateTime> {
    match grain {
        Grain::Minute | Grain::Hour => Some(dt),
        Grain::Day => Some(NaiveDateTime::new(dt.date(), NaiveTime::MIN)),
        Grain::Week => {
            let weekday_offset = dt.date().weekday().num_days_from_monday() as i64;
            shift_datetime_by_grain(NaiveDateTime::new(dt.date(), NaiveTime::MIN), -weekday_offset, Grain::Day)
        }
        Grain::Month => Some(NaiveDateTime::new(NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1)?, NaiveTime::MIN)),
    }
}

/// `[start, end)` of the `grain` containing `dt`, shifted by `offset` grains.
/// `None` when either bound falls outside the calendar.
pub fn interval_of(grain: Grain, dt: NaiveDateTime, offset: i64) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = shift_datetime_by_grain(start_of(grain, dt)?, offset, grain)?;
    Some((start, shift_datetime_by_grain(start, 1, grain)?))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn start_of_week_aligns_to_monday() {
        let dt = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap().and_hms_opt(15, 45, 12).unwrap();
        let start = start_of(Grain::Week, dt).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 4, 8).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(start, expected);
    }

    #[test]
    fn start_of_month_is_first_midnight() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap().and_hms_opt(9, 30, 0).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(start_of(Grain::Month, dt), Some(expected));
    }

    #[test]
    fn interval_of_next_day_is_one_day_long() {
        let dt = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let (start, end) = interval_of(Grain::Day, dt, 1).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn interval_at_calendar_end_is_none() {
        assert_eq!(interval_of(Grain::Day, NaiveDateTime::MAX, 0), None);
        assert!(interval_of(Grain::Day, NaiveDateTime::MAX, -1).is_some());
    }
}
