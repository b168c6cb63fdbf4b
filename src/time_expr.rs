use chrono::{NaiveTime, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grain {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// A calendar day, not yet anchored to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySpec {
    /// Days from the reference date: 0 today, 1 tomorrow.
    Offset(i64),
    /// Next such weekday strictly after the reference date.
    Weekday(Weekday),
    /// Next occurrence of month/day, this year unless already past.
    MonthDay { month: u32, day: u32 },
    /// Next occurrence of a day of month, this month unless already past.
    DayOfMonth(u32),
}

/// A time of day, with or without an explicit meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Unambiguous: "5pm", "17h", "午後5時", "noon", "tonight".
    Exact(NaiveTime),
    /// No meridiem given: "at 5", "5:30", "5 o'clock". `hour` is 1..=12.
    Ambiguous { hour: u32, minute: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl PartOfDay {
    pub fn clock(self) -> Clock {
        let hour = match self {
            PartOfDay::Morning => 9,
            PartOfDay::Afternoon => 15,
            PartOfDay::Evening => 18,
            PartOfDay::Night => 20,
        };
        Clock::Exact(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeExpr {
    Day(DaySpec),
    Clock(Clock),
    DayAt { day: DaySpec, clock: Clock },
    /// Relative to the reference instant: "in 10 minutes".
    In { amount: i64, grain: Grain },
}

impl TimeExpr {
    pub fn day(&self) -> Option<DaySpec> {
        match self {
            TimeExpr::Day(day) => Some(*day),
            _ => None,
        }
    }

    pub fn clock(&self) -> Option<Clock> {
        match self {
            TimeExpr::Clock(clock) => Some(*clock),
            _ => None,
        }
    }
}
