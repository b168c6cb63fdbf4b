//! Rule sets for the temporal extraction engine.

#[path = "rules/time.rs"]
pub(crate) mod time;
