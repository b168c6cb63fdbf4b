//! Surface matching: which template a phrase fits, and what it says about
//! recipients and action.

pub(crate) mod matcher;
pub(crate) mod pattern;
pub(crate) mod users;

pub(crate) use matcher::match_intent;
pub(crate) use pattern::LocaleRuleSet;
pub(crate) use users::parse_users;
