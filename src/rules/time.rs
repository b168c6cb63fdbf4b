//! Time rules, one set per locale.
//!
//! Each set is the locale's leaf rules followed by the shared day/clock
//! compositions. Sets are built once and shared by every extractor.

#[path = "time/helpers/mod.rs"]
pub mod helpers;
#[path = "time/normalize.rs"]
pub mod normalize;
#[path = "time/predicates.rs"]
pub mod predicates;
#[path = "time/rules_compose.rs"]
mod rules_compose;
#[path = "time/rules_en.rs"]
mod rules_en;
#[path = "time/rules_fr.rs"]
mod rules_fr;
#[path = "time/rules_ja.rs"]
mod rules_ja;
#[cfg(test)]
#[path = "time/tests.rs"]
mod tests;

use crate::{Locale, Rule};
use once_cell::sync::Lazy;

static EN_RULES: Lazy<Vec<Rule>> = Lazy::new(|| rules_en::get().into_iter().chain(rules_compose::get_en()).collect());
static FR_RULES: Lazy<Vec<Rule>> = Lazy::new(|| rules_fr::get().into_iter().chain(rules_compose::get_fr()).collect());
static JA_RULES: Lazy<Vec<Rule>> = Lazy::new(|| rules_ja::get().into_iter().chain(rules_compose::get_ja()).collect());

pub fn rules(locale: Locale) -> &'static [Rule] {
    match locale {
        Locale::En => &EN_RULES,
        Locale::Fr => &FR_RULES,
        Locale::Ja => &JA_RULES,
    }
}
