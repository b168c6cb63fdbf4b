use super::pattern::{Placeholder, SurfacePattern};

/// The first template that accepted the phrase, with its raw captures.
#[derive(Debug)]
pub(crate) struct SurfaceMatch<'p> {
    pub pattern: &'p SurfacePattern,
    /// Untrimmed `[users]` capture; see `users::parse_users`.
    pub users: String,
    pub action: String,
}

/// Try `patterns` in declared order; the first match wins.
pub(crate) fn match_intent<'p>(phrase: &str, patterns: &'p [SurfacePattern]) -> Option<SurfaceMatch<'p>> {
    patterns.iter().find_map(|pattern| {
        let Some(caps) = pattern.matcher.captures(phrase) else {
            tracing::trace!(target: "reminder_intent::intent", template = pattern.template, "no match");
            return None;
        };
        Some(SurfaceMatch {
            pattern,
            users: pattern.capture(&caps, Placeholder::Users).to_string(),
            action: pattern.capture(&caps, Placeholder::Action).trim().to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::pattern::LocaleRuleSet;
    use crate::Locale;

    fn en() -> LocaleRuleSet {
        LocaleRuleSet::compile(Locale::En.data()).unwrap()
    }

    #[test]
    fn declared_order_decides() {
        let set = en();
        let m = match_intent("Remind John that it is hot at ", &set.patterns).unwrap();
        assert_eq!(m.pattern.template, "Remind [users] that it is [action] at [time].");
        assert_eq!(m.action, "hot");
    }

    #[test]
    fn reordered_table_changes_the_winner() {
        let data = Locale::En.data();
        let patterns: Vec<SurfacePattern> = ["Remind [users] that [action] at [time].", "Remind [users] that it is [action] at [time]."]
            .into_iter()
            .map(|template| SurfacePattern::compile(template, data).unwrap())
            .collect();
        let m = match_intent("Remind John that it is hot at ", &patterns).unwrap();
        assert_eq!(m.action, "it is hot");
    }

    #[test]
    fn by_connector_after_stripped_time() {
        let set = en();
        let m = match_intent("Remind John by  to take out trash", &set.patterns).unwrap();
        assert_eq!(m.pattern.template, "Remind [users] by [time] to [action].");
        assert_eq!(m.users.trim(), "John");
        assert_eq!(m.action, "take out trash");
    }

    #[test]
    fn list_of_users_is_captured_whole() {
        let set = en();
        let m = match_intent("Remind Alice, Bob, and Carol to water the plants ", &set.patterns).unwrap();
        assert_eq!(m.users.trim(), "Alice, Bob, and Carol");
        assert_eq!(m.action, "water the plants");
    }

    #[test]
    fn unrelated_phrase_has_no_match() {
        assert!(match_intent("Set an alarm for ", &en().patterns).is_none());
    }
}
