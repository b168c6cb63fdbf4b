//! Phrase normalization, shared by incoming phrases and templates.

use crate::locale::LocaleData;

/// Collapse whitespace, apply the locale's lexical fix-ups, trim, then drop
/// trailing punctuation.
pub(crate) fn normalize(phrase: &str, data: &LocaleData) -> String {
    let collapsed = regex!(r"\s+").replace_all(phrase, " ");
    let fixed = (data.lexical)(&collapsed);
    fixed.trim().trim_end_matches(|c: char| data.punctuation.contains(c)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;

    #[test]
    fn collapses_whitespace_and_trailing_punctuation() {
        let en = Locale::En.data();
        assert_eq!(normalize("  Remind   me\tto call\n mom!?  ", en), "Remind me to call mom");
        assert_eq!(normalize("Remind me to call mom at 5 p.m.", en), "Remind me to call mom at 5 PM");
    }

    #[test]
    fn inner_punctuation_survives() {
        let en = Locale::En.data();
        assert_eq!(normalize("Remind me to call Mr. O'Neil.", en), "Remind me to call Mr. O'Neil");
    }

    #[test]
    fn placeholders_survive_template_normalization() {
        assert_eq!(normalize("Remind [users] to [action].", Locale::En.data()), "Remind [users] to [action]");
        assert_eq!(
            normalize("[time][users]に[action]を思い出させて。", Locale::Ja.data()),
            "[time][users]に[action]を思い出させて"
        );
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize("   ", Locale::Fr.data()), "");
        assert_eq!(normalize("?!", Locale::Fr.data()), "");
    }
}
