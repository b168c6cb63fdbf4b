//! Spoken confirmation for a parsed reminder.
//!
//! Each locale supplies a sentence template plus how to rewrite recipients
//! ("me" → "you"), join them, and phrase the due time. A locale may leave any
//! of these out; the missing parts fall back to English.

use chrono::NaiveDateTime;
use std::fmt;

use crate::Locale;

pub(crate) mod list;
pub(crate) mod phrasing;

use list::ListPattern;
use phrasing::Phrasing;

/// Per-locale confirmation data. `None` falls back to English.
pub(crate) struct ConfirmationData {
    pub template: Option<&'static str>,
    pub rewrite: Option<fn(&str) -> String>,
    pub list: Option<ListPattern>,
    pub phrasing: Option<&'static Phrasing>,
}

static EN: ConfirmationData = ConfirmationData {
    template: Some("OK, I'll remind [users] [action] [time]."),
    rewrite: Some(rewrite_en),
    list: Some(list::EN),
    phrasing: Some(&phrasing::EN),
};

static FR: ConfirmationData = ConfirmationData {
    template: Some("OK, je rappellerai [users] [action] [time]."),
    rewrite: Some(identity),
    list: Some(list::FR),
    phrasing: Some(&phrasing::FR),
};

static JA: ConfirmationData = ConfirmationData {
    template: Some("承知しました。[time][users]に[action]をリマインドします。"),
    rewrite: Some(identity),
    list: Some(list::JA),
    phrasing: Some(&phrasing::JA),
};

fn localized(locale: Locale) -> Option<&'static ConfirmationData> {
    match locale {
        Locale::En => Some(&EN),
        Locale::Fr => Some(&FR),
        Locale::Ja => Some(&JA),
    }
}

/// Fully resolved confirmation builder for one locale.
pub(crate) struct Confirmation {
    template: &'static str,
    rewrite: fn(&str) -> String,
    list: ListPattern,
    phrasing: &'static Phrasing,
}

impl fmt::Debug for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confirmation").field("template", &self.template).field("list", &self.list).finish_non_exhaustive()
    }
}

impl Confirmation {
    pub(crate) fn for_locale(locale: Locale) -> Self {
        Self::resolve(localized(locale))
    }

    fn resolve(data: Option<&ConfirmationData>) -> Self {
        let data = data.unwrap_or(&EN);
        Confirmation {
            template: data.template.unwrap_or("OK, I'll remind [users] [action] [time]."),
            rewrite: data.rewrite.unwrap_or(rewrite_en),
            list: data.list.unwrap_or(list::EN),
            phrasing: data.phrasing.unwrap_or(&phrasing::EN),
        }
    }

    /// The confirmation sentence. `matched_template` is the reminder template
    /// the phrase matched; it picks the connector before the action.
    pub(crate) fn message(
        &self,
        recipients: &[String],
        action: &str,
        due: NaiveDateTime,
        now: NaiveDateTime,
        matched_template: &str,
    ) -> String {
        let rewritten: Vec<String> = recipients.iter().map(|name| (self.rewrite)(name)).collect();
        let users = self.list.join(&rewritten);
        let action = format!("{}{}", self.phrasing.connector(matched_template), (self.rewrite)(action));
        let time = self.phrasing.time(due, now);

        regex!(r"\[(users|action|time)\]")
            .replace_all(self.template, |caps: &regex::Captures<'_>| match &caps[1] {
                "users" => users.clone(),
                "action" => action.clone(),
                _ => time.clone(),
            })
            .into_owned()
    }
}

/// First/second person swap for English recipients.
fn rewrite_en(name: &str) -> String {
    let name = regex!(r"(?i)\bme\b").replace_all(name, "you");
    let name = regex!(r"(?i)\bI\b").replace_all(&name, "you");
    let name = regex!(r"(?i)\bmy\b").replace_all(&name, "your");
    regex!(r"(?i)\bmine\b").replace_all(&name, "yours").into_owned()
}

fn identity(name: &str) -> String {
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pronouns_are_rewritten_as_whole_words() {
        assert_eq!(rewrite_en("me"), "you");
        assert_eq!(rewrite_en("Me"), "you");
        assert_eq!(rewrite_en("my team"), "your team");
        assert_eq!(rewrite_en("meme"), "meme");
        assert_eq!(rewrite_en("Ian"), "Ian");
        assert_eq!(rewrite_en("Jamie"), "Jamie");
    }

    #[test]
    fn missing_locale_falls_back_to_english() {
        let fallback = Confirmation::resolve(None);
        assert_eq!(fallback.template, EN.template.unwrap());
        assert_eq!(fallback.list, list::EN);
    }

    #[test]
    fn partial_entry_fills_gaps_from_english() {
        let partial = ConfirmationData { template: Some("[users]|[action]|[time]"), rewrite: None, list: None, phrasing: None };
        let confirmation = Confirmation::resolve(Some(&partial));
        let now = at(2016, 5, 10, 9, 0);
        let message = confirmation.message(&names(&["me", "Bob"]), "jog", at(2016, 5, 10, 17, 0), now, "");
        assert_eq!(message, "you and Bob|to jog|at 5 PM today");
    }

    #[test]
    fn english_messages() {
        let confirmation = Confirmation::for_locale(Locale::En);
        let now = at(2016, 5, 10, 9, 0);
        assert_eq!(
            confirmation.message(&names(&["me"]), "go to the office", at(2016, 5, 10, 17, 0), now, "Remind [users] to [action] by [time]."),
            "OK, I'll remind you to go to the office at 5 PM today."
        );
        assert_eq!(
            confirmation.message(&names(&["John"]), "take out trash", at(2016, 5, 11, 12, 0), now, "Remind [users] by [time] to [action]."),
            "OK, I'll remind John to take out trash at 12 PM tomorrow."
        );
        assert_eq!(
            confirmation.message(&names(&["Alice", "Bob", "Carol"]), "hot", at(2016, 7, 4, 12, 0), now, "Remind [users] that it is [action] on [time]."),
            "OK, I'll remind Alice, Bob, and Carol that it is hot on July the 4th."
        );
    }

    #[test]
    fn placeholder_text_in_values_is_not_substituted_again() {
        let confirmation = Confirmation::for_locale(Locale::En);
        let now = at(2016, 5, 10, 9, 0);
        let message = confirmation.message(&names(&["[time]"]), "read [users]", at(2016, 5, 10, 17, 0), now, "");
        assert_eq!(message, "OK, I'll remind [time] to read [users] at 5 PM today.");
    }

    #[test]
    fn action_pronouns_are_rewritten_too() {
        let confirmation = Confirmation::for_locale(Locale::En);
        let now = at(2016, 5, 10, 9, 0);
        let message = confirmation.message(&names(&["me"]), "I have to call my mom", at(2016, 5, 10, 17, 0), now, "Remind [users] that [action] at [time].");
        assert_eq!(message, "OK, I'll remind you that you have to call your mom at 5 PM today.");
    }

    #[test]
    fn french_and_japanese_messages() {
        let now = at(2016, 5, 10, 9, 0);
        let fr = Confirmation::for_locale(Locale::Fr);
        assert_eq!(
            fr.message(&names(&["moi"]), "acheter du pain", at(2016, 5, 11, 19, 0), now, "Rappelle-[users] d'[action] [time]."),
            "OK, je rappellerai moi d'acheter du pain demain à 19 h."
        );
        let ja = Confirmation::for_locale(Locale::Ja);
        assert_eq!(
            ja.message(&names(&["ジョン"]), "ゴミ出し", at(2016, 5, 11, 17, 0), now, "[time][action]を[users]に思い出させて。"),
            "承知しました。明日の午後5時にジョンにゴミ出しをリマインドします。"
        );
    }
}
