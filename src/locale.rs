//! Registered locales and their static surface tables.
//!
//! Each locale carries, in priority order, the reminder templates it
//! understands plus the regex fragments its placeholders expand to. Templates
//! are compiled once per parser (see `intent::pattern`).

use crate::error::ParseError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ja => "ja",
        }
    }

    pub(crate) fn data(self) -> &'static LocaleData {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
            Locale::Ja => &JA,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| ParseError::UnregisteredLocale(code.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Static surface data for one locale.
pub(crate) struct LocaleData {
    pub locale: Locale,
    /// Reminder templates; earlier entries win.
    pub templates: &'static [&'static str],
    pub users: &'static str,
    pub action: &'static str,
    pub time: &'static str,
    /// Characters stripped from the end of a phrase.
    pub punctuation: &'static str,
    /// Separator between recipients in the `[users]` capture.
    pub list_separator: &'static str,
    pub lexical: fn(&str) -> Cow<'_, str>,
}

impl fmt::Debug for LocaleData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleData")
            .field("locale", &self.locale)
            .field("templates", &self.templates.len())
            .finish_non_exhaustive()
    }
}

static EN: LocaleData = LocaleData {
    locale: Locale::En,
    templates: &[
        "Remind [users] to [action] at [time].",
        "Remind [users] to [action] on [time].",
        "Remind [users] to [action] by [time].",
        "Remind [users] at [time] to [action].",
        "Remind [users] on [time] to [action].",
        "Remind [users] by [time] to [action].",
        "Remind [users] to [action].",
        "Remind [users] that it is [action] on [time].",
        "Remind [users] that it is [action] at [time].",
        "Remind [users] that it is [action] by [time].",
        "Remind [users] that it is [action].",
        "Remind [users] that [action] at [time].",
        "Remind [users] that [action] on [time].",
        "Remind [users] that [action] by [time].",
        "Remind [users] that [action].",
        "Remind [users] that [time] is [action].",
        "Remind [users] about [action] on [time].",
        "Remind [users] about [action] at [time].",
        "Remind [users] about [action] by [time].",
        "Remind [users] about [action].",
    ],
    users: r"(\s+\S+\s+|\s+(?:\S+,\s+)*\S+,?\s+and\s+\S+\s+)",
    action: r"(.+)",
    time: r"(.*?)",
    punctuation: "-‐–—,;:!?.…'‘’\"“”()§@*/&#†‡′″",
    list_separator: r"(?i),\s*and\b|,|\band\b",
    lexical: en_lexical,
};

// Hyphenated forms first: "Rappelle-moi" must not reach the spaced forms,
// whose placeholder would otherwise swallow "-moi".
static FR: LocaleData = LocaleData {
    locale: Locale::Fr,
    templates: &[
        "Rappelle-[users] de [action] [time].",
        "Rappelle-[users] d'[action] [time].",
        "Rappelle [users] de [action] [time].",
        "Rappelle [users] d'[action] [time].",
    ],
    users: r"(\s*\S+\s+|\s*(?:\S+,\s+)*\S+\s+et\s+\S+\s+)",
    action: r"(.+)",
    time: r"(.*?)",
    punctuation: "-‐–—,;:!?.…’\"“”«»()§@*/&#†‡",
    list_separator: r"(?i),|\bet\b",
    lexical: identity,
};

static JA: LocaleData = LocaleData {
    locale: Locale::Ja,
    templates: &[
        "[time][action]を[users]に思い出させて。",
        "[time][users]に[action]を思い出させて。",
        "[time][users]は[action]と言うリマインダーを作成して。",
    ],
    users: r"(\S+?)",
    action: r"(.+)",
    time: r"(.*?)",
    punctuation: "-‾_＿－‐—―〜・･,，、､;；:：!！?？.．‥…。｡＇‘’\"＂“”(（)）［］{｛}｝〈〉《》「｢」｣『』【】〔〕‖§¶@＠*＊/／\\＼&＆#＃%％‰†‡′″〃※",
    list_separator: "、",
    lexical: ja_lexical,
};

fn identity(phrase: &str) -> Cow<'_, str> {
    Cow::Borrowed(phrase)
}

/// "5 p.m." → "5 PM", "9 a.m." → "9 AM".
fn en_lexical(phrase: &str) -> Cow<'_, str> {
    let pm = regex!(r"(?i)([0-9]) p\.m\.");
    let am = regex!(r"(?i)([0-9]) a\.m\.");
    if !pm.is_match(phrase) && !am.is_match(phrase) {
        return Cow::Borrowed(phrase);
    }
    let fixed = pm.replace_all(phrase, "$1 PM");
    Cow::Owned(am.replace_all(&fixed, "$1 AM").into_owned())
}

/// Fullwidth digits ("５時") → ASCII digits.
fn ja_lexical(phrase: &str) -> Cow<'_, str> {
    if !phrase.chars().any(|c| ('０'..='９').contains(&c)) {
        return Cow::Borrowed(phrase);
    }
    Cow::Owned(
        phrase
            .chars()
            .map(|c| match c {
                '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
                _ => c,
            })
            .collect(),
    )
}
