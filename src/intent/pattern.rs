//! Template compilation.
//!
//! A template such as `"Remind [users] to [action] at [time]."` becomes one
//! anchored, case-insensitive regex. Each placeholder expands to the locale's
//! fragment for it and records which capture group it landed in.
//!
//! ```text
//! "Remind [users] to [action]"
//!   ├─ "Remind "  -> Remind\b
//!   ├─ [users]    -> users fragment, group 1
//!   ├─ " to "     -> \bto\b
//!   └─ [action]   -> action fragment, group 2
//! ```

use crate::error::ParseError;
use crate::locale::{Locale, LocaleData};
use crate::normalize::normalize;
use regex::{Captures, Regex, RegexBuilder};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Placeholder {
    Users,
    Action,
    Time,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "users" => Some(Placeholder::Users),
            "action" => Some(Placeholder::Action),
            "time" => Some(Placeholder::Time),
            _ => None,
        }
    }

    fn fragment(self, data: &LocaleData) -> &'static str {
        match self {
            Placeholder::Users => data.users,
            Placeholder::Action => data.action,
            Placeholder::Time => data.time,
        }
    }
}

/// One compiled template.
#[derive(Debug)]
pub(crate) struct SurfacePattern {
    pub template: &'static str,
    pub matcher: Regex,
    /// Placeholder → 0-based order of appearance. Capture group is `+ 1`.
    pub positions: HashMap<Placeholder, usize>,
}

impl SurfacePattern {
    pub(crate) fn compile(template: &'static str, data: &LocaleData) -> Result<Self, ParseError> {
        let invalid = |reason: String| ParseError::InvalidTemplate { template: template.to_string(), reason };

        let phrase = normalize(template, data);
        let mut positions = HashMap::new();
        let mut source = String::from("^");

        for token in split_on_placeholders(&phrase) {
            if let Some(name) = token.strip_prefix('[') {
                let name = name.strip_suffix(']').unwrap_or(name);
                let placeholder =
                    Placeholder::from_name(name).ok_or_else(|| invalid(format!("unknown placeholder [{name}]")))?;
                if positions.contains_key(&placeholder) {
                    return Err(invalid(format!("duplicate placeholder [{name}]")));
                }
                positions.insert(placeholder, positions.len());
                source.push_str(placeholder.fragment(data));
            } else if token == " " {
                source.push_str(r"\b\s*\b");
            } else {
                source.push_str(&literal(token));
            }
        }
        source.push('$');

        let matcher = RegexBuilder::new(&source)
            .case_insensitive(true)
            .unicode(true)
            .build()
            .map_err(|err| invalid(err.to_string()))?;

        tracing::trace!(target: "reminder_intent::intent", template, regex = %matcher.as_str(), "compiled");

        Ok(SurfacePattern { template, matcher, positions })
    }

    /// The text captured for `placeholder`, or `""` if the template lacks it.
    pub(crate) fn capture<'h>(&self, caps: &Captures<'h>, placeholder: Placeholder) -> &'h str {
        self.positions.get(&placeholder).and_then(|pos| caps.get(pos + 1)).map_or("", |m| m.as_str())
    }
}

/// Split at `[` / `]`, keeping the brackets on the placeholder tokens.
///
/// `"Remind [users] to"` → `["Remind ", "[users]", " to"]`.
fn split_on_placeholders(phrase: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, c) in phrase.char_indices() {
        match c {
            '[' if idx > start => {
                tokens.push(&phrase[start..idx]);
                start = idx;
            }
            ']' => {
                let end = idx + c.len_utf8();
                tokens.push(&phrase[start..end]);
                start = end;
            }
            _ => {}
        }
    }
    if start < phrase.len() {
        tokens.push(&phrase[start..]);
    }
    tokens
}

/// Escaped literal with one leading and one trailing space turned into `\b`.
fn literal(token: &str) -> String {
    let (lead, rest) = match token.strip_prefix(' ') {
        Some(rest) => (r"\b", rest),
        None => ("", token),
    };
    let (body, trail) = match rest.strip_suffix(' ') {
        Some(body) => (body, r"\b"),
        None => (rest, ""),
    };
    format!("{lead}{}{trail}", regex::escape(body))
}

/// A locale's templates compiled in declared order.
#[derive(Debug)]
pub(crate) struct LocaleRuleSet {
    pub locale: Locale,
    pub patterns: Vec<SurfacePattern>,
    pub list_separator: Regex,
}

impl LocaleRuleSet {
    pub(crate) fn compile(data: &'static LocaleData) -> Result<Self, ParseError> {
        let patterns =
            data.templates.iter().map(|template| SurfacePattern::compile(template, data)).collect::<Result<_, _>>()?;
        let list_separator = Regex::new(data.list_separator).map_err(|err| ParseError::InvalidTemplate {
            template: data.list_separator.to_string(),
            reason: err.to_string(),
        })?;
        Ok(LocaleRuleSet { locale: data.locale, patterns, list_separator })
    }
}
