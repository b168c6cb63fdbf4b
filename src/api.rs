use crate::confirmation::Confirmation;
use crate::error::ParseError;
use crate::intent::{LocaleRuleSet, match_intent, parse_users};
use crate::locale::Locale;
use crate::normalize::normalize;
use crate::temporal::{RuleExtractor, TemporalExtractor, TemporalMention, strip_span};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt;
use std::time::{Duration, Instant};

/// Parsing context.
///
/// Holds the "now" that relative expressions ("tomorrow", "at 5") and the
/// confirmation's today/tomorrow wording are measured against.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        let now = || Local::now().naive_local();
        if cfg!(test) {
            // Tuesday 2016-05-10 09:00.
            let fixed = NaiveDate::from_ymd_opt(2016, 5, 10).and_then(|d| d.and_hms_opt(9, 0, 0));
            Self { reference_time: fixed.unwrap_or_else(now) }
        } else {
            Self { reference_time: now() }
        }
    }
}

/// A parsed reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    /// Recipients as written, in order ("me" stays "me").
    pub recipients: Vec<String>,
    pub action: String,
    /// Local wall time the reminder is due.
    pub due: NaiveDateTime,
    /// Sentence to read back to the user.
    pub confirmation: String,
}

/// Stage-by-stage view of one parse, returned by
/// [`IntentParser::parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub phrase: String,
    pub normalized: String,
    /// Every mention the extractor reported; only the first is used.
    pub mentions: Vec<TemporalMention>,
    /// The normalized phrase with the first mention cut out.
    pub stripped: Option<String>,
    /// Reminder template that matched `stripped`.
    pub template: Option<&'static str>,
    pub outcome: Result<Intent, ParseError>,
    pub elapsed: Duration,
}

/// Reminder parser for one locale.
///
/// Templates are compiled once here and shared read-only; the parser is
/// `Send + Sync` and can serve concurrent calls.
pub struct IntentParser {
    rules: LocaleRuleSet,
    confirmation: Confirmation,
    extractor: Box<dyn TemporalExtractor>,
}

impl fmt::Debug for IntentParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentParser")
            .field("locale", &self.rules.locale)
            .field("patterns", &self.rules.patterns.len())
            .field("confirmation", &self.confirmation)
            .finish_non_exhaustive()
    }
}

impl IntentParser {
    /// Parser for a registered locale code (`"en"`, `"fr"`, `"ja"`) backed by
    /// the built-in [`RuleExtractor`].
    pub fn new(locale: &str) -> Result<Self, ParseError> {
        let parsed: Locale = locale.parse()?;
        Self::with_extractor(locale, RuleExtractor::new(parsed))
    }

    /// Like [`IntentParser::new`], with a caller-supplied temporal extractor.
    pub fn with_extractor(locale: &str, extractor: impl TemporalExtractor + 'static) -> Result<Self, ParseError> {
        let locale: Locale = locale.parse()?;
        let rules = LocaleRuleSet::compile(locale.data())?;
        tracing::debug!(target: "reminder_intent::api", %locale, patterns = rules.patterns.len(), "parser ready");
        Ok(IntentParser { rules, confirmation: Confirmation::for_locale(locale), extractor: Box::new(extractor) })
    }

    pub fn locale(&self) -> Locale {
        self.rules.locale
    }

    /// Parse `phrase` against the local "now".
    pub fn parse(&self, phrase: &str) -> Result<Intent, ParseError> {
        self.parse_with(phrase, &Context::default())
    }

    /// Parse `phrase` against `context.reference_time`.
    pub fn parse_with(&self, phrase: &str, context: &Context) -> Result<Intent, ParseError> {
        self.parse_verbose_with(phrase, context).outcome
    }

    /// Parse `phrase` and keep every intermediate stage.
    pub fn parse_verbose_with(&self, phrase: &str, context: &Context) -> ParseReport {
        let start = Instant::now();
        let mut report = ParseReport {
            phrase: phrase.to_string(),
            normalized: String::new(),
            mentions: Vec::new(),
            stripped: None,
            template: None,
            outcome: Err(ParseError::EmptyInput),
            elapsed: Duration::ZERO,
        };
        let outcome = self.run(phrase, context, &mut report);
        if let Err(err) = &outcome {
            tracing::debug!(target: "reminder_intent::api", code = err.code(), "rejected");
        }
        report.outcome = outcome;
        report.elapsed = start.elapsed();
        report
    }

    fn run(&self, phrase: &str, context: &Context, report: &mut ParseReport) -> Result<Intent, ParseError> {
        if phrase.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let normalized = normalize(phrase, self.rules.locale.data());
        tracing::debug!(target: "reminder_intent::api", %normalized, "normalized");
        report.normalized = normalized.clone();
        if normalized.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let no_time = || ParseError::NoTemporalExpression { phrase: normalized.clone() };

        report.mentions = self.extractor.extract(&normalized, context);
        let mention = match report.mentions.as_slice() {
            [] => return Err(no_time()),
            [first, rest @ ..] => {
                if !rest.is_empty() {
                    tracing::warn!(
                        target: "reminder_intent::api",
                        phrase = %normalized,
                        mentions = report.mentions.len(),
                        "several time expressions, using the first"
                    );
                }
                *first
            }
        };

        let Some(stripped) = strip_span(&normalized, &mention) else {
            tracing::warn!(target: "reminder_intent::api", ?mention, "mention span does not fit the phrase");
            return Err(no_time());
        };
        tracing::debug!(target: "reminder_intent::api", %stripped, due = %mention.timestamp, "time stripped");
        report.stripped = Some(stripped.clone());

        let surface = match_intent(&stripped, &self.rules.patterns)
            .ok_or_else(|| ParseError::UnsupportedIntentFormat { phrase: normalized.clone() })?;
        let template = surface.pattern.template;
        report.template = Some(template);
        tracing::debug!(target: "reminder_intent::api", template, action = %surface.action, "matched");

        let recipients = parse_users(&surface.users, &self.rules.list_separator);
        let confirmation =
            self.confirmation.message(&recipients, &surface.action, mention.timestamp, context.reference_time, template);

        Ok(Intent { recipients, action: surface.action, due: mention.timestamp, confirmation })
    }
}
