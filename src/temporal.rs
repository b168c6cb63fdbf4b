//! Temporal extraction boundary.
//!
//! The intent core only needs "where is the time expression, and what instant
//! does it mean". [`TemporalExtractor`] is that seam; [`RuleExtractor`] is the
//! built-in implementation backed by the rule engine.

use crate::engine::Parser;
use crate::{Context, Locale, Node, TokenKind};
use chrono::NaiveDateTime;
use std::time::Duration;

/// One time expression found in a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalMention {
    /// Resolved local wall time.
    pub timestamp: NaiveDateTime,
    /// Byte offset of the mention in the phrase.
    pub index: usize,
    /// Byte length of the mention.
    pub length: usize,
}

impl TemporalMention {
    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

/// Finds time expressions in a normalized phrase.
///
/// Mentions come back ordered by position and must not overlap.
pub trait TemporalExtractor: Send + Sync {
    fn extract(&self, phrase: &str, context: &Context) -> Vec<TemporalMention>;
}

/// Rule-engine extractor for one locale.
#[derive(Debug, Clone, Copy)]
pub struct RuleExtractor {
    locale: Locale,
}

/// A compact node summary used in traces.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub start: usize,
    pub end: usize,
    pub rule: &'static str,
    pub preview: String,
}

/// Nodes admitted by one saturation pass. Pass 0 is the regex-only seed.
#[derive(Debug, Clone)]
pub struct SaturationPass {
    pub pass: usize,
    pub duration: Duration,
    pub produced: usize,
    pub samples: Vec<NodeSummary>,
}

/// Mentions plus a compact view of how the engine found them.
#[derive(Debug, Clone)]
pub struct ExtractionTrace {
    pub mentions: Vec<TemporalMention>,
    /// The node behind each mention, aligned with `mentions`.
    pub selected: Vec<NodeSummary>,
    pub saturation: Vec<SaturationPass>,
    pub saturation_total: Duration,
    pub total: Duration,
}

impl RuleExtractor {
    pub fn new(locale: Locale) -> Self {
        RuleExtractor { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Like [`TemporalExtractor::extract`], keeping engine details.
    pub fn trace(&self, phrase: &str, context: &Context) -> ExtractionTrace {
        let run = Parser::new(phrase, crate::rules::time::rules(self.locale)).run(context);

        let mentions: Vec<TemporalMention> = run
            .tokens
            .iter()
            .map(|token| TemporalMention {
                timestamp: token.value,
                index: token.node.range.start,
                length: token.node.range.end - token.node.range.start,
            })
            .collect();
        let selected = run.tokens.iter().map(|token| node_to_summary(&token.node)).collect();

        let passes = std::iter::once(&run.saturation.initial_regex).chain(&run.saturation.iterations);
        let saturation = passes
            .enumerate()
            .map(|(pass, metrics)| SaturationPass {
                pass,
                duration: metrics.duration,
                produced: metrics.produced,
                samples: metrics.nodes.iter().take(8).map(node_to_summary).collect(),
            })
            .collect();

        tracing::debug!(
            target: "reminder_intent::temporal",
            locale = %self.locale,
            mentions = mentions.len(),
            elapsed = ?run.total,
            "extracted"
        );

        ExtractionTrace { mentions, selected, saturation, saturation_total: run.saturation.total, total: run.total }
    }
}

fn node_to_summary(node: &Node) -> NodeSummary {
    let preview = match &node.token.kind {
        TokenKind::TimeExpr(expr) => format!("{expr:?}"),
        TokenKind::RegexMatch(groups) => groups.first().cloned().unwrap_or_default(),
    };
    NodeSummary {
        start: node.range.start,
        end: node.range.end,
        rule: node.rule_name,
        preview: preview.chars().take(80).collect(),
    }
}

impl TemporalExtractor for RuleExtractor {
    fn extract(&self, phrase: &str, context: &Context) -> Vec<TemporalMention> {
        self.trace(phrase, context).mentions
    }
}

/// The phrase with `mention` cut out, or `None` when the span does not fit
/// the phrase.
pub(crate) fn strip_span(phrase: &str, mention: &TemporalMention) -> Option<String> {
    let end = mention.index.checked_add(mention.length)?;
    let before = phrase.get(..mention.index)?;
    let after = phrase.get(end..)?;
    Some(format!("{before}{after}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn mention(index: usize, length: usize) -> TemporalMention {
        let timestamp = NaiveDate::from_ymd_opt(2016, 5, 10).unwrap().and_hms_opt(17, 0, 0).unwrap();
        TemporalMention { timestamp, index, length }
    }

    #[test]
    fn strips_the_consumed_span() {
        assert_eq!(strip_span("Remind me to call mom at 5pm", &mention(25, 3)).as_deref(), Some("Remind me to call mom at "));
        assert_eq!(strip_span("tomorrow buy milk", &mention(0, 8)).as_deref(), Some(" buy milk"));
    }

    #[test]
    fn invalid_spans_are_rejected() {
        assert_eq!(strip_span("5pm", &mention(2, 5)), None);
        assert_eq!(strip_span("明日", &mention(1, 1)), None);
        assert_eq!(strip_span("5pm", &mention(usize::MAX, 2)), None);
    }

    #[test]
    fn rule_extractor_reports_spans_in_order() {
        let context = Context::default();
        let mentions = RuleExtractor::new(Locale::En).extract("tomorrow, then at 5pm", &context);
        let spans: Vec<(usize, usize)> = mentions.iter().map(|m| (m.index, m.end())).collect();
        assert_eq!(spans, vec![(0, 8), (18, 21)]);
    }
}
