//! Rule-based reminder intent parser.
//!
//! Turns a spoken reminder phrase ("Remind John by tomorrow to take out
//! trash") into an [`Intent`]: who to remind, what to remind them of, when,
//! and a confirmation sentence ready for speech synthesis.
//!
//! ```
//! use reminder_intent::{Context, IntentParser};
//! use chrono::NaiveDate;
//!
//! let parser = IntentParser::new("en").unwrap();
//! let now = NaiveDate::from_ymd_opt(2016, 5, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let intent = parser.parse_with("Remind me to go to the office by 5pm", &Context { reference_time: now }).unwrap();
//!
//! assert_eq!(intent.recipients, vec!["me"]);
//! assert_eq!(intent.action, "go to the office");
//! assert_eq!(intent.confirmation, "OK, I'll remind you to go to the office at 5 PM today.");
//! ```

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod confirmation;
mod engine;
mod error;
mod intent;
mod locale;
mod normalize;
mod rules;
mod temporal;
mod time_expr;

pub use api::{Context, Intent, IntentParser, ParseReport};
pub use error::ParseError;
pub use locale::Locale;
pub use temporal::{ExtractionTrace, NodeSummary, RuleExtractor, SaturationPass, TemporalExtractor, TemporalMention};

use crate::time_expr::TimeExpr;

// --- Internal types (temporal extraction engine) -----------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Dimension {
    Time,
    RegexMatch,
}

#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub dim: Dimension,
    pub kind: TokenKind,
}

#[derive(Debug, Clone)]
pub(crate) enum TokenKind {
    TimeExpr(TimeExpr),
    /// Lowercased capture groups; a group that did not participate is empty.
    RegexMatch(Vec<String>),
}

// Trait to convert rule production results into tokens
pub(crate) trait IntoToken {
    fn into_token(self) -> Option<Token>;
}

impl IntoToken for TimeExpr {
    fn into_token(self) -> Option<Token> {
        Some(Token { dim: Dimension::Time, kind: TokenKind::TimeExpr(self) })
    }
}

// Pattern items used by rules: either a Regex to match text, or a Predicate
// that matches an existing token in the stash.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// Match a regular expression against the phrase. The `Regex` is stored
    /// as a static reference (created via the `regex!` helper macro in
    /// `src/macros.rs`).
    Regex(&'static Regex),

    /// Match an already-discovered `Token` using a predicate function. This
    /// allows rules to combine previously found tokens (from the `Stash`).
    Predicate(fn(&Token) -> bool),
}

pub(crate) type Production = Box<dyn Fn(&[Token]) -> Option<Token> + Send + Sync>;

/// A parsing rule: a name, a positional `pattern` (vector of `Pattern` items)
/// and a `production` function that receives the matched tokens and
/// optionally returns a new `Token`.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Vec<Pattern>,
    pub production: Production,
    /// Bucket mask - rule only activates if input has matching buckets.
    pub buckets: u32,
    /// Required dimensions in stash before this rule activates.
    pub deps: &'static [Dimension],
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// A node resolved against the reference time.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedToken {
    pub node: Node,
    pub value: chrono::NaiveDateTime,
}

/// Basic parse tree node produced by rules. `Node` pairs a `Token` with the
/// consumed `Range` of the phrase.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub range: Range,
    pub token: Token,
    /// Name of the rule that produced this node.
    pub rule_name: &'static str,
}

// --- Stash: lightweight container for discovered nodes ----------------------

#[derive(Debug, Clone)]
pub(crate) struct Stash {
    nodes: Vec<Node>,
}

impl Stash {
    /// Create an empty `Stash`.
    pub fn empty() -> Self {
        Stash { nodes: Vec::new() }
    }

    /// Return true if the stash is empty.
    pub fn null(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return nodes starting exactly at `position`.
    pub fn starting_at(&self, position: usize) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.range.start == position)
    }

    /// Append every node of `other`, keeping `(start, end)` order.
    pub fn absorb(&mut self, other: Stash) {
        self.nodes.extend(other.nodes);
        self.nodes.sort_by_key(|n| (n.range.start, n.range.end));
    }

    /// Insert a node into the stash (appends to internal vector).
    pub fn insert(&mut self, node: Node) {
        self.nodes.push(node);
    }
}
