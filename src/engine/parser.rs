//! Matching and saturation parser.
//!
//! - Select the rules that are plausible for the phrase (bucket gating; see
//!   `compiled_rules.rs` and `trigger.rs`).
//! - Repeatedly apply those rules to build up a `Stash` of `Node`s.
//! - Deduplicate produced nodes to keep saturation finite (see `dedup.rs`).
//! - Resolve nodes (see `resolve.rs`) and keep the leftmost-longest,
//!   non-overlapping ones.
//!
//! ## Pass structure
//!
//! ```text
//! (0) trigger scan         -> buckets
//! (1) initial regex pass   -> seed from the phrase
//! (2) iterative passes     -> mix regex + predicate rules as stash grows
//! (3) resolve + select     -> ResolvedToken output
//! ```

use super::compiled_rules::{CompiledRules, DimensionSet};
use super::dedup::NodeKey;
use super::metrics::{PassMetrics, RunResult, SaturationMetrics};
use super::resolve::resolve_node;
use super::trigger::TriggerInfo;
use crate::{Context, Dimension, Node, Pattern, Range, ResolvedToken, Rule, Stash, Token, TokenKind};
use std::collections::HashSet;
use std::time::Instant;

const TARGET: &str = "reminder_intent::engine";

/// A partially matched rule as the engine advances through the pattern.
/// `route` holds the matched `Node`s so far.
///
/// ```text
/// pattern: [Predicate(is_day), Regex("\s+at\s+"), Predicate(is_clock)]
///                              ^ next_idx once the day node is consumed
///
/// route: [ Node(range:0..8, dim:Time) ]
/// position points to the end of the last consumed node (here: 8)
/// ```
struct PartialMatch<'a> {
    rule: &'a Rule,
    next_idx: usize,
    position: usize,
    route: Vec<Node>,
}

/// Parser orchestrates applying `Rule`s against a phrase.
///
/// ```text
/// new() -> saturate() -> resolve_selected()
///            │             └─ keep leftmost-longest spans
///            └─ repeatedly grow stash using rules
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    stash: Stash,
    /// Set of seen node keys used to avoid re-adding identical nodes.
    seen: HashSet<NodeKey>,
    /// Active rules that start with a `Regex` pattern.
    regex_rules: Vec<&'a Rule>,
    /// Active rules that start with a `Predicate` pattern.
    predicate_rules: Vec<&'a Rule>,
}

impl<'a> Parser<'a> {
    /// Create a new `Parser` for `input` using pre-compiled rules.
    pub fn new_compiled(input: &'a str, compiled: CompiledRules<'a>) -> Self {
        let trigger_info = TriggerInfo::scan(input);
        let active = compiled.active_ids(trigger_info.buckets);

        tracing::trace!(
            target: TARGET,
            buckets = ?trigger_info.buckets,
            active = active.len(),
            total = compiled.rules.len(),
            "trigger scan"
        );

        let mut regex_rules = Vec::new();
        let mut predicate_rules = Vec::new();
        for id in active {
            let rule = compiled.rules[id];
            match rule.pattern.first() {
                Some(Pattern::Regex(_)) => regex_rules.push(rule),
                Some(Pattern::Predicate(_)) => predicate_rules.push(rule),
                None => {}
            }
        }

        Parser { input, stash: Stash::empty(), seen: HashSet::new(), regex_rules, predicate_rules }
    }

    /// Create a new `Parser` for `input` using `rules`.
    pub fn new(input: &'a str, rules: &'a [Rule]) -> Self {
        Self::new_compiled(input, CompiledRules::new(rules))
    }

    fn regex_node(caps: &regex::Captures<'_>) -> Option<Node> {
        let m = caps.get(0)?;
        let groups: Vec<String> =
            (0..caps.len()).map(|i| caps.get(i).map(|g| g.as_str().to_lowercase()).unwrap_or_default()).collect();
        Some(Node {
            range: Range { start: m.start(), end: m.end() },
            token: Token { dim: Dimension::RegexMatch, kind: TokenKind::RegexMatch(groups) },
            rule_name: "<regex>",
        })
    }

    /// Find nodes that match `pat` and start exactly at `position`.
    ///
    /// ```text
    /// input: "tomorrow at 5pm"
    /// position: 8 (after "tomorrow")
    /// Pattern::Regex("\\s+at\\s+") -> Node at 8..12
    /// Pattern::Predicate(is_clock)  -> Nodes pulled from stash at same offset
    /// ```
    fn lookup_item(&self, pat: &Pattern, position: usize) -> Vec<Node> {
        match pat {
            Pattern::Regex(re) => re
                .captures_at(self.input, position)
                .filter(|caps| caps.get(0).is_some_and(|m| m.start() == position && !m.is_empty()))
                .and_then(|caps| Self::regex_node(&caps))
                .into_iter()
                .collect(),
            Pattern::Predicate(pred) => self.stash.starting_at(position).filter(|n| pred(&n.token)).cloned().collect(),
        }
    }

    /// Find nodes that match `pat` anywhere in the phrase.
    fn lookup_item_anywhere(&self, pat: &Pattern) -> Vec<Node> {
        match pat {
            Pattern::Regex(re) => re
                .captures_iter(self.input)
                .filter(|caps| caps.get(0).is_some_and(|m| !m.is_empty()))
                .filter_map(|caps| Self::regex_node(&caps))
                .collect(),
            Pattern::Predicate(pred) => self.stash.nodes().iter().filter(|n| pred(&n.token)).cloned().collect(),
        }
    }

    fn seed_first_pattern_anywhere(&self, rule: &'a Rule) -> Vec<PartialMatch<'a>> {
        let Some(first) = rule.pattern.first() else {
            return Vec::new();
        };
        self.lookup_item_anywhere(first)
            .into_iter()
            .map(|node| PartialMatch { rule, next_idx: 1, position: node.range.end, route: vec![node] })
            .collect()
    }

    /// Depth-first expansion of `PartialMatch` objects until the entire rule
    /// is satisfied.
    fn match_all(&self, input_matches: Vec<PartialMatch<'a>>) -> Vec<PartialMatch<'a>> {
        let mut results = Vec::new();
        let mut stack: Vec<PartialMatch<'a>> = input_matches;

        while let Some(m) = stack.pop() {
            if m.next_idx >= m.rule.pattern.len() {
                results.push(m);
                continue;
            }

            let pat = &m.rule.pattern[m.next_idx];
            let nodes = self.lookup_item(pat, m.position);

            // Push in reverse order so we explore them in forward order (stack is LIFO)
            for node in nodes.into_iter().rev() {
                let mut route = m.route.clone();
                let position = node.range.end;
                route.push(node);
                stack.push(PartialMatch { rule: m.rule, next_idx: m.next_idx + 1, position, route });
            }
        }

        results
    }

    /// Convert a completed `PartialMatch` into a `Node` by invoking the rule's
    /// production callback.
    fn produce_node(&self, m: &PartialMatch) -> Option<Node> {
        let tokens: Vec<Token> = m.route.iter().map(|n| n.token.clone()).collect();
        let (first, last) = (m.route.first()?, m.route.last()?);

        match (m.rule.production)(&tokens) {
            Some(token) => {
                tracing::trace!(
                    target: TARGET,
                    rule = m.rule.name,
                    span = ?(first.range.start..last.range.end),
                    text = self.input.get(first.range.start..last.range.end).unwrap_or(""),
                    "production ok"
                );
                Some(Node { range: Range { start: first.range.start, end: last.range.end }, token, rule_name: m.rule.name })
            }
            None => {
                tracing::trace!(target: TARGET, rule = m.rule.name, "production rejected");
                None
            }
        }
    }

    /// Apply an ordered set of rules once and return the nodes produced.
    fn apply_rules_once(&self, rule_set: &[&'a Rule]) -> Vec<Node> {
        let mut discovered = Vec::new();
        for rule in rule_set {
            let starts = self.seed_first_pattern_anywhere(rule);
            if starts.is_empty() {
                continue;
            }
            for m in self.match_all(starts) {
                if let Some(node) = self.produce_node(&m) {
                    discovered.push(node);
                }
            }
        }
        discovered
    }

    fn dimensions_in_stash(&self) -> DimensionSet {
        self.stash.nodes().iter().fold(DimensionSet::empty(), |dims, node| dims | DimensionSet::of(node.token.dim))
    }

    fn deps_satisfied(rule: &Rule, dims_in_stash: DimensionSet) -> bool {
        rule.deps.iter().all(|&dep| dims_in_stash.contains(DimensionSet::of(dep)))
    }

    /// Keep only nodes not seen before; returns them as a fresh stash.
    fn admit(&mut self, discovered: Vec<Node>) -> Stash {
        let mut newly_added = Stash::empty();
        for node in discovered {
            if self.seen.insert(NodeKey::from_node(&node)) {
                newly_added.insert(node);
            }
        }
        newly_added
    }

    /// Saturate the stash by repeatedly applying rules until a fixpoint.
    ///
    /// ```text
    /// regex_rules pass
    ///      │
    ///      ▼
    ///  stash grows ──┐
    ///                │ predicate + regex passes
    ///                └── repeat until fixed point
    /// ```
    fn saturate(&mut self) -> SaturationMetrics {
        let mut metrics = SaturationMetrics::default();
        let saturation_start = Instant::now();

        let regex_start = Instant::now();
        let discovered = self.apply_rules_once(&self.regex_rules);
        let newly_added = self.admit(discovered);
        metrics.initial_regex = PassMetrics {
            duration: regex_start.elapsed(),
            produced: newly_added.nodes().len(),
            nodes: newly_added.nodes().to_vec(),
        };
        if newly_added.null() {
            metrics.total = saturation_start.elapsed();
            return metrics;
        }
        self.stash.absorb(newly_added);

        let mut all_saturate_rules: Vec<&'a Rule> = Vec::new();
        all_saturate_rules.extend(self.predicate_rules.iter().copied());
        all_saturate_rules.extend(self.regex_rules.iter().copied());

        loop {
            let iteration_start = Instant::now();

            let dims_in_stash = self.dimensions_in_stash();
            let saturate_rules: Vec<&'a Rule> =
                all_saturate_rules.iter().filter(|rule| Self::deps_satisfied(rule, dims_in_stash)).copied().collect();

            let discovered = self.apply_rules_once(&saturate_rules);
            let newly_added = self.admit(discovered);
            metrics.iterations.push(PassMetrics {
                duration: iteration_start.elapsed(),
                produced: newly_added.nodes().len(),
                nodes: newly_added.nodes().to_vec(),
            });
            if newly_added.null() {
                break;
            }
            self.stash.absorb(newly_added);
        }

        metrics.total = saturation_start.elapsed();
        metrics
    }

    /// Resolve nodes, then keep the leftmost-longest spans that do not overlap
    /// an already kept span. Equal spans keep production order.
    ///
    /// Filtering happens *after* resolution so that a span which cannot exist
    /// on the calendar never hides a shorter, valid one.
    fn resolve_selected(&self, context: &Context) -> Vec<ResolvedToken> {
        let mut resolved: Vec<ResolvedToken> =
            self.stash.nodes().iter().cloned().filter_map(|node| resolve_node(context, node)).collect();

        resolved.sort_by(|a, b| {
            a.node.range.start.cmp(&b.node.range.start).then(b.node.range.end.cmp(&a.node.range.end))
        });

        let mut selected: Vec<ResolvedToken> = Vec::new();
        let mut kept_until = 0;
        for rt in resolved {
            if !selected.is_empty() && rt.node.range.start < kept_until {
                continue;
            }
            kept_until = rt.node.range.end;
            selected.push(rt);
        }

        tracing::trace!(target: TARGET, selected = selected.len(), "selection");
        selected
    }

    /// Saturate the stash and resolve the selected nodes.
    pub fn run(mut self, context: &Context) -> RunResult {
        let total_start = Instant::now();
        let saturation = self.saturate();
        let tokens = self.resolve_selected(context);

        RunResult { tokens, saturation, total: total_start.elapsed() }
    }
}
