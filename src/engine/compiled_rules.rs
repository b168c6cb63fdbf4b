//! Rule compilation and indexing.
//!
//! Parsing is split into two phases:
//!
//! 1. **Compile/index rules** (this module): create a cheap representation of
//!    the rule set (`CompiledRules`) pre-indexed by bucket.
//! 2. **Run** (see `parser.rs`): scan the phrase for coarse triggers
//!    (`trigger.rs`), select a subset of rules, then saturate and resolve.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules`.
//! - `RuleIndex::by_bucket` uses fixed indices (`BUCKET_*`) to avoid `HashMap`
//!   overhead in the hot path.

use crate::{Dimension, Rule};

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS   = 1 << 0;
        const HAS_COLON    = 1 << 1;
        const HAS_AMPM     = 1 << 2;
        const WEEKDAYISH   = 1 << 3;
        const MONTHISH     = 1 << 4;
        const ORDINALISH   = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Tracks which dimensions are present in the stash.
    ///
    /// The parser skips rules that depend on dimensions that cannot possibly
    /// match yet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DimensionSet: u8 {
        const TIME    = 1 << 0;
        const REGEX   = 1 << 1;
    }
}

impl DimensionSet {
    pub fn of(dim: Dimension) -> Self {
        match dim {
            Dimension::Time => DimensionSet::TIME,
            Dimension::RegexMatch => DimensionSet::REGEX,
        }
    }
}

#[derive(Default, Debug)]
pub struct RuleIndex {
    pub always_on: Vec<RuleId>,
    pub by_bucket: [Vec<RuleId>; BUCKET_COUNT],
}

pub const BUCKET_COUNT: usize = 6;
const BUCKETS: [BucketMask; BUCKET_COUNT] = [
    BucketMask::HAS_DIGITS,
    BucketMask::HAS_COLON,
    BucketMask::HAS_AMPM,
    BucketMask::WEEKDAYISH,
    BucketMask::MONTHISH,
    BucketMask::ORDINALISH,
];

/// Pre-compiled rule set with its bucket index.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub index: RuleIndex,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from a slice of rules.
    ///
    /// A rule lands in the bucket list of every bucket bit it declares; the
    /// parser activates it when the phrase carries any of them.
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();

        let mut index = RuleIndex::default();

        for (id, rule) in rule_refs.iter().enumerate() {
            let buckets = BucketMask::from_bits_truncate(rule.buckets);
            if buckets.is_empty() {
                index.always_on.push(id);
                continue;
            }
            for (slot, bucket) in BUCKETS.iter().enumerate() {
                if buckets.contains(*bucket) {
                    index.by_bucket[slot].push(id);
                }
            }
        }

        CompiledRules { rules: rule_refs, index }
    }

    /// Rule ids activated by `buckets`, in declaration order.
    pub fn active_ids(&self, buckets: BucketMask) -> Vec<RuleId> {
        let mut ids: Vec<RuleId> = self.index.always_on.clone();
        for (slot, bucket) in BUCKETS.iter().enumerate() {
            if buckets.contains(*bucket) {
                ids.extend(&self.index.by_bucket[slot]);
            }
        }
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<Rule> {
        vec![
            rule! {
                name: "always",
                pattern: [re!(r"x")],
                prod: |_tokens: &[crate::Token]| -> Option<crate::time_expr::TimeExpr> { None }
            },
            rule! {
                name: "digits",
                pattern: [re!(r"\d")],
                buckets: BucketMask::HAS_DIGITS.bits(),
                prod: |_tokens: &[crate::Token]| -> Option<crate::time_expr::TimeExpr> { None }
            },
            rule! {
                name: "digits+colon",
                pattern: [re!(r"\d:\d")],
                buckets: (BucketMask::HAS_DIGITS | BucketMask::HAS_COLON).bits(),
                prod: |_tokens: &[crate::Token]| -> Option<crate::time_expr::TimeExpr> { None }
            },
        ]
    }

    #[test]
    fn unbucketed_rules_are_always_on() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        assert_eq!(compiled.active_ids(BucketMask::empty()), vec![0]);
    }

    #[test]
    fn bucketed_rules_activate_once_per_matching_bucket() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        assert_eq!(compiled.active_ids(BucketMask::HAS_DIGITS), vec![0, 1, 2]);
        assert_eq!(compiled.active_ids(BucketMask::HAS_COLON), vec![0, 2]);
    }
}
