//! Deduplication keys for saturation.
//!
//! Saturation repeatedly applies rules and adds newly produced `Node`s to the
//! stash. Without a stable deduplication key the engine would re-derive the
//! same nodes forever.
//!
//! The key combines the span, the dimension, the producing rule name and a
//! dimension-specific `kind_key`. Including `rule_name` keeps distinct
//! derivations of the same span apart.

use crate::time_expr::TimeExpr;
use crate::{Dimension, Node, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) dim: Dimension,
    pub(crate) rule_name: &'static str,
    pub(crate) kind_key: NodeKindKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum NodeKindKey {
    TimeExpr(String),   // Debug format of the expression
    RegexMatch(String), // Keep group 0 for regex matches
}

impl NodeKey {
    pub(crate) fn from_node(node: &Node) -> Self {
        let kind_key = match &node.token.kind {
            TokenKind::TimeExpr(expr) => NodeKindKey::TimeExpr(expr_key(expr)),
            TokenKind::RegexMatch(groups) => {
                NodeKindKey::RegexMatch(groups.first().map(|s| s.as_str()).unwrap_or("").to_string())
            }
        };

        NodeKey {
            start: node.range.start,
            end: node.range.end,
            dim: node.token.dim,
            rule_name: node.rule_name,
            kind_key,
        }
    }
}

fn expr_key(expr: &TimeExpr) -> String {
    format!("{:?}", expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_expr::DaySpec;
    use crate::{Range, Token};

    fn node(start: usize, end: usize, rule_name: &'static str) -> Node {
        Node {
            range: Range { start, end },
            token: Token { dim: Dimension::Time, kind: TokenKind::TimeExpr(TimeExpr::Day(DaySpec::Offset(1))) },
            rule_name,
        }
    }

    #[test]
    fn same_span_same_rule_collapses() {
        assert_eq!(NodeKey::from_node(&node(0, 8, "tomorrow")), NodeKey::from_node(&node(0, 8, "tomorrow")));
    }

    #[test]
    fn distinct_rules_stay_apart() {
        assert_ne!(NodeKey::from_node(&node(0, 8, "tomorrow")), NodeKey::from_node(&node(0, 8, "demain")));
    }
}
