//! Token resolution.
//!
//! Saturation produces `Node`s: a span plus a `TimeExpr` that is still relative
//! ("tomorrow", "5pm"). Resolution anchors the expression on the context
//! reference time and yields a `ResolvedToken` carrying an absolute timestamp.
//!
//! Regex nodes never resolve; they only exist inside rule routes.

use crate::rules::time::normalize::resolve_expr;
use crate::{Context, Node, ResolvedToken, TokenKind};

/// Node ──▶ absolute timestamp, or `None` when the expression does not exist
/// on the calendar (e.g. "February 30th").
pub(crate) fn resolve_node(context: &Context, node: Node) -> Option<ResolvedToken> {
    let value = match &node.token.kind {
        TokenKind::TimeExpr(expr) => resolve_expr(expr, context.reference_time)?,
        TokenKind::RegexMatch(_) => return None,
    };

    tracing::trace!(target: "reminder_intent::engine", range = ?node.range, rule = node.rule_name, %value, "resolved");

    Some(ResolvedToken { node, value })
}
