//! Temporal extraction engine.
//!
//! Locates time expressions inside a normalized reminder phrase and resolves
//! them to absolute timestamps. The intent parser only sees the result through
//! [`crate::TemporalExtractor`]; this engine is the built-in implementation.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (per locale) ──┐
//!                      │  CompiledRules::new           (compiled_rules.rs)
//!                      └───────────────┬──────────────
//!                                      │
//! phrase ── TriggerInfo::scan ─────────┼─ select active rules (buckets)
//!           (trigger.rs)               │
//!                                      v
//!                            Parser::saturate (parser.rs)
//!                              - seed matches (regex-first)
//!                              - iterate to fixpoint
//!                              - dedup via NodeKey (dedup.rs)
//!                                      │
//!                                      v
//!                            resolve_node (resolve.rs)
//!                              - anchor against reference time
//!                                      │
//!                                      v
//!                            leftmost-longest selection
//!                                      │
//!                                      v
//!                              Vec<ResolvedToken>
//! ```
//!
//! The engine leans on **saturation**: repeatedly apply rules until an
//! iteration produces no new nodes. Composition rules ("tomorrow at 5pm")
//! consume the nodes produced by simpler rules ("tomorrow", "5pm").
//!
//! ## Debugging
//!
//! Rule activation, productions and selection are logged at `trace` level
//! under the `reminder_intent::engine` target.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub use compiled_rules::BucketMask;
pub use parser::Parser;
