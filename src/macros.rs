//! Rule-writing macros.
//!
//! - `regex!` compiles a literal pattern once into a static `Regex`.
//! - `re!` and `pred!` build the `Pattern` items of a rule: a regex matched
//!   against the phrase, or a predicate over a token already in the stash.
//! - `rule!` assembles a `Rule`. Its optional slots:
//!   - `buckets:` trigger bits (`BucketMask::*.bits()`) the phrase must carry
//!     for the rule to run. Omitted means always on.
//!   - `deps:` dimensions that must already be in the stash, e.g. the
//!     day + clock compositions wait for `Dimension::Time`.
//!
//!   `prod:` returns `Option<TimeExpr>`; `None` rejects the match.
//!
//! ```ignore
//! rule! {
//!     name: "tomorrow",
//!     pattern: [re!(r"(?i)\btomorrow\b")],
//!     prod: |_tokens: &[Token]| -> Option<TimeExpr> { Some(TimeExpr::Day(DaySpec::Offset(1))) }
//! }
//! ```

#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Regex($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! pred {
    ($p:expr) => {
        $crate::Pattern::Predicate($p)
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: [ $($pat:expr),* $(,)? ]
        $(, buckets: $buckets:expr)?
        $(, deps: [ $($dep:expr),* $(,)? ])?
        , prod: |$tokens_expr:ident : &[$tok_ty_expr:ty]| -> $ret_ty:ty $body_expr:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: vec![ $($pat),* ],
            production: Box::new(move |$tokens_expr: &[$tok_ty_expr]| {
                use $crate::IntoToken;
                let result: $ret_ty = $body_expr;
                result.and_then(|v| v.into_token())
            }),
            buckets: { 0 $(| $buckets)? },
            deps: &[ $($($dep),*)? ],
        }
    }};
}
