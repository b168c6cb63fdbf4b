use regex::Regex;

/// Split a `[users]` capture into recipients, keeping order, casing and
/// duplicates. A dangling separator leaves an empty trailing entry.
pub(crate) fn parse_users(capture: &str, separator: &Regex) -> Vec<String> {
    separator.split(capture).map(|user| user.trim().to_string()).collect()
}
