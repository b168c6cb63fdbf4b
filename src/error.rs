use thiserror::Error;

/// Every way a reminder phrase (or parser construction) can fail.
///
/// `EmptyInput`, `NoTemporalExpression` and `UnsupportedIntentFormat` are the
/// per-call outcomes of [`crate::IntentParser::parse`]. `UnregisteredLocale`
/// and `InvalidTemplate` only ever come out of construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("time could not be parsed in \"{phrase}\"")]
    NoTemporalExpression { phrase: String },

    #[error("unsupported intent format: \"{phrase}\"")]
    UnsupportedIntentFormat { phrase: String },

    #[error("unregistered locale \"{0}\"")]
    UnregisteredLocale(String),

    #[error("invalid template \"{template}\": {reason}")]
    InvalidTemplate { template: String, reason: String },
}

impl ParseError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "EmptyInput",
            ParseError::NoTemporalExpression { .. } => "NoTemporalExpression",
            ParseError::UnsupportedIntentFormat { .. } => "UnsupportedIntentFormat",
            ParseError::UnregisteredLocale(_) => "UnregisteredLocale",
            ParseError::InvalidTemplate { .. } => "InvalidTemplate",
        }
    }

    /// The offending input, when there is one: the normalized phrase, the
    /// locale code or the template.
    pub fn data(&self) -> Option<&str> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::NoTemporalExpression { phrase } | ParseError::UnsupportedIntentFormat { phrase } => Some(phrase),
            ParseError::UnregisteredLocale(code) => Some(code),
            ParseError::InvalidTemplate { template, .. } => Some(template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_data() {
        let err = ParseError::UnsupportedIntentFormat { phrase: "Set an alarm for".to_string() };
        assert_eq!(err.code(), "UnsupportedIntentFormat");
        assert_eq!(err.data(), Some("Set an alarm for"));
        assert_eq!(err.to_string(), "unsupported intent format: \"Set an alarm for\"");

        assert_eq!(ParseError::EmptyInput.code(), "EmptyInput");
        assert_eq!(ParseError::EmptyInput.data(), None);
    }
}
