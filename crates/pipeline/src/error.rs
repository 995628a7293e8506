use thiserror::Error;

/// Result type for consumer operations
pub type Result<T> = std::result::Result<T, ConsumerError>;

/// Errors returned by a consumer to the stage that handed it data
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// Wire bytes could not be turned into a tree
    #[error("Decoding error: {0}")]
    Decoding(#[from] pdata::DecodingError),

    /// The consumer refused the data
    #[error("Consumer rejected data: {0}")]
    Rejected(String),

    /// More than one consumer of a fan-out failed
    #[error("{}", join_errors(.0))]
    Combined(Vec<ConsumerError>),
}

impl ConsumerError {
    /// Folds the errors of several consumers into one; `None` when all succeeded.
    pub fn combine(mut errors: Vec<ConsumerError>) -> Option<ConsumerError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ConsumerError::Combined(errors)),
        }
    }
}

fn join_errors(errors: &[ConsumerError]) -> String {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("[{}]", messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine() {
        assert!(ConsumerError::combine(Vec::new()).is_none());

        let single = ConsumerError::combine(vec![ConsumerError::Rejected("a".into())]);
        assert!(matches!(single, Some(ConsumerError::Rejected(ref m)) if m == "a"));

        let combined = ConsumerError::combine(vec![
            ConsumerError::Rejected("a".into()),
            ConsumerError::Rejected("b".into()),
        ])
        .unwrap();
        assert_eq!(
            combined.to_string(),
            "[Consumer rejected data: a; Consumer rejected data: b]"
        );
    }
}
