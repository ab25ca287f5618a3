//! Range error types

use thiserror::Error;

/// Result type alias for range construction.
pub type Result<T> = std::result::Result<T, RangeError>;

/// Errors that can occur while building a range
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Both endpoints present but lower is not strictly below upper
    #[error("not allowed to create a Range with lowerbound > upperbound (lower must be strictly less than upper)")]
    InvalidBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_ordering_violation() {
        let message = RangeError::InvalidBounds.to_string();
        assert!(message.contains("lowerbound > upperbound"));
        assert!(message.contains("strictly less"));
    }
}
