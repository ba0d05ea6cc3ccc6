//! Error type for game operations.

/// Error returned when a game operation is rejected.
///
/// Every check runs before the state is touched, so a returned error
/// means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// An argument is outside its accepted domain.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// A required value was not supplied.
    #[display("Missing value: {}", _0)]
    MissingValue(String),

    /// A row or column lies outside the grid.
    #[display("Out of bounds: {}", _0)]
    OutOfBounds(String),

    /// The operation is not allowed in the current phase or position.
    #[display("Invalid state: {}", _0)]
    InvalidState(String),

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Builds an [`GameError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Builds a [`GameError::MissingValue`].
    pub fn missing_value(message: impl Into<String>) -> Self {
        Self::MissingValue(message.into())
    }

    /// Builds an [`GameError::OutOfBounds`].
    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::OutOfBounds(message.into())
    }

    /// Builds an [`GameError::InvalidState`].
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::invalid_state("column 3 is full");
        assert_eq!(err.to_string(), "Invalid state: column 3 is full");

        let err = GameError::out_of_bounds("column 7 (grid has 7 columns)");
        assert_eq!(err.to_string(), "Out of bounds: column 7 (grid has 7 columns)");
    }
}
