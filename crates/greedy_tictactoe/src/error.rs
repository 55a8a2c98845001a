//! Error types for board mutation and move selection.

/// Error returned when a placement is rejected.
///
/// The board is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside the 0-8 range.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the index already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The round already reached a terminal state.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// Error returned by the move policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PolicyError {
    /// The policy was asked to move on a full board.
    ///
    /// Indicates a driver that skipped its terminal check.
    #[display("No moves available: board is full")]
    NoMovesAvailable,
}

impl std::error::Error for PolicyError {}
