//! Parsing of typed player input.

use greedy_tictactoe::Position;
use tracing::instrument;

/// Rejected position input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The line was not an integer.
    #[display("Not a number: {:?}", input)]
    ParseFailure {
        /// The offending text, trimmed.
        input: String,
    },
    /// The integer was outside 1-9, including integers too large to store.
    #[display("Position {} is outside 1-9", input)]
    OutOfRange {
        /// The number as typed, trimmed.
        input: String,
    },
}

/// Converts a 1-9 position typed by the player into a 0-8 board index.
///
/// # Errors
///
/// [`InputError::ParseFailure`] for anything that is not an integer and
/// [`InputError::OutOfRange`] for integers outside 1-9.
#[instrument]
pub fn parse_position(line: &str) -> Result<usize, InputError> {
    let trimmed = line.trim();
    let out_of_range = || InputError::OutOfRange {
        input: trimmed.to_string(),
    };

    match trimmed.parse::<i64>() {
        Ok(number) => usize::try_from(number)
            .ok()
            .and_then(Position::from_one_based)
            .map(Position::to_index)
            .ok_or_else(out_of_range),
        Err(_) if is_integer(trimmed) => Err(out_of_range()),
        Err(_) => Err(InputError::ParseFailure {
            input: trimmed.to_string(),
        }),
    }
}

/// An optional sign followed by at least one ASCII digit.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a replay answer means yes. Accepts `y`, `yes` and `ya`, in any case.
pub fn parse_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes" | "ya")
}
