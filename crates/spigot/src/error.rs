use thiserror::Error;

/// Errors raised while setting up or checking a spigot run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpigotError {
    /// Requested digit count is zero or negative
    #[error("digit count must be positive (got {requested})")]
    InvalidArgument { requested: i64 },

    /// Remainder table or accumulator would not fit the generator's integer widths
    #[error("{digit_count} digits exceed the generator's integer widths")]
    ArithmeticOverflow { digit_count: usize },

    /// Remainder table could not be allocated
    #[error("cannot allocate a remainder table of {entries} entries")]
    TableAllocation { entries: usize },

    /// Generated digits disagree with the trusted expansion of π
    #[error("digit {position} is '{actual}', expected '{expected}'")]
    AssertionFailure {
        position: usize,
        expected: char,
        actual: char,
    },
}
