use thiserror::Error;

/// Convenient result alias for the Wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a numeric argument falls outside its accepted range.
    #[error("invalid argument {name}: {value} is outside the accepted range [0, 1]")]
    InvalidArgument { name: &'static str, value: f64 },

    /// Raised by front-ends that treat a missing path as a failure.
    #[error("no path found between {start} and {goal}")]
    NoPath { start: String, goal: String },
}
