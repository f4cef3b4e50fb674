//! Error types for the match runner crate.

use std::error::Error;
use std::fmt;
use std::io;

use othello6_core::error::EngineError;

/// Errors raised while setting up or playing a match.
#[derive(Debug)]
pub enum MatchRunnerError {
    /// I/O operation failed
    Io(io::Error),
    /// An engine failed to produce a move
    Engine(String),
    /// Game logic or move validation error
    Game(String),
    /// Configuration validation error
    Config(String),
}

impl fmt::Display for MatchRunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRunnerError::Io(err) => write!(f, "IO error: {err}"),
            MatchRunnerError::Engine(msg) => write!(f, "Engine error: {msg}"),
            MatchRunnerError::Game(msg) => write!(f, "Game error: {msg}"),
            MatchRunnerError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl Error for MatchRunnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatchRunnerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MatchRunnerError {
    fn from(err: io::Error) -> Self {
        MatchRunnerError::Io(err)
    }
}

impl From<EngineError> for MatchRunnerError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidDepth | EngineError::InvalidWeights { .. } => {
                MatchRunnerError::Config(err.to_string())
            }
            _ => MatchRunnerError::Game(err.to_string()),
        }
    }
}

/// Convenience type alias for Results with MatchRunnerError.
pub type Result<T> = std::result::Result<T, MatchRunnerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use othello6_core::square::Square;

    #[test]
    fn test_engine_error_conversion() {
        let err: MatchRunnerError = EngineError::InvalidDepth.into();
        assert!(matches!(err, MatchRunnerError::Config(_)));

        let err: MatchRunnerError = EngineError::InvalidWeights { bound: 1 << 30 }.into();
        assert!(matches!(err, MatchRunnerError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: evaluation can reach 1073741824, scores must stay below 16777216"
        );

        let err: MatchRunnerError = EngineError::InvalidMove(Square::A1).into();
        assert!(matches!(err, MatchRunnerError::Game(_)));
        assert_eq!(err.to_string(), "Game error: illegal move: a1");
    }

    #[test]
    fn test_io_error_has_source() {
        let err: MatchRunnerError = io::Error::other("broken pipe").into();
        assert!(err.source().is_some());
        assert!(MatchRunnerError::Engine("x".to_string()).source().is_none());
    }
}
