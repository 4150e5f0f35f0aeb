//! Error types for the morphospace engine.
//!
//! Every failure is a deterministic function of the inputs: there are no
//! transient conditions and nothing is retried internally. Each variant
//! carries the offending value so callers can report it verbatim.

use std::fmt;

/// Errors produced by registry lookups, parameter validation, and
/// sequence generation.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// An unknown state, preset, or attractor identifier.
    NotFound {
        /// What kind of entity was looked up ("state", "preset", "attractor").
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },
    /// An out-of-range or otherwise malformed numeric parameter.
    InvalidArgument {
        /// The parameter name.
        what: &'static str,
        /// Human-readable description of the violation.
        detail: String,
    },
    /// An oscillation shape name that the sequencer does not recognize.
    UnsupportedWaveform {
        /// The unrecognized waveform name.
        name: String,
    },
    /// Empty or degenerate text handed to the intent classifier.
    InvalidInput {
        /// Description of what made the input unusable.
        detail: String,
    },
    /// A coordinate vector whose arity does not match the parameter space.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension received.
        got: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotFound { kind, id } => {
                write!(f, "unknown {}: {:?}", kind, id)
            }
            EngineError::InvalidArgument { what, detail } => {
                write!(f, "invalid argument {}: {}", what, detail)
            }
            EngineError::UnsupportedWaveform { name } => {
                write!(f, "unsupported waveform: {:?}", name)
            }
            EngineError::InvalidInput { detail } => {
                write!(f, "invalid input: {}", detail)
            }
            EngineError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
