//! Error types for solsim.
//!
//! Every fallible operation in the crate returns [`Result`]. Physics faults
//! (coincident bodies, invalid mass, numeric blow-up) are reported per tick or
//! per body operation; persistence faults carry the offending line number.

use thiserror::Error;

/// Unified error type for all solsim operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Mass must be finite and strictly positive
    #[error("body `{name}`: invalid mass {mass} (must be finite and > 0)")]
    InvalidMass { name: String, mass: f64 },

    /// Two bodies share the exact same scaled coordinates
    #[error("bodies `{first}` and `{second}` occupy the same position; pairwise force is undefined")]
    DegeneratePair { first: String, second: String },

    /// Integration produced NaN or infinity
    #[error("body `{name}`: integration produced a non-finite state")]
    NonFiniteState { name: String },

    #[error("invalid timestep {0} (must be finite and > 0)")]
    InvalidTimestep(f64),

    #[error("body limit reached ({max} bodies)")]
    CapacityReached { max: usize },

    #[error("no body named `{0}`")]
    UnknownBody(String),

    #[error("unknown color `{0}`")]
    UnknownColor(String),

    /// A stored line parsed but its values do not form a valid body
    #[error("line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// A stored line could not be split into the expected fields
    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl Error {
    /// Wraps a CSV error, attaching the line it occurred on when known.
    pub fn csv(source: csv::Error) -> Self {
        let line = source
            .position()
            .map(|pos| pos.line())
            .unwrap_or_default();
        Error::Csv { line, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
