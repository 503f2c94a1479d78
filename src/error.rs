use thiserror::Error;

/// Errors raised while building the graph or answering queries
#[derive(Error, Debug)]
pub enum BaconError {
    /// Dataset or query stream could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset record that breaks the line format (line is 1-based)
    #[error("Malformed dataset at line {line}: {reason}")]
    MalformedDataset { line: usize, reason: String },

    /// Queried name has no actor in the graph
    #[error("Actor not found: {0}")]
    ActorNotFound(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BaconError>;
