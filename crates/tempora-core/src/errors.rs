use thiserror::Error;

/// Workspace-wide error type.
///
/// The scoring pipeline itself is infallible over validated in-memory input;
/// errors arise only at the edges (configuration and dataset loading).
#[derive(Debug, Error)]
pub enum TemporaError {
    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("dataset error: {reason}")]
    Dataset { reason: String },
}

impl From<toml::de::Error> for TemporaError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for TemporaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Dataset {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for TemporaError {
    fn from(e: std::io::Error) -> Self {
        Self::Dataset {
            reason: e.to_string(),
        }
    }
}

pub type TemporaResult<T> = Result<T, TemporaError>;
