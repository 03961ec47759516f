use std::path::PathBuf;
use thiserror::Error;

/// Why a submission did not produce a user. Network failures and non-2xx
/// statuses are distinguished here but take the same path in the form state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid endpoint '{0}': expected an http:// or https:// url")]
    InvalidEndpoint(String),

    #[error("invalid {0}: must be greater than zero")]
    ZeroDuration(&'static str),
}
