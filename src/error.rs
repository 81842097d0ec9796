//! Error types for democtl.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required credential field was left empty during setup.
    #[error("missing required value: {0}")]
    MissingCredential(&'static str),

    /// The configuration store is absent or cannot be parsed.
    #[error("invalid configuration store: {0}")]
    InvalidConfig(String),

    /// Virtual environment creation or dependency install failed.
    #[error("environment setup failed: {0}")]
    Environment(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
