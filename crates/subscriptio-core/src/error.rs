//! Storefront error types.

use thiserror::Error;

/// Form validation failures.
///
/// These are always surfaced inline next to the form that produced them and
/// block submission until the user corrects the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email field does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The credential check rejected the login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The collaborator behind a form failed for another reason.
    #[error("{0}")]
    Rejected(String),
}

/// Failure raised while rendering a region's content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Content could not be produced from the data it was given.
    #[error("render failed in {region}: {message}")]
    Content { region: String, message: String },

    /// Data a region requires was not present.
    #[error("missing data for {0}")]
    MissingData(String),
}

impl RenderError {
    /// Create a content error for a named region.
    pub fn content(region: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Content {
            region: region.into(),
            message: message.into(),
        }
    }
}

/// Durable client storage failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is not available in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// Storage refused the operation (quota, privacy mode).
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Configuration parse failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML body could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not acceptable.
    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}
