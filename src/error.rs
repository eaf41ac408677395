//! Error types for the cms-export application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Site errors
    #[error("Request to \"{url}\" failed: {status} {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Unexpected page structure: {0}")]
    Structure(String),

    #[error("Unknown content type: '{0}'")]
    UnknownContentType(String),

    // Export errors
    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("pandoc not found at '{0}'. Please install pandoc and ensure it's in your PATH.")]
    PandocNotFound(String),

    #[error("{0} node(s) failed to export")]
    NodesFailed(u64),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const SITE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const EXPORT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_NODES_FAILED: i32 = 6;
}
