//! Error types for startup wiring, configuration, and preference storage.
//!
//! None of these are fatal to the page. The boot sequence logs them per
//! feature and carries on with the next one.

/// Failure while attaching one feature to the page.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    #[error("invalid counter target: {raw:?}")]
    InvalidCount { raw: String },
    #[error("javascript error: {0}")]
    Js(String),
}

/// Failure while reading or validating [`crate::config::SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Failure while persisting a preference.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to write preference: {0}")]
    Write(String),
}
