//! Error types for the fallible parsing paths.
//!
//! Coercion never fails, and the public JSON decoders collapse failures into empty
//! containers. Only the `try_` decoders and the YAML deserializer surface these.

use thiserror::Error;

/// Errors that can occur while parsing JSON or YAML text.
#[derive(Error, Debug)]
pub enum ValueError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The JSON was well-formed but its top-level shape was not the one requested.
    #[error("unexpected top-level JSON {found}, expected {expected}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    /// The input string was not a valid YAML document for the target type.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias used throughout multival-core.
pub type Result<T> = std::result::Result<T, ValueError>;
