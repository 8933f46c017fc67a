//! Error types for the Yahoo Fantasy data cache

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, YahooError>;

#[derive(Error, Debug)]
pub enum YahooError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("{env_var} environment variable not set")]
    MissingConfig { env_var: String },

    #[error("Invalid data key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("No saved data for key {key:?} at {}", .path.display())]
    NotFound { key: String, path: PathBuf },

    #[error("Saved data at {} is malformed: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize data for key {key:?}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected Yahoo API response: no `{expected}` found")]
    UnexpectedResponse { expected: String },

    #[error("Cannot build {model} (field `{field}`): {message}")]
    ModelConstruction {
        model: String,
        field: String,
        message: String,
    },
}

impl YahooError {
    /// Build a `ModelConstruction` error from a failed deserialization.
    ///
    /// `field` is the path to the offending value (`stats[1].stat_id`,
    /// `game_weeks[0].start`), or `<root>` when the data as a whole has the
    /// wrong shape.
    pub fn model_construction(
        model: &str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let path = err.path().to_string();
        let source = err.into_inner();
        let message = source.to_string();
        let path = if path == "." { None } else { Some(path) };

        // A missing field has no value to stop at, so the path ends at its parent.
        let field = match (missing_field(&message), path) {
            (Some(name), Some(parent)) => format!("{}.{}", parent, name),
            (Some(name), None) => name.to_string(),
            (None, Some(path)) => path,
            (None, None) => ROOT_FIELD.to_string(),
        };

        YahooError::ModelConstruction {
            model: model.to_string(),
            field,
            message,
        }
    }

    /// Prefix the field of a `ModelConstruction` error with its position in a sequence.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            YahooError::ModelConstruction {
                model,
                field,
                message,
            } => {
                let field = if field == ROOT_FIELD {
                    format!("[{}]", index)
                } else {
                    format!("[{}].{}", index, field)
                };
                YahooError::ModelConstruction {
                    model,
                    field,
                    message,
                }
            }
            other => other,
        }
    }
}

/// Field reported when the whole value is at fault.
pub(crate) const ROOT_FIELD: &str = "<root>";

fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}
