//! Crate error type
//!
//! Only startup can fail (config loading, registry construction). The
//! simulation itself treats bad requests as refusals, never as errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::IngredientKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("ingredient registry has no entry for {0:?}")]
    MissingIngredient(IngredientKind),
}

pub type Result<T> = std::result::Result<T, Error>;
