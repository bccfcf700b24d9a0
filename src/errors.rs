// /src/errors.rs
//! Error type for the fallible edges of the crate (native marshaling and serialization)
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error("String at index {index} contains an interior nul byte at position {position}")]
    InteriorNul { index: usize, position: usize },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
