use crate::model::CategoryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
