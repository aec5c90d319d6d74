use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Classify a database error raised while operating on `entity`.
    pub fn from_db(entity: &str, err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::not_found(entity),
            other => match other.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) => {
                    Self::InvalidInput(format!("{} already exists: {}", entity, msg))
                }
                Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                    Self::InvalidInput(format!("{} references a missing record: {}", entity, msg))
                }
                _ => Self::Storage(other.to_string()),
            },
        }
    }
}
