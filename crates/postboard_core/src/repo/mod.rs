//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per record type.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes run model validation before SQL mutations.
//! - Read paths reject invalid persisted state (`InvalidData`) instead of
//!   masking it.

pub mod department_repo;
pub mod post_repo;
pub mod task_repo;

use crate::db::DbError;
use crate::model::{
    DepartmentValidationError, ModelValidationError, PostValidationError, TaskValidationError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error shared by all record repositories.
#[derive(Debug)]
pub enum RepoError {
    Validation(ModelValidationError),
    Db(DbError),
    NotFound(Uuid),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ModelValidationError> for RepoError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PostValidationError> for RepoError {
    fn from(value: PostValidationError) -> Self {
        Self::Validation(ModelValidationError::Post(value))
    }
}

impl From<DepartmentValidationError> for RepoError {
    fn from(value: DepartmentValidationError) -> Self {
        Self::Validation(ModelValidationError::Department(value))
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(ModelValidationError::Task(value))
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
