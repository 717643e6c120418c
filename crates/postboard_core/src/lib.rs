//! Core domain logic for Postboard.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod moderation;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Department, DepartmentId, DepartmentValidationError, Language, ModelValidationError, Post,
    PostId, PostValidationError, Task, TaskId, TaskValidationError, Titled, MAX_AUTHOR_CHARS,
    MAX_TITLE_CHARS,
};
pub use moderation::{default_validator, BadWordValidator, ValidationResult, BAD_LANGUAGE_MESSAGE};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskListQuery, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use search::title::filter_by_title;
pub use service::department_service::DepartmentService;
pub use service::post_service::{PostDraft, PostService, SearchForm, MAX_QUERY_CHARS};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
