//! Department directory service.
//!
//! # Responsibility
//! - Provide add/detail/list entry points for the department directory.
//!
//! # Invariants
//! - New departments derive their slug from the submitted name.
//! - Detail lookups require the id/slug pair to match.

use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for the department directory.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a department from a submitted name and returns its stable ID.
    pub fn add_department(&self, name: impl Into<String>) -> RepoResult<DepartmentId> {
        let department = Department::new(name);
        self.repo.create_department(&department)
    }

    /// Gets one department by stable ID.
    pub fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        self.repo.get_department(id)
    }

    /// Gets the detail record; both id and slug must match.
    ///
    /// A missing or mismatched row is `Ok(None)`; the not-found response
    /// belongs to the caller.
    pub fn get_department_detail(
        &self,
        id: DepartmentId,
        slug: &str,
    ) -> RepoResult<Option<Department>> {
        self.repo.get_department_by_slug(id, slug)
    }

    /// Lists all departments sorted by name.
    pub fn list_departments(&self) -> RepoResult<Vec<Department>> {
        self.repo.list_departments()
    }
}
