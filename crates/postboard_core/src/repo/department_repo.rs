//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the department directory and its unique slugs.
//!
//! # Invariants
//! - Write paths call `Department::validate()` before SQL mutations.
//! - Detail lookups require both id and slug to match the same row.

use crate::model::department::{Department, DepartmentId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    slug,
    description
FROM departments";

/// Repository interface for the department directory.
pub trait DepartmentRepository {
    fn create_department(&self, department: &Department) -> RepoResult<DepartmentId>;
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Gets one department only when both `id` and `slug` match.
    fn get_department_by_slug(
        &self,
        id: DepartmentId,
        slug: &str,
    ) -> RepoResult<Option<Department>>;
    /// Lists all departments sorted by name.
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_department(&self, department: &Department) -> RepoResult<DepartmentId> {
        department.validate()?;

        self.conn.execute(
            "INSERT INTO departments (id, name, slug, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                department.id.to_string(),
                department.name.as_str(),
                department.slug.as_str(),
                department.description.as_deref(),
            ],
        )?;

        Ok(department.id)
    }

    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn get_department_by_slug(
        &self,
        id: DepartmentId,
        slug: &str,
    ) -> RepoResult<Option<Department>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DEPARTMENT_SELECT_SQL} WHERE id = ?1 AND slug = ?2;"
        ))?;

        let mut rows = stmt.query(params![id.to_string(), slug])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DEPARTMENT_SELECT_SQL} ORDER BY name ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid `{id_text}` in departments.id"))
    })?;

    Ok(Department {
        id,
        name: row.get("name")?,
        slug: row.get("slug")?,
        description: row.get("description")?,
    })
}
