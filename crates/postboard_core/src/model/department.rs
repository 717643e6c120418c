//! Department directory model.
//!
//! # Responsibility
//! - Define the department record and its slug derivation rule.
//!
//! # Invariants
//! - `slug` contains only lowercase alphanumerics separated by single
//!   hyphens.
//! - Slug derivation is deterministic for a given name.

use crate::model::Titled;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for departments.
pub type DepartmentId = Uuid;

static NON_SLUG_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug replacement regex"));
static SLUG_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug shape regex"));

/// Directory entry describing one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Stable global ID used for detail routing.
    pub id: DepartmentId,
    pub name: String,
    /// URL-safe identifier, derived from `name` unless caller-supplied.
    pub slug: String,
    pub description: Option<String>,
}

/// Validation error for department records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentValidationError {
    EmptyName,
    /// Slug is blank or contains characters outside `[a-z0-9-]`.
    InvalidSlug(String),
}

impl Display for DepartmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "department name cannot be blank"),
            Self::InvalidSlug(slug) => write!(f, "invalid department slug: `{slug}`"),
        }
    }
}

impl Error for DepartmentValidationError {}

impl Department {
    /// Creates a department with a generated ID and a slug derived from
    /// `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a department with a caller-provided stable ID.
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id,
            name,
            slug,
            description: None,
        }
    }

    /// Checks name and slug shape constraints.
    pub fn validate(&self) -> Result<(), DepartmentValidationError> {
        if self.name.trim().is_empty() {
            return Err(DepartmentValidationError::EmptyName);
        }
        if !SLUG_SHAPE_RE.is_match(&self.slug) {
            return Err(DepartmentValidationError::InvalidSlug(self.slug.clone()));
        }
        Ok(())
    }
}

impl Titled for Department {
    fn title(&self) -> &str {
        &self.name
    }
}

/// Derives a URL-safe slug from a display name.
///
/// Lowercases the name, collapses every non-alphanumeric run into one
/// hyphen, and trims leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let collapsed = NON_SLUG_RUN_RE.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_string()
}
