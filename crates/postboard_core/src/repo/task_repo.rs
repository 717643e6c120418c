//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the task list and answer title-filtered listings.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before SQL mutations.
//! - Title filtering is case-insensitive substring containment; a blank
//!   filter imposes no constraint.

use crate::model::task::{Task, TaskId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

/// Query options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    /// Case-insensitive title substring filter; blank means all tasks.
    pub title_contains: Option<String>,
}

/// Repository interface for task list operations.
pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    fn set_task_done(&self, id: TaskId, is_done: bool) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (id, title, is_done) VALUES (?1, ?2, ?3);",
            params![
                task.id.to_string(),
                task.title.as_str(),
                bool_to_int(task.is_done),
            ],
        )?;

        Ok(task.id)
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = String::from("SELECT id, title, is_done FROM tasks WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(filter) = query.title_contains.as_deref() {
            let needle = filter.trim();
            if !needle.is_empty() {
                sql.push_str(" AND instr(lower(title), lower(?)) > 0");
                bind_values.push(Value::Text(needle.to_string()));
            }
        }

        sql.push_str(" ORDER BY rowid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn set_task_done(&self, id: TaskId, is_done: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET is_done = ?1 WHERE id = ?2;",
            params![bool_to_int(is_done), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{id_text}` in tasks.id")))?;

    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_done value `{other}` in tasks.is_done"
            )));
        }
    };

    Ok(Task {
        id,
        title: row.get("title")?,
        is_done,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
