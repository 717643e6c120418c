//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `posts` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Post::validate()` before SQL mutations.
//! - List order is `created_at ASC, id ASC` (insertion order).
//! - Deletion removes the row; there are no tombstones.

use crate::model::post::{Language, Post, PostId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    author,
    language,
    created_at
FROM posts";

/// Query options for listing posts.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    pub language: Option<Language>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for post CRUD operations.
pub trait PostRepository {
    fn create_post(&self, post: &Post) -> RepoResult<PostId>;
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &Post) -> RepoResult<PostId> {
        post.validate()?;

        self.conn.execute(
            "INSERT INTO posts (id, title, content, author, language, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                post.id.to_string(),
                post.title.as_str(),
                post.content.as_str(),
                post.author.as_str(),
                language_to_db(post.language),
                post.created_at,
            ],
        )?;

        Ok(post.id)
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        post.validate()?;

        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?1,
                content = ?2,
                author = ?3,
                language = ?4
             WHERE id = ?5;",
            params![
                post.title.as_str(),
                post.content.as_str(),
                post.author.as_str(),
                language_to_db(post.language),
                post.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(post.id));
        }

        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_row(row)?));
        }

        Ok(None)
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(language) = query.language {
            sql.push_str(" AND language = ?");
            bind_values.push(Value::Text(language_to_db(language).to_string()));
        }

        sql.push_str(" ORDER BY created_at ASC, id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();

        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }

        Ok(posts)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{id_text}` in posts.id")))?;

    let language_text: String = row.get("language")?;
    let language = parse_language(&language_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid language `{language_text}` in posts.language"
        ))
    })?;

    Ok(Post {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
        author: row.get("author")?,
        language,
        created_at: row.get("created_at")?,
    })
}

fn language_to_db(language: Language) -> &'static str {
    match language {
        Language::English => "english",
        Language::German => "german",
        Language::French => "french",
        Language::Other => "other",
    }
}

fn parse_language(value: &str) -> Option<Language> {
    match value {
        "english" => Some(Language::English),
        "german" => Some(Language::German),
        "french" => Some(Language::French),
        "other" => Some(Language::Other),
        _ => None,
    }
}
