//! Forum post domain model.
//!
//! # Responsibility
//! - Define the canonical post record and its field constraints.
//! - Run bad-language moderation as part of post validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another post.
//! - `validate()` must pass before any repository write.
//! - Moderation inspects `content` only and never rewrites it.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::Titled;
use crate::moderation::{default_validator, ValidationResult};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for forum posts.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PostId = Uuid;

/// Maximum accepted title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;
/// Maximum accepted author name length in characters.
pub const MAX_AUTHOR_CHARS: usize = 30;

/// Language tag attached to each post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    German,
    French,
    /// Fallback for anything the author did not classify.
    #[default]
    Other,
}

/// Canonical forum post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable global ID used for detail/edit/delete routing.
    pub id: PostId,
    /// Human-facing headline, capped at [`MAX_TITLE_CHARS`].
    pub title: String,
    /// Body text; subject to bad-language moderation.
    pub content: String,
    /// Display name of the author, capped at [`MAX_AUTHOR_CHARS`].
    pub author: String,
    /// Language tag, defaults to [`Language::Other`].
    pub language: Language,
    /// Creation timestamp in unix epoch milliseconds.
    pub created_at: i64,
}

/// Validation error for post field constraints and moderation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize, max: usize },
    EmptyContent,
    EmptyAuthor,
    AuthorTooLong { chars: usize, max: usize },
    /// Content was rejected by the bad-language validator.
    BadLanguage(String),
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "post title cannot be blank"),
            Self::TitleTooLong { chars, max } => {
                write!(f, "post title has {chars} characters, maximum is {max}")
            }
            Self::EmptyContent => write!(f, "post content cannot be blank"),
            Self::EmptyAuthor => write!(f, "post author cannot be blank"),
            Self::AuthorTooLong { chars, max } => {
                write!(f, "post author has {chars} characters, maximum is {max}")
            }
            Self::BadLanguage(reason) => write!(f, "{reason}"),
        }
    }
}

impl Error for PostValidationError {}

impl Post {
    /// Creates a new post with a generated stable ID and default language.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, author)
    }

    /// Creates a new post with a caller-provided stable ID.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            language: Language::default(),
            created_at: now_epoch_ms(),
        }
    }

    /// Checks field constraints and content moderation.
    ///
    /// Moderation uses the built-in blacklist; callers with a custom
    /// blacklist run `BadWordValidator::validate` on `content` themselves.
    pub fn validate(&self) -> Result<(), PostValidationError> {
        if self.title.trim().is_empty() {
            return Err(PostValidationError::EmptyTitle);
        }
        let title_chars = self.title.chars().count();
        if title_chars > MAX_TITLE_CHARS {
            return Err(PostValidationError::TitleTooLong {
                chars: title_chars,
                max: MAX_TITLE_CHARS,
            });
        }

        if self.author.trim().is_empty() {
            return Err(PostValidationError::EmptyAuthor);
        }
        let author_chars = self.author.chars().count();
        if author_chars > MAX_AUTHOR_CHARS {
            return Err(PostValidationError::AuthorTooLong {
                chars: author_chars,
                max: MAX_AUTHOR_CHARS,
            });
        }

        if self.content.trim().is_empty() {
            return Err(PostValidationError::EmptyContent);
        }
        match default_validator().validate(&self.content) {
            ValidationResult::Accepted => Ok(()),
            ValidationResult::Rejected(reason) => Err(PostValidationError::BadLanguage(reason)),
        }
    }
}

impl Titled for Post {
    fn title(&self) -> &str {
        &self.title
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
