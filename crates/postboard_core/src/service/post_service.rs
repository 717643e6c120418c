//! Post use-case service.
//!
//! # Responsibility
//! - Provide create/edit/get/delete entry points for forum posts.
//! - Answer dashboard listings with optional title search.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - An invalid search form falls back to the unfiltered listing.

use crate::model::post::{Language, Post, PostId};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::RepoResult;
use crate::search::title::filter_by_title;

/// Maximum accepted search query length in characters.
pub const MAX_QUERY_CHARS: usize = 100;

/// Free-text search input for the post dashboard.
///
/// Mirrors a single-field search form: the raw query is kept as typed and
/// normalized on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
}

impl SearchForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns whether the query respects the length cap.
    pub fn is_valid(&self) -> bool {
        self.query.chars().count() <= MAX_QUERY_CHARS
    }

    /// Returns the trimmed query, or `None` when the form is invalid.
    pub fn normalized_query(&self) -> Option<&str> {
        self.is_valid().then(|| self.query.trim())
    }
}

/// Form input for creating a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub language: Language,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            language: Language::default(),
        }
    }
}

/// Use-case service wrapper for post CRUD and dashboard search.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a post from form input and returns its stable ID.
    pub fn create_post(&self, draft: &PostDraft) -> RepoResult<PostId> {
        let mut post = Post::new(
            draft.title.clone(),
            draft.content.clone(),
            draft.author.clone(),
        );
        post.language = draft.language;
        self.repo.create_post(&post)
    }

    /// Replaces an existing post with edited field values.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn edit_post(&self, post: &Post) -> RepoResult<()> {
        self.repo.update_post(post)
    }

    /// Gets one post by stable ID.
    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    /// Deletes one post by stable ID.
    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        self.repo.delete_post(id)
    }

    /// Lists posts for the dashboard, filtered by the search form.
    ///
    /// Posts load in insertion order and filter in memory by title
    /// containment. A blank query or an invalid form returns every post.
    pub fn dashboard(&self, form: &SearchForm) -> RepoResult<Vec<Post>> {
        let posts = self.repo.list_posts(&PostListQuery::default())?;

        let Some(query) = form.normalized_query() else {
            return Ok(posts);
        };
        if query.is_empty() {
            return Ok(posts);
        }

        Ok(filter_by_title(&posts, query)
            .into_iter()
            .cloned()
            .collect())
    }
}
