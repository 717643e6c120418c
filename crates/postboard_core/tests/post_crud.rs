use postboard_core::db::{open_db, open_db_in_memory};
use postboard_core::{
    Language, Post, PostListQuery, PostRepository, RepoError, SqlitePostRepository,
};
use uuid::Uuid;

#[test]
fn create_and_get_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);
    let post = Post::new("First post", "hello forum", "ada");

    let id = repo.create_post(&post).unwrap();
    assert_eq!(id, post.id);

    let loaded = repo.get_post(post.id).unwrap().expect("post should exist");
    assert_eq!(loaded, post);
}

#[test]
fn get_missing_post_is_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    assert!(repo.get_post(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn update_replaces_edited_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);
    let mut post = Post::new("Draft title", "draft body", "ada");
    repo.create_post(&post).unwrap();

    post.title = "Final title".to_string();
    post.content = "final body".to_string();
    post.language = Language::French;
    repo.update_post(&post).unwrap();

    let loaded = repo.get_post(post.id).unwrap().expect("post should exist");
    assert_eq!(loaded.title, "Final title");
    assert_eq!(loaded.content, "final body");
    assert_eq!(loaded.language, Language::French);
}

#[test]
fn update_missing_post_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);
    let post = Post::new("Ghost", "content", "ada");

    let err = repo.update_post(&post).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == post.id));
}

#[test]
fn delete_removes_the_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);
    let post = Post::new("Short lived", "content", "ada");
    repo.create_post(&post).unwrap();

    repo.delete_post(post.id).unwrap();
    assert!(repo.get_post(post.id).unwrap().is_none());

    let err = repo.delete_post(post.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == post.id));
}

#[test]
fn list_orders_by_created_at() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    let mut first = Post::new("first", "content", "ada");
    first.created_at = 1_000;
    let mut second = Post::new("second", "content", "ada");
    second.created_at = 2_000;
    let mut third = Post::new("third", "content", "ada");
    third.created_at = 3_000;

    // Insert out of order; listing must come back in creation order.
    repo.create_post(&second).unwrap();
    repo.create_post(&third).unwrap();
    repo.create_post(&first).unwrap();

    let titles: Vec<String> = repo
        .list_posts(&PostListQuery::default())
        .unwrap()
        .into_iter()
        .map(|post| post.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn list_can_filter_by_language() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    let mut english = Post::new("english post", "content", "ada");
    english.language = Language::English;
    let other = Post::new("other post", "content", "brian");
    repo.create_post(&english).unwrap();
    repo.create_post(&other).unwrap();

    let query = PostListQuery {
        language: Some(Language::English),
        ..Default::default()
    };
    let posts = repo.list_posts(&query).unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, english.id);
}

#[test]
fn list_applies_limit_and_offset() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    for (index, title) in ["a", "b", "c"].iter().enumerate() {
        let mut post = Post::new(*title, "content", "ada");
        post.created_at = (index as i64 + 1) * 1_000;
        repo.create_post(&post).unwrap();
    }

    let query = PostListQuery {
        limit: Some(1),
        offset: 1,
        ..Default::default()
    };
    let posts = repo.list_posts(&query).unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "b");
}

#[test]
fn create_rejects_bad_language_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);
    let post = Post::new("Casual", "bad_word_1 here", "ada");

    let err = repo.create_post(&post).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.get_post(post.id).unwrap().is_none());
}

#[test]
fn invalid_persisted_language_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO posts (id, title, content, author, language, created_at)
         VALUES ('11111111-2222-4333-8444-555555555555', 't', 'c', 'a', 'klingon', 5);",
    )
    .unwrap();

    let repo = SqlitePostRepository::new(&conn);
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let err = repo.get_post(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("postboard.db");
    let post = Post::new("Durable", "content", "ada");

    {
        let conn = open_db(&db_path).unwrap();
        SqlitePostRepository::new(&conn)
            .create_post(&post)
            .unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let loaded = SqlitePostRepository::new(&conn)
        .get_post(post.id)
        .unwrap()
        .expect("post should persist");
    assert_eq!(loaded, post);
}
