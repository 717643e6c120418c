use postboard_core::{
    Language, Post, PostValidationError, BAD_LANGUAGE_MESSAGE, MAX_AUTHOR_CHARS, MAX_TITLE_CHARS,
};
use uuid::Uuid;

#[test]
fn new_post_sets_defaults() {
    let post = Post::new("First post", "hello forum", "ada");

    assert!(!post.id.is_nil());
    assert_eq!(post.language, Language::Other);
    assert!(post.created_at > 0);
    assert!(post.validate().is_ok());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut post = Post::with_id(id, "Intro", "welcome aboard", "ada");
    post.language = Language::German;
    post.created_at = 1_700_000_000_000;

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Intro");
    assert_eq!(json["content"], "welcome aboard");
    assert_eq!(json["author"], "ada");
    assert_eq!(json["language"], "german");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Post = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, post);
}

#[test]
fn validate_rejects_blank_title() {
    let post = Post::new("   ", "content", "ada");
    assert_eq!(post.validate().unwrap_err(), PostValidationError::EmptyTitle);
}

#[test]
fn validate_rejects_over_long_title() {
    let post = Post::new("x".repeat(MAX_TITLE_CHARS + 1), "content", "ada");
    assert_eq!(
        post.validate().unwrap_err(),
        PostValidationError::TitleTooLong {
            chars: MAX_TITLE_CHARS + 1,
            max: MAX_TITLE_CHARS,
        }
    );
}

#[test]
fn validate_rejects_blank_author() {
    let post = Post::new("Title", "content", " ");
    assert_eq!(
        post.validate().unwrap_err(),
        PostValidationError::EmptyAuthor
    );
}

#[test]
fn validate_rejects_over_long_author() {
    let post = Post::new("Title", "content", "y".repeat(MAX_AUTHOR_CHARS + 1));
    assert_eq!(
        post.validate().unwrap_err(),
        PostValidationError::AuthorTooLong {
            chars: MAX_AUTHOR_CHARS + 1,
            max: MAX_AUTHOR_CHARS,
        }
    );
}

#[test]
fn validate_rejects_blank_content() {
    let post = Post::new("Title", "\n\t ", "ada");
    assert_eq!(
        post.validate().unwrap_err(),
        PostValidationError::EmptyContent
    );
}

#[test]
fn validate_moderates_content_with_default_blacklist() {
    let post = Post::new("Casual", "this has bad_word_2 inside", "ada");
    assert_eq!(
        post.validate().unwrap_err(),
        PostValidationError::BadLanguage(BAD_LANGUAGE_MESSAGE.to_string())
    );
}

#[test]
fn title_is_not_moderated() {
    let post = Post::new("bad_word_1 in the headline", "clean body", "ada");
    assert!(post.validate().is_ok());
}
