use postboard_core::db::migrations::{apply_migrations, latest_version};
use postboard_core::db::{open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn fresh_database_reaches_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn all_tables_exist_after_migration() {
    let conn = open_db_in_memory().unwrap();
    for table in ["posts", "departments", "tasks"] {
        let count: i64 = conn
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "missing table {table}");
    }
}

#[test]
fn applying_migrations_twice_is_a_no_op() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, latest_supported }
            if db_version == latest_version() + 1 && latest_supported == latest_version()
    ));
}

#[test]
fn partially_migrated_database_catches_up() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS posts (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author TEXT NOT NULL,
            language TEXT NOT NULL DEFAULT 'other',
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
        );
        PRAGMA user_version = 1;",
    )
    .unwrap();

    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let count: i64 = conn
        .query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}
