//! Store integration tests against an in-memory SQLite database.
//!
//! These exercise the generic query engine end to end: pagination
//! windows, substring filtering, dynamic sorting, the merge-update
//! protocol, and the relationship finders.

use chrono::Utc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use newsroom::errors::AppError;
use newsroom::infra::repositories::entities::{author, news};
use newsroom::infra::repositories::{
    AuthorRepository, AuthorStore, CommentRepository, CommentStore, NewsRepository, NewsStore,
    TagRepository, TagStore, UserRepository, UserStore,
};
use newsroom::infra::Migrator;
use newsroom::types::{Pagination, SearchFilter, SortDirection};

/// Fresh in-memory database with the full schema applied.
///
/// A single pooled connection keeps every statement on the same
/// in-memory database.
async fn connect() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

async fn seed_authors(store: &AuthorStore, count: usize) {
    for i in 1..=count {
        store
            .create(format!("author-{:02}", i))
            .await
            .expect("seed author");
    }
}

#[tokio::test]
async fn pagination_returns_the_requested_window() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    seed_authors(&authors, 25).await;

    let page = authors
        .read_all(
            &Pagination::new(2, 10, "name", SortDirection::Asc),
            &SearchFilter::none(),
        )
        .await
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 10);
    let names: Vec<&str> = page.items.iter().map(|a| a.name.as_str()).collect();
    let expected: Vec<String> = (11..=20).map(|i| format!("author-{:02}", i)).collect();
    assert_eq!(names, expected.iter().map(String::as_str).collect::<Vec<_>>());

    // A window past the data is empty, not an error
    let past_the_end = authors
        .read_all(
            &Pagination::new(5, 10, "name", SortDirection::Asc),
            &SearchFilter::none(),
        )
        .await
        .unwrap();
    assert!(past_the_end.items.is_empty());
    assert_eq!(past_the_end.total, 25);
}

#[tokio::test]
async fn window_never_exceeds_page_size() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    seed_authors(&authors, 25).await;

    let page = authors
        .read_all(
            &Pagination::new(1, 7, "id", SortDirection::Asc),
            &SearchFilter::none(),
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 7);
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 4);
}

#[tokio::test]
async fn descending_sort_reverses_the_window() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    seed_authors(&authors, 25).await;

    let page = authors
        .read_all(
            &Pagination::new(1, 5, "name", SortDirection::Desc),
            &SearchFilter::none(),
        )
        .await
        .unwrap();

    let names: Vec<&str> = page.items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "author-25",
            "author-24",
            "author-23",
            "author-22",
            "author-21"
        ]
    );
}

#[tokio::test]
async fn substring_filter_matches_only_containing_rows() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    for name in ["rustacean", "crustacean", "gopher", "pythonista"] {
        authors.create(name.to_string()).await.unwrap();
    }

    let page = authors
        .read_all(
            &Pagination::new(1, 10, "name", SortDirection::Asc),
            &SearchFilter::new("name", "rust"),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|a| a.name.contains("rust")));

    // An empty filter value matches every row
    let unfiltered = authors
        .read_all(
            &Pagination::new(1, 10, "name", SortDirection::Asc),
            &SearchFilter::new("name", ""),
        )
        .await
        .unwrap();
    assert_eq!(unfiltered.total, 4);
}

#[tokio::test]
async fn unknown_fields_fail_fast() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    seed_authors(&authors, 2).await;

    let err = authors
        .read_all(
            &Pagination::new(1, 10, "nonexistent", SortDirection::Asc),
            &SearchFilter::none(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidField(_)));

    let err = authors
        .read_all(
            &Pagination::new(1, 10, "name", SortDirection::Asc),
            &SearchFilter::new("nonexistent", "value"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidField(_)));
}

#[tokio::test]
async fn create_then_read_round_trips() {
    let db = connect().await;
    let authors = AuthorStore::new(db);

    let created = authors.create("Margaret".to_string()).await.unwrap();
    assert!(created.id > 0);

    let loaded = authors.read_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn update_merges_only_mutable_fields() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    let created = authors.create("Before".to_string()).await.unwrap();

    let now = Utc::now();
    let incoming = author::Model {
        id: created.id,
        name: "After".to_string(),
        // Ignored by the merge
        created_at: now,
        updated_at: now,
    };
    let updated = authors.update(incoming).await.unwrap().unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_missing_id_returns_none() {
    let db = connect().await;
    let authors = AuthorStore::new(db);

    let now = Utc::now();
    let incoming = author::Model {
        id: 999,
        name: "Nobody".to_string(),
        created_at: now,
        updated_at: now,
    };

    assert!(authors.update(incoming).await.unwrap().is_none());
    // No phantom row was created: this is not an upsert
    assert!(!authors.exists_by_id(999).await.unwrap());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let db = connect().await;
    let authors = AuthorStore::new(db);
    let created = authors.create("Short-lived".to_string()).await.unwrap();

    assert!(authors.exists_by_id(created.id).await.unwrap());
    assert!(authors.delete_by_id(created.id).await.unwrap());
    assert!(!authors.exists_by_id(created.id).await.unwrap());
    assert!(!authors.delete_by_id(created.id).await.unwrap());
}

#[tokio::test]
async fn news_tag_set_is_replaced_wholesale() {
    let db = connect().await;
    let authors = AuthorStore::new(db.clone());
    let tags = TagStore::new(db.clone());
    let news = NewsStore::new(db);

    let author = authors.create("Reporter".to_string()).await.unwrap();
    let first = tags.create("economy".to_string()).await.unwrap();
    let second = tags.create("housing".to_string()).await.unwrap();
    let third = tags.create("climate".to_string()).await.unwrap();

    let created = news
        .create(
            "A headline".to_string(),
            "Body of the piece".to_string(),
            authors.reference(author.id),
            vec![first.id, second.id],
        )
        .await
        .unwrap();
    assert_eq!(
        news.tag_ids(created.id).await.unwrap(),
        vec![first.id, second.id]
    );

    let now = Utc::now();
    let incoming = news::Model {
        id: created.id,
        title: "A sharper headline".to_string(),
        content: created.content.clone(),
        author_id: author.id,
        created_at: now,
        updated_at: now,
    };
    let updated = news.update(incoming, vec![third.id]).await.unwrap().unwrap();

    assert_eq!(updated.title, "A sharper headline");
    assert_eq!(updated.created_at, created.created_at);
    // The old associations are gone, not merged
    assert_eq!(news.tag_ids(created.id).await.unwrap(), vec![third.id]);
}

#[tokio::test]
async fn relationship_finders_follow_the_joins() {
    let db = connect().await;
    let authors = AuthorStore::new(db.clone());
    let tags = TagStore::new(db.clone());
    let comments = CommentStore::new(db.clone());
    let news = NewsStore::new(db);

    let author = authors.create("Columnist".to_string()).await.unwrap();
    let tag = tags.create("opinion".to_string()).await.unwrap();
    let piece = news
        .create(
            "On pagination".to_string(),
            "A considered argument".to_string(),
            authors.reference(author.id),
            vec![tag.id],
        )
        .await
        .unwrap();
    let first_comment = comments
        .create("Strongly agree".to_string(), piece.id)
        .await
        .unwrap();
    let second_comment = comments
        .create("Strongly disagree".to_string(), piece.id)
        .await
        .unwrap();

    let found_author = authors.read_by_news_id(piece.id).await.unwrap().unwrap();
    assert_eq!(found_author.id, author.id);

    let found_tags = tags.read_by_news_id(piece.id).await.unwrap();
    assert_eq!(found_tags.len(), 1);
    assert_eq!(found_tags[0].name, "opinion");

    let found_comments = comments.read_by_news_id(piece.id).await.unwrap();
    let ids: Vec<i32> = found_comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first_comment.id, second_comment.id]);

    // A news id with no rows behind it finds nothing
    assert!(authors.read_by_news_id(9999).await.unwrap().is_none());
    assert!(tags.read_by_news_id(9999).await.unwrap().is_empty());
}

#[tokio::test]
async fn username_lookup_finds_exact_matches() {
    let db = connect().await;
    let users = UserStore::new(db);

    users
        .create("jdoe".to_string(), "argon2-hash".to_string())
        .await
        .unwrap();

    let found = users.find_by_username("jdoe").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().username, "jdoe");

    assert!(users.find_by_username("nobody").await.unwrap().is_none());
}
