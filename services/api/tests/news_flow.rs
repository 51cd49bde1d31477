//! Repository integration tests against a live PostgreSQL instance
//!
//! These tests need a migrated database reachable through `DATABASE_URL`
//! and are ignored by default. Run them with:
//!
//! ```text
//! cargo test -p api -- --ignored
//! ```

use api::authz::{can_delete_comment, can_modify_news};
use api::error::ApiError;
use api::models::{NewNews, NewUser, NewsKey, UpdateNews};
use api::repositories::{CommentRepository, NewsRepository, SavedNewsRepository, UserRepository};
use api::slug::slugify;
use common::database::{DatabaseConfig, init_pool};
use serial_test::serial;
use sqlx::PgPool;
use uuid::Uuid;

async fn pool() -> PgPool {
    let config = DatabaseConfig::from_env().expect("database config");
    init_pool(&config).await.expect("database connection")
}

/// Random suffix so repeated runs do not collide on unique columns
fn suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

async fn register(users: &UserRepository, name: &str) -> api::models::User {
    users
        .create(&NewUser {
            username: format!("{}_{}", name, suffix()),
            email: None,
            password: "secret1".to_string(),
        })
        .await
        .expect("user creation")
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn article_lifecycle_with_bookmarks_and_comments() {
    let pool = pool().await;
    let users = UserRepository::new(pool.clone());
    let news = NewsRepository::new(pool.clone());
    let comments = CommentRepository::new(pool.clone());
    let saved = SavedNewsRepository::new(pool.clone());

    let alice = register(&users, "alice").await;
    let bob = register(&users, "bob").await;

    // Password round trip
    assert!(users.verify_password(&alice, "secret1").expect("verify"));
    assert!(!users.verify_password(&alice, "wrong").expect("verify"));

    // Slug is a deterministic slugification of the title
    let title = format!("Hi There {}", suffix());
    let article = news
        .create(&NewNews {
            title: title.clone(),
            author_id: alice.id,
            content: "body".to_string(),
            image: None,
            is_published: true,
        })
        .await
        .expect("article creation");
    assert_eq!(article.slug, slugify(&title));
    assert_eq!(article.author.id, alice.id);

    // Published articles show up for everyone, newest first
    let published = news.list_published(bob.id).await.expect("list published");
    assert!(published.iter().all(|a| a.is_published));
    assert!(published.iter().any(|a| a.id == article.id));

    // Saving is idempotent: same bookmark id, created then not created
    let (first, was_created) = saved.save(bob.id, article.id).await.expect("save");
    assert!(was_created);
    let (second, was_created) = saved.save(bob.id, article.id).await.expect("save again");
    assert!(!was_created);
    assert_eq!(first.id, second.id);

    let bookmarks = saved.list_by_user(bob.id).await.expect("list bookmarks");
    assert!(bookmarks.iter().any(|b| b.news.id == article.id));

    // The saved flag is per requester
    let seen_by_bob = news
        .find(&NewsKey::Id(article.id), bob.id)
        .await
        .expect("find")
        .expect("article exists");
    assert!(seen_by_bob.is_saved);
    assert!(!can_modify_news(&seen_by_bob, bob.id));

    // Partial update by the author changes only the supplied fields
    let updated = news
        .update(
            &article,
            &UpdateNews {
                content: Some("updated body".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.content, "updated body");
    assert_eq!(updated.title, title);
    assert_eq!(updated.slug, article.slug);

    // Comments attach to the article, newest first
    let comment = comments
        .create(article.id, bob.id, "nice read")
        .await
        .expect("comment creation");
    assert!(can_delete_comment(&comment, bob.id));
    assert!(!can_delete_comment(&comment, alice.id));

    let listed = comments.list_by_news(article.id).await.expect("list comments");
    assert_eq!(listed.first().map(|c| c.id), Some(comment.id));

    // Deleting the article cascades to comments and bookmarks
    news.delete(&NewsKey::Id(article.id)).await.expect("delete");
    assert!(
        news.find(&NewsKey::Id(article.id), bob.id)
            .await
            .expect("find")
            .is_none()
    );
    assert!(
        comments
            .find_by_id(comment.id)
            .await
            .expect("find comment")
            .is_none()
    );
    let bookmarks = saved.list_by_user(bob.id).await.expect("list bookmarks");
    assert!(bookmarks.iter().all(|b| b.news.id != article.id));

    // A second delete reports not found
    let err = news.delete(&NewsKey::Id(article.id)).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // Updating an article that was deleted underneath us is not found,
    // not a query failure
    let err = news
        .update(
            &article,
            &UpdateNews {
                content: Some("too late".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = saved.unsave(bob.id, article.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn duplicate_username_is_a_validation_error() {
    let pool = pool().await;
    let users = UserRepository::new(pool);

    let username = format!("carol_{}", suffix());
    let new_user = NewUser {
        username,
        email: None,
        password: "secret1".to_string(),
    };

    users.create(&new_user).await.expect("first registration");
    let err = users.create(&new_user).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "username"));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn unpublished_articles_only_appear_on_the_author_dashboard() {
    let pool = pool().await;
    let users = UserRepository::new(pool.clone());
    let news = NewsRepository::new(pool);

    let dave = register(&users, "dave").await;
    let draft = news
        .create(&NewNews {
            title: format!("Draft {}", suffix()),
            author_id: dave.id,
            content: "work in progress".to_string(),
            image: None,
            is_published: false,
        })
        .await
        .expect("draft creation");

    let published = news.list_published(dave.id).await.expect("list published");
    assert!(published.iter().all(|a| a.id != draft.id));

    let own = news.list_by_author(dave.id).await.expect("list by author");
    assert!(own.iter().any(|a| a.id == draft.id));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn lookup_by_slug_matches_lookup_by_id() {
    let pool = pool().await;
    let users = UserRepository::new(pool.clone());
    let news = NewsRepository::new(pool);

    let erin = register(&users, "erin").await;
    let article = news
        .create(&NewNews {
            title: format!("Slugged {}", suffix()),
            author_id: erin.id,
            content: "body".to_string(),
            image: None,
            is_published: true,
        })
        .await
        .expect("article creation");

    let by_slug = news
        .find(&NewsKey::Slug(article.slug.clone()), erin.id)
        .await
        .expect("find by slug")
        .expect("article exists");
    assert_eq!(by_slug.id, article.id);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn whitespace_content_is_rejected() {
    let pool = pool().await;
    let users = UserRepository::new(pool.clone());
    let news = NewsRepository::new(pool.clone());
    let comments = CommentRepository::new(pool);

    let frank = register(&users, "frank").await;

    let err = news
        .create(&NewNews {
            title: format!("Empty {}", suffix()),
            author_id: frank.id,
            content: "   \n".to_string(),
            image: None,
            is_published: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "content"));

    let err = comments
        .create(Uuid::new_v4(), frank.id, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "content"));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL instance"]
async fn references_to_missing_articles_are_validation_errors() {
    let pool = pool().await;
    let users = UserRepository::new(pool.clone());
    let comments = CommentRepository::new(pool.clone());
    let saved = SavedNewsRepository::new(pool);

    let grace = register(&users, "grace").await;
    let missing = Uuid::new_v4();

    let err = comments.create(missing, grace.id, "hello").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "news"));

    let err = saved.save(grace.id, missing).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "news_id"));
}
