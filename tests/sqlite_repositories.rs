// tests/sqlite_repositories.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use quill::application::commands::comments::SubmitCommentCommand;
use quill::application::commands::newsletter::SubscribeCommand;
use quill::application::commands::posts::{CreatePostCommand, UpdatePostCommand};
use quill::application::commands::taxonomy::{CreateCategoryCommand, CreateTagCommand};
use quill::application::queries::posts::{GetPostByIdQuery, ListPostsQuery};
use quill::application::services::{ApplicationServices, Repositories, SlugSettings};
use quill::domain::errors::DomainError;
use quill::domain::post::{NewPost, PostBody, PostTitle, PostWriteRepository};
use quill::domain::slug::{Slug, SlugExistenceChecker};
use quill::infrastructure::database;
use quill::infrastructure::repositories::{
    SqliteCategoryRepository, SqliteCommentRepository, SqliteDashboardRepository,
    SqlitePostReadRepository, SqlitePostWriteRepository, SqliteSubscriberRepository,
    SqliteTagRepository,
};
use quill::infrastructure::util::DefaultSlugGenerator;
use sqlx::SqlitePool;

mod support;

use support::{DummyClock, SequentialTokens};

async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1).await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    Arc::new(pool)
}

fn services(pool: &Arc<SqlitePool>) -> ApplicationServices {
    let post_read = Arc::new(SqlitePostReadRepository::new(Arc::clone(pool)));
    let categories = Arc::new(SqliteCategoryRepository::new(Arc::clone(pool)));
    let tags = Arc::new(SqliteTagRepository::new(Arc::clone(pool)));
    let repos = Repositories {
        post_write: Arc::new(SqlitePostWriteRepository::new(Arc::clone(pool))),
        post_read: post_read.clone(),
        post_slugs: post_read,
        categories: categories.clone(),
        category_slugs: categories,
        tags: tags.clone(),
        tag_slugs: tags,
        comments: Arc::new(SqliteCommentRepository::new(Arc::clone(pool))),
        subscribers: Arc::new(SqliteSubscriberRepository::new(Arc::clone(pool))),
        dashboard: Arc::new(SqliteDashboardRepository::new(Arc::clone(pool))),
    };
    ApplicationServices::new(
        repos,
        Arc::new(DummyClock),
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequentialTokens::default()),
        SlugSettings::default(),
    )
}

fn new_post(title: &str, slug: &str) -> NewPost {
    let now = Utc::now();
    NewPost {
        title: PostTitle::new(title).unwrap(),
        slug: Slug::new(slug).unwrap(),
        excerpt: None,
        body: PostBody::new("body").unwrap(),
        category_id: None,
        tag_ids: vec![],
        published: false,
        published_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn duplicate_slug_insert_is_reported_as_slug_conflict() {
    let pool = memory_pool().await;
    let writer = SqlitePostWriteRepository::new(Arc::clone(&pool));

    writer.insert(new_post("One", "same")).await.unwrap();
    let err = writer.insert(new_post("Two", "same")).await.unwrap_err();
    assert!(matches!(err, DomainError::SlugConflict(_)), "{err:?}");
}

#[tokio::test]
async fn existence_check_ignores_the_edited_row() {
    let pool = memory_pool().await;
    let writer = SqlitePostWriteRepository::new(Arc::clone(&pool));
    let reader = SqlitePostReadRepository::new(Arc::clone(&pool));

    let post = writer.insert(new_post("One", "taken")).await.unwrap();
    assert!(reader.slug_exists("taken", None).await.unwrap());
    assert!(!reader.slug_exists("taken", Some(post.id.0)).await.unwrap());
    assert!(!reader.slug_exists("free", None).await.unwrap());
}

#[tokio::test]
async fn posts_round_trip_with_tags_and_category() {
    let pool = memory_pool().await;
    let services = services(&pool);

    let category = services
        .taxonomy_commands
        .create_category(CreateCategoryCommand {
            name: "Guides".into(),
            description: None,
        })
        .await
        .unwrap();
    let rust = services
        .taxonomy_commands
        .create_tag(CreateTagCommand { name: "Rust".into() })
        .await
        .unwrap();
    let sql = services
        .taxonomy_commands
        .create_tag(CreateTagCommand { name: "SQL".into() })
        .await
        .unwrap();

    let created = services
        .post_commands
        .create_post(CreatePostCommand {
            title: "Querying with sqlx".into(),
            body: "Body".into(),
            excerpt: Some("Short".into()),
            slug: None,
            category_id: Some(category.id),
            tag_ids: vec![sql.id, rust.id, rust.id],
            publish: true,
        })
        .await
        .unwrap();

    let fetched = services
        .post_queries
        .get_post_by_id(GetPostByIdQuery {
            id: created.id,
            include_drafts: false,
        })
        .await
        .unwrap();
    assert_eq!(fetched.slug, "querying-with-sqlx");
    assert_eq!(fetched.category_id, Some(category.id));
    assert_eq!(fetched.tag_ids, vec![rust.id, sql.id]);
    assert_eq!(fetched.excerpt.as_deref(), Some("Short"));

    services
        .taxonomy_commands
        .delete_category(category.id)
        .await
        .unwrap();
    services.taxonomy_commands.delete_tag(sql.id).await.unwrap();

    let after = services
        .post_queries
        .get_post_by_id(GetPostByIdQuery {
            id: created.id,
            include_drafts: false,
        })
        .await
        .unwrap();
    assert_eq!(after.category_id, None);
    assert_eq!(after.tag_ids, vec![rust.id]);
}

#[tokio::test]
async fn title_edit_regenerates_slug_against_the_database() {
    let pool = memory_pool().await;
    let services = services(&pool);
    let commands = &services.post_commands;

    let create = |title: &str| CreatePostCommand {
        title: title.into(),
        body: "b".into(),
        excerpt: None,
        slug: None,
        category_id: None,
        tag_ids: vec![],
        publish: false,
    };
    commands.create_post(create("Shared Name")).await.unwrap();
    let other = commands.create_post(create("Other")).await.unwrap();

    let renamed = commands
        .update_post(UpdatePostCommand {
            id: other.id,
            title: Some("Shared Name".into()),
            ..UpdatePostCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(renamed.slug, "shared-name-1");
}

#[tokio::test]
async fn search_and_paging_filter_in_sql() {
    let pool = memory_pool().await;
    let writer = SqlitePostWriteRepository::new(Arc::clone(&pool));
    let base = Utc::now();

    for (i, title) in ["Alpha 100%", "Beta", "Gamma alpha"].iter().enumerate() {
        let mut post = new_post(title, &format!("post-{i}"));
        post.created_at = base + Duration::seconds(i as i64);
        post.published = true;
        post.published_at = Some(post.created_at);
        writer.insert(post).await.unwrap();
    }

    let services = services(&pool);
    let hits = services
        .post_queries
        .list_posts(ListPostsQuery {
            search: Some("ALPHA".into()),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(hits.total, 2);
    assert_eq!(hits.items[0].title, "Gamma alpha");

    // `%` is matched literally
    let literal = services
        .post_queries
        .list_posts(ListPostsQuery {
            search: Some("100%".into()),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(literal.total, 1);

    let second_page = services
        .post_queries
        .list_posts(ListPostsQuery {
            page: Some(2),
            page_size: Some(2),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(second_page.total, 3);
    assert_eq!(second_page.items.len(), 1);
    assert_eq!(second_page.items[0].title, "Alpha 100%");
}

#[tokio::test]
async fn comments_cascade_and_dashboard_counts() {
    let pool = memory_pool().await;
    let services = services(&pool);

    let post = services
        .post_commands
        .create_post(CreatePostCommand {
            title: "Live".into(),
            body: "b".into(),
            excerpt: None,
            slug: None,
            category_id: None,
            tag_ids: vec![],
            publish: true,
        })
        .await
        .unwrap();
    let submit = |parent_id: Option<i64>| SubmitCommentCommand {
        post_id: post.id,
        parent_id,
        author_name: "Ann".into(),
        author_email: "ann@example.com".into(),
        body: "text".into(),
    };
    let root = services
        .comment_commands
        .submit_comment(submit(None))
        .await
        .unwrap();
    services
        .comment_commands
        .submit_comment(submit(Some(root.id)))
        .await
        .unwrap();
    let kept = services
        .comment_commands
        .submit_comment(submit(None))
        .await
        .unwrap();
    services.comment_commands.approve_comment(kept.id).await.unwrap();

    services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: "fan@example.com".into(),
        })
        .await
        .unwrap();

    let stats = services.dashboard_queries.stats().await.unwrap();
    assert_eq!(stats.posts_total, 1);
    assert_eq!(stats.posts_published, 1);
    assert_eq!(stats.comments_pending, 2);
    assert_eq!(stats.comments_approved, 1);
    assert_eq!(stats.active_subscribers, 1);

    services.comment_commands.delete_comment(root.id).await.unwrap();
    let stats = services.dashboard_queries.stats().await.unwrap();
    assert_eq!(stats.comments_pending, 0);
    assert_eq!(stats.comments_approved, 1);
}

#[tokio::test]
async fn resubscribing_in_another_case_reuses_the_row() {
    let pool = memory_pool().await;
    let services = services(&pool);

    let first = services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: "dup@example.com".into(),
        })
        .await
        .unwrap();
    let again = services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: "DUP@example.com".into(),
        })
        .await
        .unwrap();
    assert_eq!(first.id, again.id);

    let listed = services
        .newsletter_queries
        .list_active_subscribers()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}
