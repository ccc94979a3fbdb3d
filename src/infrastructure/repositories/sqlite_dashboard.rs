use crate::domain::dashboard::{DashboardRepository, DashboardStats};
use crate::domain::errors::DomainResult;
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteDashboardRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDashboardRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StatsRow {
    posts_total: i64,
    posts_published: i64,
    categories: i64,
    tags: i64,
    comments_pending: i64,
    comments_approved: i64,
    active_subscribers: i64,
}

fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[async_trait]
impl DashboardRepository for SqliteDashboardRepository {
    async fn stats(&self) -> DomainResult<DashboardStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT \
                (SELECT COUNT(1) FROM posts) AS posts_total, \
                (SELECT COUNT(1) FROM posts WHERE published = 1) AS posts_published, \
                (SELECT COUNT(1) FROM categories) AS categories, \
                (SELECT COUNT(1) FROM tags) AS tags, \
                (SELECT COUNT(1) FROM comments WHERE status = 'pending') AS comments_pending, \
                (SELECT COUNT(1) FROM comments WHERE status = 'approved') AS comments_approved, \
                (SELECT COUNT(1) FROM subscribers WHERE unsubscribed_at IS NULL) AS active_subscribers",
        )
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let posts_total = count(row.posts_total);
        let posts_published = count(row.posts_published);
        Ok(DashboardStats {
            posts_total,
            posts_published,
            posts_draft: posts_total.saturating_sub(posts_published),
            categories: count(row.categories),
            tags: count(row.tags),
            comments_pending: count(row.comments_pending),
            comments_approved: count(row.comments_approved),
            active_subscribers: count(row.active_subscribers),
        })
    }
}
