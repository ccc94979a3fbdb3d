use crate::domain::dashboard::DashboardStats;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub posts_total: u64,
    pub posts_published: u64,
    pub posts_draft: u64,
    pub categories: u64,
    pub tags: u64,
    pub comments_pending: u64,
    pub comments_approved: u64,
    pub active_subscribers: u64,
}

impl From<DashboardStats> for DashboardDto {
    fn from(stats: DashboardStats) -> Self {
        Self {
            posts_total: stats.posts_total,
            posts_published: stats.posts_published,
            posts_draft: stats.posts_draft,
            categories: stats.categories,
            tags: stats.tags,
            comments_pending: stats.comments_pending,
            comments_approved: stats.comments_approved,
            active_subscribers: stats.active_subscribers,
        }
    }
}
