use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub posts_total: u64,
    pub posts_published: u64,
    pub posts_draft: u64,
    pub categories: u64,
    pub tags: u64,
    pub comments_pending: u64,
    pub comments_approved: u64,
    pub active_subscribers: u64,
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn stats(&self) -> DomainResult<DashboardStats>;
}
