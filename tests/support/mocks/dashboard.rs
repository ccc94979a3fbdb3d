// tests/support/mocks/dashboard.rs
use async_trait::async_trait;

use quill::domain::dashboard::{DashboardRepository, DashboardStats};
use quill::domain::errors::DomainResult;

pub struct StaticDashboard(pub DashboardStats);

#[async_trait]
impl DashboardRepository for StaticDashboard {
    async fn stats(&self) -> DomainResult<DashboardStats> {
        Ok(self.0)
    }
}
