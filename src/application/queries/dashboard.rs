use std::sync::Arc;

use crate::{
    application::{dto::DashboardDto, error::ApplicationResult},
    domain::dashboard::DashboardRepository,
};

pub struct DashboardQueryService {
    repo: Arc<dyn DashboardRepository>,
}

impl DashboardQueryService {
    pub fn new(repo: Arc<dyn DashboardRepository>) -> Self {
        Self { repo }
    }

    pub async fn stats(&self) -> ApplicationResult<DashboardDto> {
        Ok(self.repo.stats().await?.into())
    }
}
