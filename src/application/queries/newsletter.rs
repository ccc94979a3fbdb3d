use std::sync::Arc;

use crate::{
    application::{dto::SubscriberDto, error::ApplicationResult},
    domain::newsletter::SubscriberRepository,
};

pub struct NewsletterQueryService {
    subscribers: Arc<dyn SubscriberRepository>,
}

impl NewsletterQueryService {
    pub fn new(subscribers: Arc<dyn SubscriberRepository>) -> Self {
        Self { subscribers }
    }

    pub async fn list_active_subscribers(&self) -> ApplicationResult<Vec<SubscriberDto>> {
        let active = self.subscribers.list_active().await?;
        Ok(active.into_iter().map(Into::into).collect())
    }
}
