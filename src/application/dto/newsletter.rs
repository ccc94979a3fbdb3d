use crate::domain::newsletter::Subscriber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriberDto {
    pub id: i64,
    pub email: String,
    pub active: bool,
    pub subscribed_at: DateTime<Utc>,
    #[serde(default)]
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

impl From<Subscriber> for SubscriberDto {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            id: subscriber.id.into(),
            active: subscriber.is_active(),
            email: subscriber.email.into_inner(),
            subscribed_at: subscriber.subscribed_at,
            unsubscribed_at: subscriber.unsubscribed_at,
        }
    }
}
