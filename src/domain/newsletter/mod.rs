use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub i64);

impl SubscriberId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("subscriber id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SubscriberId> for i64 {
    fn from(value: SubscriberId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: EmailAddress,
    pub unsubscribe_token: String,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

impl Subscriber {
    pub fn is_active(&self) -> bool {
        self.unsubscribed_at.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: EmailAddress,
    pub unsubscribe_token: String,
    pub subscribed_at: DateTime<Utc>,
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber>;
    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>>;
    async fn find_by_token(&self, token: &str) -> DomainResult<Option<Subscriber>>;
    /// Mark a lapsed subscriber active again under a fresh token.
    async fn reactivate(
        &self,
        id: SubscriberId,
        token: &str,
        at: DateTime<Utc>,
    ) -> DomainResult<Subscriber>;
    async fn deactivate(&self, id: SubscriberId, at: DateTime<Utc>) -> DomainResult<Subscriber>;
    async fn list_active(&self) -> DomainResult<Vec<Subscriber>>;
}
