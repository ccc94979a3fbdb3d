// tests/support/mocks/subscribers.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

use quill::domain::email::EmailAddress;
use quill::domain::errors::{DomainError, DomainResult};
use quill::domain::newsletter::{NewSubscriber, Subscriber, SubscriberId, SubscriberRepository};

#[derive(Default)]
pub struct InMemorySubscribers {
    inner: Mutex<(i64, BTreeMap<i64, Subscriber>)>,
}

impl InMemorySubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens never leave the service through DTOs, so tests read them here.
    pub fn token_for(&self, email: &str) -> Option<String> {
        let guard = self.inner.lock().unwrap();
        guard
            .1
            .values()
            .find(|s| s.email.as_str() == email)
            .map(|s| s.unsubscribe_token.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().1.len()
    }

    fn update_with<F>(&self, id: SubscriberId, apply: F) -> DomainResult<Subscriber>
    where
        F: FnOnce(&mut Subscriber),
    {
        let mut guard = self.inner.lock().unwrap();
        let subscriber = guard
            .1
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("subscriber not found".into()))?;
        apply(subscriber);
        Ok(subscriber.clone())
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscribers {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let mut guard = self.inner.lock().unwrap();
        let (next_id, map) = &mut *guard;
        if map.values().any(|s| s.email == subscriber.email) {
            return Err(DomainError::Conflict("email already subscribed".into()));
        }
        *next_id += 1;
        let stored = Subscriber {
            id: SubscriberId::new(*next_id).unwrap(),
            email: subscriber.email,
            unsubscribe_token: subscriber.unsubscribe_token,
            subscribed_at: subscriber.subscribed_at,
            unsubscribed_at: None,
        };
        map.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard.1.values().find(|s| s.email == *email).cloned())
    }

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<Subscriber>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard
            .1
            .values()
            .find(|s| s.unsubscribe_token == token)
            .cloned())
    }

    async fn reactivate(
        &self,
        id: SubscriberId,
        token: &str,
        at: DateTime<Utc>,
    ) -> DomainResult<Subscriber> {
        self.update_with(id, |s| {
            s.unsubscribe_token = token.to_string();
            s.subscribed_at = at;
            s.unsubscribed_at = None;
        })
    }

    async fn deactivate(&self, id: SubscriberId, at: DateTime<Utc>) -> DomainResult<Subscriber> {
        self.update_with(id, |s| s.unsubscribed_at = Some(at))
    }

    async fn list_active(&self) -> DomainResult<Vec<Subscriber>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard.1.values().filter(|s| s.is_active()).cloned().collect())
    }
}
