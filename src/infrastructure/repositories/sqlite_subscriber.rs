use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{NewSubscriber, Subscriber, SubscriberId, SubscriberRepository};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const SUBSCRIBER_COLUMNS: &str = "id, email, unsubscribe_token, subscribed_at, unsubscribed_at";

#[derive(Clone)]
pub struct SqliteSubscriberRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSubscriberRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    unsubscribe_token: String,
    subscribed_at: DateTime<Utc>,
    unsubscribed_at: Option<DateTime<Utc>>,
}

impl TryFrom<SubscriberRow> for Subscriber {
    type Error = DomainError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(Subscriber {
            id: SubscriberId::new(row.id)?,
            email: EmailAddress::new(row.email)?,
            unsubscribe_token: row.unsubscribe_token,
            subscribed_at: row.subscribed_at,
            unsubscribed_at: row.unsubscribed_at,
        })
    }
}

#[async_trait]
impl SubscriberRepository for SqliteSubscriberRepository {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "INSERT INTO subscribers (email, unsubscribe_token, subscribed_at) VALUES (?, ?, ?) RETURNING {SUBSCRIBER_COLUMNS}"
        ))
        .bind(subscriber.email.as_str())
        .bind(&subscriber.unsubscribe_token)
        .bind(subscriber.subscribed_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Subscriber::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE email = ?"
        ))
        .bind(email.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Subscriber::try_from).transpose()
    }

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<Subscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE unsubscribe_token = ?"
        ))
        .bind(token)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Subscriber::try_from).transpose()
    }

    async fn reactivate(
        &self,
        id: SubscriberId,
        token: &str,
        at: DateTime<Utc>,
    ) -> DomainResult<Subscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "UPDATE subscribers SET unsubscribe_token = ?, subscribed_at = ?, unsubscribed_at = NULL WHERE id = ? RETURNING {SUBSCRIBER_COLUMNS}"
        ))
        .bind(token)
        .bind(at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("subscriber not found".into()))?;

        Subscriber::try_from(row)
    }

    async fn deactivate(&self, id: SubscriberId, at: DateTime<Utc>) -> DomainResult<Subscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(&format!(
            "UPDATE subscribers SET unsubscribed_at = ? WHERE id = ? RETURNING {SUBSCRIBER_COLUMNS}"
        ))
        .bind(at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("subscriber not found".into()))?;

        Subscriber::try_from(row)
    }

    async fn list_active(&self) -> DomainResult<Vec<Subscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE unsubscribed_at IS NULL ORDER BY subscribed_at, id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Subscriber::try_from).collect()
    }
}
