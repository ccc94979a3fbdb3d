// src/application/commands/newsletter.rs
use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        dto::SubscriberDto,
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::TokenGenerator},
    },
    domain::{
        email::EmailAddress,
        errors::DomainError,
        newsletter::{NewSubscriber, SubscriberRepository},
    },
};

pub struct SubscribeCommand {
    pub email: String,
}

pub struct UnsubscribeCommand {
    pub token: String,
}

pub struct NewsletterCommandService {
    subscribers: Arc<dyn SubscriberRepository>,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(
        subscribers: Arc<dyn SubscriberRepository>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscribers,
            tokens,
            clock,
        }
    }

    /// Idempotent for active addresses; a lapsed address is reactivated with
    /// a fresh unsubscribe token.
    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let email = EmailAddress::new(command.email)?;
        let now = self.clock.now();

        if let Some(existing) = self.subscribers.find_by_email(&email).await? {
            if existing.is_active() {
                return Ok(existing.into());
            }
            let token = self.tokens.generate();
            let reactivated = self.subscribers.reactivate(existing.id, &token, now).await?;
            info!(subscriber_id = reactivated.id.0, "subscriber reactivated");
            return Ok(reactivated.into());
        }

        let inserted = self
            .subscribers
            .insert(NewSubscriber {
                email: email.clone(),
                unsubscribe_token: self.tokens.generate(),
                subscribed_at: now,
            })
            .await;

        match inserted {
            Ok(subscriber) => {
                info!(subscriber_id = subscriber.id.0, "subscriber added");
                Ok(subscriber.into())
            }
            // lost a race with a concurrent subscribe for the same address
            Err(DomainError::Conflict(_)) => self
                .subscribers
                .find_by_email(&email)
                .await?
                .map(Into::into)
                .ok_or_else(|| ApplicationError::conflict("email already subscribed")),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn unsubscribe(&self, command: UnsubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let token = command.token.trim();
        if token.is_empty() {
            return Err(ApplicationError::validation("token is required"));
        }

        let subscriber = self
            .subscribers
            .find_by_token(token)
            .await?
            .ok_or_else(|| ApplicationError::not_found("subscription not found"))?;

        if !subscriber.is_active() {
            return Ok(subscriber.into());
        }

        let updated = self
            .subscribers
            .deactivate(subscriber.id, self.clock.now())
            .await?;
        info!(subscriber_id = updated.id.0, "subscriber unsubscribed");
        Ok(updated.into())
    }
}
