use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::SlugError;
use super::policy::SlugPolicy;
use super::resolver::{SlugCandidates, base_slug, truncate_at_boundary};
use super::value_objects::Slug;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};

/// Storage-backed uniqueness oracle for one kind of record.
#[async_trait]
pub trait SlugExistenceChecker: Send + Sync {
    /// Whether a persisted record other than `ignore_id` already uses `candidate`.
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool>;
}

/// Domain service producing unique slugs for a single record kind.
pub struct SlugService {
    kind: &'static str,
    checker: Arc<dyn SlugExistenceChecker>,
    generator: Arc<dyn SlugGenerator>,
    policy: SlugPolicy,
}

impl SlugService {
    pub fn new(
        kind: &'static str,
        checker: Arc<dyn SlugExistenceChecker>,
        generator: Arc<dyn SlugGenerator>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            kind,
            checker,
            generator,
            policy,
        }
    }

    pub fn policy(&self) -> &SlugPolicy {
        &self.policy
    }

    pub async fn generate_unique_slug(
        &self,
        title: &str,
        ignore_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = base_slug(title, &self.policy, self.generator.as_ref())?;

        let mut attempts = 0u32;
        for candidate in SlugCandidates::new(&base, self.policy) {
            attempts += 1;
            if !self.checker.slug_exists(&candidate, ignore_id).await? {
                debug!(kind = self.kind, slug = %candidate, attempts, "resolved unique slug");
                return Ok(Slug::from_resolved(candidate));
            }
        }

        warn!(kind = self.kind, base = %base, attempts, "slug space exhausted");
        Err(SlugError::Exhausted { attempts }.into())
    }

    /// Normalise a slug supplied by an editor and make sure it is free.
    /// Unlike generated slugs, a taken manual slug is a conflict rather than
    /// a reason to append a counter.
    pub async fn claim_manual_slug(
        &self,
        requested: &str,
        ignore_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let normalized = self.generator.slugify(requested);
        if normalized.is_empty() {
            return Err(DomainError::Validation(
                "slug must contain at least one letter or digit".into(),
            ));
        }

        let slug = Slug::new(truncate_at_boundary(&normalized, self.policy.max_final_len()))?;
        if self.checker.slug_exists(slug.as_str(), ignore_id).await? {
            return Err(DomainError::SlugConflict(format!(
                "{} slug '{slug}' is already in use",
                self.kind
            )));
        }

        Ok(slug)
    }
}
