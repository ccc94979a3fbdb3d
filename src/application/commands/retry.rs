use tracing::warn;

use crate::domain::errors::DomainError;

/// Budget for re-resolving a slug after storage rejected it as taken.
pub(crate) struct SlugRetry {
    kind: &'static str,
    remaining: u32,
}

impl SlugRetry {
    pub(crate) fn new(kind: &'static str, retries: u32) -> Self {
        Self {
            kind,
            remaining: retries,
        }
    }

    /// Swallow `err` when it is a slug conflict and budget remains; hand
    /// every other error back to the caller.
    pub(crate) fn absorb(&mut self, err: DomainError) -> Result<(), DomainError> {
        match err {
            DomainError::SlugConflict(message) if self.remaining > 0 => {
                self.remaining -= 1;
                warn!(
                    kind = self.kind,
                    %message,
                    remaining = self.remaining,
                    "slug claimed concurrently, resolving again"
                );
                Ok(())
            }
            other => Err(other),
        }
    }
}
