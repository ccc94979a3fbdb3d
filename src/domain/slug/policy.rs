use super::error::SlugError;

pub const DEFAULT_MAX_BASE_LEN: usize = 200;
pub const DEFAULT_MAX_FINAL_LEN: usize = 250;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Length bounds and probe cap applied when resolving a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    max_base_len: usize,
    max_final_len: usize,
    max_attempts: u32,
}

impl SlugPolicy {
    pub fn new(
        max_base_len: usize,
        max_final_len: usize,
        max_attempts: u32,
    ) -> Result<Self, SlugError> {
        if max_base_len == 0 {
            return Err(SlugError::InvalidPolicy("base length must be positive"));
        }
        // a base slug returned without a suffix must already fit the final bound
        if max_final_len < max_base_len {
            return Err(SlugError::InvalidPolicy(
                "final length must not be shorter than base length",
            ));
        }
        if max_final_len < 3 {
            return Err(SlugError::InvalidPolicy(
                "final length must leave room for a numeric suffix",
            ));
        }
        if max_attempts == 0 {
            return Err(SlugError::InvalidPolicy("at least one attempt is required"));
        }

        Ok(Self {
            max_base_len,
            max_final_len,
            max_attempts,
        })
    }

    pub fn max_base_len(&self) -> usize {
        self.max_base_len
    }

    pub fn max_final_len(&self) -> usize {
        self.max_final_len
    }

    /// Total number of oracle probes, the unsuffixed base included.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_base_len: DEFAULT_MAX_BASE_LEN,
            max_final_len: DEFAULT_MAX_FINAL_LEN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
