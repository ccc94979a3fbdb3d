// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Clone)]
pub struct DummyClock;

impl quill::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Hands out `token-1`, `token-2`, ...
#[derive(Default)]
pub struct SequentialTokens {
    counter: AtomicU32,
}

impl quill::application::ports::util::TokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("token-{n}")
    }
}
