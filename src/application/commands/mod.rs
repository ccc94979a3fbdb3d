pub mod comments;
pub mod newsletter;
pub mod posts;
mod retry;
pub mod taxonomy;

/// Default number of times an insert is re-attempted after another writer
/// claimed the resolved slug first.
pub const DEFAULT_INSERT_RETRIES: u32 = 3;
