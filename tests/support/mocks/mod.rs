// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod comments;
pub mod dashboard;
pub mod posts;
pub mod subscribers;
pub mod taxonomy;
pub mod time;
pub mod util;

pub use comments::InMemoryComments;
pub use dashboard::StaticDashboard;
pub use posts::InMemoryPosts;
pub use subscribers::InMemorySubscribers;
pub use taxonomy::{InMemoryCategories, InMemoryTags};
pub use time::fixed_now;
pub use util::{DummyClock, SequentialTokens};
