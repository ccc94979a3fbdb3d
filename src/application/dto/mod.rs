pub mod comments;
pub mod dashboard;
pub mod newsletter;
pub mod pagination;
pub mod posts;
pub mod taxonomy;

pub use comments::{CommentDto, CommentNodeDto};
pub use dashboard::DashboardDto;
pub use newsletter::SubscriberDto;
pub use pagination::Page;
pub use posts::PostDto;
pub use taxonomy::{CategoryDto, TagDto};
