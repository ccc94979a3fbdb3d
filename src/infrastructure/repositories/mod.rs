mod error;
mod sqlite_comment;
mod sqlite_dashboard;
mod sqlite_post;
mod sqlite_subscriber;
mod sqlite_taxonomy;

pub use error::map_sqlx;
pub use sqlite_comment::SqliteCommentRepository;
pub use sqlite_dashboard::SqliteDashboardRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_subscriber::SqliteSubscriberRepository;
pub use sqlite_taxonomy::{SqliteCategoryRepository, SqliteTagRepository};
