pub mod entity;
pub mod repository;
pub mod thread;
pub mod value_objects;

pub use entity::{Comment, CommentStatus, NewComment};
pub use repository::CommentRepository;
pub use thread::{CommentNode, MAX_REPLY_DEPTH, build_thread};
pub use value_objects::{AuthorName, CommentBody, CommentId};
