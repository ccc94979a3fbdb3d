pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository};
pub use value_objects::{PostBody, PostExcerpt, PostId, PostTitle};
