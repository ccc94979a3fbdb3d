use crate::domain::comment::entity::{Comment, CommentStatus, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn set_status(&self, id: CommentId, status: CommentStatus) -> DomainResult<Comment>;
    /// Removes the comment and every reply beneath it.
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
    async fn list_by_status(&self, status: CommentStatus) -> DomainResult<Vec<Comment>>;
}
