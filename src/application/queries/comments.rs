use std::sync::Arc;

use crate::{
    application::{
        dto::{CommentDto, CommentNodeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentRepository, CommentStatus, build_thread},
        post::{PostId, PostReadRepository},
    },
};

pub struct ListThreadQuery {
    pub post_id: i64,
    pub include_pending: bool,
}

pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostReadRepository>,
}

impl CommentQueryService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostReadRepository>) -> Self {
        Self { comments, posts }
    }

    pub async fn list_thread(&self, query: ListThreadQuery) -> ApplicationResult<Vec<CommentNodeDto>> {
        let post_id = PostId::new(query.post_id)?;
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        let comments = self.comments.list_by_post(post_id).await?;
        Ok(build_thread(comments, query.include_pending)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Moderation queue, oldest first.
    pub async fn list_pending(&self) -> ApplicationResult<Vec<CommentDto>> {
        let pending = self.comments.list_by_status(CommentStatus::Pending).await?;
        Ok(pending.into_iter().map(Into::into).collect())
    }
}
