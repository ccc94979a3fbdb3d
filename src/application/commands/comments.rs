// src/application/commands/comments.rs
use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{
            AuthorName, CommentBody, CommentId, CommentRepository, CommentStatus, MAX_REPLY_DEPTH,
            NewComment,
        },
        email::EmailAddress,
        post::{PostId, PostReadRepository},
    },
};

pub struct SubmitCommentCommand {
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author_name: String,
    pub author_email: String,
    pub body: String,
}

pub struct CommentCommandService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            posts,
            clock,
        }
    }

    /// New comments wait in moderation until approved.
    pub async fn submit_comment(
        &self,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)?;
        let author_name = AuthorName::new(command.author_name)?;
        let author_email = EmailAddress::new(command.author_email)?;
        let body = CommentBody::new(command.body)?;

        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .filter(|post| post.published)
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let parent_id = match command.parent_id {
            Some(raw) => {
                let parent_id = CommentId::new(raw)?;
                let parent = self
                    .comments
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| ApplicationError::validation("parent comment does not exist"))?;
                if parent.post_id != post.id {
                    return Err(ApplicationError::validation(
                        "parent comment belongs to another post",
                    ));
                }
                self.ensure_reply_depth(parent.parent_id).await?;
                Some(parent_id)
            }
            None => None,
        };

        let created = self
            .comments
            .insert(NewComment {
                post_id,
                parent_id,
                author_name,
                author_email,
                body,
                status: CommentStatus::Pending,
                created_at: self.clock.now(),
            })
            .await?;

        info!(comment_id = created.id.0, post_id = post_id.0, "comment submitted");
        Ok(created.into())
    }

    /// Walks up from the parent's own parent; the new reply sits one level
    /// below its parent.
    async fn ensure_reply_depth(&self, mut ancestor: Option<CommentId>) -> ApplicationResult<()> {
        let mut depth = 1;
        while let Some(id) = ancestor {
            depth += 1;
            if depth > MAX_REPLY_DEPTH {
                return Err(ApplicationError::validation(format!(
                    "replies cannot be nested more than {MAX_REPLY_DEPTH} levels deep"
                )));
            }
            ancestor = self
                .comments
                .find_by_id(id)
                .await?
                .and_then(|comment| comment.parent_id);
        }
        Ok(())
    }

    pub async fn approve_comment(&self, id: i64) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(id)?;
        let approved = self.comments.set_status(id, CommentStatus::Approved).await?;
        info!(comment_id = id.0, "comment approved");
        Ok(approved.into())
    }

    pub async fn delete_comment(&self, id: i64) -> ApplicationResult<()> {
        let id = CommentId::new(id)?;
        self.comments.delete(id).await?;
        info!(comment_id = id.0, "comment deleted");
        Ok(())
    }
}
