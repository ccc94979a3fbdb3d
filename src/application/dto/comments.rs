use crate::domain::comment::{Comment, CommentNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a comment. The author's e-mail is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub author_name: String,
    pub body: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            author_name: comment.author_name.into_inner(),
            body: comment.body.into_inner(),
            status: comment.status.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentNodeDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    #[schema(no_recursion)]
    pub replies: Vec<CommentNodeDto>,
}

impl From<CommentNode> for CommentNodeDto {
    fn from(node: CommentNode) -> Self {
        Self {
            comment: node.comment.into(),
            replies: node.replies.into_iter().map(Into::into).collect(),
        }
    }
}
