use crate::domain::comment::value_objects::{AuthorName, CommentBody, CommentId};
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStatus {
    Pending,
    Approved,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl FromStr for CommentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            other => Err(DomainError::Validation(format!(
                "unknown comment status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub author_name: AuthorName,
    pub author_email: EmailAddress,
    pub body: CommentBody,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_approved(&self) -> bool {
        self.status == CommentStatus::Approved
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub author_name: AuthorName,
    pub author_email: EmailAddress,
    pub body: CommentBody,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}
