use crate::domain::comment::{
    AuthorName, Comment, CommentBody, CommentId, CommentRepository, CommentStatus, NewComment,
};
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const COMMENT_COLUMNS: &str =
    "id, post_id, parent_id, author_name, author_email, body, status, created_at";

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    parent_id: Option<i64>,
    author_name: String,
    author_email: String,
    body: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            author_name: AuthorName::new(row.author_name)?,
            author_email: EmailAddress::new(row.author_email)?,
            body: CommentBody::new(row.body)?,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (post_id, parent_id, author_name, author_email, body, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(comment.post_id))
        .bind(comment.parent_id.map(i64::from))
        .bind(comment.author_name.as_str())
        .bind(comment.author_email.as_str())
        .bind(comment.body.as_str())
        .bind(comment.status.as_str())
        .bind(comment.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn set_status(&self, id: CommentId, status: CommentStatus) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET status = ? WHERE id = ? RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        // replies go with it through ON DELETE CASCADE on parent_id
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = ? ORDER BY created_at, id"
        ))
        .bind(i64::from(post_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_by_status(&self, status: CommentStatus) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE status = ? ORDER BY created_at, id"
        ))
        .bind(status.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
