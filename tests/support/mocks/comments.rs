// tests/support/mocks/comments.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use quill::domain::comment::{Comment, CommentId, CommentRepository, CommentStatus, NewComment};
use quill::domain::errors::{DomainError, DomainResult};
use quill::domain::post::PostId;

#[derive(Default)]
pub struct InMemoryComments {
    inner: Mutex<(i64, BTreeMap<i64, Comment>)>,
}

impl InMemoryComments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().1.len()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut guard = self.inner.lock().unwrap();
        let (next_id, map) = &mut *guard;
        *next_id += 1;
        let stored = Comment {
            id: CommentId::new(*next_id).unwrap(),
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            author_name: comment.author_name,
            author_email: comment.author_email,
            body: comment.body,
            status: comment.status,
            created_at: comment.created_at,
        };
        map.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.inner.lock().unwrap().1.get(&id.0).cloned())
    }

    async fn set_status(&self, id: CommentId, status: CommentStatus) -> DomainResult<Comment> {
        let mut guard = self.inner.lock().unwrap();
        let comment = guard
            .1
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.status = status;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut guard = self.inner.lock().unwrap();
        let map = &mut guard.1;
        if map.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        // emulate ON DELETE CASCADE down the reply chain
        let mut doomed = vec![id];
        while let Some(parent) = doomed.pop() {
            let children: Vec<CommentId> = map
                .values()
                .filter(|c| c.parent_id == Some(parent))
                .map(|c| c.id)
                .collect();
            for child in children {
                map.remove(&child.0);
                doomed.push(child);
            }
        }
        Ok(())
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let guard = self.inner.lock().unwrap();
        let mut found: Vec<Comment> = guard
            .1
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        Ok(found)
    }

    async fn list_by_status(&self, status: CommentStatus) -> DomainResult<Vec<Comment>> {
        let guard = self.inner.lock().unwrap();
        let mut found: Vec<Comment> = guard
            .1
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        Ok(found)
    }
}
