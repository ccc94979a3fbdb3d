use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::CategoryId;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub include_drafts: bool,
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring match on title and body.
    pub search: Option<String>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Persist every field of `post`, tag associations included.
    async fn update(&self, post: Post) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Newest first. Returns the page and the total number of matches.
    async fn list_paginated(
        &self,
        filter: &PostListFilter,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
