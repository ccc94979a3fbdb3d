use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PostDto, pagination::normalize_paging},
        error::ApplicationResult,
    },
    domain::{post::PostListFilter, taxonomy::CategoryId},
};

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub include_drafts: bool,
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Page<PostDto>> {
        let (page, page_size) = normalize_paging(query.page, query.page_size);
        let filter = PostListFilter {
            include_drafts: query.include_drafts,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };

        let (posts, total) = self
            .read_repo
            .list_paginated(&filter, page, page_size)
            .await?;

        Ok(Page::new(
            posts.into_iter().map(PostDto::from).collect(),
            total,
            page,
            page_size,
        ))
    }
}
