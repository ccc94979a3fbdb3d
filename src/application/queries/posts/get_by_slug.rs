use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::Post, slug::Slug},
};

pub struct GetPostBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

impl PostQueryService {
    pub(super) fn ensure_visible(post: &Post, include_drafts: bool) -> ApplicationResult<()> {
        if post.published || include_drafts {
            Ok(())
        } else {
            Err(ApplicationError::not_found("post not found"))
        }
    }

    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        // a malformed slug cannot match anything
        let slug = Slug::new(query.slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Self::ensure_visible(&post, query.include_drafts)?;
        Ok(post.into())
    }
}
