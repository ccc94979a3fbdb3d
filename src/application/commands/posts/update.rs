// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::retry::SlugRetry,
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostBody, PostExcerpt, PostId, PostTitle},
};
use tracing::info;

/// Absent fields are left untouched. `category_id: Some(None)` removes the
/// category and an empty `excerpt` clears it.
#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<Option<i64>>,
    pub tag_ids: Option<Vec<i64>>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let UpdatePostCommand {
            id: _,
            title,
            body,
            excerpt,
            slug,
            category_id,
            tag_ids,
        } = command;

        let now = self.clock.now();
        let title = title.map(PostTitle::new).transpose()?;
        let body = body.map(PostBody::new).transpose()?;
        // the slug only follows the title while nobody pinned it by hand
        let regenerate = slug.is_none() && title.as_ref().is_some_and(|t| post.title_changed(t));

        if title.is_some() || body.is_some() {
            let new_title = title.unwrap_or_else(|| post.title.clone());
            let new_body = body.unwrap_or_else(|| post.body.clone());
            post.set_content(new_title, new_body, now);
        }
        if let Some(raw) = excerpt {
            post.excerpt = PostExcerpt::parse(raw)?;
        }
        if let Some(raw) = category_id {
            post.category_id = self.resolve_category(raw).await?;
        }
        if let Some(raw) = tag_ids {
            post.tag_ids = self.resolve_tags(&raw).await?;
        }
        post.updated_at = now;

        let mut retry = SlugRetry::new("post", self.insert_retries);
        let updated = loop {
            if slug.is_some() || regenerate {
                let new_slug = self.pick_slug(slug.as_deref(), &post.title, Some(id.0)).await?;
                post.set_slug(new_slug, now);
            }

            match self.write_repo.update(post.clone()).await {
                Ok(post) => break post,
                Err(err) => retry.absorb(err)?,
            }
        };

        info!(post_id = updated.id.0, slug = %updated.slug, "post updated");
        Ok(updated.into())
    }
}
