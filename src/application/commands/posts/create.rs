// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::retry::SlugRetry,
        dto::PostDto,
        error::ApplicationResult,
    },
    domain::post::{NewPost, PostBody, PostExcerpt, PostTitle},
};
use tracing::info;

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub publish: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    excerpt: Option<String>,
    slug: Option<String>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    publish: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            excerpt: self.excerpt,
            slug: self.slug,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            publish: self.publish,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let body = PostBody::new(command.body)?;
        let excerpt = command.excerpt.map(PostExcerpt::parse).transpose()?.flatten();
        let category_id = self.resolve_category(command.category_id).await?;
        let tag_ids = self.resolve_tags(&command.tag_ids).await?;
        let now = self.clock.now();

        let mut retry = SlugRetry::new("post", self.insert_retries);
        let created = loop {
            let slug = self.pick_slug(command.slug.as_deref(), &title, None).await?;
            let new_post = NewPost {
                title: title.clone(),
                slug,
                excerpt: excerpt.clone(),
                body: body.clone(),
                category_id,
                tag_ids: tag_ids.clone(),
                published: command.publish,
                published_at: command.publish.then_some(now),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(post) => break post,
                Err(err) => retry.absorb(err)?,
            }
        };

        info!(post_id = created.id.0, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
