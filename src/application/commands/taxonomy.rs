// src/application/commands/taxonomy.rs
use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        commands::retry::SlugRetry,
        dto::{CategoryDto, TagDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        slug::SlugService,
        taxonomy::{
            CategoryId, CategoryRepository, NewCategory, NewTag, TagId, TagRepository,
            TaxonomyName,
        },
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

/// An empty `description` clears it.
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct RenameCategoryCommand {
    pub id: i64,
    pub name: String,
}

pub struct CreateTagCommand {
    pub name: String,
}

pub struct RenameTagCommand {
    pub id: i64,
    pub name: String,
}

/// Categories and tags each resolve slugs in their own namespace.
pub struct TaxonomyCommandService {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
    category_slugs: Arc<SlugService>,
    tag_slugs: Arc<SlugService>,
    clock: Arc<dyn Clock>,
    insert_retries: u32,
}

fn clean_description(raw: Option<String>) -> Option<String> {
    raw.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

impl TaxonomyCommandService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        category_slugs: Arc<SlugService>,
        tag_slugs: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        insert_retries: u32,
    ) -> Self {
        Self {
            categories,
            tags,
            category_slugs,
            tag_slugs,
            clock,
            insert_retries,
        }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = TaxonomyName::new(command.name)?;
        let description = clean_description(command.description);
        let now = self.clock.now();

        let mut retry = SlugRetry::new("category", self.insert_retries);
        let created = loop {
            let slug = self
                .category_slugs
                .generate_unique_slug(name.as_str(), None)
                .await?;
            let new_category = NewCategory {
                name: name.clone(),
                slug,
                description: description.clone(),
                created_at: now,
            };
            match self.categories.insert(new_category).await {
                Ok(category) => break category,
                Err(err) => retry.absorb(err)?,
            }
        };

        info!(category_id = created.id.0, slug = %created.slug, "category created");
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        if command.description.is_some() {
            category.description = clean_description(command.description);
        }
        let rename = match command.name {
            Some(raw) => {
                let name = TaxonomyName::new(raw)?;
                let changed = name != category.name;
                category.name = name;
                changed
            }
            None => false,
        };

        let mut retry = SlugRetry::new("category", self.insert_retries);
        let updated = loop {
            if rename {
                category.slug = self
                    .category_slugs
                    .generate_unique_slug(category.name.as_str(), Some(id.0))
                    .await?;
            }
            match self.categories.update(category.clone()).await {
                Ok(category) => break category,
                Err(err) => retry.absorb(err)?,
            }
        };

        info!(category_id = id.0, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }

    pub async fn rename_category(
        &self,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        self.update_category(UpdateCategoryCommand {
            id: command.id,
            name: Some(command.name),
            description: None,
        })
        .await
    }

    pub async fn delete_category(&self, id: i64) -> ApplicationResult<()> {
        let id = CategoryId::new(id)?;
        self.categories.delete(id).await?;
        info!(category_id = id.0, "category deleted");
        Ok(())
    }

    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TaxonomyName::new(command.name)?;
        let now = self.clock.now();

        let mut retry = SlugRetry::new("tag", self.insert_retries);
        let created = loop {
            let slug = self.tag_slugs.generate_unique_slug(name.as_str(), None).await?;
            let new_tag = NewTag {
                name: name.clone(),
                slug,
                created_at: now,
            };
            match self.tags.insert(new_tag).await {
                Ok(tag) => break tag,
                Err(err) => retry.absorb(err)?,
            }
        };

        info!(tag_id = created.id.0, slug = %created.slug, "tag created");
        Ok(created.into())
    }

    pub async fn rename_tag(&self, command: RenameTagCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let mut tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let name = TaxonomyName::new(command.name)?;
        if name == tag.name {
            return Ok(tag.into());
        }
        tag.name = name;

        let mut retry = SlugRetry::new("tag", self.insert_retries);
        let updated = loop {
            tag.slug = self
                .tag_slugs
                .generate_unique_slug(tag.name.as_str(), Some(id.0))
                .await?;
            match self.tags.update(tag.clone()).await {
                Ok(tag) => break tag,
                Err(err) => retry.absorb(err)?,
            }
        };

        info!(tag_id = id.0, slug = %updated.slug, "tag renamed");
        Ok(updated.into())
    }

    pub async fn delete_tag(&self, id: i64) -> ApplicationResult<()> {
        let id = TagId::new(id)?;
        self.tags.delete(id).await?;
        info!(tag_id = id.0, "tag deleted");
        Ok(())
    }
}
