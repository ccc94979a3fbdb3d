use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        slug::Slug,
        taxonomy::{CategoryRepository, TagRepository},
    },
};

pub struct TaxonomyQueryService {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
}

impl TaxonomyQueryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { categories, tags }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(&self, slug: String) -> ApplicationResult<CategoryDto> {
        let slug =
            Slug::new(slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        self.categories
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tags.list().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    pub async fn get_tag_by_slug(&self, slug: String) -> ApplicationResult<TagDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("tag not found"))?;
        self.tags
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("tag not found"))
    }
}
