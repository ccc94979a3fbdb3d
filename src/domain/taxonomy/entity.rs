use crate::domain::slug::Slug;
use crate::domain::taxonomy::value_objects::{CategoryId, TagId, TaxonomyName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: TaxonomyName,
    pub slug: Slug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: TaxonomyName,
    pub slug: Slug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TaxonomyName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TaxonomyName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}
