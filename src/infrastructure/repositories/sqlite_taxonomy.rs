use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugExistenceChecker};
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
    TaxonomyName,
};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTagRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: TaxonomyName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TaxonomyName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

/// Shared EXISTS probe; `table` is always one of our own constants.
async fn slug_taken(
    pool: &SqlitePool,
    table: &'static str,
    candidate: &str,
    ignore_id: Option<i64>,
) -> DomainResult<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {table} WHERE slug = ? AND (? IS NULL OR id <> ?))"
    );
    let found: i64 = sqlx::query_scalar(&sql)
        .bind(candidate)
        .bind(ignore_id)
        .bind(ignore_id)
        .fetch_one(pool)
        .await
        .map_err(map_sqlx)?;
    Ok(found != 0)
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, description, created_at) VALUES (?, ?, ?, ?) RETURNING id, name, slug, description, created_at",
        )
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .bind(category.description.as_deref())
        .bind(category.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = ?, slug = ?, description = ? WHERE id = ? RETURNING id, name, slug, description, created_at",
        )
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .bind(category.description.as_deref())
        .bind(i64::from(category.id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at FROM categories WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at FROM categories WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at FROM categories ORDER BY name COLLATE NOCASE, id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}

#[async_trait]
impl SlugExistenceChecker for SqliteCategoryRepository {
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        slug_taken(&self.pool, "categories", candidate, ignore_id).await
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, slug, created_at) VALUES (?, ?, ?) RETURNING id, name, slug, created_at",
        )
        .bind(tag.name.as_str())
        .bind(tag.slug.as_str())
        .bind(tag.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn update(&self, tag: Tag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "UPDATE tags SET name = ?, slug = ? WHERE id = ? RETURNING id, name, slug, created_at",
        )
        .bind(tag.name.as_str())
        .bind(tag.slug.as_str())
        .bind(i64::from(tag.id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;

        Tag::try_from(row)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug, created_at FROM tags ORDER BY name COLLATE NOCASE, id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}

#[async_trait]
impl SlugExistenceChecker for SqliteTagRepository {
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        slug_taken(&self.pool, "tags", candidate, ignore_id).await
    }
}
