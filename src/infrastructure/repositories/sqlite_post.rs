use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostBody, PostExcerpt, PostId, PostListFilter, PostReadRepository, PostTitle,
    PostWriteRepository,
};
use crate::domain::slug::{Slug, SlugExistenceChecker};
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;
use std::sync::Arc;

const POST_COLUMNS: &str =
    "id, title, slug, excerpt, body, category_id, published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    body: String,
    category_id: Option<i64>,
    published: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<TagId>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            excerpt: self.excerpt.map(PostExcerpt::parse).transpose()?.flatten(),
            body: PostBody::new(self.body)?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            tag_ids,
            published: self.published != 0,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn replace_tags(
    tx: &mut Transaction<'_, Sqlite>,
    post_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(i64::from(*tag_id))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

async fn load_tags(pool: &SqlitePool, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<TagId>>> {
    let mut tags: HashMap<i64, Vec<TagId>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(tags);
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT post_id, tag_id FROM post_tags WHERE post_id IN (");
    let mut separated = builder.separated(", ");
    for id in post_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY tag_id");

    let rows: Vec<(i64, i64)> = builder
        .build_query_as()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    for (post_id, tag_id) in rows {
        tags.entry(post_id).or_default().push(TagId::new(tag_id)?);
    }
    Ok(tags)
}

async fn hydrate(pool: &SqlitePool, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(pool, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let tag_ids = tags.remove(&row.id).unwrap_or_default();
            row.into_post(tag_ids)
        })
        .collect()
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            excerpt,
            body,
            category_id,
            tag_ids,
            published,
            published_at,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, excerpt, body, category_id, published, published_at, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt.as_ref().map(|e| e.as_str()))
        .bind(body.as_str())
        .bind(category_id.map(i64::from))
        .bind(if published { 1 } else { 0 })
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, row.id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_ids)
    }

    async fn update(&self, post: Post) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = ?, slug = ?, excerpt = ?, body = ?, category_id = ?, published = ?, published_at = ?, updated_at = ? WHERE id = ? RETURNING {POST_COLUMNS}"
        ))
        .bind(post.title.as_str())
        .bind(post.slug.as_str())
        .bind(post.excerpt.as_ref().map(|e| e.as_str()))
        .bind(post.body.as_str())
        .bind(post.category_id.map(i64::from))
        .bind(if post.published { 1 } else { 0 })
        .bind(post.published_at)
        .bind(post.updated_at)
        .bind(i64::from(post.id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        replace_tags(&mut tx, row.id, &post.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(post.tag_ids)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(hydrate(&self.pool, row.into_iter().collect()).await?.pop())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(hydrate(&self.pool, row.into_iter().collect()).await?.pop())
    }

    async fn list_paginated(
        &self,
        filter: &PostListFilter,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);
        let search_pattern = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));
        let category_id = filter.category_id.map(i64::from);

        fn apply_conditions<'a>(
            builder: &mut QueryBuilder<'a, Sqlite>,
            include_drafts: bool,
            category_id: Option<i64>,
            search_pattern: Option<&'a str>,
        ) {
            let mut has_where = false;
            let mut clause = |builder: &mut QueryBuilder<'a, Sqlite>| {
                builder.push(if has_where { " AND " } else { " WHERE " });
                has_where = true;
            };

            if !include_drafts {
                clause(builder);
                builder.push("published = 1");
            }
            if let Some(category_id) = category_id {
                clause(builder);
                builder.push("category_id = ");
                builder.push_bind(category_id);
            }
            if let Some(pattern) = search_pattern {
                clause(builder);
                builder.push("(title LIKE ");
                builder.push_bind(pattern);
                builder.push(" ESCAPE '\\' OR body LIKE ");
                builder.push_bind(pattern);
                builder.push(" ESCAPE '\\')");
            }
        }

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        apply_conditions(
            &mut list_builder,
            filter.include_drafts,
            category_id,
            search_pattern.as_deref(),
        );
        list_builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        list_builder.push_bind(i64::from(page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) as count FROM posts");
        apply_conditions(
            &mut count_builder,
            filter.include_drafts,
            category_id,
            search_pattern.as_deref(),
        );

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = hydrate(&self.pool, rows).await?;
        Ok((posts, total.max(0) as u64))
    }
}

#[async_trait]
impl SlugExistenceChecker for SqlitePostReadRepository {
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(candidate)
        .bind(ignore_id)
        .bind(ignore_id)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }
}
