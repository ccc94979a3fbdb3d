// tests/support/mocks/taxonomy.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use quill::domain::errors::{DomainError, DomainResult};
use quill::domain::slug::{Slug, SlugExistenceChecker};
use quill::domain::taxonomy::{
    Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
};

/* -------------------------------- categories -------------------------------- */

#[derive(Default)]
pub struct InMemoryCategories {
    inner: Mutex<(i64, BTreeMap<i64, Category>)>,
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self::default()
    }

    fn taken(map: &BTreeMap<i64, Category>, slug: &str, ignore_id: Option<i64>) -> bool {
        map.values()
            .any(|c| c.slug.as_str() == slug && Some(c.id.0) != ignore_id)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut guard = self.inner.lock().unwrap();
        let (next_id, map) = &mut *guard;
        if Self::taken(map, category.slug.as_str(), None) {
            return Err(DomainError::SlugConflict("slug already exists".into()));
        }
        *next_id += 1;
        let stored = Category {
            id: CategoryId::new(*next_id).unwrap(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
        };
        map.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: Category) -> DomainResult<Category> {
        let mut guard = self.inner.lock().unwrap();
        let (_, map) = &mut *guard;
        if !map.contains_key(&category.id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if Self::taken(map, category.slug.as_str(), Some(category.id.0)) {
            return Err(DomainError::SlugConflict("slug already exists".into()));
        }
        map.insert(category.id.0, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut guard = self.inner.lock().unwrap();
        guard
            .1
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().1.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard.1.values().find(|c| c.slug == *slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut all: Vec<Category> = self.inner.lock().unwrap().1.values().cloned().collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }
}

#[async_trait]
impl SlugExistenceChecker for InMemoryCategories {
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        Ok(Self::taken(&self.inner.lock().unwrap().1, candidate, ignore_id))
    }
}

/* -------------------------------- tags -------------------------------- */

#[derive(Default)]
pub struct InMemoryTags {
    inner: Mutex<(i64, BTreeMap<i64, Tag>)>,
}

impl InMemoryTags {
    pub fn new() -> Self {
        Self::default()
    }

    fn taken(map: &BTreeMap<i64, Tag>, slug: &str, ignore_id: Option<i64>) -> bool {
        map.values()
            .any(|t| t.slug.as_str() == slug && Some(t.id.0) != ignore_id)
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut guard = self.inner.lock().unwrap();
        let (next_id, map) = &mut *guard;
        if Self::taken(map, tag.slug.as_str(), None) {
            return Err(DomainError::SlugConflict("slug already exists".into()));
        }
        *next_id += 1;
        let stored = Tag {
            id: TagId::new(*next_id).unwrap(),
            name: tag.name,
            slug: tag.slug,
            created_at: tag.created_at,
        };
        map.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, tag: Tag) -> DomainResult<Tag> {
        let mut guard = self.inner.lock().unwrap();
        let (_, map) = &mut *guard;
        if !map.contains_key(&tag.id.0) {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        if Self::taken(map, tag.slug.as_str(), Some(tag.id.0)) {
            return Err(DomainError::SlugConflict("slug already exists".into()));
        }
        map.insert(tag.id.0, tag.clone());
        Ok(tag)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut guard = self.inner.lock().unwrap();
        guard
            .1
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.inner.lock().unwrap().1.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard.1.values().find(|t| t.slug == *slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let mut all: Vec<Tag> = self.inner.lock().unwrap().1.values().cloned().collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }
}

#[async_trait]
impl SlugExistenceChecker for InMemoryTags {
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        Ok(Self::taken(&self.inner.lock().unwrap().1, candidate, ignore_id))
    }
}
