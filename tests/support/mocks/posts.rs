// tests/support/mocks/posts.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use quill::domain::errors::{DomainError, DomainResult};
use quill::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostWriteRepository,
};
use quill::domain::slug::{Slug, SlugExistenceChecker};

#[derive(Default)]
struct PostStore {
    next_id: i64,
    posts: BTreeMap<i64, Post>,
    /// Inserts that lose a race: a competing row grabs the slug first.
    lost_races: u32,
    insert_attempts: u32,
}

/// Post storage with a unique slug index, like the real table.
#[derive(Default)]
pub struct InMemoryPosts {
    inner: Mutex<PostStore>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` inserts fail as if another writer had claimed
    /// the same slug between resolution and insert.
    pub fn lose_next_races(&self, count: u32) {
        self.inner.lock().unwrap().lost_races = count;
    }

    pub fn insert_attempts(&self) -> u32 {
        self.inner.lock().unwrap().insert_attempts
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().posts.len()
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.inner.lock().unwrap().posts.get(&id).cloned()
    }

    pub fn seed(&self, post: Post) {
        let mut store = self.inner.lock().unwrap();
        store.next_id = store.next_id.max(post.id.0);
        store.posts.insert(post.id.0, post);
    }
}

impl PostStore {
    fn slug_taken(&self, slug: &str, ignore_id: Option<i64>) -> bool {
        self.posts
            .values()
            .any(|post| post.slug.as_str() == slug && Some(post.id.0) != ignore_id)
    }

    fn store(&mut self, new: NewPost) -> Post {
        self.next_id += 1;
        let post = Post {
            id: PostId::new(self.next_id).unwrap(),
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            body: new.body,
            category_id: new.category_id,
            tag_ids: new.tag_ids,
            published: new.published,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.posts.insert(post.id.0, post.clone());
        post
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPosts {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        store.insert_attempts += 1;

        if store.lost_races > 0 {
            store.lost_races -= 1;
            let mut rival = post.clone();
            rival.title = quill::domain::post::PostTitle::new("rival").unwrap();
            store.store(rival);
        }
        if store.slug_taken(post.slug.as_str(), None) {
            return Err(DomainError::SlugConflict("slug already exists".into()));
        }
        Ok(store.store(post))
    }

    async fn update(&self, post: Post) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        if !store.posts.contains_key(&post.id.0) {
            return Err(DomainError::NotFound("post not found".into()));
        }
        if store.slug_taken(post.slug.as_str(), Some(post.id.0)) {
            return Err(DomainError::SlugConflict("slug already exists".into()));
        }
        store.posts.insert(post.id.0, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .posts
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.inner.lock().unwrap().posts.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .posts
            .values()
            .find(|post| post.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list_paginated(
        &self,
        filter: &PostListFilter,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let store = self.inner.lock().unwrap();
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());
        let mut matches: Vec<Post> = store
            .posts
            .values()
            .filter(|post| filter.include_drafts || post.published)
            .filter(|post| filter.category_id.is_none() || post.category_id == filter.category_id)
            .filter(|post| match &needle {
                Some(needle) => {
                    post.title.as_str().to_lowercase().contains(needle)
                        || post.body.as_str().to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));

        let total = matches.len() as u64;
        let skip = ((page.max(1) - 1) * page_size) as usize;
        let items = matches.into_iter().skip(skip).take(page_size as usize).collect();
        Ok((items, total))
    }
}

#[async_trait]
impl SlugExistenceChecker for InMemoryPosts {
    async fn slug_exists(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().slug_taken(candidate, ignore_id))
    }
}
