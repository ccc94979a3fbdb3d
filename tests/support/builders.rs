// tests/support/builders.rs
use quill::domain::post::{Post, PostBody, PostId, PostTitle};
use quill::domain::slug::Slug;

use super::mocks::fixed_now;

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    published: bool,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Post".into(),
            slug: "test-post".into(),
            body: "Test body".into(),
            published: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            excerpt: None,
            body: PostBody::new(self.body).unwrap(),
            category_id: None,
            tag_ids: vec![],
            published: self.published,
            published_at: self.published.then(fixed_now),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
