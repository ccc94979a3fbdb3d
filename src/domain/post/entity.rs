use crate::domain::post::value_objects::{PostBody, PostExcerpt, PostId, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{CategoryId, TagId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: Option<PostExcerpt>,
    pub body: PostBody,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: PostTitle, body: PostBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }

    /// Titles are stored trimmed, so this compares normalised values.
    pub fn title_changed(&self, title: &PostTitle) -> bool {
        self.title.as_str() != title.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: Option<PostExcerpt>,
    pub body: PostBody,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
