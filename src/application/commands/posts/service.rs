// src/application/commands/posts/service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        post::{PostReadRepository, PostTitle, PostWriteRepository},
        slug::{Slug, SlugService},
        taxonomy::{CategoryId, CategoryRepository, TagId, TagRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) insert_retries: u32,
}

impl PostCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        insert_retries: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            tag_repo,
            slug_service,
            clock,
            insert_retries,
        }
    }

    /// A manually supplied slug wins over one derived from the title.
    pub(super) async fn pick_slug(
        &self,
        manual: Option<&str>,
        title: &PostTitle,
        ignore_id: Option<i64>,
    ) -> ApplicationResult<Slug> {
        let slug = match manual {
            Some(raw) => self.slug_service.claim_manual_slug(raw, ignore_id).await?,
            None => {
                self.slug_service
                    .generate_unique_slug(title.as_str(), ignore_id)
                    .await?
            }
        };
        Ok(slug)
    }

    pub(super) async fn resolve_category(
        &self,
        raw: Option<i64>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let id = CategoryId::new(raw)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "category {raw} does not exist"
            )));
        }
        Ok(Some(id))
    }

    /// Deduplicated, ascending, and verified to exist.
    pub(super) async fn resolve_tags(&self, raw: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let unique: BTreeSet<i64> = raw.iter().copied().collect();
        let mut ids = Vec::with_capacity(unique.len());
        for value in unique {
            let id = TagId::new(value)?;
            if self.tag_repo.find_by_id(id).await?.is_none() {
                return Err(ApplicationError::validation(format!(
                    "tag {value} does not exist"
                )));
            }
            ids.push(id);
        }
        Ok(ids)
    }
}
