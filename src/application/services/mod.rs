// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, newsletter::NewsletterCommandService,
            posts::PostCommandService, taxonomy::TaxonomyCommandService,
        },
        ports::{
            time::Clock,
            util::{SlugGenerator, TokenGenerator},
        },
        queries::{
            comments::CommentQueryService, dashboard::DashboardQueryService,
            newsletter::NewsletterQueryService, posts::PostQueryService,
            taxonomy::TaxonomyQueryService,
        },
    },
    domain::{
        comment::CommentRepository,
        dashboard::DashboardRepository,
        newsletter::SubscriberRepository,
        post::{PostReadRepository, PostWriteRepository},
        slug::{SlugExistenceChecker, SlugPolicy, SlugService},
        taxonomy::{CategoryRepository, TagRepository},
    },
};

/// Storage adapters the services are built from. Each slug checker answers
/// for the same table as the repository next to it.
#[derive(Clone)]
pub struct Repositories {
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub post_slugs: Arc<dyn SlugExistenceChecker>,
    pub categories: Arc<dyn CategoryRepository>,
    pub category_slugs: Arc<dyn SlugExistenceChecker>,
    pub tags: Arc<dyn TagRepository>,
    pub tag_slugs: Arc<dyn SlugExistenceChecker>,
    pub comments: Arc<dyn CommentRepository>,
    pub subscribers: Arc<dyn SubscriberRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
}

#[derive(Clone, Copy, Debug)]
pub struct SlugSettings {
    pub policy: SlugPolicy,
    pub insert_retries: u32,
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            policy: SlugPolicy::default(),
            insert_retries: crate::application::commands::DEFAULT_INSERT_RETRIES,
        }
    }
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        tokens: Arc<dyn TokenGenerator>,
        slug_settings: SlugSettings,
    ) -> Self {
        let slug_service = |kind: &'static str, checker: &Arc<dyn SlugExistenceChecker>| {
            Arc::new(SlugService::new(
                kind,
                Arc::clone(checker),
                Arc::clone(&slugger),
                slug_settings.policy,
            ))
        };

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.post_write),
            Arc::clone(&repos.post_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            slug_service("post", &repos.post_slugs),
            Arc::clone(&clock),
            slug_settings.insert_retries,
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&repos.post_read)));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            slug_service("category", &repos.category_slugs),
            slug_service("tag", &repos.tag_slugs),
            Arc::clone(&clock),
            slug_settings.insert_retries,
        ));
        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.post_read),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.post_read),
        ));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&repos.subscribers),
            tokens,
            Arc::clone(&clock),
        ));
        let newsletter_queries =
            Arc::new(NewsletterQueryService::new(Arc::clone(&repos.subscribers)));

        let dashboard_queries = Arc::new(DashboardQueryService::new(Arc::clone(&repos.dashboard)));

        Self {
            post_commands,
            post_queries,
            taxonomy_commands,
            taxonomy_queries,
            comment_commands,
            comment_queries,
            newsletter_commands,
            newsletter_queries,
            dashboard_queries,
        }
    }
}
