use quill::application::commands::taxonomy::{
    CreateCategoryCommand, CreateTagCommand, RenameCategoryCommand, RenameTagCommand,
    UpdateCategoryCommand,
};
use quill::application::error::ApplicationError;
use quill::domain::errors::DomainError;

mod support;

use support::TestBackend;

#[tokio::test]
async fn categories_and_tags_have_separate_slug_spaces() {
    let backend = TestBackend::new();
    let services = backend.services();
    let taxonomy = &services.taxonomy_commands;

    let category = taxonomy
        .create_category(CreateCategoryCommand {
            name: "Rust".into(),
            description: Some("  Systems programming ".into()),
        })
        .await
        .unwrap();
    let tag = taxonomy
        .create_tag(CreateTagCommand { name: "Rust".into() })
        .await
        .unwrap();
    let second_tag = taxonomy
        .create_tag(CreateTagCommand { name: "rust!".into() })
        .await
        .unwrap();

    assert_eq!(category.slug, "rust");
    assert_eq!(category.description.as_deref(), Some("Systems programming"));
    assert_eq!(tag.slug, "rust");
    assert_eq!(second_tag.slug, "rust-1");
}

#[tokio::test]
async fn renaming_regenerates_the_slug() {
    let backend = TestBackend::new();
    let services = backend.services();
    let taxonomy = &services.taxonomy_commands;

    let tag = taxonomy
        .create_tag(CreateTagCommand { name: "Async".into() })
        .await
        .unwrap();
    let renamed = taxonomy
        .rename_tag(RenameTagCommand {
            id: tag.id,
            name: "Async Rust".into(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.slug, "async-rust");

    let category = taxonomy
        .create_category(CreateCategoryCommand {
            name: "News".into(),
            description: None,
        })
        .await
        .unwrap();
    let updated = taxonomy
        .update_category(UpdateCategoryCommand {
            id: category.id,
            name: Some("Release Notes".into()),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.slug, "release-notes");

    let found = services
        .taxonomy_queries
        .get_category_by_slug("release-notes".into())
        .await
        .unwrap();
    assert_eq!(found.id, category.id);

    let again = taxonomy
        .rename_category(RenameCategoryCommand {
            id: category.id,
            name: "Changelog".into(),
        })
        .await
        .unwrap();
    assert_eq!(again.slug, "changelog");
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let backend = TestBackend::new();
    let services = backend.services();

    let err = services
        .taxonomy_commands
        .create_tag(CreateTagCommand { name: "  ".into() })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn delete_then_lookup_is_not_found() {
    let backend = TestBackend::new();
    let services = backend.services();

    let tag = services
        .taxonomy_commands
        .create_tag(CreateTagCommand { name: "Gone".into() })
        .await
        .unwrap();
    services.taxonomy_commands.delete_tag(tag.id).await.unwrap();

    let err = services
        .taxonomy_queries
        .get_tag_by_slug("gone".into())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert!(services.taxonomy_queries.list_tags().await.unwrap().is_empty());
}
