// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use publish::SetPublishStateCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
