// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod dashboard;
pub mod newsletter;
pub mod posts;
pub mod taxonomy;
