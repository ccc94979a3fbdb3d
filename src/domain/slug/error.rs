use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("title must contain at least one letter or digit")]
    EmptyTitle,
    #[error("slug generator produced a malformed slug: {0:?}")]
    Malformed(String),
    #[error("slug space exhausted after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error("invalid slug policy: {0}")]
    InvalidPolicy(&'static str),
}
