// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Fold `input` to lowercase ASCII kebab-case. May return an empty string
    /// when the input has nothing to keep.
    fn slugify(&self, input: &str) -> String;
}

/// Source of opaque unsubscribe tokens.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
