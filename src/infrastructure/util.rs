use crate::application::ports::util::{SlugGenerator, TokenGenerator};
use slug::slugify;
use uuid::Uuid;

/// Slugs via the `slug` crate: `deunicode` transliteration to ASCII,
/// lowercase, runs of anything else collapsed to one hyphen.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[derive(Default, Clone)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
