//! Slug generation and uniqueness resolution.
//!
//! A title is normalised into a base slug, bounded in length at a word
//! boundary, then probed against a uniqueness oracle. Collisions are resolved
//! with `-1`, `-2`, ... suffixes while keeping the whole value inside the
//! configured maximum length.

mod error;
mod policy;
mod resolver;
mod service;
mod value_objects;

pub use error::SlugError;
pub use policy::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_BASE_LEN, DEFAULT_MAX_FINAL_LEN, SlugPolicy,
};
pub use resolver::{SlugCandidates, base_slug, resolve, suffixed_candidate, truncate_at_boundary};
pub use service::{SlugExistenceChecker, SlugService};
pub use value_objects::{Slug, is_valid_slug};
