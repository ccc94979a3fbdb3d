use super::error::SlugError;
use super::policy::SlugPolicy;
use super::value_objects::{Slug, is_valid_slug};
use crate::application::ports::util::SlugGenerator;

/// Cut `slug` to at most `max_len` bytes without leaving a partial word.
///
/// `slug` must already be a valid slug (ASCII only). When the cut lands inside
/// a word the fragment is dropped back to the previous hyphen; a single word
/// longer than `max_len` has no earlier boundary and is hard-cut instead.
pub fn truncate_at_boundary(slug: &str, max_len: usize) -> &str {
    if slug.len() <= max_len {
        return slug;
    }
    if max_len == 0 {
        return "";
    }

    let cut = &slug[..max_len];
    if slug.as_bytes()[max_len] == b'-' {
        return cut.trim_end_matches('-');
    }

    match cut.rfind('-') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut,
    }
}

/// Normalise `title` into a base slug bounded by the policy's base length.
pub fn base_slug(
    title: &str,
    policy: &SlugPolicy,
    generator: &dyn SlugGenerator,
) -> Result<String, SlugError> {
    let normalized = generator.slugify(title);
    if normalized.is_empty() {
        return Err(SlugError::EmptyTitle);
    }
    if !is_valid_slug(&normalized) {
        return Err(SlugError::Malformed(normalized));
    }

    Ok(truncate_at_boundary(&normalized, policy.max_base_len()).to_owned())
}

/// Build `base-counter`, shortening `base` so the whole value fits the final
/// length. Returns `None` once the suffix alone no longer fits.
pub fn suffixed_candidate(base: &str, counter: u32, policy: &SlugPolicy) -> Option<String> {
    let suffix = format!("-{counter}");
    let available = policy.max_final_len().checked_sub(suffix.len())?;
    let stem = truncate_at_boundary(base, available);
    if stem.is_empty() {
        return None;
    }

    Some(format!("{stem}{suffix}"))
}

/// Candidates in probe order: the base itself, then `base-1`, `base-2`, ...
/// Yields at most `policy.max_attempts()` values.
#[derive(Debug, Clone)]
pub struct SlugCandidates<'a> {
    base: &'a str,
    policy: SlugPolicy,
    next: u32,
}

impl<'a> SlugCandidates<'a> {
    pub fn new(base: &'a str, policy: SlugPolicy) -> Self {
        Self {
            base,
            policy,
            next: 0,
        }
    }
}

impl Iterator for SlugCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.policy.max_attempts() {
            return None;
        }

        let counter = self.next;
        self.next += 1;

        if counter == 0 {
            return Some(self.base.to_owned());
        }

        let candidate = suffixed_candidate(self.base, counter, &self.policy);
        if candidate.is_none() {
            self.next = self.policy.max_attempts();
        }
        candidate
    }
}

/// Resolve `title` into a slug for which `exists` reports `false`.
///
/// The oracle is consulted once per candidate. The result is only free at the
/// moment of the check; callers persisting it must still handle a uniqueness
/// violation raised by storage.
pub fn resolve<F>(
    title: &str,
    policy: &SlugPolicy,
    generator: &dyn SlugGenerator,
    mut exists: F,
) -> Result<Slug, SlugError>
where
    F: FnMut(&str) -> bool,
{
    let base = base_slug(title, policy, generator)?;

    let mut attempts = 0u32;
    for candidate in SlugCandidates::new(&base, *policy) {
        attempts += 1;
        if !exists(candidate.as_str()) {
            return Ok(Slug::from_resolved(candidate));
        }
    }

    Err(SlugError::Exhausted { attempts })
}
