//! Deterministic slugs for topic identifiers and heading anchors.

use std::collections::HashMap;

use slug::slugify;
use thiserror::Error;

use super::error::DomainError;

/// Errors that can occur while deriving a slug from display text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Validated topic identifier: non-empty, lowercase ASCII, digits and hyphens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(DomainError::validation("slug must not be empty"));
        }
        let valid = raw
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
        if !valid {
            return Err(DomainError::validation(format!(
                "slug `{raw}` must contain only lowercase ASCII, digits and hyphens"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a base slug from human-readable heading text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Deterministically generate unique anchor slugs within a single document.
///
/// Headings processed in order receive monotonic suffixes when duplicates
/// occur (e.g. `overview`, `overview-2`, `overview-3`).
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    occurrences: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self {
            occurrences: HashMap::new(),
        }
    }

    /// Generate an anchor for the provided heading text, ensuring uniqueness
    /// within this slugger.
    pub fn anchor_for(&mut self, heading: &str) -> Result<String, SlugError> {
        let base = derive_slug(heading)?;
        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            Ok(base)
        } else {
            Ok(format!("{base}-{}", *count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_slug_normalizes_heading_text() {
        assert_eq!(derive_slug("Route Caching").expect("slug"), "route-caching");
        assert_eq!(
            derive_slug("Queue & Scheduling System").expect("slug"),
            "queue-scheduling-system"
        );
    }

    #[test]
    fn derive_slug_rejects_empty_input() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
    }

    #[test]
    fn anchor_slugger_suffixes_duplicates() {
        let mut slugger = AnchorSlugger::new();

        let first = slugger.anchor_for("Configuration").expect("slug");
        let second = slugger.anchor_for("Configuration").expect("slug");
        let third = slugger.anchor_for("Best Practices").expect("slug");

        assert_eq!(first, "configuration");
        assert_eq!(second, "configuration-2");
        assert_eq!(third, "best-practices");
    }

    #[test]
    fn topic_slug_rejects_invalid_characters() {
        assert!(Slug::new("validation-rules").is_ok());
        assert!(Slug::new("Routing").is_err());
        assert!(Slug::new("a b").is_err());
        assert!(Slug::new("").is_err());
    }
}
