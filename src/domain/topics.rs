//! The topic registry: every documentation page, keyed by slug.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::sections::Block;
use super::slug::Slug;
use crate::content;

/// One documentation topic: a fixed page of prose, headings and code samples.
#[derive(Clone, Debug)]
pub struct Topic {
    pub slug: Slug,
    pub title: String,
    /// Short description used by the landing-page card grid.
    pub description: String,
    pub blocks: Vec<Block>,
}

impl Topic {
    pub fn new(
        slug: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        blocks: Vec<Block>,
    ) -> Self {
        let slug = Slug::new(slug).expect("topic slugs are fixed at compile time");
        Self {
            slug,
            title: title.into(),
            description: description.into(),
            blocks,
        }
    }
}

/// In-memory registry of all topics, initialised once per process.
#[derive(Debug)]
pub struct TopicRepository {
    ordered: Vec<Topic>,
    by_slug: HashMap<String, usize>,
}

impl TopicRepository {
    fn seed() -> Self {
        let ordered = content::all_topics();

        let mut by_slug = HashMap::with_capacity(ordered.len());
        for (index, topic) in ordered.iter().enumerate() {
            let previous = by_slug.insert(topic.slug.as_str().to_string(), index);
            assert!(
                previous.is_none(),
                "duplicate topic slug `{}`",
                topic.slug.as_str()
            );
        }

        Self { ordered, by_slug }
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Topic> {
        self.by_slug.get(slug).map(|index| &self.ordered[*index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

static TOPICS: OnceLock<TopicRepository> = OnceLock::new();

/// Access the shared topic registry, initialised on first use.
pub fn topics() -> &'static TopicRepository {
    TOPICS.get_or_init(TopicRepository::seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_every_documented_topic() {
        let repo = topics();
        for slug in [
            "installation",
            "database",
            "models",
            "controllers",
            "migrations",
            "seeders",
            "services",
            "events",
            "jobs",
            "middleware",
            "helpers",
            "routing",
            "filesystem",
            "templates",
            "mail",
            "notifications",
            "logging",
            "caching",
            "validation",
            "validation-rules",
            "session-cookies",
            "luna-cli",
        ] {
            assert!(repo.find_by_slug(slug).is_some(), "missing topic `{slug}`");
        }
        assert_eq!(repo.len(), 22);
    }

    #[test]
    fn unknown_slug_is_absent() {
        assert!(topics().find_by_slug("authentication").is_none());
        assert!(topics().find_by_slug("no-such-topic").is_none());
    }

    #[test]
    fn every_topic_has_content() {
        for topic in topics().iter() {
            assert!(
                !topic.blocks.is_empty(),
                "topic `{}` has no blocks",
                topic.slug.as_str()
            );
            assert!(!topic.title.is_empty());
            assert!(!topic.description.is_empty());
        }
    }
}
