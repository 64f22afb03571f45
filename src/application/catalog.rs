use std::sync::Arc;

use axum::http::StatusCode;

use crate::application::error::HttpError;
use crate::application::render::{RenderError, RenderService, render_service};
use crate::content::home;
use crate::domain::topics::topics;
use crate::presentation::views::{CardView, HomeView, TopicView};

const SOURCE: &str = "application::catalog::TopicService";

/// Read side of the documentation catalog: topic lookup and the landing page.
#[derive(Clone)]
pub struct TopicService {
    renderer: Arc<RenderService>,
}

impl TopicService {
    pub fn new() -> Self {
        Self {
            renderer: render_service(),
        }
    }

    /// Render the topic registered under `slug`, or `None` when the slug is
    /// not part of the documentation (sidebar entries without pages land
    /// here too).
    pub fn topic_view(&self, slug: &str) -> Result<Option<TopicView>, HttpError> {
        let Some(topic) = topics().find_by_slug(slug) else {
            return Ok(None);
        };

        let rendered = self
            .renderer
            .render_topic(topic)
            .map_err(|err| render_failure(slug, err))?;

        Ok(Some(TopicView {
            slug: topic.slug.as_str().to_string(),
            title: topic.title.clone(),
            content_html: rendered.content_html,
            contains_code: rendered.contains_code,
        }))
    }

    /// Landing page model: hero, feature cards and the topic card grid.
    pub fn home_view(&self) -> HomeView {
        let landing = home::landing_page();

        HomeView {
            tagline: landing.tagline,
            intro: landing.intro,
            github_url: landing.github_url,
            features: landing.features.into_iter().map(map_card).collect(),
            cards: landing.topics.into_iter().map(map_card).collect(),
        }
    }

    /// Slugs of every registered topic, in sidebar order. The export path
    /// walks this list.
    pub fn topic_slugs(&self) -> Vec<String> {
        topics()
            .iter()
            .map(|topic| topic.slug.as_str().to_string())
            .collect()
    }
}

impl Default for TopicService {
    fn default() -> Self {
        Self::new()
    }
}

fn map_card(card: home::LandingCard) -> CardView {
    CardView {
        title: card.title,
        href: card.href,
        description: card.description,
        cta: card.cta,
    }
}

fn render_failure(slug: &str, err: RenderError) -> HttpError {
    HttpError::new(
        SOURCE,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to render documentation page",
        format!("rendering `{slug}` failed: {err}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_topic() {
        let service = TopicService::new();
        let view = service
            .topic_view("routing")
            .expect("render")
            .expect("routing exists");
        assert_eq!(view.title, "Routing System");
        assert!(view.contains_code);
        assert!(view.content_html.contains("Route Caching"));
    }

    #[test]
    fn unknown_topic_is_none() {
        let service = TopicService::new();
        assert!(service.topic_view("debugging").expect("lookup").is_none());
    }

    #[test]
    fn home_view_lists_topic_cards() {
        let view = TopicService::new().home_view();
        assert_eq!(view.features.len(), 3);
        assert_eq!(view.cards.len(), 26);
        assert!(view.cards.iter().any(|card| card.href == "/installation"));
    }
}
