//! Render pipeline: turns a [`Topic`] into display-ready HTML.
//!
//! Headings receive deterministic anchors, code samples are unescaped and
//! syntax-highlighted with class-based output so the shipped stylesheet can
//! theme them.

mod escape;
mod highlight;

use std::sync::Arc;
use std::time::Instant;

use metrics::histogram;
use once_cell::sync::Lazy;
use syntect::{dumps::from_uncompressed_data, html::ClassStyle, parsing::SyntaxSet};
use thiserror::Error;

use crate::domain::sections::{Block, CodeSample};
use crate::domain::slug::{AnchorSlugger, SlugError};
use crate::domain::topics::Topic;

pub use escape::{escape_html, unescape_code};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to highlight `{language}` sample: {message}")]
    Highlighting { language: String, message: String },
    #[error("failed to derive heading anchor: {0}")]
    Anchor(#[from] SlugError),
}

/// Rendered page body plus the flags templates use for conditional assets.
#[derive(Clone, Debug)]
pub struct RenderedTopic {
    pub content_html: String,
    pub contains_code: bool,
}

/// Shared renderer with the build-time syntax pack loaded once.
pub struct RenderService {
    syntax_set: SyntaxSet,
    class_style: ClassStyle,
}

impl RenderService {
    fn new() -> Self {
        let syntax_bytes = include_bytes!(env!("SYNTAX_PACK_FILE"));
        let syntax_set: SyntaxSet =
            from_uncompressed_data(syntax_bytes).expect("syntax pack must be valid");
        let class_style = ClassStyle::SpacedPrefixed { prefix: "syntax-" };

        Self {
            syntax_set,
            class_style,
        }
    }

    /// Render a topic body to HTML.
    pub fn render_topic(&self, topic: &Topic) -> Result<RenderedTopic, RenderError> {
        let start = Instant::now();
        let mut slugger = AnchorSlugger::new();
        let mut html = String::new();

        for block in &topic.blocks {
            self.render_block(block, &mut slugger, &mut html)?;
        }

        let contains_code = html.contains("syntax-") || html.contains("<code");

        histogram!("rivulet_docs_topic_render_ms")
            .record(start.elapsed().as_secs_f64() * 1000.0);

        Ok(RenderedTopic {
            content_html: html,
            contains_code,
        })
    }

    fn render_block(
        &self,
        block: &Block,
        slugger: &mut AnchorSlugger,
        html: &mut String,
    ) -> Result<(), RenderError> {
        match block {
            Block::Heading { level, text } => {
                let anchor = slugger.anchor_for(text)?;
                let escaped = escape_html(text);
                html.push_str(&format!(
                    "<h{level} id=\"{anchor}\">{escaped}</h{level}>\n"
                ));
            }
            Block::Paragraph { html: fragment } => {
                html.push_str(&format!("<p>{fragment}</p>\n"));
            }
            Block::Note { html: fragment } => {
                html.push_str(&format!("<p class=\"doc-note\">{fragment}</p>\n"));
            }
            Block::Bullets { items } => {
                html.push_str("<ul>\n");
                for item in items {
                    html.push_str(&format!("<li>{item}</li>\n"));
                }
                html.push_str("</ul>\n");
            }
            Block::Code { samples } => {
                self.render_code_group(samples, html)?;
            }
        }
        Ok(())
    }

    /// The labeled code containers: one per non-empty sample, skipped
    /// entirely when the sample source is empty.
    fn render_code_group(
        &self,
        samples: &[CodeSample],
        html: &mut String,
    ) -> Result<(), RenderError> {
        let renderable: Vec<&CodeSample> = samples
            .iter()
            .filter(|sample| !sample.source.is_empty())
            .collect();
        if renderable.is_empty() {
            return Ok(());
        }

        html.push_str("<div class=\"code-group\">\n");
        for sample in renderable {
            let token = sample.language.token();
            let unescaped = unescape_code(&sample.source);
            let highlighted =
                highlight::highlight_code(token, &unescaped, &self.syntax_set, &self.class_style)?;

            html.push_str(&format!(
                "<figure class=\"code-block code-lang-{token}\">\n<figcaption class=\"code-block-label\">{}</figcaption>\n{highlighted}\n</figure>\n",
                sample.language.label()
            ));
        }
        html.push_str("</div>\n");
        Ok(())
    }
}

static RENDER_SERVICE: Lazy<Arc<RenderService>> = Lazy::new(|| Arc::new(RenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<RenderService> {
    Arc::clone(&RENDER_SERVICE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sections::{Block, CodeSample};
    use crate::domain::topics::Topic;

    fn render(blocks: Vec<Block>) -> RenderedTopic {
        let topic = Topic::new("caching", "Caching System", "Cache things", blocks);
        render_service().render_topic(&topic).expect("render")
    }

    #[test]
    fn headings_receive_anchor_ids() {
        let rendered = render(vec![
            Block::heading(2, "Configuration"),
            Block::heading(2, "Configuration"),
        ]);
        assert!(rendered.content_html.contains("<h2 id=\"configuration\">"));
        assert!(rendered.content_html.contains("<h2 id=\"configuration-2\">"));
    }

    #[test]
    fn heading_text_is_escaped() {
        let rendered = render(vec![Block::heading(2, "Events & Listeners")]);
        assert!(rendered.content_html.contains("Events &amp; Listeners"));
    }

    #[test]
    fn code_samples_are_unescaped_and_labeled() {
        let rendered = render(vec![Block::code([CodeSample::shell(
            r"php luna cache:clear\nphp luna routes:clear",
        )])]);
        assert!(rendered.contains_code);
        assert!(rendered.content_html.contains("code-block-label\">Bash<"));
        assert!(rendered.content_html.contains("syntax-lang-bash"));
        // The literal `\n` sequence must be gone from the rendered output.
        assert!(!rendered.content_html.contains(r"\n"));
    }

    #[test]
    fn empty_samples_render_nothing() {
        let rendered = render(vec![Block::code([CodeSample::php("")])]);
        assert!(!rendered.contains_code);
        assert!(rendered.content_html.is_empty());
    }

    #[test]
    fn prose_only_pages_skip_the_code_stylesheet() {
        let rendered = render(vec![Block::para("Plain prose without samples.")]);
        assert!(!rendered.contains_code);
    }
}
