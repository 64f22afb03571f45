//! Static site export: renders every page to an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use tracing::info;

use crate::application::catalog::TopicService;
use crate::application::chrome::ChromeService;
use crate::application::error::AppError;
use crate::infra::assets::public_assets;
use crate::infra::error::InfraError;
use crate::infra::http::ROBOTS_TXT;
use crate::presentation::views::{
    ErrorPageView, ErrorTemplate, IndexTemplate, LayoutContext, TopicTemplate,
};

pub struct SiteExporter {
    topics: TopicService,
    chrome: ChromeService,
    output: PathBuf,
}

impl SiteExporter {
    pub fn new(topics: TopicService, chrome: ChromeService, output: PathBuf) -> Self {
        Self {
            topics,
            chrome,
            output,
        }
    }

    /// Write the whole site: landing page, every topic, the 404 page,
    /// `robots.txt` and the embedded asset bundle.
    pub fn export(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.output).map_err(InfraError::Io)?;

        self.export_landing_page()?;
        let topic_count = self.export_topics()?;
        self.export_not_found_page()?;
        self.export_robots()?;
        self.export_assets()?;

        info!(
            target = "rivulet_docs::export",
            topics = topic_count,
            output = %self.output.display(),
            "Site export completed"
        );
        Ok(())
    }

    fn export_landing_page(&self) -> Result<(), AppError> {
        let chrome = self
            .chrome
            .load()
            .with_canonical(self.chrome.canonical_url("/"));
        let view = LayoutContext::new(chrome, self.topics.home_view());
        let html = render(IndexTemplate { view })?;
        self.write_file(Path::new("index.html"), html.as_bytes())
    }

    fn export_topics(&self) -> Result<usize, AppError> {
        let mut exported = 0;
        for slug in self.topics.topic_slugs() {
            let content = self
                .topics
                .topic_view(&slug)
                .map_err(|_| AppError::unexpected(format!("rendering `{slug}` failed")))?
                .ok_or_else(|| {
                    AppError::unexpected(format!("topic `{slug}` vanished during export"))
                })?;

            let chrome = self
                .chrome
                .load()
                .with_title(format!(
                    "{} · {}",
                    content.title,
                    self.chrome.site().meta_title
                ))
                .with_canonical(self.chrome.canonical_url(&format!("/{slug}")));
            let view = LayoutContext::new(chrome, content);
            let html = render(TopicTemplate { view })?;

            let path = PathBuf::from(&slug).join("index.html");
            self.write_file(&path, html.as_bytes())?;
            exported += 1;
        }
        Ok(exported)
    }

    fn export_not_found_page(&self) -> Result<(), AppError> {
        let view = LayoutContext::new(self.chrome.load(), ErrorPageView::not_found());
        let html = render(ErrorTemplate { view })?;
        self.write_file(Path::new("404.html"), html.as_bytes())
    }

    fn export_robots(&self) -> Result<(), AppError> {
        self.write_file(Path::new("robots.txt"), ROBOTS_TXT.as_bytes())
    }

    fn export_assets(&self) -> Result<(), AppError> {
        let asset_root = self.output.join("static/public");
        fs::create_dir_all(&asset_root).map_err(InfraError::Io)?;
        public_assets()
            .extract(&asset_root)
            .map_err(InfraError::Io)?;
        Ok(())
    }

    fn write_file(&self, relative: &Path, contents: &[u8]) -> Result<(), AppError> {
        let path = self.output.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(InfraError::Io)?;
        }
        fs::write(&path, contents).map_err(InfraError::Io)?;
        Ok(())
    }
}

fn render<T: Template>(template: T) -> Result<String, AppError> {
    template
        .render()
        .map_err(|err| AppError::from(InfraError::export(format!("template failed: {err}"))))
}
