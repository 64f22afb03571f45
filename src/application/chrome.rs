use time::OffsetDateTime;

use crate::config::SiteSettings;
use crate::domain::navigation::{NavEntry, navigation};
use crate::presentation::views::{
    BrandView, FooterView, LayoutChrome, NavigationLinkView, PageMetaView, SidebarView,
};

/// Builds the layout chrome (brand, header links, sidebar, footer, meta)
/// every page shares. Navigation is fixed; titles and URLs come from the
/// site settings.
#[derive(Clone)]
pub struct ChromeService {
    site: SiteSettings,
}

impl ChromeService {
    pub fn new(site: SiteSettings) -> Self {
        Self { site }
    }

    pub fn load(&self) -> LayoutChrome {
        let nav = navigation();

        LayoutChrome {
            brand: BrandView {
                title: self.site.brand_title.clone(),
                href: "/".to_string(),
            },
            header_links: nav.header().iter().map(map_entry).collect(),
            sidebar: SidebarView {
                title: "Documentation".to_string(),
                entries: nav.sidebar().iter().map(map_entry).collect(),
            },
            footer: FooterView {
                copy: format!(
                    "© {} The Rivulet Project",
                    OffsetDateTime::now_utc().year()
                ),
            },
            meta: PageMetaView {
                title: self.site.meta_title.clone(),
                description: self.site.meta_description.clone(),
                canonical: String::new(),
            },
        }
    }

    /// Absolute canonical URL for a path when a base URL is configured,
    /// otherwise empty (the template omits the tag).
    pub fn canonical_url(&self, path: &str) -> String {
        match &self.site.base_url {
            Some(base) => format!("{}{path}", base.trim_end_matches('/')),
            None => String::new(),
        }
    }

    pub fn site(&self) -> &SiteSettings {
        &self.site
    }
}

fn map_entry(entry: &NavEntry) -> NavigationLinkView {
    let mut link = NavigationLinkView {
        label: entry.label.clone(),
        href: entry.href(),
        target: None,
        rel: None,
    };

    if entry.is_external() {
        link.target = Some("_blank".to_string());
        link.rel = Some("noopener noreferrer".to_string());
    }

    link
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_carries_full_sidebar() {
        let chrome = ChromeService::new(SiteSettings::default()).load();
        assert_eq!(chrome.sidebar.entries.len(), 27);
        assert_eq!(chrome.sidebar.title, "Documentation");
    }

    #[test]
    fn external_header_links_open_in_new_tab() {
        let chrome = ChromeService::new(SiteSettings::default()).load();
        let github = chrome
            .header_links
            .iter()
            .find(|link| link.label == "GitHub")
            .expect("github link");
        assert_eq!(github.target.as_deref(), Some("_blank"));
        assert_eq!(github.rel.as_deref(), Some("noopener noreferrer"));
    }

    #[test]
    fn canonical_requires_base_url() {
        let service = ChromeService::new(SiteSettings::default());
        assert_eq!(service.canonical_url("/routing"), "");

        let mut site = SiteSettings::default();
        site.base_url = Some("https://rivulet.dev/docs/".to_string());
        let service = ChromeService::new(site);
        assert_eq!(
            service.canonical_url("/routing"),
            "https://rivulet.dev/docs/routing"
        );
    }
}
