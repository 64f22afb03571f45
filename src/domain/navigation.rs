//! Fixed site navigation: the sidebar menu and the header links.

use std::sync::OnceLock;

use url::Url;

#[derive(Clone, Debug)]
pub struct Navigation {
    sidebar: Vec<NavEntry>,
    header: Vec<NavEntry>,
}

impl Navigation {
    pub fn sidebar(&self) -> &[NavEntry] {
        &self.sidebar
    }

    pub fn header(&self) -> &[NavEntry] {
        &self.header
    }

    fn seed() -> Self {
        // Sidebar order mirrors the published site. Entries without a
        // matching topic resolve to the styled not-found page.
        let sidebar = vec![
            NavEntry::home("Getting Started"),
            NavEntry::topic("Installation", "installation"),
            NavEntry::topic("Database Connection", "database"),
            NavEntry::topic("Creating Models", "models"),
            NavEntry::topic("Creating Controllers", "controllers"),
            NavEntry::topic("Creating Migrations", "migrations"),
            NavEntry::topic("Creating Seeders", "seeders"),
            NavEntry::topic("Creating Services", "services"),
            NavEntry::topic("Creating Events", "events"),
            NavEntry::topic("Creating Jobs", "jobs"),
            NavEntry::topic("Creating Listeners", "listeners"),
            NavEntry::topic("Creating Middleware", "middleware"),
            NavEntry::topic("Creating Helpers", "helpers"),
            NavEntry::topic("Routing", "routing"),
            NavEntry::topic("Authentication", "authentication"),
            NavEntry::topic("Filesystem Operations", "filesystem"),
            NavEntry::topic("Creating Templates", "templates"),
            NavEntry::topic("Sending Mail", "mail"),
            NavEntry::topic("Notifications", "notifications"),
            NavEntry::topic("Logging", "logging"),
            NavEntry::topic("Caching", "caching"),
            NavEntry::topic("Debugging", "debugging"),
            NavEntry::topic("Validation", "validation"),
            NavEntry::topic("Validation Rules", "validation-rules"),
            NavEntry::topic("Job Queues", "queues"),
            NavEntry::topic("Testing", "testing"),
            NavEntry::topic("Luna CLI", "luna-cli"),
        ];

        let header = vec![
            NavEntry::home("Documentation"),
            NavEntry::external(
                "GitHub",
                Url::parse("https://github.com/rivulet/framework").expect("valid GitHub url"),
            ),
        ];

        Self { sidebar, header }
    }
}

static NAVIGATION: OnceLock<Navigation> = OnceLock::new();

pub fn navigation() -> &'static Navigation {
    NAVIGATION.get_or_init(Navigation::seed)
}

#[derive(Clone, Debug)]
pub struct NavEntry {
    pub label: String,
    pub destination: NavDestination,
}

impl NavEntry {
    fn home(label: &str) -> Self {
        Self {
            label: label.to_string(),
            destination: NavDestination::Home,
        }
    }

    fn topic(label: &str, slug: &str) -> Self {
        Self {
            label: label.to_string(),
            destination: NavDestination::Internal {
                slug: slug.to_string(),
            },
        }
    }

    fn external(label: &str, url: Url) -> Self {
        Self {
            label: label.to_string(),
            destination: NavDestination::External { url },
        }
    }

    /// The href this entry renders with.
    pub fn href(&self) -> String {
        match &self.destination {
            NavDestination::Home => "/".to_string(),
            NavDestination::Internal { slug } => format!("/{slug}"),
            NavDestination::External { url } => url.to_string(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.destination, NavDestination::External { .. })
    }
}

#[derive(Clone, Debug)]
pub enum NavDestination {
    Home,
    Internal { slug: String },
    External { url: Url },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_matches_published_menu() {
        let nav = navigation();
        assert_eq!(nav.sidebar().len(), 27);
        assert_eq!(nav.sidebar()[0].label, "Getting Started");
        assert_eq!(nav.sidebar()[0].href(), "/");
        assert_eq!(nav.sidebar()[26].href(), "/luna-cli");
    }

    #[test]
    fn header_links_to_repository() {
        let nav = navigation();
        let github = nav
            .header()
            .iter()
            .find(|entry| entry.label == "GitHub")
            .expect("github entry");
        assert!(github.is_external());
        assert!(github.href().starts_with("https://github.com/"));
    }
}
