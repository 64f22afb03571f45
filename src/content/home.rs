//! Landing page content: hero, feature trio and the topic card grid.

pub struct LandingPage {
    pub tagline: String,
    pub intro: String,
    pub github_url: String,
    pub features: Vec<LandingCard>,
    pub topics: Vec<LandingCard>,
}

pub struct LandingCard {
    pub title: String,
    pub href: String,
    pub description: String,
    pub cta: String,
}

impl LandingCard {
    fn new(title: &str, href: &str, description: &str, cta: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
            description: description.to_string(),
            cta: cta.to_string(),
        }
    }
}

pub fn landing_page() -> LandingPage {
    let features = vec![
        LandingCard::new(
            "Lightweight",
            "/installation",
            "Rivulet is designed to be minimal and fast, with a small footprint and low resource usage.",
            "Learn More",
        ),
        LandingCard::new(
            "Easy to Use",
            "/controllers",
            "Simple and intuitive API that makes it easy to build powerful applications quickly.",
            "Learn More",
        ),
        LandingCard::new(
            "Extensible",
            "/middleware",
            "Built with extensibility in mind, allowing you to add only the features you need.",
            "Learn More",
        ),
    ];

    let topics = vec![
        ("Installation", "/installation", "Learn how to install and set up Rivulet"),
        ("Database Connection", "/database", "Connect to databases and perform operations"),
        ("Creating Models", "/models", "Define models for your data"),
        ("Creating Controllers", "/controllers", "Build controllers to handle requests"),
        ("Creating Migrations", "/migrations", "Manage database schema changes"),
        ("Creating Seeders", "/seeders", "Populate your database with test data"),
        ("Creating Services", "/services", "Organize your business logic"),
        ("Creating Events", "/events", "Implement event-driven architecture"),
        ("Validation Rules", "/validation", "Validate incoming data"),
        ("Creating Jobs", "/jobs", "Handle background tasks"),
        ("Creating Listeners", "/listeners", "Respond to events"),
        ("Creating Middleware", "/middleware", "Filter HTTP requests"),
        ("Creating Helpers", "/helpers", "Create reusable helper functions"),
        ("Routing", "/routing", "Define routes for your application"),
        ("Authentication", "/authentication", "Implement user authentication"),
        ("Filesystem Operations", "/filesystem", "Work with files and directories"),
        ("Creating Templates", "/templates", "Build dynamic templates"),
        ("Sending Mail", "/mail", "Send emails from your application"),
        ("Notifications", "/notifications", "Send notifications to users"),
        ("Logging", "/logging", "Log application events"),
        ("Caching", "/caching", "Improve performance with caching"),
        ("Debugging", "/debugging", "Debug your application"),
        ("Validation Rules", "/validation-rules", "Explore all validation rules"),
        ("Job Queues", "/queues", "Manage job queues"),
        ("Testing", "/testing", "Write tests for your application"),
        ("Luna CLI", "/luna-cli", "Use the command-line interface"),
    ]
    .into_iter()
    .map(|(title, href, description)| LandingCard::new(title, href, description, "Read More"))
    .collect();

    LandingPage {
        tagline: "A lightweight, fast, and powerful PHP micro-framework for building RESTful APIs"
            .to_string(),
        intro: "Explore our comprehensive documentation to learn how to use Rivulet to build powerful APIs."
            .to_string(),
        github_url: "https://github.com/rivulet/framework".to_string(),
        features,
        topics,
    }
}
