use std::fs;

use rivulet_docs::application::catalog::TopicService;
use rivulet_docs::application::chrome::ChromeService;
use rivulet_docs::config::SiteSettings;
use rivulet_docs::infra::export::SiteExporter;

#[test]
fn export_writes_the_full_site_tree() {
    let output = tempfile::tempdir().expect("temp dir");

    let exporter = SiteExporter::new(
        TopicService::new(),
        ChromeService::new(SiteSettings::default()),
        output.path().to_path_buf(),
    );
    exporter.export().expect("export succeeds");

    let index = fs::read_to_string(output.path().join("index.html")).expect("index.html");
    assert!(index.contains("Rivulet API Micro Framework"));
    assert!(index.contains("Get Started"));

    for slug in TopicService::new().topic_slugs() {
        let page_path = output.path().join(&slug).join("index.html");
        assert!(page_path.is_file(), "missing page for `{slug}`");
    }

    let routing =
        fs::read_to_string(output.path().join("routing/index.html")).expect("routing page");
    assert!(routing.contains("Routing System"));
    assert!(routing.contains("syntax-lang-php"));
    // Escaped sequences must not leak into the rendered site.
    assert!(!routing.contains(r"routes:list\n"));

    let not_found = fs::read_to_string(output.path().join("404.html")).expect("404 page");
    assert!(not_found.contains("Page Not Found"));

    let robots = fs::read_to_string(output.path().join("robots.txt")).expect("robots.txt");
    assert!(robots.contains("User-agent: *"));

    assert!(output.path().join("static/public/styles/site.css").is_file());
    let code_css = fs::read_to_string(output.path().join("static/public/styles/code.css"))
        .expect("code stylesheet");
    assert!(code_css.contains("Syntect theme"));
}

#[test]
fn export_is_idempotent_over_an_existing_directory() {
    let output = tempfile::tempdir().expect("temp dir");

    let export = || {
        SiteExporter::new(
            TopicService::new(),
            ChromeService::new(SiteSettings::default()),
            output.path().to_path_buf(),
        )
        .export()
        .expect("export succeeds");
    };

    export();
    export();

    assert!(output.path().join("index.html").is_file());
}

#[test]
fn canonical_links_appear_when_base_url_is_configured() {
    let output = tempfile::tempdir().expect("temp dir");

    let mut site = SiteSettings::default();
    site.base_url = Some("https://rivulet.dev/docs".to_string());

    SiteExporter::new(
        TopicService::new(),
        ChromeService::new(site),
        output.path().to_path_buf(),
    )
    .export()
    .expect("export succeeds");

    let routing =
        fs::read_to_string(output.path().join("routing/index.html")).expect("routing page");
    assert!(routing.contains("<link rel=\"canonical\" href=\"https://rivulet.dev/docs/routing\">"));
}
