use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "caching",
        "Caching System",
        "Improve performance with caching",
        vec![
            Block::para("Rivulet provides a simple file-based caching system with automatic expiration and helper functions."),
            Block::heading(2, "Configuration"),
            Block::para("The cache is configured in your application's service container. Default path:"),
            Block::code([CodeSample::shell(r"storage/cache/")]),
            Block::heading(2, "Global Helpers"),
            Block::heading(3, "Storing Items"),
            Block::code([CodeSample::php(
                r#"// Store for 1 hour (default)\nPutCache('user_123', $userData);\n\n// Store with custom TTL (in seconds)\nPutCache('popular_posts', $posts, 86400); // 24 hours"#,
            )]),
            Block::heading(3, "Retrieving Items"),
            Block::code([CodeSample::php(
                r#"// Get cached value or return null\n$data = GetCache('user_123');\n\n// Get with default value\n$data = GetCache('non_existent_key', ['default' => 'value']);"#,
            )]),
            Block::heading(2, "Console Command"),
            Block::para("Clear all cached items:"),
            Block::code([CodeSample::shell(r"php luna cache:clear")]),
            Block::para("This removes all cache files from the storage directory."),
            Block::heading(2, "Examples"),
            Block::heading(3, "Database Query Caching"),
            Block::code([CodeSample::php(
                r#"$posts = GetCache('latest_posts');\n        \nif (!$posts) {\n    $posts = Post::latest()->limit(10)->get();\n    PutCache('latest_posts', $posts, 3600); // Cache for 1 hour\n}"#,
            )]),
            Block::heading(3, "View Fragment Caching"),
            Block::code([CodeSample::php(
                r#"$html = GetCache('sidebar_html');\n\nif (!$html) {\n    $html = view('partials.sidebar', $data)->render();\n    PutCache('sidebar_html', $html, 1800); // Cache for 30 minutes\n}\n\necho $html;"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use descriptive cache keys (e.g., 'user_123_profile')",
                "Set appropriate TTL based on data volatility",
                "Clear cache after data updates",
                "Avoid caching sensitive information",
                "Consider cache size for large datasets",
                "Implement cache fallbacks for critical data",
            ]),
            Block::heading(2, "Technical Details"),
            Block::bullets([
                "Cache files stored with <code>.cache</code> extension",
                "Keys are MD5-hashed for filename safety",
                "Automatic expiration check on retrieval",
                "Thread-safe file operations",
            ]),
        ],
    )
}
