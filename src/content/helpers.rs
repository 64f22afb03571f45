use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "helpers",
        "Helpers System",
        "Create reusable helper functions",
        vec![
            Block::para("Rivulet provides a rich set of helper functions that are globally available throughout your application. These helpers simplify common tasks and provide convenient shortcuts to framework functionality."),
            Block::heading(2, "Built-in Helpers"),
            Block::para("The framework comes with these essential helpers pre-loaded:"),
            Block::heading(4, "Application Helpers"),
            Block::code([CodeSample::php(
                r#"// Get application instance\napp();\n\n// Get environment variable\nenv('APP_ENV', 'production');\n\n// Get configuration value\nconfig('database.default');"#,
            )]),
            Block::heading(4, "Routing Helpers"),
            Block::code([CodeSample::php(
                r#"// Define route\nroute('GET', '/path', 'Controller@method');\n\n// Group routes with prefix\nprefix('api', function() {\n    route('GET', '/users', 'UserController@index');\n});\n\n// Apply middleware\ngroup('middleware=auth', function() {\n    route('GET', '/profile', 'ProfileController@show');\n});"#,
            )]),
            Block::heading(4, "Response Helpers"),
            Block::code([CodeSample::php(
                r#"// Success response\njsonSuccess(['data' => $results]);\n\n// Error response\njsonError('Invalid input', 422);"#,
            )]),
            Block::heading(4, "Security Helpers"),
            Block::code([CodeSample::php(
                r#"// Password hashing\n$hash = PassEncrypt('password123');\n\n// Password verification\nif (PassVerify('password123', $hash)) {\n    // Valid password\n}"#,
            )]),
            Block::heading(2, "Creating Custom Helpers"),
            Block::para("You can create your own helper files in the <code>app/Helpers</code> directory. These files are auto-loaded and their functions become globally available."),
            Block::heading(4, "Example Helper File"),
            Block::code([
                CodeSample::shell(r"# Create new helper file\ntouch app/Helpers/slug.php"),
                CodeSample::php(
                    r#"<?php\n\n// app/Helpers/slug.php\nfunction article_slug($title)\n{\n    return str_replace(' ', '-', strtolower($title));\n}"#,
                ),
            ]),
            Block::heading(4, "Using Custom Helpers"),
            Block::code([CodeSample::php(
                r#"// In controller\npublic function addArticle()\n{\n    $data = $this->request->input();\n    $data['slug'] = article_slug($data['title']);\n    // ...\n}"#,
            )]),
            Block::heading(2, "Helper Categories"),
            Block::heading(4, "Logging Helpers"),
            Block::code([CodeSample::php(r#"// Log message\nLogMessage('User logged in', 'info');"#)]),
            Block::heading(4, "Cache Helpers"),
            Block::code([CodeSample::php(
                r#"// Get cached value\n$value = GetCache('key');\n\n// Store in cache\nPutCache('key', $value, 3600);"#,
            )]),
            Block::heading(4, "Validation Helpers"),
            Block::code([CodeSample::php(
                r#"// Validate data\nvalidate($input, [\n    'email' => 'required|email',\n    'password' => 'required|min:8'\n]);"#,
            )]),
            Block::heading(4, "Session Helpers"),
            Block::code([CodeSample::php(
                r#"// Set session\nSetSession('user_id', 123);\n\n// Get session\n$userId = GetSession('user_id');\n\n// Flash session\nFlashSession('message', 'Success!');"#,
            )]),
            Block::heading(4, "Date Helpers"),
            Block::code([CodeSample::php(r#"// Carbon instance\n$tomorrow = carbon('tomorrow');"#)]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Group related helpers in logical files",
                "Prefix helper names to avoid collisions",
                "Keep helpers focused on single tasks",
                "Document helper functions with PHPDoc",
                "Test helpers thoroughly",
            ]),
        ],
    )
}
