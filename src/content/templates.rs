use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "templates",
        "Template Engine",
        "Build dynamic templates",
        vec![
            Block::para("Rivulet's lightweight template engine handles basic variable replacement and array iteration with a simple syntax."),
            Block::heading(2, "Core Command"),
            Block::code([CodeSample::shell(
                r"# Create new template\nphp luna create:template welcome\n\n# Create nested directory template\nphp luna create:template emails/verification",
            )]),
            Block::heading(2, "Configuration"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'paths' => [\n        dirname(__DIR__) . '/resources/views', // Primary views directory\n    ],\n    \n    'extension' => '.html', // Default file extension\n    \n    'compiled' => dirname(__DIR__) . '/storage/cache/views', // Compiled templates\n];"#,
            )]),
            Block::heading(2, "Supported Syntax"),
            Block::heading(3, "Variable Replacement"),
            Block::code([CodeSample::html(
                r#"<!-- Simple variable -->\n<title>{{$app_name}}</title>\n\n<!-- With optional spaces -->\n<p>Version: {{ $version }}</p>"#,
            )]),
            Block::note("Note: Only direct variable access is supported. No filters or formatting."),
            Block::heading(3, "Array Iteration"),
            Block::code([CodeSample::html(
                r#"<!-- Loop through array -->\n{{map $links}}\n  <a href=\"{{$url}}\">{{$text}}</a>\n{{/map}}"#,
            )]),
            Block::note("Note: Only one-level deep iteration is supported."),
            Block::heading(2, "Built-in Templates"),
            Block::bullets([
                "<code>404.html</code> - Not Found error page",
                "<code>unauthorized.html</code> - 403 Forbidden page",
            ]),
            Block::heading(2, "Rendering Views"),
            Block::code([CodeSample::php(
                r#"// From a controller\nreturn $this->view('welcome', [\n    'app_name' => 'Rivulet',\n    'version' => '1.0',\n    'links' => [\n        ['url' => '/docs', 'text' => 'Documentation'],\n        ['url' => '/contact', 'text' => 'Contact']\n    ]\n]);\n\n// With nested directory structure\nreturn $this->view('emails.verification', $data);"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Keep business logic out of templates",
                "Pre-compute complex data in controllers",
                "Use clear variable names (<code>$user_name</code> vs <code>$un</code>)",
                "Document expected variables in template comments",
            ]),
        ],
    )
}
