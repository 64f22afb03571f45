use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "routing",
        "Routing System",
        "Define routes for your application",
        vec![
            Block::para("Rivulet's routing system provides a clean, intuitive way to define web routes with support for RESTful patterns, middleware, and route caching."),
            Block::heading(2, "Route Configuration"),
            Block::para("The <code>config/routes.php</code> configuration file defines how URI prefixes map to route definition files in your Rivulet application."),
            Block::heading(2, "Configuration Overview"),
            Block::para("The configuration file (<code>config/routes.php</code>) serves as the central registry for:"),
            Block::bullets([
                "URI prefix to route file mappings",
                "Route loading order",
                "Application entry points",
            ]),
            Block::heading(2, "Basic Structure"),
            Block::para("The configuration returns an array with a <code>handlers</code> key that maps URI prefixes to route files:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'handlers' => [\n        // Default route handler (for root path '/')\n        ''    => 'web.php',\n        \n        // API route handler (for paths beginning with '/api')\n        'api' => 'api.php',\n        \n        // Admin panel routes\n        'admin' => 'admin.php'\n    ],\n];"#,
            )]),
            Block::heading(2, "Key Concepts"),
            Block::heading(3, "URI Prefix Matching"),
            Block::para("Routes are matched in the order they are defined. The empty string prefix (<code>''</code>) handles the root path."),
            Block::heading(3, "Route File Loading"),
            Block::para("Each route file should be placed in the <code>routes/</code> directory and will be automatically loaded when its prefix matches."),
            Block::heading(2, "Core Commands"),
            Block::code([CodeSample::shell(
                r"# List all registered routes\nphp luna routes:list\n\n# Cache routes for better performance\nphp luna routes:cache\n\n# Clear route cache\nphp luna routes:clear",
            )]),
            Block::heading(2, "Routing System Overview"),
            Block::para("The routing system consists of three main components:"),
            Block::bullets([
                "<strong>Route Definitions</strong> - Declared in route files under <code>/routes</code> directory",
                "<strong>Router</strong> - Matches incoming requests to registered routes",
                "<strong>Route Caching</strong> - Improves performance by caching compiled routes",
            ]),
            Block::heading(2, "Basic Routing"),
            Block::para("Define routes in your route files (e.g. <code>routes/api.php</code>):"),
            Block::code([CodeSample::php(
                r#"<?php\n\n// Basic GET route with closure\nroute('GET', '/welcome', function () {\n    return ['message' => 'Welcome to our API'];\n});\n\n// Route to controller method\nroute('POST', '/users', UserController::class, 'store');"#,
            )]),
            Block::heading(2, "Route Parameters"),
            Block::para("Capture URI segments as parameters:"),
            Block::code([CodeSample::php(
                r#"// Required parameter\nroute('GET', '/users/{id}', UserController::class, 'show');\n\n// Optional parameter (needs custom handling)\nroute('GET', '/posts/{id?}', PostController::class, 'show');"#,
            )]),
            Block::heading(2, "Route Groups"),
            Block::para("Group routes with common attributes:"),
            Block::code([CodeSample::php(
                r#"// Prefix group\nprefix('admin', function () {\n    route('GET', '/dashboard', AdminController::class, 'dashboard');\n    route('GET', '/users', AdminController::class, 'users');\n});\n\n// Middleware group\nmiddleware('auth', function () {\n    route('GET', '/profile', UserController::class, 'profile');\n    route('PUT', '/settings', UserController::class, 'updateSettings');\n});\n\n// Combined group\ngroup('prefix=api, middleware=auth:api', function () {\n    route('GET', '/data', DataController::class, 'index');\n});"#,
            )]),
            Block::heading(2, "CRUD Resource Routes"),
            Block::para("Quickly generate CRUD routes for a resource:"),
            Block::code([CodeSample::php(
                r#"// Manual CRUD routes\nroute('GET', '/articles', ArticleController::class, 'index');\nroute('POST', '/articles', ArticleController::class, 'store');\nroute('GET', '/articles/{id}', ArticleController::class, 'show');\nroute('PUT', '/articles/{id}', ArticleController::class, 'update');\nroute('DELETE', '/articles/{id}', ArticleController::class, 'destroy');\n\n// Using endpoint helper\nendpoint('articles', ArticleController::class);"#,
            )]),
            Block::heading(2, "Route Caching"),
            Block::para("Cache routes for better performance in production:"),
            Block::code([CodeSample::shell(
                r"# Cache routes\nphp luna routes:cache\n\n# Clear route cache\nphp luna routes:clear\n\n# List routes (shows cached routes if available)\nphp luna routes:list",
            )]),
            Block::para("Route caching is automatically triggered when running <code>routes:cache</code> or when routes are loaded in production mode."),
            Block::heading(2, "File Serving"),
            Block::para("Serve files directly through routes:"),
            Block::code([CodeSample::php(
                r#"// Serve single file\nroute('GET', '/download/terms', function () {\n    return Response::file('docs/terms.pdf');\n});\n\n// Dynamic file serving\nroute('GET', '/download/{file}', function (Request $request, $file) {\n    return Response::file(\"docs/$file\");\n});"#,
            )]),
            Block::heading(2, "Complete Example"),
            Block::para("A complete API route file example:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nuse App\\Controllers\\ArticleController;\nuse App\\Controllers\\UserController;\n\n// Public routes\nroute('GET', '/', function () {\n    return ['status' => 'API is running'];\n});\n\n// User routes\nprefix('users', function () {\n    route('POST', '/', UserController::class, 'store');\n    route('GET', '/verify/{token}', UserController::class, 'verify');\n    \n    // Authenticated routes\n    middleware('auth', function () {\n        route('GET', '/profile', UserController::class, 'profile');\n        route('PUT', '/profile', UserController::class, 'update');\n    });\n});\n\n// Article resource\nendpoint('articles', ArticleController::class);"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Group related routes together using prefixes",
                "Apply middleware at the group level when possible",
                "Use RESTful conventions for resource routes",
                "Cache routes in production environment",
                "Document complex route parameters",
                "Keep route files organized by domain/feature",
            ]),
        ],
    )
}
