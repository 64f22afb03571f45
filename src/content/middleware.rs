use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "middleware",
        "Authentication & Middleware",
        "Filter HTTP requests",
        vec![
            Block::para("Rivulet provides a complete JWT-based authentication system with middleware protection for API routes."),
            Block::note("Note: The authentication middleware ('auth') is built-in and ready to use."),
            Block::heading(2, "Built-in Auth Middleware"),
            Block::para("Rivulet comes with a pre-configured authentication middleware that handles:"),
            Block::bullets([
                "JWT token verification",
                "Authorization header parsing",
                "User attachment to requests",
                "Token expiration checks",
            ]),
            Block::para("Use it directly in your routes:"),
            Block::code([CodeSample::php(
                r#"// Protected route using built-in auth middleware\nroute('GET', '/profile', ['middleware' => 'auth'], function() {\n    return ['data' => 'Protected content'];\n});"#,
            )]),
            Block::heading(2, "Core Commands"),
            Block::code([CodeSample::shell(
                r"# Create new middleware\nphp luna create:middleware Admin\n\n# Create auth middleware\nphp luna create:middleware Auth",
            )]),
            Block::heading(2, "Creating Middleware"),
            Block::para("Generate a new middleware class:"),
            Block::code([
                CodeSample::shell(r"php luna create:middleware Admin"),
                CodeSample::text(r"Creates: app/Middleware/AdminMiddleware.php"),
            ]),
            Block::para("Example middleware structure:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Middleware;\n\nuse Rivulet\\Middleware\\Middleware;\nuse Rivulet\\Http\\Request;\nuse Closure;\n\nclass AdminMiddleware implements Middleware {\n    public function handle(Request $request, Closure $next) {\n        if (!$request->user || !$request->user->is_admin) {\n            return Response::json(['error' => 'Admin access required'], 403);\n        }\n        \n        return $next($request);\n    }\n}"#,
            )]),
            Block::heading(2, "Route Protection Methods"),
            Block::heading(4, "1. Direct Middleware Application"),
            Block::code([CodeSample::php(
                r#"middleware('auth', function () {\n    route('POST', '/login', function () {\n        // Login logic\n    });\n    \n    route('POST', '/logout', function () {\n        // Logout logic\n    });\n    \n    route('GET', '/profile', function () {\n        // Return user profile\n    });\n});"#,
            )]),
            Block::heading(4, "2. Group Middleware with Prefix"),
            Block::code([CodeSample::php(
                r#"group('prefix=admin', 'middleware=auth', function () {\n    route('GET', '/dashboard', function () {\n        return ['message' => 'Admin Dashboard'];\n    });\n    \n    route('POST', '/settings', function () {\n        return ['message' => 'Settings updated'];\n    });\n});"#,
            )]),
            Block::heading(2, "Authentication Flow"),
            Block::bullets([
                "Client sends credentials to login endpoint",
                "Server validates credentials and returns JWT token",
                "Client includes token in Authorization header",
                "AuthMiddleware verifies token and attaches user",
                "Protected routes access user via <code>$request->user</code>",
            ]),
            Block::heading(2, "Token Management"),
            Block::code([CodeSample::php(
                r#"// Generate token after login\n$token = Authentication::generateToken($user->id);\n\n// Verify token in middleware\n$user = Authentication::verifyToken($token);\n\n// Revoke token on logout\n$user->update(['authtoken' => null]);"#,
            )]),
            Block::heading(2, "Configuration"),
            Block::code([CodeSample::php(
                r#"// config/auth.php\nreturn [\n    'token_expiry' => 3600, // 1 hour\n    'guards' => [\n        'api' => [\n            'driver' => 'token',\n            'hash' => false\n        ]\n    ],\n    'user_model' => 'App\\\\Models\\\\User',\n    'store_token' => true\n];"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use middleware groups for related routes",
                "Keep token expiration times reasonable",
                "Always use HTTPS in production",
                "Implement rate limiting on auth endpoints",
                "Log authentication attempts",
            ]),
        ],
    )
}
