use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "session-cookies",
        "Session & Cookie Management",
        "Secure session and cookie handling with global helpers",
        vec![
            Block::para("Rivulet provides secure session and cookie handling with global helper functions."),
            Block::heading(2, "Configuration"),
            Block::heading(3, "Session Configuration (config/session.php)"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'driver'    => 'file', // file, db, redis\n    'lifetime'  => 120,    // minutes (2 hours)\n    'path'      => '/tmp', // storage path for file driver\n    'secure'    => env('APP_ENV') === 'production', // HTTPS-only\n    'http_only' => true    // Prevent JavaScript access\n];"#,
            )]),
            Block::heading(3, "Cookie Configuration (config/cookies.php)"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'prefix'   => env('APP_NAME', 'rivulet') . '_',\n    'expiry'   => 0,       // seconds (0 = session cookie)\n    'path'     => '/',     // accessible paths\n    'domain'   => null,    // accessible domains\n    'secure'   => env('APP_ENV') === 'production',\n    'httponly' => true,    // Prevent JavaScript access\n    'samesite' => 'lax'    // CSRF protection\n];"#,
            )]),
            Block::heading(2, "Session Helpers"),
            Block::heading(3, "Basic Usage"),
            Block::code([CodeSample::php(
                r#"// Set session value\nSetSession('user_id', 123);\n\n// Get session value\n$userId = GetSession('user_id');\n\n// Remove session value\nForgetSession('user_id');"#,
            )]),
            Block::heading(3, "Flash Data (One-Time Use)"),
            Block::code([CodeSample::php(
                r#"// Set flash data (available until next request)\nFlashSession('message', 'Profile updated!');\n\n// Get and remove flash data\n$message = GetFlashSession('message');"#,
            )]),
            Block::heading(2, "Cookie Helpers"),
            Block::heading(3, "Basic Usage"),
            Block::code([CodeSample::php(
                r#"// Set cookie (default expiry from config)\nSetCookie('preferences', 'dark_mode');\n\n// Set cookie with custom expiry (1 day)\nSetCookie('remember_token', 'abc123', 86400);\n\n// Get cookie value\n$prefs = GetCookie('preferences');\n\n// Delete cookie\nForgetCookie('preferences');"#,
            )]),
            Block::heading(3, "Secure Cookie Example"),
            Block::code([CodeSample::php(
                r#"SetCookie(\n    'auth_token',\n    $token,\n    3600,     // 1 hour expiry\n    '/',      // path\n    '.example.com', // domain\n    true,     // secure (HTTPS only)\n    true,     // httpOnly\n    'strict'  // sameSite\n);"#,
            )]),
            Block::heading(2, "Security Features"),
            Block::bullets([
                "<strong>HttpOnly</strong>: Prevents JavaScript access to cookies",
                "<strong>Secure Flag</strong>: Cookies only sent over HTTPS in production",
                "<strong>SameSite</strong>: CSRF protection (Lax/Strict)",
                "<strong>Session Regeneration</strong>: Built-in protection against session fixation",
                "<strong>Prefixing</strong>: Prevents cookie name collisions",
            ]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use sessions for sensitive data, cookies for preferences",
                "Always set appropriate expiry times",
                "Regenerate session ID after login",
                "Use flash messages for one-time notifications",
                "Validate cookie data before use",
                "Consider SameSite 'strict' for sensitive actions",
            ]),
            Block::heading(2, "Example Workflow"),
            Block::code([CodeSample::php(
                r#"// User login\nfunction login($user) {\n    SetSession('user_id', $user->id);\n    SetCookie('remember_token', $user->remember_token, 86400 * 30); // 30 days\n    app()->make('session')->regenerate(); // Prevent session fixation\n    FlashSession('message', 'Welcome back!');\n}\n\n// User logout\nfunction logout() {\n    ForgetSession('user_id');\n    ForgetCookie('remember_token');\n    app()->make('session')->destroy();\n}"#,
            )]),
        ],
    )
}
