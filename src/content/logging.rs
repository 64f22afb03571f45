use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "logging",
        "Logging",
        "Log application events",
        vec![
            Block::para("Rivulet provides a robust file-based logging system with rotation, multiple log levels, and a simple API."),
            Block::heading(2, "Configuration"),
            Block::para("Configure logging in <code>config/logging.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'default' => env('LOG_CHANNEL', 'file'),\n    'channels' => [\n        'file' => [\n            'driver' => 'file',\n            'path' => dirname(__DIR__) . '/storage/logs/app.log',\n            'level' => env('LOG_LEVEL', 'debug'),\n        ],\n    ],\n];"#,
            )]),
            Block::heading(3, "Environment Variables"),
            Block::code([CodeSample::shell(
                r"LOG_CHANNEL=file  # Currently only 'file' is supported\nLOG_LEVEL=debug  # debug, info, notice, warning, error, critical, alert, emergency",
            )]),
            Block::heading(2, "Basic Usage"),
            Block::para("Use the <code>LogMessage()</code> global helper function:"),
            Block::code([CodeSample::php(
                r#"// Simple info log\nLogMessage('User logged in', 'info');\n\n// With context data\nLogMessage('Payment processed', 'info', [\n    'user_id' => 123,\n    'amount' => 99.99\n]);\n\n// Error logging\ntry {\n    // Some operation...\n} catch (\\Exception $e) {\n    LogMessage('Operation failed: ' . $e->getMessage(), 'error');\n}"#,
            )]),
            Block::heading(2, "Log Levels"),
            Block::bullets([
                "<strong>debug</strong>: Detailed debug information",
                "<strong>info</strong>: Interesting events",
                "<strong>notice</strong>: Normal but significant events",
                "<strong>warning</strong>: Exceptional occurrences that aren't errors",
                "<strong>error</strong>: Runtime errors",
                "<strong>critical</strong>: Critical conditions",
                "<strong>alert</strong>: Immediate action needed",
                "<strong>emergency</strong>: System is unusable",
            ]),
            Block::heading(2, "Log Rotation"),
            Block::para("Logs are automatically rotated with daily files. Example log files:"),
            Block::code([CodeSample::shell(
                r"storage/logs/app.log-2023-06-15.log\nstorage/logs/app.log-2023-06-16.log",
            )]),
            Block::para("Configure rotation period in <code>config/logging.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'default' => env('LOG_CHANNEL', 'file'),\n    'period' => env('LOG_ROTATION', 'daily'), // daily, weekly, or monthly\n    'channels' => [\n        'file' => [\n            'driver' => 'file',\n            'path' => dirname(__DIR__) . '/storage/logs/app.log',\n            'level' => env('LOG_LEVEL', 'debug'),\n        ],\n    ],\n];"#,
            )]),
            Block::para("Supported rotation periods:"),
            Block::bullets([
                "<strong>daily</strong> - Creates new log files each day (default)",
                "<strong>weekly</strong> - Creates new log files each week (Monday)",
                "<strong>monthly</strong> - Creates new log files each month",
            ]),
            Block::para("Example log file names:"),
            Block::code([CodeSample::shell(
                r"# Daily (default)\nstorage/logs/app.log-2023-06-15.log\n\n# Weekly\nstorage/logs/app.log-2023-W24.log  # Week 24 of 2023\n\n# Monthly\nstorage/logs/app.log-2023-06.log",
            )]),
            Block::para("Set rotation period in your <code>.env</code> file:"),
            Block::code([CodeSample::shell(r"LOG_ROTATION=weekly")]),
            Block::heading(2, "Clearing Logs"),
            Block::para("Use the console command to clear all log files:"),
            Block::code([CodeSample::shell(r"php luna logs:clear")]),
            Block::para("This will remove all <code>.log</code> files from the <code>storage/logs</code> directory."),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use appropriate log levels for different situations",
                "Include relevant context in log messages",
                "Avoid logging sensitive information",
                "Regularly monitor and archive old logs",
                "Use warning level for recoverable issues",
                "Reserve emergency for system-wide failures",
            ]),
            Block::heading(2, "Example From ArticlesController"),
            Block::code([CodeSample::php(
                r#"// In ArticlesController::addArticle()\nLogMessage('Article added: ' . $article->getAttribute('id'), 'info');\n\n// In ArticlesController::deleteArticle()\nLogMessage('Article deleted: ' . $id, 'warning');"#,
            )]),
        ],
    )
}
