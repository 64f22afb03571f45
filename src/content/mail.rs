use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "mail",
        "Sending Mail",
        "Send emails from your application",
        vec![
            Block::para("Rivulet's mail system provides a unified API for sending emails through multiple drivers with support for templates and attachments."),
            Block::para("Rivulet provides a global <code>SendEmail()</code> helper function for sending emails with a simple, consistent API."),
            Block::heading(2, "Configuration"),
            Block::para("Configure mail settings in <code>config/mail.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'default' => env('MAIL_MAILER', 'smtp'),\n    \n    'mailers' => [\n        'smtp' => [\n            'transport' => 'smtp',\n            'host' => env('MAIL_HOST'),\n            'port' => env('MAIL_PORT', 587),\n            'username' => env('MAIL_USERNAME'),\n            'password' => env('MAIL_PASSWORD'),\n            'encryption' => env('MAIL_ENCRYPTION', 'tls'),\n            'from' => [\n                'address' => env('MAIL_FROM_ADDRESS'),\n                'name' => env('MAIL_FROM_NAME'),\n            ],\n        ],\n        // Additional mailers...\n    ],\n];"#,
            )]),
            Block::heading(2, "Supported Drivers"),
            Block::bullets([
                "<strong>SMTP</strong> - Traditional mail servers",
                "<strong>Mailgun</strong> - Transactional email service",
                "<strong>SendGrid</strong> - Cloud-based email delivery",
                "<strong>Sendmail</strong> - Local sendmail binary",
                "<strong>mail()</strong> - PHP's built-in mail function",
            ]),
            Block::heading(2, "Environment Variables"),
            Block::code([CodeSample::shell(
                r"# .env Example\nMAIL_MAILER=smtp\nMAIL_HOST=mail.example.com\nMAIL_PORT=587\nMAIL_USERNAME=user@example.com\nMAIL_PASSWORD=yourpassword\nMAIL_ENCRYPTION=tls\nMAIL_FROM_ADDRESS=noreply@example.com\nMAIL_FROM_NAME=",
            )]),
            Block::heading(2, "Function Signature"),
            Block::code([CodeSample::php(
                r#"SendEmail(\n    $to,\n    string $subject,\n    string $type = 'text',\n    string $content,\n    array $data = [],\n    $cc = null,\n    $bcc = null,\n    array $attachments = []\n): bool"#,
            )]),
            Block::heading(2, "Basic Usage"),
            Block::heading(3, "Simple Text Email"),
            Block::code([CodeSample::php(
                r#"SendEmail(\n    'user@example.com',\n    'Welcome Message',\n    'text',\n    'Hello and welcome to our service!'\n);"#,
            )]),
            Block::heading(3, "HTML Email"),
            Block::code([CodeSample::php(
                r#"SendEmail(\n    'user@example.com',\n    'HTML Newsletter',\n    'html',\n    '<h1>Latest Updates</h1><p>Check out our new features!</p>'\n);"#,
            )]),
            Block::heading(3, "Template-Based Email"),
            Block::code([CodeSample::php(
                r#"SendEmail(\n    'user@example.com',\n    'Your Order Confirmation',\n    'template',\n    'emails.order_confirmation',\n    ['order' => $order]\n);"#,
            )]),
            Block::heading(2, "Advanced Usage"),
            Block::heading(3, "With CC and BCC"),
            Block::code([CodeSample::php(
                r#"SendEmail(\n    'user@example.com',\n    'Project Update',\n    'html',\n    '<p>Project status report attached</p>',\n    [],\n    'manager@example.com', // CC\n    'archive@example.com'  // BCC\n);"#,
            )]),
            Block::heading(3, "With Attachments"),
            Block::code([CodeSample::php(
                r#"// Single attachment\nSendEmail(\n    'client@example.com',\n    'Your Documents',\n    'text',\n    'Please find attached files',\n    [],\n    null,\n    null,\n    ['/path/to/document.pdf']\n);\n\n// Multiple attachments with custom names\nSendEmail(\n    'client@example.com',\n    'Your Documents',\n    'text',\n    'Please find attached files',\n    [],\n    null,\n    null,\n    [\n        ['file' => '/path/to/document.pdf', 'name' => 'contract.pdf'],\n        ['file' => '/path/to/image.jpg', 'name' => 'photo.jpg']\n    ]\n);"#,
            )]),
            Block::heading(3, "Complete Example"),
            Block::code([CodeSample::php(
                r#"SendEmail(\n    ['user1@example.com', 'user2@example.com'],\n    'Team Meeting Minutes',\n    'template',\n    'emails.meeting_minutes',\n    [\n        'date' => '2023-06-15',\n        'topics' => ['Budget', 'Timeline', 'HR']\n    ],\n    'team@example.com',\n    'records@example.com',\n    ['/path/to/minutes.pdf']\n);"#,
            )]),
            Block::heading(2, "Return Value"),
            Block::para("The function returns <code>true</code> if the email was successfully sent, and <code>false</code> on failure."),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use templates for consistent email formatting",
                "Queue long-running email operations",
                "Validate recipient addresses",
                "Keep attachments under size limits",
                "Use environment variables for credentials",
                "Test emails in development with mail traps",
            ]),
        ],
    )
}
