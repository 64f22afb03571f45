use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "notifications",
        "Notifications",
        "Send notifications to users",
        vec![
            Block::para("Rivulet's notification system provides a simple global <code>Notify()</code> function for sending notifications through multiple channels."),
            Block::heading(2, "Global Function"),
            Block::code([CodeSample::php(
                r#"Notify(\n    string|array $to,          // Recipient(s) in channel-specific format\n    string $channel,           // Channel name (firebase, pusher, etc.)\n    string $title = '',        // Notification title\n    string $body = '',         // Notification content  \n    array $data = []           // Additional payload data\n): bool"#,
            )]),
            Block::heading(2, "Configuration"),
            Block::para("Configure notification services in <code>config/services.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'firebase' => [\n        'api_key' => env('NOTIFICATION_FIREBASE_API_KEY'),\n    ],\n    'pusher' => [\n        'app_id' => env('NOTIFICATION_PUSHER_APP_ID'),\n        'app_key' => env('NOTIFICATION_PUSHER_APP_KEY'),\n        'app_secret' => env('NOTIFICATION_PUSHER_APP_SECRET'),\n        'cluster' => env('NOTIFICATION_PUSHER_CLUSTER'),\n    ],\n    'slack' => [\n        'webhook' => env('NOTIFICATION_SLACK_WEBHOOK'),\n    ],\n    'whatsapp' => [\n        'api_key' => env('NOTIFICATION_WHATSAPP_API_KEY'),\n    ],\n    'sms' => [\n        'provider' => env('NOTIFICATION_SMS_PROVIDER', 'twilio'),\n        'account_sid' => env('NOTIFICATION_SMS_ACCOUNT_SID'),\n        'auth_token' => env('NOTIFICATION_SMS_AUTH_TOKEN'),\n        'from' => env('NOTIFICATION_SMS_FROM'),\n    ],\n];"#,
            )]),
            Block::heading(2, "Environment Variables"),
            Block::code([CodeSample::shell(
                r"# .env Example\nNOTIFICATION_FIREBASE_API_KEY=your_firebase_key\nNOTIFICATION_PUSHER_APP_ID=your_app_id\nNOTIFICATION_PUSHER_APP_KEY=your_app_key\nNOTIFICATION_PUSHER_APP_SECRET=your_app_secret\nNOTIFICATION_PUSHER_CLUSTER=mt1\nNOTIFICATION_SLACK_WEBHOOK=https://hooks.slack.com/services/...\nNOTIFICATION_WHATSAPP_API_KEY=your_whatsapp_key\nNOTIFICATION_SMS_ACCOUNT_SID=your_account_sid\nNOTIFICATION_SMS_AUTH_TOKEN=your_auth_token\nNOTIFICATION_SMS_FROM=+15551234567",
            )]),
            Block::heading(2, "Supported Channels"),
            Block::bullets([
                "<strong>Firebase</strong> - Mobile push notifications",
                "<strong>Pusher</strong> - Real-time web notifications",
                "<strong>Slack</strong> - Team messaging platform",
                "<strong>WhatsApp</strong> - Business messaging",
                "<strong>SMS</strong> - Text message notifications",
                "<strong>Mail</strong> - Email notifications",
            ]),
            Block::heading(2, "Firebase Notification"),
            Block::code([CodeSample::php(
                r#"// Global helper\nNotifyFirebase('device_token_123', 'New Message', 'You have 3 unread messages');\n\n// Original chainable method\napp()->make('notification')->channel('firebase')->to('device_token_123')->title('New Message')->body('You have 3 unread messages')->send();"#,
            )]),
            Block::heading(2, "Pusher Notification"),
            Block::code([CodeSample::php(
                r#"// Global helper\nNotifyPusher('channel-123', 'Event Update', 'New event scheduled');\n\n// Original chainable method\napp()->make('notification')->channel('pusher')->to('channel-123')->title('Event Update')->body('New event scheduled')->send();"#,
            )]),
            Block::heading(2, "Slack Notification"),
            Block::code([CodeSample::php(
                r#"// Global helper\nNotifySlack('#alerts', 'Server Warning', 'High memory usage detected');\n\n// Original chainable method\napp()->make('notification')->channel('slack')->to('#alerts')->title('Server Warning')->body('High memory usage detected')->send();"#,
            )]),
            Block::heading(2, "WhatsApp Notification"),
            Block::code([CodeSample::php(
                r#"// Global helper\nNotifyWhatsapp('+15551234567', '', 'Your package has shipped. Tracking #: ABC123');\n\n// Original chainable method\napp()->make('notification')->channel('whatsapp')->to('+15551234567')->body('Your package has shipped. Tracking #: ABC123')->send();"#,
            )]),
            Block::heading(2, "SMS Notification"),
            Block::code([CodeSample::php(
                r#"// Global helper\nNotifySms('+15551234567', 'Appointment Reminder', 'Your dental appointment is tomorrow at 2PM');\n\n// Original chainable method\napp()->make('notification')->channel('sms')->to('+15551234567')->title('Appointment Reminder')->body('Your dental appointment is tomorrow at 2PM')->send();"#,
            )]),
            Block::heading(2, "Mail Notification"),
            Block::code([CodeSample::php(
                r#"// Global helper\nNotifyMail('user@example.com', 'Welcome', 'Thanks for signing up!');\n\n// Original chainable method\napp()->make('notification')->channel('mail')->to('user@example.com')->title('Welcome')->body('Thanks for signing up!')->send();"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use channel-specific formatting for recipients",
                "Keep titles under 60 characters for mobile",
                "Include deep links in data payload",
                "Always wrap in try-catch for critical notifications",
                "Queue bulk notifications for better performance",
            ]),
        ],
    )
}
