use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "events",
        "Events & Listeners",
        "Implement event-driven architecture",
        vec![
            Block::para("Rivulet's event system provides a simple observer implementation, allowing you to subscribe and listen for events in your application."),
            Block::heading(2, "Core Commands"),
            Block::code([CodeSample::shell(
                r"# Create a new event\nphp luna create:event ArticleUpdated\n\n# Create a new listener\nphp luna create:listener SendArticleUpdateNotification\n\n# Register events in config/events.php",
            )]),
            Block::heading(2, "Event System Overview"),
            Block::para("The event system consists of three main components:"),
            Block::bullets([
                "<strong>Events</strong> - Simple objects that represent something that happened",
                "<strong>Listeners</strong> - Classes that perform actions in response to events",
                "<strong>Dispatcher</strong> - Manages the event-listener relationships",
            ]),
            Block::heading(2, "Creating Events"),
            Block::para("Generate a new event class:"),
            Block::code([
                CodeSample::shell(r"php luna create:event ArticleDeleted"),
                CodeSample::text(r"Creates: app/Events/ArticleDeleted.php"),
            ]),
            Block::para("Example event class:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Events;\n\nuse Rivulet\\Events\\Event;\n\nclass ArticleDeleted extends Event\n{\n    /**\n     * Create new event instance\n     */\n    public function __construct(public $articleId)\n    {\n        parent::__construct(['id' => $articleId]);\n    }\n}"#,
            )]),
            Block::heading(2, "Creating Listeners"),
            Block::para("Generate a new listener class:"),
            Block::code([
                CodeSample::shell(r"php luna create:listener SendDeleteNotification"),
                CodeSample::text(r"Creates: app/Listeners/SendDeleteNotification.php"),
            ]),
            Block::para("Example listener class:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Listeners;\n\nuse App\\Events\\ArticleDeleted;\nuse Rivulet\\Events\\Listener;\n\nclass SendDeleteNotification extends Listener\n{\n    public function handle(ArticleDeleted $event): void\n    {\n        $articleId = $event->getData()['id'];\n        // Send notification logic here\n    }\n}"#,
            )]),
            Block::heading(2, "Registering Events"),
            Block::para("Register event-listener relationships in <code>config/events.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'App\\Events\\ArticleDeleted' => [\n        'App\\Listeners\\SendDeleteNotification',\n        'App\\Listeners\\LogArticleDeletion',\n        'App\\Listeners\\UpdateSearchIndex'\n    ],\n    \n    'App\\Events\\UserRegistered' => [\n        'App\\Listeners\\SendWelcomeEmail',\n        'App\\Listeners\\CreateUserProfile'\n    ]\n];"#,
            )]),
            Block::heading(2, "Dispatching Events"),
            Block::para("Trigger events from anywhere in your application:"),
            Block::code([CodeSample::php(
                r#"// With constructor data\n$event = new App\\Events\\ArticleDeleted($articleId);\nTriggerEvent($event);\n\n// Or with array data\nTriggerEvent('ArticleDeleted', ['id' => $articleId]);"#,
            )]),
            Block::heading(2, "Complete Example"),
            Block::para("1. First create the event and listener:"),
            Block::code([CodeSample::shell(
                r"php luna create:event OrderShipped\nphp luna create:listener SendShipmentNotification",
            )]),
            Block::para("2. Configure the relationship in <code>config/events.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'App\\Events\\OrderShipped' => [\n        'App\\Listeners\\SendShipmentNotification'\n    ]\n];"#,
            )]),
            Block::para("3. Dispatch the event when an order ships:"),
            Block::code([CodeSample::php(
                r#"// In your OrderController\npublic function ship($orderId)\n{\n    // Ship the order...\n    \n    // Dispatch event\n    TriggerEvent('OrderShipped', [\n        'order_id' => $orderId,\n        'customer_id' => $customerId\n    ]);\n}"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use events for side effects, not core business logic",
                "Keep listeners small and focused",
                "Document expected event payloads",
                "Consider queueing long-running listeners",
                "Name events in past tense (e.g. OrderShipped, UserRegistered)",
            ]),
        ],
    )
}
