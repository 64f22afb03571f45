use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "jobs",
        "Queue & Scheduling System",
        "Handle background tasks",
        vec![
            Block::para("Rivulet provides a robust queue system for background job processing and task scheduling, helping you offload time-consuming tasks from your main application flow."),
            Block::heading(2, "Core Commands"),
            Block::code([CodeSample::shell(
                r"# Create a new job class\nphp luna create:job ProcessPodcast\n\n# Start queue worker\nphp luna queue:work\n\n# Process scheduled jobs\nphp luna schedule:run",
            )]),
            Block::heading(2, "Queue Configuration"),
            Block::para("Configure queue connections in <code>config/queue.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'default' => env('QUEUE_CONNECTION', 'database'),\n    \n    'connections' => [\n        'database' => [\n            'driver' => 'database',\n            'table' => 'jobs',\n            'queue' => 'default',\n            'retry_after' => 90,\n            'max_retries' => 3,\n            'failed_table' => 'failed_jobs'\n        ],\n        \n        'redis' => [\n            'driver' => 'redis',\n            'connection' => 'default',\n            'queue' => 'default',\n            'retry_after' => 90\n        ]\n    ]\n];"#,
            )]),
            Block::heading(2, "Creating Jobs"),
            Block::para("Generate a new job class:"),
            Block::code([
                CodeSample::shell(r"php luna create:job SendWelcomeEmail"),
                CodeSample::text(r"Creates: app/Jobs/SendWelcomeEmail.php"),
            ]),
            Block::para("Example job class:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Jobs;\n\nuse Rivulet\\Queue\\Job;\n\nclass SendWelcomeEmail extends Job\n{\n    public function handle()\n    {\n        $userId = $this->data['user_id'];\n        $user = User::find($userId);\n        \n        // Send email logic\n        Mail::to($user->email)\n            ->subject('Welcome to our platform')\n            ->send(new WelcomeEmail($user));\n    }\n}"#,
            )]),
            Block::heading(2, "Dispatching Jobs"),
            Block::para("Dispatch jobs from anywhere in your application:"),
            Block::code([CodeSample::php(
                r#"// Simple dispatch\napp('queue')->push(SendWelcomeEmail::class, ['user_id' => $user->id]);\n\n// With specific queue\napp('queue')->push(\n    SendWelcomeEmail::class, \n    ['user_id' => $user->id],\n    'emails'\n);"#,
            )]),
            Block::heading(2, "Running Queue Workers"),
            Block::para("Process jobs from the queue:"),
            Block::code([CodeSample::shell(
                r"# Process jobs indefinitely\nphp luna queue:work\n\n# Process specific queue\nphp luna queue:work emails\n\n# Process limited number of jobs\nphp luna queue:work default 10",
            )]),
            Block::heading(2, "Task Scheduling"),
            Block::para("Configure scheduled jobs in <code>config/schedule.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'dailyReport' => [\n        'job' => 'App\\Jobs\\GenerateDailyReport',\n        'data' => ['type' => 'summary']\n    ],\n    \n    'hourlyCleanup' => [\n        'job' => 'App\\Jobs\\CleanupTempFiles'\n    ]\n];"#,
            )]),
            Block::para("Run scheduled jobs (typically via cron):"),
            Block::code([CodeSample::shell(
                r"# Run scheduled jobs\nphp luna schedule:run\n\n# Cron entry for minute-by-minute scheduling\n* * * * * cd /path-to-project && php luna schedule:run >> /dev/null 2>&1",
            )]),
            Block::heading(2, "Complete Example"),
            Block::para("1. Create a job for newsletter sending:"),
            Block::code([CodeSample::shell(r"php luna create:job SendNewsletter")]),
            Block::para("2. Implement the job:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Jobs;\n\nuse Rivulet\\Queue\\Job;\n\nclass SendNewsletter extends Job\n{\n    public function handle()\n    {\n        $subscribers = Subscriber::where('active', true)->get();\n        \n        foreach ($subscribers as $subscriber) {\n            Mail::to($subscriber->email)\n                ->send(new Newsletter($subscriber));\n        }\n    }\n}"#,
            )]),
            Block::para("3. Schedule it to run weekly:"),
            Block::code([CodeSample::php(
                r#"// In config/schedule.php\nreturn [\n    'weeklyNewsletter' => [\n        'job' => 'App\\Jobs\\SendNewsletter'\n    ]\n];"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use queues for time-consuming tasks (emails, reports, etc.)",
                "Keep jobs small and focused",
                "Implement proper error handling in jobs",
                "Use separate queues for different job types",
                "Monitor failed jobs",
                "Use supervisor to keep queue workers running",
            ]),
        ],
    )
}
