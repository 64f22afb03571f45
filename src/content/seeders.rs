use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "seeders",
        "Database Seeders",
        "Populate your database with test data",
        vec![
            Block::para("Seeders allow you to populate your database with test or initial data. They are particularly useful during development and testing."),
            Block::heading(2, "Seeder Commands"),
            Block::code([CodeSample::shell(
                r"# Create a new seeder class\nphp luna create:seeder SeederName\n\n# Run all database seeders\nphp luna database:seed\n\n# Run specific seeder only\nphp luna database:seed --class=SeederName",
            )]),
            Block::heading(2, "Creating Seeders"),
            Block::para("Generate a new seeder class with boilerplate code:"),
            Block::code([
                CodeSample::shell(r"php luna create:seeder User"),
                CodeSample::text(r"Creates: database/Seeders/UserSeeder.php"),
            ]),
            Block::para("The generated file will contain:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace Database\\Seeders;\n\nuse App\\Models\\User;\nuse Rivulet\\Database\\Migrations\\SeedOperation;\n\nclass UserSeeder extends SeedOperation\n{\n    public function run()\n    {\n        // Seeding logic here\n    }\n}"#,
            )]),
            Block::heading(2, "Running Seeders"),
            Block::para("Execute all seeders:"),
            Block::code([CodeSample::shell(r"php luna database:seed")]),
            Block::para("Run a specific seeder:"),
            Block::code([CodeSample::shell(r"php luna database:seed --class=UserSeeder")]),
            Block::para("Combine with migrations:"),
            Block::code([CodeSample::shell(r"php luna database:migrate --seed")]),
            Block::heading(2, "Example Usage"),
            Block::para("1. First create the seeder:"),
            Block::code([CodeSample::shell(r"php luna create:seeder AdminUser")]),
            Block::para("2. Then edit the seeder file:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace Database\\Seeders;\n\nuse App\\Models\\User;\nuse Rivulet\\Database\\Migrations\\SeedOperation;\n\nclass AdminUserSeeder extends SeedOperation\n{\n    public function run()\n    {\n        User::create([\n            'name' => 'Admin',\n            'email' => 'admin@example.com',\n            'password' => PassEncrypt('secret'),\n            'is_admin' => true\n        ]);\n    }\n}"#,
            )]),
            Block::para("3. Finally run the seeder:"),
            Block::code([CodeSample::shell(r"php luna database:seed --class=AdminUserSeeder")]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use seeders for development/test data only",
                "Never include sensitive credentials in seeders",
                "Consider using environment checks in seeders",
                "Document your seeders in project documentation",
            ]),
        ],
    )
}
