use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "migrations",
        "Database Migrations",
        "Manage database schema changes",
        vec![
            Block::para("Rivulet's migration system provides version control for your database schema, allowing you to modify and share database structures across your team."),
            Block::heading(2, "Migration Commands"),
            Block::para("The following commands are available for managing migrations:"),
            Block::code([CodeSample::shell(
                r"# Create a new resource migration\nphp luna create:resource User\n\n# Run pending migrations\nphp luna database:migrate\n\n# Rollback the last batch of migrations\nphp luna database:rollback\n\n# Run database seeders\nphp luna database:seed",
            )]),
            Block::heading(2, "Creating Migrations"),
            Block::para("Generate a new migration file for a resource:"),
            Block::code([
                CodeSample::shell(r"php luna create:resource Post"),
                CodeSample::text(r"Creates: database/Migrations/2025_08_14_000000_create_posts_table.php"),
            ]),
            Block::para("The generated migration includes both <code>up()</code> and <code>down()</code> methods:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nuse Rivulet\\Database\\Migrations\\Migration;\n\nclass CreatePostsTable extends Migration\n{\n    public function up()\n    {\n        $this->executeSchema(function ($builder) {\n            $builder->createTable('posts', function ($add) {\n                $add('id', 'INT', ['auto_increment' => true, 'primary_key' => true]);\n                $add('title', 'VARCHAR(255)');\n                $add('content', 'TEXT');\n                $add('created_at', 'TIMESTAMP', ['default' => 'CURRENT_TIMESTAMP']);\n                $add('updated_at', 'TIMESTAMP', ['default' => 'CURRENT_TIMESTAMP']);\n            });\n        });\n    }\n\n    public function down()\n    {\n        $this->executeSchema(function ($builder) {\n            $builder->dropTable('posts');\n        });\n    }\n}"#,
            )]),
            Block::heading(2, "Migration Structure"),
            Block::para("A migration class must implement two methods:"),
            Block::bullets([
                "<code>up()</code> - Defines the changes to apply to the database",
                "<code>down()</code> - Defines how to reverse those changes",
            ]),
            Block::heading(4, "Available Schema Operations"),
            Block::code([CodeSample::php(
                r#"// Create table\n$builder->createTable('table_name', function($add) {\n    $add('column_name', 'TYPE', [options]);\n});\n\n// Drop table\n$builder->dropTable('table_name');\n\n// Alter table\n$builder->alterTable('table_name', function($action, $column, $type, $options) {\n    // Actions: 'add', 'drop', 'modify', 'rename'\n});"#,
            )]),
            Block::heading(2, "Column Types & Options"),
            Block::para("Supported column types and common options:"),
            Block::code([CodeSample::text(
                r#"Column Types:\n- INT, BIGINT\n- VARCHAR(length), TEXT\n- BOOLEAN, TINYINT\n- TIMESTAMP, DATETIME\n- FLOAT, DOUBLE\n- JSON\n\nCommon Options:\n- 'primary_key' => true\n- 'auto_increment' => true\n- 'nullable' => true/false\n- 'default' => value\n- 'after' => column_name"#,
            )]),
            Block::heading(2, "Example Migration"),
            Block::para("Here's a complete users table migration:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nuse Rivulet\\Database\\Migrations\\Migration;\n\nclass CreateUsersTable extends Migration\n{\n    public function up()\n    {\n        $this->executeSchema(function ($builder) {\n            $builder->createTable('users', function ($add) {\n                $add('id', 'INT', ['auto_increment' => true, 'primary_key' => true]);\n                $add('name', 'VARCHAR(255)', ['nullable' => false]);\n                $add('email', 'VARCHAR(255)', ['nullable' => false]);\n                $add('password', 'VARCHAR(255)', ['nullable' => false]);\n                $add('is_admin', 'BOOLEAN', ['default' => false]);\n                $add('created_at', 'TIMESTAMP', ['default' => 'CURRENT_TIMESTAMP']);\n            });\n        });\n    }\n\n    public function down()\n    {\n        $this->executeSchema(function ($builder) {\n            $builder->dropTable('users');\n        });\n    }\n}"#,
            )]),
            Block::heading(2, "Running Migrations"),
            Block::para("Apply all pending migrations:"),
            Block::code([
                CodeSample::shell(r"php luna database:migrate"),
                CodeSample::text(r"This will run all migrations that haven't been executed yet"),
            ]),
            Block::heading(2, "Rolling Back Migrations"),
            Block::para("Revert the last batch of migrations:"),
            Block::code([
                CodeSample::shell(r"php luna database:rollback"),
                CodeSample::text(r"This will undo the most recent migration batch"),
            ]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Each migration should focus on a single schema change",
                "Always implement the <code>down()</code> method for rollbacks",
                "Test migrations in a development environment first",
                "Never modify migrations that have been committed to version control",
            ]),
        ],
    )
}
