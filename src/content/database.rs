use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "database",
        "Rivulet Database Configuration",
        "Connect to databases and perform operations",
        vec![
            Block::para("Rivulet API supports multiple database connections with configuration through environment variables and PHP configuration files."),
            Block::heading(2, "Environment Configuration"),
            Block::para("Configure your primary database connection in the <code>.env</code> file:"),
            Block::code([CodeSample::shell(
                r"# Primary Database Connection\nDB_CONNECTION=default\nDB_DRIVER=mysql\nDB_HOST=localhost\nDB_PORT=3306\nDB_DATABASE=rivulet\nDB_USERNAME=root\nDB_PASSWORD=",
            )]),
            Block::para("For additional connections, prefix the variables with your connection name:"),
            Block::code([CodeSample::shell(
                r"# Secondary Database Connection\nSECONDARY_DB_CONNECTION=secondary\nSECONDARY_DB_DRIVER=mysql\nSECONDARY_DB_HOST=localhost\nSECONDARY_DB_PORT=3306\nSECONDARY_DB_DATABASE=rivulet_secondary\nSECONDARY_DB_USERNAME=root\nSECONDARY_DB_PASSWORD=",
            )]),
            Block::heading(2, "Database Configuration File"),
            Block::para("The <code>config/database.php</code> file defines all available connections and their parameters. Below is a comprehensive configuration example supporting multiple database drivers:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'default' => env('DB_CONNECTION', 'mysql'),\n    \n    'connections' => [\n        // MySQL/MariaDB Configuration\n        'mysql' => [\n            'driver' => 'mysql',\n            'host' => env('DB_HOST', '127.0.0.1'),\n            'port' => env('DB_PORT', '3306'),\n            'database' => env('DB_DATABASE', 'rivulet'),\n            'username' => env('DB_USERNAME', 'root'),\n            'password' => env('DB_PASSWORD', ''),\n            'charset' => 'utf8mb4',\n            'collation' => 'utf8mb4_unicode_ci',\n            'prefix' => '',\n            'strict' => true\n        ],\n        \n        // SQLite Configuration\n        'sqlite' => [\n            'driver' => 'sqlite',\n            'database' => env('DB_DATABASE', 'storage/database.sqlite'),\n            'prefix' => ''\n        ]\n    ]\n];"#,
            )]),
            Block::heading(2, "Connection Management"),
            Block::para("The default connection will be used automatically by models. To use alternate connections:"),
            Block::code([CodeSample::php(
                r#"<?php\n// In your model\nprotected $connection = 'secondary';\n\n// Or dynamically at runtime\nDB::connection('secondary')->table('users')->get();"#,
            )]),
            Block::para("Key configuration considerations:"),
            Block::bullets([
                "Always keep sensitive credentials in your <code>.env</code> file",
                "Use different connections for read/write operations if needed",
                "SQLite requires write permissions to the database file",
                "Test connections after configuration changes",
            ]),
        ],
    )
}
