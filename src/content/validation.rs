use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "validation",
        "Validation",
        "Validate incoming data",
        vec![
            Block::para("Rivulet validates request data before it reaches your application logic. Validation runs against a rule map and raises a JSON-formatted error response when a field fails."),
            Block::heading(2, "Database Configuration"),
            Block::para("Validation rules such as <code>unique</code> consult the database, so a working connection is required. Configure it through the environment:"),
            Block::code([
                CodeSample::shell(
                    r"# Configure your database in .env file\nDB_CONNECTION=mysql\nDB_HOST=127.0.0.1\nDB_PORT=3306\nDB_DATABASE=rivulet\nDB_USERNAME=root\nDB_PASSWORD=",
                ),
                CodeSample::php(
                    r#"<?php\n// Database configuration\nreturn [\n    'default' => env('DB_CONNECTION', 'mysql'),\n    'connections' => [\n        'mysql' => [\n            'driver' => 'mysql',\n            'host' => env('DB_HOST', '127.0.0.1'),\n            'port' => env('DB_PORT', '3306'),\n            'database' => env('DB_DATABASE', 'rivulet'),\n            'username' => env('DB_USERNAME', 'root'),\n            'password' => env('DB_PASSWORD', ''),\n        ],\n    ],\n];"#,
                ),
            ]),
            Block::heading(2, "ORM (Object-Relational Mapping)"),
            Block::para("Validated input flows straight into models. Generate a model and declare the attributes that accept request data:"),
            Block::code([
                CodeSample::shell(r"# Create a new model\nphp luna make:model User"),
                CodeSample::php(
                    r#"<?php\nnamespace App\\Models;\n\nuse Rivulet\\ORM\\Model;\n\nclass User extends Model\n{\n    protected $table = 'users';\n    \n    protected $fillable = [\n        'name', 'email', 'password',\n    ];\n}"#,
                ),
            ]),
            Block::heading(2, "CRUD Operations"),
            Block::para("Once input passes validation, the usual model operations apply:"),
            Block::code([CodeSample::php(
                r#"<?php\n// Create\n$user = new User();\n$user->name = 'John Doe';\n$user->email = 'john@example.com';\n$user->password = bcrypt('password');\n$user->save();\n\n// Read\n$users = User::all();\n$user = User::find(1);\n\n// Update\n$user = User::find(1);\n$user->name = 'Jane Doe';\n$user->save();\n\n// Delete\n$user = User::find(1);\n$user->delete();"#,
            )]),
            Block::heading(2, "Relationships"),
            Block::para("Validation pairs naturally with relationship constraints; rules such as <code>exists</code> check related tables before assignment. See the complete rule list on the Validation Rules page."),
        ],
    )
}
