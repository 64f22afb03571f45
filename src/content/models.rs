use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "models",
        "Rivulet ORM Model System",
        "Define models for your data",
        vec![
            Block::para("The Rivulet ORM provides a powerful ActiveRecord implementation for working with your database. Each database table has a corresponding Model which is used to interact with that table."),
            Block::heading(2, "Creating Models"),
            Block::para("Create new models using the Luna command line tool. This will generate a new model file in your models directory."),
            Block::code([
                CodeSample::shell(r"php luna create:model User"),
                CodeSample::text(r"This creates a new User model at app/Models/User.php"),
            ]),
            Block::heading(2, "Model Structure"),
            Block::para("Models extend the base <code>Rivulet\\Model</code> class and define their table structure and relationships. Here's a basic model example:"),
            Block::code([CodeSample::php(
                r#"<?php\nnamespace App\\Models;\n\nuse Rivulet\\Model;\n\nclass User extends Model\n{\n    protected $table = 'users';\n    \n    protected $fillable = [\n        'name', 'email', 'password'\n    ];\n    \n    protected $hidden = [\n        'password'\n    ];\n}"#,
            )]),
            Block::heading(2, "CRUD Operations"),
            Block::para("The model provides simple methods for creating, reading, updating, and deleting records:"),
            Block::code([CodeSample::php(
                r#"<?php\n// Create\n$user = User::create(['name' => 'John', 'email' => 'john@example.com']);\n\n// Read\n$user = User::find(1);\n$users = User::where('active', 1)->get();\n\n// Update\n$user = User::find(1);\n$user->name = 'Updated Name';\n$user->save();\n\n// Delete\n$user->delete(); // Soft delete\n$user->delete(false); // Permanent delete"#,
            )]),
            Block::heading(2, "Query Building"),
            Block::para("The model provides a fluent query builder interface for complex queries:"),
            Block::code([CodeSample::php(
                r#"<?php\n// Basic query\n$users = User::where('age', '>', 18)\n            ->orderBy('name', 'DESC')\n            ->limit(10)\n            ->get();\n\n// Joins\n$orders = Order::join('customers', 'orders.customer_id', '=', 'customers.id')\n              ->select('orders.*', 'customers.name')\n              ->get();\n\n// Aggregates\n$count = User::where('active', 1)->count();"#,
            )]),
            Block::heading(2, "Relationships"),
            Block::para("Rivulet supports four types of database relationships:"),
            Block::heading(4, "1. One-to-One (HasOne)"),
            Block::code([CodeSample::php(
                r#"<?php\nclass User extends Model\n{\n    public function profile()\n    {\n        return $this->hasOne(Profile::class);\n    }\n}\n\n// Usage:\n$profile = User::find(1)->profile;"#,
            )]),
            Block::heading(4, "2. One-to-Many (HasMany)"),
            Block::code([CodeSample::php(
                r#"<?php\nclass Post extends Model\n{\n    public function comments()\n    {\n        return $this->hasMany(Comment::class);\n    }\n}\n\n// Usage:\n$comments = Post::find(1)->comments;"#,
            )]),
            Block::heading(4, "3. Belongs-To (Inverse Relationship)"),
            Block::code([CodeSample::php(
                r#"<?php\nclass Comment extends Model\n{\n    public function post()\n    {\n        return $this->belongsTo(Post::class);\n    }\n}\n\n// Usage:\n$post = Comment::find(1)->post;"#,
            )]),
            Block::heading(4, "4. Many-to-Many (BelongsToMany)"),
            Block::code([CodeSample::php(
                r#"<?php\nclass User extends Model\n{\n    public function roles()\n    {\n        return $this->belongsToMany(Role::class);\n    }\n}\n\n// Usage:\n$roles = User::find(1)->roles;"#,
            )]),
            Block::heading(2, "Advanced Features"),
            Block::para("The model system includes several advanced features for complex applications:"),
            Block::heading(4, "Mass Assignment Protection"),
            Block::code([CodeSample::php(
                r#"<?php\nprotected $fillable = ['name', 'email']; // Only these can be mass assigned\nprotected $guarded = ['is_admin', 'password']; // These cannot be mass assigned"#,
            )]),
            Block::heading(4, "Query Scopes"),
            Block::code([CodeSample::php(
                r#"<?php\nclass User extends Model\n{\n    public function scopeActive($query)\n    {\n        return $query->where('active', 1);\n    }\n}\n\n// Usage:\n$activeUsers = User::active()->get();"#,
            )]),
            Block::heading(4, "Model Events"),
            Block::code([CodeSample::php(
                r#"<?php\nclass User extends Model\n{\n    protected static function boot()\n    {\n        parent::boot();\n        \n        static::creating(function ($user) {\n            $user->api_token = Str::random(60);\n        });\n    }\n}"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Keep table structure concerns in migrations, not in models",
                "Use <code>$fillable</code> on every model that accepts request input",
                "Prefer query scopes over repeating <code>where</code> chains",
                "Hide sensitive attributes with <code>$hidden</code>",
            ]),
        ],
    )
}
