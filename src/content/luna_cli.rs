use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "luna-cli",
        "Console & Luna CLI",
        "Use the command-line interface",
        vec![
            Block::para("Rivulet's powerful command-line interface (Luna CLI) provides comprehensive tools for application development, maintenance, and deployment. Execute commands using <code>php luna [command]</code>."),
            Block::heading(2, "Code Generation Commands"),
            Block::heading(4, "Individual Component Creation"),
            Block::code([CodeSample::shell(
                r"# Create individual components\nphp luna create:model User\nphp luna create:controller UserController\nphp luna create:service UserService\nphp luna create:template welcome\nphp luna create:event UserRegistered\nphp luna create:rule UniqueEmail\nphp luna create:resource users\nphp luna create:seeder UserSeeder\nphp luna create:listener EmailNotifier\nphp luna create:job ProcessPayment\nphp luna create:middleware AuthMiddleware\n\n# Create with nested namespaces\nphp luna create:model Auth/User\nphp luna create:controller API/UserController",
            )]),
            Block::heading(4, "Bulk Creation with Flags"),
            Block::code([CodeSample::shell(
                r"# Create multiple components at once\nphp luna create -mcs User\n# Creates: UserModel + UserController + UserService\n\n# All available flags:\nphp luna create -mcsteri User\n# Creates: Model + Controller + Service + Template + Event + Resource + Listener + Job",
            )]),
            Block::bullets([
                "<code>-m</code> → Model (app/Models/)",
                "<code>-c</code> → Controller (app/Controllers/)",
                "<code>-s</code> → Service (app/Services/)",
                "<code>-t</code> → Template (resources/views/)",
                "<code>-e</code> → Event (app/Events/)",
                "<code>-r</code> → Resource/Migration (database/Migrations/)",
                "<code>-d</code> → Seeder (database/Seeders/)",
                "<code>-l</code> → Listener (app/Listeners/)",
                "<code>-j</code> → Job (app/Jobs/)",
            ]),
            Block::heading(2, "Generated Code Examples"),
            Block::heading(3, "Model Template"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Models;\n\nuse Rivulet\\Model;\n\nclass User extends Model\n{\n    protected $table = '';\n    protected $fillable = [];\n    protected $hidden = [];\n    protected $casts = [];\n    protected $primaryKey = 'id';\n    public $timestamps = true;\n}"#,
            )]),
            Block::heading(3, "Controller Template (CRUD Methods)"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Controllers;\n\nuse Rivulet\\Controller;\n\nclass UserController extends Controller\n{\n    public function list() { /* List all resources */ }\n    public function show($id) { /* Show single resource */ }\n    public function store() { /* Store new resource */ }\n    public function edit($id) { /* Update existing resource */ }\n    public function delete($id) { /* Soft delete resource */ }\n    public function destroy($id) { /* Hard delete resource */ }\n}"#,
            )]),
            Block::heading(3, "Service Template"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Services;\n\nuse Rivulet\\Rivulet;\n\nclass UserService {\n    // Static methods for direct calls\n    public static function method($param) {\n        return $param;\n    }\n\n    // Instance methods if needed\n    protected $app;\n\n    public function __construct(Rivulet $app) {\n        $this->app = $app;\n    }\n}"#,
            )]),
            Block::heading(2, "Database Commands"),
            Block::code([CodeSample::shell(
                r"# Run pending migrations\nphp luna database:migrate\n\n# Rollback last migration batch\nphp luna database:rollback\n\n# Seed database with test data\nphp luna database:seed",
            )]),
            Block::heading(2, "Cache Management"),
            Block::code([CodeSample::shell(
                r"# Clear all application cache\nphp luna cache:clear\n\n# Cache configuration files\nphp luna config:cache\n\n# Clear cached configuration\nphp luna config:clear\n\n# Cache application routes\nphp luna routes:cache\n\n# Clear cached routes\nphp luna routes:clear",
            )]),
            Block::heading(2, "Development Commands"),
            Block::heading(3, "Local Development Server"),
            Block::code([CodeSample::shell(
                r"# Start development server (default: localhost:8080)\nphp luna run\n\n# Start on custom host/port\nphp luna run localhost:3000\nphp luna run 192.168.1.100:8000",
            )]),
            Block::heading(3, "Interactive Development Console"),
            Block::code([CodeSample::shell(
                r"# Start PsySH interactive shell\nphp luna poke\n\n# Allows you to interact with your app:\n# >>> $user = App\\Models\\User::find(1)\n# >>> $user->name\n# >>> App\\Services\\UserService::method('test')",
            )]),
            Block::heading(3, "Route Inspection"),
            Block::code([CodeSample::shell(
                r"# List all registered routes\nphp luna routes:list\n\n# Output example:\n# GET /users -> UserController@list\n# POST /users -> UserController@store\n# GET /users/{id} -> UserController@show",
            )]),
            Block::heading(2, "Queue & Background Processing"),
            Block::code([CodeSample::shell(
                r"# Process jobs from default queue\nphp luna queue:work\n\n# Process specific queue with job limit\nphp luna queue:work emails 10\n\n# Run scheduled jobs\nphp luna schedule:run",
            )]),
            Block::heading(2, "Testing & Quality Assurance"),
            Block::code([CodeSample::shell(
                r"# Run all PHPUnit tests\nphp luna test:run\n\n# Run specific test file\nphp luna test:run tests/UserTest.php",
            )]),
            Block::heading(2, "Application Maintenance"),
            Block::heading(3, "Security & Setup"),
            Block::code([CodeSample::shell(
                r"# Generate application encryption key\nphp luna key:generate\n# Updates .env file: APP_KEY=generated_key\n\n# Create storage symlink for file uploads\nphp luna storage:link\n# Links: storage/uploads -> public/storage",
            )]),
            Block::heading(3, "Log Management"),
            Block::code([CodeSample::shell(
                r"# Clear all application logs\nphp luna logs:clear\n# Removes all .log files from storage/logs/",
            )]),
            Block::heading(3, "Performance Optimization"),
            Block::code([CodeSample::shell(
                r"# Run complete optimization\nphp luna optimize\n# Combines: cache:clear + logs:clear + routes:clear",
            )]),
            Block::heading(2, "Command Usage Patterns"),
            Block::heading(4, "Development Workflow"),
            Block::code([CodeSample::shell(
                r"# 1. Create application components\nphp luna create -mcsr User\n\n# 2. Run migrations\nphp luna database:migrate\n\n# 3. Seed with test data\nphp luna database:seed\n\n# 4. Start development server\nphp luna run\n\n# 5. Test your application\nphp luna test:run",
            )]),
            Block::heading(4, "Production Deployment"),
            Block::code([CodeSample::shell(
                r"# 1. Generate secure application key\nphp luna key:generate\n\n# 2. Cache configurations for performance\nphp luna config:cache\nphp luna routes:cache\n\n# 3. Run migrations\nphp luna database:migrate\n\n# 4. Create storage symlink\nphp luna storage:link\n\n# 5. Clear development caches\nphp luna cache:clear",
            )]),
            Block::heading(2, "Command Reference"),
            Block::heading(3, "Cache Commands"),
            Block::bullets([
                "<code>cache:clear</code> - Flush all cached items from cache storage",
                "<code>config:cache</code> - Compile and cache configuration files for faster loading",
                "<code>config:clear</code> - Remove compiled configuration cache",
                "<code>routes:cache</code> - Cache all application routes for performance",
                "<code>routes:clear</code> - Clear cached routes file",
            ]),
            Block::heading(3, "Database Commands"),
            Block::bullets([
                "<code>database:migrate</code> - Execute all pending migrations",
                "<code>database:rollback</code> - Revert the most recent migration batch",
                "<code>database:seed</code> - Run all database seeders",
            ]),
            Block::heading(3, "Utility Commands"),
            Block::bullets([
                "<code>run [host:port]</code> - Start PHP development server",
                "<code>poke</code> - Launch interactive PsySH shell",
                "<code>routes:list</code> - Display all registered routes",
                "<code>test:run [file]</code> - Execute PHPUnit tests",
                "<code>key:generate</code> - Generate secure application key",
                "<code>storage:link</code> - Create symbolic link for file uploads",
                "<code>logs:clear</code> - Remove all log files",
                "<code>optimize</code> - Run complete optimization (clears cache, logs, routes)",
            ]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use bulk creation (<code>create -flags</code>) for rapid scaffolding",
                "Run <code>optimize</code> before production deployments",
                "Use <code>poke</code> for debugging and testing model relationships",
                "Set up <code>schedule:run</code> in cron for automated job processing",
                "Use namespaced components for larger applications",
                "Always run <code>database:migrate</code> after creating resources",
                "Use <code>storage:link</code> once per environment setup",
            ]),
            Block::heading(2, "Error Handling"),
            Block::heading(4, "Common Issues"),
            Block::code([CodeSample::shell(
                r"# Command not found\n# Solution: Check spelling, use php luna without arguments for help\n\n# Permission denied\n# Solution: Ensure luna file is executable\nchmod +x luna\n\n# Missing arguments\n# Most create commands require a name:\nphp luna create:model  # Error: Model name is required\nphp luna create:model User  # Correct",
            )]),
            Block::heading(2, "Console Architecture"),
            Block::para("The Luna CLI system is built around a simple but powerful architecture where each command is a separate class with an <code>execute()</code> method. Commands are registered in the main Console class and automatically instantiated with the application instance for dependency injection."),
            Block::code([CodeSample::php(
                r#"// Adding custom commands to Console.php\nprotected $commands = [\n    'my:command' => MyCustomCommand::class,\n    // ... other commands\n];\n\n// Custom command structure\nclass MyCustomCommand {\n    protected $app;\n    \n    public function __construct(Rivulet $app) {\n        $this->app = $app;\n    }\n    \n    public function execute(array $args = []) {\n        // Command logic here\n        echo \"Done\";\n    }\n}"#,
            )]),
        ],
    )
}
