use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "controllers",
        "Controllers",
        "Build controllers to handle requests",
        vec![
            Block::para("Controllers in Rivulet handle HTTP requests and contain the application logic. They serve as intermediaries between models and views, processing input and returning responses."),
            Block::heading(2, "Creating Controllers"),
            Block::para("Generate a new controller using the Luna command line tool:"),
            Block::code([
                CodeSample::shell(r"php luna create:controller User"),
                CodeSample::text(r"Creates: app/Controllers/UserController.php"),
            ]),
            Block::para("For namespaced controllers:"),
            Block::code([
                CodeSample::shell(r"php luna create:controller Admin/User"),
                CodeSample::text(r"Creates: app/Controllers/Admin/UserController.php"),
            ]),
            Block::heading(2, "Base Controller Features"),
            Block::para("All controllers extend the base Controller class which provides these services:"),
            Block::code([CodeSample::php(
                r#"<?php\nnamespace Rivulet;\n\nclass Controller\n{\n    protected $request;      // HTTP Request\n    protected $response;     // HTTP Response\n    protected $filesystem;   // File system access\n    protected $view;         // Template rendering\n    protected $mail;         // Email services\n    protected $notification; // Notification system\n    protected $http;         // HTTP client\n    protected $session;      // Session management\n    protected $cookie;       // Cookie handling\n}"#,
            )]),
            Block::heading(2, "Controller Methods"),
            Block::para("A standard CRUD controller includes these methods:"),
            Block::code([CodeSample::php(
                r#"<?php\nclass UserController extends Controller\n{\n    // List all users\n    public function list() {}\n    \n    // Show single user\n    public function show($id) {}\n    \n    // Create new user\n    public function store() {}\n    \n    // Update user\n    public function edit($id) {}\n    \n    // Soft delete user\n    public function delete($id) {}\n    \n    // Permanent delete\n    public function destroy($id) {}\n}"#,
            )]),
            Block::heading(2, "Example Controller Implementation"),
            Block::para("Here's a complete UserController example:"),
            Block::code([CodeSample::php(
                r#"<?php\nnamespace App\\Controllers;\n\nuse App\\Models\\User;\nuse Rivulet\\Controller;\n\nclass UserController extends Controller\n{\n    public function list()\n    {\n        return User::all();\n    }\n\n    public function show($id)\n    {\n        $this->validate(['id' => $id], ['id' => 'required|integer']);\n        $user = User::find($id);\n        return $user ?: $this->jsonError('Not found', 404);\n    }\n\n    public function store()\n    {\n        $data = $this->request->input();\n        $this->validate($data, [\n            'name' => 'required|string',\n            'email' => 'required|email',\n            'password' => 'required|min:8'\n        ]);\n        return User::create($data);\n    }\n}"#,
            )]),
            Block::heading(2, "Using Global Request Helpers"),
            Block::para("Rivulet provides global helpers for request data:"),
            Block::code([CodeSample::php(
                r#"// Get full input\n$data = Request();\n\n// Get specific input key\n$value = Request('key', 'default');\n\n// Get query parameter\n$page = RequestQuery('page', 1);\n\n// Get header\n$auth = RequestHeader('Authorization');"#,
            )]),
            Block::para("These can be used alongside or instead of <code>$this->request</code> in controllers."),
            Block::heading(2, "Common Controller Patterns"),
            Block::heading(4, "JSON Responses"),
            Block::code([CodeSample::php(
                r#"<?php\n// Success response\nreturn $this->json(['data' => $results]);\n\n// Error response\nreturn $this->json(['error' => 'Not found'], 404);"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Keep controllers focused on HTTP logic",
                "Move business logic to service classes",
                "Use dependency injection for services",
                "Follow RESTful conventions for resource controllers",
            ]),
        ],
    )
}
