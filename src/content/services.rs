use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "services",
        "Service Classes",
        "Organize your business logic",
        vec![
            Block::para("Services in Rivulet encapsulate business logic and complex operations, keeping controllers lean and focused on HTTP handling."),
            Block::heading(2, "Service Commands"),
            Block::code([CodeSample::shell(
                r"# Create a new service class\nphp luna create:service ServiceName\n\n# Namespaced service\nphp luna create:service Admin/UserService",
            )]),
            Block::heading(2, "Creating Services"),
            Block::para("Generate a new service class:"),
            Block::code([
                CodeSample::shell(r"php luna create:service ArticleService"),
                CodeSample::text(r"Creates: app/Services/ArticleService.php"),
            ]),
            Block::para("The generated service includes both static and instance method patterns:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Services;\n\nuse Rivulet\\Rivulet;\n\nclass ArticleService {\n    // Static method example\n    public static function getRecentArticles() {\n        // Business logic here\n    }\n\n    // Instance method example\n    protected $app;\n\n    public function __construct(Rivulet $app) {\n        $this->app = $app;\n    }\n\n    public function processArticle($data) {\n        // Business logic here\n    }\n}"#,
            )]),
            Block::heading(2, "Service Patterns"),
            Block::heading(4, "1. Static Method Pattern"),
            Block::code([CodeSample::php(
                r#"<?php\nnamespace App\\Services;\n\nclass PaymentService {\n    public static function calculateTotal($items) {\n        $total = 0;\n        foreach ($items as $item) {\n            $total += $item['price'] * $item['quantity'];\n        }\n        return $total;\n    }\n}"#,
            )]),
            Block::para("Usage in controllers:"),
            Block::code([CodeSample::php(r"$total = PaymentService::calculateTotal($cartItems);")]),
            Block::heading(4, "2. Instance Method Pattern"),
            Block::code([CodeSample::php(
                r#"<?php\nnamespace App\\Services;\n\nuse Rivulet\\Rivulet;\n\nclass ReportService {\n    protected $app;\n    protected $db;\n\n    public function __construct(Rivulet $app) {\n        $this->app = $app;\n        $this->db = $app->make('database');\n    }\n\n    public function generateSalesReport($period) {\n        // Complex report generation\n    }\n}"#,
            )]),
            Block::para("Usage in controllers:"),
            Block::code([CodeSample::php(
                r#"$report = app()->make(ReportService::class)->generateSalesReport('2023-Q1');"#,
            )]),
            Block::heading(2, "Example Service"),
            Block::para("Here's a complete ArticleService implementation:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Services;\n\nuse App\\Models\\Authors;\n\nclass ArticleService {\n    public static function getAuthorName($authorId) {\n        $author = Authors::find($authorId);\n        return $author ? $author->name : 'Unknown';\n    }\n\n    public static function formatPublishDate($date) {\n        return date('F j, Y', strtotime($date));\n    }\n\n    public static function getRelatedArticles($articleId, $limit = 3) {\n        $article = Article::find($articleId);\n        return Article::where('category_id', $article->category_id)\n            ->where('id', '!=', $articleId)\n            ->limit($limit)\n            ->get();\n    }\n}"#,
            )]),
            Block::heading(2, "Using Services"),
            Block::para("Services can be used throughout your application:"),
            Block::heading(4, "In Controllers"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Controllers;\n\nuse App\\Services\\ArticleService;\n\nclass ArticleController extends Controller {\n    public function show($id) {\n        $article = Article::find($id);\n        return [\n            'article' => $article,\n            'author' => ArticleService::getAuthorName($article->author_id),\n            'related' => ArticleService::getRelatedArticles($id)\n        ];\n    }\n}"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use services for complex business logic",
                "Keep services focused on single responsibilities",
                "Prefer static methods for simple operations",
                "Use dependency injection for complex services",
                "Name services after their business purpose (PaymentService, ReportService)",
            ]),
        ],
    )
}
