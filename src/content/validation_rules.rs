use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "validation-rules",
        "Validation System",
        "Explore all validation rules",
        vec![
            Block::para("Rivulet provides a robust validation system with built-in rules and support for custom rules."),
            Block::heading(2, "Basic Usage in Controllers"),
            Block::code([CodeSample::php(
                r#"// From UsersController::store()\n$data = $this->request->input();\n$this->validate($data, [\n    'name' => 'required|string',\n    'email' => 'required|email',\n    'username' => 'required|string',\n    'password' => 'required|string'\n]);"#,
            )]),
            Block::para("The <code>validate()</code> method throws an exception with JSON-formatted errors if validation fails."),
            Block::heading(2, "Available Validation Rules"),
            Block::heading(3, "Required Fields"),
            Block::code([CodeSample::php(r#"'field' => 'required'"#)]),
            Block::heading(3, "String Validation"),
            Block::code([CodeSample::php(r#"'field' => 'string'"#)]),
            Block::heading(3, "Email Validation"),
            Block::code([CodeSample::php(r#"'field' => 'email'"#)]),
            Block::heading(3, "Numeric Validation"),
            Block::code([
                CodeSample::php(r#"'field' => 'integer'"#),
                CodeSample::php(r#"'field' => 'numeric'"#),
            ]),
            Block::heading(3, "Length Validation"),
            Block::code([
                CodeSample::php(r#"'field' => 'min:5'"#),
                CodeSample::php(r#"'field' => 'max:255'"#),
                CodeSample::php(r#"'field' => 'between:3,20'"#),
            ]),
            Block::heading(3, "File Validation"),
            Block::code([
                CodeSample::php(r#"'file' => 'file:jpg,png,pdf'"#),
                CodeSample::php(r#"'file' => 'filesize:2048'"#),
            ]),
            Block::heading(3, "Date Validation"),
            Block::code([
                CodeSample::php(r#"'date' => 'date'"#),
                CodeSample::php(r#"'date' => 'date:Y-m-d H:i:s'"#),
            ]),
            Block::heading(3, "Other Rules"),
            Block::code([
                CodeSample::php(r#"'ip' => 'ip'"#),
                CodeSample::php(r#"'url' => 'url'"#),
                CodeSample::php(r#"'alpha' => 'alpha'"#),
                CodeSample::php(r#"'alphanum' => 'alphanum'"#),
                CodeSample::php(r#"'array' => 'array'"#),
                CodeSample::php(r#"'bool' => 'bool'"#),
                CodeSample::php(r#"'regex' => 'regex:/^[a-z]+$/i'"#),
            ]),
            Block::heading(2, "Creating Custom Rules"),
            Block::para("Generate a new rule using the console command:"),
            Block::code([CodeSample::shell(r"php luna make:rule UniqueUsername")]),
            Block::para("This creates a template in <code>app/Rules/UniqueUsername.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nnamespace App\\Rules;\n\nuse Rivulet\\Validation\\Rule;\n\nclass UniqueUsername implements Rule\n{\n    public function passes(string $field, $value): bool\n    {\n        // Check if username is unique\n        return !User::where('username', $value)->exists();\n    }\n\n    public function message(string $field): string\n    {\n        return \"The $field is already taken.\";\n    }\n}"#,
            )]),
            Block::para("Use your custom rule:"),
            Block::code([CodeSample::php(r#"'username' => 'required|string|unique_username'"#)]),
            Block::heading(2, "Namespaced Rules"),
            Block::para("Create rules in subdirectories for better organization:"),
            Block::code([
                CodeSample::shell(r"php luna make:rule Auth/StrongPassword"),
                CodeSample::php(
                    r#"<?php\n\nnamespace App\\Rules\\Auth;\n\nuse Rivulet\\Validation\\Rule;\n\nclass StrongPassword implements Rule\n{\n    public function passes(string $field, $value): bool\n    {\n        return strlen($value) >= 8 \n            && preg_match('/[A-Z]/', $value)\n            && preg_match('/[0-9]/', $value);\n    }\n\n    public function message(string $field): string\n    {\n        return \"The $field must be at least 8 characters with an uppercase letter and a digit.\";\n    }\n}"#,
                ),
            ]),
            Block::para("Use namespaced rules:"),
            Block::code([CodeSample::php(r#"'password' => 'required|auth.strong_password'"#)]),
            Block::heading(2, "Error Handling"),
            Block::code([CodeSample::php(
                r#"try {\n    $this->validate($data, $rules);\n} catch (\\Exception $e) {\n    $errors = json_decode($e->getMessage(), true);\n    // Handle validation errors\n}"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Validate early - validate requests at the controller level",
                "Use specific validation rules",
                "Create custom rules for complex validation logic",
                "Organize rules in namespaces for large applications",
                "Provide clear, user-friendly error messages",
            ]),
        ],
    )
}
