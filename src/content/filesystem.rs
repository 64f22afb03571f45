use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "filesystem",
        "Filesystem Operations",
        "Work with files and directories",
        vec![
            Block::para("Rivulet's filesystem provides a unified interface for file operations across local and cloud storage, with built-in security and convenience methods."),
            Block::heading(2, "Core Command"),
            Block::code([CodeSample::shell(r"# Create public storage link\nphp luna storage:link")]),
            Block::heading(2, "Configuration"),
            Block::para("Configure storage disks in <code>config/filesystems.php</code>:"),
            Block::code([CodeSample::php(
                r#"<?php\n\nreturn [\n    'default' => env('FILESYSTEM_DISK', 'local'),\n    \n    'disks' => [\n        'local' => [\n            'driver' => 'local',\n            'root' => dirname(__DIR__) . '/storage/uploads',\n            'url' => env('APP_URL') . '/storage',\n            'visibility' => 'public'\n        ]\n   ]\n];"#,
            )]),
            Block::heading(2, "Basic Operations"),
            Block::heading(3, "File Uploads"),
            Block::code([CodeSample::php(
                r#"// Instance method (in controller)\n$path = $this->filesystem->upload($_FILES['document'], 'documents', 'contract.pdf');\n// Returns: documents/contract.pdf\n\n// Global helper\n$path = UploadFile($_FILES['document'], 'documents', 'contract.pdf');"#,
            )]),
            Block::heading(3, "File Downloads"),
            Block::code([CodeSample::php(
                r#"// Instance method (in controller)\nreturn $this->filesystem->download('documents/contract.pdf');\n\n// Global helper\nreturn DownloadFile('documents/contract.pdf');"#,
            )]),
            Block::heading(3, "Create File"),
            Block::code([CodeSample::php(
                r#"// Instance method (in controller)\n$path = $this->filesystem->createFile('documents/note.txt', 'Content here');\n// Returns: documents/note.txt\n\n// Global helper\n$path = CreateFile('documents/note.txt', 'Content here');"#,
            )]),
            Block::heading(2, "Directory Management"),
            Block::code([CodeSample::php(
                r#"// Create directory\n// Instance\n$this->filesystem->createDirectory('user_uploads/123');\n// Global\nCreateDirectory('user_uploads/123');\n\n// Delete directory (recursive)\n// Instance\n$this->filesystem->delete('temp_files');\n// Global\nDeleteDirectory('temp_files');\n\n// Copy directory\n// Instance\n$this->filesystem->copy('templates', 'archives/templates_backup');\n// Global\nCopyDirectory('templates', 'archives/templates_backup');"#,
            )]),
            Block::heading(2, "File Operations"),
            Block::code([CodeSample::php(
                r#"// Move file\n// Instance\n$this->filesystem->move('uploads/temp.jpg', 'images/profile.jpg');\n// Global\nMoveFile('uploads/temp.jpg', 'images/profile.jpg');\n\n// Rename file\n// Instance\n$this->filesystem->rename('documents/report.txt', 'annual_report.txt');\n// Global\nRenameFile('documents/report.txt', 'annual_report.txt');\n\n// Delete file\n// Instance\n$this->filesystem->delete('old_data.csv');\n// Global\nDeleteFile('old_data.csv');"#,
            )]),
            Block::heading(2, "Archive Handling"),
            Block::code([CodeSample::php(
                r#"// Create ZIP archive\n// Instance\n$zipName = $this->filesystem->zip('exports', 'backups/export_2023.zip');\n// Global\n$zipName = CompressDirectory('exports', 'backups/export_2023.zip');\n\n// Extract ZIP\n// Instance\n$this->filesystem->unzip('backups/export_2023.zip', 'restored_data');\n// Global\nExtractFile('backups/export_2023.zip', 'restored_data');"#,
            )]),
            Block::heading(2, "Security Considerations"),
            Block::bullets([
                "All paths are automatically resolved relative to the configured root directory",
                "File uploads are validated using <code>is_uploaded_file()</code>",
                "Directory traversal attempts are blocked",
                "Uploaded files receive 0644 permissions by default",
            ]),
            Block::heading(2, "Complete Example"),
            Block::para("Handling a file upload with processing:"),
            Block::code([CodeSample::php(
                r#"<?php\n\n// In your controller\npublic function uploadDocument(Request $request)\n{\n    try {\n        // Store uploaded file\n        $path = $this->filesystem->upload(\n            $request->files['document'], \n            'user_docs/' . $request->user->id,\n            'contract_' . time() . '.pdf'\n        );\n        \n        // Create backup archive\n        $this->filesystem->zip(\n            'user_docs/' . $request->user->id,\n            'backups/user_' . $request->user->id . '.zip'\n        );\n        \n        return $this->json(['path' => $path]);\n    } catch (\\Exception $e) {\n        return $this->jsonError('Upload failed', 422);\n    }\n}"#,
            )]),
            Block::heading(2, "Best Practices"),
            Block::bullets([
                "Use <code>storage:link</code> for public file access",
                "Store sensitive files outside web root",
                "Validate file types and sizes before processing",
                "Use unique filenames for uploads",
                "Regularly clean up temporary files",
                "Consider cloud storage for scalability",
            ]),
        ],
    )
}
