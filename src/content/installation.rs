use crate::domain::sections::{Block, CodeSample};
use crate::domain::topics::Topic;

pub(crate) fn topic() -> Topic {
    Topic::new(
        "installation",
        "Installation",
        "Learn how to install and set up Rivulet",
        vec![
            Block::para("Rivulet ships as a single Composer package. A fresh project needs nothing beyond PHP, Composer and a web-reachable entry point; the framework bootstraps itself from a pair of configuration files."),
            Block::heading(2, "Requirements"),
            Block::bullets([
                "PHP 8.1 or newer with the <code>pdo</code>, <code>mbstring</code> and <code>openssl</code> extensions",
                "Composer 2.x",
                "A supported database (MySQL, MariaDB, PostgreSQL or SQLite) if you use the ORM",
            ]),
            Block::heading(2, "Installing Rivulet"),
            Block::para("Require the framework and create the application entry point. The <code>Rivulet\\Application</code> instance wires the container, configuration and router together:"),
            Block::code([
                CodeSample::shell(r"composer require rivulet/framework"),
                CodeSample::php(r#"<?php\nrequire 'vendor/autoload.php';\n\n$app = new Rivulet\\Application();"#),
                CodeSample::html(
                    r#"<!DOCTYPE html>\n<html>\n<head>\n    <title>Rivulet Framework</title>\n</head>\n<body>\n    <h1>Hello, Rivulet!</h1>\n</body>\n</html>"#,
                ),
            ]),
            Block::heading(2, "Configuration"),
            Block::para("Copy the example environment file and adjust it for your machine. Application-level settings live in <code>config/app.php</code> and read from the environment with sensible defaults:"),
            Block::code([
                CodeSample::shell(r"cp .env.example .env"),
                CodeSample::php(
                    r#"<?php\nreturn [\n    'app_name' => 'Rivulet App',\n    'debug' => true,\n];"#,
                ),
            ]),
            Block::para("With the environment in place, start the development server with <code>php luna run</code> and open <code>http://localhost:8080</code>."),
        ],
    )
}
