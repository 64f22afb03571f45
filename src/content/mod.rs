//! The documentation content: one module per topic, plus the landing page.
//!
//! Everything here is fixed string/array constants assembled into the domain
//! content model. Code samples are stored in escaped single-line form; the
//! render pipeline expands them before highlighting.

pub mod home;

mod caching;
mod controllers;
mod database;
mod events;
mod filesystem;
mod helpers;
mod installation;
mod jobs;
mod logging;
mod luna_cli;
mod mail;
mod middleware;
mod migrations;
mod models;
mod notifications;
mod routing;
mod seeders;
mod services;
mod session_cookies;
mod templates;
mod validation;
mod validation_rules;

use crate::domain::topics::Topic;

/// Every documentation topic, in sidebar order. `session-cookies` is
/// reachable by URL only; it has no sidebar entry.
pub(crate) fn all_topics() -> Vec<Topic> {
    vec![
        installation::topic(),
        database::topic(),
        models::topic(),
        controllers::topic(),
        migrations::topic(),
        seeders::topic(),
        services::topic(),
        events::topic(),
        jobs::topic(),
        middleware::topic(),
        helpers::topic(),
        routing::topic(),
        filesystem::topic(),
        templates::topic(),
        mail::topic(),
        notifications::topic(),
        logging::topic(),
        caching::topic(),
        validation::topic(),
        validation_rules::topic(),
        session_cookies::topic(),
        luna_cli::topic(),
    ]
}
