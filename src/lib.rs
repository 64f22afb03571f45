//! Documentation site for the Rivulet PHP micro-framework.
//!
//! All content is compiled into the binary. The crate exposes the layers the
//! binary wires together: the typed content model (`domain`), the static page
//! content (`content`), the rendering and chrome services (`application`),
//! Askama views (`presentation`), and the HTTP/export/telemetry plumbing
//! (`infra`).

pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod infra;
pub mod presentation;
