use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    application::{catalog::TopicService, chrome::ChromeService},
    presentation::views::{
        IndexTemplate, LayoutContext, TopicTemplate, render_not_found_response,
        render_template_response,
    },
};

use super::ROBOTS_TXT;
use super::middleware::{log_responses, set_request_context};

#[derive(Clone)]
pub struct HttpState {
    pub topics: Arc<TopicService>,
    pub chrome: Arc<ChromeService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/{slug}", get(topic_page))
        .route("/robots.txt", get(robots_txt))
        .route("/favicon.ico", get(favicon))
        .route("/_health", get(health))
        .route(
            "/static/public/{*path}",
            get(crate::infra::assets::serve_public),
        )
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index(State(state): State<HttpState>) -> Response {
    let chrome = state
        .chrome
        .load()
        .with_canonical(state.chrome.canonical_url("/"));
    let content = state.topics.home_view();
    let view = LayoutContext::new(chrome, content);
    render_template_response(IndexTemplate { view }, StatusCode::OK)
}

async fn topic_page(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    let chrome = state.chrome.load();

    match state.topics.topic_view(&slug) {
        Ok(Some(content)) => {
            let chrome = chrome
                .with_title(format!("{} · {}", content.title, state.chrome.site().meta_title))
                .with_canonical(state.chrome.canonical_url(&format!("/{slug}")));
            let view = LayoutContext::new(chrome, content);
            render_template_response(TopicTemplate { view }, StatusCode::OK)
        }
        Ok(None) => render_not_found_response(chrome),
        Err(err) => err.into_response(),
    }
}

async fn robots_txt() -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], ROBOTS_TXT).into_response()
}

async fn favicon() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

async fn health() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

async fn fallback(State(state): State<HttpState>) -> Response {
    render_not_found_response(state.chrome.load())
}
