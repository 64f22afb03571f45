use std::process;
use std::sync::Arc;

use rivulet_docs::{
    application::{catalog::TopicService, chrome::ChromeService, error::AppError},
    config,
    infra::{
        error::InfraError,
        export::SiteExporter,
        http::{self, HttpState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Export(_) => run_export(settings),
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let state = HttpState {
        topics: Arc::new(TopicService::new()),
        chrome: Arc::new(ChromeService::new(settings.site.clone())),
    };

    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "rivulet_docs::serve",
        addr = %settings.server.addr,
        "Serving documentation"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

fn run_export(settings: config::Settings) -> Result<(), AppError> {
    let exporter = SiteExporter::new(
        TopicService::new(),
        ChromeService::new(settings.site.clone()),
        settings.export.directory.clone(),
    );

    info!(
        target = "rivulet_docs::export",
        output = %settings.export.directory.display(),
        "Starting export"
    );

    exporter.export()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown handler");
    }
}
