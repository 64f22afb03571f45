use clap::Parser;

use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_are_applied() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 3000);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert!(settings.site.base_url.is_none());
    assert_eq!(settings.site.brand_title, "Rivulet API Micro Framework");
    assert_eq!(settings.export.directory, std::path::Path::new("dist"));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn base_url_is_normalized_and_validated() {
    let mut raw = RawSettings::default();
    raw.site.base_url = Some("https://rivulet.dev/docs/".to_string());
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(
        settings.site.base_url.as_deref(),
        Some("https://rivulet.dev/docs")
    );

    let mut raw = RawSettings::default();
    raw.site.base_url = Some("rivulet.dev".to_string());
    let error = Settings::from_raw(raw).expect_err("scheme required");
    assert!(matches!(
        error,
        LoadError::Invalid {
            key: "site.base_url",
            ..
        }
    ));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);
    let error = Settings::from_raw(raw).expect_err("port must be rejected");
    assert!(matches!(
        error,
        LoadError::Invalid {
            key: "server.port",
            ..
        }
    ));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["rivulet-docs"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_export_arguments() {
    let args = CliArgs::parse_from(["rivulet-docs", "export", "/tmp/site", "--log-level", "warn"]);

    match args.command.expect("export command") {
        Command::Export(export) => {
            assert_eq!(
                export.output.as_deref(),
                Some(std::path::Path::new("/tmp/site"))
            );
            assert_eq!(export.overrides.log_level.as_deref(), Some("warn"));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn export_directory_can_come_from_configuration() {
    let mut raw = RawSettings::default();
    raw.export.directory = Some(PathBuf::from("build/site"));
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.export.directory, std::path::Path::new("build/site"));
}
