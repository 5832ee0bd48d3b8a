//! Integration tests for CLI
//!
//! Argument parsing uses the real `Cli` definition; command tests run the
//! full pipeline against a mock Open-Meteo server.

#![allow(clippy::panic, clippy::expect_used)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use infrastructure::{AppConfig, Services, build_services};
use integration_weather::RetryConfig;
use presentation_cli::{Cli, Commands, cli::join_city, commands};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

// ============ Parsing ============

#[test]
fn cli_parses_fetch_with_city_words() {
    let cli = parse_args(&["weathercast", "fetch", "Austin,", "Texas"]).expect("parse");
    let Commands::Fetch { city } = &cli.command else {
        panic!("Expected Fetch command");
    };
    assert_eq!(join_city(city, "Houston, Texas"), "Austin, Texas");
}

#[test]
fn cli_parses_fetch_without_city() {
    let cli = parse_args(&["weathercast", "fetch"]).expect("parse");
    assert!(cli.command.city_words().is_empty());
}

#[test]
fn cli_parses_report_options() {
    let cli = parse_args(&[
        "weathercast",
        "report",
        "--input",
        "data/houston_texas_forecast.json",
        "--output",
        "out/report.html",
    ])
    .expect("parse");
    let Commands::Report { city, input, output } = cli.command else {
        panic!("Expected Report command");
    };
    assert!(city.is_empty());
    assert_eq!(input, Some(PathBuf::from("data/houston_texas_forecast.json")));
    assert_eq!(output, Some(PathBuf::from("out/report.html")));
}

#[test]
fn cli_parses_global_config_after_subcommand() {
    let cli = parse_args(&["weathercast", "weather", "Denver", "--config", "alt.toml", "-vv"])
        .expect("parse");
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Commands::Weather { .. }));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["weathercast"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["weathercast", "backup"]).is_err());
}

// ============ Commands ============

fn geocode_response() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "name": "Austin",
            "latitude": 30.26715,
            "longitude": -97.74306,
            "country": "United States",
            "admin1": "Texas"
        }]
    })
}

fn forecast_response() -> serde_json::Value {
    serde_json::json!({
        "timezone": "America/Chicago",
        "daily": {
            "time": ["2025-06-01", "2025-06-02"],
            "weather_code": [1, 63],
            "temperature_2m_max": [95.0, 89.5],
            "temperature_2m_min": [74.0, 71.0],
            "precipitation_sum": [0.0, 0.75],
            "wind_speed_10m_max": [8.0, 16.0]
        }
    })
}

async fn mock_open_meteo() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_response()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .mount(&server)
        .await;
    server
}

fn services_for(uri: &str, data_dir: &Path) -> Services {
    let mut config = AppConfig::default();
    config.weather.geocoding_base_url = uri.to_string();
    config.weather.forecast_base_url = uri.to_string();
    config.weather.timeout_secs = 1;
    config.retry = RetryConfig::fast();
    config.storage.data_dir = data_dir.to_path_buf();
    build_services(&config).expect("services")
}

#[tokio::test]
async fn fetch_saves_forecast_json() {
    let server = mock_open_meteo().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_for(&server.uri(), dir.path());
    let mut out = Vec::new();

    let saved = commands::fetch(&services.weather, "Austin, Texas", &mut out)
        .await
        .expect("fetch");

    assert_eq!(saved, dir.path().join("austin_texas_forecast.json"));
    assert!(saved.exists());
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Fetching weather for: Austin, Texas"));
    assert!(text.contains("71.0°F to 95.0°F over 2 days"));
}

#[tokio::test]
async fn fetch_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_for(&server.uri(), dir.path());

    let err = commands::fetch(&services.weather, "Austin", &mut Vec::new())
        .await
        .expect_err("400 should fail");

    assert!(err.to_string().contains("Failed to fetch weather data for Austin"));
}

#[tokio::test]
async fn report_fetches_when_no_input() {
    let server = mock_open_meteo().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_for(&server.uri(), dir.path());

    let written = commands::report(&services.weather, "Austin", None, None, &mut Vec::new())
        .await
        .expect("report");

    assert_eq!(written, dir.path().join("austin_forecast.html"));
    let html = std::fs::read_to_string(&written).expect("read");
    assert!(html.contains("2-Day Weather Forecast Report"));
    assert!(html.contains("Austin"));
}

#[tokio::test]
async fn report_from_saved_input_makes_no_requests() {
    let server = mock_open_meteo().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_for(&server.uri(), dir.path());
    let saved = commands::fetch(&services.weather, "Austin", &mut Vec::new())
        .await
        .expect("fetch");

    let offline = services_for("http://127.0.0.1:9", dir.path());
    let target = dir.path().join("reports").join("austin.html");
    let written = commands::report(
        &offline.weather,
        "ignored",
        Some(saved.as_path()),
        Some(target.as_path()),
        &mut Vec::new(),
    )
    .await
    .expect("report");

    assert_eq!(written, target);
    assert!(target.exists());
}

#[tokio::test]
async fn report_with_missing_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_for("http://127.0.0.1:9", dir.path());

    let result = commands::report(
        &services.weather,
        "Austin",
        Some(dir.path().join("missing.json").as_path()),
        None,
        &mut Vec::new(),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn weather_prints_success_body() {
    let server = mock_open_meteo().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_for(&server.uri(), dir.path());
    let mut out = Vec::new();

    commands::weather(&services.weather, "Austin", &mut out)
        .await
        .expect("weather");

    let body: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(body["status"], "success");
    assert_eq!(body["from_cache"], false);
    assert_eq!(body["data"]["city"], "Austin");
    assert_eq!(body["data"]["forecast_summary"]["high_temp_f"], 95.0);
    assert_eq!(body["data"]["forecast_summary"]["days"], 2);
}
