//! Command implementations
//!
//! All three commands go through the same [`WeatherService`] pipeline as
//! the HTTP server.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use application::WeatherService;
use tracing::info;

/// Fetch a forecast for `city` and save it; returns the saved path
///
/// # Errors
///
/// Fails if the pipeline or the store fails.
pub async fn fetch(
    service: &WeatherService,
    city: &str,
    out: &mut impl Write,
) -> anyhow::Result<PathBuf> {
    writeln!(out, "Fetching weather for: {city}")?;

    let (report, path) = service
        .fetch_and_save(city)
        .await
        .with_context(|| format!("Failed to fetch weather data for {city}"))?;

    let summary = report.summary();
    writeln!(out, "✓ Weather data saved to {}", path.display())?;
    writeln!(
        out,
        "  {}, {}: {:.1}°F to {:.1}°F over {} days",
        report.location.city(),
        report.location.state(),
        summary.low_temp_f,
        summary.high_temp_f,
        summary.days
    )?;

    Ok(path)
}

/// Render a report from `input`, or from a freshly fetched forecast for
/// `city`; returns the written path
///
/// Without `output`, the document is written next to the forecast JSON
/// with the renderer's extension.
///
/// # Errors
///
/// Fails if loading, fetching, rendering or writing fails.
pub async fn report(
    service: &WeatherService,
    city: &str,
    input: Option<&Path>,
    output: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<PathBuf> {
    let (report, source) = match input {
        Some(path) => {
            let report = service
                .load_report(path)
                .await
                .with_context(|| format!("Failed to load forecast from {}", path.display()))?;
            (report, path.to_path_buf())
        },
        None => service
            .fetch_and_save(city)
            .await
            .with_context(|| format!("Failed to fetch weather data for {city}"))?,
    };

    let rendered = service
        .render_report(&report)
        .context("Failed to render report")?;
    let target = output.map_or_else(
        || source.with_extension(rendered.extension),
        Path::to_path_buf,
    );

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&target, rendered.content)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!(path = %target.display(), "Report written");
    writeln!(out, "✓ Report generated: {}", target.display())?;

    Ok(target)
}

/// Print the summarized forecast as the webhook's success body
///
/// # Errors
///
/// Fails if the pipeline fails or the output cannot be written.
pub async fn weather(
    service: &WeatherService,
    city: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let outcome = service
        .get_weather(city)
        .await
        .with_context(|| format!("Failed to fetch weather data for {city}"))?;

    let body = serde_json::json!({
        "status": "success",
        "from_cache": outcome.from_cache,
        "data": outcome.data,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;

    Ok(())
}
