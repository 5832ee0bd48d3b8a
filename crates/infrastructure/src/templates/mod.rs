//! Template engine module for rendering forecast reports
//!
//! Uses the Tera templating engine with embedded templates. HTML templates
//! are auto-escaped, so upstream place names cannot inject markup.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::HtmlReportRenderer;
//!
//! let renderer = HtmlReportRenderer::new()?;
//! let html = renderer.render(&report, &report.summary())?;
//! ```

use std::sync::Arc;

use application::{error::ApplicationError, ports::ReportRendererPort};
use chrono::{DateTime, Utc};
use domain::{ForecastReport, ForecastSummary, describe_wmo_code};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Name of the embedded forecast report template
pub const FORECAST_REPORT_TEMPLATE: &str = "report/forecast.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

impl From<TemplateError> for ApplicationError {
    fn from(e: TemplateError) -> Self {
        Self::Rendering(e.to_string())
    }
}

/// One row of the daily forecast table, preformatted for display
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Weekday, month and day, e.g. `Sun Jun 01`
    pub date: String,
    /// Weather description from the WMO table
    pub conditions: String,
    /// High temperature, e.g. `91.0°F`
    pub high: String,
    /// Low temperature
    pub low: String,
    /// Precipitation, two decimals, e.g. `0.13 in`
    pub precipitation: String,
    /// Max wind in mph, one decimal
    pub wind: String,
}

/// Everything the report template needs
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    /// Resolved city
    pub city: String,
    /// Resolved region, possibly empty
    pub state: String,
    /// Resolved country
    pub country: String,
    /// Latitude, four decimals
    pub latitude: String,
    /// Longitude, four decimals
    pub longitude: String,
    /// Forecast timezone
    pub timezone: String,
    /// When the report was rendered
    pub generated_at: String,
    /// When the forecast was fetched
    pub fetched_at: String,
    /// Temperature range, e.g. `70.0°F to 97.3°F`
    pub temperature_range: String,
    /// Average daily high
    pub avg_high: String,
    /// Total precipitation
    pub total_precipitation: String,
    /// Average max wind
    pub avg_wind: String,
    /// Number of forecast days
    pub days: usize,
    /// Daily rows
    pub rows: Vec<ReportRow>,
}

impl ReportData {
    /// Format `report` and `summary` for display
    #[must_use]
    pub fn new(
        report: &ForecastReport,
        summary: &ForecastSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let rows = report
            .daily
            .days()
            .iter()
            .map(|day| ReportRow {
                date: day.date.format("%a %b %d").to_string(),
                conditions: describe_wmo_code(day.weather_code),
                high: format!("{:.1}°F", day.temperature_max_f),
                low: format!("{:.1}°F", day.temperature_min_f),
                precipitation: format!("{:.2} in", day.precipitation_in),
                wind: format!("{:.1} mph", day.wind_speed_max_mph),
            })
            .collect();

        Self {
            city: report.location.city().to_string(),
            state: report.location.state().to_string(),
            country: report.location.country().to_string(),
            latitude: format!("{:.4}", report.location.latitude()),
            longitude: format!("{:.4}", report.location.longitude()),
            timezone: report.timezone.clone(),
            generated_at: generated_at.format("%B %d, %Y at %I:%M %p UTC").to_string(),
            fetched_at: report.fetched_at.to_rfc3339(),
            temperature_range: format!(
                "{:.1}°F to {:.1}°F",
                summary.low_temp_f, summary.high_temp_f
            ),
            avg_high: format!("{:.1}°F", summary.avg_high_temp_f),
            total_precipitation: format!("{:.2} inches", summary.total_precipitation_inches),
            avg_wind: format!("{:.1} mph", summary.avg_wind_mph),
            days: summary.days,
            rows,
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const FORECAST_REPORT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ days }}-Day Weather Forecast - {{ city }}</title>
    <style>
        body { font-family: Helvetica, Arial, sans-serif; background: #1a1a1a; color: #e0e0e0; margin: 2em; }
        h1 { color: #ffffff; }
        h2 { color: #4ecdc4; border-bottom: 1px solid #4ecdc4; }
        table { border-collapse: collapse; width: 100%; }
        th { background: #4ecdc4; color: #ffffff; }
        th, td { border: 1px solid #ff6b6b; padding: 8px; text-align: center; }
        tr:nth-child(even) td { background: #252525; }
        .label { color: #4ecdc4; font-weight: bold; }
        .summary td { width: 50%; }
        footer { font-size: 0.8em; color: #a0a0a0; text-align: center; margin-top: 2em; }
    </style>
</head>
<body>
    <h1>{{ days }}-Day Weather Forecast Report</h1>

    <h2>Location Information</h2>
    <p>
        <strong>{{ city }}{% if state %}, {{ state }}{% endif %}</strong> &bull; {{ country }}<br>
        <span class="label">Coordinates:</span> {{ latitude }}, {{ longitude }}<br>
        <span class="label">Report Generated:</span> {{ generated_at }}<br>
        <span class="label">Forecast Fetched:</span> {{ fetched_at }}<br>
        <span class="label">Timezone:</span> {{ timezone }}
    </p>

    <h2>Forecast Summary</h2>
    <table class="summary">
        <tr>
            <td><strong>Temp Range</strong><br>{{ temperature_range }}</td>
            <td><strong>Precipitation</strong><br>{{ total_precipitation }}</td>
        </tr>
        <tr>
            <td><strong>Avg High</strong><br>{{ avg_high }}</td>
            <td><strong>Avg Wind</strong><br>{{ avg_wind }}</td>
        </tr>
    </table>

    <h2>Detailed Daily Forecast</h2>
    <table class="daily">
        <tr><th>Date</th><th>Conditions</th><th>High</th><th>Low</th><th>Precip.</th><th>Wind</th></tr>
{% for row in rows %}        <tr><td>{{ row.date }}</td><td>{{ row.conditions }}</td><td>{{ row.high }}</td><td>{{ row.low }}</td><td>{{ row.precipitation }}</td><td>{{ row.wind }}</td></tr>
{% endfor %}    </table>

    <footer>
        Data provided by Open-Meteo API &bull; Temperature in Fahrenheit &bull;
        Precipitation in inches &bull; Wind speed in mph
    </footer>
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create an engine with the embedded templates loaded
    ///
    /// # Errors
    ///
    /// Returns `Compile` if an embedded template fails to parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_template(FORECAST_REPORT_TEMPLATE, embedded::FORECAST_REPORT)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with a serializable context
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown template, `Render` otherwise.
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, TemplateError> {
        let context = Context::from_serialize(data).map_err(|e| TemplateError::Render(e.to_string()))?;
        self.tera
            .render(template_name, &context)
            .map_err(TemplateError::from)
    }
}

/// HTML forecast report renderer
#[derive(Debug, Clone)]
pub struct HtmlReportRenderer {
    engine: TemplateEngine,
}

impl HtmlReportRenderer {
    /// Create a renderer over the embedded report template
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Render with an explicit generation time
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_at(
        &self,
        report: &ForecastReport,
        summary: &ForecastSummary,
        generated_at: DateTime<Utc>,
    ) -> Result<String, TemplateError> {
        let data = ReportData::new(report, summary, generated_at);
        let html = self.engine.render(FORECAST_REPORT_TEMPLATE, &data)?;
        debug!(city = %data.city, days = data.days, bytes = html.len(), "Rendered forecast report");
        Ok(html)
    }
}

impl ReportRendererPort for HtmlReportRenderer {
    fn render(
        &self,
        report: &ForecastReport,
        summary: &ForecastSummary,
    ) -> Result<String, ApplicationError> {
        Ok(self.render_at(report, summary, Utc::now())?)
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
