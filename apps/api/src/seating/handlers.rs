//! Axum route handlers for the Seating API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::seating::distributor::{distribute, distribute_with_rng};
use crate::seating::example::EXAMPLE_ROSTER;
use crate::seating::export::{display_table, export, export_filename, ExportFormat, SeatingTable};
use crate::seating::models::{Record, SeatingOptions, SeatingOverrides, Table};
use crate::seating::parser::parse_table;
use crate::seating::stats::{compute_statistics, SeatingStatistics};
use crate::seating::validator::{spacing_report, SpacingReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RawTextRequest {
    pub raw_text: String,
    #[serde(default)]
    pub options: SeatingOverrides,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub row_count: usize,
    pub headers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub raw_text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Seat {
    pub seat_number: usize,
    pub record: Record,
}

#[derive(Debug, Serialize)]
pub struct ArrangeResponse {
    pub headers: Vec<String>,
    pub options: SeatingOptions,
    pub seats: Vec<Seat>,
    pub table: SeatingTable,
    pub statistics: SeatingStatistics,
    pub spacing: SpacingReport,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub records: Vec<Record>,
    #[serde(default)]
    pub options: SeatingOverrides,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub format: ExportFormat,
    #[serde(default)]
    pub options: SeatingOverrides,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/seating/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<SeatingOptions> {
    Json(state.config.seating.clone())
}

/// GET /api/v1/seating/example
pub async fn handle_example() -> Json<ExampleResponse> {
    Json(ExampleResponse {
        raw_text: EXAMPLE_ROSTER,
    })
}

/// POST /api/v1/seating/preview
///
/// Reports how many rows and which columns the input contains, without arranging.
pub async fn handle_preview(
    State(state): State<AppState>,
    AppJson(request): AppJson<RawTextRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let options = request.options.apply(&state.config.seating);
    let table = parse_input(&request.raw_text, &options)?;

    Ok(Json(PreviewResponse {
        row_count: table.records.len(),
        headers: table.headers,
    }))
}

/// POST /api/v1/seating/arrange
///
/// Full pipeline: parse → check columns → distribute → validate spacing.
pub async fn handle_arrange(
    State(state): State<AppState>,
    AppJson(request): AppJson<RawTextRequest>,
) -> Result<Json<ArrangeResponse>, AppError> {
    let options = request.options.apply(&state.config.seating);
    let table = parse_input(&request.raw_text, &options)?;

    if table.records.is_empty() {
        return Err(AppError::Validation(
            "No valid data found. Please check your input format.".to_string(),
        ));
    }
    for column in [&options.organization_column, &options.name_column] {
        if !table.has_column(column) {
            return Err(AppError::Validation(format!(
                "Column \"{column}\" not found. Please check your configuration."
            )));
        }
    }

    let order = arrange_records(&table.records, &options);
    let statistics = compute_statistics(&table.records, &options.organization_column);
    let spacing = spacing_report(&order, &options.organization_column, options.min_spacing);

    info!(
        "Arranged {} candidates across {} organizations",
        statistics.total_candidates, statistics.organizations
    );
    if !spacing.passed {
        warn!(
            "Arrangement has {} spacing violation(s) at min_spacing={}",
            spacing.violation_count, options.min_spacing
        );
    }

    let table_view = display_table(&order, &table.headers, &options);
    let seats = order
        .into_iter()
        .enumerate()
        .map(|(index, record)| Seat {
            seat_number: index + 1,
            record,
        })
        .collect();

    Ok(Json(ArrangeResponse {
        headers: table.headers,
        options,
        seats,
        table: table_view,
        statistics,
        spacing,
    }))
}

/// POST /api/v1/seating/validate
///
/// Checks an already ordered arrangement against the minimum spacing.
pub async fn handle_validate(
    State(state): State<AppState>,
    AppJson(request): AppJson<ValidateRequest>,
) -> Result<Json<SpacingReport>, AppError> {
    if request.records.is_empty() {
        return Err(AppError::Validation(
            "No arrangement to validate. Please rearrange seats first.".to_string(),
        ));
    }

    let options = request.options.apply(&state.config.seating);
    let report = spacing_report(
        &request.records,
        &options.organization_column,
        options.min_spacing,
    );
    if !report.passed {
        warn!("Spacing violations: {:?}", report.violations);
    }

    Ok(Json(report))
}

/// POST /api/v1/seating/export
///
/// Returns the arrangement as a CSV or TSV attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExportRequest>,
) -> Result<Response, AppError> {
    if request.records.is_empty() {
        return Err(AppError::Validation(
            "No results to export. Please rearrange seats first.".to_string(),
        ));
    }

    let options = request.options.apply(&state.config.seating);
    let body = export(&request.records, &request.headers, &options, request.format)?;
    let filename = export_filename(request.format, Utc::now().date_naive());
    info!("Exported {} seats as {}", request.records.len(), filename);

    Ok((
        [
            (header::CONTENT_TYPE, request.format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn parse_input(raw_text: &str, options: &SeatingOptions) -> Result<Table, AppError> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter or upload data first!".to_string(),
        ));
    }
    Ok(parse_table(raw_text, options.has_header_row)?)
}

/// Distributes with a seeded RNG when `shuffle_seed` is set, otherwise the thread RNG.
fn arrange_records(records: &[Record], options: &SeatingOptions) -> Vec<Record> {
    let org = &options.organization_column;
    match options.shuffle_seed {
        Some(seed) => distribute_with_rng(
            records,
            org,
            options.randomize_order,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => distribute(records, org, options.randomize_order),
    }
}
