use crate::calculator::calculate;
use crate::errors::AppError;
use crate::factors::{Activity, Category};
use crate::models::{
    CalculateRequest, CalculateResponse, Calculation, CategoriesResponse, CategoryInfo,
    DeleteResponse, ExamplePayload, HealthResponse, HistoryQuery, HistoryResponse, StatsResponse,
};
use crate::report::{build_report, round_to};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&build_report(&data.records)))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

pub async fn get_categories() -> Json<CategoriesResponse> {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let info = CategoryInfo {
                activities: category.activities().to_vec(),
                default_unit: category.default_unit(),
            };
            (category, info)
        })
        .collect();

    Json(CategoriesResponse {
        categories,
        example_payload: ExamplePayload {
            category: Category::Transport,
            activity: Activity::CarPetrol,
            amount: 100.0,
            unit: Category::Transport.default_unit(),
        },
    })
}

pub async fn post_calculate(
    State(state): State<AppState>,
    Json(payload): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    let calculation = calculate(&payload).inspect_err(|err| {
        warn!("rejected calculation: {}", err.message);
    })?;

    let mut data = state.data.lock().await;
    let mut updated = data.clone();
    let record = updated.record(&calculation, Utc::now());
    persist_data(&state.data_path, &updated).await?;
    *data = updated;

    info!(
        id = record.id,
        category = %calculation.category,
        activity = %calculation.activity,
        co2_kg = calculation.co2_kg,
        "recorded calculation"
    );

    Ok(Json(CalculateResponse {
        success: true,
        id: record.id,
        calculation: Calculation {
            co2_kg: round_to(calculation.co2_kg, 2),
            ..calculation
        },
        timestamp: record.timestamp,
    }))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let limit = query.limit.unwrap_or(state.history_limit);
    let data = state.data.lock().await;
    let mut records = data.recent(limit);
    let report = build_report(&records);
    for record in &mut records {
        record.co2_kg = round_to(record.co2_kg, 2);
    }

    Ok(Json(HistoryResponse {
        total_records: report.count,
        total_co2_kg: round_to(report.total, 2),
        records,
    }))
}

pub async fn clear_history(State(state): State<AppState>) -> Result<Json<DeleteResponse>, AppError> {
    let mut data = state.data.lock().await;
    let mut updated = data.clone();
    let deleted = updated.clear();
    persist_data(&state.data_path, &updated).await?;
    *data = updated;

    info!(deleted = deleted, "cleared history");
    Ok(Json(DeleteResponse { deleted }))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut data = state.data.lock().await;
    let mut updated = data.clone();
    if updated.remove(id).is_none() {
        return Err(AppError::not_found(format!("record {id} not found")));
    }
    persist_data(&state.data_path, &updated).await?;
    *data = updated;

    info!(id = id, "deleted record");
    Ok(Json(DeleteResponse { deleted: 1 }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data.records)))
}
