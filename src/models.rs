use crate::equivalence::EquivalenceSet;
use crate::factors::{Activity, Category};
use crate::report::{CategoryTotals, DashboardSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: u64,
    pub category: Category,
    pub activity: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub co2_kg: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub records: Vec<CalculationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub category: String,
    pub activity: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub category: Category,
    pub activity: Activity,
    pub amount: f64,
    pub unit: String,
    pub co2_kg: f64,
    pub factor_used: f64,
    pub equivalents: EquivalenceSet,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub id: u64,
    pub calculation: Calculation,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total_records: usize,
    pub total_co2_kg: f64,
    pub records: Vec<CalculationRecord>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub activities: Vec<Activity>,
    pub default_unit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExamplePayload {
    pub category: Category,
    pub activity: Activity,
    pub amount: f64,
    pub unit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<Category, CategoryInfo>,
    pub example_payload: ExamplePayload,
}

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub total_emissions_kg: f64,
    pub total_records: usize,
    pub daily_average_kg: f64,
    pub recording_period_days: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoryStats {
    pub total_kg: f64,
    pub count: usize,
    pub percentage: f64,
    pub activities: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub summary: StatsSummary,
    pub breakdown: BTreeMap<Category, CategoryStats>,
    pub percentages: CategoryTotals,
    pub equivalents: EquivalenceSet,
    pub dashboard: DashboardSummary,
    pub recommendations: Vec<String>,
}

/// Missing, null and non-numeric values become 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match value {
        Some(serde_json::Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(text)) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_missing_and_malformed_numbers() {
        let json = r#"[
            {"id": 1, "category": "food", "activity": "beef",
             "timestamp": "2026-01-05T10:00:00Z"},
            {"id": 2, "category": "waste", "activity": "landfill", "amount": null,
             "co2_kg": "not a number", "timestamp": "2026-01-05T11:00:00Z"},
            {"id": 3, "category": "transport", "activity": "bus", "amount": "12.5",
             "unit": "km", "co2_kg": 1.3125, "timestamp": "2026-01-05T12:00:00Z"}
        ]"#;
        let records: Vec<CalculationRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].amount, 0.0);
        assert_eq!(records[0].co2_kg, 0.0);
        assert_eq!(records[0].unit, "");
        assert_eq!(records[1].co2_kg, 0.0);
        assert_eq!(records[2].amount, 12.5);
        assert_eq!(records[2].co2_kg, 1.3125);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"{"id": 1, "category": "housing", "activity": "rent",
                       "co2_kg": 1.0, "timestamp": "2026-01-05T10:00:00Z"}"#;
        assert!(serde_json::from_str::<CalculationRecord>(json).is_err());
    }
}
