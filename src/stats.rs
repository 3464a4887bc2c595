use crate::equivalence::sanitize_mass;
use crate::factors::Category;
use crate::models::{CalculationRecord, CategoryStats, StatsResponse, StatsSummary};
use crate::report::{AggregateReport, DashboardSummary, build_report, round_to, saturate};
use std::collections::BTreeMap;

/// A category above this share of total emissions earns a tip.
const HIGH_SHARE_PERCENT: f64 = 40.0;

pub fn build_stats(records: &[CalculationRecord]) -> StatsResponse {
    let report = build_report(records);
    let period_days = recording_period_days(records);
    let daily_average = if period_days > 0 {
        report.total / period_days as f64
    } else {
        0.0
    };

    let mut breakdown: BTreeMap<Category, CategoryStats> = Category::ALL
        .into_iter()
        .map(|category| {
            let stats = CategoryStats {
                total_kg: round_to(report.breakdown.get(category), 2),
                count: 0,
                percentage: round_to(report.percentages.get(category), 1),
                activities: BTreeMap::new(),
            };
            (category, stats)
        })
        .collect();

    for record in records {
        if let Some(stats) = breakdown.get_mut(&record.category) {
            stats.count += 1;
            *stats.activities.entry(record.activity.clone()).or_insert(0.0) +=
                sanitize_mass(record.co2_kg);
        }
    }
    for stats in breakdown.values_mut() {
        for total in stats.activities.values_mut() {
            *total = round_to(saturate(*total), 2);
        }
    }

    StatsResponse {
        summary: StatsSummary {
            total_emissions_kg: round_to(report.total, 2),
            total_records: report.count,
            daily_average_kg: round_to(daily_average, 2),
            recording_period_days: period_days,
        },
        breakdown,
        percentages: report.percentages.map(|value| round_to(value, 1)),
        equivalents: report.equivalents,
        dashboard: DashboardSummary::from_total(report.total).rounded(2),
        recommendations: recommendations(&report),
    }
}

/// Whole days between the oldest and newest record, at least 1 when any
/// record exists.
fn recording_period_days(records: &[CalculationRecord]) -> i64 {
    let oldest = records.iter().map(|record| record.timestamp).min();
    let newest = records.iter().map(|record| record.timestamp).max();
    match (oldest, newest) {
        (Some(oldest), Some(newest)) => (newest - oldest).num_days().max(1),
        _ => 0,
    }
}

fn recommendations(report: &AggregateReport) -> Vec<String> {
    if report.count == 0 {
        return vec!["No data yet. Make some calculations first!".to_string()];
    }

    let mut tips: Vec<String> = report
        .percentages
        .iter()
        .filter(|(_, share)| round_to(*share, 1) > HIGH_SHARE_PERCENT)
        .filter_map(|(category, _)| tip_for(category))
        .map(str::to_string)
        .collect();

    if tips.is_empty() {
        tips.push("Your emissions are well balanced across categories!".to_string());
    }
    tips
}

fn tip_for(category: Category) -> Option<&'static str> {
    match category {
        Category::Transport => {
            Some("Your transport emissions are high. Consider carpooling or public transport.")
        }
        Category::Food => Some("Consider reducing meat consumption, especially beef."),
        Category::Electricity => Some("Switch to energy-efficient appliances and LED bulbs."),
        Category::Waste => None,
    }
}
