use crate::equivalence::{EquivalenceSet, KG_CO2_PER_CAR_KM, compute_equivalents, sanitize_mass};
use crate::factors::Category;
use crate::models::CalculationRecord;
use serde::Serialize;

/// Share of emissions assumed avoidable; a policy figure, not a measurement.
pub const SAVINGS_RATE: f64 = 0.2;
/// kg CO2 avoided per kWh of solar generation instead of grid power.
pub const KG_CO2_AVOIDED_PER_SOLAR_KWH: f64 = 0.05;

/// One value per category. Always carries all four keys.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryTotals {
    pub transport: f64,
    pub electricity: f64,
    pub food: f64,
    pub waste: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Electricity => self.electricity,
            Category::Food => self.food,
            Category::Waste => self.waste,
        }
    }

    pub fn add(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::Transport => &mut self.transport,
            Category::Electricity => &mut self.electricity,
            Category::Food => &mut self.food,
            Category::Waste => &mut self.waste,
        };
        *slot += value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> {
        let totals = *self;
        Category::ALL
            .into_iter()
            .map(move |category| (category, totals.get(category)))
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            transport: f(self.transport),
            electricity: f(self.electricity),
            food: f(self.food),
            waste: f(self.waste),
        }
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total: f64,
    pub count: usize,
    pub breakdown: CategoryTotals,
    pub percentages: CategoryTotals,
    pub equivalents: EquivalenceSet,
}

/// Totals, per-category breakdown and percentages over a set of records.
///
/// Every record contributes; malformed masses contribute 0. Sums that
/// overflow saturate at `f64::MAX`. Percentages are all 0 when the total is
/// 0 and are not adjusted to sum to exactly 100.
pub fn build_report(records: &[CalculationRecord]) -> AggregateReport {
    let mut breakdown = CategoryTotals::default();
    for record in records {
        breakdown.add(record.category, sanitize_mass(record.co2_kg));
    }
    let breakdown = breakdown.map(saturate);
    let total = saturate(breakdown.sum());

    AggregateReport {
        total,
        count: records.len(),
        breakdown,
        percentages: shares_of(&breakdown),
        equivalents: compute_equivalents(total),
    }
}

pub(crate) fn saturate(value: f64) -> f64 {
    value.min(f64::MAX)
}

/// Scaled by the largest entry first so the division stays finite even
/// when the plain sum would overflow.
fn shares_of(breakdown: &CategoryTotals) -> CategoryTotals {
    let largest = breakdown.iter().map(|(_, value)| value).fold(0.0, f64::max);
    if largest <= 0.0 {
        return CategoryTotals::default();
    }
    let scaled = breakdown.map(|value| value / largest);
    let scaled_total = scaled.sum();
    scaled.map(|value| 100.0 * value / scaled_total)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DashboardSummary {
    pub carbon_saved: f64,
    pub car_equivalent_km: f64,
    pub solar_equivalent_kwh: f64,
}

impl DashboardSummary {
    pub fn from_total(total_kg: f64) -> Self {
        let total_kg = sanitize_mass(total_kg);
        Self {
            carbon_saved: saturate(total_kg * SAVINGS_RATE),
            car_equivalent_km: saturate(total_kg / KG_CO2_PER_CAR_KM),
            solar_equivalent_kwh: saturate(total_kg / KG_CO2_AVOIDED_PER_SOLAR_KWH),
        }
    }

    pub fn rounded(&self, places: i32) -> Self {
        Self {
            carbon_saved: round_to(self.carbon_saved, places),
            car_equivalent_km: round_to(self.car_equivalent_km, places),
            solar_equivalent_kwh: round_to(self.solar_equivalent_kwh, places),
        }
    }
}

/// Values too large to scale are returned unrounded.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
