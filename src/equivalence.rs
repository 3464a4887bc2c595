use serde::Serialize;

/// kg CO2 absorbed by one tree over a year.
pub const KG_CO2_PER_TREE_YEAR: f64 = 21.77;
/// kg CO2 per km driven by an average petrol car.
pub const KG_CO2_PER_CAR_KM: f64 = 0.192;
pub const KG_CO2_PER_SMARTPHONE_CHARGE: f64 = 0.008;
pub const KG_CO2_PER_TV_HOUR: f64 = 0.088;

/// Everyday quantities equivalent to a CO2 mass. Illustrative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EquivalenceSet {
    pub trees: u64,
    pub car_km: u64,
    pub smartphones: u64,
    pub tv_hours: u64,
}

/// Negative, NaN and infinite masses count as zero.
pub fn sanitize_mass(co2_kg: f64) -> f64 {
    if co2_kg.is_finite() && co2_kg > 0.0 {
        co2_kg
    } else {
        0.0
    }
}

/// Converts a CO2 mass in kg into its equivalents, each rounded to the
/// nearest integer with ties away from zero.
pub fn compute_equivalents(co2_kg: f64) -> EquivalenceSet {
    let co2_kg = sanitize_mass(co2_kg);
    EquivalenceSet {
        trees: units_of(co2_kg, KG_CO2_PER_TREE_YEAR),
        car_km: units_of(co2_kg, KG_CO2_PER_CAR_KM),
        smartphones: units_of(co2_kg, KG_CO2_PER_SMARTPHONE_CHARGE),
        tv_hours: units_of(co2_kg, KG_CO2_PER_TV_HOUR),
    }
}

fn units_of(co2_kg: f64, kg_per_unit: f64) -> u64 {
    (co2_kg / kg_per_unit).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_has_zero_equivalents() {
        assert_eq!(compute_equivalents(0.0), EquivalenceSet::default());
    }

    #[test]
    fn one_tree_year_boundary() {
        let eq = compute_equivalents(21.77);
        assert_eq!(eq.trees, 1);
        assert_eq!(eq.car_km, 113);
        assert_eq!(eq.smartphones, 2721);
        assert_eq!(eq.tv_hours, 247);
    }

    #[test]
    fn invalid_input_is_treated_as_zero() {
        for value in [-5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(compute_equivalents(value), EquivalenceSet::default());
        }
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 0.004 / 0.008 is exactly 0.5
        assert_eq!(compute_equivalents(0.004).smartphones, 1);
    }

    #[test]
    fn equivalents_never_decrease_as_mass_grows() {
        let mut previous = compute_equivalents(0.0);
        for step in 1..2_000 {
            let current = compute_equivalents(step as f64 * 0.037);
            assert!(current.trees >= previous.trees);
            assert!(current.car_km >= previous.car_km);
            assert!(current.smartphones >= previous.smartphones);
            assert!(current.tv_hours >= previous.tv_hours);
            previous = current;
        }
    }
}
