use crate::equivalence::compute_equivalents;
use crate::errors::AppError;
use crate::factors::{Activity, Category};
use crate::models::{CalculateRequest, Calculation};

/// Emissions for one activity: `amount * factor`.
pub fn calculate(request: &CalculateRequest) -> Result<Calculation, AppError> {
    let category = Category::parse(&request.category).ok_or_else(|| {
        let available: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        AppError::bad_request(format!(
            "unknown category '{}', available: {}",
            request.category.trim(),
            available.join(", ")
        ))
    })?;

    let activity = Activity::parse(category, &request.activity).ok_or_else(|| {
        AppError::bad_request(format!(
            "unknown activity '{}' for {category}",
            request.activity.trim()
        ))
    })?;

    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(AppError::bad_request("amount must be a positive number"));
    }

    let unit = request
        .unit
        .as_deref()
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .unwrap_or(category.default_unit())
        .to_string();

    let factor = activity.factor();
    let co2_kg = request.amount * factor;
    if !co2_kg.is_finite() {
        return Err(AppError::bad_request("amount is too large"));
    }

    Ok(Calculation {
        category,
        activity,
        amount: request.amount,
        unit,
        co2_kg,
        factor_used: factor,
        equivalents: compute_equivalents(co2_kg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn request(category: &str, activity: &str, amount: f64) -> CalculateRequest {
        CalculateRequest {
            category: category.to_string(),
            activity: activity.to_string(),
            amount,
            unit: None,
        }
    }

    #[test]
    fn petrol_car_emissions() {
        let calc = calculate(&request("Transport", "car_petrol", 100.0)).unwrap();
        assert_eq!(calc.category, Category::Transport);
        assert_eq!(calc.activity, Activity::CarPetrol);
        assert_eq!(calc.unit, "km");
        assert_eq!(calc.factor_used, 0.192);
        assert!((calc.co2_kg - 19.2).abs() < 1e-9);
        assert_eq!(calc.equivalents.car_km, 100);
        assert_eq!(calc.equivalents.trees, 1);
    }

    #[test]
    fn explicit_unit_is_kept() {
        let mut req = request("food", "beef", 0.5);
        req.unit = Some("kg".to_string());
        let calc = calculate(&req).unwrap();
        assert_eq!(calc.unit, "kg");
        assert_eq!(calc.co2_kg, 13.5);
    }

    #[test]
    fn rejects_unknown_category_and_activity() {
        let err = calculate(&request("housing", "rent", 1.0)).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("transport, electricity, food, waste"));

        let err = calculate(&request("food", "grid", 1.0)).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("for food"));
    }

    #[test]
    fn rejects_amounts_whose_emissions_overflow() {
        let err = calculate(&request("food", "beef", 1e307)).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let calc = calculate(&request("food", "milk", 1e307)).unwrap();
        assert!(calc.co2_kg.is_finite());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in [0.0, -1.0, f64::NAN] {
            let err = calculate(&request("waste", "landfill", amount)).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }
}
