use crate::models::{AppData, Calculation, CalculationRecord};
use chrono::{DateTime, Utc};

impl AppData {
    /// Stores a calculation under a fresh id. Ids are never reused, even
    /// after deletes or a clear.
    pub fn record(&mut self, calculation: &Calculation, timestamp: DateTime<Utc>) -> CalculationRecord {
        let highest = self.records.iter().map(|record| record.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(highest).saturating_add(1);

        let record = CalculationRecord {
            id: self.next_id,
            category: calculation.category,
            activity: calculation.activity.as_str().to_string(),
            amount: calculation.amount,
            unit: calculation.unit.clone(),
            co2_kg: calculation.co2_kg,
            timestamp,
        };
        self.records.push(record.clone());
        record
    }

    /// Newest first, at most `limit` records.
    pub fn recent(&self, limit: usize) -> Vec<CalculationRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        records.truncate(limit);
        records
    }

    pub fn remove(&mut self, id: u64) -> Option<CalculationRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::compute_equivalents;
    use crate::factors::{Activity, Category};
    use chrono::{Duration, TimeZone};

    fn calculation(activity: Activity, amount: f64) -> Calculation {
        let co2_kg = amount * activity.factor();
        Calculation {
            category: activity.category(),
            activity,
            amount,
            unit: activity.category().default_unit().to_string(),
            co2_kg,
            factor_used: activity.factor(),
            equivalents: compute_equivalents(co2_kg),
        }
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut data = AppData::default();
        let first = data.record(&calculation(Activity::Bus, 10.0), at(0));
        let second = data.record(&calculation(Activity::Grid, 4.0), at(1));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.category, Category::Electricity);
        assert_eq!(second.activity, "grid");
        assert_eq!(second.co2_kg, 2.0);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut data = AppData::default();
        data.record(&calculation(Activity::Bus, 1.0), at(0));
        data.record(&calculation(Activity::Bus, 1.0), at(1));
        assert_eq!(data.clear(), 2);
        assert!(data.records.is_empty());

        let next = data.record(&calculation(Activity::Bus, 1.0), at(2));
        assert_eq!(next.id, 3);
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let mut data = AppData::default();
        for minute in 0..5 {
            data.record(&calculation(Activity::Rice, 1.0), at(minute));
        }
        let recent = data.recent(3);
        let ids: Vec<u64> = recent.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
        assert_eq!(data.records.len(), 5);
    }

    #[test]
    fn remove_unknown_id_returns_none() {
        let mut data = AppData::default();
        let record = data.record(&calculation(Activity::Plastic, 2.0), at(0));
        assert!(data.remove(record.id + 10).is_none());
        assert_eq!(data.remove(record.id).map(|r| r.id), Some(record.id));
        assert!(data.records.is_empty());
    }
}
