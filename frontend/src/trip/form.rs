use crate::api::error::TripError;
use crate::api::models::{Budget, Companion, NewTrip};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 20;
pub const DEFAULT_DAYS: u32 = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct TripForm {
    pub destination: String,
    pub days: u32,
    pub budget: Option<Budget>,
    pub companion: Option<Companion>,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            days: DEFAULT_DAYS,
            budget: None,
            companion: None,
        }
    }
}

impl TripForm {
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days.clamp(MIN_DAYS, MAX_DAYS);
        self
    }

    pub fn is_complete(&self) -> bool {
        !self.destination.trim().is_empty() && self.budget.is_some() && self.companion.is_some()
    }

    pub fn to_new_trip(&self, user_id: &str, ai_response: serde_json::Value) -> Result<NewTrip, TripError> {
        match (self.destination.trim(), self.budget, self.companion) {
            (destination, Some(budget), Some(companion)) if !destination.is_empty() => Ok(NewTrip {
                user_id: user_id.to_string(),
                destination: destination.to_string(),
                duration: self.days,
                budget,
                companion,
                ai_response,
            }),
            _ => Err(TripError::Incomplete),
        }
    }
}

pub fn day_emoji(days: u32) -> &'static str {
    match days {
        0..=3 => "⚡",
        4..=7 => "🌟",
        8..=14 => "🚀",
        _ => "🌍",
    }
}

/// Start and end colors of the slider track.
pub fn slider_gradient(days: u32) -> (&'static str, &'static str) {
    match days {
        0..=3 => ("#4ade80", "#16a34a"),
        4..=7 => ("#60a5fa", "#2563eb"),
        8..=14 => ("#c084fc", "#9333ea"),
        _ => ("#f87171", "#dc2626"),
    }
}

pub fn duration_label(days: u32) -> String {
    match days {
        1 => "1 day".to_string(),
        n if n >= MAX_DAYS => format!("{}+ days", MAX_DAYS),
        n => format!("{} days", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> TripForm {
        TripForm {
            destination: " Paris, France ".to_string(),
            days: 5,
            budget: Some(Budget::Moderate),
            companion: Some(Companion::Couple),
        }
    }

    #[test]
    fn starts_with_a_week() {
        let form = TripForm::default();
        assert_eq!(form.days, 7);
        assert!(!form.is_complete());
    }

    #[test]
    fn every_field_is_required() {
        assert!(complete().is_complete());
        assert!(!TripForm { destination: "   ".into(), ..complete() }.is_complete());
        assert!(!TripForm { budget: None, ..complete() }.is_complete());
        assert!(!TripForm { companion: None, ..complete() }.is_complete());
        assert_eq!(
            TripForm { budget: None, ..complete() }.to_new_trip("u1", json!({})),
            Err(TripError::Incomplete)
        );
    }

    #[test]
    fn builds_a_trimmed_record() {
        let trip = complete().to_new_trip("u1", json!({"days": []})).unwrap();
        assert_eq!(trip.destination, "Paris, France");
        assert_eq!(trip.duration, 5);
        assert_eq!(trip.user_id, "u1");
        let body = serde_json::to_value(&trip).unwrap();
        assert_eq!(body["budget"], "moderate");
        assert_eq!(body["companion"], "couple");
    }

    #[test]
    fn slider_is_clamped() {
        assert_eq!(TripForm::default().with_days(0).days, MIN_DAYS);
        assert_eq!(TripForm::default().with_days(45).days, MAX_DAYS);
    }

    #[test]
    fn duration_copy_and_emoji() {
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(9), "9 days");
        assert_eq!(duration_label(20), "20+ days");
        assert_eq!(day_emoji(3), "⚡");
        assert_eq!(day_emoji(7), "🌟");
        assert_eq!(day_emoji(14), "🚀");
        assert_eq!(day_emoji(15), "🌍");
        assert_eq!(slider_gradient(2).0, "#4ade80");
    }
}
