use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// Sign-up returns a session right away unless email confirmation is on,
/// in which case only the new user comes back.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum SignUpOutcome {
    SignedIn(AuthSession),
    ConfirmationRequired(AuthUser),
}

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub credits: i32,
    #[serde(default)]
    pub used_codes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct CreditsUpdate<'a> {
    pub credits: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_codes: Option<&'a [String]>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Affordable,
    Moderate,
    Luxury,
    #[serde(other)]
    Unknown,
}

impl Budget {
    pub const OPTIONS: [Budget; 3] = [Budget::Affordable, Budget::Moderate, Budget::Luxury];

    pub fn emoji(self) -> &'static str {
        match self {
            Budget::Affordable => "👛",
            Budget::Moderate => "💵",
            Budget::Luxury | Budget::Unknown => "💰",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Budget::Affordable => "Affordable",
            Budget::Moderate => "Moderate",
            Budget::Luxury => "Luxury",
            Budget::Unknown => "Custom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Budget::Affordable => "Budget-friendly options with hostels, local food, and public transport.",
            Budget::Moderate => "Mid-range hotels, mix of local and tourist restaurants, some guided tours.",
            Budget::Luxury => "Premium hotels, fine dining, private tours, and exclusive experiences.",
            Budget::Unknown => "",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Companion {
    Solo,
    Couple,
    Friends,
    Family,
    #[serde(other)]
    Unknown,
}

impl Companion {
    pub const OPTIONS: [Companion; 4] = [Companion::Solo, Companion::Couple, Companion::Friends, Companion::Family];

    pub fn emoji(self) -> &'static str {
        match self {
            Companion::Solo => "🏄",
            Companion::Couple => "💞",
            Companion::Friends => "🍻",
            Companion::Family => "🏡",
            Companion::Unknown => "👥",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Companion::Solo => "Solo",
            Companion::Couple => "Couple",
            Companion::Friends => "Friends",
            Companion::Family => "Family",
            Companion::Unknown => "Group",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewTrip {
    pub user_id: String,
    pub destination: String,
    pub duration: u32,
    pub budget: Budget,
    pub companion: Companion,
    pub ai_response: serde_json::Value,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub destination: String,
    pub duration: u32,
    pub budget: Budget,
    pub companion: Companion,
    #[serde(default)]
    pub ai_response: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn created_label(&self) -> String {
        self.created_at.format("%B %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_trip_rows_from_the_rest_api() {
        let row = json!({
            "id": "5b1c",
            "user_id": "u1",
            "destination": "Tokyo, Japan",
            "duration": 5,
            "budget": "moderate",
            "companion": "friends",
            "ai_response": {"hotels": []},
            "created_at": "2024-06-01T10:00:00.123456+00:00",
            "updated_at": "2024-06-01T10:00:00.123456+00:00"
        });
        let trip: Trip = serde_json::from_value(row).unwrap();
        assert_eq!(trip.budget, Budget::Moderate);
        assert_eq!(trip.companion, Companion::Friends);
        assert_eq!(trip.created_label(), "June 01, 2024");
    }

    #[test]
    fn unknown_options_fall_back_to_default_emoji() {
        let budget: Budget = serde_json::from_value(json!("backpacker")).unwrap();
        let companion: Companion = serde_json::from_value(json!("coworkers")).unwrap();
        assert_eq!(budget.emoji(), "💰");
        assert_eq!(companion.emoji(), "👥");
    }

    #[test]
    fn sign_up_outcome_distinguishes_pending_confirmation() {
        let pending: SignUpOutcome =
            serde_json::from_value(json!({"id": "u1", "email": "a@b.co", "aud": "authenticated"})).unwrap();
        assert!(matches!(pending, SignUpOutcome::ConfirmationRequired(_)));

        let session: SignUpOutcome = serde_json::from_value(json!({
            "access_token": "at",
            "refresh_token": "rt",
            "token_type": "bearer",
            "user": {"id": "u1", "email": "a@b.co"}
        }))
        .unwrap();
        assert!(matches!(session, SignUpOutcome::SignedIn(_)));
    }

    #[test]
    fn credits_update_omits_codes_when_unchanged() {
        let body = serde_json::to_value(CreditsUpdate { credits: 2, used_codes: None }).unwrap();
        assert_eq!(body, json!({"credits": 2}));
    }
}
