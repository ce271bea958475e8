use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Supabase URL or anon key is not configured")]
    MissingConfig,
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Not found")]
    NotFound,
    #[error("Session expired, please sign in again")]
    Unauthorized,
}

impl From<gloo_net::Error> for StorageError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => StorageError::Parse(e.to_string()),
            other => StorageError::Network(other.to_string()),
        }
    }
}

/// Error bodies differ between the auth and rest services.
#[derive(Deserialize, Default)]
pub struct ErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

impl StorageError {
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => StorageError::Unauthorized,
            404 | 406 => StorageError::NotFound,
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(ErrorBody::into_message)
                    .unwrap_or_else(|| format!("Request failed with status {}", status));
                StorageError::Api { status, message }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PromoError {
    #[error("Code already used")]
    AlreadyUsed,
    #[error("Invalid code")]
    InvalidCode,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripError {
    #[error("Please fill in all required fields")]
    Incomplete,
    #[error("You are out of credits. Redeem a promo code on your dashboard to get more.")]
    NoCredits,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_auth_failures_and_missing_rows() {
        assert_eq!(StorageError::from_status(401, ""), StorageError::Unauthorized);
        assert_eq!(StorageError::from_status(406, "{}"), StorageError::NotFound);
    }

    #[test]
    fn prefers_the_most_descriptive_message() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            StorageError::from_status(400, body),
            StorageError::Api { status: 400, message: "Invalid login credentials".to_string() }
        );

        let body = r#"{"code":"23505","message":"duplicate key value"}"#;
        assert_eq!(StorageError::from_status(409, body).to_string(), "duplicate key value");
    }

    #[test]
    fn falls_back_to_status_when_body_is_not_json() {
        assert_eq!(
            StorageError::from_status(500, "<html>").to_string(),
            "Request failed with status 500"
        );
    }

    #[test]
    fn promo_messages_are_user_facing() {
        assert_eq!(PromoError::AlreadyUsed.to_string(), "Code already used");
        assert_eq!(PromoError::InvalidCode.to_string(), "Invalid code");
        assert_eq!(PromoError::from(StorageError::NotFound).to_string(), "Not found");
    }
}
