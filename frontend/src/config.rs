use crate::api::error::StorageError;

pub const SESSION_STORAGE_KEY: &str = "tripfiti.session";
pub const PROMO_CODE: &str = "ZUCKERBURGER";
pub const PROMO_CREDITS: i32 = 5;
pub const CREDITS_PER_TRIP: i32 = 1;

#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    match option_env!("TRIPFITI_SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // supabase start
    }
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("TRIPFITI_SUPABASE_URL").unwrap_or("")
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("TRIPFITI_SUPABASE_ANON_KEY").unwrap_or("")
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, StorageError> {
        let url = url.into().trim_end_matches('/').to_string();
        let anon_key = anon_key.into();
        if url.is_empty() || anon_key.is_empty() {
            return Err(StorageError::MissingConfig);
        }
        Ok(Self { url, anon_key })
    }

    pub fn from_env() -> Result<Self, StorageError> {
        Self::new(get_supabase_url(), get_supabase_anon_key())
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_are_rejected() {
        assert!(matches!(SupabaseConfig::new("", "key"), Err(StorageError::MissingConfig)));
        assert!(matches!(SupabaseConfig::new("https://x.supabase.co", ""), Err(StorageError::MissingConfig)));
    }

    #[test]
    fn builds_service_urls_without_double_slashes() {
        let config = SupabaseConfig::new("https://demo.supabase.co/", "anon").unwrap();
        assert_eq!(config.auth_url("user"), "https://demo.supabase.co/auth/v1/user");
        assert_eq!(config.rest_url("trips"), "https://demo.supabase.co/rest/v1/trips");
    }
}
