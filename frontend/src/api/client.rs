use gloo_net::http::{Request, Response};
use log::{error, info};
use serde::de::DeserializeOwned;

use crate::api::error::{PromoError, StorageError};
use crate::api::models::{
    AuthSession, AuthUser, Credentials, CreditsUpdate, NewTrip, SignUpOutcome, Trip, UserProfile,
};
use crate::api::promo::{self, PromoRedemption};
use crate::config::SupabaseConfig;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

fn eq(value: &str) -> String {
    format!("eq.{}", urlencoding::encode(value))
}

pub fn profile_path(user_id: &str) -> String {
    format!("user_profiles?id={}&select=*", eq(user_id))
}

pub fn user_trips_path(user_id: &str) -> String {
    format!("trips?user_id={}&select=*&order=created_at.desc", eq(user_id))
}

pub fn trip_path(trip_id: &str) -> String {
    format!("trips?id={}&select=*", eq(trip_id))
}

/// Thin client for the hosted auth and row storage services.
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    access_token: Option<String>,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config, access_token: None }
    }

    pub fn from_env() -> Result<Self, StorageError> {
        SupabaseConfig::from_env().map(Self::new)
    }

    pub fn with_token(&self, access_token: &str) -> Self {
        Self {
            config: self.config.clone(),
            access_token: Some(access_token.to_string()),
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.as_deref().unwrap_or(&self.config.anon_key))
    }

    fn authorize(&self, request: Request) -> Request {
        request
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &self.bearer())
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, StorageError> {
        let request = self
            .authorize(Request::post(&self.config.auth_url("signup")))
            .json(&Credentials { email, password })?;
        parse(request.send().await?).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, StorageError> {
        let request = self
            .authorize(Request::post(&self.config.auth_url("token?grant_type=password")))
            .json(&Credentials { email, password })?;
        let session: AuthSession = parse(request.send().await?).await?;
        info!("Signed in user {}", session.user.id);
        Ok(session)
    }

    pub async fn sign_out(&self) -> Result<(), StorageError> {
        let response = self
            .authorize(Request::post(&self.config.auth_url("logout")))
            .send()
            .await?;
        check(response).await.map(|_| ())
    }

    pub async fn current_user(&self) -> Result<AuthUser, StorageError> {
        let response = self
            .authorize(Request::get(&self.config.auth_url("user")))
            .send()
            .await?;
        parse(response).await
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StorageError> {
        let response = self
            .authorize(Request::get(&self.config.rest_url(&profile_path(user_id))))
            .header("Accept", SINGLE_OBJECT)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn update_credits(&self, user_id: &str, credits: i32) -> Result<UserProfile, StorageError> {
        self.patch_profile(user_id, &CreditsUpdate { credits, used_codes: None }).await
    }

    pub async fn apply_promo_code(&self, user_id: &str, code: &str) -> Result<PromoRedemption, PromoError> {
        let profile = match self.get_profile(user_id).await {
            Ok(profile) => profile,
            Err(StorageError::NotFound) => return Err(PromoError::ProfileNotFound),
            Err(e) => return Err(e.into()),
        };
        let redemption = promo::redeem(&profile, code)?;
        self.patch_profile(
            user_id,
            &CreditsUpdate {
                credits: redemption.credits,
                used_codes: Some(&redemption.used_codes),
            },
        )
        .await?;
        info!("Redeemed {} for {} credits", redemption.code, redemption.credits_added);
        Ok(redemption)
    }

    async fn patch_profile(&self, user_id: &str, update: &CreditsUpdate<'_>) -> Result<UserProfile, StorageError> {
        let request = self
            .authorize(Request::patch(&self.config.rest_url(&profile_path(user_id))))
            .header("Accept", SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(update)?;
        parse(request.send().await?).await
    }

    pub async fn create_trip(&self, trip: &NewTrip) -> Result<Trip, StorageError> {
        let request = self
            .authorize(Request::post(&self.config.rest_url("trips")))
            .header("Accept", SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(trip)?;
        let created: Trip = parse(request.send().await?).await?;
        info!("Stored trip {} to {}", created.id, created.destination);
        Ok(created)
    }

    pub async fn list_trips(&self, user_id: &str) -> Result<Vec<Trip>, StorageError> {
        let response = self
            .authorize(Request::get(&self.config.rest_url(&user_trips_path(user_id))))
            .send()
            .await?;
        parse(response).await
    }

    pub async fn get_trip(&self, trip_id: &str) -> Result<Trip, StorageError> {
        let response = self
            .authorize(Request::get(&self.config.rest_url(&trip_path(trip_id))))
            .header("Accept", SINGLE_OBJECT)
            .send()
            .await?;
        parse(response).await
    }
}

async fn check(response: Response) -> Result<Response, StorageError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = StorageError::from_status(status, &body);
    error!("Storage request failed with status {}: {}", status, err);
    Err(err)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
    let response = check(response).await?;
    response.json::<T>().await.map_err(|e| StorageError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_url_encoded() {
        assert_eq!(profile_path("a b&c"), "user_profiles?id=eq.a%20b%26c&select=*");
    }

    #[test]
    fn user_trips_are_listed_newest_first() {
        assert_eq!(
            user_trips_path("7d3f"),
            "trips?user_id=eq.7d3f&select=*&order=created_at.desc"
        );
    }

    #[test]
    fn single_trip_lookup_filters_by_id() {
        assert_eq!(trip_path("42"), "trips?id=eq.42&select=*");
    }

    #[test]
    fn anon_key_is_used_until_signed_in() {
        let config = SupabaseConfig::new("https://demo.supabase.co", "anon").unwrap();
        let client = SupabaseClient::new(config);
        assert_eq!(client.bearer(), "Bearer anon");
        assert_eq!(client.with_token("jwt").bearer(), "Bearer jwt");
    }
}
