use gloo_timers::future::TimeoutFuture;
use log::{info, warn};

use crate::api::client::SupabaseClient;
use crate::api::error::TripError;
use crate::api::models::Trip;
use crate::config::CREDITS_PER_TRIP;
use crate::trip::form::TripForm;
use crate::trip::itinerary::placeholder_itinerary;

/// Simulated generation time for the placeholder itinerary.
pub const GENERATION_DELAY_MS: u32 = 3_000;

pub fn credits_after_generation(credits: i32) -> Result<i32, TripError> {
    if credits < CREDITS_PER_TRIP {
        return Err(TripError::NoCredits);
    }
    Ok(credits - CREDITS_PER_TRIP)
}

/// Client-side gate before a generation request. An unloaded balance is
/// left for the stored profile to decide.
pub fn check_known_credits(credits: Option<i32>) -> Result<(), TripError> {
    match credits {
        Some(credits) => credits_after_generation(credits).map(|_| ()),
        None => Ok(()),
    }
}

/// Stores a trip for `user_id` and charges one credit against the stored
/// balance.
pub async fn generate_trip(
    client: &SupabaseClient,
    user_id: &str,
    form: &TripForm,
) -> Result<Trip, TripError> {
    let itinerary = placeholder_itinerary();
    let new_trip = form.to_new_trip(user_id, itinerary.to_response())?;

    TimeoutFuture::new(GENERATION_DELAY_MS).await;

    let profile = client.get_profile(user_id).await?;
    let remaining = credits_after_generation(profile.credits)?;
    let trip = client.create_trip(&new_trip).await?;
    if let Err(e) = client.update_credits(user_id, remaining).await {
        // The trip exists already; the next profile refresh shows the real balance.
        warn!("Trip {} stored but credits were not charged: {}", trip.id, e);
    }
    info!("Generated trip {} ({} credits left)", trip.id, remaining);
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_credit_per_trip() {
        assert_eq!(credits_after_generation(6), Ok(5));
        assert_eq!(credits_after_generation(1), Ok(0));
    }

    #[test]
    fn empty_balance_blocks_generation() {
        assert_eq!(credits_after_generation(0), Err(TripError::NoCredits));
        assert_eq!(credits_after_generation(-2), Err(TripError::NoCredits));
    }

    #[test]
    fn unloaded_balance_does_not_block_generation() {
        assert_eq!(check_known_credits(None), Ok(()));
        assert_eq!(check_known_credits(Some(1)), Ok(()));
        assert_eq!(check_known_credits(Some(0)), Err(TripError::NoCredits));
    }
}
