use crate::api::error::PromoError;
use crate::api::models::UserProfile;
use crate::config::{PROMO_CODE, PROMO_CREDITS};

#[derive(Clone, Debug, PartialEq)]
pub struct PromoRedemption {
    pub code: String,
    pub credits_added: i32,
    pub credits: i32,
    pub used_codes: Vec<String>,
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Each code is redeemable once per profile. Only the launch code exists.
pub fn redeem(profile: &UserProfile, code: &str) -> Result<PromoRedemption, PromoError> {
    let code = normalize_code(code);
    if profile.used_codes.iter().any(|used| *used == code) {
        return Err(PromoError::AlreadyUsed);
    }
    let credits_added = match code.as_str() {
        PROMO_CODE => PROMO_CREDITS,
        _ => return Err(PromoError::InvalidCode),
    };

    let mut used_codes = profile.used_codes.clone();
    used_codes.push(code.clone());
    Ok(PromoRedemption {
        code,
        credits_added,
        credits: profile.credits + credits_added,
        used_codes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(credits: i32, used: &[&str]) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "traveler@example.com".to_string(),
            credits,
            used_codes: used.iter().map(|c| c.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn launch_code_adds_five_credits() {
        let redemption = redeem(&profile(1, &[]), "  zuckerburger ").unwrap();
        assert_eq!(redemption.credits_added, 5);
        assert_eq!(redemption.credits, 6);
        assert_eq!(redemption.used_codes, vec!["ZUCKERBURGER".to_string()]);
    }

    #[test]
    fn code_cannot_be_used_twice() {
        let err = redeem(&profile(6, &["ZUCKERBURGER"]), "ZUCKERBURGER").unwrap_err();
        assert_eq!(err, PromoError::AlreadyUsed);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(redeem(&profile(0, &[]), "FREETRIP").unwrap_err(), PromoError::InvalidCode);
    }
}
