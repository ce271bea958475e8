use web_sys::{window, Storage};

use crate::api::models::AuthSession;
use crate::config::SESSION_STORAGE_KEY;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn load() -> Option<AuthSession> {
    let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding unreadable stored session: {}", e);
            clear();
            None
        }
    }
}

pub fn save(session: &AuthSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(SESSION_STORAGE_KEY, &raw).is_err() {
                log::warn!("Failed to persist session");
            }
        }
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
