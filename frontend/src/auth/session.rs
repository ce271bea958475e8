//! Process-wide authentication state.
//!
//! [`SessionProvider`] resolves the persisted session once on load and is the
//! only place that signs users in or out. Pages read it with [`use_session`].

use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::client::SupabaseClient;
use crate::api::error::StorageError;
use crate::api::models::{AuthSession, AuthUser, UserProfile};
use crate::api::session_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Resolving,
    SignedOut,
    SignedIn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub status: SessionStatus,
    pub auth: Option<AuthSession>,
    pub profile: Option<UserProfile>,
}

pub enum SessionAction {
    Resolved(AuthSession),
    ProfileLoaded(UserProfile),
    SignedOut,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: SessionStatus::Resolving,
            auth: None,
            profile: None,
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Resolved(auth) => {
                // Keep the profile only if it belongs to the same user.
                let profile = self
                    .profile
                    .clone()
                    .filter(|p| p.id == auth.user.id);
                Rc::new(Session {
                    status: SessionStatus::SignedIn,
                    auth: Some(auth),
                    profile,
                })
            }
            SessionAction::ProfileLoaded(profile) => {
                let owns_profile = self.auth.as_ref().map_or(false, |a| a.user.id == profile.id);
                if !owns_profile {
                    return self;
                }
                Rc::new(Session {
                    profile: Some(profile),
                    ..(*self).clone()
                })
            }
            SessionAction::SignedOut => Rc::new(Session {
                status: SessionStatus::SignedOut,
                auth: None,
                profile: None,
            }),
        }
    }
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.status == SessionStatus::SignedIn
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.auth.as_ref().map(|a| &a.user)
    }

    /// `None` until the profile has loaded.
    pub fn credits(&self) -> Option<i32> {
        self.profile.as_ref().map(|p| p.credits)
    }

    /// Client authorized as the signed in user.
    pub fn client(&self) -> Result<SupabaseClient, StorageError> {
        let client = SupabaseClient::from_env()?;
        match &self.auth {
            Some(auth) => Ok(client.with_token(&auth.access_token)),
            None => Err(StorageError::Unauthorized),
        }
    }
}

pub type SessionContext = UseReducerHandle<Session>;

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session called outside SessionProvider")
}

pub fn sign_in(session: &SessionContext, auth: AuthSession) {
    session_store::save(&auth);
    // The handle still holds the previous snapshot, so load from `auth` directly.
    load_profile(session, &auth);
    session.dispatch(SessionAction::Resolved(auth));
}

pub fn sign_out(session: &SessionContext) {
    if let Ok(client) = session.client() {
        spawn_local(async move {
            if let Err(e) = client.sign_out().await {
                warn!("Remote sign out failed: {}", e);
            }
        });
    }
    session_store::clear();
    session.dispatch(SessionAction::SignedOut);
    info!("Signed out");
}

/// Drops the session when the service no longer accepts the token.
pub fn handle_storage_error(session: &SessionContext, err: &StorageError) {
    if *err == StorageError::Unauthorized {
        session_store::clear();
        session.dispatch(SessionAction::SignedOut);
    }
}

pub fn refresh_profile(session: &SessionContext) {
    if let Some(auth) = &session.auth {
        load_profile(session, auth);
    }
}

fn load_profile(session: &SessionContext, auth: &AuthSession) {
    let client = match SupabaseClient::from_env() {
        Ok(client) => client.with_token(&auth.access_token),
        Err(e) => {
            warn!("Failed to load profile: {}", e);
            return;
        }
    };
    let user_id = auth.user.id.clone();
    let session = session.clone();
    spawn_local(async move {
        match client.get_profile(&user_id).await {
            Ok(profile) => session.dispatch(SessionAction::ProfileLoaded(profile)),
            Err(e) => {
                warn!("Failed to load profile: {}", e);
                handle_storage_error(&session, &e);
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                match session_store::load() {
                    Some(stored) => {
                        let session = session.clone();
                        spawn_local(async move {
                            let client = match SupabaseClient::from_env() {
                                Ok(client) => client.with_token(&stored.access_token),
                                Err(e) => {
                                    warn!("Cannot resolve session: {}", e);
                                    session.dispatch(SessionAction::SignedOut);
                                    return;
                                }
                            };
                            match client.current_user().await {
                                Ok(user) => {
                                    info!("Resumed session for {}", user.id);
                                    sign_in(&session, AuthSession { user, ..stored });
                                }
                                Err(StorageError::Unauthorized) => {
                                    session_store::clear();
                                    session.dispatch(SessionAction::SignedOut);
                                }
                                Err(e) => {
                                    // Offline: trust the stored session until a request is refused.
                                    warn!("Could not verify stored session: {}", e);
                                    load_profile(&session, &stored);
                                    session.dispatch(SessionAction::Resolved(stored));
                                }
                            }
                        });
                    }
                    None => session.dispatch(SessionAction::SignedOut),
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn auth(user_id: &str) -> AuthSession {
        AuthSession {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            user: AuthUser {
                id: user_id.to_string(),
                email: Some("traveler@example.com".to_string()),
            },
        }
    }

    fn profile(user_id: &str, credits: i32) -> UserProfile {
        UserProfile {
            id: user_id.to_string(),
            email: "traveler@example.com".to_string(),
            credits,
            used_codes: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn starts_resolving_without_user() {
        let session = Session::default();
        assert_eq!(session.status, SessionStatus::Resolving);
        assert!(!session.is_signed_in());
        assert_eq!(session.credits(), None);
    }

    #[test]
    fn resolving_then_loading_profile_signs_in() {
        let session = Rc::new(Session::default())
            .reduce(SessionAction::Resolved(auth("u1")))
            .reduce(SessionAction::ProfileLoaded(profile("u1", 3)));
        assert!(session.is_signed_in());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(session.credits(), Some(3));
    }

    #[test]
    fn signed_in_without_profile_has_unknown_credits() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Resolved(auth("u1")));
        assert!(session.is_signed_in());
        assert_eq!(session.credits(), None);
    }

    #[test]
    fn ignores_profiles_of_other_users() {
        let session = Rc::new(Session::default())
            .reduce(SessionAction::Resolved(auth("u1")))
            .reduce(SessionAction::ProfileLoaded(profile("u2", 9)));
        assert!(session.profile.is_none());

        let signed_out = Rc::new(Session::default()).reduce(SessionAction::ProfileLoaded(profile("u1", 1)));
        assert!(signed_out.profile.is_none());
    }

    #[test]
    fn switching_user_drops_previous_profile() {
        let session = Rc::new(Session::default())
            .reduce(SessionAction::Resolved(auth("u1")))
            .reduce(SessionAction::ProfileLoaded(profile("u1", 3)))
            .reduce(SessionAction::Resolved(auth("u2")));
        assert!(session.profile.is_none());
    }

    #[test]
    fn sign_out_clears_everything() {
        let session = Rc::new(Session::default())
            .reduce(SessionAction::Resolved(auth("u1")))
            .reduce(SessionAction::ProfileLoaded(profile("u1", 3)))
            .reduce(SessionAction::SignedOut);
        assert_eq!(session.status, SessionStatus::SignedOut);
        assert!(session.auth.is_none());
        assert!(session.profile.is_none());
        assert!(session.client().is_err());
    }
}
