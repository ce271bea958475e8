use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client::SupabaseClient;
use crate::api::models::SignUpOutcome;
use crate::auth::session::{sign_in, use_session};
use crate::components::navbar::Nav;
use crate::components::toast::use_toast;
use crate::config::{PROMO_CODE, PROMO_CREDITS};
use crate::Route;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

#[function_component]
pub fn Auth() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator().unwrap();
    let is_sign_up = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let is_loading = use_state(|| false);

    // Redirect if already authenticated
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |signed_in| {
                if *signed_in {
                    navigator.push(&Route::Home);
                }
                || ()
            },
            session.is_signed_in(),
        );
    }

    let onsubmit = {
        let session = session.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let is_sign_up = is_sign_up.clone();
        let email = email.clone();
        let password = password.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            if let Err(message) = validate_credentials(&email, &password) {
                toast.error(message);
                return;
            }
            let client = match SupabaseClient::from_env() {
                Ok(client) => client,
                Err(e) => {
                    error!("Auth unavailable: {}", e);
                    toast.error(e.to_string());
                    return;
                }
            };

            is_loading.set(true);
            let session = session.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let is_sign_up = is_sign_up.clone();
            let is_loading = is_loading.clone();
            let email = email.trim().to_string();
            let password = (*password).clone();
            spawn_local(async move {
                if *is_sign_up {
                    match client.sign_up(&email, &password).await {
                        Ok(SignUpOutcome::SignedIn(auth)) => {
                            toast.success("Account created successfully!");
                            sign_in(&session, auth);
                            navigator.push(&Route::Home);
                        }
                        Ok(SignUpOutcome::ConfirmationRequired(_)) => {
                            toast.success("Account created successfully! Please check your email to verify your account.");
                            is_sign_up.set(false);
                        }
                        Err(e) => toast.error(e.to_string()),
                    }
                } else {
                    match client.sign_in(&email, &password).await {
                        Ok(auth) => {
                            toast.success("Signed in successfully!");
                            sign_in(&session, auth);
                            navigator.push(&Route::Home);
                        }
                        Err(e) => toast.error(e.to_string()),
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let toggle_mode = {
        let is_sign_up = is_sign_up.clone();
        Callback::from(move |_: MouseEvent| is_sign_up.set(!*is_sign_up))
    };

    let (title, subtitle, submit_label, busy_label) = if *is_sign_up {
        ("Join TripFiti", "Create your account and start planning amazing trips", "Create Account", "Creating Account...")
    } else {
        ("Welcome Back", "Sign in to continue planning your adventures", "Sign In", "Signing In...")
    };

    html! {
        <div class="page hero-gradient">
            <Nav />
            <div class="page-content narrow">
                <div class="page-header animate-fade-in">
                    <h1>{title}</h1>
                    <p>{subtitle}</p>
                </div>
                <div class="panel animate-fade-in" style="animation-delay: 0.1s;">
                    <form onsubmit={onsubmit} class="stack">
                        <label for="email">{"Email Address"}</label>
                        <input
                            id="email"
                            type="email"
                            class="text-input cursor-pointer"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={on_email}
                            required={true}
                        />
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            class="text-input cursor-pointer"
                            placeholder="Enter your password"
                            minlength={MIN_PASSWORD_LEN.to_string()}
                            value={(*password).clone()}
                            oninput={on_password}
                            required={true}
                        />
                        if *is_sign_up {
                            <p class="hint">{"Password must be at least 6 characters long"}</p>
                        }
                        <button type="submit" class="cta-button full cursor-pointer" disabled={*is_loading}>
                            if *is_loading {
                                <span class="spinner"></span>
                                <span>{busy_label}</span>
                            } else {
                                {submit_label}
                            }
                        </button>
                    </form>
                    <p class="switch-mode">
                        { if *is_sign_up { "Already have an account?" } else { "Don't have an account?" } }
                        <button type="button" class="link-button cursor-pointer" onclick={toggle_mode}>
                            { if *is_sign_up { "Sign In" } else { "Sign Up" } }
                        </button>
                    </p>
                    if *is_sign_up {
                        <div class="promo-hint">
                            <span>{"🎁"}</span>
                            <span>
                                {"Get 1 free credit when you sign up! Use code "}
                                <strong>{PROMO_CODE}</strong>
                                {format!(" for {} more credits.", PROMO_CREDITS)}
                            </span>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_credentials() {
        assert_eq!(validate_credentials(" traveler@example.com ", "secret1"), Ok(()));
    }

    #[test]
    fn rejects_short_passwords_and_bad_emails() {
        assert!(validate_credentials("traveler@example.com", "12345").is_err());
        assert!(validate_credentials("traveler.example.com", "secret1").is_err());
        assert!(validate_credentials("", "secret1").is_err());
    }
}
