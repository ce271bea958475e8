use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::error::PromoError;
use crate::api::models::Trip;
use crate::auth::session::{handle_storage_error, refresh_profile, use_session, SessionStatus};
use crate::components::navbar::Nav;
use crate::components::toast::use_toast;
use crate::trip::itinerary::country_flag;
use crate::Route;

#[derive(Clone, PartialEq)]
enum TripsState {
    Loading,
    Loaded(Vec<Trip>),
    Failed,
}

#[derive(Properties, PartialEq)]
struct TripCardProps {
    trip: Trip,
}

#[function_component(TripCard)]
fn trip_card(props: &TripCardProps) -> Html {
    let trip = &props.trip;
    html! {
        <Link<Route> to={Route::ViewTrip { id: trip.id.clone() }} classes="trip-card cursor-pointer">
            <div class="trip-card-header">
                <span class="trip-flag">{country_flag(&trip.destination)}</span>
                <h3>{&trip.destination}</h3>
            </div>
            <div class="trip-card-meta">
                <span class="pill">{format!("📆 {} days", trip.duration)}</span>
                <span class="pill">{format!("{} {}", trip.budget.emoji(), trip.budget.title())}</span>
                <span class="pill">{format!("{} {}", trip.companion.emoji(), trip.companion.title())}</span>
            </div>
            <p class="muted">{format!("Created {}", trip.created_label())}</p>
        </Link<Route>>
    }
}

#[function_component]
pub fn Dashboard() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator().unwrap();
    let trips = use_state(|| TripsState::Loading);
    let promo_code = use_state(String::new);
    let is_applying = use_state(|| false);

    // Signed out visitors go to the sign in page once the session resolves.
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |status| {
                if *status == SessionStatus::SignedOut {
                    navigator.push(&Route::Auth);
                }
                || ()
            },
            session.status,
        );
    }

    {
        let session = session.clone();
        let trips = trips.clone();
        let user_id = session.user().map(|u| u.id.clone());
        use_effect_with_deps(
            move |user_id: &Option<String>| {
                if let (Some(user_id), Ok(client)) = (user_id.clone(), session.client()) {
                    trips.set(TripsState::Loading);
                    spawn_local(async move {
                        match client.list_trips(&user_id).await {
                            Ok(list) => {
                                info!("Loaded {} trips", list.len());
                                trips.set(TripsState::Loaded(list));
                            }
                            Err(e) => {
                                error!("Failed to load trips: {}", e);
                                handle_storage_error(&session, &e);
                                trips.set(TripsState::Failed);
                            }
                        }
                    });
                }
                || ()
            },
            user_id,
        );
    }

    let on_promo_input = {
        let promo_code = promo_code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            promo_code.set(input.value());
        })
    };

    let on_apply = {
        let session = session.clone();
        let toast = toast.clone();
        let promo_code = promo_code.clone();
        let is_applying = is_applying.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_applying || promo_code.trim().is_empty() {
                return;
            }
            let (client, user_id) = match (session.client(), session.user()) {
                (Ok(client), Some(user)) => (client, user.id.clone()),
                _ => return,
            };

            is_applying.set(true);
            let session = session.clone();
            let toast = toast.clone();
            let promo_code = promo_code.clone();
            let is_applying = is_applying.clone();
            let code = (*promo_code).clone();
            spawn_local(async move {
                match client.apply_promo_code(&user_id, &code).await {
                    Ok(redemption) => {
                        toast.success(format!(
                            "Promo code applied! +{} credits added",
                            redemption.credits_added
                        ));
                        promo_code.set(String::new());
                        refresh_profile(&session);
                    }
                    Err(e) => {
                        if let PromoError::Storage(ref storage) = e {
                            error!("Promo redemption failed: {}", storage);
                            handle_storage_error(&session, storage);
                        }
                        toast.error(e.to_string());
                    }
                }
                is_applying.set(false);
            });
        })
    };

    let trip_count = match &*trips {
        TripsState::Loaded(list) => list.len(),
        _ => 0,
    };

    html! {
        <div class="page hero-gradient">
            <Nav />
            <div class="page-content">
                <div class="page-header animate-fade-in">
                    <h1>{"My Trips"}</h1>
                    <p>{"Manage and view all your planned adventures"}</p>
                </div>

                <div class="card-grid three animate-fade-in" style="animation-delay: 0.1s;">
                    <div class="panel stat">
                        <span class="stat-icon">{"🗺️"}</span>
                        <div class="stat-value">{trip_count}</div>
                        <div class="muted">{"Total Trips"}</div>
                    </div>
                    <div class="panel stat">
                        <span class="stat-icon">{"💰"}</span>
                        <div class="stat-value">
                            { session.credits().map_or_else(|| "…".to_string(), |c| c.to_string()) }
                        </div>
                        <div class="muted">{"Credits Left"}</div>
                    </div>
                    <div class="panel stat">
                        <span class="stat-icon">{"✨"}</span>
                        <div class="stat-value">{"Active"}</div>
                        <div class="muted">{"Account Status"}</div>
                    </div>
                </div>

                <div class="panel animate-fade-in" style="animation-delay: 0.2s;">
                    <h3>{"🎁 Have a promo code?"}</h3>
                    <form class="promo-form" onsubmit={on_apply}>
                        <input
                            type="text"
                            class="text-input cursor-pointer"
                            placeholder="Enter promo code"
                            value={(*promo_code).clone()}
                            oninput={on_promo_input}
                        />
                        <button
                            type="submit"
                            class="cta-button cursor-pointer"
                            disabled={*is_applying || promo_code.trim().is_empty()}
                        >
                            { if *is_applying { "Applying..." } else { "Apply" } }
                        </button>
                    </form>
                </div>

                <div class="section-header">
                    <h2>{"Your Trips"}</h2>
                    <Link<Route> to={Route::CreateTrip} classes="cta-button cursor-pointer">
                        {"Plan New Trip ✈️"}
                    </Link<Route>>
                </div>

                {
                    match &*trips {
                        TripsState::Loading => html! {
                            <div class="centered"><span class="spinner"></span></div>
                        },
                        TripsState::Failed => html! {
                            <div class="panel centered">
                                <p>{"We couldn't load your trips. Please try again later."}</p>
                            </div>
                        },
                        TripsState::Loaded(list) if list.is_empty() => html! {
                            <div class="panel centered empty-state">
                                <div class="empty-icon">{"🧳"}</div>
                                <h3>{"No trips yet"}</h3>
                                <p class="muted">{"Start planning your first adventure!"}</p>
                                <Link<Route> to={Route::CreateTrip} classes="cta-button cursor-pointer">
                                    {"Create Your First Trip"}
                                </Link<Route>>
                            </div>
                        },
                        TripsState::Loaded(list) => html! {
                            <div class="card-grid three">
                                { for list.iter().map(|trip| html! {
                                    <TripCard key={trip.id.clone()} trip={trip.clone()} />
                                }) }
                            </div>
                        },
                    }
                }
            </div>
        </div>
    }
}
