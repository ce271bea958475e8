use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::error::StorageError;
use crate::api::models::Trip;
use crate::auth::session::{handle_storage_error, use_session, SessionStatus};
use crate::components::navbar::Nav;
use crate::components::reveal::stagger;
use crate::components::toast::use_toast;
use crate::trip::itinerary::{country_flag, Activity, Hotel, Itinerary};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ViewTripProps {
    pub id: String,
}

fn hotel_card(index: usize, hotel: &Hotel) -> Html {
    html! {
        <div class="hotel-card animate-fade-in" style={stagger(index, 0.1)}>
            <img src={hotel.image.clone()} alt={hotel.name.clone()} loading="lazy" />
            <div class="hotel-body">
                <h4>{&hotel.name}</h4>
                <p class="muted">{format!("📍 {}", hotel.address)}</p>
                <div class="hotel-meta">
                    <span class="price">{&hotel.price}</span>
                    <span>{format!("⭐ {:.1}", hotel.rating)}</span>
                </div>
            </div>
        </div>
    }
}

fn activity_row(activity: &Activity) -> Html {
    html! {
        <div class="activity">
            <img src={activity.image.clone()} alt={activity.title.clone()} loading="lazy" />
            <div class="activity-body">
                <span class="pill">{format!("🕘 {}", activity.time)}</span>
                <h4>{&activity.title}</h4>
                <p class="muted">{&activity.description}</p>
                <div class="activity-meta">
                    <span>{format!("⏱️ {}", activity.duration)}</span>
                    <span class="price">{&activity.price}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn ViewTrip(props: &ViewTripProps) -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator().unwrap();
    let trip = use_state(|| None::<Trip>);

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
        let toast = toast.clone();
        let navigator = navigator.clone();
        let trip = trip.clone();
        let signed_in = session.is_signed_in();
        use_effect_with_deps(
            move |(id, signed_in): &(String, bool)| {
                if *signed_in {
                    if let Ok(client) = session.client() {
                        let id = id.clone();
                        trip.set(None);
                        spawn_local(async move {
                            match client.get_trip(&id).await {
                                Ok(found) => {
                                    info!("Loaded trip {}", found.id);
                                    trip.set(Some(found));
                                }
                                Err(StorageError::NotFound) => {
                                    toast.error("Trip not found");
                                    navigator.push(&Route::Dashboard);
                                }
                                Err(e) => {
                                    error!("Failed to load trip {}: {}", id, e);
                                    handle_storage_error(&session, &e);
                                    toast.error("Failed to load trip");
                                    navigator.push(&Route::Dashboard);
                                }
                            }
                        });
                    }
                }
                || ()
            },
            (props.id.clone(), signed_in),
        );
    }

    let Some(trip) = (*trip).clone() else {
        return html! {
            <div class="page hero-gradient">
                <Nav />
                <div class="page-content centered">
                    <span class="spinner"></span>
                    <p class="muted">{"Loading your trip..."}</p>
                </div>
            </div>
        };
    };

    let itinerary = Itinerary::from_response(&trip.ai_response);

    html! {
        <div class="page hero-gradient">
            <Nav />
            <div class="page-content">
                <Link<Route> to={Route::Dashboard} classes="link-button cursor-pointer">
                    {"← Back to My Trips"}
                </Link<Route>>

                <div class="panel trip-header animate-fade-in">
                    <h1>{format!("{} {}", country_flag(&trip.destination), trip.destination)}</h1>
                    <div class="trip-card-meta">
                        <span class="pill">{format!("📆 {} days", trip.duration)}</span>
                        <span class="pill">{format!("{} {} budget", trip.budget.emoji(), trip.budget.title())}</span>
                        <span class="pill">{format!("{} {}", trip.companion.emoji(), trip.companion.title())}</span>
                    </div>
                    <p class="muted">{format!("Created {}", trip.created_label())}</p>
                </div>

                <section class="trip-section">
                    <h2>{"🏨 Hotel Recommendations"}</h2>
                    <div class="card-grid three">
                        { for itinerary.hotels.iter().enumerate().map(|(i, hotel)| hotel_card(i, hotel)) }
                    </div>
                </section>

                <section class="trip-section">
                    <h2>{"🗺️ Daily Itinerary"}</h2>
                    { for itinerary.days.iter().map(|plan| html! {
                        <div class="panel day-plan animate-fade-in">
                            <div class="day-header">
                                <span class="step-badge">{plan.day}</span>
                                <h3>{format!("Day {}", plan.day)}</h3>
                            </div>
                            { for plan.activities.iter().map(activity_row) }
                        </div>
                    }) }
                </section>

                <div class="centered">
                    <Link<Route> to={Route::CreateTrip} classes="cta-button cursor-pointer">
                        {"Plan Another Trip ✨"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
