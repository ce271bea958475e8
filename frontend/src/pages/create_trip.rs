use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::error::TripError;
use crate::api::models::{Budget, Companion};
use crate::auth::session::{handle_storage_error, refresh_profile, use_session, SessionStatus};
use crate::components::navbar::Nav;
use crate::components::toast::use_toast;
use crate::events::EventListenerGuard;
use crate::trip::form::{day_emoji, duration_label, slider_gradient, TripForm, MAX_DAYS, MIN_DAYS};
use crate::trip::places::{suggestions, Place};
use crate::trip::planner::{check_known_credits, generate_trip};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DestinationInputProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(DestinationInput)]
pub fn destination_input(props: &DestinationInputProps) -> Html {
    let container = use_node_ref();
    let show_dropdown = use_state(|| false);
    let places = use_memo(|value: &String| suggestions(value), props.value.clone());

    // Close the dropdown on clicks outside of it.
    {
        let container = container.clone();
        let show_dropdown = show_dropdown.clone();
        use_effect_with_deps(
            move |_| {
                let guard = EventListenerGuard::on_document("mousedown", move |e| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = container
                        .cast::<Node>()
                        .map_or(false, |c| c.contains(target.as_ref()));
                    if !inside {
                        show_dropdown.set(false);
                    }
                });
                move || drop(guard)
            },
            (),
        );
    }

    let oninput = {
        let on_change = props.on_change.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let value = input.value();
            show_dropdown.set(!suggestions(&value).is_empty());
            on_change.emit(value);
        })
    };

    let onfocus = {
        let show_dropdown = show_dropdown.clone();
        let has_places = !places.is_empty();
        Callback::from(move |_: FocusEvent| {
            if has_places {
                show_dropdown.set(true);
            }
        })
    };

    let select = |place: Place| {
        let on_change = props.on_change.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(place.description());
            show_dropdown.set(false);
        })
    };

    html! {
        <div class="destination" ref={container}>
            <textarea
                class="text-input destination-input cursor-pointer"
                placeholder="Search for a destination..."
                value={props.value.clone()}
                {oninput}
                {onfocus}
            />
            <span class="destination-pin">{"📍"}</span>
            if *show_dropdown && !places.is_empty() {
                <div class="dropdown">
                    { for places.iter().map(|place| html! {
                        <div key={place.id} class="dropdown-item cursor-pointer" onclick={select(*place)}>
                            <div class="dropdown-title">{place.main_text}</div>
                            <div class="dropdown-subtitle">{place.secondary_text}</div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}

#[function_component]
pub fn CreateTrip() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator().unwrap();
    let form = use_state(TripForm::default);
    let is_generating = use_state(|| false);

    let on_destination = {
        let form = form.clone();
        Callback::from(move |destination: String| {
            form.set(TripForm { destination, ..(*form).clone() });
        })
    };

    let on_days = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(days) = input.value().parse::<u32>() {
                form.set((*form).clone().with_days(days));
            }
        })
    };

    let pick_budget = |budget: Budget| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(TripForm { budget: Some(budget), ..(*form).clone() });
        })
    };

    let pick_companion = |companion: Companion| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(TripForm { companion: Some(companion), ..(*form).clone() });
        })
    };

    let on_generate = {
        let session = session.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let is_generating = is_generating.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_generating {
                return;
            }
            if !form.is_complete() {
                toast.error(TripError::Incomplete.to_string());
                return;
            }
            let (client, user_id) = match (session.client(), session.user()) {
                (Ok(client), Some(user)) => (client, user.id.clone()),
                _ => {
                    toast.error("Please sign in to generate your trip");
                    navigator.push(&Route::Auth);
                    return;
                }
            };
            if let Err(e) = check_known_credits(session.credits()) {
                toast.error(e.to_string());
                return;
            }

            is_generating.set(true);
            let session = session.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let is_generating = is_generating.clone();
            let form = (*form).clone();
            spawn_local(async move {
                match generate_trip(&client, &user_id, &form).await {
                    Ok(trip) => {
                        toast.success("Trip generated successfully!");
                        refresh_profile(&session);
                        navigator.push(&Route::ViewTrip { id: trip.id });
                    }
                    Err(e) => {
                        error!("Trip generation failed: {}", e);
                        if let TripError::Storage(ref storage) = e {
                            handle_storage_error(&session, storage);
                        }
                        toast.error(e.to_string());
                    }
                }
                is_generating.set(false);
            });
        })
    };

    let (from, to) = slider_gradient(form.days);
    let is_complete = form.is_complete();
    let credits_label = match (session.status, session.credits()) {
        (SessionStatus::SignedIn, Some(credits)) => format!("{} credits left", credits),
        (SessionStatus::SignedIn, None) => "Loading your credits...".to_string(),
        _ => "Sign in to use your free credit".to_string(),
    };

    html! {
        <div class="page hero-gradient">
            <Nav />
            <div class="page-content">
                <div class="page-header animate-fade-in">
                    <h1>{"Tell us your travel preferences🌎"}</h1>
                    <p>{"Just provide some basic information, and our trip planner will generate a customized itinerary based on your preferences."}</p>
                </div>

                <div class="panel">
                    <div class="form-section animate-fade-in" style="animation-delay: 0.1s;">
                        <h3><span>{"🚀"}</span>{"What is destination of choice?"}</h3>
                        <DestinationInput value={form.destination.clone()} on_change={on_destination} />
                    </div>

                    <div class="form-section animate-fade-in" style="animation-delay: 0.2s;">
                        <h3><span>{"📆"}</span>{"How many days are you planning your trip?"}</h3>
                        <div class="duration-row">
                            <span class="muted">{"Duration"}</span>
                            <span class="duration-value">
                                {day_emoji(form.days)}{" "}{duration_label(form.days)}
                            </span>
                        </div>
                        <input
                            type="range"
                            class="slider cursor-pointer"
                            min={MIN_DAYS.to_string()}
                            max={MAX_DAYS.to_string()}
                            step="1"
                            value={form.days.to_string()}
                            style={format!("background: linear-gradient(to right, {}, {});", from, to)}
                            oninput={on_days}
                        />
                        <div class="duration-row muted">
                            <span>{"1 day"}</span>
                            <span>{format!("{}+ days", MAX_DAYS)}</span>
                        </div>
                    </div>

                    <div class="form-section animate-fade-in" style="animation-delay: 0.3s;">
                        <h3>
                            <span>{"🤑"}</span>{"What is your budget?"}
                            <span class="tooltip cursor-pointer">
                                {"ⓘ"}
                                <span class="tooltip-content">
                                    { for Budget::OPTIONS.iter().map(|b| html! {
                                        <div><strong>{format!("{}: ", b.title())}</strong>{b.description()}</div>
                                    }) }
                                </span>
                            </span>
                        </h3>
                        <div class="option-grid three">
                            { for Budget::OPTIONS.iter().map(|&budget| html! {
                                <div
                                    class={classes!("option-card", "cursor-pointer", (form.budget == Some(budget)).then(|| "selected"))}
                                    onclick={pick_budget(budget)}
                                >
                                    <div class="option-emoji">{budget.emoji()}</div>
                                    <div class="option-title">{budget.title()}</div>
                                    <div class="option-description">{budget.description()}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="form-section animate-fade-in" style="animation-delay: 0.4s;">
                        <h3><span>{"🧑‍🤝‍🧑"}</span>{"Who are you going with?"}</h3>
                        <div class="option-grid four">
                            { for Companion::OPTIONS.iter().map(|&companion| html! {
                                <div
                                    class={classes!("option-card", "cursor-pointer", (form.companion == Some(companion)).then(|| "selected"))}
                                    onclick={pick_companion(companion)}
                                >
                                    <div class="option-emoji">{companion.emoji()}</div>
                                    <div class="option-title">{companion.title()}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="form-section centered animate-fade-in" style="animation-delay: 0.5s;">
                        <button
                            class={classes!("cta-button", "large", "cursor-pointer", (!is_complete).then(|| "inactive"))}
                            disabled={!is_complete || *is_generating}
                            onclick={on_generate}
                        >
                            if *is_generating {
                                <span class="spinner"></span>
                                <span>{"Generating Your Trip..."}</span>
                            } else {
                                <span>{"Generate Trip"}</span>
                                <span>{"✨"}</span>
                            }
                        </button>
                        if !is_complete {
                            <p class="hint">{"Please fill in all fields to generate your trip"}</p>
                        }
                        <p class="hint">{credits_label}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
