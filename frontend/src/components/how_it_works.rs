use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{reveal_class, stagger};
use crate::hooks::visibility::{use_visibility_state, VisibilityOptions};
use crate::Route;

const STEPS: &[(&str, &str, &str, &str)] = &[
    ("01", "Tell Us Your Trip Details", "Pick destination, dates, and style.", "✈️"),
    ("02", "AI Builds Your Trip", "Instant itinerary with hotels, activities, and routes.", "🤖"),
    ("03", "Customize or Book", "Tweak your plan and go.", "🎯"),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let (node, state) = use_visibility_state(VisibilityOptions::with_threshold(0.1));

    html! {
        <section ref={node} id="how-it-works" class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"How It Works"}</h2>
                    <p>{"From idea to itinerary in just three simple steps"}</p>
                </div>
                <div class="card-grid three">
                    { for STEPS.iter().enumerate().map(|(i, (number, title, description, icon))| html! {
                        <div class={classes!("step", reveal_class(state))} style={stagger(i, 0.2)}>
                            <div class="step-badge">
                                <div class="step-number">{*number}</div>
                                <div class="step-icon bounce-subtle">{*icon}</div>
                            </div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
                <div class="section-cta">
                    <Link<Route> to={Route::CreateTrip} classes="cta-button cursor-pointer">
                        {"Start Planning Now"}
                        <span class="arrow">{"→"}</span>
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
