use yew::prelude::*;

use crate::components::reveal::{reveal_class, stagger};
use crate::hooks::visibility::{use_visibility_state, VisibilityOptions};

const BENEFITS: &[(&str, &str, &str)] = &[
    ("🤖", "AI Itineraries Built For You", "Get a daily, time-optimized travel plan instantly."),
    ("🏨", "Smart Hotel Recommendations", "Personalized stays based on your budget and style."),
    ("🧠", "Plan Smarter, Travel Better", "Discover curated restaurants, cafes, and museums."),
    ("⏰", "Save 10+ Hours of Research", "Skip the 20-tab research rabbit hole."),
];

#[function_component(BenefitsSection)]
pub fn benefits_section() -> Html {
    let (node, state) = use_visibility_state(VisibilityOptions::with_threshold(0.1));

    html! {
        <section ref={node} id="features" class="section section-muted">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Why TripFiti?"}</h2>
                    <p>{"Experience the future of travel planning with AI that understands your style"}</p>
                </div>
                <div class="card-grid four">
                    { for BENEFITS.iter().enumerate().map(|(i, (emoji, title, description))| html! {
                        <div class={classes!("benefit-card", reveal_class(state))} style={stagger(i, 0.1)}>
                            <div class="card-emoji bounce-subtle">{*emoji}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
