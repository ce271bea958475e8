use yew::prelude::*;
use yew_hooks::use_interval;
use yew_router::prelude::*;

use crate::auth::session::use_session;
use crate::hooks::visibility::{use_intersection_observer, VisibilityOptions};
use crate::Route;

const ROTATION_MS: u32 = 2_000;

const DESTINATIONS: &[(&str, &str)] = &[
    ("Bali", "🌴"),
    ("Dubai", "🐫"),
    ("Mexico", "🌮"),
    ("Paris", "🗼"),
    ("Tokyo", "🍜"),
    ("Iceland", "❄️"),
    ("Maldives", "🏖️"),
    ("Amsterdam", "🚲"),
    ("Morocco", "🏜️"),
    ("Thailand", "🐘"),
    ("Greece", "🏛️"),
    ("New York", "🗽"),
];

const MOCKUP_DAYS: &[(&str, &str, &str)] = &[
    ("Day 1: Arrival", "🏨 Four Seasons Resort Bali", "🍽️ Dinner at Bebek Bengil"),
    ("Day 2: Explore", "🏛️ Tanah Lot Temple", "🌾 Jatiluwih Rice Terraces"),
    ("Day 3: Beach", "🏖️ Seminyak Beach", "🥥 Beach Club Hopping"),
];

pub fn next_destination(index: usize) -> usize {
    (index + 1) % DESTINATIONS.len()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let session = use_session();
    let current = use_state(|| 0usize);
    // Floats only while on screen.
    let (mockup, mockup_visible) = use_intersection_observer(VisibilityOptions::default());

    {
        let current = current.clone();
        use_interval(move || current.set(next_destination(*current)), ROTATION_MS);
    }

    let (place, emoji) = DESTINATIONS[*current % DESTINATIONS.len()];
    let cta = if session.is_signed_in() { "Create a trip" } else { "Plan your first trip" };

    html! {
        <section class="hero hero-gradient">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        padding: 5rem 2rem 4rem;
                    }
                    .hero-inner { max-width: 80rem; margin: 0 auto; text-align: center; }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        font-size: 0.875rem;
                    }
                    .hero-badge .yc {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 0.25rem;
                        background: #f97316;
                        color: white;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 700;
                        color: #1F1F1F;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .hero-destination { color: #FF6B6B; display: inline-block; }
                    .hero-tagline { font-size: 1.5rem; font-weight: 500; margin-bottom: 3rem; }
                    .hero-mockup {
                        max-width: 56rem;
                        margin: 4rem auto 0;
                        padding: 2rem;
                        background: white;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        text-align: left;
                    }
                    .hero-mockup.floating { animation: float 6s ease-in-out infinite; }
                    .mockup-header { display: flex; justify-content: space-between; margin-bottom: 1.5rem; }
                    .mockup-days { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }
                    .mockup-day { background: #f9fafb; border-radius: 0.5rem; padding: 1rem; }
                    .mockup-day p { color: #4b5563; font-size: 0.875rem; }
                    .mockup-budget { display: flex; justify-content: space-between; margin-top: 1.5rem; font-size: 0.875rem; }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-badge animate-fade-in">
                    <span>{"Backed by"}</span>
                    <span class="yc">{"Y"}</span>
                </div>
                <h1 class="animate-fade-in">
                    {"Your next trip to "}
                    <span key={current.to_string()} class="hero-destination animate-fade-in">
                        {place}{emoji}
                    </span>
                    <br />
                    {"already planned."}
                </h1>
                <p class="hero-tagline">{"AI handles the hassle. You just pack."}</p>
                <Link<Route> to={Route::CreateTrip} classes="cta-button cursor-pointer">
                    {cta}
                    <span class="arrow">{"→"}</span>
                </Link<Route>>

                <div ref={mockup} class={classes!("hero-mockup", mockup_visible.then(|| "floating"))}>
                    <div class="mockup-header">
                        <h3>{"Your Bali Adventure"}</h3>
                        <span class="pill">{"5 Days"}</span>
                    </div>
                    <div class="mockup-days">
                        { for MOCKUP_DAYS.iter().map(|(title, stay, food)| html! {
                            <div class="mockup-day">
                                <h4>{*title}</h4>
                                <p>{*stay}</p>
                                <p>{*food}</p>
                            </div>
                        }) }
                    </div>
                    <div class="mockup-budget">
                        <span>{"Estimated Budget:"}</span>
                        <strong style="color: #FF6B6B;">{"$1,247 per person"}</strong>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(next_destination(0), 1);
        assert_eq!(next_destination(DESTINATIONS.len() - 1), 0);
    }
}
