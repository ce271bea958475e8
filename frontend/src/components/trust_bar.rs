use yew::prelude::*;

use crate::components::reveal::{reveal_class, stagger};
use crate::hooks::visibility::{use_visibility_state, VisibilityOptions};

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Felt like a human travel agent", "@nomad_jess"),
    ("Saved me 15 hours of planning", "@travel_mike"),
    ("My best trip planning experience", "@wanderlust_sara"),
];

const STATS: &[&str] = &[
    "10,000+ trips generated",
    "Users save 10+ hours per trip",
    "95% satisfaction rate",
];

fn avatar_initial(handle: &str) -> String {
    handle
        .trim_start_matches('@')
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[function_component(TrustBar)]
pub fn trust_bar() -> Html {
    let (node, state) = use_visibility_state(VisibilityOptions::with_threshold(0.1));

    html! {
        <section ref={node} id="pricing" class="section">
            <div class="section-inner">
                <p class="trust-header">{"Trusted by thousands of travelers 🌍"}</p>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, (text, author))| html! {
                        <div class={classes!("testimonial", reveal_class(state))} style={stagger(i, 0.15)}>
                            <div class="avatar">{avatar_initial(author)}</div>
                            <div>
                                <p class="quote">{format!("\"{}\"", text)}</p>
                                <p class="author">{*author}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="card-grid three">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat"><p>{*stat}</p></div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_uses_first_letter_of_handle() {
        assert_eq!(avatar_initial("@nomad_jess"), "N");
        assert_eq!(avatar_initial(""), "");
    }
}
