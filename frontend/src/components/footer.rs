use yew::prelude::*;

const QUICK_LINKS: &[&str] = &["Features", "Pricing", "Contact", "Privacy"];
const SOCIALS: &[(&str, &str)] = &[("Twitter", "𝕏"), ("Instagram", "IG"), ("LinkedIn", "In")];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3>{"TripFiti"}</h3>
                    <p>{"Your personal AI travel agent. Plan trips effortlessly with intelligent recommendations and personalized itineraries."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <li><a href={format!("#{}", link.to_lowercase())}>{*link}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Connect With Us"}</h4>
                    <div class="socials">
                        { for SOCIALS.iter().map(|(name, label)| html! {
                            <a href="#" class="social" title={*name}>{*label}</a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 TripFiti. All rights reserved. Built with ❤️ for travelers."}</p>
            </div>
        </footer>
    }
}
