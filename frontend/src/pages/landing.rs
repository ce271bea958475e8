use yew::prelude::*;

use crate::components::benefits::BenefitsSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::navbar::Nav;
use crate::components::trust_bar::TrustBar;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <Nav landing={true} />
            <Hero />
            <BenefitsSection />
            <HowItWorks />
            <TrustBar />
            <Footer />
        </div>
    }
}
