use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page centered hero-gradient">
            <div class="panel" style="text-align: center;">
                <div style="font-size: 3.75rem;">{"🧭"}</div>
                <h1>{"Page not found"}</h1>
                <p class="muted">{"This route doesn't lead anywhere. Let's get you back on track."}</p>
                <Link<Route> to={Route::Home} classes="cta-button cursor-pointer">
                    {"Back to TripFiti"}
                </Link<Route>>
            </div>
        </div>
    }
}
