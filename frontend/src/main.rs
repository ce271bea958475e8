use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod events;
mod hooks {
    pub mod visibility;
}
mod api {
    pub mod client;
    pub mod error;
    pub mod models;
    pub mod promo;
    pub mod session_store;
}
mod auth {
    pub mod session;
}
mod trip {
    pub mod form;
    pub mod itinerary;
    pub mod places;
    pub mod planner;
}
mod components {
    pub mod animated_cursor;
    pub mod benefits;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod navbar;
    pub mod reveal;
    pub mod toast;
    pub mod trust_bar;
}
mod pages {
    pub mod auth;
    pub mod create_trip;
    pub mod dashboard;
    pub mod landing;
    pub mod not_found;
    pub mod view_trip;
}

use auth::session::SessionProvider;
use components::{animated_cursor::AnimatedCursor, toast::ToastProvider};
use pages::{
    auth::Auth,
    create_trip::CreateTrip,
    dashboard::Dashboard,
    landing::Landing,
    not_found::NotFound,
    view_trip::ViewTrip,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    Auth,
    #[at("/create-trip")]
    CreateTrip,
    #[at("/dashboard")]
    Dashboard,
    #[at("/view-trip/:id")]
    ViewTrip { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Auth => {
            info!("Rendering Auth page");
            html! { <Auth /> }
        },
        Route::CreateTrip => {
            info!("Rendering Create Trip page");
            html! { <CreateTrip /> }
        },
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        },
        Route::ViewTrip { id } => {
            info!("Rendering trip {}", id);
            html! { <ViewTrip id={id} /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

const GLOBAL_STYLE: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
        color: #1F1F1F;
        background: #ffffff;
        cursor: none;
    }
    @media (hover: none) { body { cursor: auto; } }
    a, button, .cursor-pointer { cursor: none; }
    h1, h2, h3, h4 { margin: 0 0 0.5rem 0; }
    .muted { color: #6b7280; }
    .centered { display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; gap: 1rem; }

    .hero-gradient { background: linear-gradient(135deg, #FFF5F5 0%, #FFFBEB 50%, #F0F9FF 100%); }

    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .animate-fade-in { opacity: 0; animation: fadeIn 0.6s ease-out forwards; }
    .reveal-hidden { opacity: 0; }
    @keyframes bounceSubtle {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-6px); }
    }
    .bounce-subtle { display: inline-block; animation: bounceSubtle 2s ease-in-out infinite; }

    .cta-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.85rem 2rem;
        border: none;
        border-radius: 0.75rem;
        background: linear-gradient(135deg, #FF6B6B, #FFD93D);
        color: #ffffff;
        font-weight: 600;
        font-size: 1rem;
        text-decoration: none;
        transition: transform 0.3s, box-shadow 0.3s, opacity 0.3s;
    }
    .cta-button:hover { transform: scale(1.05); box-shadow: 0 20px 25px rgba(255, 107, 107, 0.25); }
    .cta-button:disabled, .cta-button.inactive { opacity: 0.5; transform: none; box-shadow: none; }
    .cta-button.large { padding: 1.1rem 3rem; font-size: 1.125rem; }
    .cta-button.full { width: 100%; }
    .link-button {
        background: none;
        border: none;
        color: #FF6B6B;
        font-weight: 600;
        text-decoration: none;
        padding: 0 0.25rem;
    }

    .section { padding: 6rem 2rem; }
    .section-muted { background: #F9FAFB; }
    .section-inner { max-width: 80rem; margin: 0 auto; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header h2 { font-size: 2.5rem; font-weight: 700; }
    .section-cta { text-align: center; margin-top: 4rem; }
    .card-grid { display: grid; gap: 2rem; }
    .card-grid.three { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .card-grid.four { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    @media (max-width: 1024px) {
        .card-grid.four { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    }
    @media (max-width: 768px) {
        .card-grid.three, .card-grid.four { grid-template-columns: 1fr; }
    }

    .benefit-card, .testimonial, .panel {
        background: #ffffff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .benefit-card:hover, .testimonial:hover { transform: translateY(-4px); box-shadow: 0 20px 35px rgba(0, 0, 0, 0.1); }
    .card-emoji, .step-icon { font-size: 3rem; margin-bottom: 1rem; }
    .step { position: relative; text-align: center; }
    .step-badge {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: linear-gradient(135deg, #FF6B6B, #FFD93D);
        color: #ffffff;
        font-weight: 700;
    }
    .step-number { font-size: 0.875rem; font-weight: 600; color: #FF6B6B; }
    .arrow { color: #FFD93D; font-size: 2rem; }
    .quote { font-style: italic; color: #374151; }
    .author { display: flex; align-items: center; gap: 0.75rem; margin-top: 1.5rem; }
    .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: linear-gradient(135deg, #FF6B6B, #FFD93D);
        color: #ffffff;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
    }
    .trust-header { text-align: center; margin-bottom: 3rem; }
    .stat { text-align: center; }
    .stat-icon { font-size: 2rem; }
    .stat-value { font-size: 2.25rem; font-weight: 700; color: #FF6B6B; }
    .pill {
        display: inline-block;
        padding: 0.35rem 0.85rem;
        border-radius: 9999px;
        background: rgba(255, 107, 107, 0.1);
        color: #1F1F1F;
        font-size: 0.875rem;
    }

    .footer { background: #1F1F1F; color: #d1d5db; padding: 4rem 2rem 2rem; }
    .footer a { color: #d1d5db; text-decoration: none; }
    .footer a:hover { color: #FFD93D; }
    .footer-grid { max-width: 80rem; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
    .footer-bottom { max-width: 80rem; margin: 3rem auto 0; padding-top: 2rem; border-top: 1px solid #374151; text-align: center; }
    .socials { display: flex; gap: 1rem; }
    .social { font-size: 1.25rem; }

    .page { min-height: 100vh; padding-top: 6rem; }
    .page-content { max-width: 64rem; margin: 0 auto; padding: 2rem; display: flex; flex-direction: column; gap: 2rem; }
    .page-content.narrow { max-width: 28rem; }
    .page-header { text-align: center; }
    .page-header h1 { font-size: 2.5rem; font-weight: 700; }
    .stack { display: flex; flex-direction: column; gap: 0.75rem; }
    .text-input {
        width: 100%;
        padding: 0.85rem 1rem;
        border: 1px solid #e5e7eb;
        border-radius: 0.75rem;
        font-size: 1rem;
        font-family: inherit;
        background: rgba(255, 255, 255, 0.9);
        transition: border-color 0.2s, box-shadow 0.2s;
    }
    .text-input:focus { outline: none; border-color: #FF6B6B; box-shadow: 0 0 0 3px rgba(255, 107, 107, 0.2); }
    .hint { font-size: 0.875rem; color: #6b7280; }
    .switch-mode { text-align: center; margin-top: 1.5rem; }
    .promo-hint {
        display: flex;
        gap: 0.5rem;
        margin-top: 1.5rem;
        padding: 1rem;
        border-radius: 0.75rem;
        background: rgba(255, 217, 61, 0.15);
        font-size: 0.875rem;
    }
    .promo-form { display: flex; gap: 1rem; }
    @keyframes spin { to { transform: rotate(360deg); } }
    .spinner {
        display: inline-block;
        width: 1.25rem;
        height: 1.25rem;
        border: 2px solid rgba(255, 107, 107, 0.3);
        border-top-color: #FF6B6B;
        border-radius: 50%;
        animation: spin 0.8s linear infinite;
    }

    .form-section { margin-bottom: 2.5rem; }
    .form-section h3 { display: flex; align-items: center; gap: 0.5rem; font-size: 1.25rem; }
    .destination { position: relative; }
    .destination-input { min-height: 3.5rem; resize: none; padding-right: 2.5rem; }
    .destination-pin { position: absolute; right: 1rem; top: 1rem; }
    .dropdown {
        position: absolute;
        left: 0;
        right: 0;
        top: calc(100% + 0.25rem);
        z-index: 20;
        background: #ffffff;
        border-radius: 0.75rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        overflow: hidden;
    }
    .dropdown-item { padding: 0.75rem 1rem; border-bottom: 1px solid #f3f4f6; }
    .dropdown-item:hover { background: rgba(255, 107, 107, 0.08); }
    .dropdown-title { font-weight: 600; }
    .dropdown-subtitle { font-size: 0.875rem; color: #6b7280; }
    .duration-row { display: flex; justify-content: space-between; align-items: center; margin: 0.5rem 0; }
    .duration-value { font-weight: 600; }
    .slider { width: 100%; height: 0.5rem; border-radius: 9999px; appearance: none; -webkit-appearance: none; }
    .tooltip { position: relative; font-size: 1rem; color: #6b7280; }
    .tooltip-content {
        display: none;
        position: absolute;
        left: 1.5rem;
        top: 0;
        z-index: 30;
        width: 18rem;
        padding: 1rem;
        border-radius: 0.75rem;
        background: #1F1F1F;
        color: #ffffff;
        font-size: 0.8rem;
        font-weight: 400;
    }
    .tooltip:hover .tooltip-content { display: block; }
    .option-grid { display: grid; gap: 1rem; }
    .option-grid.three { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .option-grid.four { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    @media (max-width: 768px) {
        .option-grid.three, .option-grid.four { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    }
    .option-card {
        padding: 1.25rem;
        border: 2px solid #e5e7eb;
        border-radius: 1rem;
        text-align: center;
        background: #ffffff;
        transition: transform 0.2s, border-color 0.2s, box-shadow 0.2s;
    }
    .option-card:hover { transform: translateY(-2px); }
    .option-card.selected { border-color: #FF6B6B; box-shadow: 0 10px 20px rgba(255, 107, 107, 0.2); }
    .option-emoji { font-size: 2rem; }
    .option-title { font-weight: 600; }
    .option-description { font-size: 0.8rem; color: #6b7280; }

    .trip-card {
        display: block;
        padding: 1.5rem;
        border-radius: 1rem;
        background: #ffffff;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
        color: inherit;
        text-decoration: none;
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .trip-card:hover { transform: translateY(-4px); box-shadow: 0 20px 35px rgba(0, 0, 0, 0.1); }
    .trip-card-header { display: flex; align-items: center; gap: 0.75rem; }
    .trip-flag { font-size: 2rem; }
    .trip-card-meta { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
    .empty-icon { font-size: 3.75rem; }
    .trip-section h2 { margin-bottom: 1.5rem; }
    .hotel-card { background: #ffffff; border-radius: 1rem; overflow: hidden; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06); }
    .hotel-card img, .activity img { width: 100%; height: 12rem; object-fit: cover; }
    .hotel-body { padding: 1.25rem; }
    .hotel-meta, .activity-meta { display: flex; justify-content: space-between; margin-top: 0.75rem; }
    .price { color: #FF6B6B; font-weight: 600; }
    .day-plan { margin-bottom: 1.5rem; }
    .day-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
    .activity { display: grid; grid-template-columns: 12rem 1fr; gap: 1.5rem; padding: 1rem 0; border-top: 1px solid #f3f4f6; }
    .activity img { height: 8rem; border-radius: 0.75rem; }
    @media (max-width: 768px) {
        .activity { grid-template-columns: 1fr; }
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <style>{GLOBAL_STYLE}</style>
                    <AnimatedCursor />
                    <Switch<Route> render={switch} />
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting TripFiti");
    yew::Renderer::<App>::new().render();
}
