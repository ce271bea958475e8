use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::{sign_out, use_session};
use crate::events::EventListenerGuard;
use crate::Route;

const SCROLL_THRESHOLD: f64 = 50.0;

const SECTION_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("How It Works", "#how-it-works"),
    ("Pricing", "#pricing"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Landing page nav: transparent until scrolled, with section anchors.
    #[prop_or_default]
    pub landing: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let session = use_session();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| !props.landing);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |landing| {
                let guard = if *landing {
                    EventListenerGuard::on_window("scroll", move |_| {
                        let scroll_y = web_sys::window()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(scroll_y > SCROLL_THRESHOLD);
                    })
                } else {
                    None
                };
                move || drop(guard)
            },
            props.landing,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let handle_logout = {
        let session = session.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            sign_out(&session);
        })
    };

    let menu_class = if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        transition: all 0.3s;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1F1F1F;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #1F1F1F;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover { color: #FF6B6B; }
                    .nav-credits { font-size: 0.875rem; color: #4b5563; }
                    .nav-button {
                        padding: 0.6rem 1.5rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(12px);
                        color: #1F1F1F;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .nav-button:hover { transform: scale(1.05); box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span { width: 24px; height: 2px; background: #1F1F1F; }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(255, 255, 255, 0.95);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo cursor-pointer">
                    {"TripFiti"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    if props.landing {
                        { for SECTION_LINKS.iter().map(|(label, href)| html! {
                            <a class="nav-link" href={*href} onclick={close_menu.clone()}>{*label}</a>
                        }) }
                    }
                    if session.is_signed_in() {
                        if let Some(credits) = session.credits() {
                            <span class="nav-credits">{format!("💰 Credits: {}", credits)}</span>
                        }
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Dashboard} classes="nav-button">
                                {"My Trips"}
                            </Link<Route>>
                        </div>
                        <button class="nav-link" style="background: none; border: none; cursor: pointer;" onclick={handle_logout}>
                            {"Sign Out"}
                        </button>
                    } else {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Auth} classes="nav-button">
                                {"Sign Up"}
                            </Link<Route>>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}
