use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod confetti;
    pub mod countdown;
    pub mod effects;
    pub mod exploding_button;
    pub mod icon;
    pub mod particle_background;
}
mod pages {
    pub mod home;
}

use components::confetti::ConfettiOverlay;
use components::exploding_button::ExplodingButton;
use components::icon::Icon;
use components::particle_background::ParticleBackground;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, on_ape_in: Callback<MouseEvent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home on_ape_in={on_ape_in} /> }
        }
        Route::NotFound => {
            // Single-page site: every path lands on the same page.
            info!("Unknown path, rendering Home page");
            html! { <Home on_ape_in={on_ape_in} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            let offset = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(offset > 50.0);
                        }) as Box<dyn FnMut()>)
                    };
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        log::warn!("could not attach scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor jumps must go through, so no prevent_default here.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark"><Icon name="flame" size={28} /></span>
                    <span class="nav-logo-text">{ config::TOKEN_NAME }</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <Icon name="menu" size={24} />
                </button>
                <div class={menu_class}>
                    <a class="nav-link" href="#roadmap" onclick={close_menu.clone()}>{ "Roadmap" }</a>
                    <a class="nav-link" href="#memes" onclick={close_menu}>{ "Memes" }</a>
                    <ExplodingButton class={classes!("nav-buy")}>
                        { "Buy Now!" }
                    </ExplodingButton>
                </div>
            </nav>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: rgba(250, 204, 21, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 4px solid #78350f;
                }
                .top-nav.scrolled {
                    box-shadow: 0 4px 0 0 rgba(120, 53, 15, 0.3);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .nav-logo:hover {
                    transform: rotate(-10deg) scale(1.1);
                }
                .nav-logo-mark {
                    width: 3rem;
                    height: 3rem;
                    background: #78350f;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #facc15;
                }
                .nav-logo-text {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 1.875rem;
                    color: #78350f;
                    letter-spacing: -0.05em;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    font-weight: 700;
                    color: #78350f;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #92400e;
                }
                .nav-buy {
                    font-size: 1rem;
                    padding: 0.5rem 1rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #78350f;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #facc15;
                        border-bottom: 4px solid #78350f;
                        padding: 1.5rem;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let confetti_on = use_state(|| false);
    let confetti_seq = use_state(|| 0u32);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    // Every press rolls a fresh batch: bumping the sequence remounts the
    // overlay, and the replaced timer handle drops the old dismiss.
    let trigger_confetti = {
        let confetti_on = confetti_on.clone();
        let confetti_seq = confetti_seq.clone();
        Callback::from(move |_: MouseEvent| {
            confetti_seq.set(*confetti_seq + 1);
            confetti_on.set(true);

            let confetti_on = confetti_on.clone();
            let dismiss = Timeout::new(config::CONFETTI_DISMISS_MS, move || {
                confetti_on.set(false);
            });
            *dismiss_timer.borrow_mut() = Some(dismiss);
        })
    };

    html! {
        <div class="page-shell paper-texture">
            <ParticleBackground />
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={move |route| switch(route, trigger_confetti.clone())} />
            </BrowserRouter>
            if *confetti_on {
                <ConfettiOverlay key={*confetti_seq} seq={*confetti_seq} />
            }
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
