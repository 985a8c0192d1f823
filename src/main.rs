use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{AddEventListenerOptions, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod cta;
mod motion {
    pub mod reveal;
    pub mod scroll_progress;
    pub mod radar;
    pub mod cursor_demo;
}
mod cms {
    pub mod models;
    pub mod client;
    pub mod fallback;
    pub mod loader;
}
mod components {
    pub mod radar_section;
    pub mod scroll_timeline;
    pub mod cursor_demo_card;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod compare;
    pub mod roi_calculator;
    pub mod prompt_library;
    pub mod blog;
    pub mod blog_post;
    pub mod not_found;
}

use cta::DemoButton;
use motion::reveal::REVEAL_CSS;
use pages::{
    blog::Blog,
    blog_post::BlogPost,
    compare::Compare,
    landing::Landing,
    not_found::NotFound,
    prompt_library::PromptLibrary,
    roi_calculator::RoiCalculator,
};

// Nav turns opaque once the hero has scrolled away
const NAV_SOLID_AFTER_PX: i32 = 80;

fn nav_is_solid(scroll_top: i32) -> bool {
    scroll_top > NAV_SOLID_AFTER_PX
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/compare")]
    Compare,
    #[at("/roi-calculator")]
    RoiCalculator,
    #[at("/prompt-library")]
    PromptLibrary,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Compare => {
            info!("Rendering Compare page");
            html! { <Compare /> }
        }
        Route::RoiCalculator => {
            info!("Rendering ROI calculator page");
            html! { <RoiCalculator /> }
        }
        Route::PromptLibrary => {
            info!("Rendering Prompt library page");
            html! { <PromptLibrary /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog post page for {}", slug);
            html! { <BlogPost {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
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
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let target = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = target
                            .document()
                            .and_then(|d| d.document_element())
                            .map(|el| el.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(nav_is_solid(scroll_top));
                    }) as Box<dyn FnMut()>);

                    let mut options = AddEventListenerOptions::new();
                    options.passive(true);
                    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        log::warn!("Failed to attach nav scroll listener: {:?}", e);
                    }
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
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

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = [
        (Route::Compare, "Compare"),
        (Route::RoiCalculator, "ROI Calculator"),
        (Route::PromptLibrary, "Prompt Library"),
        (Route::Blog, "Blog"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"hirewire"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    {
                        links.into_iter().map(|(route, label)| html! {
                            <div key={label} onclick={close_menu.clone()}>
                                <Link<Route> to={route} classes="nav-link">{ label }</Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <DemoButton content_id="nav" class={classes!("nav-cta")} />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.92);
                    backdrop-filter: blur(10px);
                    border-bottom-color: rgba(30, 144, 255, 0.15);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                .nav-link { color: #ccc; text-decoration: none; transition: color 0.2s ease; }
                .nav-link:hover { color: #7EB2FF; }
                .nav-cta {
                    background: #1E90FF;
                    color: #fff;
                    padding: 0.5rem 1.1rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span { width: 24px; height: 2px; background: #fff; }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(26, 26, 26, 0.97);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ REVEAL_CSS }</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_past_the_hero() {
        assert!(!nav_is_solid(0));
        assert!(!nav_is_solid(NAV_SOLID_AFTER_PX));
        assert!(nav_is_solid(NAV_SOLID_AFTER_PX + 1));
    }

    #[test]
    fn routes_round_trip_through_paths() {
        assert_eq!(Route::recognize("/roi-calculator"), Some(Route::RoiCalculator));
        assert_eq!(
            Route::recognize("/blog/unknown-slug"),
            Some(Route::BlogPost { slug: "unknown-slug".to_string() })
        );
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
