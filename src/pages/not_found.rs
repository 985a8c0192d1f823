use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. The rest of the site is still here."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">{"Back to home"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: #fff;
                    text-align: center;
                    padding: 2rem;
                }
                .not-found-page h1 { font-size: 5rem; color: #7EB2FF; margin: 0; }
                .not-found-page p { color: #999; margin-bottom: 1.5rem; }
                "#}
            </style>
        </div>
    }
}
