use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

const NOT_FOUND_CSS: &str = r#"
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        background: #09110a;
        color: #f5f0e8;
        text-align: center;
        padding: 2rem;
    }
    .not-found h1 {
        margin: 0;
        font-family: Oswald, sans-serif;
        font-size: clamp(4rem, 14vw, 12rem);
        line-height: 0.9;
    }
    .not-found p {
        font-family: Inter, sans-serif;
        color: rgba(245, 240, 232, 0.6);
    }
    .not-found .back-link {
        padding: 0.75rem 1.75rem;
        border-radius: 999px;
        border: 1px solid rgba(52, 211, 153, 0.5);
        color: #34d399;
        text-decoration: none;
        font-family: Oswald, sans-serif;
        letter-spacing: 0.1em;
        text-transform: uppercase;
    }
"#;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{NOT_FOUND_CSS}</style>
            <h1>{"404"}</h1>
            <p>{"Lost in the jungle. This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="back-link">{"Back to the tropics"}</Link<Route>>
        </div>
    }
}
