use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod interaction;
mod components {
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod intro;
    pub mod menu_overlay;
    pub mod navbar;
    pub mod reveal;
    pub mod sponsors;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
