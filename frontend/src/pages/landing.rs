use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::intro::Intro;
use crate::components::navbar::Navbar;
use crate::components::reveal::REVEAL_CSS;
use crate::components::sponsors::Sponsors;
use crate::components::testimonials::Testimonials;

const GLOBAL_CSS: &str = r#"
    *, *::before, *::after { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: #f8f5f0;
        color: #111;
        font-family: Inter, sans-serif;
        -webkit-font-smoothing: antialiased;
        overflow-x: hidden;
    }
    a { color: inherit; }
    img, video, canvas { display: block; }
    ::selection { background: #34d399; color: #09110a; }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            gloo_console::log!("Landing mounted");
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <style>{GLOBAL_CSS}</style>
            <style>{REVEAL_CSS}</style>
            <Navbar />
            <Hero />
            <Intro />
            <Gallery />
            <Testimonials />
            <Sponsors />
            <FaqSection />
            <Footer />
        </main>
    }
}
