use yew::prelude::*;

use crate::config;
use crate::content::INTRO_WORDS;
use crate::hooks::use_scroll_progress;
use crate::interaction::progress::{parallax_image_style, tagline_style, word_style};

const INTRO_CSS: &str = r#"
    .intro { position: relative; }
    .intro-sticky {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
        background: #f5f0e8;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 0 3rem;
    }
    .intro-paragraph {
        max-width: 64rem;
        text-align: center;
        font-family: Oswald, sans-serif;
        font-size: clamp(1.7rem, 4.5vw, 5rem);
        font-weight: 700;
        line-height: 1.1;
        letter-spacing: -0.01em;
        text-transform: uppercase;
    }
    .intro-word {
        display: inline-block;
        margin-right: 0.25em;
    }
    .intro-sub {
        margin-top: 1.5rem;
        font-family: Inter, sans-serif;
        font-size: clamp(0.9rem, 1.8vw, 1.4rem);
        color: #555;
        letter-spacing: 0.08em;
    }
    .intro-tagline {
        margin-top: 1rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.25rem;
    }
    .intro-tagline small {
        font-family: Inter, sans-serif;
        font-size: clamp(0.7rem, 1.2vw, 1rem);
        color: #999;
        letter-spacing: 0.35em;
        text-transform: uppercase;
    }
    .intro-tagline strong {
        font-family: Oswald, sans-serif;
        font-size: clamp(2.5rem, 7vw, 8rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        line-height: 0.9;
        color: #111;
    }
    .intro-image {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 50vh;
        overflow: hidden;
    }
    .intro-image::before {
        content: "";
        position: absolute;
        inset: 0;
        z-index: 2;
        background: linear-gradient(to bottom, #f5f0e8 0%, transparent 30%);
    }
    .intro-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transform: scale(1.1);
    }
    @media (max-width: 640px) {
        .intro-sticky { padding: 0 1.5rem; }
    }
"#;

/// Pinned word-by-word reveal. The section is several viewports tall and its
/// scroll progress drives every style below.
#[function_component(Intro)]
pub fn intro() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone());

    let (tagline_opacity, tagline_offset) = tagline_style(progress);
    let tagline = format!(
        "opacity: {:.3}; transform: translateY({:.1}px);",
        tagline_opacity, tagline_offset
    );
    let (image_opacity, image_offset) = parallax_image_style(progress);

    html! {
        <section ref={section} id="intro" class="intro"
            style={format!("height: {}vh;", config::INTRO_REGION_VIEWPORTS * 100)}>
            <style>{INTRO_CSS}</style>
            <div class="intro-sticky">
                <div class="intro-paragraph">
                    { for INTRO_WORDS.iter().enumerate().map(|(i, word)| {
                        let style = word_style(i, INTRO_WORDS.len(), progress);
                        html! {
                            <span key={i} class="intro-word"
                                style={format!("opacity: {:.3}; color: {};", style.opacity, style.color.to_hex())}>
                                {*word}
                            </span>
                        }
                    }) }
                </div>

                <p class="intro-sub" style={tagline.clone()}>{"An event that feels like you."}</p>

                <div class="intro-tagline" style={tagline}>
                    <small>{"This is..."}</small>
                    <strong>{"HACKTROPICA"}</strong>
                </div>

                <div class="intro-image"
                    style={format!("opacity: {:.3}; transform: translateY({:.2}%);", image_opacity, image_offset)}>
                    <img src={config::PLACEHOLDER_IMAGE} alt="Tropical landscape" />
                </div>
            </div>
        </section>
    }
}
