use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{GalleryItem, GALLERY_ITEMS, GALLERY_ROW_PX};
use crate::interaction::viewport::stagger_delay;

const GALLERY_CSS: &str = r#"
    .gallery {
        padding: 6rem 3rem;
        background: #0e1912;
    }
    .gallery-eyebrow {
        margin-bottom: 0.75rem;
        font-family: Oswald, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(52, 211, 153, 0.6);
    }
    .gallery-title {
        margin: 0 0 3.5rem;
        font-family: Oswald, sans-serif;
        font-size: clamp(2.5rem, 7vw, 8rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        line-height: 0.9;
        text-transform: uppercase;
        color: #f5f0e8;
    }
    .gallery-title span { color: #34d399; }
    .gallery-grid {
        display: grid;
        gap: 1rem;
        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
        grid-auto-flow: dense;
    }
    .gallery-tile {
        position: relative;
        overflow: hidden;
        border-radius: 1rem;
        cursor: pointer;
    }
    .gallery-tile .reveal { height: 100%; }
    .gallery-tile-bg {
        position: absolute;
        inset: 0;
        transition: transform 0.5s ease;
    }
    .gallery-tile-bg img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.6;
        transition: opacity 0.5s ease;
    }
    .gallery-tile:hover .gallery-tile-bg { transform: scale(1.1); }
    .gallery-tile:hover .gallery-tile-bg img { opacity: 0.8; }
    .gallery-caption {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: flex-end;
        padding: 1.25rem;
        opacity: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
        transition: opacity 0.3s ease;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        color: #fff;
    }
    .gallery-tile:hover .gallery-caption { opacity: 1; }
    .gallery-more {
        margin-top: 3rem;
        display: flex;
        justify-content: center;
    }
    .gallery-more button {
        padding: 0.875rem 2rem;
        border-radius: 999px;
        border: 1px solid rgba(52, 211, 153, 0.4);
        background: transparent;
        color: #34d399;
        font-family: Oswald, sans-serif;
        font-size: 0.875rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        cursor: pointer;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .gallery-more button:hover { background: #34d399; color: #000; }
    @media (max-width: 640px) {
        .gallery { padding: 6rem 1.5rem; }
        .gallery-grid { gap: 0.75rem; }
    }
"#;

// Tiles enter in waves of four
const TILE_WAVE: usize = 4;

fn gallery_tile(index: usize, item: &GalleryItem) -> Html {
    html! {
        <Reveal
            key={item.id}
            class={classes!("gallery-tile")}
            style={format!("grid-row-end: span {}; background: {};", item.row_span(), item.color)}
            delay={stagger_delay(index % TILE_WAVE, 0.08, 0.0)}
            margin={80.0}
        >
            <div class="gallery-tile-bg" style={format!("background: {};", item.color)}>
                <img src={config::PLACEHOLDER_IMAGE} alt={format!("Memory {}", item.id)} />
            </div>
            <div class="gallery-caption">{"Hacktropica 1.0 · 2024"}</div>
        </Reveal>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id="memories" class="gallery">
            <style>{GALLERY_CSS}</style>
            <Reveal offset={20.0}>
                <p class="gallery-eyebrow">{"The Journey So Far"}</p>
                <h2 class="gallery-title">
                    {"Memories of"}<br/>
                    <span>{"Hacktropica"}</span>{" 1.0"}
                </h2>
            </Reveal>
            <div class="gallery-grid" style={format!("grid-auto-rows: {}px;", GALLERY_ROW_PX)}>
                { for GALLERY_ITEMS.iter().enumerate().map(|(i, item)| gallery_tile(i, item)) }
            </div>
            <Reveal class={classes!("gallery-more")} offset={20.0} delay={0.3}>
                <button>{"View Full Gallery →"}</button>
            </Reveal>
        </section>
    }
}
