use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{MENU_SOCIALS, NAV_LINKS};
use crate::interaction::viewport::stagger_delay;

const MENU_CSS: &str = r#"
    .menu-overlay {
        position: fixed;
        inset: 0;
        z-index: 40;
        display: flex;
        background: #09110a;
        clip-path: inset(0 0 100% 0);
        pointer-events: none;
        transition: clip-path 0.5s ease-in;
    }
    .menu-overlay.open {
        clip-path: inset(0 0 0% 0);
        pointer-events: auto;
        transition: clip-path 0.65s ease-out;
    }
    .menu-visual {
        width: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 3rem;
    }
    .menu-visual-card {
        position: relative;
        width: 100%;
        height: 70vh;
        border-radius: 1.5rem;
        overflow: hidden;
        background: linear-gradient(135deg, #1a3c2a 0%, #0d5c36 50%, #1e5a2b 100%);
    }
    .menu-visual-card video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.6;
    }
    .menu-visual-caption {
        position: absolute;
        left: 2rem;
        right: 2rem;
        bottom: 2rem;
        font-family: Oswald, sans-serif;
        color: #fff;
    }
    .menu-visual-caption small {
        display: block;
        font-size: 0.75rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        opacity: 0.5;
        margin-bottom: 0.5rem;
    }
    .menu-visual-caption strong { font-size: 2.25rem; line-height: 1.1; }
    .menu-links {
        flex: 1;
        position: relative;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 6rem 4rem;
    }
    .menu-close {
        position: absolute;
        top: 1.5rem;
        right: 1.5rem;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 999px;
        color: #fff;
        background: rgba(255, 255, 255, 0.1);
        cursor: pointer;
    }
    .menu-eyebrow {
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.4);
        margin-bottom: 2rem;
    }
    .menu-link-row { overflow: hidden; }
    .menu-link {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 0.5rem 0;
        text-decoration: none;
        color: #fff;
        transform: translateY(60px);
        opacity: 0;
        transition: transform 0.3s ease-in, opacity 0.3s ease-in;
    }
    .menu-overlay.open .menu-link {
        transform: none;
        opacity: 1;
        transition: transform 0.55s ease-out, opacity 0.55s ease-out;
    }
    .menu-link-index {
        width: 1.5rem;
        text-align: right;
        font-family: Oswald, sans-serif;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.2);
    }
    .menu-link-label {
        font-family: Oswald, sans-serif;
        font-weight: 700;
        font-size: clamp(2.5rem, 6vw, 6rem);
        letter-spacing: -0.02em;
        line-height: 1;
        transition: color 0.3s ease, transform 0.3s ease;
    }
    .menu-link:hover .menu-link-label { color: #34d399; transform: translateX(0.5rem); }
    .menu-link-divider { height: 1px; background: rgba(255, 255, 255, 0.1); }
    .menu-socials {
        margin-top: 2.5rem;
        display: flex;
        gap: 1.5rem;
    }
    .menu-socials a {
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.3);
        text-decoration: none;
    }
    .menu-socials a:hover { color: #fff; }
    @media (max-width: 1024px) {
        .menu-visual { display: none; }
        .menu-links { padding: 6rem 2.5rem; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct MenuOverlayProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(MenuOverlay)]
pub fn menu_overlay(props: &MenuOverlayProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("menu-overlay", props.is_open.then_some("open"))} aria-hidden={(!props.is_open).to_string()}>
            <style>{MENU_CSS}</style>
            <div class="menu-visual">
                <div class="menu-visual-card">
                    <video src={config::HERO_VIDEO} poster={config::PLACEHOLDER_IMAGE}
                        autoplay=true muted=true loop=true playsinline=true></video>
                    <div class="menu-visual-caption">
                        <small>{"Hacktropica 2025"}</small>
                        <strong>{"Enter The"}<br/>{"Tropics"}</strong>
                    </div>
                </div>
            </div>
            <div class="menu-links">
                <button class="menu-close" onclick={close.clone()} aria-label="Close menu">{"✕"}</button>
                <p class="menu-eyebrow">{"Navigate"}</p>
                <nav>
                    { for NAV_LINKS.iter().enumerate().map(|(i, link)| {
                        // staggered in on open, quicker stagger on close
                        let delay = if props.is_open {
                            stagger_delay(i, 0.07, 0.25)
                        } else {
                            stagger_delay(i, 0.04, 0.0)
                        };
                        html! {
                            <div class="menu-link-row" key={link.label}>
                                <a class="menu-link" href={link.href} onclick={close.clone()}
                                    style={format!("transition-delay: {:.2}s;", delay)}>
                                    <span class="menu-link-index">{format!("{:02}", i + 1)}</span>
                                    <span class="menu-link-label">{link.label}</span>
                                </a>
                                <div class="menu-link-divider"></div>
                            </div>
                        }
                    }) }
                </nav>
                <div class="menu-socials">
                    { for MENU_SOCIALS.iter().map(|label| {
                        let href = if *label == "Discord" { config::get_discord_url() } else { "#" };
                        html! { <a key={*label} href={href}>{*label}</a> }
                    }) }
                </div>
            </div>
        </div>
    }
}
