use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::menu_overlay::MenuOverlay;
use crate::config;
use crate::hooks::{use_entered, use_window_scrolled};
use crate::interaction::BodyScrollLock;

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1rem 2.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        color: #000;
        background: transparent;
        transform: translateY(-80px);
        opacity: 0;
        transition: transform 0.7s cubic-bezier(0.22, 1, 0.36, 1),
                    opacity 0.7s ease, background 0.3s ease, color 0.3s ease;
    }
    .navbar.entered {
        transform: none;
        opacity: 1;
    }
    .navbar.scrolled {
        color: #fff;
        background: rgba(0, 0, 0, 0.7);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .nav-brand svg { width: 2.25rem; height: 2.25rem; }
    .nav-brand-name {
        font-family: Oswald, sans-serif;
        font-size: 1.05rem;
        font-weight: 700;
        letter-spacing: 0.12em;
    }
    .nav-brand-sub {
        font-family: Inter, sans-serif;
        font-size: 0.65rem;
        opacity: 0.6;
    }
    .nav-controls {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .nav-pill, .nav-burger {
        color: inherit;
        background: transparent;
        border: 1px solid currentColor;
        border-radius: 999px;
        cursor: pointer;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .nav-pill {
        padding: 0.5rem 1.25rem;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .nav-burger {
        width: 2.75rem;
        height: 2.75rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 4px;
    }
    .nav-burger span.bar {
        height: 1.5px;
        width: 1.25rem;
        background: currentColor;
        border-radius: 999px;
    }
    .nav-burger span.bar.short { width: 0.875rem; }
    .mlh-badge {
        position: fixed;
        top: 0;
        right: 1rem;
        width: 4rem;
        z-index: 200;
        filter: drop-shadow(0 2px 8px rgba(0, 0, 0, 0.18));
    }
    @media (max-width: 640px) {
        .navbar { padding: 1rem 1.5rem; }
        .nav-pill { display: none; }
    }
"#;

const PETAL_ANGLES: [u32; 8] = [0, 45, 90, 135, 180, 225, 270, 315];

fn flower_mark() -> Html {
    html! {
        <svg viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg">
            { for PETAL_ANGLES.iter().map(|deg| html! {
                <ellipse cx="20" cy="20" rx="4.5" ry="9" fill="currentColor"
                    transform={format!("rotate({} 20 20)", deg)} opacity="0.85" />
            }) }
            <circle cx="20" cy="20" r="4" fill="currentColor" />
        </svg>
    }
}

fn mlh_badge() -> Html {
    html! {
        <a class="mlh-badge" href="https://mlh.io" target="_blank" rel="noopener noreferrer" aria-label="Major League Hacking">
            <svg viewBox="0 0 60 80" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M0 0h60v68l-30 12L0 68V0z" fill="#e31837" />
                <path d="M0 0h60v5H0z" fill="#1a1a2e" />
                <text x="50%" y="30" text-anchor="middle" fill="white" font-size="11" font-weight="800" font-family="sans-serif">{"MLH"}</text>
                <text x="50%" y="46" text-anchor="middle" fill="white" font-size="6.5" font-weight="600" font-family="sans-serif">{"OFFICIAL"}</text>
                <text x="50%" y="59" text-anchor="middle" fill="white" font-size="6" font-weight="600" font-family="sans-serif">{"2026"}</text>
                <text x="50%" y="69" text-anchor="middle" fill="white" font-size="5.5" font-weight="500" font-family="sans-serif">{"SEASON"}</text>
            </svg>
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_window_scrolled(config::NAVBAR_SCROLL_THRESHOLD);
    let entered = use_entered();

    // Page scroll stays locked for as long as the menu is open
    use_effect_with_deps(
        move |open: &bool| {
            let lock = if *open { BodyScrollLock::body() } else { None };
            move || drop(lock)
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*menu_open;
            gloo_console::log!(if next { "Menu opened" } else { "Menu closed" });
            menu_open.set(next);
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let contact = config::mailto(config::get_contact_email());

    html! {
        <>
            <style>{NAVBAR_CSS}</style>
            { mlh_badge() }
            <nav class={classes!("navbar", entered.then_some("entered"), scrolled.then_some("scrolled"))}>
                <a class="nav-brand" href="#hero">
                    { flower_mark() }
                    <div>
                        <div class="nav-brand-name">{"HACKTROPICA"}</div>
                        <div class="nav-brand-sub">{"powered by ▲ Vercel"}</div>
                    </div>
                </a>
                <div class="nav-controls">
                    <a class="nav-pill" href={contact}>{"CONTACT US"}</a>
                    <button class="nav-burger" onclick={toggle_menu} aria-label="Toggle menu" aria-expanded={(*menu_open).to_string()}>
                        if *menu_open {
                            <span class="nav-close">{"✕"}</span>
                        } else {
                            <>
                                <span class="bar"></span>
                                <span class="bar short"></span>
                                <span class="bar"></span>
                            </>
                        }
                    </button>
                </div>
            </nav>
            <MenuOverlay is_open={*menu_open} on_close={close_menu} />
        </>
    }
}
