use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{SocialIcon, FOOTER_SOCIALS, QUICK_LINKS};

const FOOTER_CSS: &str = r#"
    .footer { position: relative; overflow: hidden; background: #09110a; color: #fff; }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 3rem;
        padding: 5rem 4rem 4rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .footer-col { display: flex; flex-direction: column; gap: 1rem; }
    .footer-brand { display: flex; align-items: center; gap: 0.75rem; }
    .footer-brand-icon {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #10b981;
    }
    .footer-brand-name {
        font-family: Oswald, sans-serif;
        font-size: 1.25rem;
        font-weight: 700;
        letter-spacing: 0.1em;
    }
    .footer-blurb {
        max-width: 20rem;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.4);
    }
    .footer-socials { display: flex; flex-wrap: wrap; gap: 0.75rem; }
    .footer-social {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 999px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: rgba(255, 255, 255, 0.6);
        text-decoration: none;
        transition: transform 0.2s ease, color 0.2s ease;
    }
    .footer-social:hover { transform: translateY(-2px) scale(1.15); color: #fff; }
    .footer-heading {
        margin-bottom: 0.5rem;
        font-family: Oswald, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-link {
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.6);
        text-decoration: none;
    }
    .footer-link:hover { color: #34d399; }
    .footer-cta-title {
        margin: 0;
        font-family: Oswald, sans-serif;
        font-size: clamp(1.8rem, 3vw, 3rem);
        font-weight: 700;
        line-height: 1;
        text-transform: uppercase;
    }
    .footer-button {
        display: flex;
        justify-content: center;
        padding: 0.875rem 1.75rem;
        border-radius: 999px;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        text-decoration: none;
        color: rgba(255, 255, 255, 0.6);
        border: 1px solid rgba(255, 255, 255, 0.2);
    }
    .footer-button.primary {
        color: #fff;
        font-weight: 600;
        border: none;
        background: linear-gradient(135deg, #2563eb 0%, #0ea5e9 100%);
    }
    .footer-bottom {
        position: relative;
        height: clamp(100px, 20vw, 260px);
        overflow: hidden;
        user-select: none;
    }
    .footer-wordmark {
        position: absolute;
        left: 0;
        right: 0;
        bottom: -0.08em;
        margin: 0;
        text-align: center;
        line-height: 1;
        white-space: nowrap;
        font-family: Oswald, sans-serif;
        font-size: clamp(5rem, 18vw, 22rem);
        font-weight: 700;
        letter-spacing: -0.03em;
        color: rgba(255, 255, 255, 0.07);
    }
    .footer-copyright {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 1rem;
        z-index: 1;
        display: flex;
        justify-content: space-between;
        padding: 0 4rem;
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.2);
    }
    @media (max-width: 768px) {
        .footer-grid { grid-template-columns: 1fr; padding: 5rem 2rem 4rem; }
        .footer-copyright { padding: 0 2rem; }
    }
"#;

fn social_href(icon: SocialIcon) -> String {
    match icon {
        SocialIcon::Discord => config::get_discord_url().to_string(),
        SocialIcon::Email => config::mailto(config::get_contact_email()),
        _ => "#".to_string(),
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="footer" class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-grid">
                <div class="footer-col">
                    <div class="footer-brand">
                        <div class="footer-brand-icon"><i class="fas fa-leaf"></i></div>
                        <span class="footer-brand-name">{"HACKTROPICA"}</span>
                    </div>
                    <p class="footer-blurb">
                        {"A premium nature-themed hackathon. Enter the tropics of innovation."}
                    </p>
                    <div class="footer-socials">
                        { for FOOTER_SOCIALS.iter().map(|(icon, label)| html! {
                            <a key={*label} class="footer-social" href={social_href(*icon)} aria-label={*label}>
                                <i class={icon.class()}></i>
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer-col">
                    <p class="footer-heading">{"Quick Links"}</p>
                    { for QUICK_LINKS.iter().map(|link| html! {
                        <a key={link.label} class="footer-link" href={link.href}>{link.label}</a>
                    }) }
                </div>

                <Reveal class={classes!("footer-col")} offset={20.0}>
                    <p class="footer-heading">{"Ready to enter?"}</p>
                    <h3 class="footer-cta-title">{"Register Now."}</h3>
                    <a class="footer-button primary" href={config::get_registration_url()}
                        target="_blank" rel="noopener noreferrer">{"Apply on Devfolio"}</a>
                    <a class="footer-button" href="#">{"View Brochure (PDF)"}</a>
                    <a class="footer-button" href="#">{"View Brochure (Notion)"}</a>
                </Reveal>
            </div>

            <div class="footer-bottom">
                <Reveal offset={40.0}>
                    <p class="footer-wordmark">{"HACKTROPICA"}</p>
                </Reveal>
                <div class="footer-copyright">
                    <p>{"© 2025 Hacktropica. All rights reserved."}</p>
                    <p>{"Built with ♥ in the tropics"}</p>
                </div>
            </div>
        </footer>
    }
}
