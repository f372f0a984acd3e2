use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{sponsor_stagger_index, LogoSize, Sponsor, SponsorTier, SPONSOR_TIERS};
use crate::interaction::viewport::stagger_delay;

const SPONSORS_CSS: &str = r#"
    .sponsors { padding: 6rem 3rem; background: #fff; }
    .sponsors-head {
        margin-bottom: 4rem;
        display: flex;
        flex-wrap: wrap;
        align-items: flex-end;
        justify-content: space-between;
        gap: 1.5rem;
    }
    .sponsors-eyebrow {
        margin-bottom: 0.75rem;
        font-family: Oswald, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.35em;
        text-transform: uppercase;
        color: #9ca3af;
    }
    .sponsors-title {
        margin: 0;
        font-family: Oswald, sans-serif;
        font-size: clamp(2.5rem, 7vw, 8rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        line-height: 0.9;
        text-transform: uppercase;
        color: #111;
    }
    .sponsors-cta {
        display: inline-flex;
        padding: 0.75rem 1.5rem;
        border-radius: 999px;
        border: 2px solid #10b981;
        color: #059669;
        font-family: Oswald, sans-serif;
        font-weight: 600;
        font-size: 0.875rem;
        text-decoration: none;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .sponsors-cta:hover { background: #10b981; color: #fff; }
    .sponsor-tiers { display: flex; flex-direction: column; gap: 3.5rem; }
    .tier-label {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1.75rem;
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: #9ca3af;
    }
    .tier-dot { width: 0.75rem; height: 0.75rem; border-radius: 999px; }
    .tier-rule { flex: 1; height: 1px; margin-left: 0.5rem; background: #f3f4f6; }
    .tier-logos { display: flex; flex-wrap: wrap; gap: 1.25rem; }
    .sponsor-logo {
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 1rem;
        border: 1px solid #e5e7eb;
        background: #fff;
        filter: grayscale(100%);
        cursor: pointer;
        font-family: Oswald, sans-serif;
        font-weight: 700;
        letter-spacing: 0.05em;
        color: #333;
        transition: transform 0.3s ease, filter 0.3s ease;
    }
    .sponsor-logo:hover { transform: scale(1.04); filter: none; }
    .sponsor-logo.logo-lg { height: 6rem; width: 13rem; font-size: 1.8rem; }
    .sponsor-logo.logo-md { height: 5rem; width: 11rem; font-size: 1.4rem; }
    .sponsor-logo.logo-sm { height: 4rem; width: 9rem; font-size: 1.1rem; }
    .sponsors-note {
        margin-top: 4rem;
        text-align: center;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        color: #9ca3af;
    }
    .sponsors-note a { color: #059669; }
    @media (max-width: 640px) {
        .sponsors { padding: 6rem 1.5rem; }
        .tier-logos { justify-content: center; }
    }
"#;

fn sponsor_logo(tier_index: usize, sponsor_index: usize, sponsor: &Sponsor) -> Html {
    let size = LogoSize::for_tier(tier_index);
    let slot = sponsor_stagger_index(tier_index, sponsor_index);
    html! {
        <Reveal
            key={sponsor.name}
            class={classes!("sponsor-logo", size.class())}
            offset={20.0}
            margin={40.0}
            delay={stagger_delay(slot, 0.06, 0.0)}
        >
            <span title={sponsor.name}>{sponsor.abbr}</span>
        </Reveal>
    }
}

fn sponsor_tier(tier_index: usize, tier: &SponsorTier) -> Html {
    html! {
        <div key={tier.tier}>
            <Reveal class={classes!("tier-label")} offset={0.0}>
                <span class="tier-dot" style={format!("background: {};", tier.color)}></span>
                <span>{tier.tier}</span>
                <div class="tier-rule"></div>
            </Reveal>
            <div class="tier-logos">
                { for tier.sponsors.iter().enumerate().map(|(si, s)| sponsor_logo(tier_index, si, s)) }
            </div>
        </div>
    }
}

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
    let sponsor_mail = config::mailto(config::get_sponsor_email());

    html! {
        <section id="sponsors" class="sponsors">
            <style>{SPONSORS_CSS}</style>
            <div class="sponsors-head">
                <Reveal offset={20.0}>
                    <p class="sponsors-eyebrow">{"Sponsors"}</p>
                    <h2 class="sponsors-title">{"Our"}<br/>{"Partners"}</h2>
                </Reveal>
                <Reveal offset={0.0} delay={0.3}>
                    <a class="sponsors-cta" href={sponsor_mail.clone()}>{"Become a Sponsor →"}</a>
                </Reveal>
            </div>

            <div class="sponsor-tiers">
                { for SPONSOR_TIERS.iter().enumerate().map(|(ti, tier)| sponsor_tier(ti, tier)) }
            </div>

            <Reveal offset={0.0} delay={0.4}>
                <p class="sponsors-note">
                    {"Interested in sponsoring Hacktropica 2.0? "}
                    <a href={sponsor_mail}>{"Reach out to us"}</a>
                </p>
            </Reveal>
        </section>
    }
}
