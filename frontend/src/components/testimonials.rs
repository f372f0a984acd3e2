use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{carousel_cards, Testimonial, TESTIMONIALS};
use crate::hooks::{step_track, use_drag_scroll};
use crate::interaction::viewport::stagger_delay;

const TESTIMONIALS_CSS: &str = r#"
    .testimonials {
        padding: 6rem 0;
        overflow: hidden;
        background: #f5f0e8;
    }
    .testimonials-head { padding: 0 3rem; margin-bottom: 3.5rem; }
    .testimonials-eyebrow {
        margin-bottom: 0.75rem;
        font-family: Oswald, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.35em;
        text-transform: uppercase;
        color: #888;
    }
    .testimonials-title {
        margin: 0;
        font-family: Oswald, sans-serif;
        font-size: clamp(2.5rem, 7vw, 8rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        line-height: 0.9;
        text-transform: uppercase;
        color: #111;
    }
    .testimonials-arrows { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
    .testimonials-arrow {
        width: 2.75rem;
        height: 2.75rem;
        border-radius: 999px;
        border: 1px solid rgba(0, 0, 0, 0.2);
        background: transparent;
        cursor: pointer;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .testimonials-arrow:hover { background: #000; color: #fff; }
    .testimonials-track {
        display: flex;
        gap: 1.25rem;
        padding: 0 3rem 1rem;
        overflow-x: auto;
        scrollbar-width: none;
        user-select: none;
        cursor: grab;
    }
    .testimonials-track::-webkit-scrollbar { display: none; }
    .testimonials-track.dragging { cursor: grabbing; }
    .testimonial-card {
        flex-shrink: 0;
        width: 24rem;
        border-radius: 1.5rem;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        color: #1a1a1a;
        transition: transform 0.25s ease;
    }
    .testimonial-card:hover { transform: translateY(-8px) scale(1.015); }
    .testimonial-card .fa-quote-left { font-size: 1.75rem; opacity: 0.4; }
    .testimonial-quote {
        flex: 1;
        margin: 0;
        font-family: Inter, sans-serif;
        font-size: 0.95rem;
        line-height: 1.7;
    }
    .testimonial-footer { display: flex; align-items: center; justify-content: space-between; }
    .testimonial-name { font-family: Oswald, sans-serif; font-weight: 600; }
    .testimonial-title { margin-top: 0.125rem; font-size: 0.75rem; opacity: 0.6; }
    .testimonial-link {
        width: 2.25rem;
        height: 2.25rem;
        border-radius: 999px;
        display: flex;
        align-items: center;
        justify-content: center;
        color: inherit;
        background: rgba(0, 0, 0, 0.07);
    }
    .testimonials-hint {
        margin-top: 1.5rem;
        text-align: center;
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #aaa;
    }
    @media (max-width: 640px) {
        .testimonials-head { padding: 0 1.5rem; }
        .testimonials-track { padding: 0 1.5rem 1rem; }
        .testimonial-card { width: 20rem; }
    }
"#;

fn testimonial_card(index: usize, testimonial: &Testimonial) -> Html {
    // alternate cards start tilted the opposite way
    let tilt = if index % 2 == 0 { -1.0 } else { 1.0 };
    let key = if index < TESTIMONIALS.len() {
        format!("t-{}", testimonial.id)
    } else {
        format!("clone-{}", testimonial.id)
    };
    html! {
        <Reveal
            key={key}
            class={classes!("testimonial-card")}
            style={format!("background: {}; border: 1.5px solid {};", testimonial.background, testimonial.border)}
            delay={stagger_delay(index, 0.07, 0.0)}
            tilt={tilt}
        >
            <i class="fas fa-quote-left"></i>
            <p class="testimonial-quote">{format!("“{}”", testimonial.quote)}</p>
            <div class="testimonial-footer">
                <div>
                    <div class="testimonial-name">{testimonial.name}</div>
                    <div class="testimonial-title">{testimonial.title}</div>
                </div>
                <a class="testimonial-link" href="#" aria-label="LinkedIn">
                    <i class="fab fa-linkedin-in"></i>
                </a>
            </div>
        </Reveal>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let track = use_node_ref();
    let drag = use_drag_scroll(track.clone(), config::TESTIMONIALS_DRAG_GAIN);

    let arrow = |direction: i8| {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            step_track(&track, direction, config::TESTIMONIALS_ARROW_STEP)
        })
    };

    html! {
        <section id="testimonials" class="testimonials">
            <style>{TESTIMONIALS_CSS}</style>
            <div class="testimonials-head">
                <Reveal offset={20.0}>
                    <p class="testimonials-eyebrow">{"Testimonials"}</p>
                    <h2 class="testimonials-title">{"People's"}<br/>{"Remarks"}</h2>
                </Reveal>
                <Reveal class={classes!("testimonials-arrows")} offset={0.0} delay={0.3}>
                    <button class="testimonials-arrow" onclick={arrow(-1)} aria-label="Previous">
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <button class="testimonials-arrow" onclick={arrow(1)} aria-label="Next">
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </Reveal>
            </div>

            <div
                ref={track.clone()}
                class={classes!("testimonials-track", drag.dragging.then_some("dragging"))}
                onmousedown={drag.onmousedown}
                onmousemove={drag.onmousemove}
                onmouseup={drag.onmouseup}
                onmouseleave={drag.onmouseleave}
            >
                { for carousel_cards().map(|(i, t)| testimonial_card(i, t)) }
            </div>

            <Reveal offset={0.0} delay={0.5}>
                <p class="testimonials-hint">{"← drag to explore →"}</p>
            </Reveal>
        </section>
    }
}
