use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{faq_counter, Faq, FAQS};
use crate::hooks::use_drag_scroll;
use crate::interaction::toggle::{ClickOrigin, ExpandableSet, Propagation};
use crate::interaction::viewport::stagger_delay;

const FAQ_CSS: &str = r#"
    .faq-section { padding: 6rem 0; overflow: hidden; background: #f5f0e8; }
    .faq-head { padding: 0 3rem; margin-bottom: 3.5rem; }
    .faq-eyebrow {
        margin-bottom: 0.75rem;
        font-family: Oswald, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.35em;
        text-transform: uppercase;
        color: #888;
    }
    .faq-title {
        margin: 0;
        font-family: Oswald, sans-serif;
        font-size: clamp(2.5rem, 7vw, 8rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        line-height: 0.9;
        text-transform: uppercase;
        color: #111;
    }
    .faq-track {
        display: flex;
        align-items: flex-start;
        gap: 1.25rem;
        padding: 0 3rem 1rem;
        overflow-x: auto;
        scrollbar-width: none;
        user-select: none;
        cursor: grab;
    }
    .faq-track::-webkit-scrollbar { display: none; }
    .faq-track.dragging { cursor: grabbing; }
    .faq-card {
        position: relative;
        flex-shrink: 0;
        width: 340px;
        min-width: 280px;
        border-radius: 1.5rem;
        overflow: hidden;
        cursor: pointer;
    }
    .faq-card-body {
        min-height: 420px;
        padding: 2rem;
        display: flex;
        flex-direction: column;
    }
    .faq-counter {
        margin-bottom: 1rem;
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        opacity: 0.5;
    }
    .faq-question {
        flex: 1;
        margin: 0;
        font-family: Oswald, sans-serif;
        font-size: clamp(1.5rem, 3vw, 2.2rem);
        font-weight: 700;
        letter-spacing: -0.01em;
        line-height: 1.1;
        text-transform: uppercase;
    }
    .faq-answer {
        display: grid;
        grid-template-rows: 0fr;
        opacity: 0;
        transition: grid-template-rows 0.35s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.35s ease;
    }
    .faq-answer > div { overflow: hidden; }
    .faq-card.open .faq-answer { grid-template-rows: 1fr; opacity: 1; }
    .faq-answer p {
        margin: 1.25rem 0 0;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        line-height: 1.6;
        opacity: 0.9;
    }
    .faq-toggle {
        margin-top: 1.5rem;
        align-self: flex-start;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.625rem 1.25rem;
        border-radius: 999px;
        background: rgba(0, 0, 0, 0.15);
        color: inherit;
        font-family: Inter, sans-serif;
        font-size: 0.875rem;
        font-weight: 500;
        cursor: pointer;
        transition: gap 0.2s ease;
    }
    .faq-toggle:hover { gap: 0.75rem; }
    .faq-hint {
        margin-top: 1.5rem;
        text-align: center;
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #aaa;
    }
    @media (max-width: 640px) {
        .faq-head { padding: 0 1.5rem; }
        .faq-track { padding: 0 1.5rem 1rem; }
    }
"#;

#[derive(Properties, PartialEq)]
struct FaqCardProps {
    index: usize,
    faq: Faq,
    open: bool,
    on_card: Callback<usize>,
    on_control: Callback<(usize, MouseEvent)>,
}

#[function_component(FaqCard)]
fn faq_card(props: &FaqCardProps) -> Html {
    let index = props.index;
    let faq = &props.faq;

    let card_click = {
        let on_card = props.on_card.clone();
        Callback::from(move |_: MouseEvent| on_card.emit(index))
    };
    let control_click = {
        let on_control = props.on_control.clone();
        Callback::from(move |e: MouseEvent| on_control.emit((index, e)))
    };

    html! {
        <Reveal
            class={classes!("faq-card", props.open.then_some("open"))}
            style={format!("background: {}; color: {};", faq.color, faq.text_color)}
            offset={50.0}
            tilt={if index % 2 == 0 { -1.0 } else { 1.0 }}
            delay={stagger_delay(index, 0.08, 0.0)}
            onclick={card_click}
        >
            <div class="faq-card-body">
                <span class="faq-counter">{faq_counter(index, FAQS.len())}</span>
                <h3 class="faq-question">{faq.question}</h3>
                <div class="faq-answer" aria-hidden={(!props.open).to_string()}>
                    <div><p>{faq.answer}</p></div>
                </div>
                <button class="faq-toggle" onclick={control_click}
                    aria-expanded={props.open.to_string()}
                    style={format!("border: 1px solid {}30;", faq.text_color)}>
                    if props.open {
                        <><i class="fas fa-minus"></i>{"Close answer"}</>
                    } else {
                        <><i class="fas fa-plus"></i>{"Get your answer"}</>
                    }
                </button>
            </div>
        </Reveal>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let expanded = use_state(|| ExpandableSet::new(FAQS.len()));
    let track = use_node_ref();
    let drag = use_drag_scroll(track.clone(), config::FAQ_DRAG_GAIN);

    let on_card = {
        let expanded = expanded.clone();
        Callback::from(move |index: usize| {
            let mut next = (*expanded).clone();
            next.dispatch_click(index, ClickOrigin::Card);
            expanded.set(next);
        })
    };

    // The control sits inside the card; it must not also trigger the card handler.
    let on_control = {
        let expanded = expanded.clone();
        Callback::from(move |(index, e): (usize, MouseEvent)| {
            let mut next = (*expanded).clone();
            if next.on_control_click(index) == Propagation::Stop {
                e.stop_propagation();
            }
            expanded.set(next);
        })
    };

    html! {
        <section id="faqs" class="faq-section">
            <style>{FAQ_CSS}</style>
            <div class="faq-head">
                <Reveal offset={20.0}>
                    <p class="faq-eyebrow">{"FAQs"}</p>
                    <h2 class="faq-title">{"Your Questions,"}<br/>{"Answered"}</h2>
                </Reveal>
            </div>

            <div
                ref={track}
                class={classes!("faq-track", drag.dragging.then_some("dragging"))}
                onmousedown={drag.onmousedown}
                onmousemove={drag.onmousemove}
                onmouseup={drag.onmouseup}
                onmouseleave={drag.onmouseleave}
            >
                { for FAQS.iter().enumerate().map(|(i, faq)| html! {
                    <FaqCard
                        key={faq.id}
                        index={i}
                        faq={*faq}
                        open={expanded.is_open(i)}
                        on_card={on_card.clone()}
                        on_control={on_control.clone()}
                    />
                }) }
            </div>

            <Reveal offset={0.0} delay={0.4}>
                <p class="faq-hint">{"← drag to explore · click card to expand →"}</p>
            </Reveal>
        </section>
    }
}
