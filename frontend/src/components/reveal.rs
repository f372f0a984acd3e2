use yew::prelude::*;

use crate::hooks::use_in_view;

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(var(--reveal-offset, 40px)) rotate(var(--reveal-tilt, 0deg));
        transition: opacity 0.55s cubic-bezier(0.22, 1, 0.36, 1),
                    transform 0.55s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: String,
    /// Seconds before the entrance starts once visible.
    #[prop_or_default]
    pub delay: f64,
    /// Starting vertical offset in pixels.
    #[prop_or(40.0)]
    pub offset: f64,
    /// Starting tilt in degrees.
    #[prop_or_default]
    pub tilt: f64,
    /// How far inside the viewport the element must be before it counts.
    #[prop_or(60.0)]
    pub margin: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades and lifts its children in, once, when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.margin);
    let style = format!(
        "--reveal-offset: {}px; --reveal-tilt: {}deg; transition-delay: {:.2}s; {}",
        props.offset, props.tilt, props.delay, props.style
    );
    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("visible"), props.class.clone())}
            style={style}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
