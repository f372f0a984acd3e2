use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::interaction::drag::step_offset;
use crate::interaction::viewport::{self, EntranceLatch};
use crate::interaction::{DragScroll, ScrollRegion};

fn viewport_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn measure_progress(target: &NodeRef) -> Option<f64> {
    let element = target.cast::<Element>()?;
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let rect = element.get_bounding_client_rect();
    let region = ScrollRegion::from_rect(scroll_y, rect.top(), rect.height(), viewport_height(&window));
    Some(region.progress_at(scroll_y))
}

fn element_in_view(target: &NodeRef, margin: f64) -> bool {
    match (target.cast::<Element>(), web_sys::window()) {
        (Some(element), Some(window)) => {
            let rect = element.get_bounding_client_rect();
            viewport::in_view(rect.top(), rect.bottom(), viewport_height(&window), margin)
        }
        _ => false,
    }
}

/// Progress through a pinned region, recomputed on every scroll and resize.
/// Listeners live exactly as long as the component.
#[hook]
pub fn use_scroll_progress(target: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |target: &NodeRef| {
                let target = target.clone();
                let update = move || {
                    if let Some(p) = measure_progress(&target) {
                        progress.set(p);
                    }
                };
                update();
                let listeners = web_sys::window().map(|window| {
                    let on_scroll = update.clone();
                    let on_resize = update;
                    (
                        EventListener::new(&window, "scroll", move |_| on_scroll()),
                        EventListener::new(&window, "resize", move |_| on_resize()),
                    )
                });
                move || drop(listeners)
            },
            target,
        );
    }
    *progress
}

/// Latches to true the first time the element scrolls into view. The scroll
/// listener is released as soon as that happens.
#[hook]
pub fn use_in_view(target: NodeRef, margin: f64) -> bool {
    let seen = use_state_eq(|| false);
    let already_seen = *seen;
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |(target, already_seen): &(NodeRef, bool)| {
                let mut latch = EntranceLatch::new(*already_seen);
                let listener = if latch.is_seen() {
                    None
                } else {
                    let target = target.clone();
                    let mut check = move || {
                        if latch.observe(element_in_view(&target, margin)) {
                            seen.set(true);
                        }
                    };
                    check();
                    web_sys::window()
                        .map(|window| EventListener::new(&window, "scroll", move |_| check()))
                };
                move || drop(listener)
            },
            (target, already_seen),
        );
    }
    *seen
}

/// Whether the page has scrolled past `threshold` pixels.
#[hook]
pub fn use_window_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(viewport::is_scrolled(scroll_y, threshold));
                    }
                };
                update();
                let listener = web_sys::window()
                    .map(|window| EventListener::new(&window, "scroll", move |_| update()));
                move || drop(listener)
            },
            (),
        );
    }
    *scrolled
}

/// Flips to true one tick after mount so CSS entrance transitions have a
/// starting state to animate from.
#[hook]
pub fn use_entered() -> bool {
    let entered = use_state_eq(|| false);
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(30, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *entered
}

pub struct DragHandlers {
    pub onmousedown: Callback<MouseEvent>,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub dragging: bool,
}

fn pointer_x(event: &MouseEvent, track: &HtmlElement) -> f64 {
    f64::from(event.page_x() - track.offset_left())
}

/// Mouse handlers that turn a horizontal track into a drag-to-scroll surface.
/// Touch and wheel scrolling stay native.
#[hook]
pub fn use_drag_scroll(track: NodeRef, gain: f64) -> DragHandlers {
    let drag = use_mut_ref(|| DragScroll::new(gain));
    let dragging = use_state_eq(|| false);

    let onmousedown = {
        let drag = drag.clone();
        let track = track.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = track.cast::<HtmlElement>() {
                let x = pointer_x(&e, &element);
                drag.borrow_mut().pointer_down(x, f64::from(element.scroll_left()));
                dragging.set(true);
            }
        })
    };

    let onmousemove = {
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = track.cast::<HtmlElement>() {
                let x = pointer_x(&e, &element);
                if let Some(offset) = drag.borrow().pointer_move(x) {
                    e.prevent_default();
                    element.set_scroll_left(offset.round() as i32);
                }
            }
        })
    };

    let onmouseup = {
        let drag = drag.clone();
        let dragging = dragging.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().pointer_up();
            dragging.set(false);
        })
    };

    let onmouseleave = {
        let dragging = dragging.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().pointer_leave();
            dragging.set(false);
        })
    };

    DragHandlers {
        onmousedown,
        onmousemove,
        onmouseup,
        onmouseleave,
        dragging: *dragging,
    }
}

/// Smooth-scroll a track one arrow step left (`-1`) or right (`1`).
pub fn step_track(track: &NodeRef, direction: i8, step: f64) {
    if let Some(element) = track.cast::<Element>() {
        let options = ScrollToOptions::new();
        options.set_left(step_offset(f64::from(element.scroll_left()), direction, step));
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_to_with_scroll_to_options(&options);
    }
}
