use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_entered;
use crate::interaction::matte::{cover_rect, fit_font_px};
use crate::interaction::{BrowserFrames, RepeatingFrameTask};

const WORDMARK: &str = "HACKTROPICA";
const MEASURE_BASE_PX: f64 = 100.0;
// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        width: 100%;
        height: 100svh;
        min-height: 640px;
        overflow: hidden;
        background: #f8f5f0;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        z-index: 0;
    }
    .hero-mask {
        position: absolute;
        inset: 0;
        z-index: 1;
        isolation: isolate;
    }
    .hero-fill {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, #f8f5f0 0%, #f8f5f0 55%, rgba(248, 245, 240, 0) 100%);
    }
    .hero-wordmark-row {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: flex-start;
        justify-content: center;
        padding: clamp(60px, 10vh, 110px) 0.25rem 0;
    }
    .hero-wordmark {
        width: 100%;
        margin: 0;
        text-align: center;
        font-family: Oswald, sans-serif;
        font-weight: 700;
        font-size: clamp(4.5rem, 17vw, 22rem);
        line-height: 0.88;
        letter-spacing: -0.03em;
        color: white;
        mix-blend-mode: destination-out;
        user-select: none;
        pointer-events: none;
    }
    .hero-matte {
        position: absolute;
        z-index: 2;
        top: clamp(60px, 10vh, 110px);
        left: 0.25rem;
        right: 0.25rem;
        width: calc(100% - 0.5rem);
        height: clamp(4.5rem, 17vw, 22rem);
        pointer-events: none;
        visibility: hidden;
    }
    .hero-matte.ready { visibility: visible; }
    .hero-enter {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .hero.entered .hero-enter { opacity: 1; transform: none; }
    .hero-badge {
        position: absolute;
        z-index: 10;
        top: clamp(60px, 10vh, 110px);
        right: clamp(0.5rem, 3vw, 2.5rem);
        font-family: Oswald, sans-serif;
        font-weight: 700;
        font-size: clamp(1rem, 2.5vw, 2rem);
        color: #111;
    }
    .hero-corners {
        position: absolute;
        z-index: 10;
        left: 0;
        right: 0;
        bottom: clamp(90px, 16vh, 160px);
        display: flex;
        justify-content: space-between;
        padding: 0 2.5rem;
        pointer-events: none;
        font-family: Inter, sans-serif;
        font-size: 10px;
        letter-spacing: 0.45em;
        text-transform: uppercase;
        color: rgba(0, 0, 0, 0.4);
    }
    .hero-ctas {
        position: absolute;
        z-index: 10;
        left: 0;
        right: 0;
        bottom: 0;
        padding-bottom: clamp(1.5rem, 4vh, 2.5rem);
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }
    .hero-cta {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem 2rem;
        border-radius: 999px;
        color: #fff;
        font-family: Inter, sans-serif;
        font-weight: 600;
        font-size: 0.875rem;
        letter-spacing: 0.025em;
        text-decoration: none;
        transition: transform 0.2s ease;
    }
    .hero-cta:hover { transform: scale(1.05); }
    .hero-cta.primary {
        background: linear-gradient(135deg, #1d4ed8 0%, #0ea5e9 100%);
        box-shadow: 0 0 32px rgba(29, 78, 216, 0.45);
    }
    .hero-cta.secondary {
        background: rgba(255, 255, 255, 0.18);
        border: 1.5px solid rgba(255, 255, 255, 0.45);
        backdrop-filter: blur(12px);
    }
    .hero-scroll-cue {
        position: absolute;
        z-index: 20;
        left: 50%;
        bottom: 1.5rem;
        transform: translateX(-50%);
        pointer-events: none;
        opacity: 0;
        transition: opacity 0.6s ease 1.4s;
    }
    .hero.entered .hero-scroll-cue { opacity: 1; }
    .hero-scroll-cue span {
        display: block;
        width: 1px;
        height: 2rem;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.4), transparent);
        animation: hero-cue-bob 1.5s ease-in-out infinite;
    }
    @keyframes hero-cue-bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(7px); }
    }
"#;

/// Draws the current video frame into a canvas, then keeps only the pixels
/// under the wordmark glyphs.
struct TextMatte {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    video: HtmlVideoElement,
}

impl TextMatte {
    fn new(canvas: &NodeRef, video: &NodeRef) -> Option<Self> {
        let canvas = canvas.cast::<HtmlCanvasElement>()?;
        let video = video.cast::<HtmlVideoElement>()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context, video })
    }

    fn sync_size(&self) -> (f64, f64) {
        let width = self.canvas.client_width().max(1) as u32;
        let height = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        (f64::from(width), f64::from(height))
    }

    fn draw(&self) {
        // nothing decoded yet (or the asset is missing): leave the frame blank
        if self.video.ready_state() < HAVE_CURRENT_DATA {
            return;
        }
        let (width, height) = self.sync_size();
        let ctx = &self.context;

        let _ = ctx.set_global_composite_operation("source-over");
        ctx.clear_rect(0.0, 0.0, width, height);
        let (dx, dy, dw, dh) = cover_rect(
            f64::from(self.video.video_width()),
            f64::from(self.video.video_height()),
            width,
            height,
        );
        if ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, dx, dy, dw, dh)
            .is_err()
        {
            return;
        }

        ctx.set_font(&format!("700 {}px Oswald, sans-serif", MEASURE_BASE_PX));
        let measured = ctx.measure_text(WORDMARK).map(|m| m.width()).unwrap_or(0.0);
        let font_px = fit_font_px(measured, MEASURE_BASE_PX, width, height);
        ctx.set_font(&format!("700 {:.1}px Oswald, sans-serif", font_px));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        let _ = ctx.set_global_composite_operation("destination-in");
        let _ = ctx.fill_text(WORDMARK, width / 2.0, height / 2.0);
        let _ = ctx.set_global_composite_operation("source-over");
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let video_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let matte_ready = use_state_eq(|| false);
    let entered = use_entered();

    // Video-in-text sampling, bound to this component's lifetime
    {
        let video_ref = video_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let matte_ready = matte_ready.clone();
        use_effect_with_deps(
            move |_| {
                let task = match TextMatte::new(&canvas_ref, &video_ref) {
                    Some(matte) => {
                        matte_ready.set(true);
                        Some(RepeatingFrameTask::start(
                            BrowserFrames,
                            config::HERO_FRAME_STRIDE,
                            move |_| matte.draw(),
                        ))
                    }
                    None => {
                        gloo_console::log!("Canvas 2d context unavailable, falling back to blend-mode wordmark");
                        None
                    }
                };
                move || {
                    if let Some(task) = task {
                        task.cancel();
                        gloo_console::log!("Hero frame task cancelled");
                    }
                }
            },
            (),
        );
    }

    html! {
        <section id="hero" class={classes!("hero", entered.then_some("entered"))}>
            <style>{HERO_CSS}</style>
            <video ref={video_ref} class="hero-video" src={config::HERO_VIDEO} poster={config::PLACEHOLDER_IMAGE}
                autoplay=true muted=true loop=true playsinline=true></video>

            <div class="hero-mask">
                <div class="hero-fill"></div>
                if !*matte_ready {
                    <div class="hero-wordmark-row">
                        <h1 class="hero-wordmark hero-enter">{WORDMARK}</h1>
                    </div>
                }
            </div>
            <canvas ref={canvas_ref} class={classes!("hero-matte", "hero-enter", matte_ready.then_some("ready"))}
                role="img" aria-label={WORDMARK}></canvas>

            <div class="hero-badge hero-enter" style="transition-delay: 0.8s;">{"2.0"}</div>

            <div class="hero-corners">
                <p class="hero-enter" style="transition-delay: 0.7s;">{"Welcome To"}</p>
                <p class="hero-enter" style="transition-delay: 0.75s;">{"The Tropics"}</p>
            </div>

            <div class="hero-ctas hero-enter" style="transition-delay: 0.9s;">
                <a class="hero-cta primary" href={config::get_registration_url()} target="_blank" rel="noopener noreferrer">
                    <i class="fas fa-d"></i>
                    {"REGISTER ON DEVFOLIO"}
                </a>
                <a class="hero-cta secondary" href={config::get_discord_url()} target="_blank" rel="noopener noreferrer">
                    <i class="fab fa-discord"></i>
                    {"JOIN OUR DISCORD"}
                </a>
            </div>

            <div class="hero-scroll-cue" aria-hidden="true">
                <span></span>
            </div>
        </section>
    }
}
