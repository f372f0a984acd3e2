//! Browser-independent interaction state used by the landing sections.
//!
//! Nothing in here touches the DOM except the `web_sys` adapters at the
//! edges (`BrowserFrames`, the `HtmlElement` scroll lock), so the state
//! machines are exercised directly by unit tests.

pub mod drag;
pub mod frame;
pub mod matte;
pub mod progress;
pub mod scroll_lock;
pub mod toggle;
pub mod viewport;

pub use drag::DragScroll;
pub use frame::{BrowserFrames, RepeatingFrameTask};
pub use progress::ScrollRegion;
pub use scroll_lock::BodyScrollLock;
