// Outbound links can be overridden at build time, e.g.
// `REGISTRATION_URL=https://... trunk build --release`.

pub fn get_registration_url() -> &'static str {
    option_env!("REGISTRATION_URL").unwrap_or("https://hacktropica.devfolio.co")
}

pub fn get_discord_url() -> &'static str {
    option_env!("DISCORD_URL").unwrap_or("https://discord.gg/hacktropica")
}

pub fn get_contact_email() -> &'static str {
    option_env!("CONTACT_EMAIL").unwrap_or("hello@hacktropica.dev")
}

pub fn get_sponsor_email() -> &'static str {
    option_env!("SPONSOR_EMAIL").unwrap_or("sponsor@hacktropica.dev")
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

pub const HERO_VIDEO: &str = "/main.mp4";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

pub const TESTIMONIALS_DRAG_GAIN: f64 = 1.5;
pub const FAQ_DRAG_GAIN: f64 = 1.3;
pub const TESTIMONIALS_ARROW_STEP: f64 = 420.0;

/// Sample the hero video on one display frame out of this many.
pub const HERO_FRAME_STRIDE: u32 = 3;

/// Height of the pinned intro region, in viewport heights.
pub const INTRO_REGION_VIEWPORTS: u32 = 4;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("a@b.c"), "mailto:a@b.c");
        assert!(get_sponsor_email().contains('@'));
    }

    #[test]
    fn test_drag_gains_speed_up_native_scroll() {
        assert!(TESTIMONIALS_DRAG_GAIN > 1.0);
        assert!(FAQ_DRAG_GAIN > 1.0);
    }
}
