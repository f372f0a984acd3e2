//! Static copy for the landing page sections.

pub const INTRO_WORDS: [&str; 20] = [
    "More", "than", "a", "Hackathon,", "it", "is", "a", "safe", "retreat,", "away", "from",
    "the", "chaos", "of", "the", "world—", "a", "place", "for", "you.",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub height: u32,
    pub color: &'static str,
}

/// Grid rows are this many pixels tall; items span enough rows for their height.
pub const GALLERY_ROW_PX: u32 = 10;
pub const GALLERY_GAP_PX: u32 = 8;

impl GalleryItem {
    pub fn row_span(&self) -> u32 {
        (self.height + GALLERY_GAP_PX).div_ceil(GALLERY_ROW_PX)
    }
}

pub const GALLERY_ITEMS: [GalleryItem; 12] = [
    GalleryItem { id: 1, height: 340, color: "#1a4731" },
    GalleryItem { id: 2, height: 200, color: "#0d5c36" },
    GalleryItem { id: 3, height: 260, color: "#16604a" },
    GalleryItem { id: 4, height: 180, color: "#1e5a2b" },
    GalleryItem { id: 5, height: 310, color: "#145740" },
    GalleryItem { id: 6, height: 220, color: "#1b4332" },
    GalleryItem { id: 7, height: 280, color: "#0f4c2e" },
    GalleryItem { id: 8, height: 190, color: "#195c3e" },
    GalleryItem { id: 9, height: 360, color: "#1e6b44" },
    GalleryItem { id: 10, height: 230, color: "#16553a" },
    GalleryItem { id: 11, height: 200, color: "#1a3f2c" },
    GalleryItem { id: 12, height: 270, color: "#0e4228" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        id: 1,
        quote: "Hacktropica was unlike any hackathon I had ever attended. The energy was electric, the mentors were world-class, and the vibes were pure jungle magic.",
        name: "Priya Sharma",
        title: "SWE Intern @ Google",
        background: "#fce4ec",
        border: "#f48fb1",
    },
    Testimonial {
        id: 2,
        quote: "I came in knowing barely any machine learning. I left with a working model, two new friends, and an award. Hacktropica changed my trajectory.",
        name: "Arjun Mehta",
        title: "CS Junior @ IIT Bombay",
        background: "#e8f5e9",
        border: "#a5d6a7",
    },
    Testimonial {
        id: 3,
        quote: "The theme, the production quality, the food — everything was top-tier. You could tell the organisers genuinely cared about every single hacker.",
        name: "Wei Lin",
        title: "Full-Stack Dev",
        background: "#ffffff",
        border: "#e0e0e0",
    },
    Testimonial {
        id: 4,
        quote: "As a first-time hackathon participant, I was terrified. The Hacktropica community made me feel at home from minute one.",
        name: "Sofia Ramos",
        title: "Design Student",
        background: "#fff9c4",
        border: "#fff176",
    },
    Testimonial {
        id: 5,
        quote: "The workshops were incredibly practical, not just fluff. I picked up skills I still use every day at my job.",
        name: "Kwame Asante",
        title: "Product Manager @ Stripe",
        background: "#e3f2fd",
        border: "#90caf9",
    },
    Testimonial {
        id: 6,
        quote: "Winning wasn't even the best part. The people I met, the late-night conversations, the shared exhaustion and joy — that is Hacktropica.",
        name: "Ananya Iyer",
        title: "Open-source contributor",
        background: "#f3e5f5",
        border: "#ce93d8",
    },
];

/// Leading testimonials repeated at the end of the track.
pub const TESTIMONIAL_CLONES: usize = 2;

/// Cards rendered in the carousel: every testimonial, then the clones.
pub fn carousel_cards() -> impl Iterator<Item = (usize, &'static Testimonial)> {
    TESTIMONIALS
        .iter()
        .chain(TESTIMONIALS.iter().take(TESTIMONIAL_CLONES))
        .enumerate()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoSize {
    Large,
    Medium,
    Small,
}

impl LogoSize {
    pub fn for_tier(tier_index: usize) -> Self {
        match tier_index {
            0 => LogoSize::Large,
            1 => LogoSize::Medium,
            _ => LogoSize::Small,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LogoSize::Large => "logo-lg",
            LogoSize::Medium => "logo-md",
            LogoSize::Small => "logo-sm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sponsor {
    pub name: &'static str,
    pub abbr: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SponsorTier {
    pub tier: &'static str,
    pub color: &'static str,
    pub sponsors: &'static [Sponsor],
}

/// Stagger slot for a sponsor logo across all tiers.
pub fn sponsor_stagger_index(tier_index: usize, sponsor_index: usize) -> usize {
    sponsor_index + tier_index * 3
}

pub const SPONSOR_TIERS: [SponsorTier; 4] = [
    SponsorTier {
        tier: "Title Sponsor",
        color: "#ffd700",
        sponsors: &[
            Sponsor { name: "TechCorp", abbr: "TC" },
            Sponsor { name: "Innovate Labs", abbr: "IL" },
        ],
    },
    SponsorTier {
        tier: "Gold Sponsors",
        color: "#c9a227",
        sponsors: &[
            Sponsor { name: "DevHouse", abbr: "DH" },
            Sponsor { name: "CloudBase", abbr: "CB" },
            Sponsor { name: "BuildStack", abbr: "BS" },
        ],
    },
    SponsorTier {
        tier: "Silver Sponsors",
        color: "#9e9e9e",
        sponsors: &[
            Sponsor { name: "Launchpad", abbr: "LP" },
            Sponsor { name: "Codeify", abbr: "CO" },
            Sponsor { name: "PixelForge", abbr: "PF" },
            Sponsor { name: "DataFlow", abbr: "DF" },
        ],
    },
    SponsorTier {
        tier: "Community Partners",
        color: "#4caf50",
        sponsors: &[
            Sponsor { name: "OpenSource", abbr: "OS" },
            Sponsor { name: "HackerDAO", abbr: "HD" },
            Sponsor { name: "MLH", abbr: "MLH" },
            Sponsor { name: "DevFolio", abbr: "DF" },
            Sponsor { name: "GitHub", abbr: "GH" },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
}

const FAQ_BLUE: &str = "#1d4ed8";
const FAQ_YELLOW: &str = "#eab308";
const FAQ_PINK: &str = "#ec4899";

pub const FAQS: [Faq; 6] = [
    Faq {
        id: 1,
        question: "Who can participate in Hacktropica?",
        answer: "Hacktropica is open to anyone who is a student currently enrolled at any college or university. Whether you are a first-year fresher or a PhD scholar, all skill levels are genuinely welcome. We especially encourage first-time hackers to join — our mentors will be there to guide you every step of the way.",
        color: FAQ_BLUE,
        text_color: "#ffffff",
    },
    Faq {
        id: 2,
        question: "Is there a registration fee?",
        answer: "No! Hacktropica is completely free to participate in. We believe great ideas shouldn't be gated by a paywall. Accommodation and meals during the event are also covered once you register and are accepted. All you need to do is show up and build.",
        color: FAQ_YELLOW,
        text_color: "#111111",
    },
    Faq {
        id: 3,
        question: "What should I bring to the hackathon?",
        answer: "Bring your laptop, charger, any hardware you plan to use, your student ID, and most importantly — your curiosity and enthusiasm. We'll provide power strips, high-speed internet, food, drinks, swag, and lots of fun. We also recommend bringing a sleeping bag or travel pillow if you plan to hack through the night.",
        color: FAQ_PINK,
        text_color: "#ffffff",
    },
    Faq {
        id: 4,
        question: "Can I participate solo?",
        answer: "Yes, absolutely! While most teams are 2–4 members, you are entirely welcome to compete solo. We have team-formation sessions at the start of the event where solo hackers can find collaborators if they wish to team up.",
        color: FAQ_BLUE,
        text_color: "#ffffff",
    },
    Faq {
        id: 5,
        question: "What tracks / themes are available?",
        answer: "Hacktropica 2.0 features tracks in AI/ML, Sustainability & Climate Tech, Web3 & DeFi, Health & BioTech, and Open Innovation. You're free to participate in any track or even blend multiple domains — the only rule is that your project must be built fresh during the hackathon.",
        color: FAQ_YELLOW,
        text_color: "#111111",
    },
    Faq {
        id: 6,
        question: "What prizes are on offer?",
        answer: "We have exciting prizes totalling over ₹5,00,000 including cash awards, internship opportunities, cloud credits, premium software licences, and exclusive Hacktropica swag. Specific prize details for each track will be announced closer to the event date.",
        color: FAQ_PINK,
        text_color: "#ffffff",
    },
];

/// "03 / 06" style counter shown on each card.
pub fn faq_counter(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [Link; 6] = [
    Link { label: "Home", href: "#" },
    Link { label: "Timeline", href: "#timeline" },
    Link { label: "Brochure", href: "#brochure" },
    Link { label: "Judges", href: "#judges" },
    Link { label: "Mentors", href: "#mentors" },
    Link { label: "Team", href: "#team" },
];

pub const MENU_SOCIALS: [&str; 4] = ["Discord", "Instagram", "LinkedIn", "X"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Discord,
    Instagram,
    LinkedIn,
    X,
    Email,
}

impl SocialIcon {
    pub fn class(self) -> &'static str {
        match self {
            SocialIcon::Discord => "fab fa-discord",
            SocialIcon::Instagram => "fab fa-instagram",
            SocialIcon::LinkedIn => "fab fa-linkedin-in",
            SocialIcon::X => "fab fa-x-twitter",
            SocialIcon::Email => "fas fa-envelope",
        }
    }
}

pub const FOOTER_SOCIALS: [(SocialIcon, &str); 5] = [
    (SocialIcon::Discord, "Discord"),
    (SocialIcon::Instagram, "Instagram"),
    (SocialIcon::LinkedIn, "LinkedIn"),
    (SocialIcon::X, "X / Twitter"),
    (SocialIcon::Email, "Email"),
];

pub const QUICK_LINKS: [Link; 5] = [
    Link { label: "Brand Assets", href: "#" },
    Link { label: "Code of Conduct", href: "#" },
    Link { label: "Privacy Policy", href: "#" },
    Link { label: "Judging Criteria", href: "#" },
    Link { label: "Contact Us", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gallery_row_span() {
        // 340px + 8px gap over 10px rows
        assert_eq!(GALLERY_ITEMS[0].row_span(), 35);
        assert_eq!(GALLERY_ITEMS[3].row_span(), 19);
        assert_eq!(GalleryItem { id: 0, height: 192, color: "" }.row_span(), 20);
    }

    #[test]
    fn test_carousel_appends_clones() {
        let cards: Vec<_> = carousel_cards().collect();
        assert_eq!(cards.len(), TESTIMONIALS.len() + TESTIMONIAL_CLONES);
        assert_eq!(cards[6].1.id, 1);
        assert_eq!(cards[7].1.id, 2);
        assert_eq!(cards[7].0, 7);
    }

    #[test]
    fn test_sponsor_logo_sizes() {
        assert_eq!(LogoSize::for_tier(0), LogoSize::Large);
        assert_eq!(LogoSize::for_tier(1), LogoSize::Medium);
        assert_eq!(LogoSize::for_tier(2), LogoSize::Small);
        assert_eq!(LogoSize::for_tier(3), LogoSize::Small);
        assert_eq!(sponsor_stagger_index(2, 1), 7);
    }

    #[test]
    fn test_faq_counter() {
        assert_eq!(faq_counter(0, FAQS.len()), "01 / 06");
        assert_eq!(faq_counter(5, FAQS.len()), "06 / 06");
    }

    #[test]
    fn test_content_ids_are_unique() {
        let faq_ids: HashSet<u32> = FAQS.iter().map(|f| f.id).collect();
        assert_eq!(faq_ids.len(), FAQS.len());
        let gallery_ids: HashSet<u32> = GALLERY_ITEMS.iter().map(|g| g.id).collect();
        assert_eq!(gallery_ids.len(), GALLERY_ITEMS.len());
        let testimonial_ids: HashSet<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(testimonial_ids.len(), TESTIMONIALS.len());
        assert_eq!(INTRO_WORDS.len(), 20);
    }
}
