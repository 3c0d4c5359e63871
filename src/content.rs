use crate::interaction::{PanelId, EXPERTISE_ANCHOR};

pub const SITE_OWNER: &str = "Suzanne De Silva";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/suzannedesilva/";
pub const PM_DECK_URL: &str = "https://suzannedesilva.com/wp-content/uploads/2023/11/Product-Management-20-Years-in-20-Minutes-1.pdf";

pub const HERO_VIDEO_ID: &str = "IAWvulFcZkY";
pub const HERO_VIDEO_START: u32 = 49;
pub const HERO_VIDEO_TITLE: &str = "Suzanne De Silva Samsung Galaxy S10 Presentation";

/// Section anchors rendered on the page, besides the panels.
pub const PAGE_ANCHORS: [&str; 5] = [
    "home",
    "about",
    EXPERTISE_ANCHOR,
    "experience",
    "contact",
];

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink {
        label: "Home",
        target: "home",
    },
    NavLink {
        label: "About",
        target: "about",
    },
    NavLink {
        label: "Product Management",
        target: "product-mgmt",
    },
    NavLink {
        label: "Product Marketing",
        target: "product-mkt",
    },
    NavLink {
        label: "Gallery",
        target: "gallery",
    },
    NavLink {
        label: "Experience",
        target: "experience",
    },
    NavLink {
        label: "Contact",
        target: "contact",
    },
];

/// Muted, looping, control-less background embed.
pub fn hero_embed_url() -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}&controls=0&showinfo=0&rel=0&iv_load_policy=3&modestbranding=1&start={HERO_VIDEO_START}",
        id = HERO_VIDEO_ID
    )
}

pub fn youtube_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

pub fn youtube_watch_url(video_id: &str, start: Option<u32>) -> String {
    match start {
        Some(t) => format!("https://www.youtube.com/watch?v={video_id}&t={t}s"),
        None => format!("https://www.youtube.com/watch?v={video_id}"),
    }
}

pub const ABOUT_PARAGRAPHS: [&str; 4] = [
    "For the past 16 years I have developed and launched products based on consumer insights across the hardware and software stack. These products have driven engagement and delight across millions of consumers globally.",
    "I am passionate about developing technology that addresses real consumer needs; makes life easier, and reduces technology adoption friction through the use of AI.",
    "There has never been a more exciting time to be in technology. With the launch of 5G networks and their hyper speeds, the proliferation of IoT, the rise of voice as interface, to the simplification of tech with AI, this foundational tech is driving rapid change in the industry.",
    "I am excited to be at the heart of this shift, leveraging technology to help consumers experience and do amazing things.",
];

pub const KEY_EXPERTISE: [(&str, &str); 5] = [
    ("Product Development & Launch", "from-yellow-400 to-orange-500"),
    ("Consumer Insights Research", "from-green-400 to-emerald-500"),
    ("Hardware & Software Stack", "from-pink-400 to-red-500"),
    ("AI & Technology Integration", "from-cyan-400 to-blue-500"),
    ("5G & IoT Innovation", "from-indigo-400 to-purple-500"),
];

/// Static copy and palette for a collapsible panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelCopy {
    pub id: PanelId,
    pub title: &'static str,
    pub summary: &'static str,
    /// Short label used on the about-section shortcut buttons
    pub short_title: &'static str,
    pub tagline: &'static str,
    pub gradient: &'static str,
    pub active_header: &'static str,
    /// Tailwind max-height class used when expanded
    pub open_height: &'static str,
}

impl PanelCopy {
    pub fn for_id(id: PanelId) -> &'static PanelCopy {
        match id {
            PanelId::ProductMgmt => &PANELS[0],
            PanelId::ProductMkt => &PANELS[1],
            PanelId::Gallery => &PANELS[2],
        }
    }
}

pub static PANELS: [PanelCopy; 3] = [
    PanelCopy {
        id: PanelId::ProductMgmt,
        title: "Product Management Philosophy",
        summary: "My approach revolves around 4 key themes that drive successful product development",
        short_title: "Product Management",
        tagline: "Philosophy & Approach",
        gradient: "from-emerald-500 to-teal-600",
        active_header: "bg-gradient-to-r from-emerald-50 to-teal-50 text-emerald-700",
        open_height: "max-h-[2000px]",
    },
    PanelCopy {
        id: PanelId::ProductMkt,
        title: "Product Marketing Philosophy",
        summary: "Strategic positioning with 10-20 words that uniquely define market position",
        short_title: "Product Marketing",
        tagline: "Strategy & Positioning",
        gradient: "from-purple-500 to-pink-600",
        active_header: "bg-gradient-to-r from-purple-50 to-pink-50 text-purple-700",
        open_height: "max-h-[2000px]",
    },
    PanelCopy {
        id: PanelId::Gallery,
        title: "Media Gallery",
        summary: "Featured presentations, speaking engagements, and media appearances",
        short_title: "Media Gallery",
        tagline: "Videos & Presentations",
        gradient: "from-blue-500 to-indigo-600",
        active_header: "bg-gradient-to-r from-blue-50 to-indigo-50 text-blue-700",
        open_height: "max-h-[4000px]",
    },
];

pub const PM_PRINCIPLES: [&str; 4] = [
    "Launch and learn quickly",
    "Keep the end consumer in mind",
    "Minimize the number of unknowns",
    "Create a feedback loop of learning and best practices",
];

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
    pub style: &'static str,
}

pub const PM_MINDSETS: [Card; 2] = [
    Card {
        title: "Be Proactive",
        body: "As I go into new projects I always advise my team that \"we don't know what we don't know\". So I challenge everyone to ask questions, uncover insights, and learn quickly.",
        style: "text-emerald-600",
    },
    Card {
        title: "Start with the Future in Mind",
        body: "I take a software development architecture approach to everything I do - build a scalable framework/platform that can stand the test of time and be added to.",
        style: "text-teal-600",
    },
];

pub const PM_PRACTICES: [Card; 3] = [
    Card {
        title: "Prototype & Fail Fast",
        body: "Demonstrate functionality along the way to ensure no surprises in the final product.",
        style: "from-cyan-500 to-blue-600",
    },
    Card {
        title: "Budget for Unknown",
        body: "Avoid failure by leaving enough room and time for the unexpected. Nothing is worse than missed deadlines.",
        style: "from-teal-500 to-emerald-600",
    },
    Card {
        title: "Build Loyalty into Product",
        body: "Loyalty starts with setting expectations and delivering everyday positive experiences.",
        style: "from-emerald-500 to-green-600",
    },
];

pub const PM_MONITOR: Card = Card {
    title: "Monitor, Hypothesize, Test",
    body: "When a product is in market, collect data about user behavior and pair it with hypotheses for actionable insights.",
    style: "",
};

pub const PMM_DEFINITION: &str = "Product marketing is the process of strategically determining the 10 to 20 words that uniquely positions a product in the market. These words fit into a framework called the value proposition that provides the lens through which the product comes to life. A lot of insights and analysis go into determining the who (to target), the what (which features to talk about), and the how (to talk about those features).";

pub const PMM_PILLARS: [Card; 4] = [
    Card {
        title: "Anchor New Technology in the Familiar",
        body: "Help consumers make the psychological leap of understanding how new technology fits into their lives.",
        style: "from-pink-500 to-rose-600",
    },
    Card {
        title: "Create a Platform",
        body: "Build positioning on a platform that can scale over time, ensuring your product uniquely stands for something.",
        style: "from-blue-500 to-indigo-600",
    },
    Card {
        title: "Position to Lockout Competition",
        body: "Position in competitive white spaces authentic to your strengths and away from competitors.",
        style: "from-emerald-500 to-teal-600",
    },
    Card {
        title: "Marketize Technology",
        body: "Brand technology around key user benefits, not the literal name of the technology.",
        style: "from-orange-500 to-red-600",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Campaign {
    pub title: &'static str,
    pub body: &'static str,
    pub callout: &'static str,
}

pub const PMM_CAMPAIGNS: [Campaign; 2] = [
    Campaign {
        title: "5G Example: \"Everything You Love, Hyperfast\"",
        body: "Introducing 5G by anchoring it in familiar smartphone experiences rather than technical specifications.",
        callout: "View the campaign: \"Introducing 5G - Everything You Love, Hyperfast\"",
    },
    Campaign {
        title: "Galaxy Foundation of Features",
        body: "Creating a positioning platform that ensures consumers view Galaxy products through a uniquely crafted lens over time.",
        callout: "\"The Performance You Can Expect In Galaxy\"",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Video {
    pub id: &'static str,
    pub start: Option<u32>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blurb: &'static str,
}

impl Video {
    pub fn thumbnail(&self) -> String {
        youtube_thumbnail(self.id)
    }

    pub fn watch_url(&self) -> String {
        youtube_watch_url(self.id, self.start)
    }

    pub fn alt_text(&self) -> String {
        format!("{} - {}", self.title, self.subtitle)
    }
}

pub const GALLERY_INTRO: &str = "Watch Suzanne's key presentations from Samsung Unpacked events, product launches, and industry conferences showcasing mobile innovation and product strategy.";

pub static GALLERY_VIDEOS: [Video; 6] = [
    Video {
        id: "IAWvulFcZkY",
        start: Some(49),
        title: "Galaxy S10 Launch",
        subtitle: "Samsung Unpacked 2019",
        blurb: "Suzanne presents the Galaxy S10 features and camera innovations at Samsung's flagship event.",
    },
    Video {
        id: "USDvd7fhbd0",
        start: None,
        title: "Unpacked 2019 Full Event",
        subtitle: "Complete Galaxy S10 Launch",
        blurb: "Full Samsung Unpacked 2019 event featuring Galaxy S10 series and innovative mobile technologies.",
    },
    Video {
        id: "SSCmwChfdvM",
        start: None,
        title: "Product Strategy Deep Dive",
        subtitle: "Innovation & Market Positioning",
        blurb: "Comprehensive discussion on product strategy, innovation methodology, and market positioning.",
    },
    Video {
        id: "aS3_7iifqYo",
        start: None,
        title: "Galaxy Note 8 Launch",
        subtitle: "Unpacked 2017 New York",
        blurb: "Galaxy Note 8 unveiling at Brooklyn's Barclays Center featuring S-Pen innovations.",
    },
    Video {
        id: "QduQGadjigM",
        start: None,
        title: "Live Event Coverage",
        subtitle: "Behind the Scenes",
        blurb: "Live coverage and behind-the-scenes content from Samsung's major product launch events.",
    },
    Video {
        id: "DzjsdYZQ7ns",
        start: None,
        title: "Galaxy Unpacked 2024",
        subtitle: "Latest Innovations",
        blurb: "Latest Samsung Unpacked event showcasing cutting-edge Galaxy AI and ecosystem innovations.",
    },
];

pub static SPEAKING: [Card; 6] = [
    Card {
        title: "Samsung Unpacked Events",
        body: "Lead presenter for Galaxy S10, Note 8, and major product launches",
        style: "border-purple-500",
    },
    Card {
        title: "Industry Conferences",
        body: "Keynotes on mobile innovation, 5G technology, and product management",
        style: "border-blue-500",
    },
    Card {
        title: "Media Interviews",
        body: "Technology insights, market analysis, and product strategy discussions",
        style: "border-green-500",
    },
    Card {
        title: "Product Strategy Sessions",
        body: "Deep-dive presentations on product development methodology",
        style: "border-orange-500",
    },
    Card {
        title: "Camera & Innovation Focus",
        body: "Specialized presentations on mobile photography and dual-camera technology",
        style: "border-red-500",
    },
    Card {
        title: "Global Launch Events",
        body: "International product reveals and market positioning strategies",
        style: "border-indigo-500",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
    pub body: &'static str,
    pub style: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        figure: "16+",
        label: "Years Experience",
        body: "Developing and launching innovative products across the technology spectrum.",
        style: "from-yellow-400 to-orange-500 hover:rotate-1",
    },
    Stat {
        figure: "Millions",
        label: "Global Consumers",
        body: "Products have driven engagement and delight across millions of users worldwide.",
        style: "from-green-400 to-blue-500 hover:-rotate-1",
    },
    Stat {
        figure: "30+",
        label: "Product Launches",
        body: "Successfully launched diverse hardware and software products.",
        style: "from-pink-400 to-purple-500 hover:rotate-1",
    },
];

pub const TECH_FOCUS: [Card; 4] = [
    Card {
        title: "5G Networks",
        body: "Hyper-speed connectivity driving innovation",
        style: "from-blue-500 to-cyan-500 hover:-rotate-1",
    },
    Card {
        title: "IoT",
        body: "Connected devices transforming experiences",
        style: "from-green-500 to-emerald-500 hover:rotate-1",
    },
    Card {
        title: "Voice Interface",
        body: "Natural interaction through voice technology",
        style: "from-purple-500 to-pink-500 hover:-rotate-1",
    },
    Card {
        title: "AI Simplification",
        body: "Making technology more accessible with AI",
        style: "from-orange-500 to-red-500 hover:rotate-1",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::NavTarget;

    #[test]
    fn test_nav_links_resolve() {
        for link in NAV_LINKS {
            match NavTarget::from(link.target) {
                NavTarget::Panel(id) => assert_eq!(id.as_str(), link.target),
                NavTarget::Anchor(a) => assert!(
                    PAGE_ANCHORS.contains(&a.as_str()),
                    "nav link {} points at unknown anchor {a}",
                    link.label
                ),
            }
        }
    }

    #[test]
    fn test_panel_copy_lookup() {
        for id in PanelId::ALL {
            assert_eq!(PanelCopy::for_id(id).id, id);
        }
    }

    #[test]
    fn test_youtube_urls() {
        let embed = hero_embed_url();
        assert!(embed.starts_with("https://www.youtube.com/embed/IAWvulFcZkY?"));
        assert!(embed.contains("playlist=IAWvulFcZkY"));
        assert!(embed.ends_with("start=49"));

        assert_eq!(
            GALLERY_VIDEOS[0].watch_url(),
            "https://www.youtube.com/watch?v=IAWvulFcZkY&t=49s"
        );
        assert_eq!(
            GALLERY_VIDEOS[1].watch_url(),
            "https://www.youtube.com/watch?v=USDvd7fhbd0"
        );
        assert_eq!(
            GALLERY_VIDEOS[2].thumbnail(),
            "https://img.youtube.com/vi/SSCmwChfdvM/maxresdefault.jpg"
        );
        assert_eq!(
            GALLERY_VIDEOS[3].alt_text(),
            "Galaxy Note 8 Launch - Unpacked 2017 New York"
        );
    }
}
