use std::{fmt, str::FromStr, time::Duration};

use thiserror::Error;

/// Anchor of the section that holds the three collapsible panels.
pub const EXPERTISE_ANCHOR: &str = "expertise";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    ProductMgmt,
    ProductMkt,
    Gallery,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [Self::ProductMgmt, Self::ProductMkt, Self::Gallery];

    /// DOM id of the panel element, also its navigation target.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductMgmt => "product-mgmt",
            Self::ProductMkt => "product-mkt",
            Self::Gallery => "gallery",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown panel: {0}")]
pub struct PanelIdError(pub String);

impl FromStr for PanelId {
    type Err = PanelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product-mgmt" => Ok(Self::ProductMgmt),
            "product-mkt" => Ok(Self::ProductMkt),
            "gallery" => Ok(Self::Gallery),
            other => Err(PanelIdError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Panel(PanelId),
    Anchor(String),
}

impl From<&str> for NavTarget {
    fn from(value: &str) -> Self {
        match value.parse::<PanelId>() {
            Ok(id) => Self::Panel(id),
            Err(_) => Self::Anchor(value.to_string()),
        }
    }
}

impl NavTarget {
    pub fn anchor(&self) -> &str {
        match self {
            Self::Panel(id) => id.as_str(),
            Self::Anchor(s) => s,
        }
    }
}

/// Tunables for the interaction rules. Defaults match the published page.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    /// Time given to a panel's expand transition before scrolling to it
    pub expand_settle_delay: Duration,
    pub nav_hide_threshold: f64,
    pub video_scale_distance: f64,
    pub video_fade_distance: f64,
    pub caption_floor_scale: f64,
    pub caption_switch_opacity: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            expand_settle_delay: Duration::from_millis(100),
            nav_hide_threshold: 100.0,
            video_scale_distance: 800.0,
            video_fade_distance: 600.0,
            caption_floor_scale: 0.8,
            caption_switch_opacity: 0.5,
        }
    }
}

/// A scroll-into-view side effect for the view layer to carry out.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: String,
    pub delay: Option<Duration>,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroVisuals {
    pub video_scale: f64,
    pub video_opacity: f64,
    pub caption_scale: f64,
    /// Caption still sits over the video and renders light
    pub caption_on_video: bool,
}

fn linear_falloff(scroll_y: f64, distance: f64) -> f64 {
    (1.0 - scroll_y / distance).max(0.0)
}

pub fn video_scale(scroll_y: f64, config: &InteractionConfig) -> f64 {
    linear_falloff(scroll_y, config.video_scale_distance)
}

pub fn video_opacity(scroll_y: f64, config: &InteractionConfig) -> f64 {
    linear_falloff(scroll_y, config.video_fade_distance)
}

pub fn hero_visuals(scroll_y: f64, config: &InteractionConfig) -> HeroVisuals {
    let video_scale = video_scale(scroll_y, config);
    let video_opacity = video_opacity(scroll_y, config);
    let caption_on_video = video_opacity > config.caption_switch_opacity;
    let caption_scale = if caption_on_video {
        video_scale
    } else {
        video_scale.max(config.caption_floor_scale)
    };
    HeroVisuals {
        video_scale,
        video_opacity,
        caption_scale,
        caption_on_video,
    }
}

/// Hide only while moving down and past the threshold.
pub fn nav_visible(last_scroll_y: f64, scroll_y: f64, threshold: f64) -> bool {
    !(scroll_y > last_scroll_y && scroll_y > threshold)
}

fn toggle_slot(slot: &mut Option<PanelId>, id: PanelId) {
    *slot = if *slot == Some(id) { None } else { Some(id) };
}

/// UI state of the page, mutated only through the transition methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    menu_open: bool,
    active_section: Option<PanelId>,
    active_dropdown: Option<PanelId>,
    nav_visible: bool,
    last_scroll_y: f64,
    scroll_y: f64,
    generation: u64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_section: None,
            active_dropdown: None,
            nav_visible: true,
            last_scroll_y: 0.0,
            scroll_y: 0.0,
            generation: 0,
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> Option<PanelId> {
        self.active_section
    }

    pub fn active_dropdown(&self) -> Option<PanelId> {
        self.active_dropdown
    }

    pub fn nav_visible(&self) -> bool {
        self.nav_visible
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn hero_visuals(&self, config: &InteractionConfig) -> HeroVisuals {
        hero_visuals(self.scroll_y, config)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_section(&mut self, id: PanelId) {
        toggle_slot(&mut self.active_section, id);
    }

    pub fn toggle_dropdown(&mut self, id: PanelId) {
        toggle_slot(&mut self.active_dropdown, id);
    }

    pub fn close_on_outside_click(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.active_dropdown = None;
        }
    }

    /// Whether a deferred scroll issued at `generation` should still fire.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Panels are expanded before the scroll is scheduled, since a collapsed
    /// panel has no height to land on.
    pub fn navigate_to(
        &mut self,
        target: &NavTarget,
        config: &InteractionConfig,
    ) -> ScrollRequest {
        self.menu_open = false;
        self.active_dropdown = None;
        let generation = self.next_generation();
        match target {
            NavTarget::Panel(id) => {
                if self.active_section != Some(*id) {
                    self.active_section = Some(*id);
                }
                ScrollRequest {
                    target: id.as_str().to_string(),
                    delay: Some(config.expand_settle_delay),
                    generation,
                }
            }
            NavTarget::Anchor(anchor) => ScrollRequest {
                target: anchor.clone(),
                delay: None,
                generation,
            },
        }
    }

    /// Shortcut from the about section: toggle the panel, then bring the
    /// panel container into view.
    pub fn reveal_panel(&mut self, id: PanelId, config: &InteractionConfig) -> ScrollRequest {
        self.toggle_section(id);
        ScrollRequest {
            target: EXPERTISE_ANCHOR.to_string(),
            delay: Some(config.expand_settle_delay),
            generation: self.next_generation(),
        }
    }

    pub fn on_scroll(&mut self, new_scroll_y: f64, config: &InteractionConfig) {
        self.nav_visible = nav_visible(self.last_scroll_y, new_scroll_y, config.nav_hide_threshold);
        self.last_scroll_y = new_scroll_y;
        self.scroll_y = new_scroll_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> InteractionConfig {
        InteractionConfig::default()
    }

    #[test]
    fn test_video_curves() {
        let config = cfg();
        assert_eq!(video_scale(0.0, &config), 1.0);
        assert_eq!(video_opacity(0.0, &config), 1.0);
        assert_eq!(video_scale(400.0, &config), 0.5);
        assert_eq!(video_opacity(300.0, &config), 0.5);
        assert_eq!(video_scale(800.0, &config), 0.0);
        assert_eq!(video_opacity(600.0, &config), 0.0);
        assert_eq!(video_scale(5000.0, &config), 0.0);
        assert_eq!(video_opacity(5000.0, &config), 0.0);

        let mut prev = (f64::MAX, f64::MAX);
        for step in 0..=120 {
            let s = step as f64 * 10.0;
            let cur = (video_scale(s, &config), video_opacity(s, &config));
            assert!(cur.0 <= prev.0 && cur.1 <= prev.1, "not monotone at {s}");
            assert!(cur.0 >= 0.0 && cur.1 >= 0.0);
            prev = cur;
        }
    }

    #[test]
    fn test_hero_caption() {
        let config = cfg();
        let top = hero_visuals(0.0, &config);
        assert!(top.caption_on_video);
        assert_eq!(top.caption_scale, 1.0);

        // opacity 0.5 exactly is no longer "on video"
        let mid = hero_visuals(300.0, &config);
        assert!(!mid.caption_on_video);
        assert_eq!(mid.caption_scale, 0.8);

        let just_before = hero_visuals(240.0, &config);
        assert!(just_before.caption_on_video);
        assert_eq!(just_before.caption_scale, just_before.video_scale);

        let far = hero_visuals(2000.0, &config);
        assert_eq!(far.video_scale, 0.0);
        assert_eq!(far.caption_scale, 0.8);
    }

    #[test]
    fn test_toggle_section() {
        let mut state = InteractionState::new();
        assert_eq!(state.active_section(), None);
        state.toggle_section(PanelId::Gallery);
        assert_eq!(state.active_section(), Some(PanelId::Gallery));
        state.toggle_section(PanelId::Gallery);
        assert_eq!(state.active_section(), None);

        state.toggle_section(PanelId::ProductMgmt);
        state.toggle_section(PanelId::ProductMkt);
        assert_eq!(state.active_section(), Some(PanelId::ProductMkt));
    }

    #[test]
    fn test_toggle_dropdown_independent() {
        let mut state = InteractionState::new();
        state.toggle_section(PanelId::ProductMgmt);
        state.toggle_dropdown(PanelId::Gallery);
        assert_eq!(state.active_section(), Some(PanelId::ProductMgmt));
        assert_eq!(state.active_dropdown(), Some(PanelId::Gallery));
        state.toggle_dropdown(PanelId::Gallery);
        assert_eq!(state.active_dropdown(), None);
        assert_eq!(state.active_section(), Some(PanelId::ProductMgmt));
    }

    #[test]
    fn test_toggle_dropdown_replaces_other() {
        let mut state = InteractionState::new();
        state.toggle_dropdown(PanelId::ProductMgmt);
        state.toggle_dropdown(PanelId::Gallery);
        assert_eq!(state.active_dropdown(), Some(PanelId::Gallery));
        assert_eq!(state.active_section(), None);
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = InteractionState::new();
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open());
        state.close_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_close_menu_keeps_panels() {
        let mut state = InteractionState::new();
        state.toggle_section(PanelId::Gallery);
        state.toggle_dropdown(PanelId::ProductMkt);
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open());
        assert_eq!(state.active_section(), Some(PanelId::Gallery));
        assert_eq!(state.active_dropdown(), Some(PanelId::ProductMkt));
    }

    #[test]
    fn test_nav_hide_rule() {
        let config = cfg();
        let mut state = InteractionState::new();
        state.on_scroll(150.0, &config);
        assert_eq!(state.last_scroll_y(), 150.0);
        state.on_scroll(200.0, &config);
        assert!(!state.nav_visible());
        state.on_scroll(50.0, &config);
        assert!(state.nav_visible());

        let mut fresh = InteractionState::new();
        fresh.on_scroll(90.0, &config);
        assert!(fresh.nav_visible());
        assert_eq!(fresh.scroll_y(), 90.0);
    }

    #[test]
    fn test_navigate_to_panel() {
        let config = cfg();
        let mut state = InteractionState::new();
        let req = state.navigate_to(&NavTarget::from("product-mgmt"), &config);
        assert_eq!(state.active_section(), Some(PanelId::ProductMgmt));
        assert_eq!(req.target, "product-mgmt");
        assert_eq!(req.delay, Some(Duration::from_millis(100)));
        assert!(state.is_current(req.generation));

        // already open stays open
        let req = state.navigate_to(&NavTarget::Panel(PanelId::ProductMgmt), &config);
        assert_eq!(state.active_section(), Some(PanelId::ProductMgmt));
        assert_eq!(req.target, "product-mgmt");
    }

    #[test]
    fn test_navigate_to_anchor() {
        let config = cfg();
        let mut state = InteractionState::new();
        state.toggle_section(PanelId::ProductMkt);
        let req = state.navigate_to(&NavTarget::from("contact"), &config);
        assert_eq!(req.target, "contact");
        assert_eq!(req.delay, None);
        assert_eq!(state.active_section(), Some(PanelId::ProductMkt));
    }

    #[test]
    fn test_navigate_to_other_panel() {
        let config = cfg();
        let mut state = InteractionState::new();
        state.toggle_section(PanelId::ProductMkt);
        let req = state.navigate_to(&NavTarget::from("gallery"), &config);
        assert_eq!(state.active_section(), Some(PanelId::Gallery));
        assert_eq!(req.target, "gallery");
        assert_eq!(req.delay, Some(config.expand_settle_delay));
        assert!(state.is_current(req.generation));
    }

    #[test]
    fn test_navigation_closes_menus() {
        let config = cfg();
        for target in ["home", "gallery", "contact", "product-mkt"] {
            let mut state = InteractionState::new();
            state.toggle_menu();
            state.toggle_dropdown(PanelId::ProductMgmt);
            state.navigate_to(&NavTarget::from(target), &config);
            assert!(!state.menu_open(), "menu left open for {target}");
            assert_eq!(state.active_dropdown(), None);
        }
    }

    #[test]
    fn test_stale_scroll_is_not_current() {
        let config = cfg();
        let mut state = InteractionState::new();
        let first = state.navigate_to(&NavTarget::from("gallery"), &config);
        let second = state.navigate_to(&NavTarget::from("about"), &config);
        assert!(!state.is_current(first.generation));
        assert!(state.is_current(second.generation));
    }

    #[test]
    fn test_reveal_panel() {
        let config = cfg();
        let mut state = InteractionState::new();
        let req = state.reveal_panel(PanelId::Gallery, &config);
        assert_eq!(state.active_section(), Some(PanelId::Gallery));
        assert_eq!(req.target, EXPERTISE_ANCHOR);
        assert_eq!(req.delay, Some(config.expand_settle_delay));

        state.reveal_panel(PanelId::Gallery, &config);
        assert_eq!(state.active_section(), None);
    }

    #[test]
    fn test_outside_click() {
        let mut state = InteractionState::new();
        state.toggle_dropdown(PanelId::ProductMkt);
        state.close_on_outside_click(true);
        assert_eq!(state.active_dropdown(), Some(PanelId::ProductMkt));
        state.close_on_outside_click(false);
        assert_eq!(state.active_dropdown(), None);
    }

    #[test]
    fn test_panel_id_parse() {
        for id in PanelId::ALL {
            assert_eq!(id.as_str().parse::<PanelId>(), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
        assert_eq!(
            "experience".parse::<PanelId>(),
            Err(PanelIdError("experience".to_string()))
        );
        assert_eq!(
            NavTarget::from("experience"),
            NavTarget::Anchor("experience".to_string())
        );
        assert_eq!(NavTarget::from("gallery").anchor(), "gallery");
    }

    #[test]
    fn test_custom_config() {
        let config = InteractionConfig {
            expand_settle_delay: Duration::from_millis(450),
            nav_hide_threshold: 10.0,
            ..Default::default()
        };
        let mut state = InteractionState::new();
        state.on_scroll(20.0, &config);
        assert!(!state.nav_visible());
        let req = state.navigate_to(&NavTarget::Panel(PanelId::Gallery), &config);
        assert_eq!(req.delay, Some(Duration::from_millis(450)));
    }
}
