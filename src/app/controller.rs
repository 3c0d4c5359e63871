use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::interaction::{
    HeroVisuals, InteractionConfig, InteractionState, NavTarget, PanelId, ScrollRequest,
};

/// Reactive handle over [`InteractionState`], shared through context.
#[derive(Clone, Copy)]
pub struct SiteController {
    state: RwSignal<InteractionState>,
    config: StoredValue<InteractionConfig>,
}

pub fn use_site_controller() -> SiteController {
    expect_context::<SiteController>()
}

/// Smooth, top-aligned scroll to the element with `id`. Missing elements are skipped.
pub fn scroll_to_anchor(id: &str) {
    let el = if let Some(el) = document().get_element_by_id(id) {
        el
    } else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

impl SiteController {
    pub fn provide(config: InteractionConfig) -> Self {
        let ctrl = Self {
            state: RwSignal::new(InteractionState::new()),
            config: StoredValue::new(config),
        };
        provide_context(ctrl);
        ctrl
    }

    /// Feeds window scroll offsets into the state. Call once, from the page.
    pub fn track_window_scroll(&self) {
        let ctrl = *self;
        let (_, scroll_y) = use_window_scroll();
        Effect::watch(
            move || scroll_y.get(),
            move |y, _, _| ctrl.on_scroll(*y),
            true,
        );
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.menu_open())
    }

    pub fn nav_visible(&self) -> bool {
        self.state.with(|s| s.nav_visible())
    }

    pub fn is_section_active(&self, id: PanelId) -> bool {
        self.state.with(|s| s.active_section() == Some(id))
    }

    pub fn is_dropdown_open(&self, id: PanelId) -> bool {
        self.state.with(|s| s.active_dropdown() == Some(id))
    }

    pub fn hero_visuals(&self) -> HeroVisuals {
        self.config
            .with_value(|cfg| self.state.with(|s| s.hero_visuals(cfg)))
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.state.update(|s| s.close_menu());
    }

    pub fn toggle_section(&self, id: PanelId) {
        self.state.update(|s| s.toggle_section(id));
    }

    pub fn toggle_dropdown(&self, id: PanelId) {
        self.state.update(|s| s.toggle_dropdown(id));
    }

    pub fn close_on_outside_click(&self, inside_dropdown: bool) {
        // skip the write when nothing is open, this fires on every page click
        if inside_dropdown || self.state.with_untracked(|s| s.active_dropdown().is_none()) {
            return;
        }
        self.state.update(|s| s.close_on_outside_click(inside_dropdown));
    }

    pub fn on_scroll(&self, scroll_y: f64) {
        self.config
            .with_value(|cfg| self.state.update(|s| s.on_scroll(scroll_y, cfg)));
    }

    pub fn navigate_to(&self, target: &str) {
        let target = NavTarget::from(target);
        log::debug!("navigating to #{}", target.anchor());
        let req = self
            .config
            .with_value(|cfg| self.state.try_update(|s| s.navigate_to(&target, cfg)));
        if let Some(req) = req {
            self.run(req);
        }
    }

    pub fn reveal_panel(&self, id: PanelId) {
        log::debug!("revealing panel {id}");
        let req = self
            .config
            .with_value(|cfg| self.state.try_update(|s| s.reveal_panel(id, cfg)));
        if let Some(req) = req {
            self.run(req);
        }
    }

    fn run(&self, req: ScrollRequest) {
        let ScrollRequest {
            target,
            delay,
            generation,
        } = req;
        let delay = if let Some(delay) = delay {
            delay
        } else {
            scroll_to_anchor(&target);
            return;
        };
        let state = self.state;
        set_timeout(
            move || {
                // a later navigation owns the viewport now
                let current = state
                    .try_with_untracked(|s| s.is_current(generation))
                    .unwrap_or(false);
                if current {
                    scroll_to_anchor(&target);
                }
            },
            delay,
        );
    }
}
