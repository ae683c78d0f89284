use crate::{config::NavConfig, scroll::Section};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub target_section_id: String,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenuState {
    #[default]
    Closed,
    Open,
}

impl MobileMenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Page scroll is suppressed while the menu covers the viewport.
    pub fn body_overflow(self) -> &'static str {
        match self {
            Self::Closed => "auto",
            Self::Open => "hidden",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkClickOutcome {
    pub scroll: Option<ScrollRequest>,
    pub menu_closed: bool,
    pub activated: bool,
}

/// Trailing-edge debounce. Each event bumps a generation and only the timer
/// holding the latest generation may act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    wait_ms: u64,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Records an event and returns the token its timer must present.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// True exactly once per quiet window: for the token of the latest event.
    pub fn fire_due(&mut self, token: u64) -> bool {
        if !self.pending || token != self.generation {
            return false;
        }

        self.pending = false;
        true
    }
}

pub struct NavController {
    links: Vec<NavLink>,
    menu: MobileMenuState,
    resize: Debouncer,
    mobile_breakpoint: f64,
}

impl NavController {
    /// The first link starts active so the one-active invariant holds from
    /// construction on.
    pub fn new<I, S>(targets: I, config: &NavConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links = targets
            .into_iter()
            .enumerate()
            .map(|(index, target)| NavLink {
                target_section_id: target.into(),
                is_active: index == 0,
            })
            .collect();

        Self {
            links,
            menu: MobileMenuState::Closed,
            resize: Debouncer::new(u64::from(config.resize_debounce_ms)),
            mobile_breakpoint: config.mobile_breakpoint,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn menu(&self) -> MobileMenuState {
        self.menu
    }

    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|link| link.is_active)
    }

    pub fn index_of(&self, section_id: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.target_section_id == section_id)
    }

    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.links.len() {
            return false;
        }

        for link in &mut self.links {
            link.is_active = false;
        }
        self.links[index].is_active = true;
        true
    }

    /// Activates the link for a section reached by scrolling. Returns the
    /// link index only when the active link actually changed.
    pub fn sync_to_section(&mut self, section_id: &str) -> Option<usize> {
        let index = self.index_of(section_id)?;
        if self.links[index].is_active {
            return None;
        }

        self.activate(index);
        Some(index)
    }

    pub fn navigate_to(
        &self,
        section_id: &str,
        layout: &[Section],
        header_height: f64,
    ) -> Option<ScrollRequest> {
        let section = layout.iter().find(|section| section.id == section_id)?;
        Some(ScrollRequest {
            top: section.top - header_height,
        })
    }

    pub fn toggle_mobile_menu(&mut self) -> MobileMenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    pub fn on_link_click(
        &mut self,
        index: usize,
        layout: &[Section],
        header_height: f64,
    ) -> LinkClickOutcome {
        let Some(target) = self.links.get(index).map(|link| link.target_section_id.clone()) else {
            return LinkClickOutcome::default();
        };

        let scroll = self.navigate_to(&target, layout, header_height);
        let menu_closed = self.close_menu();
        let activated = self.activate(index);

        LinkClickOutcome {
            scroll,
            menu_closed,
            activated,
        }
    }

    pub fn on_escape(&mut self) -> bool {
        self.close_menu()
    }

    /// Arms the resize debounce; the returned token goes to
    /// `on_resize_settled` once `resize_wait_ms` has passed.
    pub fn on_resize(&mut self) -> u64 {
        self.resize.trigger()
    }

    /// Runs the debounced resize check. Returns true when it closed the menu.
    pub fn on_resize_settled(&mut self, token: u64, viewport_width: f64) -> bool {
        if !self.resize.fire_due(token) {
            return false;
        }

        if viewport_width > self.mobile_breakpoint {
            return self.close_menu();
        }

        false
    }

    pub fn resize_wait_ms(&self) -> u64 {
        self.resize.wait_ms()
    }

    fn close_menu(&mut self) -> bool {
        if !self.menu.is_open() {
            return false;
        }

        self.toggle_mobile_menu();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [&str; 4] = ["home", "about", "skills", "contact"];

    fn controller() -> NavController {
        NavController::new(TARGETS, &NavConfig::default())
    }

    fn layout() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 700.0),
            Section::new("about", 700.0, 500.0),
            Section::new("skills", 1_200.0, 900.0),
            Section::new("contact", 2_100.0, 600.0),
        ]
    }

    fn active_count(nav: &NavController) -> usize {
        nav.links().iter().filter(|link| link.is_active).count()
    }

    #[test]
    fn exactly_one_link_is_active_after_any_activation() {
        let mut nav = controller();
        assert_eq!(active_count(&nav), 1);

        for index in [2, 2, 0, 3, 1, 99, 1] {
            nav.activate(index);
            assert_eq!(active_count(&nav), 1);
        }
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let mut nav = controller();
        nav.activate(2);
        assert!(!nav.activate(4));
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn navigate_to_offsets_by_header_height() {
        let nav = controller();
        let request = nav.navigate_to("skills", &layout(), 72.0);
        assert_eq!(request, Some(ScrollRequest { top: 1_128.0 }));
    }

    #[test]
    fn navigate_to_unknown_section_changes_nothing() {
        let mut nav = controller();
        nav.activate(1);
        nav.toggle_mobile_menu();
        let before_links = nav.links().to_vec();

        assert_eq!(nav.navigate_to("blog", &layout(), 72.0), None);
        assert_eq!(nav.links(), before_links.as_slice());
        assert_eq!(nav.menu(), MobileMenuState::Open);
    }

    #[test]
    fn toggling_twice_restores_closed_and_scrolling() {
        let mut nav = controller();

        let opened = nav.toggle_mobile_menu();
        assert_eq!(opened, MobileMenuState::Open);
        assert_eq!(opened.body_overflow(), "hidden");

        let closed = nav.toggle_mobile_menu();
        assert_eq!(closed, MobileMenuState::Closed);
        assert_eq!(closed.body_overflow(), "auto");
    }

    #[test]
    fn link_click_scrolls_closes_menu_and_activates() {
        let mut nav = controller();
        nav.toggle_mobile_menu();

        let outcome = nav.on_link_click(3, &layout(), 80.0);
        assert_eq!(
            outcome,
            LinkClickOutcome {
                scroll: Some(ScrollRequest { top: 2_020.0 }),
                menu_closed: true,
                activated: true,
            }
        );
        assert_eq!(nav.menu(), MobileMenuState::Closed);
        assert_eq!(nav.active_index(), Some(3));
    }

    #[test]
    fn link_click_with_missing_section_still_activates() {
        let mut nav = controller();
        let outcome = nav.on_link_click(2, &layout()[..1], 0.0);

        assert_eq!(outcome.scroll, None);
        assert!(!outcome.menu_closed);
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn escape_only_closes_an_open_menu() {
        let mut nav = controller();
        assert!(!nav.on_escape());
        assert_eq!(nav.menu(), MobileMenuState::Closed);

        nav.toggle_mobile_menu();
        assert!(nav.on_escape());
        assert_eq!(nav.menu(), MobileMenuState::Closed);
    }

    #[test]
    fn scroll_sync_reports_only_changes() {
        let mut nav = controller();
        assert_eq!(nav.sync_to_section("home"), None);
        assert_eq!(nav.sync_to_section("skills"), Some(2));
        assert_eq!(nav.sync_to_section("skills"), None);
        assert_eq!(nav.sync_to_section("projects"), None);
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn resize_burst_closes_menu_once() {
        let mut nav = controller();
        nav.toggle_mobile_menu();

        let tokens: Vec<u64> = (0..12).map(|_| nav.on_resize()).collect();

        // Every timer armed during the burst wakes; only the newest one acts.
        let closes = tokens
            .into_iter()
            .filter(|token| nav.on_resize_settled(*token, 1_280.0))
            .count();

        assert_eq!(closes, 1);
        assert_eq!(nav.menu(), MobileMenuState::Closed);
    }

    #[test]
    fn single_resize_settles_with_its_own_token() {
        let mut nav = controller();
        nav.toggle_mobile_menu();

        let token = nav.on_resize();
        assert!(nav.on_resize_settled(token, 1_280.0));
        assert_eq!(nav.menu(), MobileMenuState::Closed);
        assert_eq!(nav.menu().body_overflow(), "auto");
    }

    #[test]
    fn settled_resize_keeps_menu_on_narrow_viewport() {
        let mut nav = controller();
        nav.toggle_mobile_menu();

        let stale = nav.on_resize();
        let token = nav.on_resize();
        assert!(!nav.on_resize_settled(stale, 1_280.0));
        assert!(!nav.on_resize_settled(token, 768.0));
        assert_eq!(nav.menu(), MobileMenuState::Open);
    }

    #[test]
    fn debouncer_fires_once_per_quiet_window() {
        let mut debouncer = Debouncer::new(250);
        assert!(!debouncer.fire_due(0));

        let first = debouncer.trigger();
        let second = debouncer.trigger();
        assert!(!debouncer.fire_due(first));
        assert!(debouncer.fire_due(second));
        assert!(!debouncer.fire_due(second));

        let third = debouncer.trigger();
        assert!(debouncer.fire_due(third));
        assert_eq!(debouncer.wait_ms(), 250);
    }
}
