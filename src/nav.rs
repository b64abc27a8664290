use tracing::debug;

use crate::constants::*;
use crate::layout::SectionLayout;

/// State of the fixed navigation bar.
#[derive(Debug, Default)]
pub struct NavBar {
    links: Vec<String>,
    scrolled: bool,
    active: Option<String>,
    menu_open: bool,
}

impl NavBar {
    pub fn new(links: Vec<String>) -> Self {
        Self {
            links,
            ..Self::default()
        }
    }

    /// Refresh the "scrolled" look and the highlighted link.
    pub fn on_scroll(&mut self, scroll: f32, sections: &[SectionLayout]) {
        self.scrolled = scroll > NAV_SCROLLED_THRESHOLD;

        let probe = scroll + NAV_ACTIVE_OFFSET;
        let active = sections
            .iter()
            .rev()
            .find(|s| s.contains(probe))
            .map(|s| s.id.clone());
        if active != self.active {
            debug!(section = ?active, "active section changed");
            self.active = active;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a link: closes the mobile menu and returns the scroll offset
    /// that brings the section just under the bar.
    pub fn click_link(&mut self, id: &str, sections: &[SectionLayout]) -> Option<f32> {
        self.menu_open = false;
        sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| (s.top - NAV_HEIGHT).max(0.0))
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn locks_scroll(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SectionBody;

    fn sections() -> Vec<SectionLayout> {
        [("home", 64.0, 600.0), ("work", 664.0, 400.0), ("about", 1064.0, 300.0)]
            .into_iter()
            .map(|(id, top, height)| SectionLayout {
                id: id.to_string(),
                top,
                height,
                body: SectionBody::Grid { tiles: Vec::new() },
            })
            .collect()
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavBar::new(vec!["home".into()]);
        nav.on_scroll(50.0, &sections());
        assert!(!nav.is_scrolled());
        nav.on_scroll(51.0, &sections());
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_active_section_uses_look_ahead() {
        let mut nav = NavBar::new(Vec::new());
        nav.on_scroll(0.0, &sections());
        assert_eq!(nav.active(), Some("home"));

        // 464 + 200 lands on the first unit of "work"
        nav.on_scroll(464.0, &sections());
        assert_eq!(nav.active(), Some("work"));

        nav.on_scroll(2000.0, &sections());
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_link_click_targets_section_and_closes_menu() {
        let mut nav = NavBar::new(Vec::new());
        nav.toggle_menu();
        assert!(nav.locks_scroll());

        assert_eq!(nav.click_link("about", &sections()), Some(1000.0));
        assert!(!nav.is_menu_open());
        assert!(!nav.locks_scroll());

        assert_eq!(nav.click_link("home", &sections()), Some(0.0));
        assert_eq!(nav.click_link("missing", &sections()), None);
    }
}
