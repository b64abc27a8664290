//! The portfolio window: owns every component and routes input between them.

mod render;

use raylib::prelude::*;
use tracing::{debug, info};

use crate::carousel::Carousel;
use crate::constants::*;
use crate::effects::{Cursor, PageFade, PageScroll, Parallax, Reveal, ScrollProgress};
use crate::gate::PasscodeGate;
use crate::gesture::SwipeTracker;
use crate::input::FrameInput;
use crate::layout::{GateLayout, Hit, LightboxLayout, NavHit, NavLayout, PageLayout, SectionBody};
use crate::lightbox::{Lightbox, LightboxTarget};
use crate::nav::NavBar;
use crate::page::{ImageRef, Page};
use crate::state::ViewerState;
use crate::track::TrackMotion;
use crate::zoomable::ZoomableImages;

pub struct App {
    page: Page,
    carousels: Vec<Carousel>,
    tracks: Vec<TrackMotion>,
    lightbox: Lightbox,
    zoomable: ZoomableImages,
    nav: NavBar,
    gate: PasscodeGate,

    scroll: PageScroll,
    parallax: Parallax,
    reveal: Reveal,
    progress: ScrollProgress,
    fade: PageFade,
    cursor: Cursor,
    swipe: SwipeTracker,
    dragging: Option<usize>,

    layout: PageLayout,
    width: f32,
    height: f32,
}

impl App {
    pub fn new(page: Page, carousel_ids: &[String], gate: PasscodeGate, width: f32, height: f32) -> Self {
        let carousels: Vec<Carousel> = carousel_ids
            .iter()
            .filter_map(|id| Carousel::mount(&page, id))
            .collect();
        let tracks = carousels.iter().map(|c| TrackMotion::new(c.track_offset())).collect();
        let zoomable = ZoomableImages::collect(&page);
        let layout = PageLayout::compute(&page, &carousels, width, height);
        let nav = NavBar::new(layout.sections.iter().map(|s| s.id.clone()).collect());
        let reveal = Reveal::new(layout.sections.len());

        info!(
            carousels = carousels.len(),
            zoomable = zoomable.images().len(),
            sections = layout.sections.len(),
            "portfolio ready"
        );

        let mut scroll = PageScroll::new();
        scroll.set_extent(layout.height, height);

        Self {
            page,
            carousels,
            tracks,
            lightbox: Lightbox::new(),
            zoomable,
            nav,
            gate,
            scroll,
            parallax: Parallax::default(),
            reveal,
            progress: ScrollProgress::new(),
            fade: PageFade::new(),
            cursor: Cursor::new(),
            swipe: SwipeTracker::default(),
            dragging: None,
            layout,
            width,
            height,
        }
    }

    pub fn state(&self) -> ViewerState {
        if !self.gate.is_unlocked() {
            ViewerState::Locked
        } else if self.lightbox.is_open() {
            ViewerState::Zoomed
        } else {
            ViewerState::Browsing
        }
    }

    /// Any overlay holding the page still.
    pub fn scroll_locked(&self) -> bool {
        self.lightbox.locks_scroll() || self.nav.locks_scroll() || self.gate.locks_scroll()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height {
            return;
        }
        debug!(width, height, "relayout");
        self.width = width;
        self.height = height;
        self.layout = PageLayout::compute(&self.page, &self.carousels, width, height);
        self.scroll.set_extent(self.layout.height, height);
    }

    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        match self.state() {
            ViewerState::Locked => self.update_gate(input),
            ViewerState::Zoomed => self.update_lightbox(input),
            ViewerState::Browsing => self.update_page(input),
        }
        self.gate.update(dt);

        self.scroll.update(dt);
        let offset = self.scroll.offset();
        self.nav.on_scroll(offset, &self.layout.sections);
        self.parallax.on_scroll(offset, self.height);
        self.progress.update(dt, offset, self.layout.height, self.height);
        self.fade.update(dt);
        let hovering = self.is_hover_target(input.mouse);
        self.cursor.update(dt, input.mouse, hovering);

        let visible: Vec<bool> = self
            .layout
            .sections
            .iter()
            .map(|s| s.near_viewport(offset, self.height, 0.0))
            .collect();
        self.reveal.update(dt, &visible);

        for (track, carousel) in self.tracks.iter_mut().zip(&self.carousels) {
            track.update(dt, carousel.track_offset());
        }
    }

    fn update_gate(&mut self, input: &FrameInput) {
        for &c in &input.typed {
            self.gate.type_char(c);
        }
        for &key in &input.keys {
            self.gate.handle_key(key);
        }
        if input.pressed {
            let layout = GateLayout::compute(self.width, self.height);
            if layout.unlock.check_collision_point_rec(input.mouse) {
                self.gate.submit();
            }
        }
    }

    fn update_lightbox(&mut self, input: &FrameInput) {
        for &key in &input.keys {
            self.lightbox.handle_key(key);
        }
        if input.pressed && self.lightbox.is_open() {
            let target = LightboxLayout::compute(self.width, self.height).hit(input.mouse);
            self.lightbox.handle_click(target);
        }
    }

    fn update_page(&mut self, input: &FrameInput) {
        // The global key listener is registered even while the lightbox is closed
        for &key in &input.keys {
            self.lightbox.handle_key(key);
        }

        if input.pressed {
            self.press(input.mouse);
        }
        if input.released {
            self.release(input.mouse);
        }

        if input.wheel != 0.0 && !self.scroll_locked() {
            self.scroll.scroll_by(-input.wheel * WHEEL_SCROLL_STEP);
        }
    }

    fn press(&mut self, mouse: Vector2) {
        let nav_layout = NavLayout::compute(self.nav.links(), self.width, self.nav.is_menu_open());
        if nav_layout.covers(mouse) {
            match nav_layout.hit(mouse) {
                Some(NavHit::Toggle) => self.nav.toggle_menu(),
                Some(NavHit::Link(id)) => {
                    if let Some(target) = self.nav.click_link(&id, &self.layout.sections) {
                        self.scroll.scroll_to(target);
                    }
                }
                None => {}
            }
            return;
        }

        let point = Vector2::new(mouse.x, mouse.y + self.scroll.offset());
        match self.layout.hit(point, self.parallax.offset()) {
            Some(Hit::CarouselTrack(c)) => {
                self.swipe.touch_start(mouse.x);
                self.dragging = Some(c);
            }
            Some(Hit::CarouselPrev(c)) => self.carousels[c].prev(),
            Some(Hit::CarouselNext(c)) => self.carousels[c].next(),
            Some(Hit::CarouselDot(c, i)) => self.carousels[c].go_to_slide(i),
            Some(Hit::Zoom(image)) => self.zoom(&image),
            None => {}
        }
    }

    /// A drag that stays under the swipe threshold is a click on the image
    /// showing in the strip.
    fn release(&mut self, mouse: Vector2) {
        let Some(c) = self.dragging.take() else {
            return;
        };
        let Some(swipe) = self.swipe.touch_end(mouse.x) else {
            return;
        };
        let carousel = &mut self.carousels[c];
        if swipe.direction().is_some() {
            carousel.handle_swipe(swipe);
        } else {
            carousel.handle_image_click(carousel.current_index(), &mut self.lightbox);
        }
    }

    /// Whether the pointer is over something that reacts to a click.
    fn is_hover_target(&self, mouse: Vector2) -> bool {
        match self.state() {
            ViewerState::Locked => GateLayout::compute(self.width, self.height).unlock.check_collision_point_rec(mouse),
            ViewerState::Zoomed => matches!(
                LightboxLayout::compute(self.width, self.height).hit(mouse),
                LightboxTarget::Close | LightboxTarget::Prev | LightboxTarget::Next
            ),
            ViewerState::Browsing => {
                let nav_layout = NavLayout::compute(self.nav.links(), self.width, self.nav.is_menu_open());
                if nav_layout.covers(mouse) {
                    return nav_layout.hit(mouse).is_some();
                }
                let point = Vector2::new(mouse.x, mouse.y + self.scroll.offset());
                self.layout.hit(point, self.parallax.offset()).is_some()
            }
        }
    }

    fn zoom(&mut self, image: &ImageRef) {
        if let Some(index) = self.zoomable.index_of(image) {
            self.zoomable.open_at(index, &mut self.lightbox);
        }
    }

    /// Images that should be resident this frame: everything in or near the
    /// viewport, plus the one the lightbox shows.
    pub fn wanted_images(&self) -> Vec<ImageRef> {
        let offset = self.scroll.offset();
        let mut wanted = Vec::new();
        for section in &self.layout.sections {
            if !section.near_viewport(offset, self.height, LAZY_LOAD_MARGIN) {
                continue;
            }
            match &section.body {
                SectionBody::Hero { image, .. } => wanted.push(image.clone()),
                SectionBody::Gallery { carousel, .. } => {
                    wanted.extend(self.carousels[*carousel].images());
                }
                SectionBody::Grid { tiles } => {
                    wanted.extend(tiles.iter().map(|(image, _)| image.clone()));
                }
            }
        }
        if let Some(view) = self.lightbox.view() {
            wanted.push(view.source.clone());
        }
        wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::page::{Section, SectionKind};
    use std::path::PathBuf;

    fn page() -> Page {
        let refs = |names: &[&str]| names.iter().map(ImageRef::new).collect::<Vec<_>>();
        Page {
            root: PathBuf::from("."),
            hero: Some(ImageRef::new("hero.jpg")),
            sections: vec![
                Section {
                    id: "lf".to_string(),
                    kind: SectionKind::Gallery,
                    images: refs(&["p1.jpg", "p2.jpg", "p3.jpg"]),
                },
                Section {
                    id: "about".to_string(),
                    kind: SectionKind::About,
                    images: refs(&["me.png"]),
                },
            ],
        }
    }

    fn app() -> App {
        let ids = vec!["lf".to_string(), "hf".to_string()];
        App::new(page(), &ids, PasscodeGate::unlocked(), 1280.0, 800.0)
    }

    fn track_rect(app: &App) -> Rectangle {
        match &app.layout.section("lf").unwrap().body {
            SectionBody::Gallery { track, .. } => *track,
            _ => panic!("lf should be a gallery"),
        }
    }

    fn scroll_to_gallery(app: &mut App) {
        let top = app.layout.section("lf").unwrap().top;
        app.scroll.scroll_by(top - NAV_HEIGHT);
    }

    fn press_release(app: &mut App, from: Vector2, to: Vector2) {
        let press = FrameInput { mouse: from, pressed: true, ..FrameInput::default() };
        app.update(&press, 0.0);
        let release = FrameInput { mouse: to, released: true, ..FrameInput::default() };
        app.update(&release, 0.0);
    }

    fn on_screen(app: &App, rect: Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5 - app.scroll.offset())
    }

    #[test]
    fn test_absent_carousel_is_skipped() {
        let app = app();
        assert_eq!(app.carousels.len(), 1);
        assert_eq!(app.carousels[0].id(), "lf");
        assert_eq!(app.state(), ViewerState::Browsing);
    }

    #[test]
    fn test_swipe_on_track_advances() {
        let mut app = app();
        scroll_to_gallery(&mut app);
        let start = on_screen(&app, track_rect(&app));
        press_release(&mut app, start, Vector2::new(start.x - 51.0, start.y));
        assert_eq!(app.carousels[0].current_index(), 1);
        assert!(!app.lightbox.is_open());

        press_release(&mut app, start, Vector2::new(start.x - 50.0, start.y));
        assert_eq!(app.carousels[0].current_index(), 1);
        // Short drag counts as a click on the current image
        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.view().unwrap().counter, "2 / 3");
        assert_eq!(app.state(), ViewerState::Zoomed);
        assert!(app.scroll_locked());
    }

    #[test]
    fn test_lightbox_keys_then_escape() {
        let mut app = app();
        scroll_to_gallery(&mut app);
        let point = on_screen(&app, track_rect(&app));
        press_release(&mut app, point, point);
        assert_eq!(app.lightbox.current_index(), 0);

        let keys = FrameInput { keys: vec![Key::ArrowRight, Key::ArrowRight, Key::ArrowRight], ..FrameInput::default() };
        app.update(&keys, 0.0);
        assert_eq!(app.lightbox.current_index(), 2);

        let escape = FrameInput { keys: vec![Key::Escape], ..FrameInput::default() };
        app.update(&escape, 0.0);
        assert_eq!(app.state(), ViewerState::Browsing);
        assert!(!app.scroll_locked());

        // Carousel position is untouched by the lightbox session
        assert_eq!(app.carousels[0].current_index(), 0);
    }

    #[test]
    fn test_hero_click_zooms_page_images() {
        let mut app = app();
        let hero = Vector2::new(100.0, NAV_HEIGHT + 100.0);
        press_release(&mut app, hero, hero);

        let view = app.lightbox.view().unwrap();
        assert_eq!(view.source, &ImageRef::new("hero.jpg"));
        assert_eq!(view.counter, "1 / 2");
    }

    #[test]
    fn test_wheel_is_ignored_while_locked() {
        let ids = vec!["lf".to_string()];
        let gate = PasscodeGate::new(DEFAULT_PASSCODE_HASH).unwrap();
        let mut app = App::new(page(), &ids, gate, 1280.0, 800.0);
        assert_eq!(app.state(), ViewerState::Locked);

        let wheel = FrameInput { wheel: -3.0, ..FrameInput::default() };
        app.update(&wheel, 0.0);
        assert_eq!(app.scroll.offset(), 0.0);

        let typed = FrameInput { typed: "open sesame".chars().collect(), keys: vec![Key::Enter], ..FrameInput::default() };
        app.update(&typed, 0.0);
        assert_eq!(app.state(), ViewerState::Browsing);

        app.update(&wheel, 0.0);
        assert_eq!(app.scroll.offset(), 3.0 * WHEEL_SCROLL_STEP);
    }

    #[test]
    fn test_cursor_grows_over_clickables() {
        let mut app = app();
        let over_nav = FrameInput { mouse: Vector2::new(1.0, 1.0), ..FrameInput::default() };
        app.update(&over_nav, 0.0);
        assert!(!app.cursor.is_hovering());

        let over_hero = FrameInput { mouse: Vector2::new(100.0, NAV_HEIGHT + 100.0), ..FrameInput::default() };
        app.update(&over_hero, CURSOR_DURATION);
        assert!(app.cursor.is_hovering());
        assert_eq!(app.cursor.radius(), CURSOR_RADIUS * CURSOR_HOVER_SCALE);
    }

    #[test]
    fn test_progress_and_fade_follow_frames() {
        let mut app = app();
        assert_eq!(app.fade.opacity(), 0.0);
        for _ in 0..60 {
            app.update(&FrameInput::default(), 1.0 / 60.0);
        }
        assert_eq!(app.fade.opacity(), 1.0);
        assert_eq!(app.progress.scale(), 0.0);

        let max = app.layout.height - app.height;
        app.scroll.scroll_by(max);
        app.update(&FrameInput::default(), PROGRESS_DURATION);
        assert_eq!(app.progress.scale(), 1.0);
    }

    #[test]
    fn test_wanted_images_follow_viewport() {
        let app = app();
        let wanted = app.wanted_images();
        assert!(wanted.contains(&ImageRef::new("hero.jpg")));
        assert!(!wanted.contains(&ImageRef::new("me.png")));
    }
}
