//! Decoration driven by scrolling and the pointer: page scrolling, hero
//! parallax, section fade-in, the progress bar, the launch fade, the cursor
//! ring and hover motion of buttons and cards.

use raylib::prelude::*;

use crate::constants::*;

/// Vertical scroll position of the page.
pub struct PageScroll {
    offset: f32,
    max: f32,

    animation_timer: f32,
    tween: Option<ease::Tween>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max: 0.0,
            animation_timer: 0.0,
            tween: None,
        }
    }

    pub fn set_extent(&mut self, content_height: f32, viewport_height: f32) {
        self.max = (content_height - viewport_height).max(0.0);
        self.offset = self.offset.min(self.max);
    }

    /// Direct scroll (mouse wheel); cancels a smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: f32) {
        self.tween = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    /// Ease toward `target` over the next frames.
    pub fn scroll_to(&mut self, target: f32) {
        let target = target.clamp(0.0, self.max);
        self.animation_timer = 0.0;
        self.tween = Some(ease::Tween::new(ease::cubic_in_out, self.offset, target, SMOOTH_SCROLL_DURATION));
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.offset = tween.apply(dt).clamp(0.0, self.max);
        self.animation_timer += dt;
        if self.animation_timer >= SMOOTH_SCROLL_DURATION {
            self.tween = None;
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

/// Hero offset that lags behind the page while the hero is on screen.
#[derive(Debug, Default)]
pub struct Parallax {
    offset: f32,
}

impl Parallax {
    pub fn on_scroll(&mut self, scroll: f32, viewport_height: f32) {
        if scroll < viewport_height {
            self.offset = scroll * PARALLAX_SPEED;
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealState {
    Hidden,
    Revealing { elapsed: f32, delay: f32 },
    Shown,
}

/// Fade-in of page sections the first time they scroll into view.
#[derive(Debug, Default)]
pub struct Reveal {
    states: Vec<RevealState>,
}

impl Reveal {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
        }
    }

    /// `visible[i]` tells whether section `i` intersects the viewport this
    /// frame. Sections entering together are staggered.
    pub fn update(&mut self, dt: f32, visible: &[bool]) {
        if self.states.len() != visible.len() {
            self.states.resize(visible.len(), RevealState::Hidden);
        }

        let mut entering = 0;
        for (state, &is_visible) in self.states.iter_mut().zip(visible) {
            *state = match *state {
                RevealState::Hidden if is_visible => {
                    let delay = entering as f32 * REVEAL_STAGGER;
                    entering += 1;
                    RevealState::Revealing { elapsed: 0.0, delay }
                }
                RevealState::Revealing { elapsed, delay } => {
                    let elapsed = elapsed + dt;
                    if elapsed >= delay + REVEAL_DURATION {
                        RevealState::Shown
                    } else {
                        RevealState::Revealing { elapsed, delay }
                    }
                }
                other => other,
            };
        }
    }

    /// Opacity in `[0, 1]` and downward offset of section `i`.
    pub fn appearance(&self, i: usize) -> (f32, f32) {
        let progress = match self.states.get(i) {
            Some(RevealState::Hidden) => 0.0,
            Some(RevealState::Revealing { elapsed, delay }) => ((elapsed - delay) / REVEAL_DURATION).clamp(0.0, 1.0),
            Some(RevealState::Shown) | None => 1.0,
        };
        let eased = ease::cubic_out(progress, 0.0, 1.0, 1.0);
        (eased, (1.0 - eased) * REVEAL_OFFSET)
    }
}

/// A value easing toward the latest target it was given.
struct Eased {
    value: f32,
    target: f32,
    duration: f32,

    animation_timer: f32,
    tween: Option<ease::Tween>,
}

impl Eased {
    fn new(value: f32, duration: f32) -> Self {
        Self {
            value,
            target: value,
            duration,
            animation_timer: 0.0,
            tween: None,
        }
    }

    fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.animation_timer = 0.0;
            self.tween = Some(ease::Tween::new(ease::cubic_out, self.value, target, self.duration));
        }
    }

    fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.value = tween.apply(dt);
        self.animation_timer += dt;
        if self.animation_timer >= self.duration {
            self.tween = None;
            self.value = self.target;
        }
    }
}

/// Share of the scrollable distance already scrolled, in `[0, 1]`. A page no
/// taller than the viewport has nothing to scroll and reports 0.
pub fn progress_ratio(scroll: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll / scrollable).clamp(0.0, 1.0)
}

/// Horizontal scale of the bar along the top edge.
pub struct ScrollProgress {
    scale: Eased,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self {
            scale: Eased::new(0.0, PROGRESS_DURATION),
        }
    }

    pub fn update(&mut self, dt: f32, scroll: f32, content_height: f32, viewport_height: f32) {
        self.scale.set_target(progress_ratio(scroll, content_height, viewport_height));
        self.scale.update(dt);
    }

    pub fn scale(&self) -> f32 {
        self.scale.value
    }
}

/// Opacity of the whole window right after launch.
pub struct PageFade {
    opacity: Eased,
}

impl PageFade {
    pub fn new() -> Self {
        let mut opacity = Eased::new(0.0, PAGE_FADE_DURATION);
        opacity.set_target(1.0);
        Self { opacity }
    }

    pub fn update(&mut self, dt: f32) {
        self.opacity.update(dt);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value
    }
}

/// Ring that follows the pointer and grows over anything clickable.
pub struct Cursor {
    position: Vector2,
    hovering: bool,
    scale: Eased,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            position: Vector2::zero(),
            hovering: false,
            scale: Eased::new(1.0, CURSOR_DURATION),
        }
    }

    pub fn update(&mut self, dt: f32, position: Vector2, hovering: bool) {
        self.position = position;
        self.hovering = hovering;
        self.scale.set_target(if hovering { CURSOR_HOVER_SCALE } else { 1.0 });
        self.scale.update(dt);
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn radius(&self) -> f32 {
        CURSOR_RADIUS * self.scale.value
    }
}

/// Offset of a hovered button pulled toward the pointer.
pub fn magnetic_offset(rect: Rectangle, pointer: Vector2) -> Vector2 {
    Vector2::new(
        (pointer.x - rect.x - rect.width * 0.5) * MAGNETIC_STRENGTH,
        (pointer.y - rect.y - rect.height * 0.5) * MAGNETIC_STRENGTH,
    )
}

/// Rotation of a hovered project card, in degrees, following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl CardTilt {
    pub fn at(rect: Rectangle, pointer: Vector2) -> Self {
        let x = pointer.x - rect.x;
        let y = pointer.y - rect.y;
        Self {
            rotate_x: (y - rect.height * 0.5) / TILT_DIVISOR,
            rotate_y: (rect.width * 0.5 - x) / TILT_DIVISOR,
        }
    }

    /// Flat outline of the tilted card, raised by the hover lift.
    pub fn project(&self, rect: Rectangle) -> Rectangle {
        let width = rect.width * self.rotate_y.to_radians().cos();
        let height = rect.height * self.rotate_x.to_radians().cos();
        Rectangle::new(
            rect.x + (rect.width - width) * 0.5,
            rect.y + (rect.height - height) * 0.5 - TILT_LIFT,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps_to_extent() {
        let mut scroll = PageScroll::new();
        scroll.set_extent(2000.0, 800.0);
        scroll.scroll_by(-100.0);
        assert_eq!(scroll.offset(), 0.0);
        scroll.scroll_by(5000.0);
        assert_eq!(scroll.offset(), 1200.0);

        scroll.set_extent(1000.0, 800.0);
        assert_eq!(scroll.offset(), 200.0);
    }

    #[test]
    fn test_smooth_scroll_lands_on_target() {
        let mut scroll = PageScroll::new();
        scroll.set_extent(3000.0, 800.0);
        scroll.scroll_to(900.0);
        assert!(scroll.is_animating());

        for _ in 0..60 {
            scroll.update(1.0 / 60.0);
        }
        assert!(!scroll.is_animating());
        assert!((scroll.offset() - 900.0).abs() < 1.0);
    }

    #[test]
    fn test_wheel_cancels_smooth_scroll() {
        let mut scroll = PageScroll::new();
        scroll.set_extent(3000.0, 800.0);
        scroll.scroll_to(900.0);
        scroll.scroll_by(10.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 10.0);
    }

    #[test]
    fn test_parallax_freezes_past_viewport() {
        let mut parallax = Parallax::default();
        parallax.on_scroll(100.0, 800.0);
        assert_eq!(parallax.offset(), 50.0);
        parallax.on_scroll(900.0, 800.0);
        assert_eq!(parallax.offset(), 50.0);
    }

    #[test]
    fn test_reveal_staggers_and_stays_shown() {
        let mut reveal = Reveal::new(3);
        assert_eq!(reveal.appearance(0), (0.0, REVEAL_OFFSET));

        reveal.update(0.0, &[true, true, false]);
        reveal.update(REVEAL_STAGGER, &[true, true, false]);
        let (first, _) = reveal.appearance(0);
        let (second, _) = reveal.appearance(1);
        assert!(first > 0.0);
        assert_eq!(second, 0.0);
        assert_eq!(reveal.appearance(2).0, 0.0);

        reveal.update(1.0, &[false, false, false]);
        assert_eq!(reveal.appearance(0), (1.0, 0.0));
        assert_eq!(reveal.appearance(1), (1.0, 0.0));
        assert_eq!(reveal.appearance(2).0, 0.0);
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_ratio(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(progress_ratio(1200.0, 2000.0, 800.0), 1.0);
        assert_eq!(progress_ratio(5000.0, 2000.0, 800.0), 1.0);
    }

    #[test]
    fn test_progress_ratio_without_overflow() {
        assert_eq!(progress_ratio(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_ratio(100.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_ratio(0.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_bar_eases_to_ratio() {
        let mut progress = ScrollProgress::new();
        progress.update(0.0, 600.0, 2000.0, 800.0);
        assert_eq!(progress.scale(), 0.0);
        progress.update(PROGRESS_DURATION, 600.0, 2000.0, 800.0);
        assert_eq!(progress.scale(), 0.5);
    }

    #[test]
    fn test_page_fade_reaches_full_opacity() {
        let mut fade = PageFade::new();
        assert_eq!(fade.opacity(), 0.0);

        fade.update(PAGE_FADE_DURATION * 0.5);
        let midway = fade.opacity();
        assert!(midway > 0.0 && midway < 1.0);

        for _ in 0..60 {
            fade.update(1.0 / 60.0);
        }
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn test_cursor_grows_over_targets() {
        let mut cursor = Cursor::new();
        cursor.update(0.0, Vector2::new(10.0, 20.0), false);
        assert_eq!(cursor.radius(), CURSOR_RADIUS);

        cursor.update(CURSOR_DURATION, Vector2::new(12.0, 20.0), true);
        assert!(cursor.is_hovering());
        assert_eq!(cursor.radius(), CURSOR_RADIUS * CURSOR_HOVER_SCALE);
        assert_eq!(cursor.position(), Vector2::new(12.0, 20.0));

        cursor.update(CURSOR_DURATION, Vector2::new(300.0, 20.0), false);
        assert_eq!(cursor.radius(), CURSOR_RADIUS);
    }

    #[test]
    fn test_magnetic_offset_follows_pointer() {
        let rect = Rectangle::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(magnetic_offset(rect, Vector2::new(50.0, 20.0)), Vector2::zero());
        assert_eq!(magnetic_offset(rect, Vector2::new(100.0, 40.0)), Vector2::new(5.0, 2.0));
    }

    #[test]
    fn test_card_tilt() {
        let rect = Rectangle::new(0.0, 0.0, 200.0, 100.0);

        let centered = CardTilt::at(rect, Vector2::new(100.0, 50.0));
        assert_eq!(centered, CardTilt { rotate_x: 0.0, rotate_y: 0.0 });
        let lifted = centered.project(rect);
        assert_eq!((lifted.width, lifted.height), (200.0, 100.0));
        assert_eq!(lifted.y, -TILT_LIFT);

        let corner = CardTilt::at(rect, Vector2::new(0.0, 0.0));
        assert_eq!(corner, CardTilt { rotate_x: -2.5, rotate_y: 5.0 });
        let projected = corner.project(rect);
        assert!(projected.width < 200.0 && projected.height < 100.0);
    }
}
