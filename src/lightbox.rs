use tracing::debug;

use crate::error::LightboxError;
use crate::input::Key;
use crate::page::ImageRef;

/// Parts of the full-screen overlay that react to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    Backdrop,
    Image,
    Close,
    Prev,
    Next,
}

/// What the overlay shows for the current image.
#[derive(Debug, PartialEq)]
pub struct LightboxView<'a> {
    pub source: &'a ImageRef,
    pub counter: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// The page-wide full-screen viewer.
///
/// One instance is owned by the application and lent to every gallery that
/// wants to show an image. Each `open` replaces the previous session.
#[derive(Debug, Default)]
pub struct Lightbox {
    images: Vec<ImageRef>,
    current_index: usize,
    is_open: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `images` starting at `start_index`.
    ///
    /// The list must be non-empty and the index must fall inside it; a rejected
    /// request leaves the viewer untouched.
    pub fn open(&mut self, images: Vec<ImageRef>, start_index: usize) -> Result<(), LightboxError> {
        if images.is_empty() {
            return Err(LightboxError::Empty);
        }
        if start_index >= images.len() {
            return Err(LightboxError::StartOutOfRange {
                index: start_index,
                len: images.len(),
            });
        }
        debug!(images = images.len(), start_index, "opening lightbox");
        self.images = images;
        self.current_index = start_index;
        self.is_open = true;
        Ok(())
    }

    /// Hide the viewer. The image list is kept until the next `open`.
    pub fn close(&mut self) {
        debug!("closing lightbox");
        self.is_open = false;
    }

    pub fn prev_image(&mut self) {
        if self.is_open && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    pub fn next_image(&mut self) {
        if self.is_open && self.current_index + 1 < self.images.len() {
            self.current_index += 1;
        }
    }

    /// Global keyboard shortcuts. Returns whether the key was consumed, which
    /// only happens while the viewer is open.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev_image(),
            Key::ArrowRight => self.next_image(),
            _ => return false,
        }
        true
    }

    pub fn handle_click(&mut self, target: LightboxTarget) {
        match target {
            LightboxTarget::Backdrop | LightboxTarget::Close => self.close(),
            LightboxTarget::Prev => self.prev_image(),
            LightboxTarget::Next => self.next_image(),
            LightboxTarget::Image => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Background scrolling is suspended while the viewer is visible.
    pub fn locks_scroll(&self) -> bool {
        self.is_open
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[cfg(test)]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn view(&self) -> Option<LightboxView<'_>> {
        if !self.is_open {
            return None;
        }
        let source = self.images.get(self.current_index)?;
        Some(LightboxView {
            source,
            counter: format!("{} / {}", self.current_index + 1, self.images.len()),
            prev_disabled: self.current_index == 0,
            next_disabled: self.current_index + 1 == self.images.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().map(ImageRef::new).collect()
    }

    #[test]
    fn test_open_shows_start_image_and_counter() {
        let mut lightbox = Lightbox::new();
        lightbox.open(refs(&["A", "B", "C"]), 1).unwrap();

        let view = lightbox.view().unwrap();
        assert_eq!(view.source, &ImageRef::new("B"));
        assert_eq!(view.counter, "2 / 3");
        assert!(!view.prev_disabled);
        assert!(!view.next_disabled);
        assert!(lightbox.locks_scroll());
    }

    #[test]
    fn test_next_clamps_at_last_image() {
        let mut lightbox = Lightbox::new();
        lightbox.open(refs(&["A", "B", "C"]), 2).unwrap();
        for _ in 0..5 {
            lightbox.next_image();
        }
        assert_eq!(lightbox.current_index(), 2);
        assert!(lightbox.view().unwrap().next_disabled);

        lightbox.prev_image();
        lightbox.prev_image();
        lightbox.prev_image();
        assert_eq!(lightbox.current_index(), 0);
        assert!(lightbox.view().unwrap().prev_disabled);
    }

    #[test]
    fn test_rejected_open_keeps_previous_session() {
        let mut lightbox = Lightbox::new();
        lightbox.open(refs(&["A", "B"]), 1).unwrap();

        assert_eq!(
            lightbox.open(refs(&["X"]), 3),
            Err(LightboxError::StartOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(lightbox.open(Vec::new(), 0), Err(LightboxError::Empty));

        assert!(lightbox.is_open());
        assert_eq!(lightbox.view().unwrap().source, &ImageRef::new("B"));
    }

    #[test]
    fn test_last_open_wins() {
        let mut lightbox = Lightbox::new();
        lightbox.open(refs(&["A", "B"]), 1).unwrap();
        lightbox.open(refs(&["X", "Y", "Z"]), 0).unwrap();

        let view = lightbox.view().unwrap();
        assert_eq!(view.source, &ImageRef::new("X"));
        assert_eq!(view.counter, "1 / 3");
    }

    #[test]
    fn test_keys_are_inert_while_closed() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.handle_key(Key::Escape));
        assert!(!lightbox.handle_key(Key::ArrowRight));
        assert!(!lightbox.is_open());

        lightbox.open(refs(&["A", "B"]), 0).unwrap();
        lightbox.close();
        assert!(!lightbox.handle_key(Key::ArrowRight));
        lightbox.next_image();
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn test_escape_closes_once() {
        let mut lightbox = Lightbox::new();
        lightbox.open(refs(&["A", "B"]), 0).unwrap();

        assert!(lightbox.handle_key(Key::ArrowRight));
        assert_eq!(lightbox.current_index(), 1);
        assert!(lightbox.handle_key(Key::Escape));
        assert!(!lightbox.is_open());
        assert!(!lightbox.locks_scroll());
        assert!(!lightbox.handle_key(Key::Escape));
        assert!(lightbox.view().is_none());
        assert_eq!(lightbox.images().len(), 2);
    }

    #[test]
    fn test_click_targets() {
        let mut lightbox = Lightbox::new();
        lightbox.open(refs(&["A", "B", "C"]), 0).unwrap();

        lightbox.handle_click(LightboxTarget::Next);
        lightbox.handle_click(LightboxTarget::Image);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 1);

        lightbox.handle_click(LightboxTarget::Prev);
        assert_eq!(lightbox.current_index(), 0);

        lightbox.handle_click(LightboxTarget::Backdrop);
        assert!(!lightbox.is_open());

        lightbox.open(refs(&["A"]), 0).unwrap();
        lightbox.handle_click(LightboxTarget::Close);
        assert!(!lightbox.is_open());
    }
}
