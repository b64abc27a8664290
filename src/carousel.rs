//! Gallery carousel: a strip of images moved one frame at a time, with one
//! indicator dot per image.

use tracing::{debug, warn};

use crate::gesture::{Swipe, SwipeDirection};
use crate::lightbox::Lightbox;
use crate::page::{ImageRef, Page};

/// Small control standing for one position of the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorDot {
    pub label: String,
    pub active: bool,
}

/// An image paired with its dot, so position `i` of the strip and dot `i`
/// cannot drift apart.
#[derive(Debug, Clone)]
pub struct Slide {
    pub image: ImageRef,
    pub dot: IndicatorDot,
}

#[derive(Debug)]
pub struct Carousel {
    id: String,
    slides: Vec<Slide>,
    current_index: usize,

    track_offset: i32,
    prev_disabled: bool,
    next_disabled: bool,
}

impl Carousel {
    /// Build the carousel for gallery `id`, or `None` when the page has no
    /// such track.
    pub fn mount(page: &Page, id: &str) -> Option<Self> {
        let track = page.track(id)?;
        let mut carousel = Self::new(id, track.to_vec());
        carousel.render();
        debug!(carousel = id, slides = carousel.len(), "mounted carousel");
        Some(carousel)
    }

    fn new(id: &str, images: Vec<ImageRef>) -> Self {
        let slides = images
            .into_iter()
            .enumerate()
            .map(|(i, image)| Slide {
                image,
                dot: IndicatorDot {
                    label: format!("Go to slide {}", i + 1),
                    active: false,
                },
            })
            .collect();

        Self {
            id: id.to_string(),
            slides,
            current_index: 0,
            track_offset: 0,
            prev_disabled: true,
            next_disabled: true,
        }
    }

    pub fn prev(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.render();
        }
    }

    pub fn next(&mut self) {
        if self.current_index + 1 < self.slides.len() {
            self.current_index += 1;
            self.render();
        }
    }

    /// Jump to slide `index`; out-of-range targets are ignored.
    pub fn go_to_slide(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current_index = index;
            self.render();
        }
    }

    /// Hand the whole strip to the lightbox, starting at the clicked image.
    pub fn handle_image_click(&self, index: usize, lightbox: &mut Lightbox) {
        if let Err(e) = lightbox.open(self.images(), index) {
            warn!(carousel = %self.id, "ignoring image click: {}", e);
        }
    }

    pub fn handle_swipe(&mut self, swipe: Swipe) {
        match swipe.direction() {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Prev) => self.prev(),
            None => {}
        }
    }

    fn render(&mut self) {
        // An empty strip keeps both controls disabled
        let last = self.slides.len().saturating_sub(1);

        self.track_offset = -(self.current_index as i32) * 100;
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.dot.active = i == self.current_index;
        }
        self.prev_disabled = self.current_index == 0;
        self.next_disabled = self.current_index == last;

        debug!(carousel = %self.id, index = self.current_index, "rendered carousel");
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn images(&self) -> Vec<ImageRef> {
        self.slides.iter().map(|s| s.image.clone()).collect()
    }

    /// Horizontal translation of the strip, in percent of one frame.
    pub fn track_offset(&self) -> i32 {
        self.track_offset
    }

    pub fn prev_disabled(&self) -> bool {
        self.prev_disabled
    }

    pub fn next_disabled(&self) -> bool {
        self.next_disabled
    }
}
