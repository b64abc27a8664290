use tracing::warn;

use crate::lightbox::Lightbox;
use crate::page::{ImageRef, Page, SectionKind};

/// Every image outside the galleries that opens in the lightbox: the hero,
/// the inline project images, then the about images, as one flat list.
#[derive(Debug, Default)]
pub struct ZoomableImages {
    images: Vec<ImageRef>,
}

impl ZoomableImages {
    pub fn collect(page: &Page) -> Self {
        let inline = page
            .sections
            .iter()
            .filter(|s| s.kind == SectionKind::Inline)
            .flat_map(|s| s.images.iter());
        let about = page
            .sections
            .iter()
            .filter(|s| s.kind == SectionKind::About)
            .flat_map(|s| s.images.iter());

        let images = page.hero.iter().chain(inline).chain(about).cloned().collect();
        Self { images }
    }

    /// Position of `image` in the flat list.
    pub fn index_of(&self, image: &ImageRef) -> Option<usize> {
        self.images.iter().position(|i| i == image)
    }

    pub fn open_at(&self, index: usize, lightbox: &mut Lightbox) {
        if let Err(e) = lightbox.open(self.images.clone(), index) {
            warn!("ignoring zoom request: {}", e);
        }
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }
}
