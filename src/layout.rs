//! Geometry of the page and its overlays, plus hit testing.
//!
//! Page rectangles are in page coordinates (y grows down from the top of the
//! document); overlay rectangles are in screen coordinates.

use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::lightbox::LightboxTarget;
use crate::page::{ImageRef, Page, SectionKind};

const SECTION_HEADER: f32 = 64.0;
const SECTION_PADDING: f32 = 32.0;
const TILE_SIZE: f32 = 240.0;
const TILE_GAP: f32 = 20.0;
const TRACK_MAX_WIDTH: f32 = 960.0;
const BUTTON_SIZE: f32 = 48.0;
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 24.0;
const NAV_LINK_FONT: i32 = 20;

pub const HERO_SECTION_ID: &str = "home";

#[derive(Debug, Clone)]
pub enum SectionBody {
    Hero {
        image: ImageRef,
        rect: Rectangle,
    },
    Gallery {
        carousel: usize,
        track: Rectangle,
        prev: Rectangle,
        next: Rectangle,
        dots: Vec<Rectangle>,
    },
    Grid {
        tiles: Vec<(ImageRef, Rectangle)>,
    },
}

#[derive(Debug, Clone)]
pub struct SectionLayout {
    pub id: String,
    pub top: f32,
    pub height: f32,
    pub body: SectionBody,
}

impl SectionLayout {
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }

    /// Whether the section is within `margin` of the visible part of the page.
    pub fn near_viewport(&self, scroll: f32, viewport_height: f32, margin: f32) -> bool {
        let view_top = scroll - margin;
        let view_bottom = scroll + viewport_height + margin;
        self.top < view_bottom && self.top + self.height > view_top
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    CarouselTrack(usize),
    CarouselPrev(usize),
    CarouselNext(usize),
    CarouselDot(usize, usize),
    Zoom(ImageRef),
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<SectionLayout>,
    pub height: f32,
}

impl PageLayout {
    pub fn compute(page: &Page, carousels: &[Carousel], width: f32, viewport_height: f32) -> Self {
        let mut sections = Vec::new();
        let mut y = NAV_HEIGHT;

        if let Some(hero) = &page.hero {
            let height = viewport_height * 0.75;
            sections.push(SectionLayout {
                id: HERO_SECTION_ID.to_string(),
                top: y,
                height,
                body: SectionBody::Hero {
                    image: hero.clone(),
                    rect: Rectangle::new(0.0, y, width, height),
                },
            });
            y += height;
        }

        for section in &page.sections {
            let carousel = carousels.iter().position(|c| c.id() == section.id);
            let (height, body) = match (section.kind, carousel) {
                (SectionKind::Gallery, Some(index)) => {
                    gallery_body(&carousels[index], index, y, width)
                }
                _ => grid_body(&section.images, y, width),
            };
            sections.push(SectionLayout {
                id: section.id.clone(),
                top: y,
                height,
                body,
            });
            y += height;
        }

        Self { sections, height: y }
    }

    #[cfg(test)]
    pub fn section(&self, id: &str) -> Option<&SectionLayout> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// What lies under `point` (page coordinates). The hero is drawn
    /// `hero_shift` lower than its section and under every later section, so
    /// it only catches points the other sections leave empty.
    pub fn hit(&self, point: Vector2, hero_shift: f32) -> Option<Hit> {
        let section = self.sections.iter().find(|s| s.contains(point.y));
        let hit = section.and_then(|section| match &section.body {
            SectionBody::Hero { .. } => None,
            SectionBody::Gallery { carousel, track, prev, next, dots } => {
                if prev.check_collision_point_rec(point) {
                    Some(Hit::CarouselPrev(*carousel))
                } else if next.check_collision_point_rec(point) {
                    Some(Hit::CarouselNext(*carousel))
                } else if track.check_collision_point_rec(point) {
                    Some(Hit::CarouselTrack(*carousel))
                } else {
                    dots.iter()
                        .position(|d| d.check_collision_point_rec(point))
                        .map(|i| Hit::CarouselDot(*carousel, i))
                }
            }
            SectionBody::Grid { tiles } => tiles
                .iter()
                .find(|(_, rect)| rect.check_collision_point_rec(point))
                .map(|(image, _)| Hit::Zoom(image.clone())),
        });
        hit.or_else(|| self.hero_hit(point, hero_shift))
    }

    fn hero_hit(&self, point: Vector2, hero_shift: f32) -> Option<Hit> {
        self.sections.iter().find_map(|s| match &s.body {
            SectionBody::Hero { image, rect } => {
                let drawn = Rectangle::new(rect.x, rect.y + hero_shift, rect.width, rect.height);
                drawn.check_collision_point_rec(point).then(|| Hit::Zoom(image.clone()))
            }
            _ => None,
        })
    }
}

fn gallery_body(carousel: &Carousel, index: usize, top: f32, width: f32) -> (f32, SectionBody) {
    let track_width = (width - 2.0 * (BUTTON_SIZE + SECTION_PADDING)).clamp(TILE_SIZE, TRACK_MAX_WIDTH);
    let track_height = track_width * 9.0 / 16.0;
    let track_x = (width - track_width) * 0.5;
    let track_y = top + SECTION_HEADER;
    let track = Rectangle::new(track_x, track_y, track_width, track_height);

    let button_y = track_y + (track_height - BUTTON_SIZE) * 0.5;
    let prev = Rectangle::new(track_x - BUTTON_SIZE - 8.0, button_y, BUTTON_SIZE, BUTTON_SIZE);
    let next = Rectangle::new(track_x + track_width + 8.0, button_y, BUTTON_SIZE, BUTTON_SIZE);

    let dots_y = track_y + track_height + SECTION_PADDING * 0.5;
    let dots_width = carousel.len() as f32 * DOT_SPACING;
    let dots_x = (width - dots_width) * 0.5;
    let dots = (0..carousel.len())
        .map(|i| {
            Rectangle::new(
                dots_x + i as f32 * DOT_SPACING,
                dots_y,
                DOT_SPACING,
                DOT_RADIUS * 3.0,
            )
        })
        .collect();

    let height = SECTION_HEADER + track_height + SECTION_PADDING * 2.0 + DOT_RADIUS * 3.0;
    (
        height,
        SectionBody::Gallery {
            carousel: index,
            track,
            prev,
            next,
            dots,
        },
    )
}

fn grid_body(images: &[ImageRef], top: f32, width: f32) -> (f32, SectionBody) {
    let columns = (((width - 2.0 * SECTION_PADDING + TILE_GAP) / (TILE_SIZE + TILE_GAP)) as usize).max(1);
    let rows = images.len().div_ceil(columns);
    let grid_width = columns as f32 * (TILE_SIZE + TILE_GAP) - TILE_GAP;
    let left = ((width - grid_width) * 0.5).max(0.0);

    let tiles = images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let (row, column) = (i / columns, i % columns);
            let rect = Rectangle::new(
                left + column as f32 * (TILE_SIZE + TILE_GAP),
                top + SECTION_HEADER + row as f32 * (TILE_SIZE + TILE_GAP),
                TILE_SIZE,
                TILE_SIZE,
            );
            (image.clone(), rect)
        })
        .collect();

    let height = SECTION_HEADER + rows as f32 * (TILE_SIZE + TILE_GAP) + SECTION_PADDING;
    (height, SectionBody::Grid { tiles })
}

/// Screen geometry of the lightbox overlay.
#[derive(Debug, Clone)]
pub struct LightboxLayout {
    pub image: Rectangle,
    pub close: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub counter_y: f32,
}

impl LightboxLayout {
    pub fn compute(width: f32, height: f32) -> Self {
        let image = Rectangle::new(width * 0.1, height * 0.08, width * 0.8, height * 0.8);
        let mid = (height - BUTTON_SIZE) * 0.5;
        Self {
            image,
            close: Rectangle::new(width - BUTTON_SIZE - 16.0, 16.0, BUTTON_SIZE, BUTTON_SIZE),
            prev: Rectangle::new(16.0, mid, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(width - BUTTON_SIZE - 16.0, mid, BUTTON_SIZE, BUTTON_SIZE),
            counter_y: height * 0.92,
        }
    }

    /// Anything outside the controls and the picture is backdrop.
    pub fn hit(&self, point: Vector2) -> LightboxTarget {
        if self.close.check_collision_point_rec(point) {
            LightboxTarget::Close
        } else if self.prev.check_collision_point_rec(point) {
            LightboxTarget::Prev
        } else if self.next.check_collision_point_rec(point) {
            LightboxTarget::Next
        } else if self.image.check_collision_point_rec(point) {
            LightboxTarget::Image
        } else {
            LightboxTarget::Backdrop
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavHit {
    Toggle,
    Link(String),
}

/// Screen geometry of the fixed navigation bar.
#[derive(Debug, Clone)]
pub struct NavLayout {
    pub collapsed: bool,
    pub toggle: Rectangle,
    pub links: Vec<(String, Rectangle)>,
}

impl NavLayout {
    pub fn compute(links: &[String], width: f32, menu_open: bool) -> Self {
        let collapsed = (width as i32) < NAV_COLLAPSE_WIDTH;
        let toggle = Rectangle::new(width - BUTTON_SIZE - 16.0, (NAV_HEIGHT - BUTTON_SIZE) * 0.5, BUTTON_SIZE, BUTTON_SIZE);

        let links = if !collapsed {
            let mut x = width - 16.0;
            let mut rects: Vec<_> = links
                .iter()
                .rev()
                .map(|id| {
                    let w = text_width(id, NAV_LINK_FONT) + 24.0;
                    x -= w;
                    (id.clone(), Rectangle::new(x, 0.0, w, NAV_HEIGHT))
                })
                .collect();
            rects.reverse();
            rects
        } else if menu_open {
            links
                .iter()
                .enumerate()
                .map(|(i, id)| (id.clone(), Rectangle::new(0.0, NAV_HEIGHT + i as f32 * NAV_HEIGHT, width, NAV_HEIGHT)))
                .collect()
        } else {
            Vec::new()
        };

        Self { collapsed, toggle, links }
    }

    pub fn hit(&self, point: Vector2) -> Option<NavHit> {
        if self.collapsed && self.toggle.check_collision_point_rec(point) {
            return Some(NavHit::Toggle);
        }
        self.links
            .iter()
            .find(|(_, rect)| rect.check_collision_point_rec(point))
            .map(|(id, _)| NavHit::Link(id.clone()))
    }

    /// Whether `point` is covered by the bar or its open menu.
    pub fn covers(&self, point: Vector2) -> bool {
        point.y < NAV_HEIGHT || self.links.iter().any(|(_, r)| r.check_collision_point_rec(point))
    }
}

/// Screen geometry of the passcode overlay.
#[derive(Debug, Clone)]
pub struct GateLayout {
    pub panel: Rectangle,
    pub input: Rectangle,
    pub unlock: Rectangle,
}

impl GateLayout {
    pub fn compute(width: f32, height: f32) -> Self {
        let panel = Rectangle::new((width - 420.0) * 0.5, (height - 280.0) * 0.5, 420.0, 280.0);
        Self {
            panel,
            input: Rectangle::new(panel.x + 24.0, panel.y + 110.0, panel.width - 48.0, 44.0),
            unlock: Rectangle::new(panel.x + 24.0, panel.y + 210.0, panel.width - 48.0, 44.0),
        }
    }
}

/// Rough width of `text` in the default raylib font.
pub fn text_width(text: &str, font_size: i32) -> f32 {
    text.chars().count() as f32 * font_size as f32 * 0.6
}
