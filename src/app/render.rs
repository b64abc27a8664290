use raylib::prelude::*;

use crate::constants::*;
use crate::effects::{CardTilt, magnetic_offset};
use crate::layout::{GateLayout, LightboxLayout, NavLayout, SectionBody, SectionLayout, text_width};
use crate::page::ImageRef;
use crate::state::ViewerState;
use crate::texture_loader::TextureCache;

use super::App;

const BACKGROUND: Color = Color::new(250, 250, 252, 255);
const INK: Color = Color::new(28, 28, 36, 255);
const MUTED: Color = Color::new(110, 110, 124, 255);
const ACCENT: Color = Color::new(160, 100, 255, 255);
const PLACEHOLDER: Color = Color::new(222, 222, 230, 255);
const ERROR: Color = Color::new(220, 38, 38, 255);

#[derive(Clone, Copy)]
enum Fit {
    Contain,
    Cover,
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

/// Draw `texture` into `dest`, either letterboxed or cropped to fill.
fn draw_image(d: &mut impl RaylibDraw, texture: &Texture2D, dest: Rectangle, fit: Fit, alpha: f32) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return;
    }

    let (source, target) = match fit {
        Fit::Contain => {
            let scale = (dest.width / tex_width).min(dest.height / tex_height);
            let (w, h) = (tex_width * scale, tex_height * scale);
            (
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                Rectangle::new(dest.x + (dest.width - w) * 0.5, dest.y + (dest.height - h) * 0.5, w, h),
            )
        }
        Fit::Cover => {
            let scale = (dest.width / tex_width).max(dest.height / tex_height);
            let (w, h) = (dest.width / scale, dest.height / scale);
            (
                Rectangle::new((tex_width - w) * 0.5, (tex_height - h) * 0.5, w, h),
                dest,
            )
        }
    };

    d.draw_texture_pro(texture, source, target, Vector2::zero(), 0.0, with_alpha(Color::WHITE, alpha));
}

fn draw_slot(d: &mut impl RaylibDraw, textures: &TextureCache, image: &ImageRef, dest: Rectangle, fit: Fit, alpha: f32) {
    match textures.get(image) {
        Some(texture) => draw_image(d, texture, dest, fit, alpha),
        None => d.draw_rectangle_rec(dest, with_alpha(PLACEHOLDER, alpha)),
    }
}

fn draw_button(d: &mut impl RaylibDraw, rect: Rectangle, label: &str, disabled: bool, alpha: f32) {
    let alpha = if disabled { alpha * 0.3 } else { alpha };
    d.draw_rectangle_rec(rect, with_alpha(INK, alpha * 0.85));
    let w = text_width(label, 24);
    d.draw_text(
        label,
        (rect.x + (rect.width - w) * 0.5) as i32,
        (rect.y + (rect.height - 24.0) * 0.5) as i32,
        24,
        with_alpha(Color::WHITE, alpha),
    );
}

fn shifted(rect: Rectangle, dy: f32) -> Rectangle {
    Rectangle::new(rect.x, rect.y + dy, rect.width, rect.height)
}

fn translated(rect: Rectangle, by: Vector2) -> Rectangle {
    Rectangle::new(rect.x + by.x, rect.y + by.y, rect.width, rect.height)
}

impl App {
    pub fn draw(&self, d: &mut RaylibDrawHandle, textures: &TextureCache) {
        d.clear_background(BACKGROUND);

        let scroll = self.scroll.offset();
        for (i, section) in self.layout.sections.iter().enumerate() {
            if !section.near_viewport(scroll, self.height, 0.0) {
                continue;
            }
            let (alpha, reveal_offset) = self.reveal.appearance(i);
            self.draw_section(d, textures, section, reveal_offset - scroll, alpha);
        }

        self.draw_nav(d);

        if let Some(view) = self.lightbox.view() {
            let layout = LightboxLayout::compute(self.width, self.height);
            d.draw_rectangle(0, 0, self.width as i32, self.height as i32, Color::new(0, 0, 0, 230));
            draw_slot(d, textures, view.source, layout.image, Fit::Contain, 1.0);
            draw_button(d, layout.close, "X", false, 1.0);
            draw_button(d, layout.prev, "<", view.prev_disabled, 1.0);
            draw_button(d, layout.next, ">", view.next_disabled, 1.0);
            let w = text_width(&view.counter, 20);
            d.draw_text(&view.counter, ((self.width - w) * 0.5) as i32, layout.counter_y as i32, 20, Color::WHITE);
        }

        if !self.gate.is_unlocked() {
            self.draw_gate(d);
        }

        let bar_width = (self.width * self.progress.scale()) as i32;
        d.draw_rectangle_gradient_h(0, 0, bar_width, PROGRESS_HEIGHT, ACCENT, INK);

        let fade = 1.0 - self.fade.opacity();
        if fade > 0.0 {
            d.draw_rectangle(0, 0, self.width as i32, self.height as i32, with_alpha(BACKGROUND, fade));
        }

        let cursor = self.cursor.position();
        let color = if self.cursor.is_hovering() { ACCENT } else { INK };
        d.draw_circle_lines(cursor.x as i32, cursor.y as i32, self.cursor.radius(), color);
    }

    /// Pointer position when it may hover page content.
    fn page_pointer(&self) -> Option<Vector2> {
        let pointer = self.cursor.position();
        (self.state() == ViewerState::Browsing && pointer.y >= NAV_HEIGHT).then_some(pointer)
    }

    /// A hovered button drifts toward the pointer.
    fn pulled(&self, rect: Rectangle) -> Rectangle {
        match self.page_pointer() {
            Some(pointer) if rect.check_collision_point_rec(pointer) => translated(rect, magnetic_offset(rect, pointer)),
            _ => rect,
        }
    }

    /// A hovered project card tilts toward the pointer and lifts.
    fn tilted(&self, rect: Rectangle) -> Rectangle {
        match self.page_pointer() {
            Some(pointer) if rect.check_collision_point_rec(pointer) => CardTilt::at(rect, pointer).project(rect),
            _ => rect,
        }
    }

    fn draw_section(&self, d: &mut RaylibDrawHandle, textures: &TextureCache, section: &SectionLayout, dy: f32, alpha: f32) {
        match &section.body {
            SectionBody::Hero { image, rect } => {
                // The hero scrolls slower than the page; its own reveal offset is not applied
                let rect = shifted(*rect, self.parallax.offset() - self.scroll.offset());
                draw_slot(d, textures, image, rect, Fit::Cover, 1.0);
            }
            SectionBody::Gallery { carousel, track, prev, next, dots } => {
                let carousel_state = &self.carousels[*carousel];
                d.draw_text(carousel_state.id(), track.x as i32, (section.top + dy + 20.0) as i32, 28, with_alpha(INK, alpha));

                let track = shifted(*track, dy);
                let position = self.tracks[*carousel].position();
                {
                    let mut clip = d.begin_scissor_mode(track.x as i32, track.y as i32, track.width as i32, track.height as i32);
                    clip.draw_rectangle_rec(track, with_alpha(PLACEHOLDER, alpha));
                    if carousel_state.is_empty() {
                        let w = text_width("No images", 20);
                        let (x, y) = (track.x + (track.width - w) * 0.5, track.y + (track.height - 20.0) * 0.5);
                        clip.draw_text("No images", x as i32, y as i32, 20, with_alpha(MUTED, alpha));
                    }
                    for (i, slide) in carousel_state.slides().iter().enumerate() {
                        let x = track.x + (i as f32 + position / 100.0) * track.width;
                        if x + track.width < track.x || x > track.x + track.width {
                            continue;
                        }
                        let dest = Rectangle::new(x, track.y, track.width, track.height);
                        draw_slot(&mut clip, textures, &slide.image, dest, Fit::Contain, alpha);
                    }
                }

                draw_button(d, self.pulled(shifted(*prev, dy)), "<", carousel_state.prev_disabled(), alpha);
                draw_button(d, self.pulled(shifted(*next, dy)), ">", carousel_state.next_disabled(), alpha);

                for (slide, dot) in carousel_state.slides().iter().zip(dots) {
                    let dot = shifted(*dot, dy);
                    let center = Vector2::new(dot.x + dot.width * 0.5, dot.y + dot.height * 0.5);
                    if slide.dot.active {
                        d.draw_circle_v(center, 6.0, with_alpha(ACCENT, alpha));
                    } else {
                        d.draw_circle_lines(center.x as i32, center.y as i32, 6.0, with_alpha(MUTED, alpha));
                    }
                }
            }
            SectionBody::Grid { tiles } => {
                let x = tiles.first().map_or(32.0, |(_, r)| r.x);
                d.draw_text(&section.id, x as i32, (section.top + dy + 20.0) as i32, 28, with_alpha(INK, alpha));
                for (image, rect) in tiles {
                    draw_slot(d, textures, image, self.tilted(shifted(*rect, dy)), Fit::Cover, alpha);
                }
            }
        }
    }

    fn draw_nav(&self, d: &mut RaylibDrawHandle) {
        let background = if self.nav.is_scrolled() {
            Color::new(255, 255, 255, 245)
        } else {
            Color::new(255, 255, 255, 170)
        };
        d.draw_rectangle(0, 0, self.width as i32, NAV_HEIGHT as i32, background);
        if self.nav.is_scrolled() {
            d.draw_line(0, NAV_HEIGHT as i32, self.width as i32, NAV_HEIGHT as i32, PLACEHOLDER);
        }
        let root_name = self
            .page
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Portfolio".to_string());
        d.draw_text(&root_name, 24, 20, 24, INK);

        let layout = NavLayout::compute(self.nav.links(), self.width, self.nav.is_menu_open());
        if layout.collapsed {
            let label = if self.nav.is_menu_open() { "X" } else { "=" };
            draw_button(d, layout.toggle, label, false, 1.0);
        }
        for (id, rect) in &layout.links {
            if layout.collapsed {
                d.draw_rectangle_rec(*rect, Color::WHITE);
            }
            let active = self.nav.active() == Some(id.as_str());
            let color = if active { ACCENT } else { INK };
            d.draw_text(id, (rect.x + 12.0) as i32, (rect.y + (rect.height - 20.0) * 0.5) as i32, 20, color);
            if active {
                d.draw_rectangle((rect.x + 12.0) as i32, (rect.y + rect.height - 12.0) as i32, (rect.width - 24.0) as i32, 2, ACCENT);
            }
        }
    }

    fn draw_gate(&self, d: &mut RaylibDrawHandle) {
        let layout = GateLayout::compute(self.width, self.height);
        let panel = layout.panel;
        d.draw_rectangle(0, 0, self.width as i32, self.height as i32, BACKGROUND);
        d.draw_rectangle_rec(panel, Color::WHITE);
        d.draw_rectangle_lines_ex(panel, 1.0, PLACEHOLDER);

        d.draw_text("Protected Content", (panel.x + 24.0) as i32, (panel.y + 24.0) as i32, 24, INK);
        d.draw_text(
            "Please enter the passcode to view this case study.",
            (panel.x + 24.0) as i32,
            (panel.y + 64.0) as i32,
            14,
            MUTED,
        );

        let input = layout.input;
        let input = Rectangle::new(input.x + self.gate.shake_offset(), input.y, input.width, input.height);
        d.draw_rectangle_lines_ex(input, 1.0, if self.gate.is_shaking() { ERROR } else { MUTED });
        let masked = self.gate.masked_input();
        let (text, color) = if masked.is_empty() { ("Enter passcode", MUTED) } else { (masked.as_str(), INK) };
        d.draw_text(text, (input.x + 12.0) as i32, (input.y + 12.0) as i32, 20, color);

        if let Some(error) = self.gate.error() {
            d.draw_text(error, (panel.x + 24.0) as i32, (input.y + input.height + 12.0) as i32, 14, ERROR);
        }

        draw_button(d, layout.unlock, "Unlock", false, 1.0);
    }
}
