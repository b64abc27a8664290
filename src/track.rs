use raylib::prelude::*;

use crate::constants::TRACK_ANIMATION_DURATION;

/// Drawn position of a carousel strip, easing toward the offset the carousel
/// last rendered. Offsets are in percent of one frame.
pub struct TrackMotion {
    position: f32,
    target: f32,

    animation_timer: f32,
    tween: Option<ease::Tween>,
}

impl TrackMotion {
    pub fn new(offset: i32) -> Self {
        Self {
            position: offset as f32,
            target: offset as f32,
            animation_timer: 0.0,
            tween: None,
        }
    }

    pub fn update(&mut self, dt: f32, offset: i32) {
        let offset = offset as f32;
        if offset != self.target {
            self.target = offset;
            self.animation_timer = 0.0;
            self.tween = Some(ease::Tween::new(ease::cubic_out, self.position, offset, TRACK_ANIMATION_DURATION));
        }

        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.position = tween.apply(dt);
        self.animation_timer += dt;
        if self.animation_timer >= TRACK_ANIMATION_DURATION {
            self.tween = None;
            self.position = self.target;
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }
}
