use raylib::prelude::*;

use crate::layout::fit_scale;
use crate::markup::Rect;
use crate::state::SlideRole;

const SLIDE_SHIFT: f32 = 0.06; // Horizontal travel of an entering/leaving slide, as a share of the frame width

/// Styling layer for one slide: eases opacity and position whenever the
/// controller changes the slide's role.
pub struct Slide {
    image: Texture2D,

    role: SlideRole,
    opacity: f32,
    shift: f32,

    tween_opacity: Option<ease::Tween>,
    tween_shift: Option<ease::Tween>,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            role: SlideRole::Idle,
            opacity: 0.0,
            shift: 0.0,
            tween_opacity: None,
            tween_shift: None,
        }
    }

    pub fn update(&mut self, role: SlideRole, dt: f32, transition: f32) {
        if role != self.role {
            match role {
                SlideRole::Active => {
                    self.tween_opacity = Some(ease::Tween::new(ease::cubic_out, self.opacity, 1.0, transition));
                    self.tween_shift = Some(ease::Tween::new(ease::cubic_out, SLIDE_SHIFT, 0.0, transition));
                }
                SlideRole::Prev => {
                    self.tween_opacity = Some(ease::Tween::new(ease::cubic_out, self.opacity, 0.0, transition));
                    self.tween_shift = Some(ease::Tween::new(ease::cubic_out, self.shift, -SLIDE_SHIFT, transition));
                }
                SlideRole::Idle => {
                    self.tween_opacity = None;
                    self.tween_shift = None;
                    self.opacity = 0.0;
                    self.shift = 0.0;
                }
            }
            self.role = role;
        }

        if let Some(tween) = self.tween_opacity.as_mut() {
            self.opacity = tween.apply(dt).clamp(0.0, 1.0);
        }
        if let Some(tween) = self.tween_shift.as_mut() {
            self.shift = tween.apply(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rect) {
        if self.opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, frame);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;
        let dest = Rectangle::new(
            frame.x + (frame.width - scaled_width) * 0.5 + self.shift * frame.width,
            frame.y + (frame.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (self.opacity * 255.0) as u8),
        );
    }
}
