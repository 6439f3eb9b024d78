use raylib::prelude::*;

/// Straight alpha colour, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_color(self) -> Color {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::new(self.r, self.g, self.b, a)
    }
}

pub const ACCENT: Rgba = Rgba::new(102, 126, 234, 1.0);
pub const NODE_COLOR: Rgba = Rgba::new(102, 126, 234, 0.8);
pub const TRAIL_COLOR: Rgba = Rgba::new(10, 14, 39, 0.1);
pub const BACKGROUND: Rgba = Rgba::new(10, 14, 39, 1.0);
pub const TEXT_COLOR: Rgba = Rgba::new(230, 233, 250, 1.0);
pub const MUTED_TEXT_COLOR: Rgba = Rgba::new(160, 168, 210, 1.0);

/// The immediate-mode drawing calls the animations and the deck need.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vector2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Rgba);
    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgba);
    fn text_width(&self, text: &str, size: i32) -> i32;
    /// Forces the destination alpha of the area back to fully opaque,
    /// leaving its colour untouched.
    fn restore_opacity(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// Draws onto anything raylib can draw on (screen or texture mode).
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.d
            .draw_rectangle_rec(Rectangle::new(x, y, width, height), color.to_color());
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Rgba) {
        self.d.draw_circle_v(center, radius, color.to_color());
    }

    fn stroke_circle(&mut self, center: Vector2, radius: f32, color: Rgba) {
        self.d.draw_circle_lines(
            center.x.round() as i32,
            center.y.round() as i32,
            radius,
            color.to_color(),
        );
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Rgba) {
        self.d.draw_line_ex(from, to, width, color.to_color());
    }

    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgba) {
        self.d.draw_text(text, x, y, size, color.to_color());
    }

    fn text_width(&self, text: &str, size: i32) -> i32 {
        let c_text = std::ffi::CString::new(text).unwrap();
        unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), size) }
    }

    // Alpha blending also blends the target's alpha channel, so translucent
    // fills on a render texture wear it down. Additive opaque black adds
    // nothing to rgb and saturates alpha.
    fn restore_opacity(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let mut additive = self.d.begin_blend_mode(BlendMode::BLEND_ADDITIVE);
        additive.draw_rectangle_rec(Rectangle::new(x, y, width, height), Color::BLACK);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Rect { x: f32, y: f32, width: f32, height: f32, color: Rgba },
        Circle { center: Vector2, radius: f32, color: Rgba, filled: bool },
        Line { from: Vector2, to: Vector2, width: f32, color: Rgba },
        Text { text: String, x: i32, y: i32, size: i32 },
        RestoreOpacity,
    }

    /// Canvas that records every call instead of drawing.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<Call>,
    }

    impl RecordingCanvas {
        pub fn lines(&self) -> Vec<&Call> {
            self.calls.iter().filter(|c| matches!(c, Call::Line { .. })).collect()
        }

        pub fn circles(&self) -> Vec<&Call> {
            self.calls.iter().filter(|c| matches!(c, Call::Circle { .. })).collect()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
            self.calls.push(Call::Rect { x, y, width, height, color });
        }

        fn fill_circle(&mut self, center: Vector2, radius: f32, color: Rgba) {
            self.calls.push(Call::Circle { center, radius, color, filled: true });
        }

        fn stroke_circle(&mut self, center: Vector2, radius: f32, color: Rgba) {
            self.calls.push(Call::Circle { center, radius, color, filled: false });
        }

        fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Rgba) {
            self.calls.push(Call::Line { from, to, width, color });
        }

        fn text(&mut self, text: &str, x: i32, y: i32, size: i32, _color: Rgba) {
            self.calls.push(Call::Text { text: text.to_string(), x, y, size });
        }

        // Rough monospace estimate, good enough for layout tests.
        fn text_width(&self, text: &str, size: i32) -> i32 {
            text.chars().count() as i32 * size / 2
        }

        fn restore_opacity(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
            self.calls.push(Call::RestoreOpacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped_when_converted() {
        assert_eq!(ACCENT.with_alpha(-0.3).to_color().a, 0);
        assert_eq!(ACCENT.with_alpha(1.7).to_color().a, 255);
        assert_eq!(NODE_COLOR.to_color().a, 204);
    }

    type Pixel = [f32; 4];

    // GL blending with (SRC_ALPHA, ONE_MINUS_SRC_ALPHA) on every channel
    fn alpha_blend(src: Rgba, dst: Pixel) -> Pixel {
        let s = [src.r as f32 / 255.0, src.g as f32 / 255.0, src.b as f32 / 255.0, src.a];
        let mut out = [0.0; 4];
        for i in 0..4 {
            out[i] = (s[i] * src.a + dst[i] * (1.0 - src.a)).clamp(0.0, 1.0);
        }
        out
    }

    // GL blending with (SRC_ALPHA, ONE) on every channel
    fn additive_blend(src: Rgba, dst: Pixel) -> Pixel {
        let s = [src.r as f32 / 255.0, src.g as f32 / 255.0, src.b as f32 / 255.0, src.a];
        let mut out = [0.0; 4];
        for i in 0..4 {
            out[i] = (s[i] * src.a + dst[i]).clamp(0.0, 1.0);
        }
        out
    }

    /// Share of the accent colour a layer pixel shows on screen after it has
    /// been composited over the background.
    fn accent_share_on_screen(line_alpha: f32, restore: bool) -> f32 {
        let bg = [10.0 / 255.0, 14.0 / 255.0, 39.0 / 255.0, 1.0];
        let mut layer = bg;
        for _ in 0..500 {
            layer = alpha_blend(TRAIL_COLOR, layer);
            layer = alpha_blend(ACCENT.with_alpha(line_alpha), layer);
            if restore {
                layer = additive_blend(Rgba::new(0, 0, 0, 1.0), layer);
            }
        }
        let a = layer[3];
        let screen_b = layer[2] * a + bg[2] * (1.0 - a);
        let accent_b = ACCENT.b as f32 / 255.0;
        (screen_b - bg[2]) / (accent_b - bg[2])
    }

    #[test]
    fn restoring_opacity_keeps_faint_lines_at_full_strength() {
        // Source-over on an opaque canvas settles at 0.2 / (1 - 0.8 * 0.9)
        let expected = 0.2 / (1.0 - 0.8 * 0.9);
        let restored = accent_share_on_screen(0.2, true);
        assert!((restored - expected).abs() < 0.01, "{restored}");

        let worn = accent_share_on_screen(0.2, false);
        assert!(worn < 0.2, "{worn}");
    }

    #[test]
    fn additive_black_only_touches_alpha() {
        let dst = [0.3, 0.4, 0.5, 0.1];
        assert_eq!(additive_blend(Rgba::new(0, 0, 0, 1.0), dst), [0.3, 0.4, 0.5, 1.0]);
    }
}
