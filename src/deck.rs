use raylib::prelude::Vector2;
use crate::canvas::{Canvas, ACCENT};
use crate::constants::*;
use crate::slide::Slide;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavDot {
    pub active: bool,
}

/// Slides and their parallel nav dots, with exactly one of each active.
pub struct Deck {
    slides: Vec<Slide>,
    dots: Vec<NavDot>,
    current: usize,
}

impl Deck {
    /// Builds a deck showing the first slide. `slides` must not be empty.
    pub fn new(slides: Vec<Slide>) -> Self {
        let dots = vec![NavDot::default(); slides.len()];
        let mut deck = Self {
            slides,
            dots,
            current: 0,
        };
        deck.show_slide(0);
        deck
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }

    #[cfg(test)]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[cfg(test)]
    pub fn dots(&self) -> &[NavDot] {
        &self.dots
    }

    /// The slide currently marked active.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.iter().find(|s| s.active)
    }

    /// Marks slide and dot `index` active and every other one inactive.
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn show_slide(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            log::warn!("Ignoring request for slide {} of {}", index, self.slides.len());
            return false;
        }

        for slide in self.slides.iter_mut() {
            slide.active = false;
        }
        for dot in self.dots.iter_mut() {
            dot.active = false;
        }

        self.slides[index].active = true;
        self.dots[index].active = true;
        self.current = index;
        log::debug!("Showing slide {}/{}", index + 1, self.slides.len());
        true
    }

    /// Index of the following slide, or `None` on the last one.
    pub fn next_index(&self) -> Option<usize> {
        (self.current + 1 < self.slides.len()).then_some(self.current + 1)
    }

    /// Index of the preceding slide, or `None` on the first one.
    pub fn prev_index(&self) -> Option<usize> {
        self.current.checked_sub(1)
    }

    pub fn dot_centers(&self, width: f32, height: f32) -> Vec<Vector2> {
        dot_centers(self.dots.len(), width, height)
    }

    /// Index of the nav dot under `point`, if any.
    pub fn dot_at(&self, point: Vector2, width: f32, height: f32) -> Option<usize> {
        self.dot_centers(width, height).iter().position(|c| {
            let dx = c.x - point.x;
            let dy = c.y - point.y;
            // Slightly larger than the drawn dot so it is easy to hit
            dx * dx + dy * dy <= (DOT_RADIUS * 2.0) * (DOT_RADIUS * 2.0)
        })
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, width: f32, height: f32) {
        if let Some(slide) = self.current_slide() {
            slide.draw(canvas, width, height);
        }
        for (dot, center) in self.dots.iter().zip(self.dot_centers(width, height)) {
            if dot.active {
                canvas.fill_circle(center, DOT_RADIUS, ACCENT);
            } else {
                canvas.stroke_circle(center, DOT_RADIUS, ACCENT.with_alpha(0.6));
            }
        }
    }
}

/// Centres of `count` dots laid out in a row along the bottom edge.
pub fn dot_centers(count: usize, width: f32, height: f32) -> Vec<Vector2> {
    let row_width = DOT_SPACING * count.saturating_sub(1) as f32;
    let start_x = (width - row_width) / 2.0;
    let y = height - DOT_MARGIN_BOTTOM;
    (0..count)
        .map(|i| Vector2::new(start_x + DOT_SPACING * i as f32, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{Call, RecordingCanvas};

    fn deck(n: usize) -> Deck {
        Deck::new((0..n).map(|i| Slide::new(format!("Slide {}", i), vec![])).collect())
    }

    fn active_count(deck: &Deck) -> (usize, usize) {
        (
            deck.slides().iter().filter(|s| s.active).count(),
            deck.dots().iter().filter(|d| d.active).count(),
        )
    }

    #[test]
    fn starts_on_first_slide() {
        let d = deck(4);
        assert_eq!(d.current(), 0);
        assert!(d.slides()[0].active);
        assert!(d.dots()[0].active);
        assert_eq!(active_count(&d), (1, 1));
    }

    #[test]
    fn show_slide_marks_exactly_one_active() {
        let mut d = deck(5);
        for i in [3, 0, 4, 4, 1] {
            assert!(d.show_slide(i));
            assert_eq!(d.current(), i);
            assert_eq!(active_count(&d), (1, 1));
            assert!(d.slides()[i].active);
            assert!(d.dots()[i].active);
        }
    }

    #[test]
    fn current_slide_follows_the_active_marking() {
        let mut d = deck(3);
        d.show_slide(2);
        assert_eq!(d.current_slide().map(|s| s.title.as_str()), Some("Slide 2"));
        d.show_slide(1);
        assert_eq!(d.current_slide().map(|s| s.title.as_str()), Some("Slide 1"));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut d = deck(3);
        d.show_slide(1);
        assert!(!d.show_slide(3));
        assert_eq!(d.current(), 1);
        assert_eq!(active_count(&d), (1, 1));
    }

    #[test]
    fn neighbours_stop_at_the_ends() {
        let mut d = deck(3);
        assert_eq!(d.prev_index(), None);
        assert_eq!(d.next_index(), Some(1));
        d.show_slide(2);
        assert_eq!(d.next_index(), None);
        assert_eq!(d.prev_index(), Some(1));
        assert!(d.is_last(d.current()));
    }

    #[test]
    fn dots_are_centred_along_the_bottom() {
        let centers = dot_centers(3, 800.0, 600.0);
        assert_eq!(centers.len(), 3);
        assert_eq!(centers[1], Vector2::new(400.0, 600.0 - DOT_MARGIN_BOTTOM));
        assert_eq!(centers[2].x - centers[0].x, DOT_SPACING * 2.0);
    }

    #[test]
    fn dot_hit_test() {
        let d = deck(3);
        let centers = d.dot_centers(800.0, 600.0);
        assert_eq!(d.dot_at(centers[2], 800.0, 600.0), Some(2));
        let near = Vector2::new(centers[0].x + DOT_RADIUS, centers[0].y);
        assert_eq!(d.dot_at(near, 800.0, 600.0), Some(0));
        assert_eq!(d.dot_at(Vector2::new(10.0, 10.0), 800.0, 600.0), None);
    }

    #[test]
    fn draw_fills_only_the_active_dot() {
        let mut d = deck(4);
        d.show_slide(2);
        let mut canvas = RecordingCanvas::default();
        d.draw(&mut canvas, 800.0, 600.0);

        assert_eq!(canvas.texts(), vec!["Slide 2"]);
        let filled: Vec<bool> = canvas
            .circles()
            .iter()
            .map(|c| matches!(c, Call::Circle { filled: true, .. }))
            .collect();
        assert_eq!(filled, vec![false, false, true, false]);
    }
}
