use rand::Rng;
use crate::canvas::Canvas;
use crate::deck::Deck;
use crate::engine::Animation;
use crate::node_field::NodeField;
use crate::slide::Slide;
use crate::spark_field::SparkField;

/// Everything that changes while the presentation runs.
pub struct Presentation {
    pub deck: Deck,
    pub nodes: NodeField,
    pub sparks: SparkField,
}

impl Presentation {
    pub fn new<R: Rng>(rng: &mut R, slides: Vec<Slide>, node_count: usize, width: f32, height: f32) -> Self {
        let mut presentation = Self {
            deck: Deck::new(slides),
            nodes: NodeField::new(rng, node_count, width, height),
            sparks: SparkField::new(width, height),
        };
        // A single-slide deck opens on its closing slide
        presentation.show_slide(0);
        presentation
    }

    pub fn size(&self) -> (f32, f32) {
        self.nodes.size()
    }

    /// Shows slide `index`. The spark loop runs only on the last slide.
    pub fn show_slide(&mut self, index: usize) {
        if !self.deck.show_slide(index) {
            return;
        }
        if self.deck.is_last(index) {
            self.sparks.start();
        } else {
            self.sparks.stop();
        }
    }

    pub fn next_slide(&mut self) {
        if let Some(index) = self.deck.next_index() {
            self.show_slide(index);
        }
    }

    pub fn prev_slide(&mut self) {
        if let Some(index) = self.deck.prev_index() {
            self.show_slide(index);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.nodes.resize(width, height);
        self.sparks.resize(width, height);
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.nodes.step(rng);
        self.sparks.step(rng);
    }

    /// Slide text, nav dots, then the spark overlay.
    pub fn draw_foreground<C: Canvas>(&self, canvas: &mut C) {
        let (width, height) = self.size();
        self.deck.draw(canvas, width, height);
        self.sparks.draw(canvas);
    }
}
