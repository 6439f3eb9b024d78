use rand::Rng;
use crate::canvas::Canvas;

/// One per-frame animated layer.
pub trait Animation {
    fn resize(&mut self, width: f32, height: f32);
    /// Advances the layer by one frame.
    fn step<R: Rng>(&mut self, rng: &mut R);
    fn draw<C: Canvas>(&self, canvas: &mut C);
}
