use rand::Rng;
use raylib::prelude::Vector2;
use crate::canvas::{Canvas, ACCENT};
use crate::constants::*;
use crate::engine::Animation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub position: Vector2,
    pub velocity: Vector2,
    pub life: f32,  // 1.0 when spawned, dead at <= 0.0
    pub decay: f32, // Life lost per update
}

impl Spark {
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            position: Vector2::new(
                rng.random_range(0.0..width.max(1.0)),
                rng.random_range(0.0..height.max(1.0)),
            ),
            velocity: Vector2::new(
                rng.random_range(-SPARK_MAX_SPEED..SPARK_MAX_SPEED),
                rng.random_range(-SPARK_MAX_SPEED..SPARK_MAX_SPEED),
            ),
            life: 1.0,
            decay: rng.random_range(SPARK_MIN_DECAY..SPARK_MAX_DECAY),
        }
    }

    pub fn update(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.life -= self.decay;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_circle(self.position, SPARK_RADIUS, ACCENT.with_alpha(self.life.max(0.0)));
    }
}

/// Spark overlay for the closing slide. Frames only do work while running.
pub struct SparkField {
    sparks: Vec<Spark>,
    running: bool,
    width: f32,
    height: f32,
}

impl SparkField {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            sparks: Vec::new(),
            running: false,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `false` when the loop was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::info!("Spark loop started");
        true
    }

    /// Stops the loop and drops every live spark.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Spark loop stopped ({} sparks dropped)", self.sparks.len());
        }
        self.running = false;
        self.sparks.clear();
    }

    /// Removes dead sparks, then advances the survivors.
    /// Sparks that die during this update are culled on the next frame.
    pub fn advance(&mut self) {
        self.sparks.retain(Spark::is_alive);
        for spark in self.sparks.iter_mut() {
            spark.update();
        }
    }

    #[cfg(test)]
    fn push(&mut self, spark: Spark) {
        self.sparks.push(spark);
    }
}

impl Animation for SparkField {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn step<R: Rng>(&mut self, rng: &mut R) {
        if !self.running {
            return;
        }
        if rng.random_bool(SPARK_SPAWN_CHANCE) {
            self.sparks.push(Spark::random(rng, self.width, self.height));
        }
        self.advance();
    }

    // Drawn straight onto the freshly cleared screen, so no trail is kept.
    fn draw<C: Canvas>(&self, canvas: &mut C) {
        if !self.running {
            return;
        }
        for spark in self.sparks.iter() {
            spark.draw(canvas);
        }
    }
}
