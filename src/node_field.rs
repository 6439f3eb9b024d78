use rand::Rng;
use raylib::prelude::Vector2;
use crate::canvas::{Canvas, NODE_COLOR, ACCENT, TRAIL_COLOR};
use crate::constants::*;
use crate::engine::Animation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f32,
}

impl Node {
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            position: Vector2::new(
                rng.random_range(0.0..width.max(1.0)),
                rng.random_range(0.0..height.max(1.0)),
            ),
            velocity: Vector2::new(
                rng.random_range(-NODE_MAX_SPEED..NODE_MAX_SPEED),
                rng.random_range(-NODE_MAX_SPEED..NODE_MAX_SPEED),
            ),
            radius: rng.random_range(NODE_MIN_RADIUS..NODE_MAX_RADIUS),
        }
    }

    /// Moves by one velocity step and reflects off the viewport edges.
    /// A node may stay just outside the bounds for a frame.
    pub fn update(&mut self, width: f32, height: f32) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_circle(self.position, self.radius, NODE_COLOR);
    }
}

/// A line between two nearby nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
}

/// Opacity of the line between two nodes `distance` apart, or `None`
/// when they are too far apart to be connected.
pub fn connection_opacity(distance: f32) -> Option<f32> {
    if distance < CONNECTION_DISTANCE {
        Some(CONNECTION_MAX_OPACITY * (1.0 - distance / CONNECTION_DISTANCE))
    } else {
        None
    }
}

pub struct NodeField {
    pub nodes: Vec<Node>,
    width: f32,
    height: f32,
}

impl NodeField {
    pub fn new<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let nodes = (0..count).map(|_| Node::random(rng, width, height)).collect();
        Self { nodes, width, height }
    }

    #[cfg(test)]
    pub fn from_nodes(nodes: Vec<Node>, width: f32, height: f32) -> Self {
        Self { nodes, width, height }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn update(&mut self) {
        for node in self.nodes.iter_mut() {
            node.update(self.width, self.height);
        }
    }

    /// Every unordered pair closer than the connection distance.
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let dx = self.nodes[i].position.x - self.nodes[j].position.x;
                let dy = self.nodes[i].position.y - self.nodes[j].position.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if let Some(opacity) = connection_opacity(distance) {
                    out.push(Connection { from: i, to: j, opacity });
                }
            }
        }
        out
    }

    pub fn draw_connections<C: Canvas>(&self, canvas: &mut C) {
        for c in self.connections() {
            canvas.stroke_line(
                self.nodes[c.from].position,
                self.nodes[c.to].position,
                1.0,
                ACCENT.with_alpha(c.opacity),
            );
        }
    }
}

impl Animation for NodeField {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn step<R: Rng>(&mut self, _rng: &mut R) {
        self.update();
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) {
        // Translucent fill leaves a short motion trail behind each node
        canvas.fill_rect(0.0, 0.0, self.width, self.height, TRAIL_COLOR);
        for node in self.nodes.iter() {
            node.draw(canvas);
        }
        self.draw_connections(canvas);
        canvas.restore_opacity(0.0, 0.0, self.width, self.height);
    }
}
