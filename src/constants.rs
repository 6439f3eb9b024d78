pub const DEFAULT_WIDTH: i32 = 1280;         // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;         // Initial window height
pub const FPS: u32 = 60;                     // Frames per second

pub const NODE_COUNT: usize = 80;            // Nodes in the background graph
pub const NODE_MAX_SPEED: f32 = 0.25;        // Max |vx|, |vy| of a node (px/frame)
pub const NODE_MIN_RADIUS: f32 = 1.0;
pub const NODE_MAX_RADIUS: f32 = 3.0;
pub const CONNECTION_DISTANCE: f32 = 150.0;  // Nodes closer than this get a line (px)
pub const CONNECTION_MAX_OPACITY: f32 = 0.2; // Line opacity at distance 0

pub const SPARK_SPAWN_CHANCE: f64 = 0.3;     // Probability of one new spark per frame
pub const SPARK_MAX_SPEED: f32 = 2.0;        // Max |vx|, |vy| of a spark (px/frame)
pub const SPARK_MIN_DECAY: f32 = 0.005;      // Life lost per frame, lower bound
pub const SPARK_MAX_DECAY: f32 = 0.015;      // Life lost per frame, upper bound
pub const SPARK_RADIUS: f32 = 2.0;

pub const SWIPE_THRESHOLD: f32 = 50.0;       // Horizontal travel that counts as a swipe (px)

pub const DOT_RADIUS: f32 = 6.0;
pub const DOT_SPACING: f32 = 24.0;           // Centre to centre
pub const DOT_MARGIN_BOTTOM: f32 = 40.0;

pub const TITLE_FONT_SIZE: i32 = 56;
pub const BODY_FONT_SIZE: i32 = 28;
pub const BODY_LINE_SPACING: i32 = 44;
