use std::path::PathBuf;
use anyhow::{anyhow, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod canvas;
mod constants;
mod deck;
mod display;
mod engine;
mod input;
mod node_field;
mod slide;
mod spark_field;
mod state;

use crate::canvas::{RaylibCanvas, BACKGROUND};
use crate::constants::*;
use crate::engine::Animation;
use crate::input::{Command, InputRouter};
use crate::slide::{builtin_deck, load_deck};
use crate::state::Presentation;

/// Slide deck viewer with an animated neural-network backdrop.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Deck file; slides are separated by `---` lines. Uses a built-in deck when omitted.
    deck: Option<PathBuf>,

    /// Number of nodes in the background graph
    #[arg(long, default_value_t = NODE_COUNT)]
    nodes: usize,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Seed for the particle RNG, for reproducible animations
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // --- Load Slides ---
    let slides = match &args.deck {
        Some(path) => load_deck(path)?,
        None => builtin_deck(),
    };
    log::info!("Loaded {} slides", slides.len());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Neural Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape leaves fullscreen instead of closing the window
    rl.set_exit_key(None);

    if args.fullscreen {
        display::toggle_fullscreen(&mut rl);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let width = rl.get_screen_width() as f32;
    let height = rl.get_screen_height() as f32;
    let mut presentation = Presentation::new(&mut rng, slides, args.nodes, width, height);
    let mut input = InputRouter::new();

    // The node layer keeps its trail between frames, so it lives in its own texture
    let mut node_layer = load_layer(&mut rl, &thread, width, height)?;
    let mut clear_layer = true;

    // --- Main Loop ---
    while !rl.window_should_close() {
        if rl.is_window_resized() {
            let width = rl.get_screen_width() as f32;
            let height = rl.get_screen_height() as f32;
            presentation.resize(width, height);
            node_layer = load_layer(&mut rl, &thread, width, height)?;
            clear_layer = true;
            log::debug!("Resized to {}x{}", width, height);
        }

        let (width, height) = presentation.size();
        for command in input.poll(&mut rl, &presentation.deck, width, height) {
            match command {
                Command::Next => presentation.next_slide(),
                Command::Prev => presentation.prev_slide(),
                Command::GoTo(index) => presentation.show_slide(index),
                Command::ToggleFullscreen => display::toggle_fullscreen(&mut rl),
                Command::ExitFullscreen => display::exit_fullscreen(&mut rl),
            }
        }

        presentation.step(&mut rng);

        let mut d = rl.begin_drawing(&thread);
        {
            let mut layer = d.begin_texture_mode(&thread, &mut node_layer);
            if clear_layer {
                layer.clear_background(BACKGROUND.to_color());
                clear_layer = false;
            }
            presentation.nodes.draw(&mut RaylibCanvas::new(&mut layer));
        }

        d.clear_background(BACKGROUND.to_color());
        // Render textures are stored upside down
        d.draw_texture_pro(
            &node_layer,
            Rectangle::new(0.0, 0.0, node_layer.width() as f32, -(node_layer.height() as f32)),
            Rectangle::new(0.0, 0.0, width, height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        presentation.draw_foreground(&mut RaylibCanvas::new(&mut d));
    }

    Ok(())
}

fn load_layer(rl: &mut RaylibHandle, thread: &RaylibThread, width: f32, height: f32) -> Result<RenderTexture2D> {
    rl.load_render_texture(thread, width.max(1.0) as u32, height.max(1.0) as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))
}
