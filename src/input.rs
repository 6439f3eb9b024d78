use raylib::prelude::*;
use crate::constants::SWIPE_THRESHOLD;
use crate::deck::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    ToggleFullscreen,
    ExitFullscreen,
}

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_C => Some(Command::Next),
        KeyboardKey::KEY_LEFT => Some(Command::Prev),
        KeyboardKey::KEY_F => Some(Command::ToggleFullscreen),
        KeyboardKey::KEY_ESCAPE => Some(Command::ExitFullscreen),
        _ => None,
    }
}

/// Horizontal swipe between a press at `start_x` and a release at `end_x`.
/// Swiping left moves forward, swiping right moves back.
pub fn swipe_command(start_x: f32, end_x: f32) -> Option<Command> {
    if start_x - end_x > SWIPE_THRESHOLD {
        Some(Command::Next)
    } else if end_x - start_x > SWIPE_THRESHOLD {
        Some(Command::Prev)
    } else {
        None
    }
}

/// Resolves a completed press/release. A swipe wins; otherwise a click
/// selects a nav dot only when it was pressed and released on that dot.
pub fn route_release(press: Vector2, release: Vector2, deck: &Deck, width: f32, height: f32) -> Option<Command> {
    if let Some(command) = swipe_command(press.x, release.x) {
        return Some(command);
    }
    let pressed = deck.dot_at(press, width, height)?;
    (deck.dot_at(release, width, height) == Some(pressed)).then_some(Command::GoTo(pressed))
}

/// Remembers where the pointer went down until it comes back up.
#[derive(Debug, Default)]
pub struct PointerTracker {
    press: Option<Vector2>,
}

impl PointerTracker {
    pub fn begin(&mut self, point: Vector2) {
        self.press = Some(point);
    }

    pub fn end(&mut self, point: Vector2, deck: &Deck, width: f32, height: f32) -> Option<Command> {
        let press = self.press.take()?;
        route_release(press, point, deck, width, height)
    }
}

/// Collects this frame's commands from keyboard, dot clicks and swipes.
pub struct InputRouter {
    pointer: PointerTracker,
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            pointer: PointerTracker::default(),
        }
    }

    pub fn poll(&mut self, rl: &mut RaylibHandle, deck: &Deck, width: f32, height: f32) -> Vec<Command> {
        let mut commands = Vec::new();

        while let Some(key) = rl.get_key_pressed() {
            commands.extend(command_for_key(key));
        }

        // Touches are reported through the mouse on every raylib platform
        let pointer = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.pointer.begin(pointer);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            commands.extend(self.pointer.end(pointer, deck, width, height));
        }

        commands
    }
}
