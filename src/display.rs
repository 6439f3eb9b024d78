use anyhow::{bail, Result};
use raylib::prelude::*;

pub trait Fullscreen {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self);
}

impl Fullscreen for RaylibHandle {
    fn is_fullscreen(&self) -> bool {
        self.is_window_fullscreen()
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        if raylib::core::window::get_monitor_count() < 1 {
            bail!("no monitor available");
        }
        self.toggle_fullscreen();
        if !self.is_window_fullscreen() {
            bail!("window manager refused fullscreen");
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        if self.is_window_fullscreen() {
            self.toggle_fullscreen();
        }
    }
}

/// Enters or leaves fullscreen. A failed request is logged and otherwise ignored.
pub fn toggle_fullscreen<D: Fullscreen>(display: &mut D) {
    if display.is_fullscreen() {
        display.exit_fullscreen();
    } else if let Err(e) = display.request_fullscreen() {
        log::warn!("Error attempting to enable fullscreen: {}", e);
    }
}

pub fn exit_fullscreen<D: Fullscreen>(display: &mut D) {
    if display.is_fullscreen() {
        display.exit_fullscreen();
    }
}
