//! Keyboard sampling
//!
//! Converts macroquad key-down state into a [`TickInput`] once per display
//! frame. The simulation itself never touches the windowing layer.

use macroquad::prelude::{KeyCode, is_key_down};

use crate::sim::TickInput;

/// Poll the held keys: arrows to move, Space to push, X to break ice
pub fn sample() -> TickInput {
    TickInput {
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        push: is_key_down(KeyCode::Space),
        break_ice: is_key_down(KeyCode::X),
    }
}
