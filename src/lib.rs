//! Pengo - a single-screen block-pushing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Immediate-mode drawing of the current state
//! - `input`: Keyboard sampling into simulation inputs

pub mod input;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the display target)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (also the window size)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Thickness of the boundary walls
    pub const WALL_THICKNESS: f32 = 32.0;

    /// Entity extents (everything is a square tile)
    pub const BLOCK_SIZE: f32 = 32.0;
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const ENEMY_SIZE: f32 = 32.0;

    /// Speeds in pixels per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Run setup
    pub const START_LIVES: u32 = 3;
    pub const ICE_BLOCK_COUNT: usize = 5;
    pub const ENEMY_COUNT: usize = 3;

    /// Ticks of invulnerability after an enemy hit (1 second)
    pub const HURT_COOLDOWN_TICKS: u32 = 60;
    /// Points awarded for breaking an ice block
    pub const ICE_BLOCK_SCORE: u64 = 10;
}
