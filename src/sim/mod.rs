//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{destination_occupied, find_overlap, hits_any};
pub use rect::Rect;
pub use state::{Block, BlockKind, Direction, Enemy, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
