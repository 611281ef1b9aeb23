//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: seed, RNG state, and
//! the full entity lists. Snapshots serialize cleanly so determinism can be
//! checked by comparing whole states.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Facing/movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Unit offset in screen coordinates (y grows downward)
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended. Terminal: there is no restart transition.
    GameOver,
}

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Breakable and pushable ice block
    Ice,
    /// Indestructible, immovable boundary wall
    Wall,
}

impl BlockKind {
    /// Destructible blocks can be pushed; walls never move
    pub fn destructible(&self) -> bool {
        matches!(self, BlockKind::Ice)
    }

    /// Ice blocks can be broken (removed) by the player
    pub fn is_ice(&self) -> bool {
        matches!(self, BlockKind::Ice)
    }
}

/// A block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub kind: BlockKind,
}

impl Block {
    pub fn ice(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, BLOCK_SIZE, BLOCK_SIZE),
            kind: BlockKind::Ice,
        }
    }

    pub fn wall(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            kind: BlockKind::Wall,
        }
    }
}

/// A wandering enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            speed: ENEMY_SPEED,
        }
    }
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub lives: u32,
    pub can_push: bool,
    /// Last facing direction; `None` until the first movement key is held
    pub last_direction: Option<Direction>,
    /// Ticks of invulnerability remaining after an enemy hit
    pub hurt_cooldown: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            lives: START_LIVES,
            can_push: true,
            last_direction: None,
            hurt_cooldown: 0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state (drives enemy movement)
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player avatar
    pub player: Player,
    /// Blocks, in spawn order. Membership changes only via ice break.
    pub blocks: Vec<Block>,
    /// Enemies, in spawn order
    pub enemies: Vec<Enemy>,
}

impl GameState {
    /// Create a new game state with the given seed and populate the arena
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            player: Player::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            blocks: Vec::new(),
            enemies: Vec::new(),
        };

        state.spawn_walls();
        state.spawn_ice_blocks();
        state.spawn_enemies();

        state
    }

    /// Indestructible walls along the four screen edges. These are the only
    /// thing keeping entities inside the arena; there is no clamping.
    fn spawn_walls(&mut self) {
        self.blocks.push(Block::wall(0.0, 0.0, ARENA_WIDTH, WALL_THICKNESS));
        self.blocks.push(Block::wall(
            0.0,
            ARENA_HEIGHT - WALL_THICKNESS,
            ARENA_WIDTH,
            WALL_THICKNESS,
        ));
        self.blocks.push(Block::wall(0.0, 0.0, WALL_THICKNESS, ARENA_HEIGHT));
        self.blocks.push(Block::wall(
            ARENA_WIDTH - WALL_THICKNESS,
            0.0,
            WALL_THICKNESS,
            ARENA_HEIGHT,
        ));
    }

    /// Ice blocks at random interior positions
    fn spawn_ice_blocks(&mut self) {
        for _ in 0..ICE_BLOCK_COUNT {
            let (x, y) = self.random_interior_position(BLOCK_SIZE);
            self.blocks.push(Block::ice(x, y));
        }
    }

    /// Enemies at random interior positions
    fn spawn_enemies(&mut self) {
        for _ in 0..ENEMY_COUNT {
            let (x, y) = self.random_interior_position(ENEMY_SIZE);
            self.enemies.push(Enemy::new(x, y));
        }
    }

    /// Random top-left position for an entity of the given extent, kept
    /// clear of the boundary walls
    fn random_interior_position(&mut self, extent: f32) -> (f32, f32) {
        let x = self
            .rng
            .random_range(WALL_THICKNESS..ARENA_WIDTH - WALL_THICKNESS - extent);
        let y = self
            .rng
            .random_range(WALL_THICKNESS..ARENA_HEIGHT - WALL_THICKNESS - extent);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_population() {
        let state = GameState::new(42);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.blocks.len(), ICE_BLOCK_COUNT + 4);
        assert_eq!(state.enemies.len(), ENEMY_COUNT);
        assert_eq!(state.player.lives, START_LIVES);
        assert_eq!(state.score, 0);

        let walls = state
            .blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Wall)
            .count();
        assert_eq!(walls, 4);
    }

    #[test]
    fn test_spawns_stay_clear_of_walls() {
        let state = GameState::new(7);
        let walls: Vec<_> = state
            .blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Wall)
            .cloned()
            .collect();

        for block in state.blocks.iter().filter(|b| b.kind == BlockKind::Ice) {
            for wall in &walls {
                assert!(!block.rect.overlaps(&wall.rect));
            }
        }
        for enemy in &state.enemies {
            for wall in &walls {
                assert!(!enemy.rect.overlaps(&wall.rect));
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(123);
        let b = GameState::new(123);

        for (x, y) in a.blocks.iter().zip(b.blocks.iter()) {
            assert_eq!(x.rect.pos, y.rect.pos);
        }
        for (x, y) in a.enemies.iter().zip(b.enemies.iter()) {
            assert_eq!(x.rect.pos, y.rect.pos);
        }
    }

    #[test]
    fn test_direction_offsets() {
        use glam::Vec2;
        assert_eq!(Direction::Right.offset(), Vec2::new(1.0, 0.0));
        assert_eq!(Direction::Up.offset(), Vec2::new(0.0, -1.0));
    }
}
