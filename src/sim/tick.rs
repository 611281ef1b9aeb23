//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically: player
//! movement and block interactions first, then enemy movement and contact
//! damage.

use rand::Rng;

use super::collision;
use super::state::{Direction, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Push the block the player is walking into (Space)
    pub push: bool,
    /// Break an overlapping ice block (X)
    pub break_ice: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if state.player.hurt_cooldown > 0 {
        state.player.hurt_cooldown -= 1;
    }

    move_player(state, input);
    move_enemies(state);
}

/// Update the player's facing from the held keys. Priority chain, so a
/// single direction wins even with several keys held; no key held keeps
/// the previous facing.
fn update_direction(state: &mut GameState, input: &TickInput) {
    if input.right {
        state.player.last_direction = Some(Direction::Right);
    } else if input.left {
        state.player.last_direction = Some(Direction::Left);
    } else if input.up {
        state.player.last_direction = Some(Direction::Up);
    } else if input.down {
        state.player.last_direction = Some(Direction::Down);
    }
}

/// Directional movement with all-or-nothing collision resolution.
///
/// The candidate position takes one axis step per held key (diagonals
/// possible). Any block overlap cancels the whole move; while scanning,
/// a simultaneously held push or break key triggers the corresponding
/// interaction on the first qualifying block, then the scan stops.
fn move_player(state: &mut GameState, input: &TickInput) {
    update_direction(state, input);

    let mut candidate = state.player.rect;
    if input.right {
        candidate.pos.x += state.player.speed;
    }
    if input.left {
        candidate.pos.x -= state.player.speed;
    }
    if input.down {
        candidate.pos.y += state.player.speed;
    }
    if input.up {
        candidate.pos.y -= state.player.speed;
    }

    let mut collided = false;
    let mut idx = 0;
    while idx < state.blocks.len() {
        if candidate.overlaps(&state.blocks[idx].rect) {
            collided = true;

            if input.push && state.blocks[idx].kind.destructible() {
                push_block(state);
                break;
            }

            if input.break_ice && state.blocks[idx].kind.is_ice() && break_block(state) {
                break;
            }
        }
        idx += 1;
    }

    if !collided {
        state.player.rect = candidate;
    }
}

/// Shift the first destructible block one player-extent ahead of the
/// player by one speed step in the facing direction. The push is cancelled
/// if the destination already holds another block.
fn push_block(state: &mut GameState) {
    if !state.player.can_push {
        return;
    }
    let Some(dir) = state.player.last_direction else {
        return;
    };

    let probe = state
        .player
        .rect
        .translated(dir.offset() * state.player.rect.size);
    let Some(target) =
        collision::find_overlap(&probe, &state.blocks, |b| b.kind.destructible())
    else {
        return;
    };

    let dest = state.blocks[target]
        .rect
        .translated(dir.offset() * state.player.speed);
    if collision::destination_occupied(&dest, &state.blocks, target) {
        return;
    }

    state.blocks[target].rect = dest;
}

/// Remove the first ice block overlapping the player. Returns true if one
/// was removed.
fn break_block(state: &mut GameState) -> bool {
    let player_rect = state.player.rect;
    let Some(idx) = collision::find_overlap(&player_rect, &state.blocks, |b| b.kind.is_ice())
    else {
        return false;
    };

    let broken = state.blocks.remove(idx);
    state.score += ICE_BLOCK_SCORE;
    log::debug!(
        "ice block broken at {:?}, score {}",
        broken.rect.pos,
        state.score
    );
    true
}

/// Random-walk enemy movement plus contact damage.
///
/// Each enemy draws one of four directions and attempts a single step,
/// cancelled entirely on any block overlap. Contact with the player costs
/// one life, gated by the hurt cooldown so overlapping enemies in the same
/// tick do not compound.
fn move_enemies(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        let dir = match state.rng.random_range(0..4u8) {
            0 => Direction::Right,
            1 => Direction::Left,
            2 => Direction::Down,
            _ => Direction::Up,
        };

        let candidate = state.enemies[i]
            .rect
            .translated(dir.offset() * state.enemies[i].speed);
        if !collision::hits_any(&candidate, &state.blocks) {
            state.enemies[i].rect = candidate;
        }

        if state.enemies[i].rect.overlaps(&state.player.rect) && state.player.hurt_cooldown == 0
        {
            state.player.lives = state.player.lives.saturating_sub(1);
            state.player.hurt_cooldown = HURT_COOLDOWN_TICKS;
            log::info!("player hit, {} lives left", state.player.lives);

            if state.player.lives == 0 {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "game over at tick {} with score {}",
                    state.time_ticks,
                    state.score
                );
            }
        }
    }
}
