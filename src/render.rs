//! Immediate-mode drawing of the current game state
//!
//! Filled rectangles and text only. All geometry comes straight from the
//! simulation; nothing here mutates state.

use macroquad::prelude::*;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::{Block, BlockKind, Direction, Enemy, GamePhase, GameState, Player};

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const ICE_COLOR: Color = LIGHTGRAY;
const WALL_COLOR: Color = DARKGRAY;
const ENEMY_COLOR: Color = RED;
const LIFE_COLOR: Color = GREEN;

/// Draw one frame: entities and HUD while playing, end screen afterwards
pub fn draw_frame(state: &GameState) {
    clear_background(BACKGROUND);

    match state.phase {
        GamePhase::Playing => draw_playing(state),
        GamePhase::GameOver => draw_game_over(state),
    }
}

fn draw_playing(state: &GameState) {
    for block in &state.blocks {
        draw_block(block);
    }
    for enemy in &state.enemies {
        draw_enemy(enemy);
    }
    draw_player(&state.player);

    draw_text(&format!("Score: {}", state.score), 10.0, 64.0, 24.0, BLACK);
}

fn draw_block(block: &Block) {
    let color = match block.kind {
        BlockKind::Ice => ICE_COLOR,
        BlockKind::Wall => WALL_COLOR,
    };
    draw_rectangle(block.rect.pos.x, block.rect.pos.y, block.rect.size.x, block.rect.size.y, color);
}

fn draw_enemy(enemy: &Enemy) {
    draw_rectangle(
        enemy.rect.pos.x,
        enemy.rect.pos.y,
        enemy.rect.size.x,
        enemy.rect.size.y,
        ENEMY_COLOR,
    );
}

fn draw_player(player: &Player) {
    // Facing direction tints the avatar
    let color = match player.last_direction {
        Some(Direction::Left) => DARKBLUE,
        Some(Direction::Up) => SKYBLUE,
        _ => BLUE,
    };
    draw_rectangle(
        player.rect.pos.x,
        player.rect.pos.y,
        player.rect.size.x,
        player.rect.size.y,
        color,
    );

    // One green square per remaining life
    for i in 0..player.lives {
        draw_rectangle(10.0 + i as f32 * 40.0, 10.0, 30.0, 30.0, LIFE_COLOR);
    }
}

fn draw_game_over(state: &GameState) {
    let title = "GAME OVER";
    let title_size = 48u16;
    let dims = measure_text(title, None, title_size, 1.0);
    draw_text(
        title,
        ARENA_WIDTH / 2.0 - dims.width / 2.0,
        ARENA_HEIGHT / 2.0 - 20.0,
        title_size as f32,
        RED,
    );

    let score_line = format!("Final score: {}", state.score);
    let score_size = 24u16;
    let dims = measure_text(&score_line, None, score_size, 1.0);
    draw_text(
        &score_line,
        ARENA_WIDTH / 2.0 - dims.width / 2.0,
        ARENA_HEIGHT / 2.0 + 50.0,
        score_size as f32,
        BLACK,
    );
}
