//! Pengo entry point
//!
//! Opens the window, seeds the run from the wall clock, and drives the
//! fixed-timestep simulation from the render loop.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::{Conf, get_frame_time, next_frame};

use pengo::consts::{ARENA_HEIGHT, ARENA_WIDTH, MAX_SUBSTEPS, TICK_DT};
use pengo::sim::{GameState, tick};
use pengo::{input, render};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pengo".to_owned(),
        window_width: ARENA_WIDTH as i32,
        window_height: ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed the run from wall-clock time, falling back to zero if the clock is
/// set before the epoch
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let seed = wall_clock_seed();
    log::info!("starting run with seed {seed}");

    let mut state = GameState::new(seed);
    let mut accumulator = 0.0f32;

    // Loop ends when the window closes; macroquad exits the process after
    // the current frame.
    loop {
        // Cap the frame delta so a stall doesn't turn into a tick burst
        let dt = get_frame_time().min(0.1);
        accumulator += dt;

        let input = input::sample();
        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            accumulator -= TICK_DT;
            substeps += 1;
        }

        render::draw_frame(&state);
        next_frame().await;
    }
}
