//! Pong Duel entry point
//!
//! Headless runner: plays one match at the nominal tick rate without a window
//! and prints the final frame as JSON. Usage: `pong-duel [config.json]`

use std::path::Path;
use std::process::ExitCode;

use pong_duel::consts::{TICK_MS, TICKS_PER_SECOND};
use pong_duel::renderer::LogRenderer;
use pong_duel::sim::{FixedStep, GameState, TickInput, tick};
use pong_duel::{ControllerKind, Frame, MatchConfig, Renderer};

/// Give up on matches that never end (ten minutes of play)
const MAX_TICKS: u64 = 10 * 60 * TICKS_PER_SECOND as u64;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong Duel (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match MatchConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => MatchConfig {
            left: ControllerKind::Reactive,
            right: ControllerKind::Classifier,
            ..Default::default()
        },
    };
    if config.left == ControllerKind::Human || config.right == ControllerKind::Human {
        log::warn!("no input device in headless mode; human paddles will not move");
    }

    let mut state = GameState::new(&config);
    let mut renderer = LogRenderer::new(u64::from(TICKS_PER_SECOND) * 5);
    let mut clock = FixedStep::new();
    let input = TickInput::default();

    while state.running && !state.is_game_over() && state.time_ticks < MAX_TICKS {
        for _ in 0..clock.advance(TICK_MS) {
            tick(&mut state, &input, TICK_MS);
        }
        renderer.draw(&Frame::capture(&state));
    }

    if !state.is_game_over() {
        log::warn!("no winner after {MAX_TICKS} ticks, stopping");
    }
    tick(
        &mut state,
        &TickInput {
            quit: true,
            ..Default::default()
        },
        0.0,
    );

    match serde_json::to_string_pretty(&Frame::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("failed to serialize final frame: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
