//! Quiz Maze core crate.
//!
//! Answering quiz questions walks a token along the solved path of a maze: the
//! path is resampled so every reachable score has its own tile, and each change
//! of the total animates the token tile by tile. Reaching the maze end (the max
//! score) once the quiz is done wins the game.
//!
//! Everything except the `web` module is plain Rust and runs under
//! `cargo test` on the host; `web` binds the game to the browser page.

pub mod animator;
pub mod config;
pub mod error;
pub mod game;
pub mod maze;
pub mod navigator;
pub mod outcome;
pub mod path;
pub mod quiz;
pub mod scene;
pub mod score;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use animator::{AnimationSettings, AnimatorState, FrameScheduler, Movement, PlayerState, PositionAnimator, Tick};
pub use config::{ElementIds, GameConfig};
pub use error::{GameError, Result};
pub use game::Game;
pub use maze::{Cell, Maze, MazeGrid, MazePayload, Position, Tile};
pub use navigator::{NavEvent, NavigationMode, Navigator};
pub use outcome::{Outcome, OutcomeEvaluator};
pub use path::{scale_path, traversal};
pub use quiz::{Answer, MAX_SCORE_LIMIT, Question, Quiz};
pub use score::ScoreTracker;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
