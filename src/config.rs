//! Runtime configuration, passed from the host page as JSON.

use serde::{Deserialize, Serialize};

use crate::animator::{AnimationSettings, DEFAULT_SNAP_THRESHOLD, DEFAULT_SPEED};
use crate::error::{GameError, Result};
use crate::navigator::NavigationMode;

/// Ids of the elements the host page must provide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub questions_list: String,
    pub prev_button: String,
    pub next_button: String,
    pub maze_canvas: String,
    pub maze_panel: String,
    pub win_modal: String,
    pub game_over_modal: String,
    pub play_again_button: String,
    pub play_again_game_over_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            questions_list: "questions-list".into(),
            prev_button: "prev-btn".into(),
            next_button: "next-btn".into(),
            maze_canvas: "maze-canvas".into(),
            maze_panel: "maze-panel".into(),
            win_modal: "win-modal".into(),
            game_over_modal: "game-over-modal".into(),
            play_again_button: "play-again-btn".into(),
            play_again_game_over_button: "play-again-game-over-btn".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub quiz_url: String,
    pub maze_url: String,
    pub navigation: NavigationMode,
    pub speed: f64,
    pub snap_threshold: f64,
    pub player_color: String,
    pub log_level: String,
    pub elements: ElementIds,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            quiz_url: "/api/quiz".into(),
            maze_url: "/api/maze".into(),
            navigation: NavigationMode::Free,
            speed: DEFAULT_SPEED,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            player_color: "#f1c40f".into(),
            log_level: "info".into(),
            elements: ElementIds::default(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON object; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.speed > 0.0 && self.speed <= 1.0) {
            return Err(GameError::Config(format!("speed must be in (0, 1], got {}", self.speed)));
        }
        if !(self.snap_threshold > 0.0) {
            return Err(GameError::Config(format!(
                "snap_threshold must be positive, got {}",
                self.snap_threshold
            )));
        }
        if self.quiz_url.is_empty() || self.maze_url.is_empty() {
            return Err(GameError::Config("endpoint urls must not be empty".into()));
        }
        self.log_filter()?;
        Ok(())
    }

    pub fn log_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| GameError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn animation(&self) -> AnimationSettings {
        AnimationSettings { speed: self.speed, snap_threshold: self.snap_threshold }
    }
}
