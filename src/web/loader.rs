//! Fetches quiz and maze payloads and validates them into playable content.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::maze::{Maze, MazePayload};
use crate::quiz::{Question, Quiz};

async fn fetch_json<T: DeserializeOwned>(endpoint: &str) -> Result<T> {
    let response = Request::get(endpoint).send().await.map_err(|e| GameError::Network {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })?;
    if !response.ok() {
        return Err(GameError::HttpStatus { endpoint: endpoint.to_string(), status: response.status() });
    }
    response.json::<T>().await.map_err(|e| GameError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Both requests run concurrently; either failing aborts the whole load.
pub async fn load(config: &GameConfig) -> Result<(Quiz, Maze)> {
    let (questions, maze) = futures::try_join!(
        fetch_json::<Vec<Question>>(&config.quiz_url),
        fetch_json::<MazePayload>(&config.maze_url),
    )?;
    Ok((Quiz::new(questions)?, Maze::try_from(maze)?))
}
