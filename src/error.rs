//! Error type shared by loading, validation and the browser layer.

/// Everything that can stop the game from starting (or a browser call from
/// succeeding). Load and validation failures are all surfaced to the player
/// the same way: a blocking "please refresh" alert.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("{endpoint} answered with HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("could not decode {endpoint} payload: {message}")]
    Decode { endpoint: String, message: String },

    #[error("quiz contains no questions")]
    EmptyQuiz,

    #[error("question {index} has no answers")]
    QuestionWithoutAnswers { index: usize },

    #[error("quiz max score is {0}; at least 1 point is needed to move through the maze")]
    NonPositiveMaxScore(i64),

    #[error("quiz scores overflow: question {index} pushes the max score out of range")]
    ScoreOverflow { index: usize },

    #[error("quiz max score is {max_score}; at most {limit} is supported")]
    MaxScoreTooLarge { max_score: i64, limit: i64 },

    #[error("maze grid is empty")]
    EmptyGrid,

    #[error("maze row {row} has {len} cells, expected {expected}")]
    RaggedGrid { row: usize, len: usize, expected: usize },

    #[error("maze cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidTile { row: usize, col: usize, value: i64 },

    #[error("solution path has {0} cells, at least 2 are required")]
    PathTooShort(usize),

    #[error("solution path cell ({row}, {col}) lies outside the maze")]
    PathOutOfBounds { row: usize, col: usize },

    #[error("solution path cell ({row}, {col}) is a wall")]
    PathThroughWall { row: usize, col: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
