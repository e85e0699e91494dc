//! Quiz content as served by `/api/quiz`, plus the max-score rule.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Highest max score a quiz may have. The solution path is resampled to
/// `max_score + 1` tiles, so this also bounds that allocation.
pub const MAX_SCORE_LIMIT: i64 = 100_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    /// May be negative: wrong answers can push the player back.
    #[serde(default)]
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub multiple_choice: bool,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Best contribution this question can make to the total score, or
    /// `None` if it does not fit in an `i64`.
    pub fn max_points(&self) -> Option<i64> {
        if self.multiple_choice {
            self.answers.iter().try_fold(0i64, |acc, a| acc.checked_add(a.points.max(0)))
        } else {
            Some(self.answers.iter().map(|a| a.points).max().unwrap_or(0))
        }
    }
}

/// A validated, non-empty question list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<Question>,
    max_score: i64,
}

impl Quiz {
    /// Rejects payloads the game cannot play: no questions, a question with
    /// nothing to pick, or a quiz whose best total cannot move the player or
    /// is too large to lay out along the path.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(GameError::EmptyQuiz);
        }
        if let Some(index) = questions.iter().position(|q| q.answers.is_empty()) {
            return Err(GameError::QuestionWithoutAnswers { index });
        }
        let mut max_score = 0i64;
        for (index, question) in questions.iter().enumerate() {
            max_score = question
                .max_points()
                .and_then(|points| max_score.checked_add(points))
                .ok_or(GameError::ScoreOverflow { index })?;
        }
        if max_score < 1 {
            return Err(GameError::NonPositiveMaxScore(max_score));
        }
        if max_score > MAX_SCORE_LIMIT {
            return Err(GameError::MaxScoreTooLarge { max_score, limit: MAX_SCORE_LIMIT });
        }
        Ok(Self { questions, max_score })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn max_score(&self) -> i64 {
        self.max_score
    }
}
