//! Win / game-over decision.

use crate::navigator::NavigationMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Playing
    }
}

/// Decides the game once the player is at rest.
///
/// A win needs the total to reach the max score while no animation is in
/// flight. In free navigation that is checked after every movement; in
/// sequential mode only once the last question has been submitted. A loss is
/// only possible once the question sequence is exhausted; if the token is
/// still moving at that point the verdict waits for the animation to finish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeEvaluator {
    max_score: i64,
    win_at_rest: bool,
    outcome: Outcome,
    verdict_pending: bool,
}

impl OutcomeEvaluator {
    pub fn new(max_score: i64, mode: NavigationMode) -> Self {
        Self {
            max_score,
            win_at_rest: mode == NavigationMode::Free,
            outcome: Outcome::Playing,
            verdict_pending: false,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_pending(&self) -> bool {
        self.verdict_pending
    }

    /// The token just came to rest.
    pub fn animation_finished(&mut self, total: i64) -> Outcome {
        if self.outcome.is_terminal() || !(self.win_at_rest || self.verdict_pending) {
            return self.outcome;
        }
        self.outcome = if total >= self.max_score {
            Outcome::Won
        } else if self.verdict_pending {
            Outcome::Lost
        } else {
            Outcome::Playing
        };
        if self.outcome.is_terminal() {
            self.verdict_pending = false;
            log::info!("game over: {:?} with {total}/{}", self.outcome, self.max_score);
        }
        self.outcome
    }

    /// The last question was submitted.
    pub fn sequence_exhausted(&mut self, total: i64, animating: bool) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }
        if animating {
            log::debug!("verdict deferred until the player comes to rest");
            self.verdict_pending = true;
            return self.outcome;
        }
        self.verdict_pending = true;
        self.animation_finished(total)
    }
}
