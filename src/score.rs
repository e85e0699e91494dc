//! Per-question point totals.

/// One slot per question holding the points of its current selection
/// (0 while unanswered). Writing a slot replaces it, so re-selecting never
/// accumulates. The tracker does not clamp; callers clamp the total to the
/// path range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    scores: Vec<i64>,
}

impl ScoreTracker {
    pub fn new(question_count: usize) -> Self {
        Self { scores: vec![0; question_count] }
    }

    /// Returns `false` (and changes nothing) for an unknown question.
    pub fn set_question_score(&mut self, index: usize, points: i64) -> bool {
        match self.scores.get_mut(index) {
            Some(slot) => {
                *slot = points;
                true
            }
            None => {
                log::warn!("ignoring score for unknown question {index}");
                false
            }
        }
    }

    pub fn question_score(&self, index: usize) -> Option<i64> {
        self.scores.get(index).copied()
    }

    pub fn total_score(&self) -> i64 {
        self.scores.iter().fold(0i64, |total, &points| total.saturating_add(points))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
