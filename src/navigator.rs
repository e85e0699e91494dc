//! Which question is active and what the forward/back controls do.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Move back and forth freely; the last "Next" becomes "Submit".
    #[default]
    Free,
    /// Submit each question once, in order, with no way back.
    Sequential,
}

/// What a press of a navigation control did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The active question changed.
    Moved { index: usize },
    /// A question was committed and the next one became active
    /// (sequential mode only).
    Committed { question: usize, next: usize },
    /// The question sequence is done; the outcome must be decided. In
    /// sequential mode `committed` names the question submitted last.
    Exhausted { committed: Option<usize> },
    /// The press had no effect.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    mode: NavigationMode,
    index: usize,
    len: usize,
    exhausted: bool,
}

impl Navigator {
    pub fn new(mode: NavigationMode, len: usize) -> Self {
        Self { mode, index: 0, len, exhausted: false }
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Active question, if the sequence is not finished.
    pub fn active(&self) -> Option<usize> {
        match self.mode {
            NavigationMode::Sequential if self.index >= self.len => None,
            _ => Some(self.index.min(self.len.saturating_sub(1))),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn on_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Forward control. Does nothing unless the active question has an
    /// answer selected.
    pub fn forward(&mut self, has_selection: bool) -> NavEvent {
        if self.exhausted || self.len == 0 || !has_selection {
            return NavEvent::Ignored;
        }
        match self.mode {
            NavigationMode::Free => {
                if self.on_last() {
                    self.exhausted = true;
                    NavEvent::Exhausted { committed: None }
                } else {
                    self.index += 1;
                    NavEvent::Moved { index: self.index }
                }
            }
            NavigationMode::Sequential => {
                let question = self.index;
                self.index += 1;
                if self.index >= self.len {
                    self.exhausted = true;
                    NavEvent::Exhausted { committed: Some(question) }
                } else {
                    NavEvent::Committed { question, next: self.index }
                }
            }
        }
    }

    pub fn back(&mut self) -> NavEvent {
        if self.exhausted || self.mode == NavigationMode::Sequential || self.index == 0 {
            return NavEvent::Ignored;
        }
        self.index -= 1;
        NavEvent::Moved { index: self.index }
    }

    /// Committed questions can no longer change their answers.
    pub fn is_locked(&self, question: usize) -> bool {
        self.mode == NavigationMode::Sequential && question < self.index
    }

    pub fn forward_label(&self) -> &'static str {
        match self.mode {
            NavigationMode::Free if !self.on_last() => "Next",
            _ => "Submit",
        }
    }

    pub fn back_visible(&self) -> bool {
        self.mode == NavigationMode::Free && self.index > 0
    }
}
