//! The game controller: owns all mutable state and is the only thing UI
//! handlers and frame callbacks talk to.

use crate::animator::{FrameScheduler, Movement, PlayerState, PositionAnimator, Tick};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::maze::{Maze, Position};
use crate::navigator::{NavEvent, NavigationMode, Navigator};
use crate::outcome::{Outcome, OutcomeEvaluator};
use crate::path::scale_path;
use crate::quiz::Quiz;
use crate::scene::{self, Layout, Shape};
use crate::score::ScoreTracker;
use crate::view::{AnswerView, ControlsView, InputKind, QuestionView};

pub struct Game<S: FrameScheduler> {
    quiz: Quiz,
    maze: Maze,
    path: Vec<Position>,
    selections: Vec<Vec<bool>>,
    scores: ScoreTracker,
    animator: PositionAnimator,
    navigator: Navigator,
    verdict: OutcomeEvaluator,
    layout: Layout,
    player_color: String,
    frames: S,
}

impl<S: FrameScheduler> Game<S> {
    /// Scales the solution path to one tile per reachable score and puts the
    /// player on the start tile.
    pub fn new(quiz: Quiz, maze: Maze, config: &GameConfig, frames: S) -> Result<Self> {
        let slots = usize::try_from(quiz.max_score())
            .map_err(|_| GameError::NonPositiveMaxScore(quiz.max_score()))?
            + 1;
        let path = scale_path(maze.solution(), slots);
        if path.is_empty() {
            return Err(GameError::PathTooShort(maze.solution().len()));
        }
        let selections = quiz.questions().iter().map(|q| vec![false; q.answers.len()]).collect();
        let layout = Layout {
            tile_size: 1.0,
            canvas_width: maze.grid().cols() as u32,
            canvas_height: maze.grid().rows() as u32,
        };
        let mut animator = PositionAnimator::new(config.animation());
        animator.place_instantly(&path, 0, layout.tile_size);

        log::info!(
            "game ready: {} questions, max score {}, {}x{} maze, path {} -> {} tiles",
            quiz.len(),
            quiz.max_score(),
            maze.grid().rows(),
            maze.grid().cols(),
            maze.solution().len(),
            path.len()
        );

        Ok(Self {
            scores: ScoreTracker::new(quiz.len()),
            navigator: Navigator::new(config.navigation, quiz.len()),
            verdict: OutcomeEvaluator::new(quiz.max_score(), config.navigation),
            player_color: config.player_color.clone(),
            quiz,
            maze,
            path,
            selections,
            animator,
            layout,
            frames,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn scaled_path(&self) -> &[Position] {
        &self.path
    }

    pub fn player(&self) -> &PlayerState {
        self.animator.player()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.player().is_animating()
    }

    pub fn total_score(&self) -> i64 {
        self.scores.total_score()
    }

    pub fn max_score(&self) -> i64 {
        self.quiz.max_score()
    }

    pub fn outcome(&self) -> Outcome {
        self.verdict.outcome()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn frames(&self) -> &S {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut S {
        &mut self.frames
    }

    /// Path index the current total maps to.
    pub fn target_index(&self) -> usize {
        let last = self.path.len() - 1;
        self.total_score().clamp(0, last as i64) as usize
    }

    pub fn has_selection(&self, question: usize) -> bool {
        self.selections.get(question).is_some_and(|s| s.iter().any(|&on| on))
    }

    /// Picks (or, for multi-select questions, toggles) an answer.
    ///
    /// In free navigation the player starts moving right away; in sequential
    /// mode the selection only counts once the question is submitted.
    pub fn select_answer(&mut self, question: usize, answer: usize) -> bool {
        if self.outcome().is_terminal() {
            log::warn!("game is over; ignoring answer {answer} of question {question}");
            return false;
        }
        let Some(q) = self.quiz.question(question) else {
            log::warn!("no question {question}");
            return false;
        };
        if answer >= q.answers.len() {
            log::warn!("question {question} has no answer {answer}");
            return false;
        }
        if self.navigator.mode() == NavigationMode::Sequential
            && self.navigator.active() != Some(question)
        {
            log::warn!("question {question} is not open for answers");
            return false;
        }
        let multiple = q.multiple_choice;
        let selected = &mut self.selections[question];
        if multiple {
            selected[answer] = !selected[answer];
        } else {
            if selected[answer] {
                return false;
            }
            selected.iter_mut().for_each(|on| *on = false);
            selected[answer] = true;
        }
        if self.navigator.mode() == NavigationMode::Free {
            self.commit_score(question);
        }
        true
    }

    /// "Next" / "Submit".
    pub fn forward(&mut self) -> NavEvent {
        if self.outcome().is_terminal() {
            return NavEvent::Ignored;
        }
        let has_selection = self.navigator.active().is_some_and(|q| self.has_selection(q));
        let event = self.navigator.forward(has_selection);
        match event {
            NavEvent::Committed { question, .. } => self.commit_score(question),
            NavEvent::Exhausted { committed } => {
                if let Some(question) = committed {
                    self.commit_score(question);
                }
                let (total, animating) = (self.total_score(), self.is_animating());
                self.verdict.sequence_exhausted(total, animating);
            }
            NavEvent::Moved { .. } | NavEvent::Ignored => {}
        }
        event
    }

    /// "Back".
    pub fn back(&mut self) -> NavEvent {
        if self.outcome().is_terminal() {
            return NavEvent::Ignored;
        }
        self.navigator.back()
    }

    /// Runs one animation frame. Schedules the next frame while the player is
    /// still moving and decides the outcome once it comes to rest.
    pub fn on_frame(&mut self) -> Tick {
        self.frames.frame_fired();
        let tick = self.animator.tick(self.layout.tile_size);
        match tick {
            Tick::Moving => self.frames.request_frame(),
            Tick::Finished => {
                log::debug!("player at rest on path index {}", self.player().path_index);
                let total = self.total_score();
                self.verdict.animation_finished(total);
            }
            Tick::Idle => {}
        }
        tick
    }

    /// Refits the maze into a panel of the given size and snaps the player to
    /// its tile. A movement in progress is dropped and counts as finished.
    pub fn resize(&mut self, panel_width: f64, panel_height: f64) -> Layout {
        self.layout = Layout::fit(panel_width, panel_height, self.maze.grid());
        let index = self.player().path_index;
        if self.animator.place_instantly(&self.path, index, self.layout.tile_size) {
            self.frames.cancel_frame();
            let total = self.total_score();
            self.verdict.animation_finished(total);
        }
        self.layout
    }

    pub fn question_views(&self) -> Vec<QuestionView> {
        let active = self.navigator.active();
        let over = self.outcome().is_terminal();
        self.quiz
            .questions()
            .iter()
            .enumerate()
            .map(|(index, q)| QuestionView {
                index,
                title: format!("{}. {}", index + 1, q.question),
                input: if q.multiple_choice { InputKind::Checkbox } else { InputKind::Radio },
                answers: q
                    .answers
                    .iter()
                    .zip(&self.selections[index])
                    .map(|(a, &checked)| AnswerView { text: a.text.clone(), points: a.points, checked })
                    .collect(),
                active: active == Some(index),
                locked: over || self.navigator.is_locked(index),
            })
            .collect()
    }

    pub fn controls(&self) -> ControlsView {
        let open = !self.outcome().is_terminal() && !self.navigator.is_exhausted();
        ControlsView {
            back_visible: open && self.navigator.back_visible(),
            forward_label: self.navigator.forward_label(),
            forward_enabled: open && self.navigator.active().is_some_and(|q| self.has_selection(q)),
        }
    }

    /// Everything to paint for the current frame, walls first.
    pub fn scene(&self) -> Vec<Shape> {
        let tile = self.layout.tile_size;
        let mut shapes = scene::maze_shapes(self.maze.grid(), self.maze.start(), self.maze.end(), tile);
        let player = self.player();
        shapes.push(scene::player_shape(player.x, player.y, tile, &self.player_color));
        shapes
    }

    fn commit_score(&mut self, question: usize) {
        let points: i64 = self.quiz.question(question).map_or(0, |q| {
            q.answers
                .iter()
                .zip(&self.selections[question])
                .filter(|&(_, &on)| on)
                .fold(0i64, |total, (a, _)| total.saturating_add(a.points))
        });
        self.scores.set_question_score(question, points);
        self.move_player();
    }

    fn move_player(&mut self) {
        let target = self.target_index();
        if self.animator.move_to(&self.path, target) == Movement::Started {
            self.frames.cancel_frame();
            self.frames.request_frame();
        }
    }
}
