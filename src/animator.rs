//! Player token movement along the scaled path.
//!
//! A score change becomes a queue of tiles to visit; each animation frame
//! eases the token a fixed fraction of the remaining distance towards the
//! tile at the head of the queue, snapping once it is close enough.

use std::collections::VecDeque;

use crate::maze::Position;
use crate::path::traversal;

pub const DEFAULT_SPEED: f64 = 0.15;
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.5;

/// Source of "call me on the next display frame" callbacks.
///
/// At most one frame is ever pending: `request_frame` after `cancel_frame`
/// replaces it, it never stacks a second loop.
pub trait FrameScheduler {
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
    /// Called at the start of every frame callback; the pending frame is
    /// the one now running.
    fn frame_fired(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    /// Fraction of the remaining distance covered per frame.
    pub speed: f64,
    /// Pixel distance (per axis) under which the token snaps to its target.
    pub snap_threshold: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self { speed: DEFAULT_SPEED, snap_threshold: DEFAULT_SNAP_THRESHOLD }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Animating,
}

/// Result of asking the token to go to a new path index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Already there; nothing queued.
    Unchanged,
    /// Was idle, now animating. The caller must schedule a frame.
    Started,
    /// Was already animating; the queue was replaced and the running loop
    /// keeps going.
    Retargeted,
}

/// Result of a single animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Nothing to animate.
    Idle,
    /// Token moved; another frame is needed.
    Moving,
    /// Queue exhausted during this frame; the token is at rest.
    Finished,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub path_index: usize,
    pub x: f64,
    pub y: f64,
    queue: VecDeque<Position>,
    target: Option<(f64, f64)>,
    animating: bool,
}

impl PlayerState {
    pub fn queue(&self) -> &VecDeque<Position> {
        &self.queue
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[derive(Clone, Debug, Default)]
pub struct PositionAnimator {
    player: PlayerState,
    settings: AnimationSettings,
}

impl PositionAnimator {
    pub fn new(settings: AnimationSettings) -> Self {
        Self { player: PlayerState::default(), settings }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn state(&self) -> AnimatorState {
        if self.player.animating { AnimatorState::Animating } else { AnimatorState::Idle }
    }

    /// Queues the walk from the current path index to `new_index`.
    ///
    /// When already animating, the tile being approached stays the target and
    /// only the queue behind it is replaced.
    pub fn move_to(&mut self, path: &[Position], new_index: usize) -> Movement {
        if path.is_empty() || new_index == self.player.path_index {
            return Movement::Unchanged;
        }
        let steps = traversal(path, self.player.path_index, new_index);
        log::debug!(
            "moving player {} -> {} ({} tiles)",
            self.player.path_index,
            new_index,
            steps.len()
        );
        self.player.path_index = new_index.min(path.len() - 1);
        self.player.queue = steps.into();
        if self.player.animating {
            Movement::Retargeted
        } else {
            self.player.animating = true;
            Movement::Started
        }
    }

    /// Puts the token straight onto `index` without any traversal. Used for
    /// the initial placement and whenever the tile size changes.
    ///
    /// Returns `true` if a running animation was cut short.
    pub fn place_instantly(&mut self, path: &[Position], index: usize, tile_size: f64) -> bool {
        let interrupted = self.player.animating;
        self.player.queue.clear();
        self.player.target = None;
        self.player.animating = false;
        if let Some(last) = path.len().checked_sub(1) {
            let index = index.min(last);
            let pos = path[index];
            self.player.path_index = index;
            self.player.x = pos.x as f64 * tile_size;
            self.player.y = pos.y as f64 * tile_size;
        }
        interrupted
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self, tile_size: f64) -> Tick {
        if !self.player.animating {
            return Tick::Idle;
        }
        let AnimationSettings { speed, snap_threshold } = self.settings;
        loop {
            let (tx, ty) = match self.player.target {
                Some(target) => target,
                None => match self.player.queue.pop_front() {
                    Some(next) => {
                        let target = (next.x as f64 * tile_size, next.y as f64 * tile_size);
                        self.player.target = Some(target);
                        target
                    }
                    None => {
                        self.player.animating = false;
                        return Tick::Finished;
                    }
                },
            };
            let dx = tx - self.player.x;
            let dy = ty - self.player.y;
            if dx.abs() < snap_threshold && dy.abs() < snap_threshold {
                self.player.x = tx;
                self.player.y = ty;
                self.player.target = None;
                continue;
            }
            self.player.x += dx * speed;
            self.player.y += dy * speed;
            return Tick::Moving;
        }
    }
}
