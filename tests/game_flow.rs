// Integration tests (native) for the game controller.
// A manual frame scheduler stands in for requestAnimationFrame so the
// animation loop can be stepped deterministically under `cargo test`.

use quiz_maze::{
    FrameScheduler, Game, GameConfig, Maze, MazePayload, NavEvent, NavigationMode, Outcome,
    Question, Quiz, Tick,
};

#[derive(Default)]
struct ManualFrames {
    pending: bool,
    requests: usize,
    cancels: usize,
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) {
        if !self.pending {
            self.pending = true;
            self.requests += 1;
        }
    }

    fn cancel_frame(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancels += 1;
        }
    }

    fn frame_fired(&mut self) {
        self.pending = false;
    }
}

/// 3x13 maze whose middle row is an 11-cell corridor from (1,1) to (1,11).
fn corridor() -> Maze {
    let mut grid = vec![vec![1i64; 13]; 3];
    for col in 1..=11 {
        grid[1][col] = 0;
    }
    let path = (1..=11).map(|col| [1usize, col].into()).collect();
    Maze::try_from(MazePayload { grid, path }).unwrap()
}

fn quiz(json: &str) -> Quiz {
    let questions: Vec<Question> = serde_json::from_str(json).unwrap();
    Quiz::new(questions).unwrap()
}

/// Single question worth up to 10: scaled path index == corridor offset.
fn ten_point_game() -> Game<ManualFrames> {
    let quiz = quiz(
        r#"[{"question": "How far?", "answers": [
            {"text": "none", "points": 0}, {"text": "a bit", "points": 2},
            {"text": "half", "points": 5}, {"text": "all", "points": 10}]}]"#,
    );
    Game::new(quiz, corridor(), &GameConfig::default(), ManualFrames::default()).unwrap()
}

/// Three single-select questions with maxima 10/10/10.
fn thirty_point_game(navigation: NavigationMode) -> Game<ManualFrames> {
    let question = r#"{"question": "Q", "answers": [
        {"text": "wrong", "points": 0}, {"text": "close", "points": 5}, {"text": "right", "points": 10}]}"#;
    let quiz = quiz(&format!("[{question}, {question}, {question}]"));
    let config = GameConfig { navigation, ..GameConfig::default() };
    Game::new(quiz, corridor(), &config, ManualFrames::default()).unwrap()
}

fn run_frames(game: &mut Game<ManualFrames>) -> usize {
    let mut frames = 0;
    while game.frames().pending {
        game.on_frame();
        frames += 1;
        assert!(frames < 100_000, "animation never settled");
    }
    frames
}

fn queued_columns(game: &Game<ManualFrames>) -> Vec<usize> {
    game.player().queue().iter().map(|p| p.x).collect()
}

#[test]
fn scaled_path_has_one_tile_per_score() {
    let game = thirty_point_game(NavigationMode::Free);
    assert_eq!(game.max_score(), 30);
    let path = game.scaled_path();
    assert_eq!(path.len(), 31);
    assert_eq!((path[0].x, path[0].y), (1, 1));
    assert_eq!((path[30].x, path[30].y), (11, 1));
}

#[test]
fn forward_then_backward_movement_queues_sub_paths() {
    let mut game = ten_point_game();
    game.resize(130.0, 130.0);
    assert_eq!(game.layout().tile_size, 10.0);

    assert!(game.select_answer(0, 2));
    assert_eq!(queued_columns(&game), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(game.player().path_index, 5);
    assert!(game.is_animating());
    run_frames(&mut game);
    assert_eq!((game.player().x, game.player().y), (60.0, 10.0));

    assert!(game.select_answer(0, 1));
    assert_eq!(queued_columns(&game), vec![6, 5, 4, 3]);
    run_frames(&mut game);
    assert_eq!(game.player().x, 30.0);
    assert!(!game.is_animating());
}

#[test]
fn new_movement_during_animation_reuses_running_loop() {
    let mut game = ten_point_game();
    game.resize(130.0, 130.0);
    game.select_answer(0, 3);
    assert_eq!(game.frames().requests, 1);
    assert_eq!(game.on_frame(), Tick::Moving);
    assert_eq!(game.frames().requests, 2);

    game.select_answer(0, 1);
    assert_eq!(game.frames().requests, 2, "no second loop may be started");
    assert!(game.frames().pending);
    run_frames(&mut game);
    assert_eq!(game.player().path_index, 2);
    assert_eq!(game.player().x, 30.0);
}

#[test]
fn full_marks_win_once_the_player_is_at_rest() {
    let mut game = thirty_point_game(NavigationMode::Free);
    game.select_answer(0, 2);
    assert_eq!(game.forward(), NavEvent::Moved { index: 1 });
    game.select_answer(1, 2);
    game.forward();
    game.select_answer(2, 2);
    assert_eq!(game.controls().forward_label, "Submit");
    assert_eq!(game.forward(), NavEvent::Exhausted { committed: None });
    assert_eq!(game.outcome(), Outcome::Playing, "no verdict while moving");

    run_frames(&mut game);
    assert_eq!(game.total_score(), 30);
    assert_eq!(game.outcome(), Outcome::Won);
}

#[test]
fn falling_short_is_game_over() {
    let mut game = thirty_point_game(NavigationMode::Free);
    for (question, answer) in [(0, 2), (1, 2), (2, 1)] {
        game.select_answer(question, answer);
        game.forward();
    }
    assert_eq!(game.outcome(), Outcome::Playing);
    run_frames(&mut game);
    assert_eq!(game.total_score(), 25);
    assert_eq!(game.outcome(), Outcome::Lost);
}

#[test]
fn submitting_at_rest_decides_immediately() {
    let mut game = thirty_point_game(NavigationMode::Free);
    game.select_answer(0, 1);
    game.forward();
    game.select_answer(1, 0);
    game.forward();
    game.select_answer(2, 0);
    run_frames(&mut game);
    assert_eq!(game.forward(), NavEvent::Exhausted { committed: None });
    assert_eq!(game.outcome(), Outcome::Lost);
}

#[test]
fn finished_game_ignores_input() {
    let mut game = thirty_point_game(NavigationMode::Free);
    for question in 0..3 {
        game.select_answer(question, 2);
    }
    run_frames(&mut game);
    assert_eq!(game.outcome(), Outcome::Won);
    assert!(!game.select_answer(0, 0));
    assert_eq!(game.forward(), NavEvent::Ignored);
    assert_eq!(game.back(), NavEvent::Ignored);
    assert!(game.question_views().iter().all(|q| q.locked));
    assert!(!game.controls().forward_enabled);
}

#[test]
fn forward_control_needs_a_selection() {
    let mut game = thirty_point_game(NavigationMode::Free);
    let controls = game.controls();
    assert!(!controls.forward_enabled);
    assert!(!controls.back_visible);
    assert_eq!(controls.forward_label, "Next");
    assert_eq!(game.forward(), NavEvent::Ignored);

    game.select_answer(0, 0);
    assert!(game.controls().forward_enabled);
    game.forward();
    let controls = game.controls();
    assert!(controls.back_visible);
    assert!(!controls.forward_enabled);
    assert_eq!(game.back(), NavEvent::Moved { index: 0 });
}

#[test]
fn deselecting_returns_contribution_to_zero() {
    let quiz = quiz(
        r#"[{"question": "Pick all primes", "multiple_choice": true, "answers": [
            {"text": "2", "points": 4}, {"text": "3", "points": 6}, {"text": "4", "points": -1}]}]"#,
    );
    let mut game = Game::new(quiz, corridor(), &GameConfig::default(), ManualFrames::default()).unwrap();
    assert_eq!(game.max_score(), 10);

    game.select_answer(0, 0);
    game.select_answer(0, 1);
    assert_eq!(game.total_score(), 10);
    game.select_answer(0, 0);
    assert_eq!(game.total_score(), 6);
    game.select_answer(0, 1);
    assert_eq!(game.total_score(), 0);
    run_frames(&mut game);
    assert_eq!(game.player().path_index, 0);
    assert!(!game.has_selection(0));
}

#[test]
fn radio_questions_replace_their_selection() {
    let mut game = ten_point_game();
    assert!(game.select_answer(0, 3));
    assert!(game.select_answer(0, 1));
    assert!(!game.select_answer(0, 1), "re-selecting the same answer is a no-op");
    assert_eq!(game.total_score(), 2);
    let checked: Vec<bool> = game.question_views()[0].answers.iter().map(|a| a.checked).collect();
    assert_eq!(checked, vec![false, true, false, false]);
}

#[test]
fn negative_totals_clamp_to_the_start() {
    let quiz = quiz(
        r#"[{"question": "Q", "answers": [{"text": "bad", "points": -3}, {"text": "good", "points": 4}]}]"#,
    );
    let mut game = Game::new(quiz, corridor(), &GameConfig::default(), ManualFrames::default()).unwrap();
    game.select_answer(0, 0);
    assert_eq!(game.total_score(), -3);
    assert_eq!(game.target_index(), 0);
    assert!(!game.is_animating());
}

#[test]
fn resize_snaps_without_traversal() {
    let mut game = ten_point_game();
    game.resize(130.0, 130.0);
    game.select_answer(0, 2);
    game.on_frame();
    assert!(game.is_animating());

    let layout = game.resize(260.0, 400.0);
    assert_eq!(layout.tile_size, 20.0);
    assert_eq!((layout.canvas_width, layout.canvas_height), (260, 60));
    assert!(!game.is_animating());
    assert!(!game.frames().pending);
    assert_eq!(game.frames().cancels, 1);
    assert_eq!((game.player().x, game.player().y), (120.0, 20.0));
    assert_eq!(game.on_frame(), Tick::Idle);
}

#[test]
fn resize_mid_move_onto_the_goal_wins() {
    let mut game = ten_point_game();
    game.select_answer(0, 3);
    game.on_frame();
    game.resize(130.0, 130.0);
    assert_eq!(game.outcome(), Outcome::Won);
}

#[test]
fn sequential_mode_commits_on_submit_only() {
    let mut game = thirty_point_game(NavigationMode::Sequential);
    assert!(!game.controls().back_visible);
    assert_eq!(game.controls().forward_label, "Submit");
    assert!(!game.select_answer(1, 2), "only the active question is open");

    assert!(game.select_answer(0, 2));
    assert_eq!(game.total_score(), 0);
    assert!(!game.is_animating());

    assert_eq!(game.forward(), NavEvent::Committed { question: 0, next: 1 });
    assert_eq!(game.total_score(), 10);
    assert!(game.is_animating());
    assert!(!game.select_answer(0, 0), "committed answers are locked");
    assert_eq!(game.back(), NavEvent::Ignored);

    game.select_answer(1, 2);
    game.forward();
    game.select_answer(2, 1);
    assert_eq!(game.forward(), NavEvent::Exhausted { committed: Some(2) });
    assert_eq!(game.outcome(), Outcome::Playing);
    run_frames(&mut game);
    assert_eq!(game.total_score(), 25);
    assert_eq!(game.outcome(), Outcome::Lost);
}

#[test]
fn sequential_full_marks_win() {
    let mut game = thirty_point_game(NavigationMode::Sequential);
    for question in 0..3 {
        game.select_answer(question, 2);
        game.forward();
        run_frames(&mut game);
    }
    assert_eq!(game.outcome(), Outcome::Won);
    assert_eq!(game.player().path_index, 30);
}

#[test]
fn sequential_mode_never_wins_before_the_last_submission() {
    let quiz = quiz(
        r#"[{"question": "Q1", "answers": [{"text": "right", "points": 10}]},
            {"question": "Q2", "answers": [{"text": "meh", "points": 0}, {"text": "bad", "points": -5}]}]"#,
    );
    let config = GameConfig { navigation: NavigationMode::Sequential, ..GameConfig::default() };
    let mut game = Game::new(quiz, corridor(), &config, ManualFrames::default()).unwrap();
    assert_eq!(game.max_score(), 10);

    game.select_answer(0, 0);
    assert_eq!(game.forward(), NavEvent::Committed { question: 0, next: 1 });
    run_frames(&mut game);
    assert_eq!(game.total_score(), 10);
    assert_eq!(game.outcome(), Outcome::Playing);
    assert!(!game.navigator().is_exhausted());

    game.resize(130.0, 130.0);
    assert_eq!(game.outcome(), Outcome::Playing);

    game.select_answer(1, 0);
    assert_eq!(game.forward(), NavEvent::Exhausted { committed: Some(1) });
    assert_eq!(game.outcome(), Outcome::Won);
}

#[test]
fn free_mode_wins_as_soon_as_the_goal_is_reached() {
    let quiz = quiz(
        r#"[{"question": "Q1", "answers": [{"text": "right", "points": 10}]},
            {"question": "Q2", "answers": [{"text": "meh", "points": 0}]}]"#,
    );
    let mut game = Game::new(quiz, corridor(), &GameConfig::default(), ManualFrames::default()).unwrap();
    game.select_answer(0, 0);
    run_frames(&mut game);
    assert_eq!(game.outcome(), Outcome::Won);
}

#[test]
fn scene_ends_with_the_player_token() {
    let mut game = ten_point_game();
    game.resize(130.0, 130.0);
    let shapes = game.scene();
    // 28 walls, five shapes each, plus two markers and the player
    assert_eq!(shapes.len(), 28 * 5 + 3);
    match shapes.last() {
        Some(quiz_maze::scene::Shape::Circle { cx, cy, .. }) => assert_eq!((*cx, *cy), (15.0, 15.0)),
        other => panic!("expected player circle, got {other:?}"),
    }
}
