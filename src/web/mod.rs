//! Browser entry points: loads the game, binds it to the page and drives the
//! animation loop.
//!
//! All state lives in one thread-local [`App`]. Event handlers and frame
//! callbacks borrow it synchronously; nothing holds the borrow across an
//! await.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Window, window};

pub mod canvas;
pub mod dom;
pub mod frames;
pub mod loader;
pub mod logging;

use self::dom::{Page, dom_err};
use self::frames::BrowserFrames;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::outcome::Outcome;

const LOAD_FAILED: &str = "Failed to load game data. Please try refreshing the page.";

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

struct App {
    game: Game<BrowserFrames>,
    page: Page,
    shown: Outcome,
}

impl App {
    fn refresh_panel(&mut self) {
        let views = self.game.question_views();
        let controls = self.game.controls();
        self.page.sync(&views, &controls);
    }

    fn redraw(&self) {
        self.page.paint(&self.game.scene());
    }

    fn refit(&mut self) {
        let (w, h) = self.page.panel_size();
        let layout = self.game.resize(w, h);
        self.page.apply_layout(layout);
        self.redraw();
    }

    /// Pops the win / game-over dialog the first time the game is decided.
    fn announce_outcome(&mut self) {
        let outcome = self.game.outcome();
        if outcome != self.shown {
            self.shown = outcome;
            self.refresh_panel();
            self.page.show_outcome(outcome);
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Starts the game with the default endpoints and element ids.
#[wasm_bindgen]
pub fn start_game() -> std::result::Result<(), JsValue> {
    launch(GameConfig::default())
}

/// Starts the game with a JSON configuration object; missing keys default.
#[wasm_bindgen]
pub fn start_game_with_config(config_json: &str) -> std::result::Result<(), JsValue> {
    launch(GameConfig::from_json(config_json)?)
}

fn launch(config: GameConfig) -> std::result::Result<(), JsValue> {
    logging::init(config.log_filter()?);
    spawn_local(async move {
        if let Err(err) = initialize(config).await {
            log::error!("error initializing game: {err}");
            if let Some(win) = window() {
                if let Err(err) = win.alert_with_message(LOAD_FAILED) {
                    log::error!("could not alert: {err:?}");
                }
            }
        }
    });
    Ok(())
}

async fn initialize(config: GameConfig) -> Result<()> {
    let (quiz, maze) = loader::load(&config).await?;

    let win = window().ok_or_else(|| GameError::Dom("no window".into()))?;
    let doc = win.document().ok_or_else(|| GameError::Dom("no document".into()))?;
    let mut page = Page::bind(&doc, &config.elements)?;

    let on_frame = Closure::wrap(Box::new(move |_ts: f64| {
        with_app(|app| {
            app.game.on_frame();
            app.redraw();
            app.announce_outcome();
        });
    }) as Box<dyn FnMut(f64)>);
    let game = Game::new(quiz, maze, &config, BrowserFrames::new(win.clone(), on_frame))?;

    page.render_questions(&game.question_views())?;
    bind_listeners(&win, &page)?;

    let mut app = App { game, page, shown: Outcome::Playing };
    app.refresh_panel();
    app.refit();
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    closure.forget();
    Ok(())
}

fn bind_listeners(win: &Window, page: &Page) -> Result<()> {
    for (question, inputs) in page.inputs().iter().enumerate() {
        for (answer, input) in inputs.iter().enumerate() {
            listen(input, "change", move |_evt: web_sys::Event| {
                with_app(|app| {
                    app.game.select_answer(question, answer);
                    app.refresh_panel();
                });
            })?;
        }
    }

    listen(&page.next, "click", |_evt: web_sys::MouseEvent| {
        with_app(|app| {
            app.game.forward();
            app.refresh_panel();
            app.announce_outcome();
        });
    })?;

    listen(&page.prev, "click", |_evt: web_sys::MouseEvent| {
        with_app(|app| {
            app.game.back();
            app.refresh_panel();
        });
    })?;

    for button in &page.play_again {
        listen(button, "click", |_evt: web_sys::MouseEvent| {
            if let Some(win) = window() {
                if let Err(err) = win.location().reload() {
                    log::error!("reload failed: {err:?}");
                }
            }
        })?;
    }

    listen(win, "resize", |_evt: web_sys::Event| {
        with_app(|app| {
            app.refit();
            app.announce_outcome();
        });
    })
}
