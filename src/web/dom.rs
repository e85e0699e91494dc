//! The host page: question list, navigation buttons, maze canvas and modals.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
    HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::canvas;
use crate::config::ElementIds;
use crate::error::{GameError, Result};
use crate::outcome::Outcome;
use crate::scene::{Layout, Shape};
use crate::view::{ControlsView, QuestionView};

pub(crate) fn dom_err(err: JsValue) -> GameError {
    GameError::Dom(format!("{err:?}"))
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GameError::Dom(format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| GameError::Dom(format!("element #{id} has an unexpected type")))
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)
        .map_err(dom_err)?
        .dyn_into::<T>()
        .map_err(|_| GameError::Dom(format!("<{tag}> has an unexpected type")))
}

pub struct Page {
    document: Document,
    questions_list: Element,
    pub prev: HtmlElement,
    pub next: HtmlButtonElement,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    panel: HtmlElement,
    win_modal: Element,
    game_over_modal: Element,
    pub play_again: [Element; 2],
    items: Vec<HtmlElement>,
    inputs: Vec<Vec<HtmlInputElement>>,
    active: Option<usize>,
}

impl Page {
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self> {
        let canvas: HtmlCanvasElement = by_id(document, &ids.maze_canvas)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(dom_err)?
            .ok_or_else(|| GameError::Dom("canvas has no 2d context".into()))?
            .dyn_into()
            .map_err(|_| GameError::Dom("2d context has an unexpected type".into()))?;
        Ok(Self {
            document: document.clone(),
            questions_list: by_id(document, &ids.questions_list)?,
            prev: by_id(document, &ids.prev_button)?,
            next: by_id(document, &ids.next_button)?,
            canvas,
            ctx,
            panel: by_id(document, &ids.maze_panel)?,
            win_modal: by_id(document, &ids.win_modal)?,
            game_over_modal: by_id(document, &ids.game_over_modal)?,
            play_again: [
                by_id(document, &ids.play_again_button)?,
                by_id(document, &ids.play_again_game_over_button)?,
            ],
            items: Vec::new(),
            inputs: Vec::new(),
            active: None,
        })
    }

    /// Answer inputs, grouped per question.
    pub fn inputs(&self) -> &[Vec<HtmlInputElement>] {
        &self.inputs
    }

    /// Builds the question list from scratch.
    pub fn render_questions(&mut self, views: &[QuestionView]) -> Result<()> {
        let doc = &self.document;
        self.questions_list.set_inner_html("");
        self.items.clear();
        self.inputs.clear();
        for view in views {
            let item: HtmlElement = create(doc, "div")?;
            item.set_class_name("question-item");
            item.set_id(&format!("question-{}", view.index));

            let heading: HtmlElement = create(doc, "h3")?;
            heading.set_text_content(Some(&view.title));
            item.append_child(&heading).map_err(dom_err)?;

            let answers: HtmlElement = create(doc, "div")?;
            answers.set_class_name("answers-container");
            let mut inputs = Vec::with_capacity(view.answers.len());
            for answer in &view.answers {
                let row: HtmlElement = create(doc, "div")?;
                let label: HtmlElement = create(doc, "label")?;
                let input: HtmlInputElement = create(doc, "input")?;
                input.set_type(view.input.as_str());
                input.set_name(&format!("answer-{}", view.index));
                input.set_value(&answer.points.to_string());
                let text: HtmlElement = create(doc, "span")?;
                text.set_text_content(Some(&answer.text));
                label.append_child(&input).map_err(dom_err)?;
                label.append_child(&text).map_err(dom_err)?;
                row.append_child(&label).map_err(dom_err)?;
                answers.append_child(&row).map_err(dom_err)?;
                inputs.push(input);
            }
            item.append_child(&answers).map_err(dom_err)?;
            self.questions_list.append_child(&item).map_err(dom_err)?;
            self.items.push(item);
            self.inputs.push(inputs);
        }
        self.active = None;
        Ok(())
    }

    /// Mirrors selection, active question and control state onto the page.
    pub fn sync(&mut self, views: &[QuestionView], controls: &ControlsView) {
        let mut active = None;
        for (view, (item, inputs)) in views.iter().zip(self.items.iter().zip(&self.inputs)) {
            if let Err(err) = item.class_list().toggle_with_force("active", view.active) {
                log::error!("could not mark question {} active: {err:?}", view.index);
            }
            if view.active {
                active = Some(view.index);
            }
            for (input, answer) in inputs.iter().zip(&view.answers) {
                input.set_checked(answer.checked);
                input.set_disabled(view.locked);
            }
        }
        if active != self.active {
            self.active = active;
            if let Some(item) = active.and_then(|i| self.items.get(i)) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Center);
                item.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }

        let visibility = if controls.back_visible { "visible" } else { "hidden" };
        if let Err(err) = self.prev.style().set_property("visibility", visibility) {
            log::error!("could not set back button visibility: {err:?}");
        }
        self.next.set_text_content(Some(controls.forward_label));
        self.next.set_disabled(!controls.forward_enabled);
    }

    pub fn show_outcome(&self, outcome: Outcome) {
        let modal = match outcome {
            Outcome::Won => &self.win_modal,
            Outcome::Lost => &self.game_over_modal,
            Outcome::Playing => return,
        };
        if let Err(err) = modal.class_list().add_1("show") {
            log::error!("could not show {outcome:?} dialog: {err:?}");
        }
    }

    pub fn panel_size(&self) -> (f64, f64) {
        (self.panel.client_width() as f64, self.panel.client_height() as f64)
    }

    pub fn apply_layout(&self, layout: Layout) {
        self.canvas.set_width(layout.canvas_width);
        self.canvas.set_height(layout.canvas_height);
    }

    pub fn paint(&self, shapes: &[Shape]) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        canvas::paint(&self.ctx, w, h, shapes);
    }
}
