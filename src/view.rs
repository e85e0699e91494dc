//! Declarative view state for the question panel and its controls.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Radio,
    Checkbox,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Radio => "radio",
            InputKind::Checkbox => "checkbox",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerView {
    pub text: String,
    pub points: i64,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    /// "1. What is ..." style heading.
    pub title: String,
    pub input: InputKind,
    pub answers: Vec<AnswerView>,
    pub active: bool,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlsView {
    pub back_visible: bool,
    pub forward_label: &'static str,
    pub forward_enabled: bool,
}
