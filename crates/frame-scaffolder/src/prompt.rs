//! The prompting seam between the workflow and the terminal

use anyhow::Result;

/// Answer to a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Answered(T),
    /// The user backed out; the run stops without touching the filesystem
    Cancelled,
}

/// One entry of a selection list
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl ToString) -> Self {
        Self {
            value,
            label: label.to_string(),
        }
    }
}

/// Blocking, one-at-a-time user interaction.
///
/// `Err` is reserved for terminal failures; cancellation is `Ok(Prompted::Cancelled)`.
pub trait Prompter {
    /// Free-text question, pre-filled with `default`
    fn text(&mut self, message: &str, default: &str) -> Result<Prompted<String>>;

    /// Pick exactly one of `choices`
    fn select<T: Clone + Eq>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<Prompted<T>>;

    /// Non-blocking notice shown between prompts
    fn warning(&mut self, message: &str) -> Result<()>;
}
