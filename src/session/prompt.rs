//! Line-oriented operator input.

use std::collections::VecDeque;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Errors that can occur while reading a line from the operator.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Ctrl+C at the prompt.
    #[error("Interrupted")]
    Interrupted,

    /// Ctrl+D or closed input.
    #[error("End of input")]
    Eof,

    #[error("Input error: {0}")]
    Io(String),
}

impl PromptError {
    /// Whether this error is the operator asking to quit.
    pub fn is_abort(&self) -> bool {
        matches!(self, PromptError::Interrupted | PromptError::Eof)
    }
}

/// Source of operator answers.
pub trait Prompt {
    /// Show `prompt` and block until the operator enters a line.
    ///
    /// The returned line has no trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Interactive terminal prompt backed by rustyline.
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new().map_err(|e| PromptError::Io(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(PromptError::Interrupted),
            Err(ReadlineError::Eof) => Err(PromptError::Eof),
            Err(e) => Err(PromptError::Io(e.to_string())),
        }
    }
}

/// Prompt that replays canned answers.
///
/// A `None` entry simulates Ctrl+C. Once the script runs out every read
/// returns [`PromptError::Eof`].
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue a Ctrl+C after the answers scripted so far.
    pub fn then_interrupt(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Some(answer)) => Ok(answer),
            Some(None) => Err(PromptError::Interrupted),
            None => Err(PromptError::Eof),
        }
    }
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        (**self).read_line(prompt)
    }
}
