//! Scripted console for running questions without user interaction.
//!
//! `ScriptedConsole` answers prompts from a fixed list of lines and records
//! everything that was asked and printed, so tests can assert on the whole
//! conversation.
//!
//! # Example
//!
//! ```rust
//! use qav::{Question, ScriptedConsole, YesNoValidator, AnswerTable};
//!
//! let mut console = ScriptedConsole::new(["maybe", "YES"]);
//! let mut question = Question::new("Continue?", "continue").validator(YesNoValidator::new());
//!
//! let answers = question.ask(&AnswerTable::new(), &mut console).unwrap();
//!
//! assert_eq!(answers.get_string("continue").unwrap(), "yes");
//! assert_eq!(console.prompts(), ["Continue?: ", "Continue?: "]);
//! assert_eq!(console.output(), ["ERROR: Please choose yes or no."]);
//! ```

use std::collections::VecDeque;

use crate::{InputSource, OutputSink, QavError};

/// A console that replays pre-recorded answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    script: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

/// Error type for ScriptedConsole.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script exhausted at prompt: {0:?}")]
    Exhausted(String),
}

impl ScriptedConsole {
    /// Create a console that answers with `lines`, in order.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            script: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue one more answer.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.script.push_back(line.into());
        self
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every line printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedConsole {
    fn get_line(&mut self, prompt: &str) -> Result<String, QavError> {
        self.prompts.push(prompt.to_string());
        self.script
            .pop_front()
            .ok_or_else(|| QavError::backend(ScriptError::Exhausted(prompt.to_string())))
    }
}

impl OutputSink for ScriptedConsole {
    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_lines_in_order() {
        let mut console = ScriptedConsole::new(["one"]).with_line("two");
        assert_eq!(console.remaining(), 2);
        assert_eq!(console.get_line("a: ").unwrap(), "one");
        assert_eq!(console.get_line("b: ").unwrap(), "two");
        assert_eq!(console.prompts(), ["a: ", "b: "]);
    }

    #[test]
    fn exhausted_script_is_a_backend_error() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = console.get_line("name: ").unwrap_err();

        let QavError::Backend(inner) = err else {
            panic!("expected a backend error, got {err:?}");
        };
        assert!(matches!(
            inner.downcast_ref::<ScriptError>(),
            Some(ScriptError::Exhausted(prompt)) if prompt == "name: "
        ));
    }

    #[test]
    fn records_output() {
        let mut console = ScriptedConsole::default();
        console.print("hello");
        assert_eq!(console.output(), ["hello"]);
    }
}
