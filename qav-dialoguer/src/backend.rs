//! Dialoguer implementation of the qav console traits.

use std::fmt;
use std::io;

use dialoguer::Input;
use dialoguer::theme::Theme;
use qav::{InputSource, OutputSink, QavError};

/// Renders prompts exactly as qav formats them.
///
/// qav already appends the default and the trailing `": "`, so the prompt is
/// written without any decoration.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerbatimTheme;

impl Theme for VerbatimTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt}")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}{sel}")
    }
}

/// Map a dialoguer failure to the qav error it stands for.
fn map_error(err: dialoguer::Error) -> QavError {
    match err {
        dialoguer::Error::IO(io_err)
            if matches!(
                io_err.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
            ) =>
        {
            QavError::Cancelled
        }
        other => QavError::backend(other),
    }
}

/// Console for interactive terminal sessions.
///
/// Each prompt reads one line with `dialoguer::Input`; empty answers are
/// allowed so that defaults can be accepted with a bare return.
#[derive(Debug, Default, Clone)]
pub struct DialoguerConsole {
    theme: VerbatimTheme,
}

impl DialoguerConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for DialoguerConsole {
    fn get_line(&mut self, prompt: &str) -> Result<String, QavError> {
        let line = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(map_error)?;
        tracing::trace!(prompt, line = %line, "line read");
        Ok(line)
    }
}

impl OutputSink for DialoguerConsole {
    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}
