use std::fmt;

use crate::{
    AnswerTable, AnswerValue, BasicValidator, Console, OutputSink, QavError, Validator, bold,
    prompt,
};

/// Raw answer that ends a multiple-answer question.
pub const SENTINEL: &str = ".";

const MULTIPLE_NOTICE: &str =
    "Multiple answers are supported for this question.  Please enter a \".\"  character to finish.";

/// A single question, its validators and its sub-questions.
///
/// The prompt may refer to earlier answers with `%(key)s` placeholders. The
/// accepted answer is stored under `key`. When several validators are
/// configured, all of them must accept an answer and the first one decides
/// the stored value. Without any validator, any non-empty answer is accepted.
///
/// Sub-questions are asked after this question is answered and can see its
/// answer.
pub struct Question {
    prompt: String,
    key: String,
    printable_name: Option<String>,
    multiple: bool,
    validators: Vec<Box<dyn Validator>>,
    subquestions: Vec<Question>,
}

impl Question {
    /// Create a question storing its answer under `key`.
    pub fn new(prompt: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            key: key.into(),
            printable_name: None,
            multiple: false,
            validators: Vec::new(),
            subquestions: Vec::new(),
        }
    }

    /// Add a validator.
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Replace all validators.
    pub fn validators(mut self, validators: Vec<Box<dyn Validator>>) -> Self {
        self.validators = validators;
        self
    }

    /// Keep asking until the user enters `"."`, collecting a list.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Name shown next to the answer when a question set is confirmed.
    pub fn printable_name(mut self, name: impl Into<String>) -> Self {
        self.printable_name = Some(name.into());
        self
    }

    /// Add a sub-question.
    pub fn subquestion(mut self, question: Question) -> Self {
        self.subquestions.push(question);
        self
    }

    /// The prompt template.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The answer key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The name shown at confirmation time, defaulting to the key.
    pub fn name(&self) -> &str {
        self.printable_name.as_deref().unwrap_or(&self.key)
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn subquestions(&self) -> &[Question] {
        &self.subquestions
    }

    /// Append a sub-question.
    pub fn add(&mut self, question: Question) -> &mut Self {
        self.subquestions.push(question);
        self
    }

    /// Remove the first sub-question equal to `question`.
    ///
    /// # Errors
    /// [`QavError::NotASubquestion`] if there is no such sub-question.
    pub fn remove(&mut self, question: &Question) -> Result<Question, QavError> {
        let position = self
            .subquestions
            .iter()
            .position(|q| q == question)
            .ok_or_else(|| QavError::NotASubquestion(question.key.clone()))?;
        Ok(self.subquestions.remove(position))
    }

    fn ensure_validator(&mut self) {
        if self.validators.is_empty() {
            self.validators.push(Box::new(BasicValidator::new()));
        }
    }

    /// Run `input` through every validator; all of them must accept it.
    ///
    /// Every validator sees the input, so each one's error reflects this
    /// attempt.
    pub fn validate(&mut self, input: &str, answers: &AnswerTable) -> bool {
        self.ensure_validator();
        self.validators
            .iter_mut()
            .fold(true, |accepted, v| v.validate(input, answers) && accepted)
    }

    /// The value accepted by the first validator.
    pub fn answer(&self) -> Option<&AnswerValue> {
        self.validators.first().and_then(|v| v.choice())
    }

    /// Print the first validator's choices.
    ///
    /// Returns `false` if the question has nothing to choose from.
    pub fn choices(&self, answers: &AnswerTable, out: &mut dyn OutputSink) -> bool {
        self.validators
            .first()
            .is_none_or(|v| v.print_choices(answers, out))
    }

    /// Ask the question, then its sub-questions.
    ///
    /// `answers` holds everything answered so far. The returned table holds
    /// only this question's answer, the validators' hints and everything the
    /// sub-questions answered. A question without choices is skipped and
    /// leaves its key out.
    ///
    /// # Errors
    /// Whatever the console's input source reports.
    pub fn ask<C: Console>(
        &mut self,
        answers: &AnswerTable,
        console: &mut C,
    ) -> Result<AnswerTable, QavError> {
        self.ensure_validator();
        let mut own = AnswerTable::new();

        if self.multiple {
            console.print(&bold(MULTIPLE_NOTICE));
            let mut collected = Vec::new();
            while let Some(value) = self.ask_once(answers, console)? {
                collected.push(value);
            }
            tracing::debug!(
                key = %self.key,
                count = collected.len(),
                "multiple answers collected"
            );
            own.insert(self.key.clone(), collected);
        } else if let Some(value) = self.ask_once(answers, console)? {
            own.insert(self.key.clone(), value);
        }

        for v in &self.validators {
            own.extend(v.hints().clone());
        }

        for child in &mut self.subquestions {
            let visible = answers.merged(&own);
            let child_answers = child.ask(&visible, console)?;
            own.extend(child_answers);
        }

        Ok(own)
    }

    /// One prompt cycle: ask until an answer is accepted.
    ///
    /// Returns `None` when there is nothing to choose from, or when the
    /// sentinel ends a multiple-answer question.
    fn ask_once<C: Console>(
        &mut self,
        answers: &AnswerTable,
        console: &mut C,
    ) -> Result<Option<AnswerValue>, QavError> {
        loop {
            let text = prompt::render(&self.prompt, answers);

            if !self.choices(answers, console) {
                tracing::warn!(question = %text, "no choices were supplied");
                return Ok(None);
            }

            let default = match answers.get(&self.key) {
                Some(value) if !self.multiple => Some(self.validators[0].stringify(value)),
                _ => None,
            };

            let input = match &default {
                Some(default) => console.get_line(&format!("{text} [{default}]: "))?,
                None => console.get_line(&format!("{text}: "))?,
            };
            let input = match default {
                Some(default) if input.is_empty() => default,
                _ => input,
            };

            if self.multiple && input == SENTINEL {
                return Ok(None);
            }

            if self.validate(&input, answers) {
                return Ok(self.answer().cloned());
            }
            for v in &self.validators {
                let error = v.error();
                if !error.is_empty() {
                    console.print(&error);
                }
            }
        }
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.prompt == other.prompt && self.key == other.key
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("prompt", &self.prompt)
            .field("key", &self.key)
            .field("printable_name", &self.printable_name)
            .field("multiple", &self.multiple)
            .field("validators", &self.validators.len())
            .field("subquestions", &self.subquestions)
            .finish()
    }
}
