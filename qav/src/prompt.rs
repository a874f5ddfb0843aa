//! Prompt templates.
//!
//! A prompt may refer to earlier answers with `%(key)s` placeholders. `%%`
//! renders a literal `%`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::AnswerTable;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%|%\(([^)]*)\)s").expect("placeholder regex is valid"));

/// Substitute every `%(key)s` placeholder in `template` from `answers`.
///
/// Placeholders naming a key that has no answer are left as they are.
pub fn render(template: &str, answers: &AnswerTable) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let Some(key) = caps.get(1) else {
                return "%".to_string();
            };
            match answers.get(key.as_str()) {
                Some(value) => value.to_string(),
                None => {
                    tracing::warn!(
                        key = key.as_str(),
                        template,
                        "no answer for prompt placeholder"
                    );
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
