//! Choice filters.
//!
//! A filter decides whether a candidate choice is pruned from a choice-based
//! validator's live choice list. `filter` returns `true` to exclude the
//! candidate. Filters may consult the answers given so far, which lets the
//! choices of one question depend on the answer to an earlier one.

use std::borrow::Cow;
use std::fmt;

use crate::AnswerTable;

/// A predicate that prunes choices.
pub trait Filter {
    /// Return `true` if `candidate` should be removed from the choices.
    fn filter(&self, candidate: &str, answers: Option<&AnswerTable>) -> bool;
}

enum Predicate {
    Candidate(Box<dyn Fn(&str) -> bool>),
    WithAnswers(Box<dyn Fn(&str, &AnswerTable) -> bool>),
}

/// Prunes every candidate for which a user-supplied predicate returns `true`.
pub struct DynamicFilter {
    predicate: Predicate,
}

impl DynamicFilter {
    /// Filter on the candidate alone.
    pub fn new(predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            predicate: Predicate::Candidate(Box::new(predicate)),
        }
    }

    /// Filter on the candidate and the answers given so far.
    ///
    /// When no answers are available the predicate sees an empty table.
    pub fn with_answers(predicate: impl Fn(&str, &AnswerTable) -> bool + 'static) -> Self {
        Self {
            predicate: Predicate::WithAnswers(Box::new(predicate)),
        }
    }
}

impl Filter for DynamicFilter {
    fn filter(&self, candidate: &str, answers: Option<&AnswerTable>) -> bool {
        match &self.predicate {
            Predicate::Candidate(f) => f(candidate),
            Predicate::WithAnswers(f) => match answers {
                Some(answers) => f(candidate, answers),
                None => f(candidate, &AnswerTable::new()),
            },
        }
    }
}

impl fmt::Debug for DynamicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.predicate {
            Predicate::Candidate(_) => "candidate",
            Predicate::WithAnswers(_) => "with_answers",
        };
        f.debug_struct("DynamicFilter").field("predicate", &kind).finish()
    }
}

/// Resolve the comparison string of a string filter.
///
/// If `needle` names an answer, the rendered answer is used instead.
fn resolve<'a>(needle: &'a str, answers: Option<&AnswerTable>) -> Cow<'a, str> {
    match answers.and_then(|answers| answers.get(needle)) {
        Some(value) => Cow::Owned(value.to_string()),
        None => Cow::Borrowed(needle),
    }
}

macro_rules! string_filter {
    ($(#[$doc:meta])* $name:ident, $keep:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            needle: String,
        }

        impl $name {
            /// `needle` is either a literal string or the key of an earlier answer.
            pub fn new(needle: impl Into<String>) -> Self {
                Self {
                    needle: needle.into(),
                }
            }

            /// The configured string, unresolved.
            pub fn needle(&self) -> &str {
                &self.needle
            }

            /// The string candidates are compared against for these answers.
            pub fn resolve<'a>(&'a self, answers: Option<&AnswerTable>) -> Cow<'a, str> {
                resolve(&self.needle, answers)
            }
        }

        impl Filter for $name {
            fn filter(&self, candidate: &str, answers: Option<&AnswerTable>) -> bool {
                let keep: fn(&str, &str) -> bool = $keep;
                !keep(candidate, &self.resolve(answers))
            }
        }
    };
}

string_filter!(
    /// Keeps the choices containing a given string.
    SubFilter,
    |candidate, s| candidate.contains(s)
);

string_filter!(
    /// Keeps the choices starting with a given string.
    PreFilter,
    |candidate, s| candidate.starts_with(s)
);

string_filter!(
    /// Keeps the choices ending with a given string.
    PostFilter,
    |candidate, s| candidate.ends_with(s)
);
