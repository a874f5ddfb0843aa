//! Validators that pick from a list of choices.
//!
//! The live choice list is rebuilt on every access: the canonical choices are
//! run through every filter against the current answers, then ordered. An
//! answer is accepted if it is one of the live choices or a decimal index into
//! them. A negative index counts back from the end of the live choices.

use super::{ValidationError, Validator, ValidatorState};
use crate::{AnswerTable, AnswerValue, Filter, OutputSink};

const CHOICES_HEADER: &str = "Please select from the following choices:";

/// Keep the items no filter excludes.
fn prune<'a, T>(
    items: &'a [T],
    filters: &[Box<dyn Filter>],
    answers: &AnswerTable,
    candidate: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    let live: Vec<&T> = items
        .iter()
        .filter(|item| {
            !filters
                .iter()
                .any(|f| f.filter(candidate(*item), Some(answers)))
        })
        .collect();
    tracing::trace!(
        total = items.len(),
        live = live.len(),
        "choices recomputed"
    );
    live
}

/// Parse `input` as an index into a view of `len` choices. `-1` is the last
/// choice.
fn index(input: &str, len: usize) -> Option<usize> {
    let i = input.trim().parse::<i64>().ok()?;
    let len = i64::try_from(len).ok()?;
    let i = if i < 0 { len + i } else { i };
    (0..len).contains(&i).then_some(i as usize)
}

fn print_lines(out: &mut dyn OutputSink, lines: Vec<String>) -> bool {
    if lines.is_empty() {
        return false;
    }
    out.print(CHOICES_HEADER);
    for line in &lines {
        out.print(line);
    }
    true
}

/// Picks one string out of a list.
///
/// Live choices are sorted ascending.
#[derive(Default)]
pub struct ListValidator {
    state: ValidatorState,
    choices: Vec<String>,
    filters: Vec<Box<dyn Filter>>,
}

impl ListValidator {
    pub fn new<S: Into<String>>(choices: impl IntoIterator<Item = S>) -> Self {
        Self {
            state: ValidatorState::new(),
            choices: choices.into_iter().map(Into::into).collect(),
            filters: Vec::new(),
        }
    }

    /// Add a filter. A choice is dropped if any filter excludes it.
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// The live choices for these answers.
    pub fn choices(&self, answers: &AnswerTable) -> Vec<String> {
        let mut live: Vec<String> = prune(&self.choices, &self.filters, answers, |c| c.as_str())
            .into_iter()
            .cloned()
            .collect();
        live.sort();
        live
    }
}

impl Validator for ListValidator {
    validator_state!();

    fn check(&self, input: &str, answers: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        let choices = self.choices(answers);
        if choices.iter().any(|c| c == input) {
            return Ok(input.into());
        }
        index(input, choices.len())
            .map(|i| AnswerValue::String(choices[i].clone()))
            .ok_or_else(|| ValidationError::InvalidChoice(input.to_string()))
    }

    fn print_choices(&self, answers: &AnswerTable, out: &mut dyn OutputSink) -> bool {
        let lines = self
            .choices(answers)
            .iter()
            .enumerate()
            .map(|(i, c)| format!(" [{i}] - {c}"))
            .collect();
        print_lines(out, lines)
    }
}

/// Picks the key of one `(key, label)` pair.
///
/// Filters look at the key. Live choices are sorted ascending by pair.
#[derive(Default)]
pub struct TupleValidator {
    state: ValidatorState,
    choices: Vec<(String, String)>,
    filters: Vec<Box<dyn Filter>>,
}

impl TupleValidator {
    pub fn new<K, L>(choices: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            state: ValidatorState::new(),
            choices: choices
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
            filters: Vec::new(),
        }
    }

    /// Add a filter. A choice is dropped if any filter excludes it.
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// The live choices for these answers.
    pub fn choices(&self, answers: &AnswerTable) -> Vec<(String, String)> {
        let mut live: Vec<(String, String)> =
            prune(&self.choices, &self.filters, answers, |(key, _)| key.as_str())
                .into_iter()
                .cloned()
                .collect();
        live.sort();
        live
    }
}

impl Validator for TupleValidator {
    validator_state!();

    fn check(&self, input: &str, answers: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        let choices = self.choices(answers);
        if choices.iter().any(|(key, _)| key == input) {
            return Ok(input.into());
        }
        index(input, choices.len())
            .map(|i| AnswerValue::String(choices[i].0.clone()))
            .ok_or_else(|| ValidationError::InvalidChoice(input.to_string()))
    }

    fn print_choices(&self, answers: &AnswerTable, out: &mut dyn OutputSink) -> bool {
        let lines = self
            .choices(answers)
            .iter()
            .enumerate()
            .map(|(i, (key, label))| format!(" [{i}] - {key} ({label})"))
            .collect();
        print_lines(out, lines)
    }
}

/// Picks a key out of a `key -> label` mapping.
///
/// Filters look at the label. Live choices keep the mapping's insertion order.
/// An answer that is a key wins over the same text read as an index.
pub struct HashValidator {
    state: ValidatorState,
    choices: Vec<(String, String)>,
    filters: Vec<Box<dyn Filter>>,
    verbose: bool,
}

impl HashValidator {
    /// Build from `(key, label)` entries. A repeated key keeps its first
    /// position and takes the last label.
    pub fn new<K, L>(choices: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, label) in choices {
            let (key, label) = (key.into(), label.into());
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = label,
                None => entries.push((key, label)),
            }
        }
        Self {
            state: ValidatorState::new(),
            choices: entries,
            filters: Vec::new(),
            verbose: true,
        }
    }

    /// Add a filter. A choice is dropped if any filter excludes its label.
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Whether choice listings show labels next to keys (default `true`).
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The live choices for these answers.
    pub fn choices(&self, answers: &AnswerTable) -> Vec<(String, String)> {
        prune(&self.choices, &self.filters, answers, |(_, label)| label.as_str())
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Validator for HashValidator {
    validator_state!();

    fn check(&self, input: &str, answers: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        let choices = self.choices(answers);
        if choices.iter().any(|(key, _)| key == input) {
            return Ok(input.into());
        }
        index(input, choices.len())
            .map(|i| AnswerValue::String(choices[i].0.clone()))
            .ok_or_else(|| ValidationError::InvalidChoice(input.to_string()))
    }

    fn print_choices(&self, answers: &AnswerTable, out: &mut dyn OutputSink) -> bool {
        let lines = self
            .choices(answers)
            .iter()
            .enumerate()
            .map(|(i, (key, label))| {
                if self.verbose {
                    format!(" [{i}] - {key} ({label})")
                } else {
                    format!(" [{i}] - {key}")
                }
            })
            .collect();
        print_lines(out, lines)
    }
}

state_builders!(ListValidator, TupleValidator, HashValidator);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DynamicFilter, PreFilter, SubFilter};

    fn none() -> AnswerTable {
        AnswerTable::new()
    }

    #[test]
    fn list_filters() {
        let v = ListValidator::new(["one dog", "two dogs"]).filter(PreFilter::new("one"));
        assert_eq!(v.choices(&none()), ["one dog"]);
    }

    #[test]
    fn list_choices_get_sorted() {
        let v = ListValidator::new(["c", "b", "f", "a"]);
        assert_eq!(v.choices(&none()), ["a", "b", "c", "f"]);
    }

    #[test]
    fn list_print_choices() {
        let v = ListValidator::new(["a", "b", "c"]);
        let mut out: Vec<String> = Vec::new();
        assert!(v.print_choices(&none(), &mut out));
        assert_eq!(
            out,
            [
                "Please select from the following choices:",
                " [0] - a",
                " [1] - b",
                " [2] - c",
            ]
        );
    }

    #[test]
    fn list_no_choices() {
        let mut v = ListValidator::new(Vec::<String>::new());
        let mut out: Vec<String> = Vec::new();
        assert!(!v.print_choices(&none(), &mut out));
        assert!(out.is_empty());
        assert!(!v.validate("0", &none()));
    }

    #[test]
    fn list_validate_by_value_and_index() {
        for (value, idx) in [("a", "0"), ("b", "1"), ("c", "2")] {
            let mut v = ListValidator::new(["a", "b", "c"]);
            assert!(v.validate(value, &none()));
            assert_eq!(v.choice(), Some(&AnswerValue::from(value)));

            assert!(v.validate(idx, &none()));
            assert_eq!(v.choice(), Some(&AnswerValue::from(value)));
        }
    }

    #[test]
    fn list_validate_failure() {
        let mut v = ListValidator::new(["a", "b", "c"]);
        assert!(!v.validate("d", &none()));
        assert_eq!(v.error(), "ERROR: d is not a valid choice.");
        assert!(!v.validate("5", &none()));
        assert_eq!(v.error(), "ERROR: 5 is not a valid choice.");
        assert!(!v.validate("-4", &none()));
        assert_eq!(v.error(), "ERROR: -4 is not a valid choice.");
    }

    #[test]
    fn negative_index_counts_from_the_end() {
        let mut list = ListValidator::new(["a", "b", "c"]);
        assert!(list.validate("-1", &none()));
        assert_eq!(list.choice(), Some(&AnswerValue::from("c")));
        assert!(list.validate("-3", &none()));
        assert_eq!(list.choice(), Some(&AnswerValue::from("a")));

        let mut tuple = TupleValidator::new([("b", "B"), ("a", "A")]);
        assert!(tuple.validate("-1", &none()));
        assert_eq!(tuple.choice(), Some(&AnswerValue::from("b")));

        let mut hash = HashValidator::new([("ten", "10"), ("twenty", "20")]);
        assert!(hash.validate("-2", &none()));
        assert_eq!(hash.choice(), Some(&AnswerValue::from("ten")));
        assert!(!hash.validate("-3", &none()));
    }

    #[test]
    fn negative_index_counts_in_filtered_view() {
        let mut v = ListValidator::new(["apple", "banana", "cherry"]).filter(SubFilter::new("a"));
        assert!(v.validate("-1", &none()));
        assert_eq!(v.choice(), Some(&AnswerValue::from("banana")));
    }

    #[test]
    fn literal_negative_number_beats_index() {
        let mut v = ListValidator::new(["-1", "x", "y"]);
        assert!(v.validate("-1", &none()));
        assert_eq!(v.choice(), Some(&AnswerValue::from("-1")));
    }

    #[test]
    fn list_index_counts_in_filtered_view() {
        let mut v = ListValidator::new(["apple", "banana", "cherry"]).filter(SubFilter::new("an"));
        assert!(v.validate("0", &none()));
        assert_eq!(v.choice(), Some(&AnswerValue::from("banana")));
        assert!(!v.validate("apple", &none()));
    }

    #[test]
    fn list_filters_compose_in_any_order() {
        let foo = || DynamicFilter::new(|c| c.contains("foo"));
        let bar = || DynamicFilter::new(|c| c.contains("bar"));
        let choices = ["foo", "bar", "baz"];

        let forward = ListValidator::new(choices).filter(foo()).filter(bar());
        let backward = ListValidator::new(choices).filter(bar()).filter(foo());
        assert_eq!(forward.choices(&none()), ["baz"]);
        assert_eq!(backward.choices(&none()), forward.choices(&none()));
    }

    #[test]
    fn list_choices_follow_answers() {
        let v = ListValidator::new(["x-small", "y-small"]).filter(PreFilter::new("axis"));

        let answers: AnswerTable = [("axis", "x")].into_iter().collect();
        assert_eq!(v.choices(&answers), ["x-small"]);

        let answers: AnswerTable = [("axis", "y")].into_iter().collect();
        assert_eq!(v.choices(&answers), ["y-small"]);
    }

    #[test]
    fn tuple_choices() {
        let v = TupleValidator::new([("CONT", "Continue"), ("ABRT", "Abort")]);
        assert_eq!(
            v.choices(&none()),
            [
                ("ABRT".to_string(), "Abort".to_string()),
                ("CONT".to_string(), "Continue".to_string())
            ]
        );
    }

    #[test]
    fn tuple_print_choices() {
        let v = TupleValidator::new([("a", "A"), ("b", "B"), ("c", "C")]);
        let mut out: Vec<String> = Vec::new();
        assert!(v.print_choices(&none(), &mut out));
        assert_eq!(
            out,
            [
                "Please select from the following choices:",
                " [0] - a (A)",
                " [1] - b (B)",
                " [2] - c (C)",
            ]
        );
    }

    #[test]
    fn tuple_no_choices() {
        let mut v = TupleValidator::new(Vec::<(String, String)>::new());
        assert!(!v.print_choices(&none(), &mut Vec::<String>::new()));
        assert!(!v.validate("0", &none()));
    }

    #[test]
    fn tuple_validate_by_key_and_index() {
        for (value, idx) in [("a", "0"), ("b", "1"), ("c", "2")] {
            let mut v = TupleValidator::new([("a", "A"), ("b", "B"), ("c", "C")]);
            assert!(v.validate(value, &none()));
            assert_eq!(v.choice(), Some(&AnswerValue::from(value)));

            assert!(v.validate(idx, &none()));
            assert_eq!(v.choice(), Some(&AnswerValue::from(value)));
        }
    }

    #[test]
    fn tuple_validate_failure() {
        let mut v = TupleValidator::new([("a", "A"), ("b", "B"), ("c", "C")]);
        assert!(!v.validate("d", &none()));
        assert_eq!(v.error(), "ERROR: d is not a valid choice.");
        assert!(!v.validate("5", &none()));
        assert_eq!(v.error(), "ERROR: 5 is not a valid choice.");
    }

    #[test]
    fn hash_choices_filter_on_label() {
        let v = HashValidator::new([("ten", "10"), ("twenty", "20")]).filter(PreFilter::new("1"));
        assert_eq!(
            v.choices(&none()),
            [("ten".to_string(), "10".to_string())]
        );
    }

    #[test]
    fn hash_keeps_insertion_order() {
        let v = HashValidator::new([("zulu", "z"), ("alpha", "a"), ("zulu", "Z")]);
        assert_eq!(
            v.choices(&none()),
            [
                ("zulu".to_string(), "Z".to_string()),
                ("alpha".to_string(), "a".to_string())
            ]
        );
    }

    #[test]
    fn hash_print_choices() {
        let v = HashValidator::new([("ten", "10"), ("twenty", "20")]);
        let mut out: Vec<String> = Vec::new();
        assert!(v.print_choices(&none(), &mut out));
        assert_eq!(
            out,
            [
                "Please select from the following choices:",
                " [0] - ten (10)",
                " [1] - twenty (20)",
            ]
        );

        let terse = HashValidator::new([("ten", "10")]).verbose(false);
        let mut out: Vec<String> = Vec::new();
        assert!(terse.print_choices(&none(), &mut out));
        assert_eq!(out[1], " [0] - ten");
    }

    #[test]
    fn hash_validate_success() {
        for (key, idx) in [("ten", "0"), ("twenty", "1")] {
            let mut v = HashValidator::new([("ten", "10"), ("twenty", "20")]);
            assert!(v.validate(key, &none()));
            assert_eq!(v.choice(), Some(&AnswerValue::from(key)));

            assert!(v.validate(idx, &none()));
            assert_eq!(v.choice(), Some(&AnswerValue::from(key)));
        }
    }

    #[test]
    fn hash_literal_key_beats_index() {
        let mut v = HashValidator::new([("x", "first"), ("0", "zero")]);
        assert!(v.validate("0", &none()));
        assert_eq!(v.choice(), Some(&AnswerValue::from("0")));
        assert!(v.validate("1", &none()));
        assert_eq!(v.choice(), Some(&AnswerValue::from("0")));
    }

    #[test]
    fn hash_validate_failure() {
        let mut v = HashValidator::new([("ten", "10"), ("twenty", "20")]);
        assert!(!v.validate("d", &none()));
        assert_eq!(v.error(), "ERROR: d is not a valid choice.");
        assert!(!v.validate("5", &none()));
        assert_eq!(v.error(), "ERROR: 5 is not a valid choice.");
    }
}
