//! Validators.
//!
//! A validator decides whether a raw answer is acceptable and, if it is, what
//! value ends up in the answer table. Every validator carries a small
//! [`ValidatorState`] with the last accepted value and the last error.
//!
//! Implementing a custom validator only takes [`Validator::check`] plus the two
//! state accessors:
//!
//! ```
//! use qav_types::{AnswerTable, AnswerValue, ValidationError, Validator, ValidatorState};
//!
//! #[derive(Default)]
//! struct Shouting {
//!     state: ValidatorState,
//! }
//!
//! impl Validator for Shouting {
//!     fn state(&self) -> &ValidatorState {
//!         &self.state
//!     }
//!
//!     fn state_mut(&mut self) -> &mut ValidatorState {
//!         &mut self.state
//!     }
//!
//!     fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
//!         if input.chars().any(char::is_lowercase) {
//!             return Err(ValidationError::Custom("Speak up!".into()));
//!         }
//!         Ok(input.into())
//!     }
//! }
//!
//! let mut v = Shouting::default();
//! assert!(!v.validate("hello", &AnswerTable::new()));
//! assert_eq!(v.error(), "ERROR: Speak up!");
//! ```

use std::net::IpAddr;

use crate::{AnswerTable, AnswerValue, OutputSink};

macro_rules! validator_state {
    () => {
        fn state(&self) -> &$crate::validator::ValidatorState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut $crate::validator::ValidatorState {
            &mut self.state
        }
    };
}

macro_rules! state_builders {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Accept empty input (only honored by validators that check for it).
                pub fn blank(mut self, blank: bool) -> Self {
                    self.state.blank = blank;
                    self
                }

                /// Set the reserved `negate` flag. No built-in validator consults it.
                pub fn negate(mut self, negate: bool) -> Self {
                    self.state.negate = negate;
                    self
                }
            }
        )+
    };
}

mod basic;
pub use basic::{
    BasicValidator, CompactListValidator, DateValidator, EmailValidator, IntegerValidator,
    IpAddressValidator, IpNetmaskValidator, MacAddressValidator, UriValidator, YesNoValidator,
};

mod choice;
pub use choice::{HashValidator, ListValidator, TupleValidator};

mod network;
pub use network::{DomainNameValidator, Resolver};

#[cfg(feature = "dns")]
pub use network::SystemResolver;

/// Why a raw answer was rejected.
///
/// The `Display` form is the message shown to the user after `ERROR: `.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Can not be empty.  Please provide a value.")]
    Empty,

    #[error("Please choose yes or no.")]
    NotYesNo,

    #[error("Please choose {}.", .0.join("/"))]
    NotListed(Vec<String>),

    /// Rejected without an explanation.
    #[error("")]
    Silent,

    #[error("{0} is not a fully qualified domain name.")]
    NotFullyQualified(String),

    #[error("{0} does not resolve.")]
    DoesNotResolve(String),

    #[error("{name} reverse address ({addr}) does not resolve.")]
    ReverseDoesNotResolve { name: String, addr: IpAddr },

    #[error("{0} is not a valid MAC address.")]
    InvalidMacAddress(String),

    #[error("{0} is not a valid IP address.")]
    InvalidIpAddress(String),

    #[error("{0} is not a valid IP netmask.")]
    InvalidNetmask(String),

    #[error("{0} is not a valid URI")]
    InvalidUri(String),

    #[error("{0} is not a valid email address.")]
    InvalidEmail(String),

    #[error("{0} is not a valid integer.")]
    InvalidInteger(String),

    #[error("{0} is not a valid choice.")]
    InvalidChoice(String),

    /// Free-form message for custom validators.
    #[error("{0}")]
    Custom(String),
}

impl ValidationError {
    /// The message to remember, or `None` for a silent rejection.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Silent => None,
            other => Some(other.to_string()),
        }
    }
}

/// Fields shared by every validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorState {
    blank: bool,
    negate: bool,
    choice: Option<AnswerValue>,
    hints: AnswerTable,
    error_message: Option<String>,
}

impl ValidatorState {
    /// Create a state that rejects blank input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state that accepts blank input.
    pub fn blank() -> Self {
        Self {
            blank: true,
            ..Self::default()
        }
    }

    /// Whether empty input is acceptable.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// The reserved `negate` flag.
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// The last accepted value.
    pub fn choice(&self) -> Option<&AnswerValue> {
        self.choice.as_ref()
    }

    /// The last error, without the `ERROR: ` prefix.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Extra answers merged next to the question's own answer.
    pub fn hints(&self) -> &AnswerTable {
        &self.hints
    }

    /// Add an extra answer to merge next to the question's own answer.
    pub fn set_hint(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.hints.insert(key, value);
    }

    /// Drop all hints.
    pub fn clear_hints(&mut self) {
        self.hints = AnswerTable::new();
    }

    /// Record an accepted value and clear the last error.
    pub fn accept(&mut self, value: AnswerValue) {
        self.choice = Some(value);
        self.error_message = None;
    }

    /// Record a rejection. The accepted value is left alone.
    pub fn reject(&mut self, error: &ValidationError) {
        self.error_message = error.message();
    }
}

/// Accepts or rejects raw answers, transforming accepted ones.
pub trait Validator {
    /// Shared validator state.
    fn state(&self) -> &ValidatorState;

    /// Mutable shared validator state.
    fn state_mut(&mut self) -> &mut ValidatorState;

    /// Decide on `input` without touching any state.
    ///
    /// `answers` holds everything answered so far; choice-based validators
    /// filter their choices against it.
    fn check(&self, input: &str, answers: &AnswerTable) -> Result<AnswerValue, ValidationError>;

    /// Check `input` and record the outcome.
    ///
    /// On success the transformed value becomes [`Validator::choice`]. On
    /// failure the error is remembered for [`Validator::error`].
    fn validate(&mut self, input: &str, answers: &AnswerTable) -> bool {
        match self.check(input, answers) {
            Ok(value) => {
                tracing::trace!(input, %value, "answer accepted");
                self.state_mut().accept(value);
                true
            }
            Err(err) => {
                tracing::debug!(input, %err, "answer rejected");
                self.state_mut().reject(&err);
                false
            }
        }
    }

    /// The last accepted value.
    fn choice(&self) -> Option<&AnswerValue> {
        self.state().choice()
    }

    /// Print the available choices.
    ///
    /// Returns `false` if there is nothing to choose from, in which case the
    /// question cannot be asked. Validators without a choice list print
    /// nothing and return `true`.
    fn print_choices(&self, _answers: &AnswerTable, _out: &mut dyn OutputSink) -> bool {
        true
    }

    /// Extra answers merged next to the question's own answer.
    fn hints(&self) -> &AnswerTable {
        self.state().hints()
    }

    /// The last error formatted for display, or an empty string.
    fn error(&self) -> String {
        match self.state().error_message() {
            Some(message) => format!("ERROR: {message}"),
            None => String::new(),
        }
    }

    /// Render a previously accepted value so that it validates again.
    fn stringify(&self, value: &AnswerValue) -> String {
        value.to_string()
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn state(&self) -> &ValidatorState {
        (**self).state()
    }

    fn state_mut(&mut self) -> &mut ValidatorState {
        (**self).state_mut()
    }

    fn check(&self, input: &str, answers: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        (**self).check(input, answers)
    }

    fn validate(&mut self, input: &str, answers: &AnswerTable) -> bool {
        (**self).validate(input, answers)
    }

    fn print_choices(&self, answers: &AnswerTable, out: &mut dyn OutputSink) -> bool {
        (**self).print_choices(answers, out)
    }

    fn hints(&self) -> &AnswerTable {
        (**self).hints()
    }

    fn error(&self) -> String {
        (**self).error()
    }

    fn stringify(&self, value: &AnswerValue) -> String {
        (**self).stringify(value)
    }
}
