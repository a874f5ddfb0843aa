//! # qav-dialoguer
//!
//! Terminal console for qav.
//!
//! [`DialoguerConsole`] reads answers with `dialoguer` and prints to standard
//! output, so any question or question set can be asked interactively.
//!
//! ## Example
//!
//! ```rust,no_run
//! use qav::{Question, QuestionSet, YesNoValidator};
//! use qav_dialoguer::DialoguerConsole;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut set = QuestionSet::new();
//!     set.add(Question::new("What is your name?", "name"))
//!         .add(
//!             Question::new("Are you a developer?", "developer").validator(YesNoValidator::new()),
//!         );
//!
//!     let mut console = DialoguerConsole::new();
//!     if let Some(answers) = set.ask_and_confirm(&mut console, &[], true)? {
//!         println!("{answers:#?}");
//!     }
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerConsole, VerbatimTheme};
