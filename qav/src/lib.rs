//! # qav
//!
//! Question, answer, validation: ask questions on a text console.
//!
//! A program declares questions, each backed by one or more validators that
//! accept or reject the raw answer and may turn it into a typed value. Later
//! questions can refer to earlier answers in their prompt and in the filters
//! that narrow their choices. A whole set of answers can be shown and
//! confirmed before it is used.
//!
//! ## Usage
//!
//! ```rust
//! use qav::{ListValidator, PreFilter, Question, QuestionSet, ScriptedConsole, YesNoValidator};
//!
//! let mut set = QuestionSet::new();
//! set.add(Question::new("Site", "site").validator(ListValidator::new(["cbcb", "umiacs"])))
//!     .add(
//!         Question::new("File server for %(site)s", "server")
//!             .validator(
//!                 ListValidator::new(["cbcb-fs01", "umiacs-fs01"]).filter(PreFilter::new("site")),
//!             ),
//!     )
//!     .add(Question::new("Back it up?", "backup").validator(YesNoValidator::new()));
//!
//! let mut console = ScriptedConsole::new(["umiacs", "0", "yes", "yes"]);
//! let answers = set.ask_and_confirm(&mut console, &[], true).unwrap().unwrap();
//!
//! assert_eq!(answers.get_string("server").unwrap(), "umiacs-fs01");
//! ```
//!
//! ## Consoles
//!
//! Questions read through a [`Console`]. [`ScriptedConsole`] replays fixed
//! answers for tests; `qav-dialoguer` provides a terminal console.

pub use qav_types::*;

mod question;
pub use question::{Question, SENTINEL};

mod question_set;
pub use question_set::QuestionSet;

pub mod prompt;

// Test console for running questions without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedConsole};
