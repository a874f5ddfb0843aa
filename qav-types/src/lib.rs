//! Core types for the qav crate.
//!
//! This crate provides the building blocks that questions are made of:
//! - `AnswerValue` and `AnswerTable` - Accepted answers keyed by answer key
//! - `Filter` and its variants - Pruning of choice lists, optionally driven by earlier answers
//! - `Validator` and its variants - Acceptance and transformation of raw answers
//! - `InputSource`, `OutputSink` and `Console` - The terminal boundary
//! - `ListPack` and `bold` - Formatting helpers for confirmation output

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, AnswerTable};

mod error;
pub use error::QavError;

pub mod filter;
pub use filter::{DynamicFilter, Filter, PostFilter, PreFilter, SubFilter};

pub mod validator;
pub use validator::{
    BasicValidator, CompactListValidator, DateValidator, DomainNameValidator, EmailValidator,
    HashValidator, IntegerValidator, IpAddressValidator, IpNetmaskValidator, ListValidator,
    MacAddressValidator, Resolver, TupleValidator, UriValidator, ValidationError, Validator,
    ValidatorState, YesNoValidator,
};

#[cfg(feature = "dns")]
pub use validator::SystemResolver;

mod traits;
pub use traits::{Console, InputSource, OutputSink};

mod listpack;
pub use listpack::{ListPack, ListPackConfig};

mod style;
pub use style::{BOLD, OFF, bold};
