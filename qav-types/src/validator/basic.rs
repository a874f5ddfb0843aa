use std::net::IpAddr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::{ValidationError, Validator, ValidatorState};
use crate::{AnswerTable, AnswerValue};

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("date regex is valid"));

static MAC_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-f]{2}:){5}[0-9a-f]{2}$").expect("MAC address regex is valid")
});

// scheme, then a dotted domain, localhost or a dotted quad, optional port and path
static URI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^\w+:(?://)?",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        r"localhost|",
        r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URI regex is valid")
});

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email regex is valid"));

/// Accepts any non-empty text (or any text at all when `blank`).
#[derive(Debug, Clone, Default)]
pub struct BasicValidator {
    state: ValidatorState,
}

impl BasicValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for BasicValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        if !self.state.blank && input.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(input.into())
    }
}

/// Accepts `yes` or `no` in any case and stores it lowercased.
#[derive(Debug, Clone, Default)]
pub struct YesNoValidator {
    state: ValidatorState,
}

impl YesNoValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for YesNoValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        let lower = input.to_lowercase();
        match lower.as_str() {
            "yes" | "no" => Ok(lower.into()),
            _ => Err(ValidationError::NotYesNo),
        }
    }
}

/// Accepts one of a short list of words, without printing them as a menu.
///
/// Input is lowercased before it is compared and stored.
#[derive(Debug, Clone, Default)]
pub struct CompactListValidator {
    state: ValidatorState,
    choices: Vec<String>,
}

impl CompactListValidator {
    pub fn new<S: Into<String>>(choices: impl IntoIterator<Item = S>) -> Self {
        Self {
            state: ValidatorState::new(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl Validator for CompactListValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        let lower = input.to_lowercase();
        if self.choices.contains(&lower) {
            Ok(lower.into())
        } else {
            Err(ValidationError::NotListed(self.choices.clone()))
        }
    }
}

/// Accepts `YYYYMMDD` dates and stores them as midnight of that day.
///
/// Rejections carry no message.
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    state: ValidatorState,
}

impl DateValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse(input: &str) -> Option<NaiveDateTime> {
        if !DATE_REGEX.is_match(input) {
            return None;
        }
        let year: i32 = input[0..4].parse().ok()?;
        let month: u32 = input[4..6].parse().ok()?;
        let day: u32 = input[6..8].parse().ok()?;
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
    }
}

impl Validator for DateValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        if self.state.blank && input.is_empty() {
            return Ok(input.into());
        }
        Self::parse(input)
            .map(AnswerValue::DateTime)
            .ok_or(ValidationError::Silent)
    }

    fn stringify(&self, value: &AnswerValue) -> String {
        match value {
            AnswerValue::DateTime(dt) => dt.format("%Y%m%d").to_string(),
            other => other.to_string(),
        }
    }
}

/// Accepts six colon separated hex byte pairs, e.g. `aa:01:54:21:bb:0f`.
#[derive(Debug, Clone, Default)]
pub struct MacAddressValidator {
    state: ValidatorState,
}

impl MacAddressValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for MacAddressValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        if MAC_ADDRESS_REGEX.is_match(&input.to_lowercase()) {
            Ok(input.into())
        } else {
            Err(ValidationError::InvalidMacAddress(input.to_string()))
        }
    }
}

/// Accepts an IPv4 or IPv6 literal and stores the parsed address.
#[derive(Debug, Clone, Default)]
pub struct IpAddressValidator {
    state: ValidatorState,
}

impl IpAddressValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for IpAddressValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        input
            .parse::<IpAddr>()
            .map(AnswerValue::Ip)
            .map_err(|_| ValidationError::InvalidIpAddress(input.to_string()))
    }
}

/// Accepts an IP literal whose set bits are contiguous from the top.
#[derive(Debug, Clone, Default)]
pub struct IpNetmaskValidator {
    state: ValidatorState,
}

impl IpNetmaskValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `addr` is usable as a netmask.
    pub fn is_netmask(addr: &IpAddr) -> bool {
        match addr {
            IpAddr::V4(v4) => {
                let bits = u32::from(*v4);
                bits.leading_ones() + bits.trailing_zeros() == u32::BITS
            }
            IpAddr::V6(v6) => {
                let bits = u128::from(*v6);
                bits.leading_ones() + bits.trailing_zeros() == u128::BITS
            }
        }
    }
}

impl Validator for IpNetmaskValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        let addr: IpAddr = input
            .parse()
            .map_err(|_| ValidationError::InvalidIpAddress(input.to_string()))?;
        if Self::is_netmask(&addr) {
            Ok(AnswerValue::Ip(addr))
        } else {
            Err(ValidationError::InvalidNetmask(input.to_string()))
        }
    }
}

/// Accepts `scheme://host[:port][/path]` URIs.
#[derive(Debug, Clone, Default)]
pub struct UriValidator {
    state: ValidatorState,
}

impl UriValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for UriValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        if self.state.blank && input.is_empty() {
            return Ok(input.into());
        }
        if URI_REGEX.is_match(input) {
            Ok(input.into())
        } else {
            Err(ValidationError::InvalidUri(input.to_string()))
        }
    }
}

/// Accepts `local@domain.tld` shaped addresses.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    state: ValidatorState,
}

impl EmailValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for EmailValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        if self.state.blank && input.is_empty() {
            return Ok(input.into());
        }
        if EMAIL_REGEX.is_match(input) && input.chars().count() > 3 {
            Ok(input.into())
        } else {
            Err(ValidationError::InvalidEmail(input.to_string()))
        }
    }
}

/// Accepts base-10 integers and stores the parsed number.
///
/// Answers are stored as [`AnswerValue::Int`], so the accepted range is that
/// of `i64`. Larger numbers are reported as not a valid integer.
#[derive(Debug, Clone, Default)]
pub struct IntegerValidator {
    state: ValidatorState,
}

impl IntegerValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for IntegerValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        input
            .trim()
            .parse::<i64>()
            .map(AnswerValue::Int)
            .map_err(|_| ValidationError::InvalidInteger(input.to_string()))
    }
}

state_builders!(
    BasicValidator,
    YesNoValidator,
    CompactListValidator,
    DateValidator,
    MacAddressValidator,
    IpAddressValidator,
    IpNetmaskValidator,
    UriValidator,
    EmailValidator,
    IntegerValidator,
);
