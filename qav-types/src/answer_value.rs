use std::fmt;
use std::net::IpAddr;

use chrono::NaiveDateTime;

/// A single accepted answer.
///
/// Validators decide which variant an accepted answer becomes: most keep the
/// raw text, some transform it into a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Text, kept as typed (or normalized by the validator).
    String(String),

    /// An integer (from `IntegerValidator`).
    Int(i64),

    /// A calendar date at midnight (from `DateValidator`).
    DateTime(NaiveDateTime),

    /// An IP address or netmask (from `IpAddressValidator` / `IpNetmaskValidator`).
    Ip(IpAddr),

    /// Every answer given to a question asked in multiple mode.
    List(Vec<AnswerValue>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a date/time.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to get this value as an IP address.
    pub fn as_ip(&self) -> Option<IpAddr> {
        match self {
            Self::Ip(ip) => Some(*ip),
            _ => None,
        }
    }

    /// Try to get this value as a list of answers.
    pub fn as_list(&self) -> Option<&[AnswerValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Check if this is a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Int(_) => "Int",
            Self::DateTime(_) => "DateTime",
            Self::Ip(_) => "Ip",
            Self::List(_) => "List",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Self::Ip(ip) => write!(f, "{ip}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for AnswerValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<NaiveDateTime> for AnswerValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<IpAddr> for AnswerValue {
    fn from(ip: IpAddr) -> Self {
        Self::Ip(ip)
    }
}

impl From<Vec<AnswerValue>> for AnswerValue {
    fn from(values: Vec<AnswerValue>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(Self::from).collect())
    }
}
