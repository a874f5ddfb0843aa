use std::fmt;
use std::io;
use std::net::IpAddr;

use super::{ValidationError, Validator, ValidatorState};
use crate::{AnswerTable, AnswerValue};

/// Name resolution used by [`DomainNameValidator`].
pub trait Resolver {
    /// Resolve `name` to one address.
    fn forward(&self, name: &str) -> io::Result<IpAddr>;

    /// Resolve `addr` back to a host name.
    fn reverse(&self, addr: IpAddr) -> io::Result<String>;
}

/// Resolves through the platform resolver (`getaddrinfo` / `getnameinfo`).
///
/// Forward lookups prefer an IPv4 address. A reverse lookup that only echoes
/// the numeric address back counts as a failure.
#[cfg(feature = "dns")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[cfg(feature = "dns")]
impl Resolver for SystemResolver {
    fn forward(&self, name: &str) -> io::Result<IpAddr> {
        let addrs = dns_lookup::lookup_host(name)?;
        addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no address for {name}"))
            })
    }

    fn reverse(&self, addr: IpAddr) -> io::Result<String> {
        let name = dns_lookup::lookup_addr(&addr)?;
        if name.parse::<IpAddr>().is_ok_and(|numeric| numeric == addr) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no name for {addr}"),
            ));
        }
        Ok(name)
    }
}

/// Accepts fully qualified domain names that resolve both ways.
///
/// The name must contain a dot, resolve to an address, and that address must
/// resolve back to a name. Lookups block.
pub struct DomainNameValidator {
    state: ValidatorState,
    resolver: Box<dyn Resolver>,
}

impl DomainNameValidator {
    /// Validate against the platform resolver.
    #[cfg(feature = "dns")]
    pub fn new() -> Self {
        Self::with_resolver(SystemResolver)
    }

    /// Validate against a custom resolver.
    pub fn with_resolver(resolver: impl Resolver + 'static) -> Self {
        Self {
            state: ValidatorState::new(),
            resolver: Box::new(resolver),
        }
    }
}

#[cfg(feature = "dns")]
impl Default for DomainNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DomainNameValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainNameValidator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Validator for DomainNameValidator {
    validator_state!();

    fn check(&self, input: &str, _: &AnswerTable) -> Result<AnswerValue, ValidationError> {
        if !input.contains('.') {
            return Err(ValidationError::NotFullyQualified(input.to_string()));
        }
        let addr = self.resolver.forward(input).map_err(|err| {
            tracing::debug!(name = input, %err, "forward lookup failed");
            ValidationError::DoesNotResolve(input.to_string())
        })?;
        self.resolver.reverse(addr).map_err(|err| {
            tracing::debug!(name = input, %addr, %err, "reverse lookup failed");
            ValidationError::ReverseDoesNotResolve {
                name: input.to_string(),
                addr,
            }
        })?;
        Ok(input.into())
    }
}

state_builders!(DomainNameValidator);
