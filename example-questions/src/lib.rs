pub mod account;
pub mod provision;

// Re-export account types
pub use account::{SHELLS, user_account};

// Re-export provision types
#[cfg(feature = "dns")]
pub use provision::host_provisioning;
pub use provision::{FILE_SERVERS, SITES, host_provisioning_with};
