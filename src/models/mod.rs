//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`CidrError`] - why an input string was rejected
//! - [`IpClass`] - classful address bucket

mod class;
mod error;
mod ipv4;

// Re-export public types
pub use class::IpClass;
pub use error::CidrError;
pub use ipv4::{Ipv4, MAX_LENGTH};
