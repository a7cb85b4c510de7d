//! Subnet calculation logic.
//!
//! - [`hosts`] - usable host count and range
//! - [`classify`] - address class and private range membership
//! - [`report`] - all derived values for one input

mod classify;
mod hosts;
mod report;

// Re-export public functions
pub use classify::{ip_class, is_private};
pub use hosts::{num_usable_hosts, HostRange};
pub use report::{calculate, SubnetReport};
