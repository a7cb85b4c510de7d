//! Usable host range of a subnet.
//!
//! All arithmetic is done on the full 32-bit value of the addresses, so the
//! result is correct for every prefix, not only those inside one octet.

use crate::models::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Usable host count and the first / penultimate usable addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct HostRange {
    /// Addresses between network and broadcast, 0 for /31 and /32.
    pub usable_hosts: u64,
    /// `network + 1`, present when at least one host is usable.
    pub first_usable: Option<Ipv4Addr>,
    /// `broadcast - 2`, present when at least two hosts are usable.
    pub penultimate_usable: Option<Ipv4Addr>,
}

/// Number of usable hosts between `network` and `broadcast`.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::num_usable_hosts;
/// use std::net::Ipv4Addr;
/// let hosts = num_usable_hosts(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 255, 255, 255));
/// assert_eq!(hosts, 16777214);
/// ```
pub fn num_usable_hosts(network: Ipv4Addr, broadcast: Ipv4Addr) -> u64 {
    let span = u32::from(broadcast).saturating_sub(u32::from(network));
    u64::from(span.saturating_sub(1))
}

impl HostRange {
    pub fn new(ipv4: &Ipv4) -> HostRange {
        let network = u32::from(ipv4.lo());
        let broadcast = u32::from(ipv4.hi());
        let usable_hosts = num_usable_hosts(ipv4.lo(), ipv4.hi());

        // usable_hosts >= 1 implies broadcast - network >= 2, so neither step wraps.
        let first_usable = (usable_hosts >= 1).then(|| Ipv4Addr::from(network + 1));
        let penultimate_usable = (usable_hosts >= 2).then(|| Ipv4Addr::from(broadcast - 2));

        HostRange {
            usable_hosts,
            first_usable,
            penultimate_usable,
        }
    }
}
