//! Prefix independent classification of an address.

use crate::models::IpClass;
use std::net::Ipv4Addr;

/// Classful bucket of `addr`, by first octet.
pub fn ip_class(addr: Ipv4Addr) -> IpClass {
    IpClass::from_first_octet(addr.octets()[0])
}

/// True for the RFC 1918 ranges 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16.
pub fn is_private(addr: Ipv4Addr) -> bool {
    match addr.octets() {
        [10, ..] => true,
        [172, b, ..] => (16..=31).contains(&b),
        [192, 168, ..] => true,
        _ => false,
    }
}
