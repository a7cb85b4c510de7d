//! Legacy classful address buckets.

use serde::Serialize;

/// Address class derived from the first octet.
///
/// Classes D (multicast, 224-239) and E (reserved, 240-255) are reported as
/// their own variants rather than folded into C.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
}

impl IpClass {
    pub fn from_first_octet(octet: u8) -> IpClass {
        match octet {
            0..=127 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=255 => IpClass::E,
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
        };
        write!(f, "{name}")
    }
}
