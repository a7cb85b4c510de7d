//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for an address paired with its prefix length, and the
//! mask / network / broadcast arithmetic on plain 32-bit values.

use super::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

// Caller guarantees len <= 32. A shift by 32 (prefix 0) yields an all-zero mask.
fn mask_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0)
}

// Integer token with optional surrounding whitespace and leading '+'.
fn parse_token(token: &str) -> Option<u8> {
    token.trim().parse::<u8>().ok()
}

/// IPv4 address with CIDR notation support.
///
/// Only constructed through [`Ipv4::new`] / [`FromStr`], so `mask` is always
/// within `0..=32`.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Parse a CIDR string (e.g. "91.124.230.205/30").
    ///
    /// Four valid octets without any `/` give [`CidrError::MissingPrefix`];
    /// every other problem gives [`CidrError::Malformed`]. Segments after a
    /// second `/` are ignored.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let mut segments = addr_cidr.split('/');
        let addr_part = segments.next().unwrap_or_default();
        let prefix_part = segments.next();

        let tokens: Vec<&str> = addr_part.split('.').collect();
        if tokens.len() != 4 {
            return Err(CidrError::malformed(format!(
                "expected 4 octets in '{addr_part}', got {}",
                tokens.len()
            )));
        }
        let mut octets = [0u8; 4];
        for (octet, token) in octets.iter_mut().zip(&tokens) {
            *octet = parse_token(token)
                .ok_or_else(|| CidrError::malformed(format!("octet '{token}' out of range")))?;
        }
        let addr = Ipv4Addr::from(octets);

        let prefix =
            prefix_part.ok_or_else(|| CidrError::MissingPrefix(addr_cidr.to_string()))?;
        let mask = parse_token(prefix)
            .filter(|len| *len <= MAX_LENGTH)
            .ok_or_else(|| CidrError::malformed(format!("prefix '/{prefix}' out of range")))?;
        Ok(Ipv4 { addr, mask })
    }

    /// The address as entered, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Subnet mask as an address: `mask` leading one bits, the rest zero.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::Ipv4;
    /// use std::net::Ipv4Addr;
    /// let ip = Ipv4::new("91.124.230.205/30").unwrap();
    /// assert_eq!(ip.netmask(), Ipv4Addr::new(255, 255, 255, 252));
    /// ```
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = mask_bits(self.mask);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
