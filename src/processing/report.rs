//! Full set of derived values for one CIDR input.

use super::classify::{ip_class, is_private};
use super::hosts::HostRange;
use crate::models::{CidrError, IpClass, Ipv4};
use colored::Colorize;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything computed from a single `A.B.C.D/P` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    pub cidr: Ipv4,
    pub ip: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub hosts: HostRange,
    pub class: IpClass,
    pub private: bool,
}

impl SubnetReport {
    pub fn new(cidr: Ipv4) -> SubnetReport {
        let ip = cidr.addr();
        SubnetReport {
            cidr,
            ip,
            network: cidr.lo(),
            broadcast: cidr.hi(),
            netmask: cidr.netmask(),
            hosts: HostRange::new(&cidr),
            class: ip_class(ip),
            private: is_private(ip),
        }
    }
}

/// Parse `input` and derive the whole report.
///
/// Nothing is derived when parsing fails.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::calculate;
/// let report = calculate("192.168.1.5/24").unwrap();
/// assert_eq!(report.hosts.usable_hosts, 254);
/// ```
pub fn calculate(input: &str) -> Result<SubnetReport, CidrError> {
    let cidr = match Ipv4::new(input) {
        Ok(cidr) => cidr,
        Err(e) => {
            log::warn!("Rejected input {:?}: {}", input.trim(), e.to_string().red());
            return Err(e);
        }
    };
    log::info!("#Start calculate() for {}", cidr.to_string().on_blue());

    let report = SubnetReport::new(cidr);
    log::debug!(
        "network={} broadcast={} usable_hosts={}",
        report.network,
        report.broadcast,
        report.hosts.usable_hosts
    );
    match serde_json::to_string(&report) {
        Ok(json) => log::debug!("report={json}"),
        Err(e) => log::warn!("Could not serialize report: {e}"),
    }
    Ok(report)
}
