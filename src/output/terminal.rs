//! Terminal output utilities.
//!
//! Turns a [`SubnetReport`] or a [`CidrError`] into the plain lines printed on stdout.

use crate::models::CidrError;
use crate::processing::SubnetReport;
use std::fmt::Display;
use std::net::Ipv4Addr;

/// Printed in place of an address that does not exist for the subnet.
pub const ABSENT: &str = "None";

/// Format a labelled value as `label: value`.
pub fn format_field<T: Display>(label: &str, value: T) -> String {
    format!("{label}: {value}")
}

/// Dot separated 8-bit binary groups, e.g. `11111111.11111111.11111111.11111100`.
pub fn format_binary_mask(mask: Ipv4Addr) -> String {
    mask.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

fn format_optional(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// The nine result lines, in output order.
pub fn report_lines(report: &SubnetReport) -> Vec<String> {
    vec![
        format_field("IP address", report.ip),
        format_field("Network Address", report.network),
        format_field("Broadcast Address", report.broadcast),
        format_field("Binary Subnet Mask", format_binary_mask(report.netmask)),
        format_field("First usable host IP", format_optional(report.hosts.first_usable)),
        format_field(
            "Penultimate usable host IP",
            format_optional(report.hosts.penultimate_usable),
        ),
        format_field("Number of usable Hosts", report.hosts.usable_hosts),
        format_field("IP class", report.class),
        format_field("IP type private", format_bool(report.private)),
    ]
}

/// Single diagnostic line for a rejected input.
pub fn error_line(err: &CidrError) -> String {
    err.to_string()
}
