//! Integration tests for ipv4-subnet-calc
//!
//! These tests run the complete path from a raw input line to the printed lines.

use ipv4_subnet_calc::models::{CidrError, Ipv4};
use ipv4_subnet_calc::processing::calculate;
use ipv4_subnet_calc::run;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::net::Ipv4Addr;

#[test]
fn test_full_output_slash_30() {
    let lines = run("91.124.230.205/30\n");
    assert_eq!(
        lines,
        vec![
            "IP address: 91.124.230.205",
            "Network Address: 91.124.230.204",
            "Broadcast Address: 91.124.230.207",
            "Binary Subnet Mask: 11111111.11111111.11111111.11111100",
            "First usable host IP: 91.124.230.205",
            "Penultimate usable host IP: 91.124.230.205",
            "Number of usable Hosts: 2",
            "IP class: A",
            "IP type private: False",
        ]
    );
}

#[test]
fn test_private_slash_8() {
    let lines = run("10.0.0.1/8");
    assert_eq!(lines[1], "Network Address: 10.0.0.0");
    assert_eq!(lines[2], "Broadcast Address: 10.255.255.255");
    assert_eq!(lines[7], "IP class: A");
    assert_eq!(lines[8], "IP type private: True");
}

#[test]
fn test_slash_24() {
    let lines = run("192.168.1.5/24");
    assert_eq!(lines[1], "Network Address: 192.168.1.0");
    assert_eq!(lines[2], "Broadcast Address: 192.168.1.255");
    assert_eq!(lines[4], "First usable host IP: 192.168.1.1");
    assert_eq!(lines[5], "Penultimate usable host IP: 192.168.1.253");
    assert_eq!(lines[6], "Number of usable Hosts: 254");
    assert_eq!(lines[7], "IP class: C");
}

#[test]
fn test_slash_31_has_no_hosts() {
    let lines = run("172.16.5.5/31");
    assert_eq!(lines[4], "First usable host IP: None");
    assert_eq!(lines[5], "Penultimate usable host IP: None");
    assert_eq!(lines[6], "Number of usable Hosts: 0");
}

#[test]
fn test_multicast_is_class_d() {
    let lines = run("239.1.2.3/4");
    assert_eq!(lines[1], "Network Address: 224.0.0.0");
    assert_eq!(lines[2], "Broadcast Address: 239.255.255.255");
    assert_eq!(lines[7], "IP class: D");
}

#[test]
fn test_spaced_signed_and_extra_segments() {
    for input in ["10.0.0.1 / 8", "10.0.0.1/ 8", "+10.0.0.1/8", "10.0.0.1/8/3"] {
        let lines = run(input);
        assert_eq!(lines.len(), 9, "{input:?}");
        assert_eq!(lines[0], "IP address: 10.0.0.1");
        assert_eq!(lines[1], "Network Address: 10.0.0.0");
        assert_eq!(lines[2], "Broadcast Address: 10.255.255.255");
    }
}

#[test]
fn test_diagnostics() {
    assert_eq!(run("192.168.1.1"), vec!["Missing prefix for 192.168.1.1"]);

    let malformed = run("300.1.1.1/24");
    assert_eq!(malformed.len(), 1);
    assert!(malformed[0].starts_with("Error"));
    assert!(!malformed[0].starts_with("Missing prefix"));

    assert_eq!(run("not an address").len(), 1);
}

proptest! {
    #[test]
    fn prop_host_bits(raw in any::<u32>(), prefix in 0u8..=32) {
        let addr = Ipv4Addr::from(raw);
        let report = calculate(&format!("{addr}/{prefix}")).unwrap();
        let mask = u32::from(report.netmask);

        prop_assert_eq!(mask.count_ones(), u32::from(prefix));
        prop_assert_eq!(u32::from(report.network) & !mask, 0);
        prop_assert_eq!(u32::from(report.broadcast) & !mask, !mask);
        prop_assert!(report.network <= report.broadcast);
        prop_assert!(report.network <= addr && addr <= report.broadcast);
    }

    #[test]
    fn prop_usable_hosts(raw in any::<u32>(), prefix in 0u8..=32) {
        let report = calculate(&format!("{}/{prefix}", Ipv4Addr::from(raw))).unwrap();
        let expected = match prefix {
            31 | 32 => 0,
            p => (1u64 << (32 - p)) - 2,
        };
        prop_assert_eq!(report.hosts.usable_hosts, expected);
        prop_assert_eq!(report.hosts.first_usable.is_some(), expected >= 1);
        prop_assert_eq!(report.hosts.penultimate_usable.is_some(), expected >= 2);
    }

    #[test]
    fn prop_idempotent(raw in any::<u32>(), prefix in 0u8..=32) {
        let input = format!("{}/{prefix}", Ipv4Addr::from(raw));
        prop_assert_eq!(run(&input), run(&input));
        prop_assert_eq!(Ipv4::new(&input).unwrap().to_string(), input);
    }

    #[test]
    fn prop_out_of_range_prefix(raw in any::<u32>(), prefix in 33u32..1000) {
        let input = format!("{}/{prefix}", Ipv4Addr::from(raw));
        prop_assert!(matches!(calculate(&input), Err(CidrError::Malformed(_))));
    }
}
