//! # Scan Target Model
//!
//! Classifies a raw target line and expands it into concrete addresses.
//!
//! A target line can be:
//! * A CIDR block (e.g., `192.168.1.0/24`). Only usable hosts are produced.
//! * A dashed range (e.g., `10.0.0.1-10.0.0.9`, or the abbreviated `10.0.0.1-9`).
//! * A single IPv4 or IPv6 address.
//! * A DNS name, which is left for the resolver.

use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::LazyLock;

use pnet::ipnetwork::IpNetwork;
use regex::Regex;

use crate::error::TargetError;
use crate::network::range::{self, IpRange};
use crate::warn;

static DOTTED_QUAD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("valid regex"));

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("valid regex"));

/// A classified target line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetSpec {
    /// Every usable host in a network.
    Cidr { network: IpNetwork },
    /// An inclusive run of addresses.
    Range { ip_range: IpRange },
    /// A single address.
    Host { target_addr: IpAddr },
    /// Anything else. Needs name resolution before it can be scanned.
    Name { name: String },
}

impl FromStr for TargetSpec {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains('/') {
            return parse_cidr(s);
        }

        if let Ok(target_addr) = s.parse::<IpAddr>() {
            return Ok(TargetSpec::Host { target_addr });
        }

        if let Some((start_str, _)) = s.split_once('-')
            && (looks_like_ip(s) || start_str.trim().parse::<IpAddr>().is_ok())
        {
            return parse_ip_range(s);
        }

        Ok(TargetSpec::Name {
            name: s.to_string(),
        })
    }
}

impl TargetSpec {
    /// Addresses this target covers. Names have none until resolved.
    pub fn addresses(&self) -> Vec<IpAddr> {
        match self {
            TargetSpec::Cidr { network } => range::cidr_hosts(*network)
                .map(|hosts| hosts.iter().collect())
                .unwrap_or_default(),
            TargetSpec::Range { ip_range } => ip_range.iter().collect(),
            TargetSpec::Host { target_addr } => vec![*target_addr],
            TargetSpec::Name { .. } => Vec::new(),
        }
    }
}

/// Result of normalizing one raw target line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Normalized {
    /// Concrete addresses, in ascending order, without repeats.
    Addresses(Vec<IpAddr>),
    /// The line unchanged; whether it is an address is up to the resolver.
    Literal(String),
}

/// Expands one raw target line.
///
/// Malformed CIDR blocks and ranges are reported and yield no addresses, so
/// one bad line never stops the others from being processed.
pub fn expand(raw: &str) -> Normalized {
    match TargetSpec::from_str(raw) {
        Ok(TargetSpec::Name { name }) => Normalized::Literal(name),
        Ok(spec) => Normalized::Addresses(dedup(spec.addresses())),
        Err(e) => {
            warn!("{e}");
            Normalized::Addresses(Vec::new())
        }
    }
}

/// True when the line starts like an address and belongs to the normalizer
/// rather than the resolver.
///
/// That is a dotted-quad prefix, or an IPv6 address before any `/` or `-`.
pub fn looks_like_ip(s: &str) -> bool {
    let s = s.trim();
    if DOTTED_QUAD_PREFIX.is_match(s) {
        return true;
    }
    let head = s.split(['/', '-']).next().unwrap_or_default().trim();
    head.contains(':') && head.parse::<Ipv6Addr>().is_ok()
}

/// True when the whole string is four dot-separated groups of digits.
pub fn is_dotted_quad(s: &str) -> bool {
    DOTTED_QUAD.is_match(s)
}

fn dedup(addrs: Vec<IpAddr>) -> Vec<IpAddr> {
    let mut seen: HashSet<IpAddr> = HashSet::with_capacity(addrs.len());
    addrs.into_iter().filter(|ip| seen.insert(*ip)).collect()
}

/// Parses CIDR notation like "192.168.1.0/24". Host bits in the base are ignored.
fn parse_cidr(s: &str) -> Result<TargetSpec, TargetError> {
    let network = IpNetwork::from_str(s).map_err(|e| TargetError::Cidr {
        spec: s.to_string(),
        reason: e.to_string(),
    })?;
    Ok(TargetSpec::Cidr { network })
}

/// Parses a range string like "1.1.1.1-2.2.2.2" or "1.1.1.1-50".
fn parse_ip_range(s: &str) -> Result<TargetSpec, TargetError> {
    let range_err = |reason: String| TargetError::Range {
        spec: s.to_string(),
        reason,
    };

    let (start_str, end_str) = s
        .split_once('-')
        .ok_or_else(|| range_err("missing '-'".to_string()))?;

    let start_addr = start_str
        .trim()
        .parse::<IpAddr>()
        .map_err(|e| range_err(format!("invalid start address '{}': {e}", start_str.trim())))?;

    let end_addr = parse_range_end_addr(end_str.trim(), &start_addr).map_err(range_err)?;

    let ip_range = IpRange::new(start_addr, end_addr).map_err(|e| range_err(e.to_string()))?;
    Ok(TargetSpec::Range { ip_range })
}

/// Helper to parse the end address of a range.
///
/// Handles abbreviated forms like "192.168.1.1-50" (implies 192.168.1.50)
/// and full forms like "192.168.1.1-192.168.1.255". For IPv6 starts an
/// abbreviated end replaces the last hextet ("fe80::1-ff").
fn parse_range_end_addr(end_str: &str, start_addr: &IpAddr) -> Result<IpAddr, String> {
    if end_str.is_empty() {
        return Err("range end cannot be empty".to_string());
    }

    if let Ok(full_addr) = end_str.parse::<IpAddr>() {
        return Ok(full_addr);
    }

    match start_addr {
        IpAddr::V4(start) => partial_ipv4_end(end_str, start).map(IpAddr::V4),
        IpAddr::V6(start) => {
            let last = u16::from_str_radix(end_str, 16)
                .map_err(|e| format!("invalid end range '{end_str}': {e}"))?;
            let mut segments = start.segments();
            segments[7] = last;
            Ok(IpAddr::V6(Ipv6Addr::from(segments)))
        }
    }
}

fn partial_ipv4_end(end_str: &str, start_addr: &Ipv4Addr) -> Result<Ipv4Addr, String> {
    let partial_octets: Vec<u8> = end_str
        .split('.')
        .map(|octet_str| octet_str.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| format!("invalid end range '{end_str}': {e}"))?;

    if partial_octets.len() > 4 {
        return Err(format!("end range has too many octets: {end_str}"));
    }

    let mut end_octets = start_addr.octets();
    let start_index = 4 - partial_octets.len();
    end_octets[start_index..].copy_from_slice(&partial_octets);

    Ok(Ipv4Addr::from(end_octets))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(normalized: Normalized) -> Vec<String> {
        match normalized {
            Normalized::Addresses(addrs) => addrs.iter().map(|ip| ip.to_string()).collect(),
            Normalized::Literal(s) => panic!("expected addresses, got literal {s}"),
        }
    }

    #[test]
    fn test_parse_range_end_addr_helper() {
        let start = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10));

        assert_eq!(
            parse_range_end_addr("192.168.1.50", &start),
            Ok(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50)))
        );
        assert_eq!(
            parse_range_end_addr("50", &start),
            Ok(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50)))
        );
        assert_eq!(
            parse_range_end_addr("2.66", &start),
            Ok(IpAddr::V4(Ipv4Addr::new(192, 168, 2, 66)))
        );
        assert_eq!(
            parse_range_end_addr("10.2.1", &start),
            Ok(IpAddr::V4(Ipv4Addr::new(192, 10, 2, 1)))
        );

        assert!(parse_range_end_addr("2.256", &start).is_err());
        assert!(parse_range_end_addr("1.2.3.4.5", &start).is_err());
        assert!(parse_range_end_addr("", &start).is_err());
    }

    #[test]
    fn test_parse_range_end_addr_ipv6() {
        let start: IpAddr = "fe80::1".parse().unwrap();
        assert_eq!(parse_range_end_addr("ff", &start), Ok("fe80::ff".parse().unwrap()));
        assert!(parse_range_end_addr("xyz", &start).is_err());
    }

    #[test]
    fn test_from_str_classification() {
        assert!(matches!(
            TargetSpec::from_str("10.0.0.0/24"),
            Ok(TargetSpec::Cidr { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str("10.0.0.1-10.0.0.255"),
            Ok(TargetSpec::Range { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str("10.0.0.1-255"),
            Ok(TargetSpec::Range { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str(" 1.1.1.1 "),
            Ok(TargetSpec::Host { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str("::1"),
            Ok(TargetSpec::Host { .. })
        ));
        assert_eq!(
            TargetSpec::from_str("my-host.example.com"),
            Ok(TargetSpec::Name {
                name: "my-host.example.com".to_string()
            })
        );

        assert!(TargetSpec::from_str("10.0.0.1/33").is_err());
        assert!(TargetSpec::from_str("10.0.0.256-10.0.0.1").is_err());
    }

    #[test]
    fn test_expand_cidr() {
        assert_eq!(
            strings(expand("192.168.1.0/30")),
            vec!["192.168.1.1", "192.168.1.2"]
        );

        let hosts = strings(expand("10.1.0.0/24"));
        assert_eq!(hosts.len(), 254);
        assert!(!hosts.contains(&"10.1.0.0".to_string()));
        assert!(!hosts.contains(&"10.1.0.255".to_string()));
    }

    #[test]
    fn test_expand_cidr_without_usable_hosts() {
        assert_eq!(expand("10.0.0.0/31"), Normalized::Addresses(vec![]));
        assert_eq!(expand("10.0.0.7/32"), Normalized::Addresses(vec![]));
    }

    #[test]
    fn test_expand_malformed_cidr() {
        assert_eq!(expand("10.0.0.0/40"), Normalized::Addresses(vec![]));
        assert_eq!(expand("10.0.0/abc"), Normalized::Addresses(vec![]));
    }

    #[test]
    fn test_expand_range_abbreviated_end() {
        assert_eq!(
            strings(expand("10.0.0.1-3")),
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]
        );
    }

    #[test]
    fn test_expand_range_full_end() {
        assert_eq!(
            strings(expand("10.0.0.254 - 10.0.1.1")),
            vec!["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]
        );
    }

    #[test]
    fn test_expand_reversed_range_is_empty() {
        assert_eq!(expand("10.0.0.5-10.0.0.2"), Normalized::Addresses(vec![]));
        assert_eq!(expand("10.0.0.5-2"), Normalized::Addresses(vec![]));
        assert!(matches!(
            TargetSpec::from_str("10.0.0.5-10.0.0.2"),
            Err(TargetError::Range { .. })
        ));
    }

    #[test]
    fn test_expand_range_bad_parts() {
        assert_eq!(expand("10.0.0.1-x"), Normalized::Addresses(vec![]));
        assert_eq!(expand("10.0.0.300-10.0.0.301"), Normalized::Addresses(vec![]));
        assert_eq!(expand("10.0.0.1-::5"), Normalized::Addresses(vec![]));
    }

    #[test]
    fn test_expand_literal() {
        assert_eq!(strings(expand("10.0.0.9")), vec!["10.0.0.9"]);
        assert_eq!(
            expand("scanme.example.org"),
            Normalized::Literal("scanme.example.org".to_string())
        );
        assert_eq!(
            expand("300.1.1.1"),
            Normalized::Literal("300.1.1.1".to_string())
        );
    }

    #[test]
    fn test_looks_like_ip() {
        assert!(looks_like_ip("192.168.1.0/24"));
        assert!(looks_like_ip("10.0.0.1-5"));
        assert!(looks_like_ip("300.1.1.1"));
        assert!(looks_like_ip("fe80::1-ff"));
        assert!(looks_like_ip("2001:db8::/64"));
        assert!(!looks_like_ip("example.com"));
        assert!(!looks_like_ip("host-1"));
        assert!(!looks_like_ip("10.0.0"));
    }

    #[test]
    fn test_is_dotted_quad() {
        assert!(is_dotted_quad("8.8.8.8"));
        assert!(is_dotted_quad("999.1.1.1"));
        assert!(!is_dotted_quad("8.8.8.8/32"));
        assert!(!is_dotted_quad("dns.google"));
    }
}
