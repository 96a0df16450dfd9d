//! # Address Range Model
//!
//! Inclusive ranges of IPv4 or IPv6 addresses, and the usable-host range of a
//! CIDR block.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::IpNetwork;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range end {end} is before range start {start}")]
    Reversed { start: IpAddr, end: IpAddr },

    #[error("{start} and {end} are not the same address family")]
    MixedFamily { start: IpAddr, end: IpAddr },
}

/// A continuous range of addresses, inclusive on both ends.
///
/// Both ends always share an address family and `start_addr <= end_addr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    start_addr: IpAddr,
    end_addr: IpAddr,
}

impl IpRange {
    pub fn new(start_addr: IpAddr, end_addr: IpAddr) -> Result<Self, RangeError> {
        if start_addr.is_ipv4() != end_addr.is_ipv4() {
            return Err(RangeError::MixedFamily {
                start: start_addr,
                end: end_addr,
            });
        }
        if to_u128(end_addr) < to_u128(start_addr) {
            return Err(RangeError::Reversed {
                start: start_addr,
                end: end_addr,
            });
        }
        Ok(Self {
            start_addr,
            end_addr,
        })
    }

    pub fn start_addr(&self) -> IpAddr {
        self.start_addr
    }

    pub fn end_addr(&self) -> IpAddr {
        self.end_addr
    }

    /// Number of addresses in the range, saturating at `u128::MAX`.
    pub fn len(&self) -> u128 {
        (to_u128(self.end_addr) - to_u128(self.start_addr)).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = IpAddr> + Clone + use<> {
        let v4 = self.start_addr.is_ipv4();
        let start = to_u128(self.start_addr);
        let end = to_u128(self.end_addr);
        (start..=end).map(move |n| from_u128(n, v4))
    }
}

/// Returns the range of usable host addresses in `network`.
///
/// IPv4 excludes the network and broadcast addresses, so `/31` and `/32` have
/// no usable hosts. IPv6 excludes the subnet-router anycast address, so `/128`
/// has none.
pub fn cidr_hosts(network: IpNetwork) -> Option<IpRange> {
    let (first, last) = match network {
        IpNetwork::V4(net) => {
            if net.prefix() >= 31 {
                return None;
            }
            let first = u32::from(net.network()) + 1;
            let last = u32::from(net.broadcast()) - 1;
            (
                IpAddr::V4(Ipv4Addr::from(first)),
                IpAddr::V4(Ipv4Addr::from(last)),
            )
        }
        IpNetwork::V6(net) => {
            if net.prefix() >= 128 {
                return None;
            }
            let base = u128::from(net.network());
            let last = base | !u128::from(net.mask());
            (
                IpAddr::V6(Ipv6Addr::from(base + 1)),
                IpAddr::V6(Ipv6Addr::from(last)),
            )
        }
    };
    IpRange::new(first, last).ok()
}

fn to_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

fn from_u128(n: u128, v4: bool) -> IpAddr {
    if v4 {
        IpAddr::V4(Ipv4Addr::from(n as u32))
    } else {
        IpAddr::V6(Ipv6Addr::from(n))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
