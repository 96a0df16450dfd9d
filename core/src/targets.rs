//! # Target Set Builder
//!
//! Drives normalization and resolution over every raw target line and
//! produces the ordered list of hosts to scan.

use std::net::IpAddr;

use sweepr_common::error::TargetError;
use sweepr_common::network::target::{self, Normalized};
use sweepr_common::{success, warn};

use crate::resolver::{self, NameResolver};

pub struct TargetSetBuilder {
    resolver: Box<dyn NameResolver>,
    resolve_names: bool,
}

impl TargetSetBuilder {
    pub fn new(resolver: Box<dyn NameResolver>) -> Self {
        Self {
            resolver,
            resolve_names: true,
        }
    }

    /// With `false`, names are dropped instead of resolved.
    pub fn resolve_names(mut self, resolve_names: bool) -> Self {
        self.resolve_names = resolve_names;
        self
    }

    /// Builds the host list.
    ///
    /// Order follows the input. Each line is handled on its own, so a host
    /// listed by two lines appears twice.
    pub async fn build<S: AsRef<str>>(&self, raw_specs: &[S]) -> Vec<IpAddr> {
        let mut hosts: Vec<IpAddr> = Vec::new();

        for raw in raw_specs {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }

            if target::looks_like_ip(raw) {
                match target::expand(raw) {
                    Normalized::Addresses(addrs) => hosts.extend(addrs),
                    Normalized::Literal(spec) => {
                        // An address-shaped prefix does not make it an address,
                        // e.g. `1.2.3.4.nip.io`.
                        match self.resolve_row(&spec).await {
                            Some(addr) => hosts.push(addr),
                            None => warn!("{}", TargetError::Address { spec }),
                        }
                    }
                }
                continue;
            }

            match self.resolve_row(raw).await {
                Some(addr) => hosts.push(addr),
                None if self.resolve_names => warn!("Could not resolve {raw}, dropping it"),
                None => {}
            }
        }

        let len = hosts.len();
        let unit = if len == 1 { "host is" } else { "hosts are" };
        success!("{len} {unit} ready to scan");

        hosts
    }

    async fn resolve_row(&self, raw: &str) -> Option<IpAddr> {
        if !self.resolve_names {
            warn!("Skipping {raw}: name resolution is disabled");
            return None;
        }
        resolver::resolve(self.resolver.as_ref(), raw).await
    }
}
