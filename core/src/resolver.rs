//! Forward name resolution for targets that are not already addresses.

use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use sweepr_common::network::target;
use tracing::debug;

/// Looks up the addresses a name points to.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn lookup(&self, name: &str) -> std::io::Result<Vec<IpAddr>>;
}

/// Resolves through the operating system's resolver.
pub struct SystemResolver;

#[async_trait]
impl NameResolver for SystemResolver {
    async fn lookup(&self, name: &str) -> std::io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((name, 0)).await?;
        Ok(addrs.map(|socket_addr| socket_addr.ip()).collect())
    }
}

/// Resolves `name` to a single address, or `None` when it cannot be resolved.
///
/// Dotted quads are never sent to the resolver. The first IPv4 answer is
/// preferred, falling back to the first answer of any family.
pub async fn resolve(resolver: &dyn NameResolver, name: &str) -> Option<IpAddr> {
    let name = name.trim();

    if target::is_dotted_quad(name) {
        return name.parse::<Ipv4Addr>().ok().map(IpAddr::V4);
    }

    if let Ok(addr) = name.parse::<IpAddr>() {
        return Some(addr);
    }

    match resolver.lookup(name).await {
        Ok(addrs) => addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied(),
        Err(e) => {
            debug!("Resolution of {name} failed: {e}");
            None
        }
    }
}
