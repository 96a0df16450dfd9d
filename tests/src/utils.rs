use std::collections::{HashMap, HashSet};
use std::io;
use std::net::IpAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use sweepr_core::error::ProbeError;
use sweepr_core::resolver::NameResolver;
use sweepr_core::scanner::{ScanTool, ToolOutput};

/// Answers like nmap would, "Host is up" only for the configured hosts.
///
/// Hosts in `broken` make the invocation itself fail.
#[derive(Default)]
pub struct StubScanner {
    pub up: HashSet<String>,
    pub broken: HashSet<String>,
    pub invocations: Mutex<Vec<String>>,
}

impl StubScanner {
    pub fn with_up(hosts: &[&str]) -> Self {
        Self {
            up: hosts.iter().map(|h| h.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn broken(mut self, hosts: &[&str]) -> Self {
        self.broken = hosts.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScanTool for StubScanner {
    fn program(&self) -> &str {
        "stub-nmap"
    }

    async fn invoke(
        &self,
        flag: &str,
        host: &str,
        extra_args: &[String],
    ) -> Result<ToolOutput, ProbeError> {
        let invocation = sweepr_core::scanner::command_line(self.program(), flag, host, extra_args);
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.broken.contains(host) {
            return Err(ProbeError::Spawn {
                invocation,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "raw socket denied"),
            });
        }

        let output = if self.up.contains(host) {
            format!("Nmap scan report for {host}\nHost is up (0.00042s latency).\n")
        } else {
            "Note: Host seems down.\nNmap done: 1 IP address (0 hosts up)\n".to_string()
        };
        Ok(ToolOutput::new(Some(0), output))
    }
}

/// Resolves only the names it was given.
#[derive(Default)]
pub struct StubResolver {
    pub names: HashMap<String, IpAddr>,
}

impl StubResolver {
    pub fn with(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(name, ip)| (name.to_string(), ip.parse().unwrap()))
                .collect(),
        }
    }
}

#[async_trait]
impl NameResolver for StubResolver {
    async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>> {
        self.names
            .get(name)
            .map(|ip| vec![*ip])
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "unknown host"))
    }
}
