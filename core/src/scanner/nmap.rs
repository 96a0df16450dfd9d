use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::Config;
use tokio::{process::Command, time::timeout};
use tracing::debug;

use super::{ScanTool, ToolOutput, command_line};
use crate::error::ProbeError;

/// Runs an nmap-compatible program as a child process.
///
/// Every invocation is bounded by `timeout`; the child is killed when it expires.
pub struct NmapScanner {
    program: String,
    timeout: Duration,
}

impl NmapScanner {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.scanner.clone(), cfg.timeout)
    }
}

#[async_trait]
impl ScanTool for NmapScanner {
    fn program(&self) -> &str {
        &self.program
    }

    async fn invoke(
        &self,
        flag: &str,
        host: &str,
        extra_args: &[String],
    ) -> Result<ToolOutput, ProbeError> {
        let invocation = command_line(&self.program, flag, host, extra_args);
        debug!(command = %invocation, "launching scanner");

        let child = Command::new(&self.program)
            .arg(flag)
            .arg(host)
            .args(extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProbeError::Spawn {
                invocation: invocation.clone(),
                source,
            })?;

        let out = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ProbeError::Wait {
                invocation: invocation.clone(),
                source,
            })?,
            Err(_) => {
                return Err(ProbeError::Timeout {
                    invocation,
                    after: self.timeout,
                });
            }
        };

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        Ok(ToolOutput {
            exit_code: out.status.code(),
            output,
        })
    }
}
