//! The **scan executor**.
//!
//! A [`ScanTool`] is the narrow seam to the external scanner: it runs one
//! invocation and hands back the exit status and combined output. [`probe`]
//! turns that into a liveness verdict and keeps failures local to the one
//! host/scan-type pair they happened on.

use async_trait::async_trait;
use sweepr_common::error;

use crate::error::ProbeError;

mod nmap;

pub use nmap::NmapScanner;

/// Substring in the scanner output that marks a responsive host.
pub const LIVENESS_MARKER: &str = "Host is up";

/// What one scanner invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Stdout followed by stderr, decoded lossily.
    pub output: String,
}

impl ToolOutput {
    pub fn new(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn reports_live(&self) -> bool {
        self.output.contains(LIVENESS_MARKER)
    }
}

/// Runs the external scanner as `<program> <flag> <host> [extra_args...]`.
#[async_trait]
pub trait ScanTool: Send + Sync {
    fn program(&self) -> &str;

    async fn invoke(
        &self,
        flag: &str,
        host: &str,
        extra_args: &[String],
    ) -> Result<ToolOutput, ProbeError>;
}

/// The exact command line of one invocation, for diagnostics.
pub fn command_line(program: &str, flag: &str, host: &str, extra_args: &[String]) -> String {
    let mut parts: Vec<&str> = vec![program, flag, host];
    parts.extend(extra_args.iter().map(String::as_str));
    parts.join(" ")
}

/// Probes `host` once with `flag` and returns whether it responded.
///
/// Failing to launch, timing out, or a non-zero exit are logged and count as
/// `false`. There are no retries.
pub async fn probe(tool: &dyn ScanTool, flag: &str, host: &str, extra_args: &[String]) -> bool {
    match tool.invoke(flag, host, extra_args).await {
        Ok(out) if out.success() => out.reports_live(),
        Ok(out) => {
            let invocation = command_line(tool.program(), flag, host, extra_args);
            let status = out
                .exit_code
                .map_or_else(|| "killed by signal".to_string(), |code| format!("exit code {code}"));
            error!(
                "Error scanning {host} with command {invocation} ({status}): {}",
                out.output.trim()
            );
            false
        }
        Err(e) => {
            error!("Error scanning {host}: {e}");
            false
        }
    }
}
