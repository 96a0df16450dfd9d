use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SCANNER: &str = "nmap";
pub const DEFAULT_OUTPUT: &str = "results.csv";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Settings for a single comparison run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Program invoked for every probe.
    pub scanner: String,
    /// Upper bound for one scanner invocation. Expiry counts as a failed probe.
    pub timeout: Duration,
    /// Where the CSV report is written.
    pub output: PathBuf,
    /// Flags forwarded verbatim to every scanner invocation.
    pub extra_args: Vec<String>,
    /// Number of hosts probed at once within an unprivileged scan type.
    ///
    /// `1` keeps the run strictly sequential.
    pub jobs: usize,
    /// Skips name resolution. Targets that are not IP-shaped are dropped.
    pub no_dns: bool,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: DEFAULT_SCANNER.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            extra_args: Vec::new(),
            jobs: 1,
            no_dns: false,
            no_banner: false,
            quiet: 0,
        }
    }
}
