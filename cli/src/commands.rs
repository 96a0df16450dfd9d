pub mod catalog;
pub mod compare;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use sweepr_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(version)]
#[command(about = "Compares how hosts answer to different scan types.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Where to write the CSV report
    #[arg(short, long, global = true, default_value = config::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Scanner program to invoke
    #[arg(long, global = true, default_value = config::DEFAULT_SCANNER)]
    pub scanner: String,

    /// Seconds before a single scanner invocation is abandoned
    #[arg(short, long, global = true, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Hosts probed at once; ignored when running as root
    #[arg(short, long, global = true, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Drop targets that need name resolution
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less decoration (-q hides headers, -qq also hides the results table)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan every target with every scan type and export the comparison
    #[command(alias = "c")]
    Compare {
        /// Headerless CSV file with one target per row
        targets: PathBuf,

        /// Extra flags passed to every scanner invocation. Put them after `--`
        /// when they clash with sweepr options (e.g. `-oN`)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        scanner_args: Vec<String>,
    },
    /// List the scan types available to the current user
    #[command(alias = "l")]
    Catalog,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let extra_args = match &self.command {
            Commands::Compare { scanner_args, .. } => scanner_args.clone(),
            Commands::Catalog => Vec::new(),
        };

        Config {
            scanner: self.scanner.clone(),
            timeout: Duration::from_secs(self.timeout),
            output: self.output.clone(),
            extra_args,
            jobs: usize::from(self.jobs),
            no_dns: self.no_dns,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
