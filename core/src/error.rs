use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// A scanner invocation that did not produce output to judge.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to launch `{invocation}`: {source}")]
    Spawn {
        invocation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{invocation}` failed while running: {source}")]
    Wait {
        invocation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{invocation}` timed out after {}s", after.as_secs_f64())]
    Timeout { invocation: String, after: Duration },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("results for '{label}' cover {found} hosts, expected {expected}")]
    Misaligned {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open targets file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read targets file: {0}")]
    Read(#[from] csv::Error),
}
