//! # Scan Orchestrator
//!
//! Runs every scan type in the catalog against the full host list, one scan
//! type at a time, and collects verdicts positionally.
//!
//! By default one scanner invocation is in flight at a time. With `jobs > 1`
//! in an unprivileged run, hosts are split into contiguous chunks and each
//! chunk is probed by its own task. A chunk owns its slots in the result
//! vector, so no locking is needed. Elevated runs stay sequential whatever
//! `jobs` says: as root the scanner sends raw packets for most scan types,
//! and those need exclusive access to the interface.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sweepr_common::scan::{Catalog, ScanType};
use sweepr_common::{error, info, warn};
use tokio::task::JoinSet;

use crate::scanner::{self, ScanTool};

/// Receives progress notifications. Never affects results.
pub trait ScanObserver: Send + Sync {
    fn scan_started(&self, _scan_type: &ScanType, _hosts: usize) {}
    fn probe_finished(&self, _scan_type: &ScanType) {}
    fn scan_finished(&self, _scan_type: &ScanType, _elapsed: Duration) {}
}

/// Verdicts of one scan type, aligned with the host list it ran against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanColumn {
    pub scan_type: ScanType,
    pub verdicts: Vec<bool>,
}

/// Verdict columns in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResults {
    columns: Vec<ScanColumn>,
}

impl ScanResults {
    pub fn new(columns: Vec<ScanColumn>) -> Self {
        Self { columns }
    }

    pub fn get(&self, label: &str) -> Option<&[bool]> {
        self.columns
            .iter()
            .find(|column| column.scan_type.label == label)
            .map(|column| column.verdicts.as_slice())
    }

    pub fn columns(&self) -> &[ScanColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub struct Orchestrator {
    tool: Arc<dyn ScanTool>,
    extra_args: Arc<[String]>,
    jobs: usize,
    observer: Option<Arc<dyn ScanObserver>>,
}

impl Orchestrator {
    pub fn new(tool: Arc<dyn ScanTool>) -> Self {
        Self {
            tool,
            extra_args: Arc::from(Vec::new()),
            jobs: 1,
            observer: None,
        }
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = Arc::from(extra_args);
        self
    }

    /// Values below 1 are treated as 1.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Probes every host with every scan type runnable in this context.
    ///
    /// The catalog is filtered once, up front, by `elevated`. Each returned
    /// column has exactly one verdict per host, in `hosts` order.
    pub async fn run(&self, catalog: &Catalog, hosts: &[IpAddr], elevated: bool) -> ScanResults {
        let catalog = catalog.for_context(elevated);
        if self.jobs > 1 && elevated {
            warn!("Running as root, probes stay sequential and --jobs {} is ignored", self.jobs);
        }
        let targets: Arc<[String]> = hosts.iter().map(ToString::to_string).collect();

        let mut columns = Vec::with_capacity(catalog.len());
        for scan_type in &catalog {
            info!("Performing {} scan", scan_type.label);
            if let Some(observer) = &self.observer {
                observer.scan_started(scan_type, targets.len());
            }

            let start_time = Instant::now();
            let verdicts = if self.splits(scan_type, elevated) {
                self.run_chunked(scan_type, &targets).await
            } else {
                self.run_sequential(scan_type, &targets).await
            };
            let elapsed = start_time.elapsed();

            info!(
                "Completed {} scan in {:.2} seconds",
                scan_type.label,
                elapsed.as_secs_f64()
            );
            if let Some(observer) = &self.observer {
                observer.scan_finished(scan_type, elapsed);
            }

            columns.push(ScanColumn {
                scan_type: scan_type.clone(),
                verdicts,
            });
        }

        ScanResults::new(columns)
    }

    fn splits(&self, scan_type: &ScanType, elevated: bool) -> bool {
        self.jobs > 1 && !elevated && !scan_type.privileged
    }

    async fn run_sequential(&self, scan_type: &ScanType, targets: &[String]) -> Vec<bool> {
        probe_all(
            self.tool.as_ref(),
            scan_type,
            targets,
            &self.extra_args,
            self.observer.as_deref(),
        )
        .await
    }

    async fn run_chunked(&self, scan_type: &ScanType, targets: &Arc<[String]>) -> Vec<bool> {
        let mut verdicts = vec![false; targets.len()];
        if targets.is_empty() {
            return verdicts;
        }

        let chunk_size = targets.len().div_ceil(self.jobs);
        let mut workers: JoinSet<(usize, Vec<bool>)> = JoinSet::new();

        for start in (0..targets.len()).step_by(chunk_size) {
            let end = (start + chunk_size).min(targets.len());
            let tool = Arc::clone(&self.tool);
            let targets = Arc::clone(targets);
            let extra_args = Arc::clone(&self.extra_args);
            let observer = self.observer.clone();
            let scan_type = scan_type.clone();

            workers.spawn(async move {
                let chunk = probe_all(
                    tool.as_ref(),
                    &scan_type,
                    &targets[start..end],
                    &extra_args,
                    observer.as_deref(),
                )
                .await;
                (start, chunk)
            });
        }

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((start, chunk)) => {
                    verdicts[start..start + chunk.len()].copy_from_slice(&chunk);
                }
                Err(e) => error!("A {} worker failed, its hosts count as down: {e}", scan_type.label),
            }
        }

        verdicts
    }
}

async fn probe_all(
    tool: &dyn ScanTool,
    scan_type: &ScanType,
    targets: &[String],
    extra_args: &[String],
    observer: Option<&dyn ScanObserver>,
) -> Vec<bool> {
    let mut verdicts = Vec::with_capacity(targets.len());
    for host in targets {
        verdicts.push(scanner::probe(tool, &scan_type.flag, host, extra_args).await);
        if let Some(observer) = observer {
            observer.probe_finished(scan_type);
        }
    }
    verdicts
}
