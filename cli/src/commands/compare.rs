use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use sweepr_common::{config::Config, scan::Catalog, success, warn};
use sweepr_core::{
    input,
    orchestrator::Orchestrator,
    report::{self, ScanReport},
    resolver::SystemResolver,
    scanner::NmapScanner,
    system,
    targets::TargetSetBuilder,
};

use crate::terminal::{colors, format, print, progress::ProgressObserver};

pub async fn compare(targets_file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let raw_specs: Vec<String> = input::read_targets(targets_file)
        .with_context(|| format!("loading targets from {}", targets_file.display()))?;

    let hosts: Vec<IpAddr> = TargetSetBuilder::new(Box::new(SystemResolver))
        .resolve_names(!cfg.no_dns)
        .build(&raw_specs)
        .await;

    if hosts.is_empty() {
        print::no_results();
    }

    let elevated = system::is_elevated();
    if !elevated {
        warn!("Not running as root: NULL, FIN and XMAS scans are skipped");
    }

    let orchestrator = Orchestrator::new(Arc::new(NmapScanner::from_config(cfg)))
        .with_extra_args(cfg.extra_args.clone())
        .with_jobs(cfg.jobs)
        .with_observer(Arc::new(ProgressObserver::new()));

    print::header("comparing scan types", cfg.quiet);
    let start_time = Instant::now();
    let results = orchestrator.run(&Catalog::standard(), &hosts, elevated).await;

    let report: ScanReport = report::assemble(&hosts, &results)?;
    report
        .export(&cfg.output)
        .with_context(|| format!("exporting results to {}", cfg.output.display()))?;

    comparison_ends(&report, start_time.elapsed(), cfg);
    success!("Results saved to {}", cfg.output.display());
    Ok(())
}

fn comparison_ends(report: &ScanReport, total_time: Duration, cfg: &Config) {
    if report.hosts().is_empty() {
        return;
    }

    print::header("scan comparison", cfg.quiet);
    if cfg.quiet < 2 {
        print_table(report);
    }
    print_summary(report, total_time, cfg);
}

fn print_table(report: &ScanReport) {
    let host_width = report
        .hosts()
        .iter()
        .map(|ip| ip.to_string().len())
        .max()
        .unwrap_or_default()
        .max(4);

    let mut head = format::pad(&format!("{}", "Host".color(colors::PRIMARY).bold()), host_width);
    for column in report.columns() {
        head.push_str("  ");
        head.push_str(&format!("{}", column.scan_type.flag.color(colors::ACCENT).bold()));
    }
    print::print(&head);

    for (host, verdicts) in report.rows() {
        let mut line = format::pad(&format!("{}", format::host(&host)), host_width);
        for (column, up) in report.columns().iter().zip(verdicts) {
            let width = column.scan_type.flag.len().max(4);
            line.push_str("  ");
            line.push_str(&format::pad(&format!("{}", format::verdict(up)), width));
        }
        print::print(&line);
    }
}

fn print_summary(report: &ScanReport, total_time: Duration, cfg: &Config) {
    let key_width = report
        .columns()
        .iter()
        .map(|column| column.scan_type.header().len())
        .max()
        .unwrap_or_default();

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    for column in report.columns() {
        let value = format!("{}/{} responsive", column.responsive(), report.hosts().len());
        print::aligned_line(&column.scan_type.header(), key_width, &value);
    }

    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let hosts: ColoredString = format!("{} hosts", report.hosts().len()).bold().green();
    let output = format!("Comparison complete: {hosts} scanned in {total_time}");
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }
}
