#![cfg(test)]
use std::net::IpAddr;
use std::sync::Arc;

use sweepr_common::scan::{Catalog, ScanType};
use sweepr_core::input;
use sweepr_core::orchestrator::Orchestrator;
use sweepr_core::report::{self, ScanReport};
use sweepr_core::targets::TargetSetBuilder;

use crate::utils::{StubResolver, StubScanner};

fn csv_of(report: &ScanReport) -> String {
    let mut buf = Vec::new();
    report.write_csv(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

async fn build(specs: &[&str], resolver: StubResolver) -> Vec<IpAddr> {
    TargetSetBuilder::new(Box::new(resolver)).build(specs).await
}

/// A /30 and an unresolvable name, one ping scan, one responsive host.
#[tokio::test]
async fn end_to_end_cidr_and_bad_name() {
    let hosts = build(&["192.168.1.0/30", "badname.invalid"], StubResolver::default()).await;
    let host_strings: Vec<String> = hosts.iter().map(|ip| ip.to_string()).collect();
    assert_eq!(host_strings, vec!["192.168.1.1", "192.168.1.2"]);

    let catalog = Catalog::new(vec![ScanType::new("Ping", "-sn")]);
    let tool = Arc::new(StubScanner::with_up(&["192.168.1.1"]));
    let results = Orchestrator::new(tool).run(&catalog, &hosts, false).await;

    let report = report::assemble(&hosts, &results).unwrap();
    assert_eq!(report.hosts().len(), 2);
    assert_eq!(
        csv_of(&report),
        "Host,Ping (-sn)\n192.168.1.1,true\n192.168.1.2,false\n"
    );
}

#[tokio::test]
async fn unprivileged_report_has_no_privileged_columns() {
    let hosts = build(&["10.0.0.1-2"], StubResolver::default()).await;
    let tool = Arc::new(StubScanner::with_up(&["10.0.0.2"]));
    let results = Orchestrator::new(tool.clone())
        .run(&Catalog::standard(), &hosts, false)
        .await;
    let report = report::assemble(&hosts, &results).unwrap();

    let headers = report.headers();
    assert_eq!(
        headers,
        vec![
            "Host",
            "Live Host (Ping) (-sn)",
            "Live Host (No Ping) (-Pn)",
            "TCP Connect Scan (-sT)",
            "SYN Scan (-sS)",
            "ARP Scan (-PR)"
        ]
    );
    assert!(tool.invocations().iter().all(|cmd| !cmd.contains("-sN")
        && !cmd.contains("-sF")
        && !cmd.contains("-sX")));

    let elevated = Orchestrator::new(Arc::new(StubScanner::default()))
        .run(&Catalog::standard(), &hosts, true)
        .await;
    assert_eq!(elevated.len(), 8);
}

#[tokio::test]
async fn every_cell_belongs_to_its_host() {
    let hosts = build(
        &["10.0.0.1-6", "db.corp", "10.0.0.3"],
        StubResolver::with(&[("db.corp", "172.16.0.9")]),
    )
    .await;
    assert_eq!(hosts.len(), 8);

    let up = ["10.0.0.2", "10.0.0.5", "172.16.0.9"];
    let catalog = Catalog::new(vec![
        ScanType::new("Ping", "-sn"),
        ScanType::new("TCP Connect Scan", "-sT"),
    ]);

    for jobs in [1, 3] {
        let tool = Arc::new(StubScanner::with_up(&up));
        let results = Orchestrator::new(tool)
            .with_jobs(jobs)
            .run(&catalog, &hosts, false)
            .await;
        let report = report::assemble(&hosts, &results).unwrap();

        for (i, (host, verdicts)) in report.rows().enumerate() {
            assert_eq!(host, hosts[i]);
            let expected = up.contains(&host.to_string().as_str());
            for (j, verdict) in verdicts.iter().enumerate() {
                assert_eq!(*verdict, expected, "row {i} column {j} with {jobs} jobs");
                assert_eq!(*verdict, results.columns()[j].verdicts[i]);
            }
        }
    }
}

#[tokio::test]
async fn failed_probe_is_false_and_batch_continues() {
    let hosts = build(&["10.0.0.1-3"], StubResolver::default()).await;
    let tool = Arc::new(StubScanner::with_up(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]).broken(&["10.0.0.2"]));
    let catalog = Catalog::new(vec![ScanType::new("Ping", "-sn")]);

    let results = Orchestrator::new(tool.clone())
        .with_extra_args(vec!["-T4".to_string()])
        .run(&catalog, &hosts, true)
        .await;

    assert_eq!(results.get("Ping"), Some(&[true, false, true][..]));
    assert_eq!(
        tool.invocations(),
        vec![
            "stub-nmap -sn 10.0.0.1 -T4",
            "stub-nmap -sn 10.0.0.2 -T4",
            "stub-nmap -sn 10.0.0.3 -T4"
        ]
    );
}

#[tokio::test]
async fn report_export_is_repeatable() {
    let targets = input::parse_targets("192.168.7.0/29\n# lab gateway\n10.1.1.1\n".as_bytes()).unwrap();
    let hosts = build(
        &targets.iter().map(String::as_str).collect::<Vec<_>>(),
        StubResolver::default(),
    )
    .await;
    assert_eq!(hosts.len(), 7);

    let tool = Arc::new(StubScanner::with_up(&["192.168.7.3", "10.1.1.1"]));
    let results = Orchestrator::new(tool)
        .run(&Catalog::new(vec![ScanType::new("Ping", "-sn")]), &hosts, false)
        .await;
    let report = report::assemble(&hosts, &results).unwrap();

    let dir = std::env::temp_dir();
    let first_path = dir.join(format!("sweepr-it-{}-a.csv", std::process::id()));
    let second_path = dir.join(format!("sweepr-it-{}-b.csv", std::process::id()));
    report.export(&first_path).unwrap();
    report::assemble(&hosts, &results).unwrap().export(&second_path).unwrap();

    let first = std::fs::read(&first_path).unwrap();
    let second = std::fs::read(&second_path).unwrap();
    std::fs::remove_file(&first_path).unwrap();
    std::fs::remove_file(&second_path).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("192.168.7.3,true\n"));
}
