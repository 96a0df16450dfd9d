//! # Report Assembler
//!
//! Joins the host list with each scan type's verdicts into one table and
//! exports it as CSV: a `Host` column, then one boolean column per scan type
//! headed `<Label> (<flag>)`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::net::IpAddr;
use std::path::Path;

use csv::Writer;
use sweepr_common::scan::ScanType;

use crate::error::ReportError;
use crate::orchestrator::ScanResults;

pub const HOST_HEADER: &str = "Host";

/// Host-by-scan-type verdict table.
///
/// Every column holds exactly one verdict per host, in host order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    hosts: Vec<IpAddr>,
    columns: Vec<ReportColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportColumn {
    pub scan_type: ScanType,
    pub verdicts: Vec<bool>,
}

impl ReportColumn {
    pub fn responsive(&self) -> usize {
        self.verdicts.iter().filter(|up| **up).count()
    }
}

/// Builds the report, refusing any column whose length differs from `hosts`.
pub fn assemble(hosts: &[IpAddr], results: &ScanResults) -> Result<ScanReport, ReportError> {
    let mut columns = Vec::with_capacity(results.len());

    for column in results.columns() {
        if column.verdicts.len() != hosts.len() {
            return Err(ReportError::Misaligned {
                label: column.scan_type.label.clone(),
                expected: hosts.len(),
                found: column.verdicts.len(),
            });
        }
        columns.push(ReportColumn {
            scan_type: column.scan_type.clone(),
            verdicts: column.verdicts.clone(),
        });
    }

    Ok(ScanReport {
        hosts: hosts.to_vec(),
        columns,
    })
}

impl ScanReport {
    pub fn hosts(&self) -> &[IpAddr] {
        &self.hosts
    }

    pub fn columns(&self) -> &[ReportColumn] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<String> {
        std::iter::once(HOST_HEADER.to_string())
            .chain(self.columns.iter().map(|column| column.scan_type.header()))
            .collect()
    }

    /// Rows in host order, each with one verdict per column.
    pub fn rows(&self) -> impl Iterator<Item = (IpAddr, Vec<bool>)> + '_ {
        self.hosts.iter().enumerate().map(|(row, host)| {
            let verdicts = self.columns.iter().map(|column| column.verdicts[row]).collect();
            (*host, verdicts)
        })
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = Writer::from_writer(writer);
        csv_writer.write_record(self.headers())?;

        for (host, verdicts) in self.rows() {
            let mut record: Vec<String> = Vec::with_capacity(verdicts.len() + 1);
            record.push(host.to_string());
            record.extend(verdicts.iter().map(bool::to_string));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Writes the CSV to `path`, replacing any existing file.
    pub fn export(&self, path: &Path) -> Result<(), ReportError> {
        let io_err = |source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        self.write_csv(&mut writer)?;
        writer.flush().map_err(io_err)
    }
}
