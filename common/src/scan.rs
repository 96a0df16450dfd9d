//! # Scan Catalog
//!
//! A scan type names one probing technique and the scanner flag that selects it.
//! The [`Catalog`] is the ordered list of scan types a run compares.

use std::fmt;

/// One probing technique, e.g. a ping sweep or a SYN scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanType {
    pub label: String,
    pub flag: String,
    /// Needs raw sockets, so it only runs with elevated privileges.
    pub privileged: bool,
}

impl ScanType {
    pub fn new(label: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            flag: flag.into(),
            privileged: false,
        }
    }

    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    /// Report column header, e.g. `SYN Scan (-sS)`.
    pub fn header(&self) -> String {
        format!("{} ({})", self.label, self.flag)
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Ordered set of scan types for a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    scan_types: Vec<ScanType>,
}

impl Catalog {
    pub fn new(scan_types: Vec<ScanType>) -> Self {
        Self { scan_types }
    }

    /// The catalog compared by default.
    pub fn standard() -> Self {
        Self::new(vec![
            ScanType::new("Live Host (Ping)", "-sn"),
            ScanType::new("Live Host (No Ping)", "-Pn"),
            ScanType::new("TCP Connect Scan", "-sT"),
            ScanType::new("SYN Scan", "-sS"),
            ScanType::new("NULL Scan", "-sN").privileged(),
            ScanType::new("FIN Scan", "-sF").privileged(),
            ScanType::new("XMAS Scan", "-sX").privileged(),
            ScanType::new("ARP Scan", "-PR"),
        ])
    }

    /// Scan types runnable in the given context.
    ///
    /// Privileged entries are dropped when `elevated` is false. Order is kept.
    pub fn for_context(&self, elevated: bool) -> Catalog {
        Catalog::new(
            self.scan_types
                .iter()
                .filter(|scan_type| elevated || !scan_type.privileged)
                .cloned()
                .collect(),
        )
    }

    pub fn get(&self, label: &str) -> Option<&ScanType> {
        self.scan_types.iter().find(|scan_type| scan_type.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScanType> {
        self.scan_types.iter()
    }

    pub fn len(&self) -> usize {
        self.scan_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scan_types.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ScanType;
    type IntoIter = std::slice::Iter<'a, ScanType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ScanType> for Catalog {
    fn from_iter<I: IntoIterator<Item = ScanType>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
