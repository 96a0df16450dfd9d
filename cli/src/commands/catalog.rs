use colored::*;
use sweepr_common::scan::Catalog;
use sweepr_core::system;

use crate::terminal::{colors, print};

/// Lists the standard catalog and marks entries the current user cannot run.
pub fn catalog() {
    let elevated = system::is_elevated();
    let standard = Catalog::standard();
    let runnable = standard.for_context(elevated);
    let key_width = standard.iter().map(|s| s.label.len()).max().unwrap_or_default();

    for scan_type in &standard {
        let status: ColoredString = if runnable.get(&scan_type.label).is_some() {
            "available".color(colors::UP)
        } else {
            "needs root".color(colors::DOWN)
        };
        print::aligned_line(
            &scan_type.label,
            key_width,
            &format!("{} {}", scan_type.flag, status),
        );
    }
}
