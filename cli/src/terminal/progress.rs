use std::sync::Mutex;
use std::time::Duration;

use indicatif::ProgressStyle;
use sweepr_common::scan::ScanType;
use sweepr_core::orchestrator::ScanObserver;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Shows one progress bar per scan type while it runs.
pub struct ProgressObserver {
    current: Mutex<Option<Span>>,
    style: ProgressStyle,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.green/white}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);
        Self {
            current: Mutex::new(None),
            style,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanObserver for ProgressObserver {
    fn scan_started(&self, scan_type: &ScanType, hosts: usize) {
        let span = info_span!("scan", indicatif.pb_show = true);
        span.pb_set_style(&self.style);
        span.pb_set_length(hosts as u64);
        span.pb_set_message(&scan_type.header());
        span.pb_start();

        if let Ok(mut current) = self.current.lock() {
            *current = Some(span);
        }
    }

    fn probe_finished(&self, _scan_type: &ScanType) {
        if let Ok(current) = self.current.lock()
            && let Some(span) = current.as_ref()
        {
            span.pb_inc(1);
        }
    }

    fn scan_finished(&self, _scan_type: &ScanType, _elapsed: Duration) {
        if let Ok(mut current) = self.current.lock() {
            current.take();
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
