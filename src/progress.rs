//! Progress bar display for bundle installation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the bundle loop
pub struct ProgressDisplay {
    bundle_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total_bundles: u64) -> Self {
        let bundle_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bundle_pb = ProgressBar::new(total_bundles);
        bundle_pb.set_style(bundle_style);

        Self { bundle_pb }
    }

    /// A display that draws nothing, for when bundle output is printed line by line
    pub fn hidden() -> Self {
        Self {
            bundle_pb: ProgressBar::hidden(),
        }
    }

    /// Update to show current bundle being installed
    pub fn update_bundle(&self, bundle_name: &str, current: usize, total: usize) {
        let msg = format!("({current}/{total}) {bundle_name}");
        self.bundle_pb.set_message(msg);
    }

    /// Increment bundle progress
    pub fn inc_bundle(&self) {
        self.bundle_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bundle_pb.finish_and_clear();
    }

    /// Abandon on error, leaving the bar where it stopped
    pub fn abandon(&self) {
        self.bundle_pb.abandon();
    }
}
