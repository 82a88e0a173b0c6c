//! Text shaping of projection results for terminal display

use std::fmt;

use crate::projection::{HistogramBin, ProjectionResult};

impl fmt::Display for ProjectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "proj={:.1} prob={:.1}% edge={:+.1} band=[{:.1}..{:.1}] vol={} conf={}",
            self.projection,
            self.probability,
            self.edge,
            self.floor,
            self.ceiling,
            self.volatility,
            self.confidence
        )
    }
}

/// Width of the bar column in rendered histograms
const BAR_WIDTH: usize = 40;

/// Render histogram bins as fixed-width text rows:
/// `lo-hi | ######## | count`
pub fn render_histogram(bins: &[HistogramBin]) -> String {
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    if max_count == 0 {
        return String::new();
    }

    let mut out = String::new();
    for bin in bins {
        let bar_len = (bin.count * BAR_WIDTH).div_ceil(max_count);
        out.push_str(&format!(
            "{:>6.1}-{:<6.1} | {:<width$} | {}\n",
            bin.lo,
            bin.hi,
            "#".repeat(bar_len),
            bin.count,
            width = BAR_WIDTH
        ));
    }
    out
}
