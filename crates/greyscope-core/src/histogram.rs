//! 16-bucket grey histogram accumulation and selection.

use std::collections::HashMap;

use anyhow::Result;
use image::{DynamicImage, GenericImageView};

use crate::sample::{bucket_of, red_sample16};
use crate::scale;
use crate::window::PixelWindow;

/// Number of grey buckets; each spans 16 of the 256 grey values.
pub const BUCKETS: usize = 16;

/// Inclusive grey value range `[i*16, i*16+15]` covered by a bucket.
#[must_use]
pub const fn bucket_range(bucket: usize) -> (u8, u8) {
    let max = ((bucket as u8) << 4) | 0x0F;
    (max - 15, max)
}

/// Fixed-size grey histogram plus the number of pixels scanned into it.
///
/// Invariant: the bin counts sum to `considered`, the number of pixels
/// actually visited (which is fewer than the image total when a pixel
/// window was requested).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BUCKETS],
    considered: u64,
}

impl Histogram {
    /// Scans every pixel of `image`.
    #[must_use]
    pub fn scan(image: &DynamicImage) -> Self {
        Self::scan_range(image, 0, 0, None)
    }

    /// Scans `window.count` pixels row-major from the window's start
    /// coordinate, which must lie inside the image bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the start coordinate is out of bounds.
    pub fn scan_window(image: &DynamicImage, window: &PixelWindow) -> Result<Self> {
        let (width, height) = image.dimensions();
        window.validate_start(width, height)?;
        Ok(Self::scan_range(image, window.x, window.y, Some(window.count)))
    }

    fn scan_range(image: &DynamicImage, start_x: u32, start_y: u32, limit: Option<u64>) -> Self {
        let (width, height) = image.dimensions();
        let mut bins = [0u64; BUCKETS];
        let mut considered = 0u64;

        // Row-major from the start coordinate; rows after the first begin
        // at column zero. The limit need not align to a row boundary.
        'rows: for y in start_y..height {
            let first_x = if y == start_y { start_x } else { 0 };
            for x in first_x..width {
                if limit.is_some_and(|n| considered >= n) {
                    break 'rows;
                }
                bins[bucket_of(red_sample16(image, x, y))] += 1;
                considered += 1;
            }
        }

        Self { bins, considered }
    }

    /// Returns the per-bucket pixel counts.
    #[must_use]
    pub const fn bins(&self) -> &[u64; BUCKETS] {
        &self.bins
    }

    /// Returns the number of pixels scanned.
    #[must_use]
    pub const fn considered(&self) -> u64 {
        self.considered
    }

    /// Share of scanned pixels that fell into `bucket`, in percent.
    ///
    /// A histogram with zero pixels considered reports 0% for every bucket.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn percentage(&self, bucket: usize) -> f64 {
        if self.considered == 0 {
            return 0.0;
        }
        self.bins[bucket] as f64 / self.considered as f64 * 100.0
    }

    /// Percentage of scanned pixels matching a named grey color.
    ///
    /// # Errors
    ///
    /// Returns an error if the name matches none of the 16 fixed names.
    pub fn named_percentage(&self, name: &str) -> Result<f64> {
        Ok(self.percentage(scale::bucket_index(name)?))
    }

    /// Returns a copy with only the `n` highest bins kept and the rest
    /// zeroed. Slot positions are preserved: this is a mask, not a resort.
    ///
    /// Ties straddling the cut-off keep the lowest-index bins. `n >= 16`
    /// returns the histogram unchanged.
    #[must_use]
    pub fn keep_top(&self, n: usize) -> Self {
        if n >= BUCKETS {
            return self.clone();
        }

        let mut sorted = self.bins;
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        // Per-value quota among the top n, counting duplicates.
        let mut quota: HashMap<u64, usize> = HashMap::new();
        for &value in &sorted[..n] {
            *quota.entry(value).or_insert(0) += 1;
        }

        let mut bins = [0u64; BUCKETS];
        for (i, &value) in self.bins.iter().enumerate() {
            if let Some(remaining) = quota.get_mut(&value) {
                if *remaining > 0 {
                    bins[i] = value;
                    *remaining -= 1;
                }
            }
        }

        Self {
            bins,
            considered: self.considered,
        }
    }
}
