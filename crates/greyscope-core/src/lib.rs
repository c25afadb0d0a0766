//! Greyscope Core - Greyscale image inspection primitives
//!
//! This crate contains the histogram accumulation, bucket selection,
//! pixel-range windowing, and single-pixel readout logic behind the
//! `greyscope` CLI. Images are *assumed* to be greyscale: only the red
//! channel is read, on the assumption that green and blue match it.

pub mod histogram;
pub mod meta;
pub mod pick;
pub mod sample;
pub mod scale;
pub mod window;

pub use histogram::{BUCKETS, Histogram, bucket_range};
pub use pick::{html_hex, pick_grey};
pub use scale::{GREY_SCALE, bucket_index, canonical_name};
pub use window::PixelWindow;
