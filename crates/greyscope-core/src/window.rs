//! Pixel-range windowing for partial histogram scans.

use std::str::FromStr;

use anyhow::{Result, bail};

/// A `x,y:n` pixel range: a start coordinate plus a pixel count.
///
/// The window addresses pixels in row-major order over the full image grid,
/// so a range can start mid-row and spill across row boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWindow {
    /// Start column.
    pub x: u32,
    /// Start row.
    pub y: u32,
    /// Number of pixels to cover from the start coordinate.
    pub count: u64,
}

impl PixelWindow {
    /// Errors unless the start coordinate lies inside `[0,width) x [0,height)`.
    pub fn validate_start(&self, width: u32, height: u32) -> Result<()> {
        if self.x >= width {
            bail!(
                "x value {} in --pixels is outside the image width {width}",
                self.x
            );
        }
        if self.y >= height {
            bail!(
                "y value {} in --pixels is outside the image height {height}",
                self.y
            );
        }
        Ok(())
    }

    /// Coordinate reached after advancing `count` pixels row-major from the
    /// start, clipped to the last valid pixel of the image.
    #[must_use]
    pub fn end_coordinate(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (0, 0);
        }
        let w = u64::from(width);
        let flat = u64::from(self.y) * w + u64::from(self.x) + self.count;
        if flat >= w * u64::from(height) {
            (width - 1, height - 1)
        } else {
            ((flat % w) as u32, (flat / w) as u32)
        }
    }
}

impl FromStr for PixelWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, count) = s
            .split_once(':')
            .ok_or_else(|| format!("'{s}' must be specified as x,y:n"))?;
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| format!("'{s}' must be specified as x,y:n"))?;

        let x = x
            .trim()
            .parse()
            .map_err(|_| format!("x in '{s}' is not a number"))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| format!("y in '{s}' is not a number"))?;
        let count = count
            .trim()
            .parse()
            .map_err(|_| format!("pixel count in '{s}' is not a number"))?;

        Ok(Self { x, y, count })
    }
}
