//! Single-pixel grey readout.

use anyhow::{Result, bail};
use image::{DynamicImage, GenericImageView};

use crate::sample::{grey8_of, red_sample16};

/// Reads the 8-bit grey value of the pixel at `(x, y)`.
///
/// # Errors
///
/// Returns an error if the coordinate lies outside the image bounds.
pub fn pick_grey(image: &DynamicImage, x: u32, y: u32) -> Result<u8> {
    let (width, height) = image.dimensions();
    if x >= width {
        bail!("x value {x} is outside the image width {width}");
    }
    if y >= height {
        bail!("y value {y} is outside the image height {height}");
    }
    Ok(grey8_of(red_sample16(image, x, y)))
}

/// Formats a grey value as an HTML hex triplet, e.g. `255` -> `#ffffff`.
#[must_use]
pub fn html_hex(grey: u8) -> String {
    format!("#{grey:02x}{grey:02x}{grey:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_pick_grey_reads_pixel() {
        let mut img = GrayImage::new(3, 3);
        img.put_pixel(1, 2, Luma([77u8]));
        let dynamic = DynamicImage::ImageLuma8(img);

        assert_eq!(pick_grey(&dynamic, 1, 2).expect("pick"), 77);
        assert_eq!(pick_grey(&dynamic, 0, 0).expect("pick"), 0);
    }

    #[test]
    fn test_pick_grey_rejects_out_of_bounds() {
        let dynamic = DynamicImage::ImageLuma8(GrayImage::new(3, 3));

        assert!(pick_grey(&dynamic, 3, 0).is_err());
        assert!(pick_grey(&dynamic, 0, 3).is_err());
    }

    #[test]
    fn test_html_hex_zero_pads() {
        assert_eq!(html_hex(255), "#ffffff");
        assert_eq!(html_hex(0), "#000000");
        assert_eq!(html_hex(10), "#0a0a0a");
    }
}
