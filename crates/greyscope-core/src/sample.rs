//! Red-channel sampling at 16-bit precision.

use image::{DynamicImage, GenericImageView};

/// Reads the red channel of one pixel as a 16-bit sample.
///
/// 16-bit buffers are read natively. 8-bit (and float) sources widen the
/// 8-bit value with `v * 257`, replicating the byte into both halves so
/// that 255 maps to 65535.
///
/// The coordinate must lie inside the image bounds.
#[must_use]
pub fn red_sample16(image: &DynamicImage, x: u32, y: u32) -> u16 {
    match image {
        DynamicImage::ImageLuma16(buf) => buf.get_pixel(x, y).0[0],
        DynamicImage::ImageLumaA16(buf) => buf.get_pixel(x, y).0[0],
        DynamicImage::ImageRgb16(buf) => buf.get_pixel(x, y).0[0],
        DynamicImage::ImageRgba16(buf) => buf.get_pixel(x, y).0[0],
        other => u16::from(other.get_pixel(x, y).0[0]) * 257,
    }
}

/// Bucket index (0-15) for a 16-bit red sample: its top four bits.
#[must_use]
pub const fn bucket_of(sample: u16) -> usize {
    (sample >> 12) as usize
}

/// 8-bit grey value for a 16-bit red sample.
#[must_use]
pub const fn grey8_of(sample: u16) -> u8 {
    (sample >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_of(0), 0);
        assert_eq!(bucket_of(4095), 0);
        assert_eq!(bucket_of(4096), 1);
        assert_eq!(bucket_of(65535), 15);
    }

    #[test]
    fn test_grey8_extremes() {
        assert_eq!(grey8_of(0), 0);
        assert_eq!(grey8_of(65535), 255);
    }

    #[test]
    fn test_widened_sample_round_trips_8bit_grey() {
        // An 8-bit grey v widens to v*257, so grey8_of must give v back
        // and bucket_of must give its top four bits.
        let img = GrayImage::from_fn(256, 1, |x, _| Luma([x as u8]));
        let dynamic = DynamicImage::ImageLuma8(img);

        for x in 0..256u32 {
            let sample = red_sample16(&dynamic, x, 0);
            assert_eq!(grey8_of(sample), x as u8);
            assert_eq!(bucket_of(sample), (x >> 4) as usize);
        }
    }

    #[test]
    fn test_native_16bit_sample() {
        let mut img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::new(2, 1);
        img.put_pixel(0, 0, Luma([4095u16]));
        img.put_pixel(1, 0, Luma([4096u16]));
        let dynamic = DynamicImage::ImageLuma16(img);

        assert_eq!(red_sample16(&dynamic, 0, 0), 4095);
        assert_eq!(red_sample16(&dynamic, 1, 0), 4096);
        assert_eq!(bucket_of(red_sample16(&dynamic, 0, 0)), 0);
        assert_eq!(bucket_of(red_sample16(&dynamic, 1, 0)), 1);
    }

    #[test]
    fn test_rgb_sample_reads_red_channel() {
        let mut img = image::RgbImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgb([200u8, 10, 10]));
        let dynamic = DynamicImage::ImageRgb8(img);

        assert_eq!(grey8_of(red_sample16(&dynamic, 0, 0)), 200);
    }
}
