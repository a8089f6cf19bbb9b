use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{MigError, Result};
use crate::frame::Frame;

/// Load an image file as an 8-bit grayscale intensity frame.
///
/// Any decoding or read failure is reported as [`MigError::ImageDecode`]
/// carrying the offending path.
pub fn load_grayscale(path: &Path) -> Result<Frame> {
    let img = image::open(path).map_err(|source| MigError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_gray_frame(&img))
}

/// Reduce a decoded image to a single 8-bit intensity channel.
///
/// Gray sources keep their values (16-bit is shifted down by 8 bits), colour
/// sources are weighted with the BT.601 luma coefficients. Alpha is dropped.
pub fn to_gray_frame(img: &DynamicImage) -> Frame {
    let color = img.color();
    let bit_depth = (color.bits_per_pixel() / color.channel_count() as u16) as u8;
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut data = Array2::<f32>::zeros((h, w));

    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => {
            let gray = img.to_luma8();
            for (col, row, pixel) in gray.enumerate_pixels() {
                data[[row as usize, col as usize]] = pixel.0[0] as f32;
            }
        }
        DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => {
            let gray = img.to_luma16();
            for (col, row, pixel) in gray.enumerate_pixels() {
                data[[row as usize, col as usize]] = (pixel.0[0] >> 8) as f32;
            }
        }
        _ => {
            let rgb = img.to_rgb8();
            for (col, row, pixel) in rgb.enumerate_pixels() {
                let [r, g, b] = pixel.0;
                let luma =
                    LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
                data[[row as usize, col as usize]] = luma.round().min(255.0);
            }
        }
    }

    Frame::new(data, bit_depth)
}
