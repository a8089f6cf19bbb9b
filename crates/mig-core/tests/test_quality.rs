mod common;

use approx::assert_abs_diff_eq;
use image::{DynamicImage, ImageBuffer, Luma, Rgb, RgbImage};
use ndarray::{array, Array2};

use mig_core::error::MigError;
use mig_core::frame::Frame;
use mig_core::io::image_io::{load_grayscale, to_gray_frame};
use mig_core::quality::sobel::{gradient_magnitude, sobel_x, sobel_y};
use mig_core::quality::{frame_mig, mean_intensity_gradient, mean_intensity_gradient_array};

use common::{flat_image, horizontal_ramp_image, vertical_edge_image};

fn gray_frame(img: image::GrayImage) -> Frame {
    to_gray_frame(&DynamicImage::ImageLuma8(img))
}

#[test]
fn test_flat_image_has_zero_mig() {
    let frame = gray_frame(flat_image(12, 9, 128));
    assert_eq!(mean_intensity_gradient(&frame), 0.0);
}

#[test]
fn test_vertical_edge_mig() {
    // Columns 3 and 4 see a Sobel response of 4 * 255 on every row; all
    // other columns and the whole y-derivative stay at zero.
    let frame = gray_frame(vertical_edge_image(8, 8, 4));
    let mig = mean_intensity_gradient(&frame);
    assert!(mig > 0.0);
    assert_abs_diff_eq!(mig, 255.0, epsilon = 1e-9);
}

#[test]
fn test_mig_is_reproducible() {
    let frame = gray_frame(vertical_edge_image(17, 11, 6));
    let first = mean_intensity_gradient(&frame);
    let second = mean_intensity_gradient(&frame);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_ramp_borders_use_reflection() {
    // Ramp 0,10,20,30,40: interior columns give (20) * 4 = 80, the two border
    // columns mirror their inner neighbour and give 0.
    let frame = gray_frame(horizontal_ramp_image(5, 3, 10));
    assert_abs_diff_eq!(mean_intensity_gradient(&frame), 48.0, epsilon = 1e-9);
}

#[test]
fn test_sobel_x_kernel_values() {
    let data: Array2<f32> = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]];
    let dx = sobel_x(&data);
    // Centre: (2 - 0) + 2 * (5 - 3) + (8 - 6) = 8
    assert_eq!(dx[[1, 1]], 8.0);
    // Left and right columns reflect onto column 1, so they cancel.
    assert_eq!(dx[[1, 0]], 0.0);
    assert_eq!(dx[[1, 2]], 0.0);

    let dy = sobel_y(&data);
    // Centre: (6 - 0) + 2 * (7 - 1) + (8 - 2) = 24
    assert_eq!(dy[[1, 1]], 24.0);
    assert_eq!(dy[[0, 1]], 0.0);
}

#[test]
fn test_sobel_y_is_transposed_sobel_x() {
    let mut data = Array2::<f32>::zeros((6, 9));
    for ((r, c), v) in data.indexed_iter_mut() {
        *v = ((r * 7 + c * 13) % 17) as f32;
    }
    let dy_of_transpose = sobel_y(&data.t().to_owned());
    let dx = sobel_x(&data);
    assert_eq!(dy_of_transpose, dx.t().to_owned());
}

#[test]
fn test_magnitude_is_euclidean() {
    let dx: Array2<f32> = array![[3.0, 0.0], [-6.0, 1.0]];
    let dy: Array2<f32> = array![[4.0, 0.0], [8.0, 0.0]];
    let mag = gradient_magnitude(&dx, &dy);
    assert_eq!(mag, array![[5.0, 0.0], [10.0, 1.0]]);
}

#[test]
fn test_tiny_and_empty_images() {
    let single: Array2<f32> = array![[42.0]];
    assert_eq!(mean_intensity_gradient_array(&single), 0.0);

    let empty = Array2::<f32>::zeros((0, 0));
    assert_eq!(mean_intensity_gradient_array(&empty), 0.0);
}

#[test]
fn test_rgb_converted_with_bt601_weights() {
    let img = RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    let frame = to_gray_frame(&DynamicImage::ImageRgb8(img));
    assert_eq!(frame.data[[0, 0]], 76.0);
    assert_eq!(frame.data[[0, 1]], 29.0);
    assert_eq!(frame.original_bit_depth, 8);
}

#[test]
fn test_16bit_gray_reduced_to_8bit() {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(3, 2, Luma([0xABCD]));
    let frame = to_gray_frame(&DynamicImage::ImageLuma16(img));
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.height(), 2);
    assert!(frame.data.iter().all(|&v| v == 171.0));
    assert_eq!(frame.original_bit_depth, 16);
}

#[test]
fn test_frame_mig_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edge1.png");
    vertical_edge_image(8, 8, 4).save(&path).unwrap();

    let loaded = load_grayscale(&path).unwrap();
    assert_eq!(loaded.width(), 8);
    assert_eq!(loaded.height(), 8);
    assert_abs_diff_eq!(frame_mig(&path).unwrap(), 255.0, epsilon = 1e-9);
}

#[test]
fn test_undecodable_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame3.png");
    std::fs::write(&path, b"not an image").unwrap();

    match frame_mig(&path) {
        Err(MigError::ImageDecode { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ImageDecode, got {other:?}"),
    }
}
