#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx};
use image::{GrayImage, Luma};
use mig_core::consts::REPORT_SHEET_NAME;

/// Constant-intensity 8-bit image.
pub fn flat_image(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Black left part, white from column `edge_col` onwards.
pub fn vertical_edge_image(width: u32, height: u32, edge_col: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| {
        if x < edge_col {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// Intensity rising by `step` per column.
pub fn horizontal_ramp_image(width: u32, height: u32, step: u8) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| Luma([(x as u8).saturating_mul(step)]))
}

/// Create `root/name` and save each image as PNG under the given file name.
pub fn write_experiment(root: &Path, name: &str, images: &[(&str, GrayImage)]) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).expect("create experiment dir");
    for (file_name, img) in images {
        img.save(dir.join(file_name)).expect("save test image");
    }
    dir
}

/// Contents of a generated MIG.xlsx.
#[derive(Debug)]
pub struct ReportContents {
    pub headers: (String, String),
    pub frames: Vec<f64>,
    pub average: Option<f64>,
}

pub fn read_report(path: &Path) -> ReportContents {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open report");
    let range = workbook
        .worksheet_range(REPORT_SHEET_NAME)
        .expect("MIG worksheet");

    let text = |row: u32, col: u32| match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected text at ({row}, {col}), got {other:?}"),
    };
    let number = |row: u32, col: u32| match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::Empty) | None => None,
        other => panic!("expected number at ({row}, {col}), got {other:?}"),
    };

    let headers = (text(0, 0), text(0, 1));
    let mut frames = Vec::new();
    let mut row = 1;
    while let Some(v) = number(row, 0) {
        frames.push(v);
        row += 1;
    }

    ReportContents {
        headers,
        frames,
        average: number(1, 1),
    }
}
