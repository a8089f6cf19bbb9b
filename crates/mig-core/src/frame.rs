use ndarray::Array2;
use std::path::PathBuf;

/// A single grayscale image frame.
/// Pixel values are 8-bit intensities (0.0..=255.0) stored as f32.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Bit depth of the decoded source before reduction to 8 bits
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// One folder of sequential frames under the input root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentDir {
    /// Folder name only; reused for the mirrored results folder.
    pub name: String,
    pub path: PathBuf,
}

/// An image file together with the frame number used to order it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFileRef {
    pub path: PathBuf,
    pub file_name: String,
    pub sort_key: u64,
}
