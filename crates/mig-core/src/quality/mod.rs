pub mod mig;
pub mod sobel;

pub use mig::{frame_mig, mean_intensity_gradient, mean_intensity_gradient_array};
