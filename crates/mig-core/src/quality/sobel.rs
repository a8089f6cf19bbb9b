use ndarray::{Array2, Zip};

/// Derivative direction of a Sobel pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// d/dx (x-order 1, y-order 0)
    Horizontal,
    /// d/dy (x-order 0, y-order 1)
    Vertical,
}

/// Mirror an out-of-range index back into `0..len` without repeating the
/// edge sample (`gfedcb|abcdefgh|gfedcba`). Only handles one step outside.
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let n = len as isize;
    if i < 0 {
        (-i) as usize
    } else if i >= n {
        (2 * n - i - 2) as usize
    } else {
        i as usize
    }
}

/// Apply a 3x3 Sobel derivative over the whole image.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// Output has the input's shape. Border pixels read reflect-101 neighbours,
/// so a constant image yields exactly zero everywhere.
pub fn sobel(data: &Array2<f32>, direction: Direction) -> Array2<f32> {
    let (h, w) = data.dim();

    Array2::from_shape_fn((h, w), |(row, col)| {
        let up = reflect_101(row as isize - 1, h);
        let down = reflect_101(row as isize + 1, h);
        let left = reflect_101(col as isize - 1, w);
        let right = reflect_101(col as isize + 1, w);

        match direction {
            Direction::Horizontal => {
                (data[[up, right]] - data[[up, left]])
                    + 2.0 * (data[[row, right]] - data[[row, left]])
                    + (data[[down, right]] - data[[down, left]])
            }
            Direction::Vertical => {
                (data[[down, left]] - data[[up, left]])
                    + 2.0 * (data[[down, col]] - data[[up, col]])
                    + (data[[down, right]] - data[[up, right]])
            }
        }
    })
}

pub fn sobel_x(data: &Array2<f32>) -> Array2<f32> {
    sobel(data, Direction::Horizontal)
}

pub fn sobel_y(data: &Array2<f32>) -> Array2<f32> {
    sobel(data, Direction::Vertical)
}

/// Per-pixel Euclidean magnitude sqrt(dx^2 + dy^2).
pub fn gradient_magnitude(dx: &Array2<f32>, dy: &Array2<f32>) -> Array2<f32> {
    Zip::from(dx)
        .and(dy)
        .map_collect(|&gx, &gy| (gx * gx + gy * gy).sqrt())
}
