use std::cmp::Ordering;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::dir::{Corner, Direction};
use crate::error::GridError;

/// A rectangular field of samples, stored row by row starting at `y = 0`.
///
/// A sample is solid when it is strictly greater than the threshold in use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::new(raw.width, raw.height, raw.samples)
    }
}

impl Grid {
    pub fn new(width: usize, height: usize, samples: Vec<f32>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = width * height;
        if samples.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            samples,
        })
    }

    pub fn filled(width: usize, height: usize, value: f32) -> Result<Self, GridError> {
        Self::new(width, height, vec![value; width * height])
    }

    /// Builds a grid by evaluating `f(x, y)` at every sample.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Result<Self, GridError> {
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self::new(width, height, samples)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height, "sample out of bounds");
        self.samples[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(x < self.width && y < self.height, "sample out of bounds");
        self.samples[y * self.width + x] = value;
    }

    #[inline]
    pub fn is_solid(&self, x: usize, y: usize, threshold: f32) -> bool {
        self.get(x, y) > threshold
    }

    /// Number of cells along x and y. Zero along an axis with a single sample.
    #[inline]
    pub fn cell_dimensions(&self) -> (usize, usize) {
        (self.width - 1, self.height - 1)
    }

    #[inline]
    pub fn contains_cell(&self, cell: Cell) -> bool {
        let (w, h) = self.cell_dimensions();
        cell.is_within(w, h)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = self.cell_dimensions();
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x as i32, y as i32)))
    }

    /// Computes the 4-bit corner mask of an in-bounds cell.
    pub fn configuration(&self, cell: Cell, threshold: f32) -> Configuration {
        debug_assert!(self.contains_cell(cell));
        let mut mask: u8 = 0;
        for corner in Corner::ALL {
            let (dx, dy) = corner.position_offset();
            if self.is_solid(cell.x as usize + dx, cell.y as usize + dy, threshold) {
                mask |= corner.bit();
            }
        }
        Configuration::new(mask)
    }
}

/// A cell addressed by the sample at its bottom-left corner.
///
/// Coordinates are signed so that stepping off the grid is representable.
/// Cells order row-major: by `y`, then by `x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    #[inline]
    pub fn step(&self, dir: Direction) -> Cell {
        let IVec2 { x, y } = IVec2::new(self.x, self.y) + dir.offset();
        Cell { x, y }
    }

    /// True if the cell lies inside a `width` x `height` block of cells
    /// starting at the origin.
    #[inline]
    pub fn is_within(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
