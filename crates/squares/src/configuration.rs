use glam::Vec2;

use crate::dir::Direction;
use crate::grid::{Cell, Grid};
use crate::tables::{CONNECTION_TABLE, END, POINT_TABLE, SADDLES, TEMPLATE_POINTS, TRIANGLE_TABLE};

/// Which corners of a cell are solid, one bit per [`Corner`](crate::Corner).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Configuration(u8);

impl Configuration {
    pub const EMPTY: Configuration = Configuration(0);
    pub const FULL: Configuration = Configuration(15);

    #[inline]
    pub fn new(mask: u8) -> Self {
        assert!(mask < 16, "configuration out of range: {mask}");
        Configuration(mask)
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_saddle(&self) -> bool {
        SADDLES.contains(&self.0)
    }

    /// True if the solid/empty boundary passes through this cell.
    #[inline]
    pub fn has_crossings(&self) -> bool {
        *self != Self::EMPTY && *self != Self::FULL
    }

    /// How many chords the tracer has to walk through this cell.
    #[inline]
    pub fn chord_count(&self) -> u8 {
        if !self.has_crossings() {
            0
        } else if self.is_saddle() {
            2
        } else {
            1
        }
    }

    /// Local template positions of the points emitted for this cell.
    pub fn points(&self) -> impl Iterator<Item = Vec2> {
        POINT_TABLE[self.0 as usize]
            .iter()
            .take_while(|&&i| i != END)
            .map(|&i| TEMPLATE_POINTS[i as usize])
    }

    /// Triangle corners as indices into [`Self::points`].
    pub fn triangle_indices(&self) -> impl Iterator<Item = u32> {
        TRIANGLE_TABLE[self.0 as usize]
            .iter()
            .take_while(|&&i| i != END)
            .map(|&i| i as u32)
    }

    /// The side a chord leaves through when it enters through `incoming`.
    #[inline]
    pub fn connection(&self, incoming: Direction) -> Option<Direction> {
        match CONNECTION_TABLE[self.0 as usize][incoming as usize] {
            END => None,
            out => Some(Direction::from(out as u8)),
        }
    }
}

/// Configurations of every cell of a grid, resolved once per scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigurationMap {
    width: usize,
    height: usize,
    configurations: Vec<Configuration>,
}

impl ConfigurationMap {
    pub fn new(grid: &Grid, threshold: f32) -> Self {
        let (width, height) = grid.cell_dimensions();
        let configurations = grid
            .cells()
            .map(|cell| grid.configuration(cell, threshold))
            .collect();
        ConfigurationMap {
            width,
            height,
            configurations,
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.width, self.height)
    }

    /// `None` for cells off the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Configuration> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.configurations[cell.y as usize * self.width + cell.x as usize])
    }

    /// Cells and their configurations in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Configuration)> + '_ {
        let width = self.width;
        self.configurations.iter().enumerate().map(move |(i, config)| {
            (Cell::new((i % width) as i32, (i / width) as i32), *config)
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}
