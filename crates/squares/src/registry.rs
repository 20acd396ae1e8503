use std::collections::BTreeMap;

use crate::configuration::Configuration;
use crate::grid::Cell;

/// Cells whose boundary chords have not been traced yet, with the number of
/// chords left in each.
///
/// Backed by an ordered map so that the tracer always starts from the lowest
/// remaining cell in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeRegistry {
    remaining: BTreeMap<Cell, u8>,
}

impl EdgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `cell` if its configuration has crossings. Returns whether it
    /// was registered.
    pub fn register(&mut self, cell: Cell, config: Configuration) -> bool {
        let count = config.chord_count();
        if count == 0 {
            return false;
        }
        self.remaining.insert(cell, count);
        true
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.remaining.contains_key(&cell)
    }

    #[inline]
    pub fn remaining(&self, cell: Cell) -> u8 {
        self.remaining.get(&cell).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The lowest registered cell in row-major order.
    #[inline]
    pub fn first(&self) -> Option<Cell> {
        self.remaining.keys().next().copied()
    }

    /// Takes one chord from `cell`, dropping the entry once none are left.
    /// Returns false if the cell was not registered.
    pub fn consume(&mut self, cell: Cell) -> bool {
        let Some(count) = self.remaining.get_mut(&cell) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.remaining.remove(&cell);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.remaining.iter().map(|(cell, count)| (*cell, *count))
    }
}
