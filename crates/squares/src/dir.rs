//          Cell Layout
//
//   3--------7--------2
//   |                 |
//   |                 |
//   5        8        6
//   |                 |
//   |                 |
//   0--------4--------1
//
//  Corners 0..4 double as configuration bits.
//  Midpoints sit at 4 + Direction.
//
//      +y
//       |
//       |
//       --------- +x

use glam::IVec2;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Corner {
    BottomLeft = 0,
    BottomRight = 1,
    TopRight = 2,
    TopLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    /// Offset of this corner's sample relative to the cell origin.
    #[inline]
    pub fn position_offset(&self) -> (usize, usize) {
        match self {
            Corner::BottomLeft => (0, 0),
            Corner::BottomRight => (1, 0),
            Corner::TopRight => (1, 1),
            Corner::TopLeft => (0, 1),
        }
    }

    #[inline]
    pub fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl From<u8> for Corner {
    fn from(num: u8) -> Self {
        assert!(num < 4);
        Corner::ALL[num as usize]
    }
}

/// One of the four sides of a cell, and the step across that side.
///
/// The discriminants are the column index into the edge-connection table.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down = 0,
    Left = 1,
    Right = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];

    #[inline]
    pub fn opposite(&self) -> Self {
        (3 - *self as u8).into()
    }

    #[inline]
    pub fn offset(&self) -> IVec2 {
        match self {
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::Up => IVec2::new(0, 1),
        }
    }

    /// Index of this side's midpoint in the cell template.
    #[inline]
    pub fn midpoint_index(&self) -> usize {
        4 + *self as usize
    }

    /// The two corners bounding this side.
    pub fn corners(&self) -> (Corner, Corner) {
        match self {
            Direction::Down => (Corner::BottomLeft, Corner::BottomRight),
            Direction::Left => (Corner::BottomLeft, Corner::TopLeft),
            Direction::Right => (Corner::BottomRight, Corner::TopRight),
            Direction::Up => (Corner::TopLeft, Corner::TopRight),
        }
    }
}

impl From<u8> for Direction {
    fn from(val: u8) -> Self {
        assert!(val < 4);
        Direction::ALL[val as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.offset() + dir.opposite().offset(), IVec2::ZERO);
        }
    }

    #[test]
    fn corners_match_offsets() {
        for dir in Direction::ALL {
            let (a, b) = dir.corners();
            let (ax, ay) = a.position_offset();
            let (bx, by) = b.position_offset();
            // Both corners of a side lie on that side.
            match dir {
                Direction::Down => assert_eq!((ay, by), (0, 0)),
                Direction::Up => assert_eq!((ay, by), (1, 1)),
                Direction::Left => assert_eq!((ax, bx), (0, 0)),
                Direction::Right => assert_eq!((ax, bx), (1, 1)),
            }
        }
    }

    #[test]
    #[should_panic]
    fn direction_out_of_range() {
        let _dir: Direction = 4.into();
    }
}
