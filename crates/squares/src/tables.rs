//! Constant lookup tables keyed by cell configuration.
//!
//! Every per-configuration list is padded with [`END`]. Saddles (5 and 10)
//! are always resolved with their solid corners connected: the mesh is a
//! hexagon and the two chords cut off the empty corners.

use glam::Vec2;

/// Terminates the variable-length rows below.
pub const END: i8 = -1;

/// Local positions of the 9 candidate points of a unit cell.
///
/// 0..4 are the corners in configuration-bit order, 4..8 the side midpoints in
/// [`Direction`](crate::Direction) order, 8 the center.
pub const TEMPLATE_POINTS: [Vec2; 9] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.5, 0.0),
    Vec2::new(0.0, 0.5),
    Vec2::new(1.0, 0.5),
    Vec2::new(0.5, 1.0),
    Vec2::new(0.5, 0.5),
];

/// Template points emitted for each configuration, counter-clockwise.
#[rustfmt::skip]
pub static POINT_TABLE: [[i8; 6]; 16] = [
    [END, END, END, END, END, END],
    [0, 4, 5, END, END, END],
    [4, 1, 6, END, END, END],
    [0, 1, 6, 5, END, END],
    [6, 2, 7, END, END, END],
    [0, 4, 6, 2, 7, 5],
    [4, 1, 2, 7, END, END],
    [0, 1, 2, 7, 5, END],
    [7, 3, 5, END, END, END],
    [0, 4, 7, 3, END, END],
    [4, 1, 6, 7, 3, 5],
    [0, 1, 6, 7, 3, END],
    [6, 2, 3, 5, END, END],
    [0, 4, 6, 2, 3, END],
    [4, 1, 2, 3, 5, END],
    [0, 1, 2, 3, END, END],
];

const TRI: [i8; 12] = [END; 12];
const TRI_1: [i8; 12] = [0, 1, 2, END, END, END, END, END, END, END, END, END];
const TRI_2: [i8; 12] = [0, 1, 2, 0, 2, 3, END, END, END, END, END, END];
const TRI_3: [i8; 12] = [0, 1, 2, 0, 2, 3, 0, 3, 4, END, END, END];
const TRI_4: [i8; 12] = [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5];

/// Triangle fans over the configuration's own points, as indices local to the
/// cell's emitted vertex span.
pub static TRIANGLE_TABLE: [[i8; 12]; 16] = [
    TRI, TRI_1, TRI_1, TRI_2, TRI_1, TRI_4, TRI_2, TRI_3, TRI_1, TRI_2, TRI_4, TRI_3, TRI_2,
    TRI_3, TRI_3, TRI_2,
];

/// Outgoing direction for each incoming side, in `[down, left, right, up]`
/// column order.
#[rustfmt::skip]
pub static CONNECTION_TABLE: [[i8; 4]; 16] = [
    [END, END, END, END],
    [1, 0, END, END],
    [2, END, 0, END],
    [END, 2, 1, END],
    [END, END, 3, 2],
    [2, 3, 0, 1],
    [3, END, END, 0],
    [END, 3, END, 1],
    [END, 3, END, 1],
    [3, END, END, 0],
    [1, 0, 3, 2],
    [END, END, 3, 2],
    [END, 2, 1, END],
    [2, END, 0, END],
    [1, 0, END, END],
    [END, END, END, END],
];

/// Configurations whose diagonal corners agree.
pub const SADDLES: [u8; 2] = [0b0101, 0b1010];
