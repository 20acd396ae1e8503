//! Marching squares over a 2D sample grid.
//!
//! A single row-major scan resolves each cell's corner mask, emits its
//! triangles from constant tables, and registers cells the solid/empty
//! boundary passes through. The [`ContourTracer`] then stitches those cells'
//! chords into polygon contours.
//!
//! Boundary points sit at fixed side midpoints; sample magnitudes only decide
//! solidity. Saddle cells always connect their solid corners.
//!
//! ```
//! use dust_squares::{generate, Grid, OutlineSettings};
//!
//! let grid = Grid::from_fn(7, 7, |x, y| {
//!     if (2..5).contains(&x) && (2..5).contains(&y) { 1.0 } else { -1.0 }
//! })
//! .unwrap();
//! let outline = generate(&grid, &OutlineSettings::default()).unwrap();
//! assert_eq!(outline.contours.len(), 1);
//! assert_eq!(outline.contours[0].len(), 12);
//! ```

mod configuration;
mod contour;
pub mod dir;
mod error;
mod grid;
mod mesher;
mod outline;
mod registry;
mod settings;
pub mod tables;
mod tracer;

pub use configuration::{Configuration, ConfigurationMap};
pub use contour::Contour;
pub use dir::{Corner, Direction};
pub use error::{GridError, TraceError};
pub use grid::{Cell, Grid};
pub use mesher::{Mesh, MeshBuilder};
pub use outline::{generate, Outline, Scan};
pub use registry::EdgeRegistry;
pub use settings::OutlineSettings;
pub use tracer::ContourTracer;
