pub use dust_log as log;
pub use dust_squares as squares;

pub use dust_squares::{generate, Contour, Grid, Mesh, Outline, OutlineSettings};
