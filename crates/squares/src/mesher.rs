use std::ops::Range;

use glam::Vec3;
use serde::Serialize;

use crate::configuration::Configuration;
use crate::grid::Cell;

/// Triangle soup covering the solid cells of a grid. Vertices are never shared
/// between cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

pub struct MeshBuilder {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    size: f32,
    current: u32,
}

impl MeshBuilder {
    pub fn new(size: f32) -> MeshBuilder {
        MeshBuilder {
            vertices: Vec::new(),
            indices: Vec::new(),
            size,
            current: 0,
        }
    }

    /// Appends the points and triangles of one cell and returns the range of
    /// vertex indices it occupies.
    pub fn add_cell(&mut self, cell: Cell, config: Configuration) -> Range<u32> {
        let base = self.current;
        let origin = cell.origin();
        for point in config.points() {
            let pos = (point + origin) * self.size;
            self.vertices.push(pos.extend(0.0));
            self.current += 1;
        }
        // Offsets are relative to this cell's first vertex, so every index
        // lands inside the span pushed above.
        self.indices
            .extend(config.triangle_indices().map(|i| base + i));
        base..self.current
    }

    pub fn build(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cell_emits_a_quad() {
        let mut builder = MeshBuilder::new(2.0);
        let span = builder.add_cell(Cell::new(1, 3), Configuration::FULL);
        assert_eq!(span, 0..4);
        let mesh = builder.build();
        assert_eq!(
            mesh.vertices,
            vec![
                Vec3::new(2.0, 6.0, 0.0),
                Vec3::new(4.0, 6.0, 0.0),
                Vec3::new(4.0, 8.0, 0.0),
                Vec3::new(2.0, 8.0, 0.0),
            ]
        );
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn empty_cell_emits_nothing() {
        let mut builder = MeshBuilder::new(1.0);
        assert!(builder.add_cell(Cell::new(0, 0), Configuration::EMPTY).is_empty());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn indices_stay_within_each_cell() {
        let mut builder = MeshBuilder::new(1.0);
        let mut spans = Vec::new();
        for mask in 0..16 {
            let before = builder.indices.len();
            let span = builder.add_cell(Cell::new(mask as i32, 0), Configuration::new(mask));
            assert!(builder.indices[before..].iter().all(|i| span.contains(i)));
            spans.push(span);
        }
        // Spans tile the vertex buffer without gaps or overlap.
        assert!(spans.windows(2).all(|w| w[0].end == w[1].start));
        let mesh = builder.build();
        assert_eq!(spans.last().map(|s| s.end), Some(mesh.vertex_count() as u32));
        // The saddles are the only hexagons.
        assert_eq!(spans[5].len(), 6);
        assert_eq!(spans[10].len(), 6);
    }
}
