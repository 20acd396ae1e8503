use serde::Serialize;

use crate::configuration::ConfigurationMap;
use crate::contour::Contour;
use crate::error::TraceError;
use crate::grid::Grid;
use crate::mesher::{Mesh, MeshBuilder};
use crate::registry::EdgeRegistry;
use crate::settings::OutlineSettings;
use crate::tracer::ContourTracer;

/// Everything produced by one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Outline {
    pub mesh: Mesh,
    pub contours: Vec<Contour>,
}

/// Output of the row-major scan, before any contour is traced.
#[derive(Clone, Debug)]
pub struct Scan {
    pub configurations: ConfigurationMap,
    pub mesh: Mesh,
    pub registry: EdgeRegistry,
}

impl Scan {
    /// Resolves every cell once, emitting its triangles and registering its
    /// crossings.
    pub fn new(grid: &Grid, settings: &OutlineSettings) -> Scan {
        let configurations = ConfigurationMap::new(grid, settings.threshold);
        let mut builder = MeshBuilder::new(settings.cell_size);
        let mut registry = EdgeRegistry::new();
        for (cell, config) in configurations.iter() {
            builder.add_cell(cell, config);
            registry.register(cell, config);
        }
        let mesh = builder.build();
        tracing::debug!(
            cells = configurations.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            boundary_cells = registry.len(),
            "Scanned grid"
        );
        Scan {
            configurations,
            mesh,
            registry,
        }
    }

    pub fn trace(self, settings: &OutlineSettings) -> Result<Outline, TraceError> {
        let contours =
            ContourTracer::new(&self.configurations, self.registry, settings.cell_size).trace()?;
        tracing::debug!(contours = contours.len(), "Traced contours");
        Ok(Outline {
            mesh: self.mesh,
            contours,
        })
    }
}

/// Builds the mesh and contours of `grid`.
pub fn generate(grid: &Grid, settings: &OutlineSettings) -> Result<Outline, TraceError> {
    Scan::new(grid, settings).trace(settings)
}
