use std::collections::HashSet;

use glam::Vec2;

use crate::configuration::ConfigurationMap;
use crate::contour::Contour;
use crate::dir::Direction;
use crate::error::TraceError;
use crate::grid::Cell;
use crate::registry::EdgeRegistry;
use crate::tables::TEMPLATE_POINTS;

/// Stitches the chords of registered cells into contours, draining the
/// registry.
///
/// Every crossing is walked exactly once. A saddle has two chords and is
/// consumed once per chord; which chord a visit belongs to is decided by the
/// side it is entered through, never by sample values.
pub struct ContourTracer<'a> {
    configurations: &'a ConfigurationMap,
    registry: EdgeRegistry,
    walked: HashSet<(Cell, Direction)>,
    size: f32,
}

/// Both cells on either side of a crossing name it the same way.
#[inline]
fn crossing(cell: Cell, side: Direction) -> (Cell, Direction) {
    match side {
        Direction::Down | Direction::Left => (cell.step(side), side.opposite()),
        Direction::Right | Direction::Up => (cell, side),
    }
}

impl<'a> ContourTracer<'a> {
    pub fn new(configurations: &'a ConfigurationMap, registry: EdgeRegistry, size: f32) -> Self {
        ContourTracer {
            configurations,
            registry,
            walked: HashSet::new(),
            size,
        }
    }

    pub fn trace(mut self) -> Result<Vec<Contour>, TraceError> {
        let mut contours = Vec::new();
        while let Some(start) = self.registry.first() {
            self.registry.consume(start);
            let contour = self.trace_from(start)?;
            tracing::trace!(
                x = start.x,
                y = start.y,
                points = contour.len(),
                closed = contour.closed,
                "Traced contour"
            );
            contours.push(contour);
        }
        Ok(contours)
    }

    fn trace_from(&mut self, start: Cell) -> Result<Contour, TraceError> {
        let (entry, exit) = self.initial_direction(start)?;
        let mut points = vec![self.crossing_point(start, entry)];
        if self.walk(start, exit, Some((start, entry)), &mut points)? {
            return Ok(Contour {
                points,
                closed: true,
            });
        }

        // The chain left the grid. Follow it from the start the other way and
        // put that half in front.
        let mut back = Vec::new();
        self.walk(start, entry, None, &mut back)?;
        back.reverse();
        // The walk's first point is the start's own entry crossing.
        back.pop();
        back.extend(points);
        Ok(Contour {
            points: back,
            closed: false,
        })
    }

    /// Picks an untraced chord of `start`, preferring one whose exit leads to
    /// a registered neighbor. Returns `(entry, exit)`.
    fn initial_direction(&self, start: Cell) -> Result<(Direction, Direction), TraceError> {
        let config = self.configurations.get(start).unwrap_or_default();
        let mut border = None;
        for entry in Direction::ALL {
            let Some(exit) = config.connection(entry) else {
                continue;
            };
            if self.walked.contains(&crossing(start, entry))
                || self.walked.contains(&crossing(start, exit))
            {
                continue;
            }
            let next = start.step(exit);
            if self.registry.contains(next) {
                return Ok((entry, exit));
            }
            if border.is_none() && !self.configurations.contains(next) {
                border = Some((entry, exit));
            }
        }
        border.ok_or(TraceError::NoOutgoingDirection {
            cell: start,
            configuration: config.value(),
        })
    }

    /// Walks from `cell` out through `exit`, pushing one point per crossing
    /// entered, until the walk enters `close` (returns true) or leaves the
    /// grid (pushes the border crossing, returns false).
    fn walk(
        &mut self,
        mut cell: Cell,
        mut exit: Direction,
        close: Option<(Cell, Direction)>,
        points: &mut Vec<Vec2>,
    ) -> Result<bool, TraceError> {
        loop {
            if !self.walked.insert(crossing(cell, exit)) {
                return Err(TraceError::CrossingRevisited { cell });
            }
            let next = cell.step(exit);
            let entry = exit.opposite();
            if close == Some((next, entry)) {
                return Ok(true);
            }
            let Some(config) = self.configurations.get(next) else {
                points.push(self.crossing_point(cell, exit));
                return Ok(false);
            };
            if !self.registry.consume(next) {
                return Err(TraceError::Unregistered { cell: next });
            }
            points.push(self.crossing_point(next, entry));
            exit = config
                .connection(entry)
                .ok_or(TraceError::MissingConnection {
                    cell: next,
                    configuration: config.value(),
                })?;
            cell = next;
        }
    }

    #[inline]
    fn crossing_point(&self, cell: Cell, side: Direction) -> Vec2 {
        (TEMPLATE_POINTS[side.midpoint_index()] + cell.origin()) * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn trace(grid: &Grid) -> (Vec<Contour>, usize) {
        let map = ConfigurationMap::new(grid, 0.0);
        let mut registry = EdgeRegistry::new();
        let mut visits = 0;
        for (cell, config) in map.iter() {
            registry.register(cell, config);
            visits += config.chord_count() as usize;
        }
        (ContourTracer::new(&map, registry, 1.0).trace().unwrap(), visits)
    }

    fn solid_at(points: &'static [(usize, usize)]) -> impl Fn(usize, usize) -> f32 {
        move |x, y| if points.contains(&(x, y)) { 1.0 } else { -1.0 }
    }

    #[test]
    fn single_sample_makes_a_diamond() {
        let grid = Grid::from_fn(5, 5, solid_at(&[(2, 2)])).unwrap();
        let (contours, visits) = trace(&grid);
        assert_eq!(visits, 4);
        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert!(contour.closed);
        assert_eq!(contour.len(), 4);
        for expected in [
            Vec2::new(2.0, 1.5),
            Vec2::new(2.5, 2.0),
            Vec2::new(2.0, 2.5),
            Vec2::new(1.5, 2.0),
        ] {
            assert!(contour.points.contains(&expected), "missing {expected}");
        }
        assert!((contour.signed_area().abs() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn starts_from_lowest_cell() {
        let grid = Grid::from_fn(5, 5, solid_at(&[(2, 2)])).unwrap();
        let (contours, _) = trace(&grid);
        // Cell (1, 1) is first in row-major order; its chord runs right/up and
        // its up-neighbor is registered, so the walk enters through the right.
        assert_eq!(contours[0].points[0], Vec2::new(2.0, 1.5));
    }

    #[test]
    fn saddle_joins_diagonal_samples() {
        // Two solid samples on a diagonal share a saddle cell whose solid
        // corners are connected, so a single loop passes through it twice.
        let grid = Grid::from_fn(6, 6, solid_at(&[(2, 2), (3, 3)])).unwrap();
        let map = ConfigurationMap::new(&grid, 0.0);
        assert_eq!(map.get(Cell::new(2, 2)).map(|c| c.value()), Some(5));
        let (contours, visits) = trace(&grid);
        assert_eq!(contours.len(), 1);
        assert!(contours[0].closed);
        assert_eq!(contours[0].len(), visits);
        // All four sides of the saddle are crossed by the same loop.
        for side in [
            Vec2::new(2.5, 2.0),
            Vec2::new(2.0, 2.5),
            Vec2::new(3.0, 2.5),
            Vec2::new(2.5, 3.0),
        ] {
            assert!(contours[0].points.contains(&side), "missing {side}");
        }
    }

    #[test]
    fn border_chains_are_open() {
        // A solid column along the left edge.
        let grid = Grid::from_fn(4, 4, |x, _| if x == 0 { 1.0 } else { -1.0 }).unwrap();
        let (contours, visits) = trace(&grid);
        assert_eq!(visits, 3);
        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert!(!contour.closed);
        assert_eq!(
            contour.points,
            vec![
                Vec2::new(0.5, 0.0),
                Vec2::new(0.5, 1.0),
                Vec2::new(0.5, 2.0),
                Vec2::new(0.5, 3.0),
            ]
        );
    }

    #[test]
    fn isolated_corner_chord() {
        let grid = Grid::from_fn(2, 2, solid_at(&[(0, 0)])).unwrap();
        let (contours, _) = trace(&grid);
        assert_eq!(contours.len(), 1);
        assert!(!contours[0].closed);
        assert_eq!(
            contours[0].points,
            vec![Vec2::new(0.5, 0.0), Vec2::new(0.0, 0.5)]
        );
    }

    #[test]
    fn inconsistent_registry_is_an_error() {
        let grid = Grid::from_fn(5, 5, solid_at(&[(2, 2)])).unwrap();
        let map = ConfigurationMap::new(&grid, 0.0);
        let mut registry = EdgeRegistry::new();
        for (cell, config) in map.iter() {
            // Leave one cell of the diamond out.
            if cell != Cell::new(2, 2) {
                registry.register(cell, config);
            }
        }
        let err = ContourTracer::new(&map, registry, 1.0).trace().unwrap_err();
        assert_eq!(
            err,
            TraceError::Unregistered {
                cell: Cell::new(2, 2)
            }
        );
    }
}
