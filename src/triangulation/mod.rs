mod adjacency;
mod cases;
mod triangle;

pub use adjacency::AdjacencyIndex;
pub use cases::{case_points, FULL};
pub use triangle::Triangle;

use crate::error::{InvariantError, Result};
use crate::lattice::{Cell, CellPoint, Lattice, PointId};
use crate::math::Point3;

/// Working state of one triangulation pass: the deduplicated vertex list,
/// the triangles over it and the per-vertex adjacency.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    /// Output vertex positions; a vertex's index is its position in this list.
    pub vertices: Vec<Point3>,
    /// Emitted triangles in creation order.
    pub triangles: Vec<Triangle>,
    /// Triangles per vertex.
    pub adjacency: AdjacencyIndex,
    /// Vertices known to lie strictly inside solid mass.
    interior: Vec<bool>,
}

impl Triangulation {
    /// Creates an empty triangulation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emitted vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if `vertex` is a corner of a fully solid cell.
    ///
    /// Such vertices never sit on an outline, so the tracer skips them.
    #[must_use]
    pub fn is_interior(&self, vertex: u32) -> bool {
        usize::try_from(vertex)
            .ok()
            .and_then(|i| self.interior.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Emits the triangles of one cell according to its configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] if the configuration is out of range or
    /// the cell references points missing from `lattice`.
    pub fn triangulate_cell(&mut self, lattice: &mut Lattice, cell: &Cell) -> Result<()> {
        let points = case_points(cell.configuration)?;
        if points.is_empty() {
            return Ok(());
        }

        let mut buffer = [0u32; 6];
        for (slot, &role) in buffer.iter_mut().zip(points) {
            *slot = self.resolve_vertex(lattice, cell.point(role))?;
        }
        let indices = &buffer[..points.len()];

        for i in 1..indices.len() - 1 {
            let triangle = Triangle::new(indices[0], indices[i], indices[i + 1]);
            self.adjacency.register(triangle)?;
            self.triangles.push(triangle);
        }

        if cell.configuration == FULL {
            for role in [
                CellPoint::TopLeft,
                CellPoint::TopRight,
                CellPoint::BottomRight,
                CellPoint::BottomLeft,
            ] {
                let vertex = self.resolve_vertex(lattice, cell.point(role))?;
                self.interior[vertex as usize] = true;
            }
        }

        Ok(())
    }

    /// Returns the output vertex of a lattice point, appending it on first use.
    fn resolve_vertex(&mut self, lattice: &mut Lattice, id: PointId) -> Result<u32> {
        let point = lattice.point_mut(id)?;
        if let Some(vertex) = point.vertex {
            return Ok(vertex);
        }

        let len = self.vertices.len();
        let vertex = u32::try_from(len).map_err(|_| InvariantError::VertexOverflow(len))?;
        point.vertex = Some(vertex);
        self.vertices.push(point.position);
        self.interior.push(false);
        self.adjacency.push_vertex();
        Ok(vertex)
    }
}

/// Triangulates every cell of a lattice.
///
/// Cells are visited in x-major, y-minor order, so vertex numbering is a pure
/// function of the grid.
#[derive(Debug, Default)]
pub struct TriangulateLattice;

impl TriangulateLattice {
    /// Creates a new `TriangulateLattice` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the triangulation, assigning vertex indices in `lattice`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] if the lattice is malformed.
    pub fn execute(&self, lattice: &mut Lattice) -> Result<Triangulation> {
        let mut triangulation = Triangulation::new();
        for i in 0..lattice.cells().len() {
            let cell = lattice.cells()[i];
            triangulation.triangulate_cell(lattice, &cell)?;
        }
        tracing::trace!(
            vertices = triangulation.vertex_count(),
            triangles = triangulation.triangles.len(),
            "triangulated lattice"
        );
        Ok(triangulation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::lattice::BuildLattice;
    use std::collections::HashSet;

    fn triangulate(grid: &Grid) -> (Lattice, Triangulation) {
        let mut lattice = BuildLattice::new(1.0).execute(grid).unwrap();
        let triangulation = TriangulateLattice::new().execute(&mut lattice).unwrap();
        (lattice, triangulation)
    }

    #[test]
    fn empty_grid_emits_nothing() {
        let (_, t) = triangulate(&Grid::new(4, 4));
        assert!(t.vertices.is_empty());
        assert!(t.triangles.is_empty());
    }

    #[test]
    fn full_cell_is_a_quad_with_interior_corners() {
        let (_, t) = triangulate(&Grid::filled(2, 2, true));
        assert_eq!(t.vertex_count(), 4);
        assert_eq!(t.triangles.len(), 2);
        assert!((0..4).all(|v| t.is_interior(v)));
    }

    #[test]
    fn fan_order_follows_case_table() {
        // configuration 3: cR, BR, BL, cL
        let grid = Grid::from_cells(&[[1, 0], [1, 0]]).unwrap();
        let (_, t) = triangulate(&grid);
        assert_eq!(t.triangles, vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]);
        assert!(!t.is_interior(0));
    }

    #[test]
    fn triangle_counts_per_case() {
        // one cell per case: arity n emits n - 2 triangles
        for code in 0..16u8 {
            let grid = Grid::from_cells(&[
                [i32::from(code & 1), i32::from(code & 8 != 0)],
                [i32::from(code & 2 != 0), i32::from(code & 4 != 0)],
            ])
            .unwrap();
            let (lattice, t) = triangulate(&grid);
            assert_eq!(lattice.cells()[0].configuration, code);
            let n = case_points(code).unwrap().len();
            assert_eq!(t.triangles.len(), n.saturating_sub(2), "case {code}");
            assert_eq!(t.vertex_count(), n, "case {code}");
        }
    }

    #[test]
    fn shared_midpoints_resolve_to_one_vertex() {
        let grid = Grid::from_ascii(
            "
            .....
            .###.
            .#.#.
            .###.
            .....
            ",
        );
        let (lattice, t) = triangulate(&grid);

        // no two vertices share a position
        let mut seen = HashSet::new();
        for p in &t.vertices {
            let key = ((p.x * 4.0).round() as i64, (p.z * 4.0).round() as i64);
            assert!(seen.insert(key), "duplicate vertex at {p:?}");
        }

        // both cells straddling an edge see the same vertex index
        for x in 0..lattice.cell_columns() - 1 {
            for y in 0..lattice.cell_rows() {
                let a = lattice.cell(x, y).unwrap();
                let b = lattice.cell(x + 1, y).unwrap();
                let va = lattice.point(a.point(CellPoint::CenterRight)).unwrap().vertex;
                let vb = lattice.point(b.point(CellPoint::CenterLeft)).unwrap().vertex;
                assert_eq!(va, vb);
            }
        }
    }

    #[test]
    fn adjacency_lists_every_triangle_three_times() {
        let grid = Grid::from_ascii("##..\n#..#\n.###\n");
        let (_, t) = triangulate(&grid);
        let total: usize = (0..t.vertex_count())
            .map(|v| t.adjacency.triangles_of(u32::try_from(v).unwrap()).unwrap().len())
            .sum();
        assert_eq!(total, t.triangles.len() * 3);
    }
}
