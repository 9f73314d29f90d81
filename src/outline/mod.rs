use crate::error::Result;
use crate::triangulation::{AdjacencyIndex, Triangulation};

/// A closed loop of vertex indices along a solid/void boundary.
///
/// The first index is repeated as the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    indices: Vec<u32>,
}

impl Outline {
    /// Wraps an index sequence.
    #[must_use]
    pub fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// The vertex indices, closing repeat included.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of indices, closing repeat included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the outline holds no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` if the loop ends where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.indices.len() >= 2 && self.indices.first() == self.indices.last()
    }

    /// Consecutive index pairs `(outline[i], outline[i + 1])`.
    pub fn segments(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.indices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.indices.len().saturating_sub(1)
    }
}

/// Extracts every closed boundary loop from a triangulation.
///
/// An edge is on the boundary when exactly one triangle contains it. Loops
/// are followed iteratively, so their length is not bounded by stack depth.
pub struct TraceOutlines<'a> {
    triangulation: &'a Triangulation,
}

impl<'a> TraceOutlines<'a> {
    /// Creates a new `TraceOutlines` operation.
    #[must_use]
    pub fn new(triangulation: &'a Triangulation) -> Self {
        Self { triangulation }
    }

    /// Executes the trace, returning the outlines in seed-vertex order.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`](crate::error::InvariantError) if a vertex
    /// has no adjacency entry.
    pub fn execute(&self) -> Result<Vec<Outline>> {
        let count = self.triangulation.vertex_count();
        let mut tracer = Tracer {
            adjacency: &self.triangulation.adjacency,
            visited: (0..count)
                .map(|v| u32::try_from(v).is_ok_and(|v| self.triangulation.is_interior(v)))
                .collect(),
        };

        let mut outlines = Vec::new();
        for (i, seed) in (0..count).zip(0u32..) {
            if tracer.visited[i] {
                continue;
            }
            let Some(next) = tracer.find_boundary_neighbor(seed)? else {
                tracer.visited[i] = true;
                continue;
            };

            tracer.visited[i] = true;
            let outline = tracer.follow(seed, next)?;
            tracing::trace!(seed, len = outline.len(), "traced outline");
            outlines.push(outline);
        }

        Ok(outlines)
    }
}

struct Tracer<'a> {
    adjacency: &'a AdjacencyIndex,
    visited: Vec<bool>,
}

impl Tracer<'_> {
    /// Walks from `seed` through `next` until no unvisited boundary neighbour
    /// remains, then closes the loop on `seed`.
    fn follow(&mut self, seed: u32, next: u32) -> Result<Outline> {
        let mut indices = vec![seed];
        let mut current = next;
        loop {
            indices.push(current);
            self.visit(current);
            match self.find_boundary_neighbor(current)? {
                Some(n) => current = n,
                None => break,
            }
        }
        indices.push(seed);
        Ok(Outline::new(indices))
    }

    /// First unvisited vertex sharing a boundary edge with `vertex`.
    fn find_boundary_neighbor(&self, vertex: u32) -> Result<Option<u32>> {
        for triangle in self.adjacency.triangles_of(vertex)? {
            for other in triangle.indices() {
                if other != vertex
                    && !self.is_visited(other)
                    && self.adjacency.is_boundary_edge(vertex, other)?
                {
                    return Ok(Some(other));
                }
            }
        }
        Ok(None)
    }

    fn is_visited(&self, vertex: u32) -> bool {
        self.visited.get(vertex as usize).copied().unwrap_or(false)
    }

    fn visit(&mut self, vertex: u32) {
        if let Some(v) = self.visited.get_mut(vertex as usize) {
            *v = true;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::lattice::BuildLattice;
    use crate::triangulation::TriangulateLattice;
    use approx::abs_diff_eq;

    fn trace(grid: &Grid) -> (Triangulation, Vec<Outline>) {
        let mut lattice = BuildLattice::new(1.0).execute(grid).unwrap();
        let triangulation = TriangulateLattice::new().execute(&mut lattice).unwrap();
        let outlines = TraceOutlines::new(&triangulation).execute().unwrap();
        (triangulation, outlines)
    }

    fn assert_true_boundary(t: &Triangulation, outlines: &[Outline]) {
        for outline in outlines {
            assert!(outline.is_closed(), "outline {outline:?} is open");
            for (a, b) in outline.segments() {
                assert!(
                    t.adjacency.is_boundary_edge(a, b).unwrap(),
                    "{a}-{b} is not a boundary edge"
                );
            }
        }
    }

    #[test]
    fn single_solid_cell_traces_one_diamond() {
        let grid = Grid::from_cells(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
        let (t, outlines) = trace(&grid);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].len(), 5);
        assert_eq!(outlines[0].segment_count(), 4);
        assert_true_boundary(&t, &outlines);

        // the solid centre itself is enclosed, not on the loop
        let centre = t
            .vertices
            .iter()
            .position(|p| abs_diff_eq!(p.x, -0.5) && abs_diff_eq!(p.z, -0.5))
            .unwrap();
        let centre = u32::try_from(centre).unwrap();
        assert!(!outlines[0].indices().contains(&centre));
    }

    #[test]
    fn fully_solid_grid_has_no_outlines() {
        let (t, outlines) = trace(&Grid::filled(5, 4, true));
        assert!(!t.triangles.is_empty());
        assert!(outlines.is_empty());
    }

    #[test]
    fn single_full_cell_has_no_outlines() {
        let (t, outlines) = trace(&Grid::filled(2, 2, true));
        assert_eq!(t.triangles.len(), 2);
        assert!(outlines.is_empty());
    }

    #[test]
    fn empty_grid_has_no_outlines() {
        let (_, outlines) = trace(&Grid::new(6, 6));
        assert!(outlines.is_empty());
    }

    #[test]
    fn solid_block_traces_an_octagon_of_midpoints() {
        let grid = Grid::from_ascii(
            "
            ....
            .##.
            .##.
            ....
            ",
        );
        let (t, outlines) = trace(&grid);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].len(), 9);
        assert_true_boundary(&t, &outlines);
    }

    #[test]
    fn ring_traces_inner_and_outer_loops() {
        let grid = Grid::from_ascii(
            "
            .......
            .#####.
            .#...#.
            .#...#.
            .#...#.
            .#####.
            .......
            ",
        );
        let (t, outlines) = trace(&grid);
        assert_eq!(outlines.len(), 2);
        assert_true_boundary(&t, &outlines);

        let mut on_loops: Vec<u32> = outlines
            .iter()
            .flat_map(|o| o.indices()[1..].iter().copied())
            .collect();
        let total = on_loops.len();
        on_loops.sort_unstable();
        on_loops.dedup();
        assert_eq!(on_loops.len(), total, "a vertex appears on two loops");
    }

    #[test]
    fn separate_islands_trace_separately() {
        let grid = Grid::from_ascii(
            "
            .......
            .#...#.
            .......
            ",
        );
        let (t, outlines) = trace(&grid);
        assert_eq!(outlines.len(), 2);
        assert!(outlines.iter().all(|o| o.len() == 5));
        assert_true_boundary(&t, &outlines);
    }

    #[test]
    fn outline_segments_pair_consecutive_indices() {
        let outline = Outline::new(vec![3, 7, 9, 3]);
        assert!(outline.is_closed());
        assert_eq!(outline.segments().collect::<Vec<_>>(), vec![(3, 7), (7, 9), (9, 3)]);
        assert!(!Outline::new(vec![1]).is_closed());
    }
}
