mod params;

pub use params::GenerationParams;

use std::borrow::Cow;

use crate::error::Result;
use crate::grid::Grid;
use crate::lattice::BuildLattice;
use crate::mesh::MeshBuffers;
use crate::outline::{Outline, TraceOutlines};
use crate::triangulation::TriangulateLattice;
use crate::walls::ExtrudeWalls;

/// The result of one generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedMap {
    /// Triangulated solid area, lying in the XZ plane.
    pub ground: MeshBuffers,
    /// Vertical strips hanging below every outline.
    pub walls: MeshBuffers,
    /// Boundary loops, as indices into `ground.vertices`.
    pub outlines: Vec<Outline>,
}

/// Builds the ground and wall meshes of an occupancy grid.
///
/// Every call starts from scratch: the lattice, vertex list, adjacency and
/// outlines are owned by the call and dropped when it returns, so the same
/// input always yields identical buffers.
pub struct GenerateMap {
    params: GenerationParams,
}

impl GenerateMap {
    /// Creates a new `GenerateMap` operation.
    #[must_use]
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    /// Executes the generation.
    ///
    /// Grids smaller than 2×2 (after flipping and padding) produce empty meshes.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`](crate::error::ParamsError) for an invalid cell
    /// size or wall height, or an [`InvariantError`](crate::error::InvariantError)
    /// if triangulation or tracing finds an inconsistency.
    pub fn execute(&self, grid: &Grid) -> Result<GeneratedMap> {
        self.params.validate()?;

        let _span = tracing::debug_span!(
            "generate_map",
            width = grid.width(),
            height = grid.height()
        )
        .entered();

        let mut grid = Cow::Borrowed(grid);
        if self.params.flip {
            grid = Cow::Owned(grid.flipped());
        }
        if self.params.use_border {
            grid = Cow::Owned(grid.with_border());
        }

        if grid.width() < 2 || grid.height() < 2 {
            tracing::debug!(
                width = grid.width(),
                height = grid.height(),
                "grid too small to mesh, returning empty buffers"
            );
            return Ok(GeneratedMap::default());
        }

        let mut lattice = BuildLattice::new(self.params.cell_size).execute(&grid)?;
        let triangulation = TriangulateLattice::new().execute(&mut lattice)?;
        let ground = MeshBuffers::from_triangulation(&triangulation);
        tracing::debug!(
            vertices = ground.vertices.len(),
            triangles = ground.triangle_count(),
            "built ground mesh"
        );

        let outlines = TraceOutlines::new(&triangulation).execute()?;
        let walls = ExtrudeWalls::new(self.params.wall_height)
            .execute(&outlines, &triangulation.vertices)?;
        tracing::debug!(
            outlines = outlines.len(),
            triangles = walls.triangle_count(),
            "built wall mesh"
        );

        Ok(GeneratedMap {
            ground,
            walls,
            outlines,
        })
    }
}
