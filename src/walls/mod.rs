use crate::error::{InvariantError, Result};
use crate::math::{up, Point3};
use crate::mesh::MeshBuffers;
use crate::outline::Outline;

/// Extrudes outlines downward into vertical wall strips.
///
/// Each outline segment becomes its own quad (4 vertices, 2 triangles), so
/// no vertex is shared between segments and every segment shades flat.
/// Triangles are wound to be seen from inside the open area.
pub struct ExtrudeWalls {
    height: f64,
}

impl ExtrudeWalls {
    /// Creates a new `ExtrudeWalls` operation.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Executes the extrusion over `vertices` (the ground vertex table the
    /// outlines index into).
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::OutlineIndexOutOfRange`] if an outline refers
    /// to a vertex that does not exist.
    pub fn execute(&self, outlines: &[Outline], vertices: &[Point3]) -> Result<MeshBuffers> {
        let depth = up() * self.height;
        let segments: usize = outlines.iter().map(Outline::segment_count).sum();
        let mut mesh = MeshBuffers {
            vertices: Vec::with_capacity(segments * 4),
            normals: Vec::new(),
            indices: Vec::with_capacity(segments * 2),
        };

        for outline in outlines {
            for (a, b) in outline.segments() {
                let top_left = position(vertices, a)?;
                let top_right = position(vertices, b)?;

                let tl = mesh.push_vertex(top_left)?;
                let tr = mesh.push_vertex(top_right)?;
                let bl = mesh.push_vertex(top_left - depth)?;
                let br = mesh.push_vertex(top_right - depth)?;

                mesh.indices.push([tl, bl, br]);
                mesh.indices.push([br, tr, tl]);
            }
        }

        mesh.recalculate_normals();
        Ok(mesh)
    }
}

fn position(vertices: &[Point3], index: u32) -> Result<Point3> {
    vertices.get(index as usize).copied().ok_or_else(|| {
        InvariantError::OutlineIndexOutOfRange {
            index,
            vertex_count: vertices.len(),
        }
        .into()
    })
}
