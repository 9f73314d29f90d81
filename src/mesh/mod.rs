use crate::error::{InvariantError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::triangulation::Triangulation;

/// An indexed triangle mesh ready to hand to a renderer or physics backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, parallel to `vertices` once computed.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the ground surface out of a triangulation and computes its normals.
    #[must_use]
    pub fn from_triangulation(triangulation: &Triangulation) -> Self {
        let mut mesh = Self {
            vertices: triangulation.vertices.clone(),
            normals: Vec::new(),
            indices: triangulation.triangles.iter().map(|t| t.indices()).collect(),
        };
        mesh.recalculate_normals();
        mesh
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a vertex and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::VertexOverflow`] past `u32::MAX` vertices.
    pub fn push_vertex(&mut self, position: Point3) -> Result<u32> {
        let len = self.vertices.len();
        let index = u32::try_from(len).map_err(|_| InvariantError::VertexOverflow(len))?;
        self.vertices.push(position);
        Ok(index)
    }

    /// Recomputes vertex normals as the normalised, area-weighted sum of the
    /// normals of the triangles around each vertex.
    ///
    /// Vertices touched only by degenerate triangles (or by none) get a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];

        for tri in &self.indices {
            let [a, b, c] = tri.map(|i| i as usize);
            let (Some(pa), Some(pb), Some(pc)) =
                (self.vertices.get(a), self.vertices.get(b), self.vertices.get(c))
            else {
                continue;
            };
            let face = (pb - pa).cross(&(pc - pa));
            for i in [a, b, c] {
                normals[i] += face;
            }
        }

        for n in &mut normals {
            let len = n.norm();
            *n = if len < TOLERANCE { Vector3::zeros() } else { *n / len };
        }
        self.normals = normals;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn flat_quad_normals_point_up() {
        let mut mesh = MeshBuffers {
            vertices: vec![p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0)],
            normals: Vec::new(),
            indices: vec![[0, 1, 2], [0, 2, 3]],
        };
        mesh.recalculate_normals();
        assert_eq!(mesh.normals.len(), 4);
        for n in &mesh.normals {
            assert_abs_diff_eq!(*n, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn unused_vertex_gets_zero_normal() {
        let mut mesh = MeshBuffers::new();
        for v in [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(5.0, 5.0, 5.0)] {
            mesh.push_vertex(v).unwrap();
        }
        mesh.indices.push([0, 1, 2]);
        mesh.recalculate_normals();
        assert_abs_diff_eq!(mesh.normals[0], Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(mesh.normals[3], Vector3::zeros());
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
    }
}
