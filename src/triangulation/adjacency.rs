use crate::error::InvariantError;

use super::Triangle;

/// Per-vertex list of the triangles that reference it.
///
/// Slots are dense: vertex `v` owns slot `v`, added when the vertex is
/// emitted. A triangle is listed once under each of its three corners.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    slots: Vec<Vec<Triangle>>,
}

impl AdjacencyIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Opens an empty slot for the next vertex index.
    pub fn push_vertex(&mut self) {
        self.slots.push(Vec::new());
    }

    /// Records `triangle` under each of its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::UnregisteredVertex`] if a corner has no slot.
    pub fn register(&mut self, triangle: Triangle) -> Result<(), InvariantError> {
        for v in triangle.indices() {
            self.triangles_of(v)?;
        }
        for v in triangle.indices() {
            self.slot_mut(v)?.push(triangle);
        }
        Ok(())
    }

    /// Triangles touching `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::UnregisteredVertex`] if the vertex was never emitted.
    pub fn triangles_of(&self, vertex: u32) -> Result<&[Triangle], InvariantError> {
        usize::try_from(vertex)
            .ok()
            .and_then(|i| self.slots.get(i))
            .map(Vec::as_slice)
            .ok_or(InvariantError::UnregisteredVertex(vertex))
    }

    /// Returns `true` if exactly one triangle contains both `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::UnregisteredVertex`] if `a` was never emitted.
    pub fn is_boundary_edge(&self, a: u32, b: u32) -> Result<bool, InvariantError> {
        let mut shared = 0;
        for triangle in self.triangles_of(a)? {
            if triangle.contains(b) {
                shared += 1;
                if shared > 1 {
                    break;
                }
            }
        }
        Ok(shared == 1)
    }

    fn slot_mut(&mut self, vertex: u32) -> Result<&mut Vec<Triangle>, InvariantError> {
        usize::try_from(vertex)
            .ok()
            .and_then(|i| self.slots.get_mut(i))
            .ok_or(InvariantError::UnregisteredVertex(vertex))
    }
}
