/// An ordered triple of output vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [u32; 3]);

impl Triangle {
    /// Creates a triangle from three vertex indices.
    #[must_use]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    /// The vertex indices in winding order.
    #[must_use]
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }

    /// Returns `true` if `vertex` is one of the triangle's corners.
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.0.contains(&vertex)
    }
}
