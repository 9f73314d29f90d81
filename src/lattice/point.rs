use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a point in the lattice arena.
    pub struct PointId;
}

/// What a lattice point stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// A grid cell sample carrying the binary state.
    Control { active: bool },
    /// The midpoint of an edge between two control points.
    Mid,
}

/// A corner or edge point of the dual lattice.
#[derive(Debug, Clone)]
pub struct LatticePoint {
    /// World-space position.
    pub position: Point3,
    /// Control point or edge midpoint.
    pub kind: PointKind,
    /// Output vertex index, assigned the first time a triangle touches the point.
    pub vertex: Option<u32>,
}

impl LatticePoint {
    /// Creates a control point.
    #[must_use]
    pub fn control(position: Point3, active: bool) -> Self {
        Self {
            position,
            kind: PointKind::Control { active },
            vertex: None,
        }
    }

    /// Creates an edge midpoint.
    #[must_use]
    pub fn mid(position: Point3) -> Self {
        Self {
            position,
            kind: PointKind::Mid,
            vertex: None,
        }
    }

    /// Returns `true` for an active control point.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.kind, PointKind::Control { active: true })
    }
}
