use super::PointId;

/// One of the eight candidate points of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPoint {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    CenterTop,
    CenterRight,
    CenterBottom,
    CenterLeft,
}

/// A side of a cell, used to address the midpoint lying on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// One unit of the dual lattice: four control corners and four edge midpoints.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    /// Lattice coordinates of the cell (its bottom-left corner).
    pub x: usize,
    pub y: usize,
    /// Corners in top-left, top-right, bottom-right, bottom-left order.
    pub corners: [PointId; 4],
    /// Edge midpoints in top, right, bottom, left order.
    pub edges: [PointId; 4],
    /// `8·TL + 4·TR + 2·BR + 1·BL` over the corners' active flags.
    pub configuration: u8,
}

impl Cell {
    /// Returns the lattice point playing `role` in this cell.
    #[must_use]
    pub fn point(&self, role: CellPoint) -> PointId {
        match role {
            CellPoint::TopLeft => self.corners[0],
            CellPoint::TopRight => self.corners[1],
            CellPoint::BottomRight => self.corners[2],
            CellPoint::BottomLeft => self.corners[3],
            CellPoint::CenterTop => self.edges[0],
            CellPoint::CenterRight => self.edges[1],
            CellPoint::CenterBottom => self.edges[2],
            CellPoint::CenterLeft => self.edges[3],
        }
    }
}

/// Computes the configuration code from corner states (TL, TR, BR, BL).
#[must_use]
pub fn configuration(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> u8 {
    u8::from(top_left) * 8 + u8::from(top_right) * 4 + u8::from(bottom_right) * 2 + u8::from(bottom_left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_weights() {
        assert_eq!(configuration(false, false, false, false), 0);
        assert_eq!(configuration(true, false, false, false), 8);
        assert_eq!(configuration(false, true, false, false), 4);
        assert_eq!(configuration(false, false, true, false), 2);
        assert_eq!(configuration(false, false, false, true), 1);
        assert_eq!(configuration(true, false, true, false), 10);
        assert_eq!(configuration(true, true, true, true), 15);
    }
}
