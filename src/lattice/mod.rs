mod cell;
mod point;

pub use cell::{configuration, Cell, CellPoint, EdgeSide};
pub use point::{LatticePoint, PointId, PointKind};

use slotmap::SlotMap;

use crate::error::{InvariantError, Result};
use crate::grid::Grid;
use crate::math::{Point3, Vector3};

/// Arena owning every control point and edge midpoint of one generation pass,
/// plus the cells built over them.
///
/// Midpoints are stored once per physical edge. The horizontal edge between
/// control points `(x, y)` and `(x + 1, y)` is the "right" point of `(x, y)`;
/// the vertical edge between `(x, y)` and `(x, y + 1)` is its "above" point.
/// Neighbouring cells therefore resolve a shared edge to the same [`PointId`].
#[derive(Debug, Default)]
pub struct Lattice {
    points: SlotMap<PointId, LatticePoint>,
    /// Control point counts along X and Y (the grid size).
    width: usize,
    height: usize,
    controls: Vec<PointId>,
    right: Vec<PointId>,
    above: Vec<PointId>,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Number of cells along X.
    #[must_use]
    pub fn cell_columns(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Number of cells along Y.
    #[must_use]
    pub fn cell_rows(&self) -> usize {
        self.height.saturating_sub(1)
    }

    /// All cells, in x-major, y-minor order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell whose bottom-left control point is `(x, y)`.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.cell_columns() || y >= self.cell_rows() {
            return None;
        }
        self.cells.get(x * self.cell_rows() + y)
    }

    /// Number of points (controls and midpoints) in the arena.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the control point at grid coordinates `(x, y)`.
    #[must_use]
    pub fn control(&self, x: usize, y: usize) -> Option<PointId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.controls.get(x * self.height + y).copied()
    }

    /// Returns the midpoint on `side` of cell `(cell_x, cell_y)`.
    ///
    /// Top and bottom sides map onto "right" points, left and right sides onto
    /// "above" points, so the two cells straddling an edge get the same id.
    #[must_use]
    pub fn edge_point(&self, cell_x: usize, cell_y: usize, side: EdgeSide) -> Option<PointId> {
        match side {
            EdgeSide::Bottom => self.right_of(cell_x, cell_y),
            EdgeSide::Top => self.right_of(cell_x, cell_y + 1),
            EdgeSide::Left => self.above_of(cell_x, cell_y),
            EdgeSide::Right => self.above_of(cell_x + 1, cell_y),
        }
    }

    /// Returns a reference to a lattice point.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::UnknownPoint`] if the id is not in the arena.
    pub fn point(&self, id: PointId) -> std::result::Result<&LatticePoint, InvariantError> {
        self.points.get(id).ok_or(InvariantError::UnknownPoint)
    }

    /// Returns a mutable reference to a lattice point.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::UnknownPoint`] if the id is not in the arena.
    pub fn point_mut(&mut self, id: PointId) -> std::result::Result<&mut LatticePoint, InvariantError> {
        self.points.get_mut(id).ok_or(InvariantError::UnknownPoint)
    }

    fn right_of(&self, x: usize, y: usize) -> Option<PointId> {
        if x + 1 >= self.width || y >= self.height {
            return None;
        }
        self.right.get(x * self.height + y).copied()
    }

    fn above_of(&self, x: usize, y: usize) -> Option<PointId> {
        if x >= self.width || y + 1 >= self.height {
            return None;
        }
        self.above.get(x * (self.height - 1) + y).copied()
    }
}

/// Builds the dual lattice of a grid.
///
/// A `W×H` grid yields `W×H` control points centred on the origin and
/// `(W-1)×(H-1)` cells. Grids narrower than 2 in either direction produce a
/// lattice with no cells.
pub struct BuildLattice {
    cell_size: f64,
}

impl BuildLattice {
    /// Creates a new `BuildLattice` operation.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self { cell_size }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] if a cell cannot resolve one of its points,
    /// which indicates a bug in the edge canonicalisation.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, grid: &Grid) -> Result<Lattice> {
        let (width, height) = (grid.width(), grid.height());
        let mut lattice = Lattice {
            width,
            height,
            ..Lattice::default()
        };
        if width < 2 || height < 2 {
            return Ok(lattice);
        }

        let size = self.cell_size;
        let half_x = width as f64 / 2.0;
        let half_y = height as f64 / 2.0;
        let to_right = Vector3::new(size / 2.0, 0.0, 0.0);
        let to_above = Vector3::new(0.0, 0.0, size / 2.0);

        lattice.controls.reserve(width * height);
        lattice.right.reserve((width - 1) * height);
        lattice.above.reserve(width * (height - 1));

        for x in 0..width {
            for y in 0..height {
                let position = Point3::new(
                    (x as f64 - half_x) * size,
                    0.0,
                    (y as f64 - half_y) * size,
                );
                let active = grid.is_filled(x, y);
                let id = lattice.points.insert(LatticePoint::control(position, active));
                lattice.controls.push(id);

                if x + 1 < width {
                    let id = lattice.points.insert(LatticePoint::mid(position + to_right));
                    lattice.right.push(id);
                }
                if y + 1 < height {
                    let id = lattice.points.insert(LatticePoint::mid(position + to_above));
                    lattice.above.push(id);
                }
            }
        }

        let mut cells = Vec::with_capacity((width - 1) * (height - 1));
        for x in 0..width - 1 {
            for y in 0..height - 1 {
                cells.push(build_cell(&lattice, x, y)?);
            }
        }
        lattice.cells = cells;

        Ok(lattice)
    }
}

fn build_cell(lattice: &Lattice, x: usize, y: usize) -> std::result::Result<Cell, InvariantError> {
    let control = |cx, cy| lattice.control(cx, cy).ok_or(InvariantError::UnknownPoint);
    let edge = |side| lattice.edge_point(x, y, side).ok_or(InvariantError::UnknownPoint);

    let corners = [
        control(x, y + 1)?,
        control(x + 1, y + 1)?,
        control(x + 1, y)?,
        control(x, y)?,
    ];
    let edges = [
        edge(EdgeSide::Top)?,
        edge(EdgeSide::Right)?,
        edge(EdgeSide::Bottom)?,
        edge(EdgeSide::Left)?,
    ];

    let active = |i: usize| lattice.point(corners[i]).map(LatticePoint::is_active);

    Ok(Cell {
        x,
        y,
        corners,
        edges,
        configuration: configuration(active(0)?, active(1)?, active(2)?, active(3)?),
    })
}
