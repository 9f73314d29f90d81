use crate::error::ParamsError;

/// Parameters controlling map generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// World-space size of one grid cell.
    pub cell_size: f64,
    /// Wrap the grid in a ring of filled cells before meshing, so the open
    /// area is walled on every outer side.
    pub use_border: bool,
    /// How far walls extend below the ground surface.
    pub wall_height: f64,
    /// Reverse the grid's `y` order before meshing, for sources authored
    /// with the opposite vertical convention.
    pub flip: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            use_border: false,
            wall_height: 5.0,
            flip: false,
        }
    }
}

impl GenerationParams {
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    #[must_use]
    pub fn with_border(mut self, use_border: bool) -> Self {
        self.use_border = use_border;
        self
    }

    #[must_use]
    pub fn with_wall_height(mut self, wall_height: f64) -> Self {
        self.wall_height = wall_height;
        self
    }

    #[must_use]
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Checks that sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidCellSize`] unless the cell size is finite and
    /// positive, and [`ParamsError::InvalidWallHeight`] unless the wall height is
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ParamsError::InvalidCellSize(self.cell_size));
        }
        if !self.wall_height.is_finite() || self.wall_height < 0.0 {
            return Err(ParamsError::InvalidWallHeight(self.wall_height));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GenerationParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_sizes() {
        let base = GenerationParams::default();
        assert_eq!(
            base.with_cell_size(-1.0).validate(),
            Err(ParamsError::InvalidCellSize(-1.0))
        );
        assert!(base.with_cell_size(f64::NAN).validate().is_err());
        assert_eq!(
            base.with_wall_height(f64::INFINITY).validate(),
            Err(ParamsError::InvalidWallHeight(f64::INFINITY))
        );
        assert_eq!(base.with_wall_height(0.0).validate(), Ok(()));
    }
}
