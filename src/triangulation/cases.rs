use crate::error::InvariantError;
use crate::lattice::CellPoint::{
    self, BottomLeft as BL, BottomRight as BR, CenterBottom as CB, CenterLeft as CL,
    CenterRight as CR, CenterTop as CT, TopLeft as TL, TopRight as TR,
};

/// Marching-squares case table, indexed by cell configuration.
///
/// Each entry is a convex polygon fanned from its first point. The saddle
/// cases 5 and 10 are always joined into a single hexagon.
const CASES: [&[CellPoint]; 16] = [
    &[],
    &[CL, CB, BL],
    &[BR, CB, CR],
    &[CR, BR, BL, CL],
    &[TR, CR, CT],
    &[CT, TR, CR, CB, BL, CL],
    &[CT, TR, BR, CB],
    &[CT, TR, BR, BL, CL],
    &[TL, CT, CL],
    &[TL, CT, CB, BL],
    &[TL, CT, CR, BR, CB, CL],
    &[TL, CT, CR, BR, BL],
    &[TL, TR, CR, CL],
    &[TL, TR, CR, CB, BL],
    &[TL, TR, BR, CB, CL],
    &[TL, TR, BR, BL],
];

/// Configuration with every corner active.
pub const FULL: u8 = 15;

/// Returns the polygon emitted for a configuration.
///
/// # Errors
///
/// Returns [`InvariantError::InvalidConfiguration`] for codes above 15.
pub fn case_points(configuration: u8) -> Result<&'static [CellPoint], InvariantError> {
    CASES
        .get(usize::from(configuration))
        .copied()
        .ok_or(InvariantError::InvalidConfiguration(configuration))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn is_corner(p: CellPoint) -> bool {
        matches!(p, TL | TR | BR | BL)
    }

    fn corner_bit(p: CellPoint) -> u8 {
        match p {
            TL => 8,
            TR => 4,
            BR => 2,
            BL => 1,
            _ => 0,
        }
    }

    #[test]
    fn corners_in_each_case_match_its_code() {
        for code in 0..16u8 {
            let bits: u8 = case_points(code).unwrap().iter().map(|&p| corner_bit(p)).sum();
            assert_eq!(bits, code, "case {code} covers the wrong corners");
        }
    }

    #[test]
    fn point_counts_follow_active_corner_count() {
        for code in 0..16u8 {
            let points = case_points(code).unwrap();
            let expected = match code.count_ones() {
                0 => 0,
                1 => 3,
                2 if code == 5 || code == 10 => 6,
                2 => 4,
                3 => 5,
                _ => 4,
            };
            assert_eq!(points.len(), expected, "case {code}");
            let mids = points.iter().filter(|&&p| !is_corner(p)).count();
            if code != 0 && code != FULL {
                assert!(mids >= 2, "case {code} should cut through midpoints");
            }
        }
    }

    #[test]
    fn out_of_range_code_is_an_invariant_error() {
        assert_eq!(case_points(16), Err(InvariantError::InvalidConfiguration(16)));
    }
}
