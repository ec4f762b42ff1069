/// Dot product of two equal-length slices.
///
/// Lengths are a caller invariant; every public entry point validates shapes
/// before reaching this.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Sum of squared componentwise differences between `actual` and `expected`.
pub fn squared_error(actual: &[f64], expected: &[f64]) -> f64 {
    debug_assert_eq!(actual.len(), expected.len());
    actual
        .iter()
        .zip(expected.iter())
        .map(|(a, e)| (a - e).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        assert_eq!(dot(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn dot_matches_manual_expansion() {
        let value = dot(&[0.5, -2.0, 3.0], &[4.0, 1.0, 2.0]);
        assert!((value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn squared_error_sums_component_differences() {
        let value = squared_error(&[1.0, 0.0], &[0.0, 2.0]);
        assert!((value - 5.0).abs() < 1e-12);
    }

    #[test]
    fn squared_error_of_identical_vectors_is_zero() {
        assert_eq!(squared_error(&[0.25, 0.75], &[0.25, 0.75]), 0.0);
    }
}
