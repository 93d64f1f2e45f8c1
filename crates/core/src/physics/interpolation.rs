//! Piecewise-linear interpolation over small fixed tables
//!
//! Outside the tabulated range the boundary value is returned (flat
//! extrapolation). This is a modelling simplification, not a physical
//! extrapolation, so callers should keep inputs inside the table.
//!
//! # Example
//!
//! ```
//! use fir_lines_core::physics::LinearTable;
//!
//! let table = LinearTable::new([0.0, 1.0, 2.0], [0.0, 10.0, 40.0]);
//! assert_eq!(table.eval(0.5), 5.0);
//! assert_eq!(table.eval(1.5), 25.0);
//! assert_eq!(table.eval(-3.0), 0.0);
//! assert_eq!(table.eval(9.0), 40.0);
//! ```

/// A table of `N` anchor points with strictly increasing abscissae
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTable<const N: usize> {
    xs: [f64; N],
    ys: [f64; N],
}

impl<const N: usize> LinearTable<N> {
    /// Create a table from anchor points.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0` or the abscissae are not strictly increasing.
    pub const fn new(xs: [f64; N], ys: [f64; N]) -> Self {
        assert!(N > 0, "LinearTable needs at least one anchor point");
        let mut i = 1;
        while i < N {
            assert!(xs[i] > xs[i - 1], "LinearTable abscissae must be increasing");
            i += 1;
        }
        Self { xs, ys }
    }

    /// Tabulated range `(min, max)`
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[N - 1])
    }

    /// Whether `x` lies inside the tabulated range
    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        (lo..=hi).contains(&x)
    }

    /// Interpolate at `x`, clamping to the boundary values outside the table.
    /// NaN input gives NaN.
    pub fn eval(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[N - 1] {
            return self.ys[N - 1];
        }

        // First anchor strictly above x; guaranteed to exist in 1..N here
        let upper = self.xs.partition_point(|&anchor| anchor <= x);
        let lower = upper - 1;

        let (x0, x1) = (self.xs[lower], self.xs[upper]);
        let (y0, y1) = (self.ys[lower], self.ys[upper]);
        let slope = (y1 - y0) / (x1 - x0);
        slope * (x - x0) + y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TABLE: LinearTable<3> = LinearTable::new([-3.5, -2.5, -1.5], [0.1, 0.7, 0.9]);

    #[test]
    fn test_anchor_points_are_exact() {
        assert_eq!(TABLE.eval(-3.5), 0.1);
        assert_eq!(TABLE.eval(-2.5), 0.7);
        assert_eq!(TABLE.eval(-1.5), 0.9);
    }

    #[test]
    fn test_midpoints() {
        assert_relative_eq!(TABLE.eval(-3.0), 0.4, max_relative = 1e-12);
        assert_relative_eq!(TABLE.eval(-2.0), 0.8, max_relative = 1e-12);
    }

    #[test]
    fn test_flat_extrapolation() {
        assert_eq!(TABLE.eval(-5.0), TABLE.eval(-3.5));
        assert_eq!(TABLE.eval(0.0), TABLE.eval(-1.5));
        assert_eq!(TABLE.eval(f64::NEG_INFINITY), 0.1);
        assert_eq!(TABLE.eval(f64::INFINITY), 0.9);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(TABLE.eval(f64::NAN).is_nan());
    }

    #[test]
    fn test_domain() {
        assert_eq!(TABLE.domain(), (-3.5, -1.5));
        assert!(TABLE.contains(-2.0));
        assert!(!TABLE.contains(-4.0));
    }

    #[test]
    fn test_single_point_table_is_constant() {
        let table = LinearTable::new([1.0], [42.0]);
        assert_eq!(table.eval(-10.0), 42.0);
        assert_eq!(table.eval(10.0), 42.0);
    }
}
