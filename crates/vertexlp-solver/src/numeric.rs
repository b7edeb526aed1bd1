use std::cmp::Ordering;

/// Decimal places coordinates and objective values are rounded to
pub const DEFAULT_DECIMALS: u32 = 2;

/// Determinants at or below this magnitude are treated as parallel lines.
///
/// The determinant is taken over rows scaled so their larger coefficient has
/// magnitude 1, so it lies in `[-2, 2]` whatever the size of the
/// coefficients.
pub const DETERMINANT_EPSILON: f64 = 1e-12;

/// Rounding policy shared by intersection and feasibility.
///
/// Every coordinate is rounded right after it is computed, and every
/// comparison rounds both sides first, so a point lying exactly on a
/// boundary compares equal to it regardless of floating-point noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    decimals: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Precision {
    pub fn new(decimals: u32) -> Self {
        // 10^15 is already at the edge of what an f64 mantissa can hold
        Self {
            decimals: decimals.min(15),
        }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Size of one unit in the last kept decimal place
    pub fn step(&self) -> f64 {
        10f64.powi(-(self.decimals as i32))
    }

    /// Round half away from zero to the configured number of decimals
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        let scaled = value * scale;
        if !scaled.is_finite() {
            // Too large to carry any decimals
            return value;
        }
        let rounded = scaled.round() / scale;
        // -0.0 prints as "-0" and sorts before 0.0
        if rounded == 0.0 { 0.0 } else { rounded }
    }

    /// Compare two values after rounding both.
    ///
    /// Rounded values differ by a multiple of [`Precision::step`], so
    /// anything closer than half a step is representation error.
    pub fn compare(&self, lhs: f64, rhs: f64) -> Ordering {
        let diff = self.round(lhs) - self.round(rhs);
        if diff.abs() < self.step() / 2.0 {
            Ordering::Equal
        } else if diff < 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    pub fn approx_eq(&self, lhs: f64, rhs: f64) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_two_decimals() {
        let p = Precision::default();
        assert_eq!(p.round(3.14159), 3.14);
        assert_eq!(p.round(2.675000001), 2.68);
        assert_eq!(p.round(-1.005001), -1.01);
        assert_eq!(p.round(10.0), 10.0);
    }

    #[test]
    fn test_round_large_values() {
        let p = Precision::default();
        assert_eq!(p.round(1e307), 1e307);
        assert_eq!(p.round(-f64::MAX), -f64::MAX);
        assert!(p.round(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_round_clears_negative_zero() {
        let p = Precision::default();
        let r = p.round(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_compare_absorbs_noise() {
        let p = Precision::default();
        // 0.1 + 0.2 = 0.30000000000000004
        assert_eq!(p.compare(0.1 + 0.2, 0.3), Ordering::Equal);
        assert_eq!(p.compare(9.999, 10.0), Ordering::Equal);
        assert_eq!(p.compare(9.99, 10.0), Ordering::Less);
        assert_eq!(p.compare(10.01, 10.0), Ordering::Greater);
    }

    #[test]
    fn test_custom_precision() {
        let p = Precision::new(0);
        assert_eq!(p.round(2.4), 2.0);
        assert_eq!(p.step(), 1.0);
        assert!(p.approx_eq(2.4, 2.0));

        let p = Precision::new(40);
        assert_eq!(p.decimals(), 15);
    }
}
