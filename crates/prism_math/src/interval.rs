/// A closed range of ray parameters or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if the interval contains no values (min > max).
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Narrows this interval to its overlap with `[lo, hi]`.
    ///
    /// Uses `f32::max` / `f32::min`, which return the non-NaN operand, so a
    /// NaN bound leaves the corresponding end untouched.
    pub fn narrow(&self, lo: f32, hi: f32) -> Interval {
        Interval::new(self.min.max(lo), self.max.min(hi))
    }

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// The 8-bit channel range used when quantizing colors.
    pub const CHANNEL: Interval = Interval { min: 0.0, max: 255.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::CHANNEL;

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(128.0), 128.0);
        assert_eq!(interval.clamp(300.0), 255.0);
    }

    #[test]
    fn test_interval_narrow() {
        let narrowed = Interval::UNIVERSE.narrow(1.0, 4.0).narrow(2.0, 6.0);
        assert_eq!(narrowed, Interval::new(2.0, 4.0));
        assert!(!narrowed.is_empty());

        let disjoint = narrowed.narrow(5.0, 6.0);
        assert!(disjoint.is_empty());
    }

    #[test]
    fn test_interval_narrow_ignores_nan() {
        let interval = Interval::new(1.0, 3.0).narrow(f32::NAN, f32::NAN);
        assert_eq!(interval, Interval::new(1.0, 3.0));
    }
}
