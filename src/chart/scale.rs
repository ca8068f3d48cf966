/// Power-law scale from a death count to a bubble radius in pixels.
///
/// The domain is `[0, max]` for one dataset; inputs outside it are clamped so
/// every radius lands in `[MIN_RADIUS, MAX_RADIUS]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    domain_max: f64,
}

impl RadiusScale {
    pub const EXPONENT: f64 = 0.2;
    pub const MIN_RADIUS: f32 = 2.0;
    pub const MAX_RADIUS: f32 = 85.0;

    pub fn new(domain_max: f64) -> Self {
        Self {
            domain_max: if domain_max.is_finite() {
                domain_max.max(0.0)
            } else {
                0.0
            },
        }
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    pub fn radius(&self, value: f64) -> f32 {
        let span = self.domain_max.powf(Self::EXPONENT);
        if span <= 0.0 {
            return Self::MIN_RADIUS;
        }

        let t = (value.max(0.0).powf(Self::EXPONENT) / span).clamp(0.0, 1.0);
        let min = f64::from(Self::MIN_RADIUS);
        let max = f64::from(Self::MAX_RADIUS);
        (min * (1.0 - t) + max * t) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_range_bounds() {
        let scale = RadiusScale::new(100.0);
        assert_eq!(scale.radius(0.0), 2.0);
        assert_eq!(scale.radius(100.0), 85.0);
    }

    #[test]
    fn radius_is_monotonic_over_the_domain() {
        let scale = RadiusScale::new(250_000.0);
        let mut previous = scale.radius(0.0);
        for step in 1..=500 {
            let value = step as f64 * 500.0;
            let radius = scale.radius(value);
            assert!(radius >= previous, "radius dropped at {value}");
            previous = radius;
        }
    }

    #[test]
    fn small_counts_grow_fast_then_flatten() {
        let scale = RadiusScale::new(100.0);
        let one = scale.radius(1.0);
        let ten = scale.radius(10.0);
        assert!(one > 20.0);
        assert!(ten - one > 0.0);
        assert!((ten - one) > (scale.radius(100.0) - scale.radius(90.0)));
    }

    #[test]
    fn out_of_domain_values_are_clamped() {
        let scale = RadiusScale::new(100.0);
        assert_eq!(scale.radius(-5.0), 2.0);
        assert_eq!(scale.radius(10_000.0), 85.0);
        assert_eq!(scale.radius(f64::NAN), 2.0);
    }

    #[test]
    fn all_zero_dataset_uses_floor() {
        let scale = RadiusScale::new(0.0);
        assert_eq!(scale.radius(0.0), 2.0);
        assert_eq!(RadiusScale::new(f64::INFINITY).radius(3.0), 2.0);
    }

    #[test]
    fn scale_is_dataset_scoped() {
        let small = RadiusScale::new(100.0);
        let large = RadiusScale::new(10_000.0);
        assert!(large.radius(100.0) < small.radius(100.0));
        assert_eq!(large.domain_max(), 10_000.0);
    }
}
