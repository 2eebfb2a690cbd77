//! Timing curves for tweens.

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f64 = 1e-7;
const BISECTION_ITERATIONS: usize = 40;

/// CSS-style cubic bézier with endpoints fixed at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// `x1` and `x2` are clamped to [0, 1] so the curve stays a function of x.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    pub fn from_points(points: [f64; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        sample(self.y1, self.y2, self.solve_t(x))
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(self.x1, self.x2, t) - x;
            if error.abs() < NEWTON_EPSILON {
                return t;
            }
            let slope = slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled on a flat stretch, bisect instead
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let current = sample(self.x1, self.x2, t);
            if (current - x).abs() < NEWTON_EPSILON {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

fn sample(a1: f64, a2: f64, t: f64) -> f64 {
    let c = 3.0 * a1;
    let b = 3.0 * (a2 - a1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn slope(a1: f64, a2: f64, t: f64) -> f64 {
    let c = 3.0 * a1;
    let b = 3.0 * (a2 - a1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn ease(&self, x: f64) -> f64 {
        match self {
            Easing::Linear => x.clamp(0.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).ease(x),
            Easing::Bezier(curve) => curve.ease(x),
        }
    }

    /// The matching `animation-timing-function` value.
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::Bezier(curve) => curve.css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.5, 0.0)]
    #[case(0.0, 0.0)]
    #[case(1.0, 1.0)]
    #[case(3.0, 1.0)]
    fn endpoints_are_pinned(#[case] x: f64, #[case] expected: f64) {
        let curve = CubicBezier::new(0.25, 0.46, 0.45, 0.94);
        assert_eq!(curve.ease(x), expected);
    }

    #[test]
    fn symmetric_curve_passes_through_midpoint() {
        let curve = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
        assert!((curve.ease(0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn ease_out_quad_is_monotonic_and_ahead_of_linear() {
        let curve = CubicBezier::new(0.25, 0.46, 0.45, 0.94);
        let mut previous = 0.0;
        for step in 1..100 {
            let x = step as f64 / 100.0;
            let y = curve.ease(x);
            assert!(y >= previous, "curve went backwards at {}", x);
            assert!(y >= x, "ease-out should lead linear at {}", x);
            previous = y;
        }
    }

    #[test]
    fn degenerate_control_points_are_linear() {
        let curve = CubicBezier::new(0.3, 0.3, 0.7, 0.7);
        assert_eq!(curve.ease(0.37), 0.37);
    }

    #[test]
    fn css_names() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(
            Easing::Bezier(CubicBezier::from_points([0.25, 0.46, 0.45, 0.94])).css(),
            "cubic-bezier(0.25, 0.46, 0.45, 0.94)"
        );
    }
}
