use crate::viewer::Viewer;

/// Bias added to both rise and run of a sightline so that a viewer sitting
/// directly above its focus never produces an infinite or zero slope.
pub const SLOPE_EPSILON: f64 = 0.01;

/// Perpendicular distance from `(x, y)` to the line `y = slope * x + intercept`.
///
/// `slope` must not be exactly zero; the foot of the perpendicular is found through `1 / slope`.
pub fn closest_distance_to_line(slope: f64, intercept: f64, x: f64, y: f64) -> f64 {
    let line_x = (-intercept + y + x / slope) / (slope + 1.0 / slope);
    let line_y = slope * line_x + intercept;
    ((x - line_x).powi(2) + (y - line_y).powi(2)).sqrt()
}

/// True iff both coordinates are exactly equal.
pub fn points_coincide(p1: &Viewer, p2: &Viewer) -> bool {
    p1.x == p2.x && p1.y == p2.y
}

/// The straight line through a viewer's center and its focus point.
///
/// The slope is computed as `(dy + ε) / (dx + ε)` with `ε = SLOPE_EPSILON`. For nearly
/// vertical or nearly collinear configurations this skews the line slightly, which can
/// flip a blocking decision that sits right at the `radius` threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sightline {
    pub slope: f64,
    pub intercept: f64,
}

impl Sightline {
    pub fn from_viewer(viewer: &Viewer) -> Self {
        let slope = (viewer.y - viewer.focus_y + SLOPE_EPSILON)
            / (viewer.x - viewer.focus_x + SLOPE_EPSILON);
        let intercept = viewer.y - slope * viewer.x;
        Self { slope, intercept }
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        closest_distance_to_line(self.slope, self.intercept, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_closest_distance_to_diagonal() {
        // y = x; the point (0, 2) is sqrt(2) away
        let d = closest_distance_to_line(1.0, 0.0, 0.0, 2.0);
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_point_on_line_has_zero_distance() {
        let d = closest_distance_to_line(-3.0, 7.0, 2.0, 1.0);
        assert!(d.abs() < 1e-12);
    }

    #[test]
    fn test_points_coincide_ignores_focus() {
        let a = Viewer::new(1.0, 2.0, 10.0, 0.0);
        let b = Viewer::new(1.0, 2.0, -10.0, 0.0);
        let c = Viewer::new(1.0, 2.5, 10.0, 0.0);
        assert!(points_coincide(&a, &b));
        assert!(!points_coincide(&a, &c));
    }

    #[test]
    fn test_sightline_directly_above_focus_is_finite() {
        let viewer = Viewer::new(50.0, 100.0, 50.0, 0.0);
        let line = Sightline::from_viewer(&viewer);
        assert!(line.slope.is_finite());
        assert!(line.slope > 1000.0);
        // the viewer's own center sits on its sightline
        assert!(line.distance_to(viewer.x, viewer.y) < 1e-6);
        // a point 150 to the side is ~150 away from an almost vertical line
        assert!((line.distance_to(200.0, 50.0) - 150.0).abs() < 0.1);
    }

    proptest! {
        #[test]
        fn distance_matches_projection_formula(
            slope in prop_oneof![-50.0f64..-0.05, 0.05f64..50.0],
            intercept in -1000.0f64..1000.0,
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
        ) {
            let expected = (slope * x - y + intercept).abs() / (slope * slope + 1.0).sqrt();
            let d = closest_distance_to_line(slope, intercept, x, y);
            prop_assert!((d - expected).abs() <= 1e-6 * (1.0 + expected));
        }
    }
}
