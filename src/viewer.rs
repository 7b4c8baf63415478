use nalgebra::Point2;

/// A circular viewer token and the point on the boundary line it looks at.
///
/// # Fields
///
/// * `x`, `y` - Center of the viewer's circle
/// * `focus_x`, `focus_y` - The viewer's focus point. `focus_y` stays on the boundary line (`0.0`)
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewer {
    pub x: f64,
    pub y: f64,
    pub focus_x: f64,
    pub focus_y: f64,
}

impl Viewer {
    pub fn new(x: f64, y: f64, focus_x: f64, focus_y: f64) -> Self {
        Self { x, y, focus_x, focus_y }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn focus(&self) -> Point2<f64> {
        Point2::new(self.focus_x, self.focus_y)
    }

    /// Returns a copy looking at `(focus_x, 0)`.
    pub fn with_focus_at(&self, focus_x: f64) -> Self {
        Self { focus_x, focus_y: 0.0, ..*self }
    }

    /// Returns a copy moved by `dx` along the boundary line, focus included.
    pub fn shifted(&self, dx: f64) -> Self {
        Self {
            x: self.x + dx,
            focus_x: self.focus_x + dx,
            ..*self
        }
    }

    pub fn focus_distance(&self) -> f64 {
        nalgebra::distance(&self.position(), &self.focus())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_distance() {
        let viewer = Viewer::new(3.0, 4.0, 0.0, 0.0);
        assert_eq!(viewer.focus_distance(), 5.0);
    }

    #[test]
    fn test_shifted_moves_focus_too() {
        let viewer = Viewer::new(100.0, 300.0, 50.0, 0.0).shifted(250.0);
        assert_eq!(viewer, Viewer::new(350.0, 300.0, 300.0, 0.0));
    }

    #[test]
    fn test_with_focus_at_keeps_position() {
        let viewer = Viewer::new(-10.0, 120.0, 7.0, 0.0).with_focus_at(42.0);
        assert_eq!(viewer.position(), Point2::new(-10.0, 120.0));
        assert_eq!(viewer.focus(), Point2::new(42.0, 0.0));
    }
}
