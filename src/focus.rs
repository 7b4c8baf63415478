use crate::layout::Layout;
use crate::los::is_blocked;

/// Range of x positions on the boundary line that foci may be moved to.
///
/// # Fields
///
/// * `max_x` - Candidates right of this are skipped
/// * `min_x` - Candidates left of this are skipped, but only when `enforce_min` is set
/// * `enforce_min` - Whether the lower bound is checked at all
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusBounds {
    pub max_x: f64,
    pub min_x: f64,
    pub enforce_min: bool,
}

impl FocusBounds {
    /// Derives the bounds from the viewers resting on the first row.
    ///
    /// `max_x` is the rightmost first-row center plus one stack spacing minus a radius,
    /// `min_x` the leftmost first-row center plus a radius.
    pub fn from_layout(layout: &Layout, radius: f64, enforce_min: bool) -> Option<Self> {
        let (lo, hi) = layout.first_row_extent(radius)?;
        Some(Self {
            max_x: hi + layout.spacing() - radius,
            min_x: lo + radius,
            enforce_min,
        })
    }

    pub fn admits(&self, x: f64) -> bool {
        x <= self.max_x && !(self.enforce_min && x < self.min_x)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
}

/// Moves every viewer's focus to the closest point on the boundary line it can see.
///
/// Viewers are handled in layout order. For each one the boundary line is scanned outwards
/// from the viewer's own x in whole steps `d = 0, 1, .. arena_size - 1`, trying the right side
/// before the left at every step, and the first focus whose sightline is not blocked is kept.
/// Later viewers are checked against the foci already chosen for earlier ones.
///
/// Returns `None` as soon as some viewer has no visible candidate; the input is left untouched.
pub fn assign_foci(layout: &Layout, radius: f64, arena_size: f64, bounds: &FocusBounds) -> Option<Layout> {
    let mut working = layout.clone();
    let scan = arena_size.max(0.0) as i64;

    for i in 0..working.len() {
        if !assign_one(&mut working, i, radius, scan, bounds) {
            tracing::trace!(viewer = i, "no visible focus");
            return None;
        }
    }
    Some(working)
}

fn assign_one(working: &mut Layout, i: usize, radius: f64, scan: i64, bounds: &FocusBounds) -> bool {
    let origin_x = working[i].x;
    for d in 0..scan {
        for side in [1.0, -1.0] {
            let x = origin_x + side * d as f64;
            if !bounds.admits(x) {
                continue;
            }
            working[i] = working[i].with_focus_at(x);
            if !is_blocked(working, i, radius) {
                return true;
            }
        }
    }
    false
}
