use crate::geometry::points_coincide;
use crate::layout::Layout;

/// True if any two viewers sit on exactly the same coordinates.
pub fn is_degenerate(layout: &Layout) -> bool {
    let viewers = &layout.viewers;
    (0..viewers.len()).any(|i| {
        viewers[i + 1..]
            .iter()
            .any(|other| points_coincide(&viewers[i], other))
    })
}

/// True if any two viewer circles overlap (centers closer than `2 * radius`).
pub fn self_intersect(layout: &Layout, radius: f64) -> bool {
    let viewers = &layout.viewers;
    let min_sq = 4.0 * radius * radius;
    for i in 0..viewers.len() {
        for j in (i + 1)..viewers.len() {
            let (p1, p2) = (&viewers[i], &viewers[j]);
            if (p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2) < min_sq {
                return true;
            }
        }
    }
    false
}

/// True if any viewer reaches past the boundary line at `y = 0`.
pub fn intersect_origin_line(layout: &Layout, radius: f64) -> bool {
    layout.iter().any(|v| v.y < radius)
}

/// Checks whether a layout is physically unacceptable.
///
/// The checks run in order (degenerate, overlapping, past the boundary line) and stop at the
/// first one that fires. `arena_size` does not bound x; stacks are free to run past it.
pub fn is_in_violation(layout: &Layout, radius: f64, _arena_size: f64) -> bool {
    is_degenerate(layout) || self_intersect(layout, radius) || intersect_origin_line(layout, radius)
}
