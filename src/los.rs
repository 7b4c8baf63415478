use crate::geometry::Sightline;
use crate::layout::Layout;

/// Tests whether the sightline of `layout[index]` to its focus is blocked by another viewer.
///
/// A viewer further from the boundary line than `layout[index]` never blocks it, since
/// sightlines always run down towards `y = 0`. Every other viewer blocks when its center is
/// closer than `radius` to the sightline.
pub fn is_blocked(layout: &Layout, index: usize, radius: f64) -> bool {
    let viewer = &layout[index];
    let sightline = Sightline::from_viewer(viewer);

    layout
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .filter(|(_, other)| other.y <= viewer.y)
        .any(|(_, other)| sightline.distance_to(other.x, other.y) < radius)
}
