use std::f64::consts::PI;

use crate::focus::FocusBounds;
use crate::layout::Layout;

/// Represents the scored outcome of one trial.
///
/// # Fields
///
/// * `layout` - The accepted layout, foci assigned and periodicity enforced
/// * `avg_distance` - Mean viewer-to-focus distance, in radii
/// * `power` - Inverse half-width of the band between the focus bounds, in radii. Higher is better
/// * `qdistance` - Stack spacing, in radii
/// * `density` - Total viewer area over the area of the layout's bounding box
/// * `attempts` - Candidate layouts generated before this one was accepted, itself included
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrialResult {
    pub layout: Layout,
    pub avg_distance: f64,
    pub power: f64,
    pub qdistance: f64,
    pub density: f64,
    pub attempts: u64,
}

impl TrialResult {
    pub fn score(layout: Layout, radius: f64, bounds: &FocusBounds, attempts: u64) -> Self {
        let avg_distance = if layout.is_empty() {
            0.0
        } else {
            layout.iter().map(|v| v.focus_distance() / radius).sum::<f64>() / layout.len() as f64
        };
        let power = 1.0 / (bounds.width() / 2.0 / radius);
        let qdistance = layout.spacing() / radius;
        let density = layout
            .bounding_box(radius)
            .map(|bbox| layout.len() as f64 * PI * radius * radius / bbox.area())
            .unwrap_or(0.0);

        Self {
            layout,
            avg_distance,
            power,
            qdistance,
            density,
            attempts,
        }
    }
}
