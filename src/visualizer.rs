use pretty_print_nalgebra::*;

use crate::layout::Layout;

/// Which distance metric a frame carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameKind {
    /// Sent whenever a trial beats the best so far.
    NewBest { trial_avg_distance: f64 },
    /// Sent once after the last trial.
    Final { best_avg_distance: f64 },
}

/// Everything a visualizer is told about a layout.
///
/// # Fields
///
/// * `counter` - Attempts consumed by the trial for `NewBest` frames, trials run for `Final`
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub layout: &'a Layout,
    pub radius: f64,
    pub arena_size: f64,
    pub num_points: usize,
    pub counter: u64,
    pub power: f64,
    pub qdistance: f64,
    pub density: f64,
    pub kind: FrameKind,
}

impl Frame<'_> {
    pub fn avg_distance(&self) -> f64 {
        match self.kind {
            FrameKind::NewBest { trial_avg_distance } => trial_avg_distance,
            FrameKind::Final { best_avg_distance } => best_avg_distance,
        }
    }
}

/// Receives best layouts as the search finds them. Nothing flows back into the search.
pub trait Visualizer {
    fn show(&mut self, frame: &Frame<'_>);
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn show(&mut self, _frame: &Frame<'_>) {}
}

/// Prints a title and the layout as an `n x 4` matrix of `x, y, focus_x, focus_y`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextVisualizer;

impl TextVisualizer {
    pub fn title(frame: &Frame<'_>) -> String {
        format!(
            "Best config for {} layers (power = {:.3}, qdistance = {:.3}, density = {:.3})\n Avg. Distance = {:.3}",
            frame.layout.shape.num_per_stack,
            frame.power,
            frame.qdistance,
            frame.density,
            frame.avg_distance()
        )
    }
}

impl Visualizer for TextVisualizer {
    fn show(&mut self, frame: &Frame<'_>) {
        let label = match frame.kind {
            FrameKind::NewBest { .. } => "step",
            FrameKind::Final { .. } => "trials",
        };
        println!("{} ({} = {})", Self::title(frame), label, frame.counter);
        println!("{}", pretty_print!(&frame.layout.as_matrix()));
    }
}
