use std::f64::consts::FRAC_PI_2;

use crate::layout::{Layout, StackShape};
use crate::random_type::RandomType;
use crate::viewer::Viewer;

/// Added to every initial focus so that it starts just right of the next stack's edge.
const FOCUS_NUDGE: f64 = 5.0;

/// How candidate stacks are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InitStrategy {
    /// Stacks bend away from the vertical by a random, ever-increasing angle.
    #[default]
    Angled,
    /// Vertical stacks whose row gap doubles with every row.
    Straight,
}

/// Parameters shared by every generated candidate.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorParams {
    pub shape: StackShape,
    pub arena_size: f64,
    pub radius: f64,
    pub low_separation: f64,
    pub high_separation: f64,
}

impl GeneratorParams {
    fn draw_spacing(&self, random: &mut RandomType) -> f64 {
        random.int_in_range(self.low_separation.ceil() as i64, self.high_separation.floor() as i64) as f64
    }

    fn stack_shift(&self, n: usize, spacing: f64) -> f64 {
        -self.arena_size + self.radius + n as f64 * spacing
    }

    /// Emits one row: the viewer at `(x, y)` relative to every stack's origin.
    fn push_row(&self, viewers: &mut Vec<Viewer>, x: f64, y: f64, spacing: f64) {
        for n in 0..self.shape.num_stacks {
            let x_shift = self.stack_shift(n, spacing);
            viewers.push(Viewer::new(
                x + x_shift,
                y,
                x_shift + spacing - self.radius + FOCUS_NUDGE,
                0.0,
            ));
        }
    }
}

/// Produces one randomized candidate layout with the given strategy.
pub fn generate(strategy: InitStrategy, params: &GeneratorParams, random: &mut RandomType) -> Layout {
    match strategy {
        InitStrategy::Angled => angled_init(params, random),
        InitStrategy::Straight => straight_init(params, random),
    }
}

/// Places viewers in parallel stacks that curve away from the vertical.
///
/// Every stack shares the same shape; stack `n` is shifted right by `n * spacing`, with the
/// spacing drawn from the separation bounds. The first row rests on `y = radius` and each
/// following row sits `2 * radius` further along a direction whose angle from the vertical
/// grows by a random fraction of what is left up to a right angle.
pub fn angled_init(params: &GeneratorParams, random: &mut RandomType) -> Layout {
    let radius = params.radius;
    let spacing = params.draw_spacing(random);
    let mut viewers = Vec::with_capacity(params.shape.len());

    let mut angle: f64 = 0.0;
    let mut curr_x = 0.0;
    let mut curr_y = radius;
    for _ in 0..params.shape.num_per_stack {
        params.push_row(&mut viewers, curr_x, curr_y, spacing);
        angle += random.random() * (FRAC_PI_2 - angle);
        curr_x += 2.0 * radius * angle.sin();
        curr_y += 2.0 * radius * angle.cos();
    }

    Layout::new(viewers, params.shape)
}

/// Places viewers in vertical stacks, doubling the gap between consecutive rows.
pub fn straight_init(params: &GeneratorParams, random: &mut RandomType) -> Layout {
    let radius = params.radius;
    let spacing = params.draw_spacing(random);
    let mut viewers = Vec::with_capacity(params.shape.len());

    let mut separation = 2.0 * radius;
    let mut curr_y = radius;
    for _ in 0..params.shape.num_per_stack {
        params.push_row(&mut viewers, 0.0, curr_y, spacing);
        curr_y += separation;
        separation *= 2.0;
    }

    Layout::new(viewers, params.shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(num_stacks: usize, num_per_stack: usize) -> GeneratorParams {
        GeneratorParams {
            shape: StackShape::new(num_stacks, num_per_stack),
            arena_size: 800.0,
            radius: 100.0,
            low_separation: 200.0,
            high_separation: 600.0,
        }
    }

    #[test]
    fn test_angled_init_with_fixed_random() {
        let mut random = RandomType::Fixed(0.5);
        let layout = angled_init(&params(2, 2), &mut random);

        assert_eq!(layout.len(), 4);
        // spacing = 200 + floor(0.5 * 401) = 400
        assert_eq!(layout.spacing(), 400.0);
        assert_eq!(layout[0], Viewer::new(-700.0, 100.0, -395.0, 0.0));
        assert_eq!(layout[1], Viewer::new(-300.0, 100.0, 5.0, 0.0));

        // second row is 2r away from the first along a 45 degree direction
        let angle = FRAC_PI_2 / 2.0;
        let (dx, dy) = (200.0 * angle.sin(), 200.0 * angle.cos());
        assert!((layout[2].x - (-700.0 + dx)).abs() < 1e-9);
        assert!((layout[2].y - (100.0 + dy)).abs() < 1e-9);
        assert!((layout[3].x - layout[2].x - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_angled_init_first_row_rests_on_radius() {
        let mut random = RandomType::seeded(3);
        let layout = angled_init(&params(5, 4), &mut random);
        assert_eq!(layout.len(), 20);
        assert!(layout.viewers[..5].iter().all(|v| v.y == 100.0));
        assert!(layout.viewers[5..].iter().all(|v| v.y > 100.0));
        let spacing = layout.spacing();
        assert!((200.0..=600.0).contains(&spacing));
    }

    #[test]
    fn test_straight_init_doubles_row_gap() {
        let mut random = RandomType::Fixed(0.0);
        let layout = straight_init(&params(2, 3), &mut random);
        let ys: Vec<f64> = layout.iter().step_by(2).map(|v| v.y).collect();
        assert_eq!(ys, vec![100.0, 300.0, 700.0]);
        assert_eq!(layout.spacing(), 200.0);
    }
}
