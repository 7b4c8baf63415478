use losgen::los::is_blocked;
use losgen::SearchError;
use losgen::{
    find_best_layout, Frame, FrameKind, NullVisualizer, RandomType, SearchConfig, SearchConfigBuilder,
    Visualizer,
};

fn configure(num_points: usize, num_trials: usize) -> SearchConfig {
    SearchConfigBuilder::default()
        .num_points(num_points)
        .num_trials(num_trials)
        .num_steps(200)
        .build()
        .unwrap()
}

/// Records what the search shows it.
#[derive(Default)]
struct Recorder {
    new_best_powers: Vec<f64>,
    final_distances: Vec<f64>,
    layout_lens: Vec<usize>,
}

impl Visualizer for Recorder {
    fn show(&mut self, frame: &Frame<'_>) {
        self.layout_lens.push(frame.layout.len());
        match frame.kind {
            FrameKind::NewBest { .. } => self.new_best_powers.push(frame.power),
            FrameKind::Final { best_avg_distance } => self.final_distances.push(best_avg_distance),
        }
    }
}

#[test]
fn test_find_best_layout_basic() {
    let iter = 10;
    let result = find_best_layout(&configure(4, iter), RandomType::seeded(1), &mut NullVisualizer, |_, _| {});
    assert!(result.is_ok());

    let (best, best_trial, best_power) = result.unwrap();
    assert!(best_trial >= 1 && best_trial <= iter);
    assert_eq!(best_power, best.power);
    assert!(best_power > 0.0);
}

#[test]
fn test_end_to_end_four_viewers() {
    let result = find_best_layout(&configure(4, 1), RandomType::seeded(2024), &mut NullVisualizer, |_, _| {});
    let (best, _, _) = result.unwrap();

    assert_eq!(best.layout.len(), 4);
    assert!(best.power > 0.0);
    assert!(best.density > 0.0 && best.density < 1.0);
    for i in 0..best.layout.len() {
        assert!(!is_blocked(&best.layout, i, 100.0));
    }
}

#[test]
fn test_find_best_layout_with_progress_callback() {
    let iter = 10;
    let mut iter_update = 0;
    let mut powers = vec![];
    let result = find_best_layout(&configure(4, iter), RandomType::seeded(7), &mut NullVisualizer, |iter: usize, power: f64| {
        if iter % 2 == 0 {
            iter_update += iter;
        }
        powers.push(power);
    });
    assert!(result.is_ok());
    assert_eq!(iter_update, 30);
    assert_eq!(powers.len(), iter);
    assert!(powers.windows(2).all(|w| w[1] >= w[0]), "best power decreased: {powers:?}");
    assert!(powers[0] > 0.0);
}

#[test]
fn test_visualizer_sees_each_new_best_and_the_final_layout() {
    let mut recorder = Recorder::default();
    let (best, _, best_power) = find_best_layout(&configure(5, 8), RandomType::seeded(99), &mut recorder, |_, _| {}).unwrap();

    assert!(!recorder.new_best_powers.is_empty());
    assert!(recorder.new_best_powers.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(*recorder.new_best_powers.last().unwrap(), best_power);
    assert_eq!(recorder.final_distances, vec![best.avg_distance]);
    assert!(recorder.layout_lens.iter().all(|&len| len == 5));
}

#[test]
fn test_multi_row_stacks() {
    let config = SearchConfigBuilder::default()
        .num_points(20)
        .num_trials(2)
        .num_steps(500)
        .build()
        .unwrap();
    let (best, _, _) = find_best_layout(&config, RandomType::seeded(5), &mut NullVisualizer, |_, _| {}).unwrap();

    assert_eq!(best.layout.shape.num_stacks, 5);
    assert_eq!(best.layout.shape.num_per_stack, 4);
    assert_eq!(best.layout.len(), 20);
    assert!(best.layout.iter().all(|v| v.y >= 100.0 && v.focus_y == 0.0));
}

#[test]
fn test_find_best_layout_invalid_params() {
    let config = SearchConfigBuilder::default()
        .num_points(1)
        .build()
        .unwrap();
    let result = find_best_layout(&config, RandomType::seeded(0), &mut NullVisualizer, |_, _| {});
    assert!(result.is_err());
}

#[test]
fn test_exhausted_trial_keeps_the_best_so_far() {
    // spacings of 150..=250 overlap about half the time, and one attempt per trial leaves no retry
    let config = SearchConfigBuilder::default()
        .low_separation(150.0)
        .high_separation(250.0)
        .num_trials(50)
        .num_steps(1)
        .build()
        .unwrap();

    let mut runs_with_a_best = 0;
    for seed in 0..20 {
        let mut recorder = Recorder::default();
        let err = find_best_layout(&config, RandomType::seeded(seed), &mut recorder, |_, _| {}).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SearchError>(),
            Some(SearchError::ExhaustedBudget { attempts: 1, .. })
        ));

        if let Some(&best_power) = recorder.new_best_powers.last() {
            runs_with_a_best += 1;
            assert_eq!(recorder.final_distances.len(), 1);
            assert!(err.to_string().contains(&format!("best power so far {}", best_power)));
        } else {
            assert!(recorder.final_distances.is_empty());
        }
    }
    assert!(runs_with_a_best > 0);
}
