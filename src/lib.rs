mod random_type;

pub mod best_state;
pub mod error;
pub mod feasibility;
pub mod focus;
pub mod generator;
pub mod geometry;
pub mod layout;
pub mod los;
pub mod optimizer;
pub mod periodicity;
pub mod trial_result;
pub mod viewer;
pub mod visualizer;

pub use best_state::BestState;
pub use error::SearchError;
pub use generator::InitStrategy;
pub use layout::{Layout, StackShape};
pub use optimizer::{SearchConfig, SearchConfigBuilder, TrialOptimizer};
pub use random_type::RandomType;
pub use trial_result::TrialResult;
pub use viewer::Viewer;
pub use visualizer::{Frame, FrameKind, NullVisualizer, TextVisualizer, Visualizer};

use anyhow::Error;

/// Finds the best stacked viewer layout by running `config.num_trials` independent trials.
///
/// # Arguments
///
/// * `config` - Search settings (viewer count, separation bounds, arena, trial and attempt budgets)
/// * `random_type` - Source of randomness for layout generation
/// * `visualizer` - Shown every new best layout as it is found, then the overall best once more at the end
/// * `on_update` - Callback function called after each trial with the trial number and the best power so far
///
/// # Returns
///
/// Returns a tuple containing:
/// * The best trial found (`TrialResult`)
/// * The trial number where the best trial was found
/// * The power of the best trial
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or if some trial uses up its whole
/// attempt budget without finding a feasible layout whose viewers can all see a focus. In the
/// latter case the best layout found so far is still shown to `visualizer` as the final frame,
/// and the error's context names its power and trial
pub fn find_best_layout<V, F>(
    config: &SearchConfig,
    random_type: RandomType,
    visualizer: &mut V,
    mut on_update: F,
) -> Result<(TrialResult, usize, f64), Error>
where
    V: Visualizer + ?Sized,
    F: FnMut(usize, f64),
{
    let mut optimizer = TrialOptimizer::new(config.clone(), random_type)?;
    let num_points = config.shape().len();
    let mut best_state = BestState::new();

    for trial in 1..=config.num_trials {
        let result = match optimizer.run_trial(trial) {
            Ok(result) => result,
            Err(err) => {
                let Some(best) = best_state.best() else {
                    return Err(err.into());
                };
                tracing::warn!(
                    trial,
                    best_trial = best_state.best_trial(),
                    best_power = best.power,
                    "search stopped early, showing the best layout so far"
                );
                show_final(visualizer, config, num_points, best, (trial - 1) as u64);
                let context = format!(
                    "best power so far {} from trial {}",
                    best.power,
                    best_state.best_trial()
                );
                return Err(anyhow::Error::new(err).context(context));
            }
        };
        tracing::debug!(trial, power = result.power, attempts = result.attempts, "trial finished");

        let attempts = result.attempts;
        if best_state.consider(trial, result) {
            if let Some(best) = best_state.best() {
                tracing::info!(
                    trial,
                    power = best.power,
                    distance = best.avg_distance,
                    "new best layout"
                );
                visualizer.show(&Frame {
                    layout: &best.layout,
                    radius: config.radius,
                    arena_size: config.arena_size,
                    num_points,
                    counter: attempts,
                    power: best.power,
                    qdistance: best.qdistance,
                    density: best.density,
                    kind: FrameKind::NewBest { trial_avg_distance: best.avg_distance },
                });
            }
        }

        on_update(trial, best_state.best_power());
    }

    let (best, best_trial) = best_state
        .into_best()
        .ok_or_else(|| anyhow::anyhow!("no trial produced a layout"))?;
    show_final(visualizer, config, num_points, &best, config.num_trials as u64);

    let best_power = best.power;
    Ok((best, best_trial, best_power))
}

fn show_final<V>(visualizer: &mut V, config: &SearchConfig, num_points: usize, best: &TrialResult, trials_run: u64)
where
    V: Visualizer + ?Sized,
{
    visualizer.show(&Frame {
        layout: &best.layout,
        radius: config.radius,
        arena_size: config.arena_size,
        num_points,
        counter: trials_run,
        power: best.power,
        qdistance: best.qdistance,
        density: best.density,
        kind: FrameKind::Final { best_avg_distance: best.avg_distance },
    });
}
