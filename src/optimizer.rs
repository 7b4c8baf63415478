use derive_builder::Builder;

use crate::error::SearchError;
use crate::feasibility::is_in_violation;
use crate::focus::{assign_foci, FocusBounds};
use crate::generator::{generate, GeneratorParams, InitStrategy};
use crate::layout::{Layout, StackShape};
use crate::periodicity::enforce_periodicity;
use crate::random_type::RandomType;
use crate::trial_result::TrialResult;

/// Settings for a layout search.
///
/// Built through `SearchConfigBuilder`; every field has a default, so
/// `SearchConfigBuilder::default().build()` gives the stock 4-viewer search.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(error = "anyhow::Error"))]
pub struct SearchConfig {
    /* number of viewers requested; the layout keeps num_stacks * (num_points / num_stacks) of them */
    #[builder(default = "4")]
    pub num_points: usize,

    /* bounds on the randomly drawn horizontal offset between neighbouring stacks */
    #[builder(default = "200.0")]
    pub low_separation: f64,
    #[builder(default = "600.0")]
    pub high_separation: f64,

    #[builder(default = "100.0")]
    pub radius: f64,

    /* half-width of the arena; also the number of unit steps the focus search scans */
    #[builder(default = "800.0")]
    pub arena_size: f64,

    #[builder(default = "200")]
    pub num_trials: usize,

    /* each trial may draw up to num_steps^2 candidate layouts */
    #[builder(default = "6000")]
    pub num_steps: u64,

    /* overrides the number of stacks derived from the arena */
    #[builder(default, setter(strip_option))]
    pub num_stacks: Option<usize>,

    #[builder(default)]
    pub init_strategy: InitStrategy,

    /* also skip foci left of the first-row lower bound */
    #[builder(default = "false")]
    pub enforce_lower_bound: bool,
}

impl SearchConfig {
    /// Stacks and viewers per stack for this configuration.
    ///
    /// Unless overridden, the arena fits `(arena_size - 3 * radius) / radius` stacks, capped at
    /// the number of viewers so that small searches still get one viewer per stack.
    pub fn shape(&self) -> StackShape {
        let num_stacks = self.num_stacks.unwrap_or_else(|| {
            let fit = ((self.arena_size - 3.0 * self.radius) / self.radius).floor().max(0.0) as usize;
            fit.min(self.num_points)
        });
        let num_per_stack = if num_stacks == 0 { 0 } else { self.num_points / num_stacks };
        StackShape::new(num_stacks, num_per_stack)
    }

    pub fn attempt_budget(&self) -> u64 {
        self.num_steps.saturating_mul(self.num_steps)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        let invalid = |msg: String| Err(SearchError::InvalidConfig(msg));
        let shape = self.shape();

        if !(self.radius > 0.0) {
            return invalid(format!("radius must be positive, got {}", self.radius));
        }
        if self.arena_size < self.radius {
            return invalid(format!("arena size {} is smaller than the radius {}", self.arena_size, self.radius));
        }
        if shape.num_stacks < 2 {
            return invalid(format!("need at least 2 stacks, got {}", shape.num_stacks));
        }
        if shape.num_per_stack == 0 {
            return invalid(format!("{} viewers cannot fill {} stacks", self.num_points, shape.num_stacks));
        }
        if !(self.low_separation > 0.0) || self.low_separation.ceil() > self.high_separation.floor() {
            return invalid(format!(
                "separation bounds [{}, {}] hold no whole spacing",
                self.low_separation, self.high_separation
            ));
        }
        if self.num_trials == 0 || self.num_steps == 0 {
            return invalid("num_trials and num_steps must be positive".to_string());
        }
        Ok(())
    }

    fn generator_params(&self) -> GeneratorParams {
        GeneratorParams {
            shape: self.shape(),
            arena_size: self.arena_size,
            radius: self.radius,
            low_separation: self.low_separation,
            high_separation: self.high_separation,
        }
    }
}

/// Runs single trials: generate, filter, assign foci, enforce periodicity, score.
#[derive(Debug)]
pub struct TrialOptimizer {
    config: SearchConfig,
    params: GeneratorParams,
    random_type: RandomType,
}

impl TrialOptimizer {
    pub fn new(config: SearchConfig, random_type: RandomType) -> Result<Self, SearchError> {
        config.validate()?;
        let dropped = config.num_points - config.shape().len();
        if dropped > 0 {
            tracing::warn!(dropped, shape = ?config.shape(), "viewers do not divide evenly into stacks");
        }
        let params = config.generator_params();
        Ok(Self { config, params, random_type })
    }

    /// Draws candidates until one is feasible and every viewer can see a focus.
    ///
    /// Returns the focus-assigned layout, its focus bounds and the number of attempts used.
    pub fn find_feasible(&mut self, trial: usize) -> Result<(Layout, FocusBounds, u64), SearchError> {
        let config = &self.config;
        let budget = config.attempt_budget();
        let mut rejected_foci = 0u64;

        for attempt in 1..=budget {
            let candidate = generate(config.init_strategy, &self.params, &mut self.random_type);
            if is_in_violation(&candidate, config.radius, config.arena_size) {
                tracing::trace!(trial, attempt, "candidate in violation");
                continue;
            }

            let bounds = FocusBounds::from_layout(&candidate, config.radius, config.enforce_lower_bound)
                .ok_or(SearchError::EmptyFirstRow)?;
            match assign_foci(&candidate, config.radius, config.arena_size, &bounds) {
                Some(layout) => {
                    tracing::debug!(trial, attempt, rejected_foci, "feasible layout found");
                    return Ok((layout, bounds, attempt));
                }
                None => rejected_foci += 1,
            }
        }

        Err(SearchError::ExhaustedBudget { trial, attempts: budget })
    }

    /// Runs one full trial and scores its layout.
    pub fn run_trial(&mut self, trial: usize) -> Result<TrialResult, SearchError> {
        let (mut layout, bounds, attempts) = self.find_feasible(trial)?;
        enforce_periodicity(&mut layout);
        Ok(TrialResult::score(layout, self.config.radius, &bounds, attempts))
    }
}
