//! Simulation harness
//!
//! Drives a configured model with an input signal and records the
//! response next to a noise-free reference run.

use serde::{Deserialize, Serialize};

use crate::params::ArxParams;
use crate::signal::{build_signal, SignalKind};
use crate::ArxError;

/// Simulation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of samples to simulate
    pub steps: usize,
    /// Noise generator seed; `None` leaves the model entropy-seeded
    pub seed: Option<u64>,
    /// Model parameters
    pub model: ArxParams,
    /// Input signal
    pub input: SignalKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            steps: 30,
            seed: None,
            model: ArxParams::default(),
            input: SignalKind::unit_step(),
        }
    }
}

impl SimConfig {
    /// Reject configurations the run could only turn into NaN traces
    /// or empty output.
    pub fn validate(&self) -> Result<(), ArxError> {
        if self.steps == 0 {
            return Err(ArxError::InvalidConfig(
                "steps must be at least 1".to_string(),
            ));
        }
        self.model.validate()?;
        if let SignalKind::Sine { period, .. } = self.input {
            if !(period.is_finite() && period > 0.0) {
                return Err(ArxError::InvalidConfig(format!(
                    "sine period must be positive and finite, got {period}"
                )));
            }
        }
        Ok(())
    }
}

/// Simulation record for one sample
#[derive(Debug, Clone)]
pub struct SimStep {
    /// Sample index
    pub n: usize,
    /// Input fed to the model
    pub u: f64,
    /// Noisy model output
    pub y: f64,
    /// Output of a noise-free twin driven by the same input
    pub y_ref: f64,
    /// Accumulated noise effect, y - y_ref
    pub err: f64,
}

/// Run the configured simulation.
///
/// The configured model runs next to a noise-free twin with the same
/// coefficients and delay, so every record carries the pure recurrence
/// response and the accumulated effect of the noise.
pub fn run_simulation(config: &SimConfig) -> Result<Vec<SimStep>, ArxError> {
    config.validate()?;

    let mut model = config.model.build();
    if let Some(seed) = config.seed {
        model.set_seed(seed);
    }

    let mut reference_params = config.model.clone();
    reference_params.deviation = 0.0;
    let mut reference = reference_params.build();

    let mut signal = build_signal(&config.input);
    signal.reset();

    let mut results = Vec::with_capacity(config.steps);
    for n in 0..config.steps {
        let u = signal.sample(n);
        let y = model.simulate(u);
        let y_ref = reference.simulate(u);
        results.push(SimStep {
            n,
            u,
            y,
            y_ref,
            err: y - y_ref,
        });
    }

    Ok(results)
}

/// Calculate RMS of an error sequence
pub fn rms_error(errors: &[f64]) -> f64 {
    let sum_sq: f64 = errors.iter().map(|&e| e * e).sum();
    (sum_sq / errors.len() as f64).sqrt()
}

/// Largest absolute value of a per-step quantity over the whole run
pub fn peak_error(results: &[SimStep], get_error: impl Fn(&SimStep) -> f64) -> f64 {
    results
        .iter()
        .map(get_error)
        .map(f64::abs)
        .fold(0.0f64, f64::max)
}

/// First sample index from which every later output stays within
/// `tolerance` of `target`; `None` if the run never settles.
pub fn settling_time(results: &[SimStep], target: f64, tolerance: f64) -> Option<usize> {
    let mut settled_from = 0;
    for (i, step) in results.iter().enumerate() {
        if (step.y - target).abs() > tolerance {
            settled_from = i + 1;
        }
    }
    if settled_from < results.len() {
        Some(settled_from)
    } else {
        None
    }
}
