//! ARX model parameters.

use serde::{Deserialize, Serialize};

use crate::model::ArxModel;
use crate::ArxError;

/// Parameters of a discrete-time ARX process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxParams {
    /// Feedback coefficients; a[i] weighs the output i+1 samples back.
    pub a: Vec<f64>,
    /// Input coefficients; b[i] weighs the input delay+i samples back.
    pub b: Vec<f64>,
    /// Input transport delay in samples (kept at 1 or more).
    pub delay: usize,
    /// Standard deviation of the additive output noise.
    pub deviation: f64,
}

impl ArxParams {
    /// Create a parameter set.
    pub fn new(a: Vec<f64>, b: Vec<f64>, delay: usize, deviation: f64) -> Self {
        Self {
            a,
            b,
            delay,
            deviation,
        }
    }

    /// First-order plant used by the tests and the demo:
    /// y[t] = 0.6 u[t-1] + 0.4 y[t-1], noise free.
    pub fn default_params() -> Self {
        Self {
            a: vec![-0.4],
            b: vec![0.6],
            delay: 1,
            deviation: 0.0,
        }
    }

    /// Steady-state output of the noise-free recurrence under a unit
    /// step: sum(b) / (1 + sum(a)).
    pub fn steady_state_gain(&self) -> f64 {
        let numerator: f64 = self.b.iter().sum();
        let denominator: f64 = 1.0 + self.a.iter().sum::<f64>();
        numerator / denominator
    }

    /// Config-layer sanity checks. The model itself accepts any values
    /// and normalizes delay and deviation; these checks reject configs
    /// that could only produce NaN traces.
    pub fn validate(&self) -> Result<(), ArxError> {
        for (name, coefficients) in [("a", &self.a), ("b", &self.b)] {
            if let Some(value) = coefficients.iter().find(|v| !v.is_finite()) {
                return Err(ArxError::InvalidConfig(format!(
                    "coefficient vector {name} contains a non-finite value: {value}"
                )));
            }
        }
        if !self.deviation.is_finite() {
            return Err(ArxError::InvalidConfig(format!(
                "deviation must be finite, got {}",
                self.deviation
            )));
        }
        Ok(())
    }

    /// Build a model from these parameters.
    pub fn build(&self) -> ArxModel {
        ArxModel::new(self.a.clone(), self.b.clone(), self.delay, self.deviation)
    }
}

impl Default for ArxParams {
    fn default() -> Self {
        Self::default_params()
    }
}
