//! Discrete-time ARX process model
//!
//! Implements the recurrence
//! y[t] = sum_i b[i]*u[t-delay-i] - sum_i a[i]*y[t-1-i] + e[t]
//! with e ~ N(0, deviation^2).

use crate::history::ShiftRegister;
use crate::noise::GaussianNoise;

/// A single-input single-output block advanced one sample at a time.
pub trait SisoModel {
    /// Feed one input sample and produce one output sample.
    fn simulate(&mut self, input: f64) -> f64;
}

/// Drive a model through an input sequence, collecting the outputs.
pub fn simulate_sequence<M: SisoModel>(model: &mut M, inputs: &[f64]) -> Vec<f64> {
    inputs.iter().map(|&u| model.simulate(u)).collect()
}

/// ARX process simulator
pub struct ArxModel {
    /// Feedback coefficients
    a: Vec<f64>,
    /// Input coefficients
    b: Vec<f64>,
    /// Input transport delay in samples, at least 1
    delay: usize,
    /// Delayed inputs feeding the b terms, newest first
    input_history: ShiftRegister,
    /// Past outputs feeding the a terms, newest first
    output_history: ShiftRegister,
    /// Raw inputs in transit toward the input history
    delay_line: ShiftRegister,
    /// Additive output noise source
    noise: GaussianNoise,
}

impl ArxModel {
    /// Create a model with zeroed histories and an entropy-seeded noise
    /// source. Construction routes through the setters, so the sizing
    /// and coercion rules below hold from the first sample.
    ///
    /// # Arguments
    /// * `a` - feedback coefficients (a[i] weighs y[t-1-i])
    /// * `b` - input coefficients (b[i] weighs u[t-delay-i])
    /// * `delay` - input transport delay in samples; 0 is coerced to 1
    /// * `deviation` - noise standard deviation; negatives collapse to 0
    pub fn new(a: Vec<f64>, b: Vec<f64>, delay: usize, deviation: f64) -> Self {
        let mut model = Self {
            a: Vec::new(),
            b: Vec::new(),
            delay: 1,
            input_history: ShiftRegister::zeroed(0),
            output_history: ShiftRegister::zeroed(0),
            delay_line: ShiftRegister::zeroed(1),
            noise: GaussianNoise::new(0.0),
        };
        model.set_a(a);
        model.set_b(b);
        model.set_delay(delay);
        model.set_deviation(deviation);
        model
    }

    /// Replace the feedback coefficients and zero the output history.
    /// The other buffers keep their contents.
    pub fn set_a(&mut self, a: Vec<f64>) {
        self.output_history = ShiftRegister::zeroed(a.len());
        self.a = a;
    }

    /// Replace the input coefficients and zero the input history.
    /// The other buffers keep their contents.
    pub fn set_b(&mut self, b: Vec<f64>) {
        self.input_history = ShiftRegister::zeroed(b.len());
        self.b = b;
    }

    /// Replace the transport delay and zero the delay line. A delay of
    /// 0 is coerced to 1. The other buffers keep their contents.
    pub fn set_delay(&mut self, delay: usize) {
        self.delay = delay.max(1);
        self.delay_line = ShiftRegister::zeroed(self.delay);
    }

    /// Replace the noise standard deviation. Negative or NaN values
    /// collapse to 0. Histories and generator state are untouched.
    pub fn set_deviation(&mut self, deviation: f64) {
        self.noise.set_deviation(deviation);
    }

    /// Reseed the noise generator for reproducible runs. Coefficients
    /// and histories are untouched.
    pub fn set_seed(&mut self, seed: u64) {
        self.noise.reseed(seed);
    }

    /// Zero all three histories, keeping coefficients, delay, deviation
    /// and generator state.
    pub fn reset(&mut self) {
        self.input_history.reset();
        self.output_history.reset();
        self.delay_line.reset();
    }

    /// Feedback coefficients.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Input coefficients.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Input transport delay in samples.
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Noise standard deviation.
    pub fn deviation(&self) -> f64 {
        self.noise.deviation()
    }

    /// Advance the model one sample.
    ///
    /// The input enters the delay line; the sample leaving the delay
    /// line enters the input history; the new output is the noise draw
    /// plus the b-weighted inputs minus the a-weighted outputs, and
    /// enters the output history.
    ///
    /// # Arguments
    /// * `input` - the input sample u[t]
    ///
    /// # Returns
    /// The output sample y[t]
    pub fn simulate(&mut self, input: f64) -> f64 {
        let delayed = self.delay_line.shift(input);
        self.input_history.shift(delayed);

        let mut y = self.noise.draw();
        y += dot(&self.b, &self.input_history);
        y -= dot(&self.a, &self.output_history);
        self.output_history.shift(y);

        y
    }
}

impl SisoModel for ArxModel {
    fn simulate(&mut self, input: f64) -> f64 {
        ArxModel::simulate(self, input)
    }
}

/// Dot product of a coefficient vector with a history register.
fn dot(coefficients: &[f64], history: &ShiftRegister) -> f64 {
    assert_eq!(
        coefficients.len(),
        history.len(),
        "Coefficient/history length mismatch"
    );
    coefficients
        .iter()
        .zip(history.iter())
        .map(|(&c, v)| c * v)
        .sum()
}
