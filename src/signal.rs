//! Input signal generators for driving a model.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SignalKind {
    Constant {
        level: f64,
    },
    Step {
        amplitude: f64,
        start: usize,
    },
    Impulse {
        amplitude: f64,
        at: usize,
    },
    Sine {
        amplitude: f64,
        period: f64,
    },
}

pub trait Signal {
    fn reset(&mut self);
    fn sample(&mut self, n: usize) -> f64;
}

#[derive(Clone, Debug)]
pub struct ConstantSignal {
    level: f64,
}

impl ConstantSignal {
    pub fn new(level: f64) -> Self {
        Self { level }
    }
}

impl Signal for ConstantSignal {
    fn reset(&mut self) {}

    fn sample(&mut self, _n: usize) -> f64 {
        self.level
    }
}

#[derive(Clone, Debug)]
pub struct StepSignal {
    amplitude: f64,
    start: usize,
}

impl StepSignal {
    pub fn new(amplitude: f64, start: usize) -> Self {
        Self { amplitude, start }
    }
}

impl Signal for StepSignal {
    fn reset(&mut self) {}

    fn sample(&mut self, n: usize) -> f64 {
        if n >= self.start {
            self.amplitude
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImpulseSignal {
    amplitude: f64,
    at: usize,
}

impl ImpulseSignal {
    pub fn new(amplitude: f64, at: usize) -> Self {
        Self { amplitude, at }
    }
}

impl Signal for ImpulseSignal {
    fn reset(&mut self) {}

    fn sample(&mut self, n: usize) -> f64 {
        if n == self.at {
            self.amplitude
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug)]
pub struct SineSignal {
    amplitude: f64,
    period: f64,
}

impl SineSignal {
    pub fn new(amplitude: f64, period: f64) -> Self {
        Self { amplitude, period }
    }
}

impl Signal for SineSignal {
    fn reset(&mut self) {}

    fn sample(&mut self, n: usize) -> f64 {
        self.amplitude * (std::f64::consts::TAU * n as f64 / self.period).sin()
    }
}

pub fn build_signal(kind: &SignalKind) -> Box<dyn Signal> {
    match kind {
        SignalKind::Constant { level } => Box::new(ConstantSignal::new(*level)),
        SignalKind::Step { amplitude, start } => Box::new(StepSignal::new(*amplitude, *start)),
        SignalKind::Impulse { amplitude, at } => Box::new(ImpulseSignal::new(*amplitude, *at)),
        SignalKind::Sine { amplitude, period } => Box::new(SineSignal::new(*amplitude, *period)),
    }
}

impl SignalKind {
    /// Unit step at sample 1, the canonical step-response input.
    pub fn unit_step() -> Self {
        SignalKind::Step {
            amplitude: 1.0,
            start: 1,
        }
    }

    pub fn signal_type(&self) -> &'static str {
        match self {
            SignalKind::Constant { .. } => "constant",
            SignalKind::Step { .. } => "step",
            SignalKind::Impulse { .. } => "impulse",
            SignalKind::Sine { .. } => "sine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{build_signal, SignalKind};

    #[test]
    fn step_is_zero_before_its_onset() {
        let mut signal = build_signal(&SignalKind::unit_step());
        assert_eq!(signal.sample(0), 0.0);
        assert_eq!(signal.sample(1), 1.0);
        assert_eq!(signal.sample(29), 1.0);
    }

    #[test]
    fn impulse_fires_on_exactly_one_sample() {
        let mut signal = build_signal(&SignalKind::Impulse {
            amplitude: 2.0,
            at: 3,
        });
        assert_eq!(signal.sample(2), 0.0);
        assert_eq!(signal.sample(3), 2.0);
        assert_eq!(signal.sample(4), 0.0);
    }

    #[test]
    fn sine_crosses_zero_at_the_half_period() {
        let mut signal = build_signal(&SignalKind::Sine {
            amplitude: 1.5,
            period: 8.0,
        });
        assert_eq!(signal.sample(0), 0.0);
        assert!((signal.sample(2) - 1.5).abs() < 1e-12);
        assert!(signal.sample(4).abs() < 1e-12);
    }
}
