//! ARX - AutoRegressive with eXogenous input
//!
//! Discrete-time simulation of SISO ARX process models: inputs pass
//! through a transport delay into a register weighted by the b
//! coefficients, past outputs feed back through the a coefficients, and
//! a seedable zero-mean Gaussian source adds output noise.

use thiserror::Error;

pub mod history;
pub mod model;
pub mod noise;
pub mod output;
pub mod params;
pub mod signal;
pub mod sim;

// Re-export main types
pub use history::ShiftRegister;
pub use model::{simulate_sequence, ArxModel, SisoModel};
pub use noise::GaussianNoise;
pub use output::{
    create_timestamped_output_dir, write_summary_json, write_trace_csv, StepResponseSummary,
};
pub use params::ArxParams;
pub use signal::{build_signal, Signal, SignalKind};
pub use sim::{peak_error, rms_error, run_simulation, settling_time, SimConfig, SimStep};

/// Errors surfaced by the configuration and output layers. The model
/// itself never fails: out-of-range parameters are normalized instead.
#[derive(Debug, Error)]
pub enum ArxError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
