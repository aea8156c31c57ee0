use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use csv::Writer;
use serde::Serialize;

use crate::sim::SimStep;
use crate::ArxError;

#[derive(Debug, Clone, Serialize)]
pub struct StepResponseSummary {
    pub steps: usize,
    pub seed: Option<u64>,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub delay: usize,
    pub deviation: f64,
    pub input: String,
    pub steady_state_gain: f64,
    pub final_output: f64,
    pub rms_noise_effect: f64,
    pub peak_noise_effect: f64,
    pub settling_time: Option<usize>,
}

pub fn crate_root_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn create_timestamped_output_dir() -> Result<PathBuf, ArxError> {
    let output_root = crate_root_dir().join("output-arx");
    fs::create_dir_all(&output_root)?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let mut output_dir = output_root.join(&timestamp);
    let mut counter = 1_u32;

    while output_dir.exists() {
        output_dir = output_root.join(format!("{timestamp}-{counter:02}"));
        counter += 1;
    }

    fs::create_dir_all(&output_dir)?;
    Ok(output_dir)
}

fn fmt_f64(value: f64) -> String {
    format!("{value:.10}")
}

pub fn write_trace_csv(path: &Path, results: &[SimStep]) -> Result<(), ArxError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["n", "u", "y", "y_ref", "err"])?;

    for step in results {
        writer.write_record([
            step.n.to_string(),
            fmt_f64(step.u),
            fmt_f64(step.y),
            fmt_f64(step.y_ref),
            fmt_f64(step.err),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_summary_json(path: &Path, summary: &StepResponseSummary) -> Result<(), ArxError> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
