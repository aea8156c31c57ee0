use std::fs;
use std::path::{Path, PathBuf};

use arx::{
    create_timestamped_output_dir, peak_error, rms_error, run_simulation, settling_time,
    write_summary_json, write_trace_csv, ArxError, SignalKind, SimConfig, StepResponseSummary,
};

fn main() {
    if let Err(error) = try_main() {
        eprintln!("arx step response failed: {error}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), ArxError> {
    let config_path = parse_config_path(std::env::args().skip(1))?;
    let config = load_config(config_path.as_deref())?;
    config.validate()?;

    let results = run_simulation(&config)?;

    let gain = config.model.steady_state_gain();
    let final_output = results.last().map(|step| step.y).unwrap_or(0.0);
    let errors: Vec<f64> = results.iter().map(|step| step.err).collect();
    let rms_noise_effect = rms_error(&errors);
    let peak_noise_effect = peak_error(&results, |step| step.err);

    // Settling is only meaningful against a flat input level.
    let settled = match config.input {
        SignalKind::Step { amplitude, .. } => Some(gain * amplitude),
        SignalKind::Constant { level } => Some(gain * level),
        _ => None,
    }
    .and_then(|target| settling_time(&results, target, 1e-3));

    println!(
        "ARX response: {} input, {} samples",
        config.input.signal_type(),
        results.len()
    );
    println!("  a = {:?}, b = {:?}", config.model.a, config.model.b);
    println!(
        "  delay = {}, deviation = {}",
        config.model.delay, config.model.deviation
    );
    println!("  steady-state gain: {gain:.6}");
    println!("  final output:      {final_output:.6}");
    println!("  rms noise effect:  {rms_noise_effect:.6}");
    println!("  peak noise effect: {peak_noise_effect:.6}");
    match settled {
        Some(n) => println!("  settled within 1e-3 of the target from sample {n}"),
        None => println!("  no settling within 1e-3 of a flat target"),
    }

    let output_dir = create_timestamped_output_dir()?;
    write_trace_csv(&output_dir.join("trace.csv"), &results)?;

    let summary = StepResponseSummary {
        steps: results.len(),
        seed: config.seed,
        a: config.model.a.clone(),
        b: config.model.b.clone(),
        delay: config.model.delay,
        deviation: config.model.deviation,
        input: config.input.signal_type().to_string(),
        steady_state_gain: gain,
        final_output,
        rms_noise_effect,
        peak_noise_effect,
        settling_time: settled,
    };
    write_summary_json(&output_dir.join("summary.json"), &summary)?;

    println!("Output directory: {}", output_dir.display());
    Ok(())
}

fn parse_config_path<I>(args: I) -> Result<Option<PathBuf>, ArxError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let mut config_path = None;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or_else(|| {
                    ArxError::InvalidConfig("missing value for --config".to_string())
                })?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                return Err(ArxError::InvalidConfig(format!(
                    "unknown argument: {other}"
                )));
            }
        }
    }

    Ok(config_path)
}

fn load_config(path: Option<&Path>) -> Result<SimConfig, ArxError> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let cwd_config = PathBuf::from("config.json");
    if cwd_config.exists() {
        return load_config_file(&cwd_config);
    }

    Ok(SimConfig::default())
}

fn load_config_file(path: &Path) -> Result<SimConfig, ArxError> {
    let raw = fs::read_to_string(path)?;
    let config: SimConfig = serde_json::from_str(&raw)?;
    Ok(config)
}

fn print_help() {
    println!("Usage: cargo run --bin arx_step_response -- [--config path/to/config.json]");
    println!("If config.json exists in the current directory, it is loaded automatically.");
    println!("Otherwise the built-in unit-step configuration is used.");
}
