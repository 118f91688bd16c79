//! Careline evaluation entry point
//!
//! Loads settings, loads the golden dataset, runs every fixture through the
//! extractor, and prints the aggregated report as JSON. The process exits 0
//! only when the run verdict passes.

use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use careline_config::{load_settings, Settings};
use careline_eval::{load_dataset, EvaluationHarness};

fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("CARELINE_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!(
                "Loaded configuration from files (env: {})",
                env.as_deref().unwrap_or("default")
            );
            settings
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting careline evaluation v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        mode = ?config.mode,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    // A dataset path on the command line overrides the configured one
    let dataset_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.dataset.path.clone());

    let loaded = load_dataset(Path::new(&dataset_path))?;
    if loaded.cases.is_empty() {
        tracing::error!(
            path = %dataset_path,
            skipped = loaded.skipped_lines,
            "No usable fixtures in dataset, nothing to evaluate"
        );
        std::process::exit(1);
    }

    let trace_extraction = config.observability.trace_extraction || !config.mode.is_live();
    let harness = EvaluationHarness::new(trace_extraction);
    let report = harness.run(&loaded.cases, loaded.skipped_lines);

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.passed() {
        tracing::info!(
            weighted_score = report.weighted_score,
            grade = %report.grade,
            "Evaluation passed"
        );
        Ok(())
    } else {
        tracing::error!(
            weighted_score = report.weighted_score,
            grade = %report.grade,
            passed = report.passed_cases,
            total = report.total_cases,
            "Evaluation failed"
        );
        std::process::exit(1);
    }
}

/// Initialize tracing from config, deferring to RUST_LOG when set
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("careline={},careline_eval={}", level, level).into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
