use anyhow::{bail, Context};
use copybench::config::{AppConfig, ConfigManager};
use copybench::reporting::{ConsoleReporter, LogReporter};
use copybench::runner::run_config;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let manager = match args.get(1).map(|s| s.as_str()) {
        Some("--write-default") => {
            let Some(path) = args.get(2) else {
                bail!("usage: copybench --write-default <PATH>");
            };
            ConfigManager::new(AppConfig::copy_task())?
                .save_to_file(path)
                .with_context(|| format!("writing default config to {}", path))?;
            println!("Wrote default configuration to {}", path);
            return Ok(());
        }
        Some(path) => ConfigManager::load_from_file(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => ConfigManager::new(AppConfig::copy_task())?,
    };
    let config = manager.get().clone();

    let mut observer = (
        ConsoleReporter::new(config.reporting.console),
        LogReporter::new(config.reporting.log_every),
    );
    let report = run_config(&config, &mut observer).context("running copy task")?;

    println!(
        "{}: {} training trials, final running error {:.4}, held-out sequence accuracy {:.4}",
        report.predictor,
        report.training_trials,
        report.final_running_error,
        report.held_out_metrics.get("sequence_accuracy").copied().unwrap_or(0.0)
    );

    if let Some(path) = &config.reporting.report_path {
        report
            .write_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}
