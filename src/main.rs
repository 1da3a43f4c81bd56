use clap::Parser;
use housing_stats::utils::{logger, validation::Validate};
use housing_stats::{CliConfig, HousingPipeline, LocalStorage, ReportEngine};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting housing-stats");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::current_dir();
    let pipeline = HousingPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("   {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
