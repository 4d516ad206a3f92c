use std::process::ExitCode;

use audio_stats::{AnalysisConfig, SymphoniaLoader, analyze};
use tracing::level_filters::LevelFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = AnalysisConfig::default();
    match analyze(&SymphoniaLoader::new(), &config) {
        Ok(result) => {
            print!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
