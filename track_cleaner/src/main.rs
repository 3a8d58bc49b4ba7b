use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use track_cleaner::{
    config::{CleanConfig, OutputMode, DEFAULT_MAX_SPEED},
    run,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "track_cleaner")]
#[command(about = "Removes GPS points that imply an impossible travel speed", long_about = None)]
struct Cli {
    /// CSV file of `latitude, longitude, timestamp` rows, or a GPX file
    input: PathBuf,
    /// Print the cleaned points, or save them to <input>_clean next to the input
    output: OutputMode,
    /// Points reached at or above this speed (mph) are dropped
    #[arg(long, env = "TRACK_CLEANER_MAX_SPEED", default_value_t = DEFAULT_MAX_SPEED)]
    max_speed: f64,
    /// The CSV input starts with a header row
    #[arg(long)]
    headers: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<CleanConfig> {
        Ok(CleanConfig::new(self.input, self.output, self.max_speed)?.with_headers(self.headers))
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so printed points are all that ends up on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info,track_cleaner_lib=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Cli::parse().into_config()?;

    let stdout = std::io::stdout();
    let summary = run(&config, stdout.lock())
        .with_context(|| format!("Failed to clean {}", config.input_path.display()))?;

    if let Some(path) = summary.saved_to {
        println!("File saved to {}", path.display());
    }

    Ok(())
}
