mod export;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "expodir")]
#[command(about = "Export the exhibitor directory and profile slices to CSV")]
struct Cli {
    /// Output file; overrides `EXPODIR_OUTPUT_PATH`.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Only visit these directory letters, e.g. `abc`. Defaults to a..z.
    #[arg(long, value_parser = parse_letters)]
    letters: Option<Letters>,

    /// Print what would be fetched and exit without any network I/O.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Letters(Vec<char>);

/// Lower-cases, keeps first occurrence order, and rejects anything but ASCII letters.
fn parse_letters(raw: &str) -> Result<Letters, String> {
    let mut letters: Vec<char> = Vec::new();
    for c in raw.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(format!("'{c}' is not an ASCII letter"));
        }
        let c = c.to_ascii_lowercase();
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    if letters.is_empty() {
        return Err("at least one letter is required".to_owned());
    }
    Ok(Letters(letters))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = expodir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(output) = cli.output {
        config.output_path = output;
    }
    let letters = cli
        .letters
        .map_or_else(expodir_scraper::default_letters, |l| l.0);

    if cli.dry_run {
        let keys: String = letters.iter().collect();
        println!(
            "dry-run: would fetch {} directory letters [{keys}] from {} and write {}",
            letters.len(),
            config.api_base_url,
            config.output_path.display()
        );
        return Ok(());
    }

    run(&config, &letters).await
}

/// Fetches everything for `letters` and writes the export file.
///
/// Individual fetch failures are logged and skipped. Only client construction
/// and writing the output file are fatal.
async fn run(config: &expodir_core::AppConfig, letters: &[char]) -> anyhow::Result<()> {
    let client = expodir_scraper::ExpoClient::new(config)
        .map_err(|e| anyhow::anyhow!("failed to build exhibitor API client: {e}"))?;

    tracing::info!(
        base_url = %config.api_base_url,
        letters = letters.len(),
        "starting exhibitor export"
    );

    let report = expodir_scraper::harvest(
        &client,
        letters,
        Duration::from_millis(config.inter_exhibitor_delay_ms),
    )
    .await;

    tracing::info!(
        letters = report.letters_visited,
        empty_letters = report.empty_letters,
        exhibitors = report.exhibitors,
        skipped_without_id = report.skipped_without_id,
        without_slices = report.without_slices,
        rows = report.rows.len(),
        "harvest finished"
    );

    export::write_rows(&config.output_path, &report.rows).with_context(|| {
        format!(
            "failed to write export file {}",
            config.output_path.display()
        )
    })?;

    println!(
        "Saved {} records to {}",
        report.rows.len(),
        config.output_path.display()
    );
    Ok(())
}
