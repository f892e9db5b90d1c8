use crate::cli::args::Cli;
use crate::error::{ConversionError, Result};
use crate::processors::{ConversionSummary, FileConverter};
use crate::utils::progress::ProgressReporter;
use tracing::{debug, warn};

pub fn run(cli: Cli) -> Result<ConversionSummary> {
    let options = cli.conversion_options()?;
    debug!(
        "Converting {} with layout {}",
        cli.input.display(),
        options.layout
    );

    let converter = FileConverter::new(options);

    let summary = if cli.input.is_dir() {
        let files = FileConverter::find_ukoa_files(&cli.input)?;
        if files.is_empty() {
            warn!("No .uko files found in {}", cli.input.display());
        }

        let progress =
            ProgressReporter::new(files.len() as u64, "Converting UKOA files...", cli.quiet);
        let summary = converter.convert_files(&files, &progress)?;
        progress.finish_with_message("Conversion complete");
        summary
    } else {
        converter.convert_path(&cli.input, &ProgressReporter::plain(cli.quiet))?
    };

    if !cli.quiet {
        println!("{}", summary.summary());
    }

    Ok(summary)
}

/// Set up structured logging on stderr
pub fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = cli.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ukoa_converter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| ConversionError::Config(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
