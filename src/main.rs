use contact_dedupe::config::Settings;
use contact_dedupe::core::{count_accuracy_levels, Matcher};
use contact_dedupe::models::{AccuracySummary, MatchReport, ScoringWeights};
use contact_dedupe::services::{load_contacts, print_report, write_report};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Contact count at which the parallel pair-scoring path kicks in unless
/// overridden in configuration.
const DEFAULT_PARALLEL_CUTOFF: usize = 1000;

fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration (logging is not up yet, so failures go to stderr)
    let settings = Settings::load()
        .unwrap_or_else(|e| panic!("Configuration error: {}", e));

    // Initialize logging; environment variables win over the config file
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting contact-dedupe batch run...");

    // The command-line path wins over the configured default
    let input_path = match std::env::args().nth(1).or_else(|| settings.input.path.clone()) {
        Some(path) => path,
        None => {
            error!("No input file given; pass a path or set input.path in config");
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "missing input path",
            ));
        }
    };

    let contacts = load_contacts(&input_path).map_err(|e| {
        error!("Failed to load contacts from {}: {}", input_path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!("Loaded {} contacts from {}", contacts.len(), input_path);

    // Initialize matcher with configured weights
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let cutoff = settings
        .matching
        .parallel_cutoff
        .unwrap_or(DEFAULT_PARALLEL_CUTOFF);
    let parallel = settings
        .matching
        .parallel
        .unwrap_or(contacts.len() >= cutoff);

    let matches = if parallel {
        info!("Scoring pairs in parallel ({} contacts)", contacts.len());
        matcher.find_possible_matches_parallel(&contacts)
    } else {
        matcher.find_possible_matches(&contacts)
    };

    let counts = count_accuracy_levels(&matches);
    let summary = AccuracySummary::from(&counts);

    info!(
        "Found {} possible duplicates (high: {}, medium: {}, low: {})",
        matches.len(),
        summary.high,
        summary.medium,
        summary.low
    );

    let report = MatchReport::new(contacts.len(), matches, summary);

    let result = match settings.report.path.as_deref() {
        Some(path) => write_report(&report, path, settings.report.pretty),
        None => print_report(&report, settings.report.pretty),
    };

    result.map_err(|e| {
        error!("Failed to write report: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    Ok(())
}
