use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_generator::generator::{
    DEFAULT_FILE_NAME, DEFAULT_FLUSH_THRESHOLD, DEFAULT_OUTPUT_DIR, GenerateError,
    GenerateSummary, Generator, GeneratorConfig, RandomOffsets,
};
use route_generator::graphhopper::{
    DEFAULT_ENDPOINT, DEFAULT_LOCALE, GraphHopperClient, GraphHopperConfig, MockRouteClient,
    RouteError,
};
use route_generator::locations::{DEFAULT_LOCATIONS_FILE, JsonFileLocations};

#[derive(Debug, Parser)]
#[command(name = "route-generator", about = "Generate sample routes between location pairs")]
struct Arguments {
    /// GraphHopper route endpoint
    #[arg(long, value_name = "url", default_value = DEFAULT_ENDPOINT)]
    host: String,
    /// Include elevation as a third coordinate dimension
    #[arg(long, value_name = "bool", default_value_t = false, action = clap::ArgAction::Set)]
    elevation: bool,
    /// Locale of turn instructions, e.g. pt_PT or de
    #[arg(long, value_name = "locale", default_value = DEFAULT_LOCALE)]
    locale: String,
    /// Return path geometry as an encoded polyline instead of [lon,lat] arrays
    #[arg(long, value_name = "bool", default_value_t = false, action = clap::ArgAction::Set)]
    points_encoded: bool,
    /// Directory used to store route results
    #[arg(long, value_name = "path", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Name of the file used to store route results
    #[arg(long, value_name = "name", default_value = DEFAULT_FILE_NAME)]
    file: String,
    /// Maximum number of routes to generate
    #[arg(short = 'n', long, value_name = "count", default_value_t = 10, allow_negative_numbers = true)]
    num: i64,
    /// JSON file holding an array of {"lat", "lon"} objects
    #[arg(long, value_name = "path", default_value = DEFAULT_LOCATIONS_FILE)]
    input_file: PathBuf,
    /// Buffered routes per batch write
    #[arg(long, value_name = "count", default_value_t = DEFAULT_FLUSH_THRESHOLD)]
    flush_threshold: usize,
    /// Seed for pair sampling (random if omitted)
    #[arg(long, value_name = "seed")]
    seed: Option<u64>,
    /// Request timeout in seconds (transport default if omitted)
    #[arg(long, value_name = "secs")]
    timeout: Option<u64>,
    /// Generate straight-line routes locally instead of calling GraphHopper
    #[arg(long)]
    mock: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] RouteError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arguments::parse();
    if let Err(e) = run(args).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run(args: Arguments) -> Result<GenerateSummary, CliError> {
    let locations = JsonFileLocations::new(&args.input_file);
    let rng = match args.seed {
        Some(seed) => RandomOffsets::seeded(seed),
        None => RandomOffsets::from_entropy(),
    };
    let config = GeneratorConfig::new(&args.output_dir, &args.file)
        .with_flush_threshold(args.flush_threshold);

    if args.mock {
        info!("Using mock route client");
        let mut generator = Generator::new(MockRouteClient::new(), locations, rng, config);
        return Ok(generator.generate(args.num).await?);
    }

    let mut client_config = GraphHopperConfig::new(&args.host)
        .with_elevation(args.elevation)
        .with_points_encoded(args.points_encoded)
        .with_locale(&args.locale);
    if let Some(secs) = args.timeout {
        client_config = client_config.with_timeout(Duration::from_secs(secs));
    }
    let client = GraphHopperClient::new(client_config)?;

    info!(endpoint = %client.endpoint(), "Requesting routes");
    let mut generator = Generator::new(client, locations, rng, config);
    Ok(generator.generate(args.num).await?)
}
