//! Wayfinder CLI
//!
//! Trip distance and duration calculator backed by the GraphHopper
//! Directions API.

mod interactive;
mod table;

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use application::{RoutePlanner, RouteRequest};
use clap::{Parser, Subcommand};
use domain::TravelMode;
use infrastructure::{AppConfig, GraphHopperAdapter, LogFormat, init_logging, telemetry};
use tracing::{debug, warn};

/// Wayfinder CLI
#[derive(Debug, Parser)]
#[command(name = "wayfinder")]
#[command(author, version, about = "Trip distance and duration calculator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./wayfinder.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// GraphHopper API key, overriding the configuration
    #[arg(long, env = "GRAPHHOPPER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute one route and exit
    ///
    /// Example: wayfinder route --from "Santiago, Chile" --to "Mendoza, Argentina" --mode 2
    Route {
        /// Origin place name
        #[arg(short, long)]
        from: String,

        /// Destination place name
        #[arg(short, long)]
        to: String,

        /// Travel mode: 1-5 or car, bike, foot, bus, motorcycle
        #[arg(short, long, default_value = "1")]
        mode: String,

        /// Print the plan as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Prompt for trips until 's' is entered (default)
    Interactive,
}

/// Borrowed arguments of the `route` subcommand
#[derive(Debug)]
struct RouteArgs<'a> {
    from: &'a str,
    to: &'a str,
    mode: &'a str,
    json: bool,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(api_key) = &cli.api_key {
        config.graphhopper = config.graphhopper.with_api_key(api_key.clone());
    }

    Ok(config)
}

/// Build the planner, failing before any request if credentials are unusable
fn build_planner(config: &AppConfig) -> anyhow::Result<RoutePlanner> {
    let client_config = config.graphhopper_client_config()?;
    let adapter = Arc::new(GraphHopperAdapter::new(&client_config)?);
    debug!(base_url = %client_config.base_url, locale = %client_config.locale, "Planner ready");
    Ok(RoutePlanner::new(adapter.clone(), adapter))
}

/// One-shot route: the report (or JSON) goes to `out`, warnings to `err`
///
/// Keeping warnings off `out` leaves `--json` output parseable.
async fn run_route<O: Write, E: Write>(
    planner: &RoutePlanner,
    args: &RouteArgs<'_>,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<()> {
    let selection = TravelMode::from_selector(args.mode);
    if let Some(message) = selection.warning() {
        warn!(input = %args.mode, "Unrecognized travel mode, falling back to car");
        writeln!(err, "{message}")?;
    }

    let request = RouteRequest::new(args.from, args.to, selection.mode)?;
    let plan = planner.plan(&request).await.with_context(|| {
        format!(
            "could not compute the route from {} to {}",
            args.from, args.to
        )
    })?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
    } else {
        writeln!(out, "{}", table::render_plan(&plan))?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let cli_filter = (cli.verbose > 0).then(|| log_filter_from_verbosity(cli.verbose));
    let directive = telemetry::resolve_filter(
        rust_log.as_deref(),
        cli_filter,
        config.logging.filter.as_deref(),
    );
    init_logging(&directive, LogFormat::from_json_flag(config.logging.json))?;

    let planner = build_planner(&config)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Route {
            from,
            to,
            mode,
            json,
        } => {
            let args = RouteArgs {
                from: &from,
                to: &to,
                mode: &mode,
                json,
            };
            run_route(&planner, &args, &mut io::stdout().lock(), &mut io::stderr().lock())
                .await?;
        },

        Commands::Interactive => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            interactive::run(&planner, &mut input, &mut output).await?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use integration_graphhopper::GraphHopperConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn mock_planner(server: &MockServer) -> RoutePlanner {
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{ "hits": [{ "point": { "lat": -33.44, "lng": -70.65 } }] }"#,
            ))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/route"))
            .and(query_param("vehicle", "car"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{ "paths": [{ "distance": 10000.0, "time": 3600000, "instructions": [] }] }"#,
            ))
            .expect(1)
            .mount(server)
            .await;

        let adapter = Arc::new(
            GraphHopperAdapter::new(&GraphHopperConfig::for_testing(&server.uri())).unwrap(),
        );
        RoutePlanner::new(adapter.clone(), adapter)
    }

    async fn route_output(mode: &str, json: bool) -> (String, String) {
        let server = MockServer::start().await;
        let planner = mock_planner(&server).await;
        let args = RouteArgs {
            from: "Santiago",
            to: "Valparaiso",
            mode,
            json,
        };

        let mut out = Vec::new();
        let mut err = Vec::new();
        run_route(&planner, &args, &mut out, &mut err).await.unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn api_key_flag_overrides_config() {
        let cli = parse(&["wayfinder", "--api-key", "from-flag", "interactive"]);
        let config = load_config(&cli).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn planner_requires_key() {
        let mut config = AppConfig::default();
        config.graphhopper.api_key = None;
        let err = build_planner(&config).unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn planner_rejects_placeholder_key() {
        let mut config = AppConfig::default();
        config.graphhopper = config.graphhopper.with_api_key("TU_CLAVE_API_GRAPHHOPPER");
        assert!(build_planner(&config).is_err());
    }

    #[test]
    fn planner_builds_with_key() {
        let mut config = AppConfig::default();
        config.graphhopper = config.graphhopper.with_api_key("abc123");
        assert!(build_planner(&config).is_ok());
    }

    #[tokio::test]
    async fn route_json_is_parseable() {
        let (out, err) = route_output("car", true).await;
        assert!(err.is_empty());

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["origin"], "Santiago");
        assert_eq!(json["destination"], "Valparaiso");
        assert_eq!(json["mode"], "car");
        assert!((json["route"]["distance_km"].as_f64().unwrap() - 10.0).abs() < 1e-9);
        assert!((json["route"]["distance_miles"].as_f64().unwrap() - 6.213_71).abs() < 1e-9);
        assert_eq!(json["route"]["duration"], "01:00:00");
        assert_eq!(json["route"]["narrative"], "");
    }

    #[tokio::test]
    async fn fallback_warning_stays_off_json_output() {
        let (out, err) = route_output("9", true).await;

        assert!(err.contains("Invalid travel mode '9', using 'car' by default"));
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["mode"], "car");
    }

    #[tokio::test]
    async fn route_table_output() {
        let (out, err) = route_output("1", false).await;
        assert!(err.is_empty());
        assert!(out.contains("| Car "));
        assert!(out.contains("| 6.21 "));
        assert!(out.contains("(no instructions)"));
    }

    #[test]
    fn api_key_reads_environment_variable() {
        use clap::CommandFactory;
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "api_key")
            .unwrap();
        assert_eq!(
            arg.get_env(),
            Some(std::ffi::OsStr::new("GRAPHHOPPER_API_KEY"))
        );
    }
}
