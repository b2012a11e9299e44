use std::path::PathBuf;
use std::process::ExitCode;

use axum::http::Uri;
use clap::{Parser, Subcommand};

use request_shape::config::{load_config, ObservabilityConfig};
use request_shape::http::ShapeResponse;
use request_shape::negotiation::negotiate;
use request_shape::observability::logging;
use request_shape::routing::{resolve, KnownResourceNames};

#[derive(Parser)]
#[command(name = "shape-cli")]
#[command(about = "Offline tools for the request-shape resolver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request target and print its shape as JSON
    Resolve {
        /// Request target, e.g. "/app/users/42.json?page=2"
        target: String,

        /// Known resource types, comma separated
        #[arg(short, long, value_delimiter = ',')]
        resources: Vec<String>,

        /// Context prefix stripped before resolution
        #[arg(long, default_value = "")]
        context: String,

        /// Read context prefix and resource types from a config file instead
        #[arg(long, conflicts_with_all = ["resources", "context"])]
        config: Option<PathBuf>,

        /// Accept header value
        #[arg(long)]
        accept: Option<String>,

        /// Content-Type header value
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Load and validate a configuration file
    CheckConfig {
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig {
        log_level: "warn".to_string(),
        ..ObservabilityConfig::default()
    });

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Resolve {
            target,
            resources,
            context,
            config,
            accept,
            content_type,
        } => {
            let (context, known) = match config {
                Some(path) => {
                    let config = load_config(&path)?;
                    let known = config.resolver.known_resource_names();
                    (config.resolver.context_path, known)
                }
                None => (context, KnownResourceNames::new(resources)),
            };

            let uri: Uri = target.parse()?;
            let parsed = resolve(uri.path(), uri.query(), &context, &known)?;
            let negotiated = negotiate(
                parsed.extension_format(),
                accept.as_deref(),
                content_type.as_deref(),
            )?;

            let shape = ShapeResponse::new(parsed, negotiated);
            println!("{}", serde_json::to_string_pretty(&shape)?);
        }
        Commands::CheckConfig { path } => {
            let config = load_config(&path)?;
            println!(
                "{}: ok ({} resource names, context path {:?})",
                path.display(),
                config.resolver.resource_names.len(),
                config.resolver.context_path
            );
        }
    }
    Ok(())
}
