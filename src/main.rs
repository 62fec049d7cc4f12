use std::path::PathBuf;
use std::process::ExitCode;

use party::config::ServerConfig;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn print_help() {
    println!("Party Planner - families, members and food for the party");
    println!();
    println!("Usage: party-planner [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -p, --port <PORT>        Port to listen on (default: 3000, env PARTY_PORT)");
    println!("  -d, --data-dir <PATH>    Directory holding families.json and food.json (default: data)");
    println!("  -s, --static-dir <PATH>  Directory of UI files to serve (default: public)");
    println!("  -c, --config <PATH>      Party details JSON document served at /api/config");
    println!("  -h, --help               Show this help");
}

fn required_value(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{flag} requires a value"))
}

/// Applies command-line flags on top of the environment configuration.
/// Returns `Ok(None)` when help was requested.
fn apply_args(
    mut config: ServerConfig,
    args: impl IntoIterator<Item = String>,
) -> Result<Option<ServerConfig>, String> {
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" | "-p" => {
                let raw = required_value(&arg, args.next())?;
                config.port = raw
                    .parse()
                    .map_err(|e| format!("Invalid port '{raw}': {e}"))?;
            }
            "--data-dir" | "-d" => {
                config.data_dir = PathBuf::from(required_value(&arg, args.next())?);
            }
            "--static-dir" | "-s" => {
                config.static_dir = PathBuf::from(required_value(&arg, args.next())?);
            }
            "--config" | "-c" => {
                config.party_file = Some(PathBuf::from(required_value(&arg, args.next())?));
            }
            "--help" | "-h" => return Ok(None),
            other => {
                return Err(format!(
                    "Unknown argument: {other}\nUse --help for usage information."
                ))
            }
        }
    }

    Ok(Some(config))
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match apply_args(config, std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };

    match party::server::start_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
