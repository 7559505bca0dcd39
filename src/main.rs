mod config;

/// Version injected at compile time via DBAAS_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("DBAAS_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{Config, OutputFormat};
use dbaas::resource::{delete_resource, get_resource, list_resource, RESOURCE_KEYS};
use dbaas::{DbaasClient, DbaasError};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Environment variable holding the API token
const TOKEN_ENV: &str = "DBAAS_TOKEN";

/// Command-line client for the DBaaS API
#[derive(Parser, Debug)]
#[command(name = "dbaasctl", version = VERSION, about, long_about = None)]
struct Args {
    /// DBaaS API endpoint (overrides config and DBAAS_ENDPOINT)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// API token (falls back to DBAAS_TOKEN)
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Log level for debugging
    #[arg(long, global = true, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Run in read-only mode (block all write operations)
    #[arg(long, global = true)]
    readonly: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known resource keys
    Resources,
    /// List a resource
    List {
        resource: String,
        /// Filter as key=value, repeatable
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Show a single resource
    Get { resource: String, id: String },
    /// Delete a single resource
    Delete { resource: String, id: String },
    /// Manage the local configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Persist the API endpoint
    SetEndpoint { url: String },
    /// Print the configuration
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn parse_filter(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", raw)),
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Cannot open log file {:?}: {}", log_path, err);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("dbaasctl {} started with log level: {:?}", VERSION, level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("dbaas").join("dbaasctl.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".dbaas").join("dbaasctl.log");
    }
    PathBuf::from("dbaasctl.log")
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("Error: {}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// API errors get their short user message, everything else its context chain
fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<DbaasError>() {
        Some(api_err) => api_err.user_message(),
        None => format!("{:#}", err),
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load();
    let format = args
        .output
        .or(config.output)
        .unwrap_or(OutputFormat::Json);

    match &args.command {
        Command::Resources => {
            for key in RESOURCE_KEYS {
                println!("{}", key);
            }
            Ok(())
        },
        Command::List { resource, filters } => {
            let client = build_client(&args, &config)?;
            let value = list_resource(&client, resource, filters).await?;
            print_output(&value, format)
        },
        Command::Get { resource, id } => {
            let client = build_client(&args, &config)?;
            let value = get_resource(&client, resource, id).await?;
            print_output(&value, format)
        },
        Command::Delete { resource, id } => {
            if args.readonly {
                anyhow::bail!("Read-only mode: refusing to delete {} {}", resource, id);
            }
            let client = build_client(&args, &config)?;
            delete_resource(&client, resource, id).await?;
            eprintln!("Deleted {} {}", resource, id);
            Ok(())
        },
        Command::Config { action } => match action {
            ConfigAction::SetEndpoint { url } => {
                url::Url::parse(url).with_context(|| format!("Invalid endpoint `{}`", url))?;
                config
                    .set_endpoint(url)
                    .context("Failed to save configuration")?;
                eprintln!("Endpoint set to {}", url);
                Ok(())
            },
            ConfigAction::Show => print_output(&config, format),
        },
    }
}

fn build_client(args: &Args, config: &Config) -> Result<DbaasClient> {
    let endpoint = config
        .effective_endpoint(args.endpoint.as_deref())
        .context(
            "No DBaaS endpoint configured. Use --endpoint, `dbaasctl config set-endpoint` or DBAAS_ENDPOINT",
        )?;

    let token = args
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .filter(|token| !token.is_empty())
        .context("No API token. Use --token or DBAAS_TOKEN")?;

    tracing::info!("Using endpoint: {}", endpoint);

    Ok(DbaasClient::new(token, &endpoint)?)
}

fn print_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("status=ACTIVE").unwrap(),
            ("status".to_string(), "ACTIVE".to_string())
        );
        assert_eq!(
            parse_filter("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert!(parse_filter("status").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn test_args_parse_list_with_filters() {
        let args = Args::try_parse_from([
            "dbaasctl",
            "--output",
            "yaml",
            "list",
            "databases",
            "-f",
            "datastore_id=abc",
            "-f",
            "status=ACTIVE",
        ])
        .unwrap();

        assert_eq!(args.output, Some(OutputFormat::Yaml));
        match args.command {
            Command::List { resource, filters } => {
                assert_eq!(resource, "databases");
                assert_eq!(filters.len(), 2);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_describe_error_uses_user_message() {
        let err = anyhow::Error::from(DbaasError::Server {
            status: 502,
            body: "stack trace".to_string(),
            path: "/datastores".to_string(),
        });
        let msg = describe_error(&err);
        assert!(msg.contains("502"));
        assert!(!msg.contains("stack trace"));
    }

    #[test]
    fn test_readonly_blocks_delete() {
        let args = Args::try_parse_from([
            "dbaasctl",
            "--readonly",
            "delete",
            "users",
            "20d7bcf4-f8d6-4bf6-b8f6-46cb440a87f4",
        ])
        .unwrap();

        let err = tokio_test::block_on(run(args)).unwrap_err();
        assert!(err.to_string().contains("Read-only mode"));
    }
}
