//! netbox-read
//!
//! Drives the provider the way a host would: configure it, pick a data
//! source by type name, hand it a JSON configuration and print the state or
//! the diagnostics. Useful for checking lookups against a live NetBox.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use netbox_client::NetBoxClientTrait;
use netbox_provider::framework::{ConfigureRequest, ConfigureResponse, ReadRequest, ReadResponse};
use netbox_provider::provider::{ProviderConfigureRequest, ProviderConfigureResponse};
use netbox_provider::{Diagnostics, NetBoxProvider, ProviderData, SharedClient};
use serde_json::{Value, json};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Version injected at compile time via NETBOX_READ_VERSION, or "dev"
pub const VERSION: &str = match option_env!("NETBOX_READ_VERSION") {
    Some(v) => v,
    None => "dev",
};

/// Read NetBox objects through the provider's data sources
#[derive(Parser, Debug)]
#[command(name = "netbox-read", version, about, long_about = None)]
struct Args {
    /// Base URL of the NetBox instance
    #[arg(long, env = "NETBOX_SERVER_URL", global = true)]
    server_url: Option<String>,

    /// API token
    #[arg(long, env = "NETBOX_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,

    /// Skip TLS certificate verification. Without the flag the provider
    /// reads NETBOX_INSECURE itself, which only accepts `true`.
    #[arg(long, global = true)]
    insecure: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every data source type name
    List,
    /// Print the schema of a data source as JSON
    Schema {
        /// Data source type name, e.g. `netbox_tenant`
        type_name: String,
    },
    /// Read a data source and print its state as JSON
    Read {
        /// Data source type name, e.g. `netbox_tenant`
        type_name: String,
        /// Data source configuration as a JSON object, e.g. `{"slug": "acme"}`
        #[arg(long, default_value = "{}")]
        config: String,
    },
    /// Check that the API token is accepted
    Check,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn provider_config(args: &Args) -> Value {
    let mut config = json!({
        "server_url": args.server_url,
        "api_token": args.api_token,
    });
    // Unset flags leave the provider's own environment fallback in charge
    if args.insecure {
        config["insecure"] = json!(true);
    }
    config
}

/// Print diagnostics to stderr; `true` when any of them is an error
fn report(diagnostics: &Diagnostics) -> bool {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
    diagnostics.has_error()
}

fn configure(provider: &NetBoxProvider, args: &Args) -> Result<Option<ProviderData>> {
    let req = ProviderConfigureRequest {
        config: provider_config(args),
    };
    let mut resp = ProviderConfigureResponse::default();
    provider.configure(&req, &mut resp);

    if report(&resp.diagnostics) {
        return Ok(None);
    }
    let data = resp
        .provider_data
        .context("provider configured without a client")?;
    Ok(Some(data))
}

async fn run(args: Args) -> Result<ExitCode> {
    let provider = NetBoxProvider::new(VERSION);
    debug!("{} provider {}", provider.type_name(), provider.version());

    match &args.command {
        Command::List => {
            for name in provider.data_source_type_names() {
                println!("{}", name);
            }
        }
        Command::Schema { type_name } => {
            let Some(data_source) = provider.data_source(type_name) else {
                bail!("unknown data source: {}", type_name);
            };
            println!("{}", serde_json::to_string_pretty(&data_source.schema())?);
        }
        Command::Read { type_name, config } => {
            let Some(mut data_source) = provider.data_source(type_name) else {
                bail!("unknown data source: {}", type_name);
            };
            let config: Value = serde_json::from_str(config)
                .with_context(|| format!("--config is not valid JSON: {}", config))?;

            let Some(provider_data) = configure(&provider, &args)? else {
                return Ok(ExitCode::FAILURE);
            };
            let mut configured = ConfigureResponse::default();
            data_source.configure(
                &ConfigureRequest {
                    provider_data: Some(provider_data),
                },
                &mut configured,
            );
            if report(&configured.diagnostics) {
                return Ok(ExitCode::FAILURE);
            }

            let mut resp = ReadResponse::default();
            data_source.read(&ReadRequest::new(config), &mut resp).await;
            if report(&resp.diagnostics) {
                return Ok(ExitCode::FAILURE);
            }
            let state = resp.state.unwrap_or(Value::Null);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Check => {
            let Some(provider_data) = configure(&provider, &args)? else {
                return Ok(ExitCode::FAILURE);
            };
            let client = provider_data
                .downcast_ref::<SharedClient>()
                .context("provider data does not hold a NetBox client")?;
            client
                .validate_token()
                .await
                .with_context(|| format!("token rejected by {}", client.base_url()))?;
            info!("Token accepted by {}", client.base_url());
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging();
    run(Args::parse()).await
}
