//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yahoo_ffl::{
    cli::{Commands, DataCmd, Yahoo},
    commands::{
        data::{
            handle_fetch, handle_import, handle_list, handle_path, handle_remove, handle_show,
            FetchTarget,
        },
        resolve_dir,
    },
    yahoo::YahooClient,
    DataConfig, YahooData,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Default to info for our crate when RUST_LOG is not set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yahoo_ffl=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = Yahoo::parse();

    let config = match app.data_dir {
        Some(dir) => DataConfig::new(dir),
        None => DataConfig::from_env(),
    };
    debug!(data_dir = %config.data_dir().display(), "using data directory");
    let data = YahooData::new(config);

    match app.command {
        Commands::Data { cmd } => match cmd {
            DataCmd::Fetch {
                code,
                game_key,
                current,
                resource,
                season,
            } => {
                let client = YahooClient::from_env()?;
                let target = FetchTarget::from_args(game_key, current);
                handle_fetch(&data, &client, code, target, resource, season).await?;
            }

            DataCmd::Import { key, file, dir } => {
                let dir = resolve_dir(&data, &dir);
                handle_import(&data, &key, &file, dir.as_deref())?;
            }

            DataCmd::Show { key, model, dir } => {
                let dir = resolve_dir(&data, &dir);
                handle_show(&data, &key, model, dir.as_deref())?;
            }

            DataCmd::List { dir } => {
                let dir = resolve_dir(&data, &dir);
                handle_list(&data, dir.as_deref())?;
            }

            DataCmd::Remove { key, dir } => {
                let dir = resolve_dir(&data, &dir);
                handle_remove(&data, &key, dir.as_deref())?;
            }

            DataCmd::Path { key, dir } => {
                let dir = resolve_dir(&data, &dir);
                handle_path(&data, &key, dir.as_deref())?;
            }
        },
    }

    Ok(())
}
