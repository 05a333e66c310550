use std::path::PathBuf;

use clap::{Parser, Subcommand};
use metabase_embed::EmbedUrlBuilder;
use metabase_embed_cli::commands::{self, DisplayArgs, ResourceArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "metabase-embed", version, about = "Signed Metabase embed URLs and iframes")]
struct Cli {
    /// YAML file with a `metabase:` section (default: METABASE_* env vars)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a signed embed URL
    Url {
        #[command(flatten)]
        resource: ResourceArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print an iframe tag for the embed URL
    Iframe {
        #[command(flatten)]
        resource: ResourceArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print only the signed token
    Token {
        #[command(flatten)]
        resource: ResourceArgs,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        let builder = EmbedUrlBuilder::new(config);
        match &cli.command {
            Commands::Url { resource, display } => commands::url(&builder, resource, display),
            Commands::Iframe { resource, display } => commands::iframe(&builder, resource, display),
            Commands::Token { resource } => commands::token(&builder, resource),
        }
    });

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
            std::process::exit(1);
        }
    }
}
