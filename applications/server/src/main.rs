/// Noor Server - audio proxy and reading-content API
use anyhow::Context;
use clap::{Parser, Subcommand};
use noor_core::{proxied_url, AudioResolver, ReciterRegistry, VerseKey};
use noor_server::{
    api::audio::AUDIO_PROXY_PATH, config::ServerConfig, create_router, state::AppState,
};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "noor-server")]
#[command(about = "Noor Recite audio proxy and content server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the available reciters
    Reciters,
    /// Print the audio URL for a verse
    Resolve {
        /// Reciter id
        reciter: String,
        /// Verse key, e.g. 2:255 (verse 0 is the opening formula)
        verse_key: String,
        /// Print the same-origin proxy path instead of the upstream URL
        #[arg(long)]
        proxied: bool,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noor_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Reciters => {
            list_reciters();
        }
        Commands::Resolve {
            reciter,
            verse_key,
            proxied,
            config,
        } => {
            resolve(&reciter, &verse_key, proxied, config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Noor Server");
    tracing::info!("Content API: {}", config.upstream.content_api_base);
    tracing::info!("Audio base: {}", config.upstream.audio_base_url);

    let app_state = AppState::from_config(&config).await?;
    if app_state.tafsir.is_empty() {
        tracing::warn!("Serving without tafsir; every lookup will return 404");
    }

    let app = create_router(app_state);
    let addr = config.socket_addr()?;

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn list_reciters() {
    let registry = ReciterRegistry::default();

    println!("Reciters:");
    for reciter in registry.iter() {
        println!(
            "  {} - {} ({})",
            reciter.id, reciter.display_name, reciter.audio_path_segment
        );
    }
}

fn resolve(
    reciter: &str,
    verse_key: &str,
    proxied: bool,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = ServerConfig::load_from(config_path.as_deref())?;
    let resolver = AudioResolver::new(
        &config.upstream.audio_base_url,
        Arc::new(ReciterRegistry::default()),
    )?;

    let key: VerseKey = verse_key.parse()?;
    let url = resolver
        .resolve(reciter, key)
        .with_context(|| format!("No recitation of {key} from reciter {reciter}"))?;

    if proxied {
        println!("{}", proxied_url(AUDIO_PROXY_PATH, &url));
    } else {
        println!("{url}");
    }

    Ok(())
}
