use clap::Parser;
use cryptoboard::{run_server, Dataset, ServerConfig, DEFAULT_ENGINE_CONFIG};
use log::{error, info};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cryptoboard-server")]
#[command(about = "Serves news dashboard statistics over HTTP")]
#[command(version)]
struct Args {
    /// Directory containing articles.csv and word_counts.csv
    #[arg(long, env = "CRYPTOBOARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Articles CSV file (overrides --data-dir)
    #[arg(long, env = "CRYPTOBOARD_ARTICLES")]
    articles: Option<PathBuf>,

    /// Word counts CSV file (overrides --data-dir)
    #[arg(long, env = "CRYPTOBOARD_WORD_COUNTS")]
    word_counts: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "CRYPTOBOARD_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for web server
    #[arg(short, long, env = "CRYPTOBOARD_PORT", default_value = "8000")]
    port: u16,

    /// Additional stopword excluded from article top words (repeatable)
    #[arg(long = "stop-word")]
    stop_words: Vec<String>,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig {
            host: self.host,
            port: self.port,
            ..ServerConfig::default()
        };

        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }
        if let Some(articles) = &self.articles {
            config.articles_path = articles.clone();
        }
        if let Some(word_counts) = &self.word_counts {
            config.word_counts_path = word_counts.clone();
        }

        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();
    let server_config = args.server_config();

    // The dataset must be fully loaded before the listener is bound
    let dataset = match Dataset::from_paths(
        &server_config.articles_path,
        &server_config.word_counts_path,
    ) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    let engine_config = DEFAULT_ENGINE_CONFIG
        .clone()
        .with_extra_stop_words(&args.stop_words);

    info!(
        "Using {} stopwords for article top words",
        engine_config.stop_words.len()
    );

    run_server(dataset, engine_config, &server_config).await?;

    Ok(())
}
