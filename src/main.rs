use std::{net::IpAddr, path::PathBuf};

use clap::{ArgAction, Parser};
use satisfactory_save_server::{
    adapters::router::create_router,
    domain::config::server::{ServerConfig, DEFAULT_IP, DEFAULT_PORT},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "satisfactory-save-server",
    about = "HTTP server to list Satisfactory saves and link to download or view them in satisfactory calculator.",
    version,
    disable_version_flag = true
)]
struct Cli {
    /// Directory holding the .sav files
    save_directory: Option<PathBuf>,
    /// The ip address to listen on for HTTP requests
    #[arg(short, long, default_value_t = DEFAULT_IP)]
    ip: IpAddr,
    /// The port to listen on for HTTP requests
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Print the current version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match ServerConfig::new(cli.save_directory, cli.ip, cli.port) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed run");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let router = create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind to port");

    tracing::info!(
        "Serving saves from {} on {}",
        config.save_dir.display(),
        config.bind_addr()
    );

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
