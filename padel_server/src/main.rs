use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::prelude::*;

use padel_server::commands::Command;
use padel_server::config;
use padel_server::state::AppState;

#[derive(Parser)]
#[command(about = "Padel tournament management server")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() {
    let config = config::read_config();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging_config))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid host or port in config");

    let state = AppState::new(config).await;

    if let Some(command) = args.command {
        if let Err(err) = command.run(state).await {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let app = padel_server::app_with_state(state).await;

    tracing::info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
