use anyhow::Context;
use clap::Parser;
use kafe_digital::config::{Cli, Command};
use kafe_digital::conversation::Conversation;
use kafe_digital::logging::init_logging;
use kafe_digital::repl::{run_chat, run_demo};
use kafe_digital::router::create_app_router;
use kafe_digital::session::AppState;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    match cli.resolved_command() {
        Command::Chat => {
            let mut conversation = Conversation::default();
            run_chat(&mut conversation, io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Demo => {
            let mut conversation = Conversation::default();
            run_demo(&mut conversation, io::stdout().lock())?;
        }
        Command::Serve(args) => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime.block_on(serve(args.addr))?;
        }
    }

    Ok(())
}

async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "server running");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
