use anyhow::Result;
use posts_app::{repl, Config, UreqTransport};
use posts_core::{Controller, PostClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    // RUST_LOG overrides, e.g. RUST_LOG=posts_core=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stderr, so log lines stay out of the rendered page
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "starting posts client");

    let mut controller = Controller::new(PostClient::new(&config.api_url), UreqTransport::new());
    // a failed first load is already logged; the page starts empty
    let _ = controller.mount().await;

    let stdin = std::io::stdin();
    repl::run(&mut controller, stdin.lock(), std::io::stdout()).await
}
