//! My Portfolio - Personal CV
//!
//! Renders a personal portfolio/CV in the terminal or serves it as a
//! single-page site.

// Use the library crate for all modules
use my_portfolio::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
        )
        .init();

    // Run CLI
    cli::run().await
}
