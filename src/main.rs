use anyhow::Result as Fallible;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Fallible<()> {
    // Variables from .env may also configure the logger
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run().await
}
