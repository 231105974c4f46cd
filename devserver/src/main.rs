//! # Dev Server
//!
//! Thin entry point that delegates to the library for server setup.

use starbot_devserver::{start_server, DevServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = DevServerConfig::from_env();
    config.validate()?;

    start_server(config).await
}
