//! Development server command.

use anyhow::{Context, Result};
use galaxy_server::{DevServer, DevServerConfig};

use crate::config::Config;

/// Run the dev server.
pub async fn run(config: &Config, port: Option<u16>, open: bool) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    tracing::info!("Starting development server on port {}", port);

    let server_config = DevServerConfig {
        content_dir: config.site.content.clone(),
        public_dir: config.site.public.clone(),
        port,
        host: config.server.host.clone(),
        title: config.site.title.clone(),
        open,
    };

    DevServer::new(server_config)
        .start()
        .await
        .context("Development server failed")?;

    Ok(())
}
