//! Static site build command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use galaxy_render::{BuildConfig, StaticBuilder};

use crate::config::Config;

/// Run the build command.
pub async fn run(config: &Config, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let build_config = build_config(config, output, minify);

    let result = StaticBuilder::new(build_config)
        .build()
        .await
        .context("Build failed")?;

    tracing::info!(
        "Built {} pages and copied {} public files in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

fn build_config(config: &Config, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
    BuildConfig {
        content_dir: config.site.content.clone(),
        public_dir: config.site.public.clone(),
        output_dir: output.unwrap_or_else(|| config.site.output.clone()),
        minify: minify.unwrap_or(config.build.minify),
        base_url: config.site.base_url.clone(),
        title: config.site.title.clone(),
        site_url: config.site.site_url.clone(),
    }
}
