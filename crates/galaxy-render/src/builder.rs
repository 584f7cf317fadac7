//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use galaxy_content::{Content, ContentError};

use crate::assets::AssetPipeline;
use crate::pages::{RenderOptions, SiteRenderer};
use crate::routes::Page;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding `site.yaml` and `portfolio.yaml`
    pub content_dir: PathBuf,

    /// Directory copied verbatim into the output (images and the like)
    pub public_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title; defaults to the business name from content
    pub title: Option<String>,

    /// Origin the site is deployed at, without a trailing `/`. Sitemap entries are
    /// absolute URLs when set and root-relative paths otherwise.
    pub site_url: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            public_dir: PathBuf::from("public"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: None,
            site_url: None,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of public files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    #[error("Failed to render {page}: {message}")]
    RenderError { page: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
}

impl StaticBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let content = Content::load(&self.config.content_dir)?;
        tracing::debug!(
            "Loaded {} portfolio items from {}",
            content.portfolio.len(),
            self.config.content_dir.display()
        );

        create_dir(&self.config.output_dir)?;

        let renderer = SiteRenderer::new(
            content,
            RenderOptions {
                base_url: self.config.base_url.clone(),
                title: self.config.title.clone(),
                dev_reload: false,
                local_submit: true,
                public_dir: Some(self.config.public_dir.clone()),
            },
        );

        // Render and write pages in parallel
        let results: Vec<Result<(), BuildError>> = Page::ALL[..]
            .par_iter()
            .map(|page| self.build_page(&renderer, *page))
            .collect();

        for result in results {
            result?;
        }

        self.generate_assets()?;
        let copied = self.copy_public()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: Page::ALL.len(),
            assets: copied,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn build_page(&self, renderer: &SiteRenderer, page: Page) -> Result<(), BuildError> {
        let html = renderer
            .render(page)
            .map_err(|e| BuildError::RenderError {
                page: page.id().to_string(),
                message: e.to_string(),
            })?;

        let output_path = self.config.output_dir.join(page.output_path());
        if let Some(parent) = output_path.parent() {
            create_dir(parent)?;
        }

        write_file(&output_path, html)?;
        tracing::debug!("Wrote {}", output_path.display());

        Ok(())
    }

    /// Generate the stylesheet and browser script.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        create_dir(&assets_dir)?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Writing unminified CSS: {}", e);
                    css
                }
            }
        } else {
            css
        };
        write_file(&assets_dir.join("main.css"), css)?;

        write_file(&assets_dir.join("main.js"), AssetPipeline::generate_js())?;

        Ok(())
    }

    /// Copy the public directory into the output, returning the number of files copied.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let public_dir = &self.config.public_dir;
        if !public_dir.exists() {
            tracing::debug!("No public directory at {}", public_dir.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }

            fs::copy(path, &target).map_err(|e| BuildError::WriteError {
                path: target.display().to_string(),
                message: e.to_string(),
            })?;
            copied += 1;
        }

        tracing::info!("Copied {} public files", copied);
        Ok(copied)
    }

    /// Generate sitemap.xml and robots.txt.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let origin = self.config.site_url.as_deref().unwrap_or_default();
        if origin.is_empty() {
            tracing::warn!("No site_url configured; sitemap.xml will list relative paths");
        }

        let urls: Vec<String> = Page::NAV
            .iter()
            .filter_map(|page| page.url(&self.config.base_url))
            .map(|url| format!("  <url>\n    <loc>{}{}</loc>\n  </url>", origin, url))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );
        write_file(&self.config.output_dir.join("sitemap.xml"), sitemap)?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}{}sitemap.xml\n",
            origin, self.config.base_url
        );
        write_file(&self.config.output_dir.join("robots.txt"), robots)?;

        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|e| BuildError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_file(path: &Path, contents: String) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|e| BuildError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
