//! Scaffold a site configuration and editable content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use galaxy_content::Content;

/// Run the init command. Files go next to `config_path`.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing galaxy site...");

    let root = config_path.parent().unwrap_or(Path::new(""));
    scaffold(root, config_path, yes)?;

    tracing::info!(
        "Add a hero image at public{}; the home page shows a placeholder until it exists",
        Content::default().site.hero_image
    );
    tracing::info!("Initialization complete!");
    tracing::info!("Run 'galaxy dev' to start the development server.");

    Ok(())
}

fn scaffold(root: &Path, config_path: &Path, yes: bool) -> Result<()> {
    let content_dir = root.join("content");

    if content_dir.exists() && !yes {
        tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::create_dir_all(&content_dir).context("Failed to create content directory")?;
    fs::create_dir_all(root.join("public").join("images"))
        .context("Failed to create public directory")?;

    write_if_allowed(config_path, DEFAULT_CONFIG, yes)?;

    let defaults = Content::default();

    let site = serde_yaml::to_string(&defaults.site).context("Failed to serialize site")?;
    write_if_allowed(&content_dir.join(Content::SITE_FILE), &site, yes)?;

    let portfolio =
        serde_yaml::to_string(&defaults.portfolio).context("Failed to serialize portfolio")?;
    write_if_allowed(&content_dir.join(Content::PORTFOLIO_FILE), &portfolio, yes)?;

    Ok(())
}

fn write_if_allowed(path: &Path, contents: &str, yes: bool) -> Result<()> {
    if path.exists() && !yes {
        tracing::debug!("Keeping existing {}", path.display());
        return Ok(());
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Galaxy site configuration

[site]
# Page title suffix; defaults to the business name in content/site.yaml
# title = "Galaxy Kitchen Cabinets Ltd."

# Base URL (for deployment under a sub-path)
base_url = "/"

# Origin the site is deployed at; makes sitemap.xml URLs absolute
# site_url = "https://example.com"

# Editable copy and portfolio
content = "content"

# Images and other files copied as-is
public = "public"

# Output directory for built site
output = "dist"

[build]
# Minify CSS
minify = true

[server]
host = "127.0.0.1"
port = 7777
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scaffolds_loadable_content() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");

        scaffold(temp.path(), &config_path, false).unwrap();

        assert!(config_path.exists());
        assert!(temp.path().join("public").join("images").is_dir());

        let content = Content::load(&temp.path().join("content")).unwrap();
        assert_eq!(content, Content::default());
    }

    #[test]
    fn config_template_parses() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, DEFAULT_CONFIG).unwrap();

        let config = crate::config::Config::load(&config_path).unwrap();

        assert_eq!(config.server.port, 7777);
        assert_eq!(config.site.content, temp.path().join("content"));
    }

    #[test]
    fn keeps_existing_content_without_yes() {
        let temp = tempdir().unwrap();
        let content_dir = temp.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("site.yaml"), "name: Mine\n").unwrap();

        scaffold(temp.path(), &temp.path().join("site.toml"), false).unwrap();

        assert_eq!(
            fs::read_to_string(content_dir.join("site.yaml")).unwrap(),
            "name: Mine\n"
        );
        assert!(!temp.path().join("site.toml").exists());
    }

    #[test]
    fn overwrites_with_yes() {
        let temp = tempdir().unwrap();
        let content_dir = temp.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("site.yaml"), "name: Mine\n").unwrap();

        scaffold(temp.path(), &temp.path().join("site.toml"), true).unwrap();

        let content = Content::load(&content_dir).unwrap();
        assert_eq!(content.site, Content::default().site);
    }
}
