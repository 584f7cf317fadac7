//! Loading site content from a content directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::catalog::{builtin_items, PortfolioItem};
use crate::site::Site;

/// Everything the pages render.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub site: Site,
    pub portfolio: Vec<PortfolioItem>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            site: Site::default(),
            portfolio: builtin_items(),
        }
    }
}

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid YAML in {path}: {message}")]
    InvalidYaml { path: String, message: String },

    #[error("Duplicate portfolio id: {0}")]
    DuplicateId(String),

    #[error("Portfolio item with empty id: {0}")]
    EmptyId(String),
}

impl Content {
    pub const SITE_FILE: &'static str = "site.yaml";
    pub const PORTFOLIO_FILE: &'static str = "portfolio.yaml";

    /// Load content from `dir`, falling back to the built-in copy for missing files.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        let mut content = Content::default();

        if let Some(site) = read_yaml::<Site>(&dir.join(Self::SITE_FILE))? {
            content.site = site;
        }

        if let Some(portfolio) = read_yaml::<Vec<PortfolioItem>>(&dir.join(Self::PORTFOLIO_FILE))? {
            check_ids(&portfolio)?;
            content.portfolio = portfolio;
        }

        Ok(content)
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ContentError> {
    if !path.exists() {
        return Ok(None);
    }

    let source = fs::read_to_string(path).map_err(|e| ContentError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_yaml::from_str(&source)
        .map(Some)
        .map_err(|e| ContentError::InvalidYaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn check_ids(items: &[PortfolioItem]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(ContentError::EmptyId(item.title.clone()));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ContentError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_uses_builtin_content() {
        let temp = tempdir().unwrap();

        let content = Content::load(&temp.path().join("nope")).unwrap();

        assert_eq!(content, Content::default());
    }

    #[test]
    fn loads_portfolio_override() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("portfolio.yaml"),
            r#"
- id: deck-01
  title: Pantry wall
  category: Cabinets
  location: Calgary
  details: [Floor-to-ceiling, Pull-outs]
  image: /images/pantry.jpg
- id: tops-09
  title: Granite island
  category: Countertops
  location: Airdrie
"#,
        )
        .unwrap();

        let content = Content::load(temp.path()).unwrap();

        assert_eq!(content.portfolio.len(), 2);
        assert_eq!(content.portfolio[0].details, vec!["Floor-to-ceiling", "Pull-outs"]);
        assert_eq!(content.portfolio[0].image.as_deref(), Some("/images/pantry.jpg"));
        assert_eq!(content.portfolio[1].category, Category::Countertops);
        assert!(content.portfolio[1].details.is_empty());
        assert_eq!(content.site, Site::default());
    }

    #[test]
    fn loads_site_override() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("site.yaml"), "name: Nebula Renovations\nsuffix: \"\"\n")
            .unwrap();

        let content = Content::load(temp.path()).unwrap();

        assert_eq!(content.site.full_name(), "Nebula Renovations");
        assert_eq!(content.portfolio.len(), 6);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("portfolio.yaml"),
            r#"
- { id: a, title: One, category: Cabinets, location: Home }
- { id: a, title: Two, category: Basements, location: Home }
"#,
        )
        .unwrap();

        let result = Content::load(temp.path());

        assert!(matches!(result, Err(ContentError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn rejects_unknown_category() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("portfolio.yaml"),
            "- { id: a, title: One, category: Roofing, location: Home }\n",
        )
        .unwrap();

        let result = Content::load(temp.path());

        assert!(matches!(result, Err(ContentError::InvalidYaml { .. })));
    }
}
