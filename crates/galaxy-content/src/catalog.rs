//! Portfolio catalog and category filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category a portfolio project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cabinets,
    Countertops,
    Basements,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Cabinets, Category::Countertops, Category::Basements];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cabinets => "Cabinets",
            Category::Countertops => "Countertops",
            Category::Basements => "Basements",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pre-authored record describing one representative past project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Unique identifier, also used in element ids
    pub id: String,

    /// Project title
    pub title: String,

    /// Project category
    pub category: Category,

    /// Where the work was done
    pub location: String,

    /// Detail bullets, in display order
    #[serde(default)]
    pub details: Vec<String>,

    /// Path of a static image asset; cards without one show a placeholder
    #[serde(default)]
    pub image: Option<String>,
}

/// The category selector on the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable filter, in the order the pills are shown.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Cabinets),
        CategoryFilter::Only(Category::Countertops),
        CategoryFilter::Only(Category::Basements),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether an item passes this filter.
    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a filter name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown portfolio category: {0}")]
pub struct FilterError(pub String);

impl FromStr for CategoryFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CategoryFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FilterError(s.to_string()))
    }
}

/// Narrow `items` to those passing `filter`, keeping source order.
pub fn filter_items(items: &[PortfolioItem], filter: CategoryFilter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// The portfolio shipped with the site.
pub fn builtin_items() -> Vec<PortfolioItem> {
    fn item(
        id: &str,
        title: &str,
        category: Category,
        details: [&str; 3],
    ) -> PortfolioItem {
        PortfolioItem {
            id: id.to_string(),
            title: title.to_string(),
            category,
            location: "Residential".to_string(),
            details: details.iter().map(|d| d.to_string()).collect(),
            image: None,
        }
    }

    vec![
        item(
            "kitchen-01",
            "Warm oak kitchen refresh",
            Category::Cabinets,
            [
                "Shaker doors + soft-close",
                "Trim alignment + clean reveals",
                "Hardware upgrade",
            ],
        ),
        item(
            "tops-01",
            "Quartz counters with waterfall edge",
            Category::Countertops,
            ["Template + install", "Sink cutout", "Edge polish"],
        ),
        item(
            "base-01",
            "Cozy basement family room",
            Category::Basements,
            ["Built-in storage", "Drywall + paint", "Trim finish"],
        ),
        item(
            "kitchen-02",
            "Modern two-tone cabinetry",
            Category::Cabinets,
            ["Upper/lower contrast", "Integrated pulls", "Floating shelves"],
        ),
        item(
            "tops-02",
            "Durable laminate upgrade",
            Category::Countertops,
            ["Budget-friendly", "Clean seams", "Backsplash-ready"],
        ),
        item(
            "base-02",
            "Basement bar + kitchenette",
            Category::Basements,
            ["Cabinet run", "Counter install", "Feature lighting"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(items: &[&PortfolioItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn filters_by_category_in_source_order() {
        let items = builtin_items();

        let visible = filter_items(&items, CategoryFilter::Only(Category::Cabinets));

        assert_eq!(ids(&visible), vec!["kitchen-01", "kitchen-02"]);
        assert!(visible.iter().all(|i| i.category == Category::Cabinets));
    }

    #[test]
    fn all_returns_every_item_unchanged() {
        let items = builtin_items();

        let visible = filter_items(&items, CategoryFilter::All);

        assert_eq!(visible.len(), items.len());
        for (shown, source) in visible.iter().zip(items.iter()) {
            assert_eq!(*shown, source);
        }
    }

    #[test]
    fn category_without_matches_is_empty() {
        let items: Vec<PortfolioItem> = builtin_items()
            .into_iter()
            .filter(|i| i.category != Category::Basements)
            .collect();

        let visible = filter_items(&items, CategoryFilter::Only(Category::Basements));

        assert!(visible.is_empty());
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let mut items = builtin_items();
        items.push(items[0].clone());

        let visible = filter_items(&items, CategoryFilter::Only(Category::Cabinets));

        assert_eq!(ids(&visible), vec!["kitchen-01", "kitchen-02", "kitchen-01"]);
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "countertops".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Countertops))
        );
        assert_eq!(
            " Basements ".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Basements))
        );
        assert_eq!(
            "Decks".parse::<CategoryFilter>(),
            Err(FilterError("Decks".to_string()))
        );
    }

    #[test]
    fn builtin_ids_are_unique() {
        let items = builtin_items();
        let mut seen = std::collections::HashSet::new();

        assert!(items.iter().all(|i| seen.insert(i.id.clone())));
    }
}
