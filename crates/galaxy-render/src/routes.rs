//! Route table mapping request paths to pages.

use std::path::PathBuf;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Portfolio,
    Contact,
    NotFound,
}

impl Page {
    /// Every page the static build writes.
    pub const ALL: [Page; 4] = [Page::Home, Page::Portfolio, Page::Contact, Page::NotFound];

    /// Pages linked from the header navigation.
    pub const NAV: [Page; 3] = [Page::Home, Page::Portfolio, Page::Contact];

    /// Resolve a root-relative request path. Query strings are ignored.
    pub fn resolve(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix("index.html").unwrap_or(path);

        match path.trim_matches('/') {
            "" => Page::Home,
            "portfolio" => Page::Portfolio,
            "contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// Identifier used in element ids and the `data-page` hook.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Portfolio => "portfolio",
            Page::Contact => "contact",
            Page::NotFound => "not-found",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Portfolio => "Portfolio",
            Page::Contact => "Contact",
            Page::NotFound => "Page not found",
        }
    }

    /// Template used to render this page.
    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::Portfolio => "portfolio.html",
            Page::Contact => "contact.html",
            Page::NotFound => "not_found.html",
        }
    }

    /// URL of the page under `base_url`. The not-found page has no URL of its own.
    pub fn url(&self, base_url: &str) -> Option<String> {
        match self {
            Page::Home => Some(base_url.to_string()),
            Page::Portfolio | Page::Contact => Some(format!("{}{}/", base_url, self.id())),
            Page::NotFound => None,
        }
    }

    /// Root-relative request paths served as this page: bare, with a trailing slash,
    /// and with `index.html`.
    pub fn route_paths(&self) -> Vec<String> {
        match self {
            Page::Home => vec!["/".to_string(), "/index.html".to_string()],
            Page::Portfolio | Page::Contact => vec![
                format!("/{}", self.id()),
                format!("/{}/", self.id()),
                format!("/{}/index.html", self.id()),
            ],
            Page::NotFound => Vec::new(),
        }
    }

    /// Output file relative to the build directory.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Page::Home => PathBuf::from("index.html"),
            Page::Portfolio | Page::Contact => PathBuf::from(self.id()).join("index.html"),
            Page::NotFound => PathBuf::from("404.html"),
        }
    }

    /// Header call-to-action: label, target and whether it is the secondary style.
    pub fn call_to_action(&self) -> Option<(&'static str, Page, bool)> {
        match self {
            Page::Home => Some(("View work", Page::Portfolio, false)),
            Page::Portfolio => Some(("Request a quote", Page::Contact, false)),
            Page::Contact => Some(("View work", Page::Portfolio, true)),
            Page::NotFound => None,
        }
    }
}
