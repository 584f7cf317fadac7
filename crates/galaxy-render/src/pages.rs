//! Page rendering: turns content and page state into HTML.

use std::path::PathBuf;

use galaxy_content::{
    filter_items, CategoryFilter, ContactForm, ContactFormInput, Content, FieldErrors,
    PortfolioItem, Service, RULES,
};
use serde::Serialize;

use crate::routes::Page;
use crate::templates::{CallToAction, Layout, NavItem, TemplateEngine};

/// Options that affect every rendered page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base URL for links and assets, always ending in `/`
    pub base_url: String,

    /// Site title used in `<title>`; defaults to the business name
    pub title: Option<String>,

    /// Include the live reload client script
    pub dev_reload: bool,

    /// Handle contact submissions in the browser; set for static builds, which have
    /// nothing to post to
    pub local_submit: bool,

    /// Directory the site's static files are served from. When set, a hero image that
    /// is not in it renders as a placeholder.
    pub public_dir: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            title: None,
            dev_reload: false,
            local_submit: false,
            public_dir: None,
        }
    }
}

/// Errors that can occur while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render {template}: {message}")]
    Template { template: String, message: String },

    #[error("Failed to serialize page data: {0}")]
    Serialize(String),
}

/// The acknowledgment shown after a contact form passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn submitted() -> Self {
        Self {
            title: "Message ready to send".to_string(),
            description: "This is a static site demo. Your message isn't being sent yet, but \
                          your details are captured in the browser."
                .to_string(),
        }
    }
}

#[derive(Serialize)]
struct LinksPage {
    contact_url: String,
    portfolio_url: String,
    hero_image: Option<String>,
}

#[derive(Serialize)]
struct FilterPill {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Serialize)]
struct PortfolioPage<'a> {
    filters: Vec<FilterPill>,
    active: &'static str,
    items: Vec<&'a PortfolioItem>,
    contact_url: String,
}

#[derive(Serialize)]
struct ServiceOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct ContactPage<'a> {
    action: String,
    values: &'a ContactFormInput,
    errors: &'a FieldErrors,
    services: Vec<ServiceOption>,
    notice: Option<&'a Notice>,
    rules_json: String,
}

/// Renders site pages from loaded content.
pub struct SiteRenderer {
    templates: TemplateEngine,
    content: Content,
    options: RenderOptions,
}

impl SiteRenderer {
    pub fn new(content: Content, options: RenderOptions) -> Self {
        Self {
            templates: TemplateEngine::new(),
            content,
            options,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Swap in freshly loaded content.
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Render a page in its initial state: every portfolio item, an empty contact form.
    pub fn render(&self, page: Page) -> Result<String, RenderError> {
        match page {
            Page::Home => self.render_home(),
            Page::Portfolio => self.render_portfolio(CategoryFilter::All),
            Page::Contact => self.render_contact(&ContactForm::new(), None),
            Page::NotFound => self.render_not_found(),
        }
    }

    pub fn render_home(&self) -> Result<String, RenderError> {
        self.render_template(Page::Home, &self.links())
    }

    /// Render the portfolio narrowed to `filter`.
    pub fn render_portfolio(&self, filter: CategoryFilter) -> Result<String, RenderError> {
        let base = self.portfolio_url();
        let filters = CategoryFilter::ALL
            .into_iter()
            .map(|f| FilterPill {
                label: f.as_str(),
                href: match f {
                    CategoryFilter::All => base.clone(),
                    CategoryFilter::Only(_) => format!("{}?category={}", base, f.as_str()),
                },
                active: f == filter,
            })
            .collect();

        let page = PortfolioPage {
            filters,
            active: filter.as_str(),
            items: filter_items(&self.content.portfolio, filter),
            contact_url: self.contact_url(),
        };

        self.render_template(Page::Portfolio, &page)
    }

    /// Render the contact page for the given form state.
    pub fn render_contact(
        &self,
        form: &ContactForm,
        notice: Option<&Notice>,
    ) -> Result<String, RenderError> {
        let values = form.values();
        let services = Service::ALL
            .into_iter()
            .map(|s| ServiceOption {
                value: s.as_str(),
                label: s.label(),
                selected: s.as_str() == values.service,
            })
            .collect();

        let page = ContactPage {
            action: self.contact_url(),
            values,
            errors: form.errors(),
            services,
            notice,
            rules_json: rules_json()?,
        };

        self.render_template(Page::Contact, &page)
    }

    pub fn render_not_found(&self) -> Result<String, RenderError> {
        self.render_template(Page::NotFound, &self.links())
    }

    fn render_template<P: Serialize>(&self, page: Page, data: &P) -> Result<String, RenderError> {
        let layout = self.layout(page);

        self.templates
            .render_page(page.template(), &layout, &self.content.site, data)
            .map_err(|e| RenderError::Template {
                template: page.template().to_string(),
                message: e.to_string(),
            })
    }

    fn layout(&self, page: Page) -> Layout {
        let base_url = &self.options.base_url;
        let link = |p: Page| NavItem {
            title: p.title().to_string(),
            path: p.url(base_url).unwrap_or_else(|| base_url.clone()),
            active: p == page,
        };

        Layout {
            title: page.title().to_string(),
            site_title: self
                .options
                .title
                .clone()
                .unwrap_or_else(|| self.content.site.full_name()),
            brand: self.content.site.full_name(),
            page: page.id().to_string(),
            base_url: base_url.clone(),
            nav: Page::NAV.into_iter().map(link).collect(),
            cta: page.call_to_action().map(|(title, target, secondary)| CallToAction {
                title: title.to_string(),
                path: target.url(base_url).unwrap_or_else(|| base_url.clone()),
                secondary,
            }),
            footer: Page::NAV
                .into_iter()
                .filter(|p| *p != page)
                .map(link)
                .collect(),
            dev_reload: self.options.dev_reload,
            local_submit: self.options.local_submit,
        }
    }

    fn links(&self) -> LinksPage {
        LinksPage {
            contact_url: self.contact_url(),
            portfolio_url: self.portfolio_url(),
            hero_image: self.hero_image(),
        }
    }

    /// The hero image path, or `None` when it is unset or missing from the public dir.
    fn hero_image(&self) -> Option<String> {
        let path = self.content.site.hero_image.as_str();
        if path.is_empty() {
            return None;
        }

        let remote = path.contains("://") || path.starts_with("data:");
        if let (Some(dir), false) = (&self.options.public_dir, remote) {
            let file = dir.join(path.trim_start_matches('/'));
            if !file.is_file() {
                tracing::debug!("Hero image {} not found, using placeholder", file.display());
                return None;
            }
        }

        Some(path.to_string())
    }

    fn contact_url(&self) -> String {
        Page::Contact
            .url(&self.options.base_url)
            .unwrap_or_default()
    }

    fn portfolio_url(&self) -> String {
        Page::Portfolio
            .url(&self.options.base_url)
            .unwrap_or_default()
    }
}

/// The validation rule table as JSON safe to embed in a `<script>` element.
fn rules_json() -> Result<String, RenderError> {
    let json = serde_json::to_string(&RULES).map_err(|e| RenderError::Serialize(e.to_string()))?;
    Ok(json.replace('<', "\\u003c").replace('>', "\\u003e"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_content::{Category, Field};

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(Content::default(), RenderOptions::default())
    }

    #[test]
    fn renders_every_page() {
        let renderer = renderer();

        for page in Page::ALL {
            let html = renderer.render(page).unwrap();
            assert!(html.contains(&format!(r#"data-page="{}""#, page.id())));
        }
    }

    #[test]
    fn home_shows_services_and_phone() {
        let html = renderer().render_home().unwrap();

        assert!(html.contains("Kitchen Cabinet Renovations"));
        assert!(html.contains("tel:+1-587-703-1010"));
        assert!(html.contains(r#"href="&#x2f;contact&#x2f;""#));
    }

    #[test]
    fn portfolio_lists_only_filtered_items() {
        let html = renderer()
            .render_portfolio(CategoryFilter::Only(Category::Countertops))
            .unwrap();

        assert!(html.contains("card-portfolio-tops-01"));
        assert!(html.contains("card-portfolio-tops-02"));
        assert!(!html.contains("card-portfolio-kitchen-01"));
        assert!(!html.contains("card-portfolio-base-01"));
        assert!(html.contains(r#"href="&#x2f;portfolio&#x2f;?category=Countertops" class="pill active""#));
    }

    #[test]
    fn portfolio_keeps_source_order() {
        let html = renderer().render_portfolio(CategoryFilter::All).unwrap();

        let first = html.find("card-portfolio-kitchen-01").unwrap();
        let second = html.find("card-portfolio-tops-01").unwrap();
        let last = html.find("card-portfolio-base-02").unwrap();
        assert!(first < second && second < last);
    }

    #[test]
    fn empty_filter_shows_empty_state() {
        let mut content = Content::default();
        content
            .portfolio
            .retain(|item| item.category != Category::Basements);
        let renderer = SiteRenderer::new(content, RenderOptions::default());

        let html = renderer
            .render_portfolio(CategoryFilter::Only(Category::Basements))
            .unwrap();

        assert!(!html.contains("card-portfolio-"));
        assert!(html.contains("No projects in this category yet."));
        assert!(!html.contains(r#"data-portfolio-empty data-testid="text-portfolio-empty" hidden"#));
    }

    #[test]
    fn contact_shows_errors_and_values() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "J");
        form.set(Field::Service, "Countertops");
        form.blur(Field::Name);

        let html = renderer().render_contact(&form, None).unwrap();

        assert!(html.contains(r#"data-testid="status-error-name">Please enter your name</div>"#));
        assert!(html.contains(r#"data-testid="status-error-email" hidden></div>"#));
        assert!(html.contains(r#"value="J""#));
        assert!(html.contains(r#"<option value="Countertops" selected>"#));
        assert!(!html.contains("data-toast"));
    }

    #[test]
    fn contact_shows_notice() {
        let notice = Notice::submitted();

        let html = renderer()
            .render_contact(&ContactForm::new(), Some(&notice))
            .unwrap();

        assert!(html.contains("Message ready to send"));
        assert!(html.contains(r#"<option value="Not sure" selected>"#));
    }

    #[test]
    fn embeds_rule_table() {
        let html = renderer().render(Page::Contact).unwrap();

        assert!(html.contains(r#"<script type="application/json" id="contact-rules">[{"field":"name""#));
        assert!(html.contains(r#""kind":"min_length","min":10"#));
    }

    #[test]
    fn footer_links_to_other_pages() {
        let html = renderer().render(Page::Portfolio).unwrap();

        assert!(html.contains("link-footer-home"));
        assert!(html.contains("link-footer-contact"));
        assert!(!html.contains("link-footer-portfolio"));
    }

    #[test]
    fn missing_hero_image_renders_placeholder() {
        let temp = tempfile::tempdir().unwrap();
        let renderer = SiteRenderer::new(
            Content::default(),
            RenderOptions {
                public_dir: Some(temp.path().to_path_buf()),
                ..RenderOptions::default()
            },
        );

        let html = renderer.render(Page::Home).unwrap();
        assert!(html.contains(r#"class="placeholder hero-placeholder""#));
        assert!(!html.contains("galaxy-hero-kitchen.png"));

        let images = temp.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("galaxy-hero-kitchen.png"), "png").unwrap();

        let html = renderer.render(Page::Home).unwrap();
        assert!(html.contains("galaxy-hero-kitchen.png"));
        assert!(!html.contains("hero-placeholder"));
    }

    #[test]
    fn uses_base_url_for_links() {
        let renderer = SiteRenderer::new(
            Content::default(),
            RenderOptions {
                base_url: "/galaxy/".to_string(),
                ..RenderOptions::default()
            },
        );

        let html = renderer.render(Page::Home).unwrap();

        assert!(html.contains(r#"href="&#x2f;galaxy&#x2f;assets/main.css""#));
        assert!(html.contains(r#"href="&#x2f;galaxy&#x2f;portfolio&#x2f;""#));
        assert!(html.contains(r#"src="&#x2f;galaxy&#x2f;images&#x2f;galaxy-hero-kitchen.png""#));
    }
}
