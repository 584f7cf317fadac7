//! Template engine for rendering site pages.

use galaxy_content::Site;
use minijinja::{context, Environment, Error};
use serde::Serialize;

/// A navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Whether this is the current page
    pub active: bool,
}

/// The header call-to-action button.
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub title: String,
    pub path: String,
    pub secondary: bool,
}

/// Values shared by every page: title, navigation, footer.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    /// Page title
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Brand including the legal suffix
    pub brand: String,
    /// Page identifier
    pub page: String,
    /// Base URL, always ending in `/`
    pub base_url: String,
    /// Header navigation
    pub nav: Vec<NavItem>,
    /// Header button
    pub cta: Option<CallToAction>,
    /// Footer links to the other pages
    pub footer: Vec<NavItem>,
    /// Include the live reload client
    pub dev_reload: bool,
    /// Acknowledge contact submissions in the browser instead of posting them
    pub local_submit: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("built-in templates are valid");
        }

        env.add_filter("asset", asset_url);

        Self { env }
    }

    /// Render a page template.
    pub fn render_page<P: Serialize>(
        &self,
        template: &str,
        layout: &Layout,
        site: &Site,
        page: &P,
    ) -> Result<String, Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            layout => layout,
            site => site,
            page => page,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix root-relative asset paths with the base URL; leave absolute URLs alone.
fn asset_url(path: String, base_url: String) -> String {
    if path.contains("://") || path.starts_with("data:") {
        return path;
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

const TEMPLATES: [(&str, &str); 8] = [
    ("base.html", BASE_TEMPLATE),
    ("header.html", HEADER_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("portfolio.html", PORTFOLIO_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
    ("not_found.html", NOT_FOUND_TEMPLATE),
    ("section_title.html", SECTION_TITLE_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ layout.title }} - {{ layout.site_title }}</title>
  <meta name="description" content="{{ site.tagline }}">
  <link rel="stylesheet" href="{{ layout.base_url }}assets/main.css">
</head>
<body>
  <div class="page bg-aurora" data-page="{{ layout.page }}" data-testid="page-{{ layout.page }}">
    {% block header %}{% include "header.html" %}{% endblock %}
    <main class="container-pad main">
      {% block content %}{% endblock %}
      {% block footer %}{% include "footer.html" %}{% endblock %}
    </main>
  </div>
  <script src="{{ layout.base_url }}assets/main.js"></script>
  {% if layout.dev_reload %}<script src="/__reload.js"></script>{% endif %}
</body>
</html>"##;

const HEADER_TEMPLATE: &str = r##"<header class="container-pad header">
  <nav class="nav" data-testid="nav-{{ layout.page }}">
    <a href="{{ layout.base_url }}" class="brand" data-testid="link-brand">
      <span class="brand-mark">{{ site.mark }}</span>
      <span class="brand-text">
        <span class="brand-name">{{ site.name }}</span>
        <span class="brand-suffix">{{ site.suffix }}</span>
      </span>
    </a>
    <div class="nav-links">
    {% for item in layout.nav %}
      <a href="{{ item.path }}" class="nav-link{% if item.active %} active{% endif %}"{% if item.active %} aria-current="page"{% endif %} data-testid="link-nav-{{ item.title|lower }}">{{ item.title }}</a>
    {% endfor %}
    </div>
    <div class="nav-actions">
      {% if layout.page == "home" %}<a href="#contact" class="nav-quote" data-testid="link-cta-header">Get a quote</a>{% endif %}
      {% if layout.cta %}<a href="{{ layout.cta.path }}" class="button{% if layout.cta.secondary %} button-secondary{% endif %}" data-testid="button-nav-cta">{{ layout.cta.title }}</a>{% endif %}
    </div>
  </nav>
</header>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="footer" data-testid="footer">
  <div class="footer-inner">
    <div>
      <div class="footer-brand" data-testid="text-footer-brand">{{ layout.brand }}</div>
      <div class="footer-tagline" data-testid="text-footer-tagline">{{ site.tagline }}</div>
    </div>
    <div class="footer-links">
    {% for item in layout.footer %}
      <a href="{{ item.path }}" data-testid="link-footer-{{ item.title|lower }}">{{ item.title }}</a>
    {% endfor %}
    </div>
  </div>
</footer>"##;

const SECTION_TITLE_TEMPLATE: &str = r##"<div class="section-title">
  <span class="section-eyebrow" data-testid="text-section-eyebrow">{{ eyebrow }}</span>
  <h2 data-testid="text-section-title">{{ heading }}</h2>
  <p class="muted" data-testid="text-section-subtitle">{{ subtitle }}</p>
</div>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="hero" data-testid="section-hero">
  <div class="hero-copy">
    <span class="badge" data-testid="badge-eyebrow">{{ site.tagline }}</span>
    <h1 data-testid="text-hero-title">{{ site.hero_title }}</h1>
    <p class="muted" data-testid="text-hero-subtitle">{{ site.hero_subtitle }}</p>
    <div class="actions">
      <a href="{{ page.contact_url }}" class="button button-lg" data-testid="button-hero-quote">Request a quote</a>
      <a href="{{ page.portfolio_url }}" class="button button-lg button-secondary" data-testid="button-hero-portfolio">Explore portfolio &rarr;</a>
      <a href="tel:{{ site.phone_link }}" class="phone-link" data-testid="link-hero-phone">{{ site.phone }}</a>
    </div>
    <div class="stats">
    {% for stat in site.stats %}
      <div class="stat" data-testid="card-stat-{{ stat.label }}">
        <div class="stat-label">{{ stat.label }}</div>
        <div class="stat-value">{{ stat.value }}</div>
      </div>
    {% endfor %}
    </div>
    <div class="rating">
      <span class="stars" aria-hidden="true">&#9733;&#9733;&#9733;&#9733;&#9733;</span>
      <span data-testid="text-rating">{{ site.rating }}</span>
    </div>
  </div>
  <div class="hero-media grain">
    {% if page.hero_image %}
    <img src="{{ page.hero_image|asset(layout.base_url) }}" alt="{{ site.hero_image_alt }}" data-testid="img-hero">
    {% else %}
    <div class="placeholder hero-placeholder" role="img" aria-label="{{ site.hero_image_alt }}" data-testid="img-hero"></div>
    {% endif %}
    <div class="hero-caption glass">
      <div class="stat-label">Typical scope</div>
      <div class="stat-value" data-testid="text-hero-scope">{{ site.hero_scope }}</div>
    </div>
  </div>
</section>

<section class="section" data-testid="section-services">
  {% with eyebrow = "Services", heading = "Built around your space", subtitle = "Three core offerings, one standard: clean work, durable materials, and a result that feels intentional." %}
  {% include "section_title.html" %}
  {% endwith %}
  <div class="grid grid-3">
  {% for service in site.services %}
    <article class="card card-surface lift" data-testid="card-service-{{ service.title }}">
      <h3>{{ service.title }}</h3>
      <p class="muted">{{ service.description }}</p>
      <ul class="checks">
      {% for bullet in service.bullets %}
        <li data-testid="row-service-bullet-{{ service.title }}-{{ bullet }}">{{ bullet }}</li>
      {% endfor %}
      </ul>
    </article>
  {% endfor %}
  </div>
</section>

<section class="section cta-band grain" data-testid="section-cta">
  <div>
    <h3 data-testid="text-cta-title">Ready to upgrade your kitchen or basement?</h3>
    <p data-testid="text-cta-subtitle">Tell us what you're building. We'll respond with next steps and a clear path from idea to finish.</p>
  </div>
  <a href="{{ page.contact_url }}" class="button button-lg button-light" data-testid="button-cta-contact">Contact us</a>
</section>

<section id="contact" class="section panel" data-testid="section-mini-contact">
  <div>
    <div class="panel-title" data-testid="text-mini-contact-title">Quick contact</div>
    <div class="muted" data-testid="text-mini-contact-subtitle">Prefer a quick call? We're happy to talk through your project.</div>
  </div>
  <div class="panel-actions">
    <a href="tel:{{ site.phone_link }}" class="phone-link strong" data-testid="link-mini-phone">{{ site.phone }}</a>
    <a href="{{ page.contact_url }}" data-testid="link-mini-contact">Or send a message &rarr;</a>
  </div>
</section>
{% endblock %}"##;

const PORTFOLIO_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="intro">
  <span class="badge" data-testid="text-portfolio-eyebrow">Recent work</span>
  <h1 data-testid="text-portfolio-title">Portfolio</h1>
  <p class="muted" data-testid="text-portfolio-subtitle">A few representative projects across cabinets, countertops, and basement finish outs. (Photos can be added anytime.)</p>
</div>

<section class="filters" data-active="{{ page.active }}" data-testid="section-filters">
{% for pill in page.filters %}
  <a href="{{ pill.href }}" class="pill{% if pill.active %} active{% endif %}" data-filter="{{ pill.label }}" data-testid="button-filter-{{ pill.label }}">{{ pill.label }}</a>
{% endfor %}
</section>

<section class="grid grid-3 section-tight" data-portfolio-grid{% if page.active == "All" %} data-all-items{% endif %} data-testid="section-grid">
{% for item in page.items %}
  <article class="card card-surface portfolio-card" data-category="{{ item.category }}" data-testid="card-portfolio-{{ item.id }}">
    <div class="portfolio-media">
      {% if item.image %}
      <img src="{{ item.image|asset(layout.base_url) }}" alt="{{ item.title }}" data-testid="img-portfolio-{{ item.id }}">
      {% else %}
      <div class="placeholder" data-testid="img-portfolio-{{ item.id }}"></div>
      {% endif %}
      <span class="chip" data-testid="text-portfolio-category-{{ item.id }}">{{ item.category }}</span>
    </div>
    <div class="portfolio-body">
      <div class="location" data-testid="text-portfolio-location-{{ item.id }}">{{ item.location }}</div>
      <h3 data-testid="text-portfolio-item-title-{{ item.id }}">{{ item.title }}</h3>
      <ul class="dots">
      {% for detail in item.details %}
        <li data-testid="row-portfolio-detail-{{ item.id }}-{{ detail }}">{{ detail }}</li>
      {% endfor %}
      </ul>
      <div class="tags">
        <span class="tag">Precision</span>
        <span class="tag">Durable</span>
        <span class="tag">Clean finish</span>
      </div>
    </div>
  </article>
{% endfor %}
</section>
<p class="empty muted" data-portfolio-empty data-testid="text-portfolio-empty"{% if page.items %} hidden{% endif %}>No projects in this category yet.</p>

<section class="section panel panel-center" data-testid="section-portfolio-cta">
  <div class="panel-title" data-testid="text-portfolio-cta-title">Want something like this in your home?</div>
  <p class="muted" data-testid="text-portfolio-cta-subtitle">Share a few details and we'll follow up with next steps.</p>
  <div class="actions actions-center">
    <a href="{{ page.contact_url }}" class="button button-lg" data-testid="button-portfolio-contact">Request a quote</a>
    <a href="{{ layout.base_url }}" class="button button-lg button-secondary" data-testid="button-portfolio-home">Back to home</a>
  </div>
</section>
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% if page.notice %}
<div class="toast" role="status" data-toast data-testid="toast">
  <div class="toast-title">{{ page.notice.title }}</div>
  <div class="toast-body">{{ page.notice.description }}</div>
  <button type="button" class="toast-close" data-toast-close aria-label="Dismiss">&times;</button>
</div>
{% endif %}

<div class="intro">
  <span class="badge" data-testid="text-contact-eyebrow">Get in touch</span>
  <h1 data-testid="text-contact-title">Contact</h1>
  <p class="muted" data-testid="text-contact-subtitle">Tell us what you're planning. We'll reply with next steps and a clear quote.</p>
</div>

<div class="contact-grid">
  <div class="card card-surface contact-form" data-testid="card-contact-form">
    <form method="post" action="{{ page.action }}" novalidate data-contact-form{% if layout.local_submit %} data-local-submit{% endif %}>
      <div class="field-row">
        <div class="field">
          <label for="name" data-testid="label-name">Name</label>
          <input id="name" name="name" value="{{ page.values.name }}" placeholder="Your name" autocomplete="name" data-testid="input-name">
          <div class="field-error" data-error-for="name" data-testid="status-error-name"{% if not page.errors.name %} hidden{% endif %}>{{ page.errors.name }}</div>
        </div>
        <div class="field">
          <label for="email" data-testid="label-email">Email</label>
          <input id="email" name="email" type="email" value="{{ page.values.email }}" placeholder="you@email.com" autocomplete="email" data-testid="input-email">
          <div class="field-error" data-error-for="email" data-testid="status-error-email"{% if not page.errors.email %} hidden{% endif %}>{{ page.errors.email }}</div>
        </div>
      </div>
      <div class="field-row">
        <div class="field">
          <label for="phone" data-testid="label-phone">Phone</label>
          <input id="phone" name="phone" type="tel" value="{{ page.values.phone }}" placeholder="Your phone number" autocomplete="tel" data-testid="input-phone">
          <div class="field-error" data-error-for="phone" data-testid="status-error-phone"{% if not page.errors.phone %} hidden{% endif %}>{{ page.errors.phone }}</div>
        </div>
        <div class="field">
          <label for="service" data-testid="label-service">Service</label>
          <select id="service" name="service" data-testid="select-service">
          {% for option in page.services %}
            <option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
          {% endfor %}
          </select>
          <div class="field-error" data-error-for="service" data-testid="status-error-service"{% if not page.errors.service %} hidden{% endif %}>{{ page.errors.service }}</div>
        </div>
      </div>
      <div class="field">
        <label for="message" data-testid="label-message">Project details</label>
        <textarea id="message" name="message" placeholder="Tell us about your space, timing, materials, and any inspiration links." data-testid="textarea-message">{{ page.values.message }}</textarea>
        <div class="field-error" data-error-for="message" data-testid="status-error-message"{% if not page.errors.message %} hidden{% endif %}>{{ page.errors.message }}</div>
      </div>
      <div class="form-footer">
        <div class="muted small" data-testid="text-form-note">{{ site.response_note }}</div>
        <button type="submit" class="button button-lg" data-testid="button-submit-contact">Send message</button>
      </div>
    </form>
    <script type="application/json" id="contact-rules">{{ page.rules_json|safe }}</script>
  </div>

  <div class="contact-side">
    <div class="card card-surface" data-testid="card-contact-details">
      <div class="panel-title" data-testid="text-details-title">Contact details</div>
      <div class="details">
        <a href="tel:{{ site.phone_link }}" data-testid="link-phone">{{ site.phone }}</a>
        <a href="mailto:{{ site.email }}" data-testid="link-email">{{ site.email }}</a>
      </div>
      <div class="hours">
        <div class="stat-label" data-testid="text-hours-title">Hours</div>
        <div class="stat-value" data-testid="text-hours">{{ site.hours_days }}<br>{{ site.hours_times }}</div>
      </div>
    </div>
    <div class="card card-surface" data-testid="card-contact-faq">
      <div class="panel-title" data-testid="text-faq-title">What to include</div>
      <ul class="bullets">
      {% for entry in site.checklist %}
        <li data-testid="row-faq-{{ loop.index }}">{{ entry }}</li>
      {% endfor %}
      </ul>
    </div>
  </div>
</div>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block header %}{% endblock %}

{% block content %}
<div class="panel not-found">
  <div class="not-found-title" data-testid="text-notfound-title">Page not found</div>
  <p class="muted" data-testid="text-notfound-subtitle">The page you're looking for doesn't exist.</p>
  <div class="actions">
    <a href="{{ layout.base_url }}" class="button button-lg" data-testid="button-notfound-home">Back home</a>
    <a href="{{ page.contact_url }}" class="button button-lg button-secondary" data-testid="button-notfound-contact">Request a quote &rarr;</a>
  </div>
</div>
{% endblock %}

{% block footer %}{% endblock %}"##;
