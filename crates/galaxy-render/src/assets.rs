//! Asset pipeline for CSS and JavaScript processing.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* Galaxy Kitchen Cabinets */

:root {
  --background: hsl(40 33% 98%);
  --foreground: hsl(224 40% 12%);
  --card: hsl(0 0% 100%);
  --muted-foreground: hsl(224 12% 42%);
  --border: hsl(224 20% 88%);
  --primary: hsl(224 58% 22%);
  --primary-foreground: hsl(0 0% 100%);
  --secondary: hsl(40 24% 93%);
  --accent: hsl(204 92% 50%);
  --destructive: hsl(0 72% 48%);
  --radius: 0.75rem;
  --radius-xl: 1.5rem;
  --shadow-sm: 0 1px 2px hsl(224 40% 12% / 0.06);
  --shadow-xl: 0 24px 60px -24px hsl(224 40% 12% / 0.35);
  --font-sans: "Inter", system-ui, -apple-system, sans-serif;
  --font-serif: "Fraunces", Georgia, serif;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

a {
  color: inherit;
}

h1,
h2,
h3,
.panel-title,
.not-found-title {
  font-family: var(--font-serif);
  font-weight: 500;
  letter-spacing: -0.01em;
  line-height: 1.1;
}

h1 {
  font-size: clamp(2.25rem, 5vw, 3.25rem);
}

h2 {
  font-size: clamp(1.875rem, 4vw, 2.25rem);
}

h3 {
  font-size: 1.25rem;
}

.muted {
  color: var(--muted-foreground);
}

.small {
  font-size: 0.75rem;
}

.bg-aurora {
  min-height: 100vh;
  background:
    radial-gradient(900px 400px at 10% -10%, hsl(204 92% 50% / 0.12), transparent 60%),
    radial-gradient(700px 360px at 90% 0%, hsl(224 58% 22% / 0.1), transparent 60%),
    var(--background);
}

.container-pad {
  max-width: 1200px;
  margin: 0 auto;
  padding-left: 1.25rem;
  padding-right: 1.25rem;
}

.main {
  padding-top: 2.5rem;
  padding-bottom: 4rem;
}

/* Header */
.header {
  padding-top: 1.5rem;
}

.nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.brand {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  text-decoration: none;
}

.brand-mark {
  display: grid;
  place-items: center;
  width: 2.25rem;
  height: 2.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  font-family: var(--font-serif);
  font-size: 1.125rem;
  box-shadow: var(--shadow-sm);
}

.brand-text {
  display: flex;
  flex-direction: column;
  line-height: 1.2;
}

.brand-name {
  font-size: 0.875rem;
  font-weight: 600;
}

.brand-suffix {
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  padding: 0.25rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: hsl(0 0% 100% / 0.6);
  backdrop-filter: blur(8px);
}

.nav-link {
  padding: 0.5rem 0.75rem;
  border-radius: 999px;
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
}

.nav-link:hover,
.nav-link.active {
  background: var(--secondary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-quote {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted-foreground);
  text-decoration: none;
}

/* Buttons */
.button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  height: 2.5rem;
  padding: 0 1rem;
  border: 0;
  border-radius: var(--radius);
  background: var(--primary);
  color: var(--primary-foreground);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
  transition: opacity 0.15s, transform 0.15s;
}

.button:hover {
  opacity: 0.92;
}

.button-lg {
  height: 2.75rem;
  padding: 0 1.5rem;
}

.button-secondary {
  background: var(--secondary);
  color: var(--foreground);
}

.button-light {
  background: #fff;
  color: var(--primary);
}

.actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1.75rem;
}

.actions-center {
  justify-content: center;
}

.phone-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted-foreground);
  text-decoration: none;
}

.phone-link.strong {
  color: var(--foreground);
  font-weight: 600;
}

/* Badges and pills */
.badge,
.section-eyebrow {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: hsl(0 0% 100% / 0.7);
  font-size: 0.75rem;
  font-weight: 500;
}

.section-eyebrow {
  border: 0;
  background: var(--secondary);
}

.pill {
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: hsl(0 0% 100% / 0.6);
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  transition: background 0.15s, color 0.15s;
}

.pill:hover {
  background: var(--secondary);
}

.pill.active {
  background: var(--primary);
  color: var(--primary-foreground);
}

/* Hero */
.hero {
  display: grid;
  grid-template-columns: 1fr 1fr;
  align-items: center;
  gap: 2.5rem;
}

.hero h1 {
  margin-top: 1.25rem;
}

.hero-copy > .muted {
  margin-top: 1rem;
  max-width: 36rem;
}

.hero-media {
  position: relative;
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background: var(--card);
  box-shadow: var(--shadow-xl);
}

.hero-media img,
.hero-media .hero-placeholder {
  display: block;
  width: 100%;
  height: 420px;
  object-fit: cover;
}

.hero-caption {
  position: absolute;
  left: 1.25rem;
  right: 1.25rem;
  bottom: 1.25rem;
  padding: 1rem;
  border-radius: 1rem;
}

.glass {
  background: hsl(0 0% 100% / 0.75);
  backdrop-filter: blur(12px);
}

.stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  margin-top: 2rem;
}

.stat {
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: 1rem;
  background: hsl(0 0% 100% / 0.6);
}

.stat-label {
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--muted-foreground);
}

.stat-value {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  font-weight: 600;
}

.rating {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-top: 2rem;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.stars {
  color: hsl(42 96% 54%);
  letter-spacing: 0.1em;
}

/* Sections */
.section {
  margin-top: 5rem;
}

.section-tight {
  margin-top: 2.5rem;
}

.section-title {
  max-width: 42rem;
  margin: 0 auto;
  text-align: center;
}

.section-title h2 {
  margin-top: 1rem;
}

.section-title p {
  margin-top: 0.75rem;
}

.intro {
  max-width: 48rem;
  margin: 0 auto;
  text-align: center;
}

.intro h1 {
  margin-top: 1.25rem;
}

.intro p {
  margin-top: 0.75rem;
}

.grid {
  display: grid;
  gap: 1rem;
}

.grid-3 {
  grid-template-columns: repeat(3, 1fr);
}

.section .grid {
  margin-top: 2.5rem;
}

/* Cards */
.card {
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background: var(--card);
  box-shadow: var(--shadow-sm);
}

.card-surface {
  padding: 1.5rem;
}

.lift {
  transition: transform 0.3s;
}

.lift:hover {
  transform: translateY(-4px);
}

.checks,
.dots,
.bullets {
  list-style: none;
  margin-top: 1.25rem;
  display: grid;
  gap: 0.5rem;
  font-size: 0.875rem;
}

.checks li::before {
  content: "\2713";
  margin-right: 0.5rem;
  color: var(--accent);
}

.dots li::before {
  content: "";
  display: inline-block;
  width: 0.375rem;
  height: 0.375rem;
  margin-right: 0.5rem;
  border-radius: 999px;
  background: var(--accent);
  vertical-align: middle;
}

.bullets li::before {
  content: "\2022";
  margin-right: 0.5rem;
}

/* Portfolio */
.filters {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 2rem;
}

.portfolio-card {
  padding: 0;
  overflow: hidden;
}

.portfolio-media {
  position: relative;
}

.portfolio-media img,
.placeholder {
  display: block;
  width: 100%;
  height: 10rem;
  object-fit: cover;
}

.placeholder {
  background:
    radial-gradient(700px 200px at 10% 20%, hsl(204 92% 50% / 0.18), transparent 55%),
    radial-gradient(600px 220px at 85% 0%, hsl(224 58% 22% / 0.12), transparent 60%),
    linear-gradient(180deg, var(--background), var(--card));
}

.chip {
  position: absolute;
  top: 1rem;
  left: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: hsl(0 0% 100% / 0.7);
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--muted-foreground);
}

.portfolio-body {
  padding: 1.25rem;
}

.location {
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

.portfolio-body h3 {
  margin-top: 0.5rem;
  font-size: 1.125rem;
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1.25rem;
}

.tag {
  padding: 0.25rem 0.5rem;
  border-radius: 999px;
  background: var(--secondary);
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

.empty {
  margin-top: 2rem;
  text-align: center;
}

[hidden] {
  display: none !important;
}

/* Panels and call to action */
.panel {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background: hsl(0 0% 100% / 0.6);
}

.panel-center {
  flex-direction: column;
  max-width: 48rem;
  margin-left: auto;
  margin-right: auto;
  text-align: center;
}

.panel-title {
  font-size: 1.25rem;
}

.panel-actions {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 0.5rem;
  font-size: 0.875rem;
}

.cta-band {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  padding: 2.5rem;
  border-radius: var(--radius-xl);
  background: linear-gradient(135deg, var(--primary) 0%, hsl(224 58% 20%) 45%, hsl(204 92% 50%) 120%);
  color: #fff;
  box-shadow: var(--shadow-xl);
}

.cta-band p {
  margin-top: 0.5rem;
  max-width: 42rem;
  font-size: 0.875rem;
  color: hsl(0 0% 100% / 0.8);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 7fr 5fr;
  align-items: start;
  gap: 1rem;
  margin-top: 2.5rem;
}

.contact-side {
  display: grid;
  gap: 1rem;
}

.contact-form form {
  display: grid;
  gap: 1rem;
}

.field-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.field label {
  font-size: 0.875rem;
  font-weight: 500;
}

.field input,
.field select,
.field textarea {
  display: block;
  width: 100%;
  margin-top: 0.5rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--background);
  font: inherit;
  font-size: 0.875rem;
  outline: none;
}

.field input:focus,
.field select:focus,
.field textarea:focus {
  box-shadow: 0 0 0 4px hsl(204 92% 50% / 0.22);
}

.field textarea {
  min-height: 8rem;
  resize: vertical;
}

.field [aria-invalid="true"] {
  border-color: var(--destructive);
}

.field-error {
  margin-top: 0.5rem;
  font-size: 0.75rem;
  color: var(--destructive);
}

.form-footer {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
}

.details {
  display: grid;
  gap: 0.75rem;
  margin-top: 1rem;
  font-size: 0.875rem;
}

.details a {
  color: var(--muted-foreground);
  text-decoration: none;
}

.hours {
  margin-top: 1.5rem;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: 1rem;
  background: var(--secondary);
}

.toast {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 100;
  max-width: 24rem;
  padding: 1rem 2.5rem 1rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  box-shadow: var(--shadow-xl);
}

.toast-title {
  font-size: 0.875rem;
  font-weight: 600;
}

.toast-body {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.toast-close {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  border: 0;
  background: none;
  font-size: 1.25rem;
  cursor: pointer;
  color: var(--muted-foreground);
}

/* Not found */
.not-found {
  flex-direction: column;
  align-items: flex-start;
  max-width: 36rem;
  margin: 4rem auto 0;
  padding: 2rem;
}

.not-found-title {
  font-size: 1.875rem;
}

/* Footer */
.footer {
  margin-top: 3rem;
  padding-bottom: 2rem;
}

.footer-inner {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-top: 1.5rem;
  border-top: 1px solid var(--border);
}

.footer-brand {
  font-size: 0.875rem;
  font-weight: 600;
}

.footer-tagline {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

.footer-links {
  display: flex;
  gap: 1rem;
  font-size: 0.875rem;
}

.footer-links a {
  color: var(--muted-foreground);
  text-decoration: none;
}

/* Responsive */
@media (max-width: 1024px) {
  .hero,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .grid-3 {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 720px) {
  .nav-links,
  .nav-quote {
    display: none;
  }

  .grid-3,
  .stats,
  .field-row {
    grid-template-columns: 1fr;
  }

  .hero-media img,
  .hero-media .hero-placeholder {
    height: 340px;
  }
}
"#;

const DEFAULT_JS: &str = r#"// Galaxy site runtime
(function() {
  'use strict';

  // Portfolio filter. Only applied in the browser when every item is on the page;
  // a server-filtered page falls back to following the pill links.
  const grid = document.querySelector('[data-portfolio-grid]');
  const pills = document.querySelectorAll('[data-filter]');

  if (grid && grid.hasAttribute('data-all-items')) {
    const cards = grid.querySelectorAll('[data-category]');
    const empty = document.querySelector('[data-portfolio-empty]');

    const apply = function(filter) {
      let shown = 0;
      cards.forEach(function(card) {
        const visible = filter === 'All' || card.dataset.category === filter;
        card.hidden = !visible;
        if (visible) shown++;
      });
      pills.forEach(function(pill) {
        pill.classList.toggle('active', pill.dataset.filter === filter);
      });
      if (empty) empty.hidden = shown > 0;
    };

    const resolve = function(name) {
      const wanted = (name || '').trim().toLowerCase();
      for (const pill of pills) {
        if (pill.dataset.filter.toLowerCase() === wanted) return pill.dataset.filter;
      }
      return 'All';
    };

    pills.forEach(function(pill) {
      pill.addEventListener('click', function(event) {
        event.preventDefault();
        const filter = pill.dataset.filter;
        apply(filter);
        const url = new URL(window.location.href);
        if (filter === 'All') {
          url.searchParams.delete('category');
        } else {
          url.searchParams.set('category', filter);
        }
        history.replaceState(null, '', url);
      });
    });

    apply(resolve(new URLSearchParams(window.location.search).get('category')));
  }

  // Contact form: the same rule table the server validates with.
  const form = document.querySelector('[data-contact-form]');
  const rulesEl = document.getElementById('contact-rules');

  if (form && rulesEl) {
    const rules = JSON.parse(rulesEl.textContent || '[]');
    const touched = new Set();
    const defaults = {};

    const checks = {
      min_length: function(rule, value) {
        return Array.from(value).length >= rule.min;
      },
      email: function(rule, value) {
        return !value.startsWith('.') && !value.includes('..') && new RegExp(rule.pattern).test(value);
      },
      one_of: function(rule, value) {
        return rule.options.indexOf(value) !== -1;
      }
    };

    const validateField = function(name) {
      const input = form.elements[name];
      if (!input) return null;
      for (const entry of rules) {
        if (entry.field !== name) continue;
        const check = checks[entry.rule.kind];
        if (check && !check(entry.rule, input.value)) return entry.message;
      }
      return null;
    };

    const show = function(name, message) {
      const slot = form.querySelector('[data-error-for="' + name + '"]');
      const input = form.elements[name];
      if (slot) {
        slot.textContent = message || '';
        slot.hidden = !message;
      }
      if (input) input.setAttribute('aria-invalid', message ? 'true' : 'false');
    };

    const fields = Array.from(new Set(rules.map(function(entry) { return entry.field; })));

    fields.forEach(function(name) {
      const input = form.elements[name];
      if (!input) return;
      if (input.tagName === 'SELECT') {
        const selected = input.querySelector('option[selected]');
        defaults[name] = selected ? selected.value : input.value;
      } else {
        defaults[name] = input.defaultValue;
      }
      input.addEventListener('blur', function() {
        touched.add(name);
        show(name, validateField(name));
      });
      input.addEventListener('input', function() {
        if (touched.has(name)) show(name, validateField(name));
      });
    });

    form.addEventListener('submit', function(event) {
      let valid = true;
      fields.forEach(function(name) {
        touched.add(name);
        const message = validateField(name);
        show(name, message);
        if (message) valid = false;
      });

      if (!valid) {
        event.preventDefault();
        return;
      }

      if (form.hasAttribute('data-local-submit')) {
        event.preventDefault();
        const values = {};
        fields.forEach(function(name) { values[name] = form.elements[name].value; });
        console.log('Contact form submission (not sent):', values);
        fields.forEach(function(name) {
          form.elements[name].value = defaults[name];
          show(name, null);
        });
        touched.clear();
        toast('Message ready to send',
          "This is a static site demo. Your message isn't being sent yet, but your details are captured in the browser.");
      }
    });
  }

  function toast(title, body) {
    const el = document.createElement('div');
    el.className = 'toast';
    el.setAttribute('role', 'status');
    el.setAttribute('data-toast', '');
    const heading = document.createElement('div');
    heading.className = 'toast-title';
    heading.textContent = title;
    const text = document.createElement('div');
    text.className = 'toast-body';
    text.textContent = body;
    const close = document.createElement('button');
    close.type = 'button';
    close.className = 'toast-close';
    close.setAttribute('data-toast-close', '');
    close.setAttribute('aria-label', 'Dismiss');
    close.textContent = '×';
    el.append(heading, text, close);
    document.body.appendChild(el);
    bindToast(el);
  }

  function bindToast(el) {
    const close = el.querySelector('[data-toast-close]');
    if (close) close.addEventListener('click', function() { el.remove(); });
    setTimeout(function() { el.remove(); }, 6000);
  }

  document.querySelectorAll('[data-toast]').forEach(bindToast);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains("--primary"));
        assert!(css.contains(".portfolio-card"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("data-portfolio-grid"));
        assert!(js.contains("contact-rules"));
        assert!(js.contains("min_length"));
    }

    #[test]
    fn local_submit_resets_to_rendered_defaults() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("form.elements[name].value = defaults[name];"));
        assert!(!js.contains("'Not sure'"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn minifies_site_theme() {
        let minified = AssetPipeline::minify_css(&AssetPipeline::generate_css()).unwrap();

        assert!(minified.len() < AssetPipeline::generate_css().len());
        assert!(minified.contains(".pill"));
    }
}
