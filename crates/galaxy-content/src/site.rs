//! Business copy shown across the pages.

use serde::{Deserialize, Serialize};

/// A service offering on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A short fact shown under the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Site-wide copy. Any key missing from `site.yaml` keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Brand name as shown in the header
    pub name: String,

    /// Legal suffix shown under the brand name
    pub suffix: String,

    /// Single letter used as the brand mark
    pub mark: String,

    /// One-line summary of the offerings
    pub tagline: String,

    /// Phone number as displayed
    pub phone: String,

    /// Phone number for `tel:` links
    pub phone_link: String,

    pub email: String,

    /// Opening days
    pub hours_days: String,

    /// Opening times
    pub hours_times: String,

    pub hero_title: String,
    pub hero_subtitle: String,

    /// Path of the hero image, relative to the public directory
    pub hero_image: String,
    pub hero_image_alt: String,
    pub hero_scope: String,
    pub rating: String,

    pub services: Vec<Offering>,
    pub stats: Vec<Stat>,

    /// Suggestions listed next to the contact form
    pub checklist: Vec<String>,

    /// Reply time note under the contact form
    pub response_note: String,
}

impl Site {
    /// Full brand, e.g. for page titles and the footer.
    pub fn full_name(&self) -> String {
        if self.suffix.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.suffix)
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: "Galaxy Kitchen Cabinets".to_string(),
            suffix: "Ltd.".to_string(),
            mark: "G".to_string(),
            tagline: "Cabinets • Countertops • Basement finish outs".to_string(),
            phone: "+1 (587) 703-1010".to_string(),
            phone_link: "+1-587-703-1010".to_string(),
            email: "info@galaxycabinetsltd.com".to_string(),
            hours_days: "Monday - Saturday".to_string(),
            hours_times: "8:00 AM - 5:00 PM".to_string(),
            hero_title: "Renovations that feel custom—because they are.".to_string(),
            hero_subtitle: "Galaxy Kitchen Cabinets Ltd. delivers clean installs, thoughtful \
                            details, and finishes that hold up. We specialize in kitchen cabinet \
                            renovations, countertops, and basement finish outs."
                .to_string(),
            hero_image: "/images/galaxy-hero-kitchen.png".to_string(),
            hero_image_alt: "Modern kitchen renovation".to_string(),
            hero_scope: "Cabinet updates, counters, trim details, clean finish work".to_string(),
            rating: "Trusted by homeowners for tidy, on-time work".to_string(),
            services: vec![
                Offering {
                    title: "Kitchen Cabinet Renovations".to_string(),
                    description: "Refresh, reface, or rebuild—tailored layouts, durable \
                                  finishes, and clean installs."
                        .to_string(),
                    bullets: strings(&[
                        "Design guidance",
                        "Soft-close hardware",
                        "Clean, protected jobsite",
                    ]),
                },
                Offering {
                    title: "Countertops".to_string(),
                    description: "Quartz, granite, and laminate options with precise \
                                  templating and seamless fit."
                        .to_string(),
                    bullets: strings(&[
                        "Template & install",
                        "Backsplash-ready edges",
                        "Care guidance",
                    ]),
                },
                Offering {
                    title: "Basement Finish Outs".to_string(),
                    description: "From framing to final trim—comfortable spaces that feel \
                                  like the rest of your home."
                        .to_string(),
                    bullets: strings(&[
                        "Drywall & paint",
                        "Built-ins & storage",
                        "Detail finishing",
                    ]),
                },
            ],
            stats: vec![
                Stat {
                    label: "Project types".to_string(),
                    value: "Kitchens • Basements • Tops".to_string(),
                },
                Stat {
                    label: "Focus".to_string(),
                    value: "Craftsmanship & clean lines".to_string(),
                },
                Stat {
                    label: "Service".to_string(),
                    value: "Clear quotes, tight timelines".to_string(),
                },
            ],
            checklist: strings(&[
                "Photos of the space (optional)",
                "Rough measurements (if you have them)",
                "Ideal timeline",
                "Material preferences",
            ]),
            response_note: "We'll respond within 1–2 business days.".to_string(),
        }
    }
}
