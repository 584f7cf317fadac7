//! Page rendering and static site generation for the Galaxy site.
//!
//! Renders the home, portfolio, contact and not-found pages from loaded content and
//! writes them, with the stylesheet and browser script, to a static output directory.

pub mod assets;
pub mod builder;
pub mod pages;
pub mod routes;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use pages::{Notice, RenderError, RenderOptions, SiteRenderer};
pub use routes::Page;
