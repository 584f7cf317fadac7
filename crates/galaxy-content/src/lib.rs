//! Site content, portfolio filtering and contact form validation.
//!
//! This crate holds everything the pages render that is not markup: the business copy,
//! the portfolio catalog and its category filter, and the contact form rule table.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod site;

pub use catalog::{builtin_items, filter_items, Category, CategoryFilter, FilterError, PortfolioItem};
pub use contact::{
    validate, validate_field, ContactForm, ContactFormInput, ContactRequest, Field, FieldErrors,
    FieldRule, Rule, Service, RULES,
};
pub use content::{Content, ContentError};
pub use site::{Offering, Site, Stat};
