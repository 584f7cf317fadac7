//! Contact form model and validation.
//!
//! Validation is driven by [`RULES`], one rule per field. The table is serializable so the
//! browser script can apply exactly the same checks to statically built pages.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The service a visitor is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Service {
    Cabinets,
    Countertops,
    #[serde(rename = "Basement finish out")]
    BasementFinishOut,
    #[default]
    #[serde(rename = "Not sure")]
    NotSure,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Cabinets,
        Service::Countertops,
        Service::BasementFinishOut,
        Service::NotSure,
    ];

    /// Value submitted by the form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Service::Cabinets => "Cabinets",
            Service::Countertops => "Countertops",
            Service::BasementFinishOut => "Basement finish out",
            Service::NotSure => "Not sure",
        }
    }

    /// Text shown in the service picker.
    pub fn label(&self) -> &'static str {
        match self {
            Service::Cabinets => "Kitchen cabinet renovations",
            Service::Countertops => "Countertops",
            Service::BasementFinishOut => "Basement finish out",
            Service::NotSure => "Not sure yet",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages, ordered by field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw form values as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl Default for ContactFormInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: Service::default().as_str().to_string(),
            message: String::new(),
        }
    }
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub message: String,
}

/// A constraint on a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// At least `min` characters
    MinLength { min: usize },

    /// Email address syntax
    Email { pattern: &'static str },

    /// One of a fixed set of values
    OneOf { options: &'static [&'static str] },
}

/// Local part, `@`, dot-separated domain labels and a top-level label of 2+ letters.
/// A leading dot and consecutive dots in the local part are rejected separately.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

/// Form values of [`Service::ALL`], in order.
const SERVICE_OPTIONS: [&str; Service::ALL.len()] = {
    let mut options = [""; Service::ALL.len()];
    let mut i = 0;
    while i < options.len() {
        options[i] = Service::ALL[i].as_str();
        i += 1;
    }
    options
};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

impl Rule {
    /// Check a value against this rule.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLength { min } => value.chars().count() >= *min,
            Rule::Email { .. } => {
                !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
            }
            Rule::OneOf { options } => options.contains(&value),
        }
    }
}

/// A rule bound to a field, with the message shown when it fails.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

/// The contact form schema.
pub const RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Name,
        rule: Rule::MinLength { min: 2 },
        message: "Please enter your name",
    },
    FieldRule {
        field: Field::Email,
        rule: Rule::Email {
            pattern: EMAIL_PATTERN,
        },
        message: "Please enter a valid email",
    },
    FieldRule {
        field: Field::Phone,
        rule: Rule::MinLength { min: 10 },
        message: "Please enter your phone number",
    },
    FieldRule {
        field: Field::Service,
        rule: Rule::OneOf {
            options: &SERVICE_OPTIONS,
        },
        message: "Please choose a service",
    },
    FieldRule {
        field: Field::Message,
        rule: Rule::MinLength { min: 10 },
        message: "Please add a bit more detail",
    },
];

/// Validate one field, returning its error message if it fails.
pub fn validate_field(field: Field, input: &ContactFormInput) -> Option<String> {
    let value = input.get(field);
    RULES
        .iter()
        .filter(|r| r.field == field)
        .find(|r| !r.rule.check(value))
        .map(|r| r.message.to_string())
}

fn rule_message(field: Field) -> &'static str {
    RULES
        .iter()
        .find(|r| r.field == field)
        .map_or("Invalid value", |r| r.message)
}

/// Validate every field.
pub fn validate(input: &ContactFormInput) -> Result<ContactRequest, FieldErrors> {
    let errors: FieldErrors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, input).map(|msg| (field, msg)))
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    // The service rule only accepts `Service::ALL` values
    let service = input.service.parse().map_err(|_| {
        FieldErrors::from([(Field::Service, rule_message(Field::Service).to_string())])
    })?;

    Ok(ContactRequest {
        name: input.name.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        service,
        message: input.message.clone(),
    })
}

/// Contact form state: current values, touched fields and visible errors.
///
/// Fields are validated once touched (on blur) and re-validated as the visitor types.
/// A submit touches every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactFormInput,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
}

impl ContactForm {
    /// A fresh form with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form holding `values` with nothing touched yet.
    pub fn with_values(values: ContactFormInput) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &ContactFormInput {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Record a keystroke or selection.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.is_touched(field) {
            self.revalidate(field);
        }
    }

    /// The field lost focus.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validate every field. On success the form resets and the request is returned.
    pub fn submit(&mut self) -> Result<ContactRequest, FieldErrors> {
        self.touched.extend(Field::ALL);

        match validate(&self.values) {
            Ok(request) => {
                self.reset();
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Restore default values and clear touched fields and errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(field, &self.values) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_input() -> ContactFormInput {
        ContactFormInput {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "587-555-0100".to_string(),
            service: "Countertops".to_string(),
            message: "Quartz counters for a galley kitchen".to_string(),
        }
    }

    fn errors_for(input: &ContactFormInput) -> Vec<Field> {
        match validate(input) {
            Ok(_) => vec![],
            Err(errors) => errors.keys().copied().collect(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let request = validate(&valid_input()).unwrap();

        assert_eq!(request.name, "Dana Reyes");
        assert_eq!(request.service, Service::Countertops);
    }

    #[test]
    fn short_name_only_flags_name() {
        let mut input = valid_input();
        input.name = "D".to_string();

        let errors = validate(&input).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Name], "Please enter your name");
    }

    #[test]
    fn checks_email_syntax() {
        let mut input = valid_input();

        for bad in ["not-an-email", "a@b", "a@b.c", ".a@b.com", "a..b@c.com", "a@.com", ""] {
            input.email = bad.to_string();
            assert_eq!(errors_for(&input), vec![Field::Email], "{bad}");
        }

        for good in ["a@b.com", "first.last+tag@mail.example.ca", "o'neil@site.io"] {
            input.email = good.to_string();
            assert!(errors_for(&input).is_empty(), "{good}");
        }
    }

    #[test]
    fn phone_needs_ten_characters_of_anything() {
        let mut input = valid_input();

        input.phone = "000000000".to_string();
        assert_eq!(errors_for(&input), vec![Field::Phone]);

        input.phone = "0000000000".to_string();
        assert!(errors_for(&input).is_empty());

        input.phone = "call me ok".to_string();
        assert!(errors_for(&input).is_empty());
    }

    #[test]
    fn message_needs_ten_characters() {
        let mut input = valid_input();

        input.message = "123456789".to_string();
        assert_eq!(errors_for(&input), vec![Field::Message]);

        input.message = "1234567890".to_string();
        assert!(errors_for(&input).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut input = valid_input();
        input.name = "Zoë".to_string();
        input.message = "Ébénisterie".to_string();

        assert!(errors_for(&input).is_empty());

        input.name = "é".to_string();
        assert_eq!(errors_for(&input), vec![Field::Name]);
    }

    #[test]
    fn rejects_unknown_service() {
        let mut input = valid_input();
        input.service = "Roofing".to_string();

        let errors = validate(&input).unwrap_err();

        assert_eq!(errors[&Field::Service], "Please choose a service");
    }

    #[test]
    fn service_rule_accepts_exactly_the_known_services() {
        let rule = RULES.iter().find(|r| r.field == Field::Service).unwrap();

        for service in Service::ALL {
            assert!(rule.rule.check(service.as_str()), "{service}");
            assert_eq!(service.as_str().parse::<Service>(), Ok(service));
        }
        assert_eq!(SERVICE_OPTIONS.len(), Service::ALL.len());
        assert!(!rule.rule.check("Kitchen cabinet renovations"));
        assert_eq!(rule_message(Field::Service), "Please choose a service");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&ContactFormInput::default()).unwrap_err();

        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email, Field::Phone, Field::Message]
        );
    }

    #[test]
    fn defaults_match_a_fresh_form() {
        let form = ContactForm::new();

        assert_eq!(form.values().service, "Not sure");
        assert_eq!(form.values().name, "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn blur_validates_only_that_field() {
        let mut form = ContactForm::new();

        form.blur(Field::Name);

        assert_eq!(form.error(Field::Name), Some("Please enter your name"));
        assert_eq!(form.error(Field::Email), None);
        assert!(form.is_touched(Field::Name));
        assert!(!form.is_touched(Field::Email));
    }

    #[test]
    fn typing_revalidates_touched_fields_only() {
        let mut form = ContactForm::new();

        form.set(Field::Email, "nope");
        assert_eq!(form.error(Field::Email), None);

        form.blur(Field::Email);
        assert_eq!(form.error(Field::Email), Some("Please enter a valid email"));

        form.set(Field::Email, "a@b.com");
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn failed_submit_keeps_values_and_shows_errors() {
        let mut form = ContactForm::with_values(valid_input());
        form.set(Field::Phone, "123");

        let errors = form.submit().unwrap_err();

        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Phone]);
        assert_eq!(form.values().phone, "123");
        assert_eq!(form.error(Field::Phone), Some("Please enter your phone number"));
        assert!(Field::ALL.iter().all(|f| form.is_touched(*f)));
    }

    #[test]
    fn successful_submit_resets_to_defaults() {
        let mut form = ContactForm::new();
        let input = valid_input();
        for field in Field::ALL {
            form.set(field, input.get(field));
            form.blur(field);
        }

        let request = form.submit().unwrap();

        assert_eq!(request.email, "dana@example.com");
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn rules_serialize_with_kind_tags() {
        let yaml = serde_yaml::to_string(&RULES[1]).unwrap();

        assert!(yaml.contains("field: email"));
        assert!(yaml.contains("kind: email"));
        assert!(yaml.contains("Please enter a valid email"));
    }
}
