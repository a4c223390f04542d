use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::FieldErrors;

/// Raw field values as parsed from the request body.
pub type RawValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text with a minimum trimmed length.
    Text { min_len: usize },
    /// Must look like `local@domain`.
    Email,
    /// Must be one of a fixed set of tokens.
    Choice { allowed: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Message shown when the rule fails, matching the page copy.
    pub message: &'static str,
}

/// Ordered field rules for one form variant.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub fields: &'static [FieldRule],
}

/// Validated, trimmed values in schema order. Optional fields left empty
/// are absent rather than present-but-empty.
#[derive(Debug, Clone, Default)]
pub struct ValidatedValues(Vec<(&'static str, String)>);

impl ValidatedValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FormSchema {
    /// Validate raw values against every rule. Synchronous, no side effects.
    /// Returns all failing fields at once so they can be rendered inline.
    pub fn validate(&self, raw: &RawValues) -> Result<ValidatedValues, FieldErrors> {
        let mut values = Vec::new();
        let mut errors = FieldErrors::new();

        for rule in self.fields {
            let trimmed = raw.get(rule.name).map(|v| v.trim()).unwrap_or("");

            if trimmed.is_empty() {
                if rule.required {
                    errors.insert(rule.name.to_string(), rule.message.to_string());
                }
                // Optional and empty: normalized to absent.
                continue;
            }

            let ok = match rule.kind {
                FieldKind::Text { min_len } => trimmed.chars().count() >= min_len,
                FieldKind::Email => is_valid_email(trimmed),
                FieldKind::Choice { allowed } => allowed.contains(&trimmed),
            };

            if ok {
                values.push((rule.name, trimmed.to_string()));
            } else {
                errors.insert(rule.name.to_string(), rule.message.to_string());
            }
        }

        if errors.is_empty() {
            Ok(ValidatedValues(values))
        } else {
            Err(errors)
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}
