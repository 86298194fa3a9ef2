//! # Cross-Field Rules
//!
//! Invariants a per-field JSON Schema cannot express, checked after a
//! variant's schema has accepted the document. A variant only matches when
//! its schema and all of its rules hold.

use serde_json::Value;

use crate::validate::{Violation, ViolationKind};

/// A post-validation rule spanning several fields of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// The `arrows` array holds exactly `link` elements.
    ArrowCountMatchesLink {
        /// Field holding the link rating.
        link: &'static str,
        /// Field holding the arrow list.
        arrows: &'static str,
    },
    /// No element of the array appears twice.
    UniqueItems {
        /// Field holding the array.
        field: &'static str,
    },
    /// Either both fields are present or neither is.
    BothOrNeither {
        /// First field.
        first: &'static str,
        /// Second field.
        second: &'static str,
    },
    /// If `field` is present then `companion` is present.
    Requires {
        /// Triggering field.
        field: &'static str,
        /// Field that must accompany it.
        companion: &'static str,
    },
}

impl CrossFieldRule {
    /// Stable rule name used in violations.
    pub fn name(&self) -> String {
        match self {
            Self::ArrowCountMatchesLink { link, arrows } => format!("{arrows}-count-matches-{link}"),
            Self::UniqueItems { field } => format!("{field}-unique"),
            Self::BothOrNeither { first, second } => format!("{first}-with-{second}"),
            Self::Requires { field, companion } => format!("{field}-requires-{companion}"),
        }
    }

    /// Check the rule against a document the variant schema already
    /// accepted. Fields of an unexpected type are left to the schema, except
    /// a link rating, which must read as a number.
    pub fn check(&self, document: &Value) -> Option<Violation> {
        match self {
            Self::ArrowCountMatchesLink { link, arrows } => {
                let count = document.get(*arrows)?.as_array()?.len();
                match document.get(*link).and_then(Value::as_f64) {
                    Some(rating) if rating == count as f64 => None,
                    Some(rating) => Some(self.violation(
                        arrows,
                        format!("{link} is {rating} but {arrows} has {count} element(s)"),
                    )),
                    None => Some(self.violation(link, format!("{link} is not a number"))),
                }
            }
            Self::UniqueItems { field } => {
                let items = document.get(*field)?.as_array()?;
                items
                    .iter()
                    .enumerate()
                    .find(|(i, item)| items[..*i].contains(*item))
                    .map(|(_, item)| self.violation(field, format!("{item} appears more than once in {field}")))
            }
            Self::BothOrNeither { first, second } => {
                let has_first = document.get(*first).is_some();
                let has_second = document.get(*second).is_some();
                match (has_first, has_second) {
                    (true, false) => Some(self.violation(first, format!("{first} is present without {second}"))),
                    (false, true) => Some(self.violation(second, format!("{second} is present without {first}"))),
                    _ => None,
                }
            }
            Self::Requires { field, companion } => {
                let missing = document.get(*field).is_some() && document.get(*companion).is_none();
                missing.then(|| self.violation(field, format!("{field} is present without {companion}")))
            }
        }
    }

    fn violation(&self, field: &str, message: String) -> Violation {
        Violation {
            instance_path: format!("/{field}"),
            schema_path: String::new(),
            kind: ViolationKind::CrossField { rule: self.name() },
            message,
        }
    }
}
