//! Field validation.
//!
//! Every form field is described by a [`FieldSpec`]: its identifier, how it
//! is rendered, and the ordered list of [`Rule`]s it must satisfy. Validation
//! walks the rules in order and reports the first failure as a
//! [`FieldError`] carrying the message shown next to the field.
//!
//! Rules other than [`Rule::Required`] only look at non-empty values, so an
//! optional field with a format rule may be left blank.
//!
//! # Example
//!
//! ```
//! use bandconnect::validation::{check_rules, Field, Rule};
//! use bandconnect::ErrorKind;
//!
//! let rules = [Rule::Required("Email is required"), Rule::Email("Invalid email address")];
//! assert!(check_rules(Field::Email, &rules, "ana@x.com", 2024).is_ok());
//!
//! let err = check_rules(Field::Email, &rules, "a@b", 2024).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::InvalidFormat);
//! ```

use std::collections::BTreeMap;

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ErrorKind, FieldError};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
});

/// Current calendar year, in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Whether `value` has a `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

// =============================================================================
// Fields
// =============================================================================

/// Identifier of a scalar draft field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    BandName,
    Email,
    Password,
    Phone,
    LocationCity,
    LocationState,
    Instrument,
    Experience,
    FormationYear,
    Influences,
    Bio,
}

impl Field {
    /// Multipart key the value is sent under.
    pub fn payload_key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::BandName => "bandName",
            Field::Email => "email",
            Field::Password => "password",
            Field::Phone => "phone",
            Field::LocationCity => "locationCity",
            Field::LocationState => "locationState",
            Field::Instrument => "instrument",
            Field::Experience => "experience",
            Field::FormationYear => "formationYear",
            Field::Influences => "influences",
            Field::Bio => "bio",
        }
    }
}

/// Options of a select input.
#[derive(Clone, Copy, Debug)]
pub enum SelectOptions {
    /// Value and label are the same string.
    Plain(&'static [&'static str]),
    /// `(value, label)` pairs.
    Labeled(&'static [(&'static str, &'static str)]),
}

impl SelectOptions {
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            SelectOptions::Plain(values) => values.iter().map(|v| (*v, *v)).collect(),
            SelectOptions::Labeled(pairs) => pairs.to_vec(),
        }
    }
}

/// How a field is rendered.
#[derive(Clone, Copy, Debug)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Tel,
    Number,
    TextArea { rows: u32 },
    Select { prompt: &'static str, options: SelectOptions },
}

/// A field, its rendering and its rules.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// Check `value` against this field's rules.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        check_rules(self.field, self.rules, value, current_year())
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(_)))
    }
}

// =============================================================================
// Rules
// =============================================================================

/// A single constraint with the message shown when it fails.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Value must not be blank.
    Required(&'static str),
    /// Value must look like `local@domain.tld`.
    Email(&'static str),
    /// At least this many characters.
    MinLen(usize, &'static str),
    /// At most this many characters.
    MaxLen(usize, &'static str),
    /// Integer year in `[min, current year]`.
    Year {
        min: i32,
        invalid: &'static str,
        future: &'static str,
    },
    /// Value must be one of a fixed list (an empty or foreign pick counts as missing).
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    /// Check one rule. `current_year` bounds [`Rule::Year`].
    pub fn check(&self, field: Field, value: &str, current_year: i32) -> Result<(), FieldError> {
        let trimmed = value.trim();
        let fail = |kind, message: &str| Err(FieldError::new(field, kind, message));

        match *self {
            Rule::Required(message) => {
                if trimmed.is_empty() {
                    return fail(ErrorKind::Required, message);
                }
            }
            _ if trimmed.is_empty() => {}
            Rule::Email(message) => {
                if !is_valid_email(trimmed) {
                    return fail(ErrorKind::InvalidFormat, message);
                }
            }
            Rule::MinLen(min, message) => {
                if value.chars().count() < min {
                    return fail(ErrorKind::TooShort, message);
                }
            }
            Rule::MaxLen(max, message) => {
                if value.chars().count() > max {
                    return fail(ErrorKind::TooLong, message);
                }
            }
            Rule::Year { min, invalid, future } => match trimmed.parse::<i32>() {
                Ok(year) if year > current_year => return fail(ErrorKind::OutOfRange, future),
                Ok(year) if year >= min => {}
                _ => return fail(ErrorKind::OutOfRange, invalid),
            },
            Rule::OneOf(allowed, message) => {
                if !allowed.contains(&trimmed) {
                    return fail(ErrorKind::Required, message);
                }
            }
        }
        Ok(())
    }
}

/// Check `value` against `rules` in order, returning the first failure.
pub fn check_rules(
    field: Field,
    rules: &[Rule],
    value: &str,
    current_year: i32,
) -> Result<(), FieldError> {
    rules
        .iter()
        .try_for_each(|rule| rule.check(field, value, current_year))
}

// =============================================================================
// Error Collection
// =============================================================================

/// Field errors of a draft, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
