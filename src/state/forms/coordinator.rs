//! Form state coordinator
//!
//! Owns the raw values, the set of fields the user has visited and the
//! per-field error messages for one form-filling session. Every error it
//! stores comes straight from [`crate::validation`].

use super::field::FieldName;
use super::field_set::{FieldSet, SubmittedRecord};
use crate::state::CountryDirectory;
use crate::validation;
use std::collections::{BTreeMap, BTreeSet};

/// Fields the user has left at least once
pub type TouchedSet = BTreeSet<FieldName>;

/// Per-field error messages; an absent key and an empty message both mean
/// the field has no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    /// Message for a field, `None` when it has no error
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn set(&mut self, field: FieldName, message: String) {
        self.0.insert(field, message);
    }

    /// Fields with a non-empty message, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }

    /// Number of fields carrying an error
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no field carries an error
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Coordinates values, touched state, errors and the country-dependent city list
#[derive(Debug, Clone)]
pub struct FormCoordinator {
    directory: CountryDirectory,
    fields: FieldSet,
    errors: ErrorMap,
    touched: TouchedSet,
}

impl FormCoordinator {
    pub fn new(directory: CountryDirectory) -> Self {
        Self {
            directory,
            fields: FieldSet::default(),
            errors: ErrorMap::default(),
            touched: TouchedSet::new(),
        }
    }

    /// Overwrite a field with what the user entered.
    ///
    /// Choosing a country always clears the city and picks up the dialing
    /// code of the new country; an unknown country leaves the code as it was.
    /// Only fields already touched are revalidated.
    pub fn update_field(&mut self, field: FieldName, raw: impl Into<String>) {
        let raw = raw.into();

        if field == FieldName::Country {
            self.fields.city.clear();
            if let Some(code) = self.directory.dialing_code(&raw) {
                self.fields.country_code = code.to_string();
            }
        }

        if self.touched.contains(&field) {
            self.errors.set(field, validation::rule_for(field)(&raw));
        }
        self.fields.set(field, raw);
        tracing::debug!(field = %field, "field updated");
    }

    /// Mark a field as visited and validate it
    pub fn touch(&mut self, field: FieldName, current_value: &str) {
        self.touched.insert(field);
        let message = validation::rule_for(field)(current_value);
        tracing::debug!(field = %field, valid = message.is_empty(), "field touched");
        self.errors.set(field, message);
    }

    /// Whether every field passes its rule and holds a non-blank value.
    ///
    /// Derived from the values on every call rather than from the stored
    /// error messages.
    pub fn is_ready(&self) -> bool {
        self.fields().iter().all(|(field, value)| {
            validation::rule_for(field)(value).is_empty() && !value.trim().is_empty()
        })
    }

    /// Validate everything and, when nothing fails, snapshot the values.
    ///
    /// Either way every field ends up touched and the stored errors reflect
    /// the full validation pass.
    pub fn submit(&mut self) -> Result<SubmittedRecord, ErrorMap> {
        let mut errors = ErrorMap::default();
        for (field, value) in self.fields.iter() {
            if let Err(err) = validation::validate_field(field, value) {
                errors.set(err.field, err.message);
            }
        }

        self.touched.extend(FieldName::ALL);
        self.errors = errors.clone();

        if !errors.is_empty() {
            tracing::info!(error_count = errors.len(), "submit rejected");
            return Err(errors);
        }

        tracing::info!("submit accepted");
        Ok(SubmittedRecord::new(self.fields.clone()))
    }

    /// Cities offered for a country, empty when the country is blank or unknown
    pub fn available_cities(&self, country: &str) -> &[String] {
        self.directory.cities(country)
    }

    /// Start a fresh session over the same directory
    pub fn reset(&mut self) {
        self.fields = FieldSet::default();
        self.errors = ErrorMap::default();
        self.touched.clear();
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors().get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched().contains(&field)
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn directory(&self) -> &CountryDirectory {
        &self.directory
    }
}

impl Default for FormCoordinator {
    fn default() -> Self {
        Self::new(CountryDirectory::default())
    }
}
