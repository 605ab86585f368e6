//! Raw registration values and the snapshot taken on submit

use super::field::FieldName;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static AADHAR_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})([0-9]{4})([0-9]{4})").expect("aadhar grouping pattern compiles")
});

/// Every registration attribute as the user typed it.
///
/// All eleven values are always present; an unanswered field is an empty
/// string, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub country_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan_number: String,
    pub aadhar_number: String,
}

impl FieldSet {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::CountryCode => &self.country_code,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Country => &self.country,
            FieldName::City => &self.city,
            FieldName::PanNumber => &self.pan_number,
            FieldName::AadharNumber => &self.aadhar_number,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::CountryCode => &mut self.country_code,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Country => &mut self.country,
            FieldName::City => &mut self.city,
            FieldName::PanNumber => &mut self.pan_number,
            FieldName::AadharNumber => &mut self.aadhar_number,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        *self.get_mut(field) = value;
    }

    /// `(field, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Immutable snapshot of a successfully submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedRecord(FieldSet);

impl SubmittedRecord {
    pub(crate) fn new(fields: FieldSet) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &FieldSet {
        &self.0
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(field)
    }

    /// One bullet per password character
    pub fn masked_password(&self) -> String {
        "•".repeat(self.0.password.chars().count())
    }

    /// Dialing code and number, e.g. `+91 9876543210`
    pub fn display_phone(&self) -> String {
        format!("{} {}", self.0.country_code, self.0.phone_number)
    }

    pub fn display_pan(&self) -> String {
        self.0.pan_number.to_uppercase()
    }

    /// Aadhar number split into groups of four when it holds a 12-digit run
    pub fn display_aadhar(&self) -> String {
        AADHAR_GROUPS
            .replacen(&self.0.aadhar_number, 1, "$1 $2 $3")
            .into_owned()
    }

    /// Plain-text rendition of the confirmation details, with the password masked
    pub fn summary(&self) -> String {
        let f = self.fields();
        let lines = [
            "Submitted Details".to_string(),
            String::new(),
            "Personal Information".to_string(),
            format!("  First Name: {}", f.first_name),
            format!("  Last Name: {}", f.last_name),
            format!("  Username: {}", f.username),
            format!("  Email: {}", f.email),
            format!("  Password: {}", self.masked_password()),
            String::new(),
            "Contact & Location".to_string(),
            format!("  Phone Number: {}", self.display_phone()),
            format!("  Country: {}", f.country),
            format!("  City: {}", f.city),
            String::new(),
            "Identity Documents".to_string(),
            format!("  PAN Number: {}", self.display_pan()),
            format!("  Aadhar Number: {}", self.display_aadhar()),
        ];
        lines.join("\n")
    }
}

#[cfg(test)]
impl SubmittedRecord {
    /// A fully valid registration used across tests
    pub(crate) fn sample() -> Self {
        Self::new(FieldSet {
            first_name: "Amit".to_string(),
            last_name: "Shah".to_string(),
            username: "amit_s".to_string(),
            email: "amit@example.com".to_string(),
            password: "Passw0rd!".to_string(),
            country_code: "+91".to_string(),
            phone_number: "9876543210".to_string(),
            country: "India".to_string(),
            city: "Pune".to_string(),
            pan_number: "ABCDE1234F".to_string(),
            aadhar_number: "123456789012".to_string(),
        })
    }
}
